mod landing_get;
mod landlord_dashboard;
mod landlord_properties;
mod properties_filters;
mod properties_get;
mod properties_list;
mod properties_search;
mod status_get;
mod tenant_dashboard;
mod user_get;
mod user_role_set;

pub use self::{
    landing_get::landing_get,
    landlord_dashboard::{landlord_dashboard, landlord_property_get},
    landlord_properties::{landlord_properties_create, landlord_property_new},
    properties_filters::{properties_filters_apply, properties_filters_reset},
    properties_get::properties_get,
    properties_list::properties_list,
    properties_search::properties_search,
    status_get::status_get,
    tenant_dashboard::tenant_dashboard,
    user_get::user_get,
    user_role_set::user_role_set,
};
