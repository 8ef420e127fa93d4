mod api_ext;
mod database_ext;
mod furnished_type;
mod house_type;
mod location;
mod new_property;
mod property;
mod property_id;
mod property_image;
mod property_with_details;
mod rent_details;
mod visibility_status;

pub use self::{
    furnished_type::FurnishedType,
    house_type::HouseType,
    location::Location,
    new_property::{NewProperty, NewPropertyForm},
    property::Property,
    property_id::PropertyId,
    property_image::PropertyImage,
    property_with_details::PropertyWithDetails,
    rent_details::RentDetails,
    visibility_status::VisibilityStatus,
};
