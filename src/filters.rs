mod city;
mod filter_edit;
mod filter_state;
mod filter_state_synchronizer;
mod filters_view;
mod house_type_name;
mod listing_predicate;
mod query_string;
mod rent_range;
mod selection;
mod viewport;

pub use self::{
    city::City,
    filter_edit::FilterEdit,
    filter_state::{
        CITY_PARAM, FURNISHED_TYPES_PARAM, FilterState, HOUSE_TYPES_PARAM,
        MAX_RENT_PARAM, MIN_RENT_PARAM, PARKING_AVAILABLE_PARAM, PET_FRIENDLY_PARAM,
        UTILITIES_INCLUDED_PARAM,
    },
    filter_state_synchronizer::FilterStateSynchronizer,
    filters_view::{FiltersPresentation, FiltersView},
    house_type_name::HouseTypeName,
    listing_predicate::ListingPredicate,
    query_string::QueryString,
    rent_range::RentRange,
    selection::Selection,
    viewport::{ResizeListeners, ResizeSubscription, ViewportClass},
};
