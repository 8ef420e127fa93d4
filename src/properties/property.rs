use crate::{
    properties::{FurnishedType, PropertyId, VisibilityStatus},
    users::UserId,
};
use serde::Serialize;
use time::OffsetDateTime;

/// Rental property listing published by a landlord.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: PropertyId,
    pub title: String,
    pub description: String,
    pub landlord_id: UserId,
    pub is_shared: bool,
    /// Number of other tenants the property is shared with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_with: Option<u32>,
    pub is_furnished: bool,
    pub furnished_type: FurnishedType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub square_meters: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_of_flooring: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_efficiency_rating: Option<String>,
    pub visibility_status: VisibilityStatus,
    pub utilities_included: bool,
    pub pet_friendly: bool,
    pub parking_available: bool,
    pub is_bathroom_shared: bool,
    pub is_kitchen_shared: bool,
    pub garden_available: bool,
    pub storage_room_available: bool,
    #[serde(with = "time::serde::timestamp")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::timestamp")]
    pub updated_at: OffsetDateTime,
}
