use crate::properties::{
    HouseType, Location, Property, PropertyWithDetails, RentDetails,
};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(FromRow, Debug, Clone, PartialEq)]
pub(super) struct RawPropertyWithDetails {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub landlord_id: Uuid,
    pub is_shared: bool,
    pub shared_with: Option<i32>,
    pub is_furnished: bool,
    pub furnished_type: String,
    pub square_meters: Option<f64>,
    pub type_of_flooring: Option<String>,
    pub energy_efficiency_rating: Option<String>,
    pub visibility_status: String,
    pub utilities_included: bool,
    pub pet_friendly: bool,
    pub parking_available: bool,
    pub is_bathroom_shared: bool,
    pub is_kitchen_shared: bool,
    pub garden_available: bool,
    pub storage_room_available: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub house_type_id: Uuid,
    pub house_type_name: String,
    pub house_type_description: Option<String>,
    pub location_id: Uuid,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub nearby_amenities: Option<String>,
    pub rent_details_id: Uuid,
    pub rent_amount: i32,
    pub currency: String,
    pub security_deposit: i32,
    pub utility_costs: Option<i32>,
    pub other_charges: Option<i32>,
}

/// Converts a joined row into a property without images, those are fetched separately.
impl TryFrom<RawPropertyWithDetails> for PropertyWithDetails {
    type Error = anyhow::Error;

    fn try_from(raw: RawPropertyWithDetails) -> Result<Self, Self::Error> {
        Ok(PropertyWithDetails {
            property: Property {
                id: raw.id.into(),
                title: raw.title,
                description: raw.description,
                landlord_id: raw.landlord_id.into(),
                is_shared: raw.is_shared,
                shared_with: raw.shared_with.map(u32::try_from).transpose()?,
                is_furnished: raw.is_furnished,
                furnished_type: raw.furnished_type.parse()?,
                square_meters: raw.square_meters,
                type_of_flooring: raw.type_of_flooring,
                energy_efficiency_rating: raw.energy_efficiency_rating,
                visibility_status: raw.visibility_status.parse()?,
                utilities_included: raw.utilities_included,
                pet_friendly: raw.pet_friendly,
                parking_available: raw.parking_available,
                is_bathroom_shared: raw.is_bathroom_shared,
                is_kitchen_shared: raw.is_kitchen_shared,
                garden_available: raw.garden_available,
                storage_room_available: raw.storage_room_available,
                created_at: raw.created_at,
                updated_at: raw.updated_at,
            },
            house_type: HouseType {
                id: raw.house_type_id,
                name: raw.house_type_name,
                description: raw.house_type_description,
            },
            location: Location {
                id: raw.location_id,
                address: raw.address,
                city: raw.city,
                state: raw.state,
                country: raw.country,
                postal_code: raw.postal_code,
                latitude: raw.latitude,
                longitude: raw.longitude,
                nearby_amenities: raw.nearby_amenities,
            },
            rent_details: RentDetails {
                id: raw.rent_details_id,
                rent_amount: u32::try_from(raw.rent_amount)?,
                currency: raw.currency,
                security_deposit: u32::try_from(raw.security_deposit)?,
                utility_costs: raw.utility_costs.map(u32::try_from).transpose()?,
                other_charges: raw.other_charges.map(u32::try_from).transpose()?,
            },
            images: vec![],
        })
    }
}
