use crate::{
    error::Error as RoomiesError,
    properties::{FurnishedType, Location, PropertyId, RentDetails, VisibilityStatus},
    users::UserId,
};
use serde::Deserialize;
use time::OffsetDateTime;
use url::Url;
use uuid::Uuid;

const DEFAULT_CURRENCY: &str = "EUR";
/// Amounts and counts are stored in `INTEGER` columns.
const MAX_STORED_VALUE: u32 = i32::MAX.unsigned_abs();

/// Listing form submitted by a landlord. All fields are optional here, validation happens when
/// the form is converted into [`NewProperty`].
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewPropertyForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub house_type_id: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub rent_amount: Option<String>,
    pub security_deposit: Option<String>,
    pub currency: Option<String>,
    pub is_shared: Option<String>,
    pub shared_with: Option<String>,
    pub is_furnished: Option<String>,
    pub furnished_type: Option<String>,
    pub pet_friendly: Option<String>,
    pub utilities_included: Option<String>,
    pub parking_available: Option<String>,
    pub image_url: Option<String>,
}

/// Validated property listing ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProperty {
    pub id: PropertyId,
    pub landlord_id: UserId,
    pub title: String,
    pub description: String,
    pub house_type_id: Uuid,
    pub location: Location,
    pub rent_details: RentDetails,
    pub is_shared: bool,
    pub shared_with: Option<u32>,
    pub is_furnished: bool,
    pub furnished_type: FurnishedType,
    pub visibility_status: VisibilityStatus,
    pub pet_friendly: bool,
    pub utilities_included: bool,
    pub parking_available: bool,
    pub image_url: Option<Url>,
    pub created_at: OffsetDateTime,
}

impl NewPropertyForm {
    /// Validates the form and turns it into a listing owned by `landlord_id`.
    pub fn into_new_property(
        self,
        landlord_id: UserId,
        created_at: OffsetDateTime,
    ) -> anyhow::Result<NewProperty> {
        let (Some(title), Some(description), Some(rent_amount), Some(furnished_type)) = (
            non_empty(self.title),
            non_empty(self.description),
            self.rent_amount.as_deref().and_then(parse_amount),
            non_empty(self.furnished_type),
        ) else {
            return Err(RoomiesError::client("Please fill in all required fields correctly.").into());
        };

        let furnished_type = furnished_type
            .parse::<FurnishedType>()
            .map_err(RoomiesError::client_with_root_cause)?;

        let house_type_id = non_empty(self.house_type_id)
            .ok_or_else(|| RoomiesError::client("House type is required."))?
            .parse::<Uuid>()
            .map_err(|err| {
                RoomiesError::client_with_root_cause(
                    anyhow::Error::new(err).context("House type is not valid."),
                )
            })?;

        let (Some(address), Some(city), Some(postal_code), Some(country)) = (
            non_empty(self.address),
            non_empty(self.city),
            non_empty(self.postal_code),
            non_empty(self.country),
        ) else {
            return Err(RoomiesError::client("Address, city, postal code and country are required.").into());
        };

        let security_deposit = match non_empty(self.security_deposit) {
            Some(deposit) => parse_amount(&deposit)
                .ok_or_else(|| RoomiesError::client("Security deposit is not valid."))?,
            None => 0,
        };

        let shared_with = match non_empty(self.shared_with) {
            Some(shared_with) => Some(
                shared_with
                    .trim()
                    .parse::<u32>()
                    .ok()
                    .filter(|shared_with| *shared_with <= MAX_STORED_VALUE)
                    .ok_or_else(|| RoomiesError::client("Number of housemates is not valid."))?,
            ),
            None => None,
        };

        let image_url = match non_empty(self.image_url) {
            Some(image_url) => Some(Url::parse(&image_url).map_err(|err| {
                RoomiesError::client_with_root_cause(
                    anyhow::Error::new(err).context("Image URL is not valid."),
                )
            })?),
            None => None,
        };

        Ok(NewProperty {
            id: PropertyId::new(),
            landlord_id,
            title,
            description,
            house_type_id,
            location: Location {
                id: Uuid::now_v7(),
                address,
                city,
                state: non_empty(self.state).unwrap_or_default(),
                country,
                postal_code,
                latitude: None,
                longitude: None,
                nearby_amenities: None,
            },
            rent_details: RentDetails {
                id: Uuid::now_v7(),
                rent_amount,
                currency: non_empty(self.currency)
                    .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
                security_deposit,
                utility_costs: None,
                other_charges: None,
            },
            is_shared: is_true(&self.is_shared),
            shared_with,
            is_furnished: is_true(&self.is_furnished),
            furnished_type,
            visibility_status: VisibilityStatus::Listed,
            pet_friendly: is_true(&self.pet_friendly),
            utilities_included: is_true(&self.utilities_included),
            parking_available: is_true(&self.parking_available),
            image_url,
            created_at,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn is_true(value: &Option<String>) -> bool {
    value.as_deref() == Some("true")
}

/// Parses monetary amount rounded to whole units, at least one unit.
fn parse_amount(value: &str) -> Option<u32> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .map(f64::round)
        .filter(|amount| *amount >= 1.0 && *amount <= f64::from(MAX_STORED_VALUE))
        .map(|amount| amount as u32)
}
