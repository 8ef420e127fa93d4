use serde::Serialize;
use uuid::Uuid;

/// Address of the property.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: Uuid,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Free-form description of what's around (shops, transport, etc.).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearby_amenities: Option<String>,
}
