use crate::properties::PropertyId;
use serde::Serialize;
use url::Url;
use uuid::Uuid;

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyImage {
    pub id: Uuid,
    #[serde(skip_serializing)]
    pub property_id: PropertyId,
    pub image_url: Url,
    pub is_primary: bool,
}
