use crate::properties::PropertyImage;
use sqlx::FromRow;
use url::Url;
use uuid::Uuid;

#[derive(FromRow, Debug, Clone, PartialEq, Eq)]
pub(super) struct RawPropertyImage {
    pub id: Uuid,
    pub property_id: Uuid,
    pub image_url: String,
    pub is_primary: bool,
}

impl TryFrom<RawPropertyImage> for PropertyImage {
    type Error = anyhow::Error;

    fn try_from(raw: RawPropertyImage) -> Result<Self, Self::Error> {
        Ok(PropertyImage {
            id: raw.id,
            property_id: raw.property_id.into(),
            image_url: Url::parse(&raw.image_url)?,
            is_primary: raw.is_primary,
        })
    }
}
