use crate::properties::HouseType;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(FromRow, Debug, Clone, PartialEq, Eq)]
pub(super) struct RawHouseType {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

impl From<RawHouseType> for HouseType {
    fn from(raw: RawHouseType) -> Self {
        HouseType {
            id: raw.id,
            name: raw.name,
            description: raw.description,
        }
    }
}
