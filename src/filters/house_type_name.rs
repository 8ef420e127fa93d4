use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Kinds of homes tenants can filter listings by, matches `house_types.name`.
#[derive(Deserialize, Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum HouseTypeName {
    Apartment,
    Studio,
    House,
    Room,
}

impl HouseTypeName {
    pub const ALL: [HouseTypeName; 4] = [
        HouseTypeName::Apartment,
        HouseTypeName::Studio,
        HouseTypeName::House,
        HouseTypeName::Room,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HouseTypeName::Apartment => "Apartment",
            HouseTypeName::Studio => "Studio",
            HouseTypeName::House => "House",
            HouseTypeName::Room => "Room",
        }
    }
}

impl FromStr for HouseTypeName {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        HouseTypeName::ALL
            .into_iter()
            .find(|house_type| house_type.as_str() == value)
            .ok_or_else(|| anyhow::anyhow!("Unknown house type `{value}`."))
    }
}

impl fmt::Display for HouseTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
