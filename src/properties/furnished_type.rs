use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Describes how much furniture comes with the property.
#[derive(Deserialize, Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FurnishedType {
    Fully,
    Partially,
    Unfurnished,
}

impl FurnishedType {
    pub const ALL: [FurnishedType; 3] = [
        FurnishedType::Fully,
        FurnishedType::Partially,
        FurnishedType::Unfurnished,
    ];

    /// Value stored in the `furnished_type` column and used in the query string.
    pub fn as_str(&self) -> &'static str {
        match self {
            FurnishedType::Fully => "fully",
            FurnishedType::Partially => "partially",
            FurnishedType::Unfurnished => "unfurnished",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FurnishedType::Fully => "Fully Furnished",
            FurnishedType::Partially => "Partially Furnished",
            FurnishedType::Unfurnished => "Unfurnished",
        }
    }
}

impl FromStr for FurnishedType {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "fully" => Ok(FurnishedType::Fully),
            "partially" => Ok(FurnishedType::Partially),
            "unfurnished" => Ok(FurnishedType::Unfurnished),
            value => Err(anyhow::anyhow!("Invalid furnished type value `{value}`.")),
        }
    }
}

impl fmt::Display for FurnishedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
