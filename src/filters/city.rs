use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Cities listings can be filtered by.
#[derive(Deserialize, Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum City {
    Enschede,
    Amsterdam,
    Utrecht,
    Rotterdam,
    #[serde(rename = "the hague")]
    TheHague,
}

impl City {
    /// All cities in the order they are offered to the user.
    pub const ALL: [City; 5] = [
        City::Enschede,
        City::Amsterdam,
        City::Utrecht,
        City::Rotterdam,
        City::TheHague,
    ];

    /// Lower-case value used in the query string.
    pub fn as_str(&self) -> &'static str {
        match self {
            City::Enschede => "enschede",
            City::Amsterdam => "amsterdam",
            City::Utrecht => "utrecht",
            City::Rotterdam => "rotterdam",
            City::TheHague => "the hague",
        }
    }

    /// Human readable city name, matches the `locations.city` column.
    pub fn label(&self) -> &'static str {
        match self {
            City::Enschede => "Enschede",
            City::Amsterdam => "Amsterdam",
            City::Utrecht => "Utrecht",
            City::Rotterdam => "Rotterdam",
            City::TheHague => "The Hague",
        }
    }
}

impl FromStr for City {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        City::ALL
            .into_iter()
            .find(|city| city.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| anyhow::anyhow!("Unknown city `{value}`."))
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
