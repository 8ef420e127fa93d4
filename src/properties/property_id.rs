use serde::{Deserialize, Serialize};
use std::{fmt, ops::Deref, str::FromStr};
use uuid::Uuid;

/// Represents unique identifier of the property listing.
#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Clone, Copy, Hash)]
#[serde(transparent)]
pub struct PropertyId(Uuid);

impl PropertyId {
    /// Creates a new unique, time-ordered property ID.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for PropertyId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for PropertyId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl FromStr for PropertyId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Deref for PropertyId {
    type Target = Uuid;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
