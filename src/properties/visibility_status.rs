use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Describes whether the property is visible to tenants.
#[derive(Deserialize, Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityStatus {
    Listed,
    Draft,
    Archived,
}

impl VisibilityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisibilityStatus::Listed => "listed",
            VisibilityStatus::Draft => "draft",
            VisibilityStatus::Archived => "archived",
        }
    }
}

impl FromStr for VisibilityStatus {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "listed" => Ok(VisibilityStatus::Listed),
            "draft" => Ok(VisibilityStatus::Draft),
            "archived" => Ok(VisibilityStatus::Archived),
            value => Err(anyhow::anyhow!("Invalid visibility status value `{value}`.")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::VisibilityStatus;

    #[test]
    fn can_parse_visibility_status() -> anyhow::Result<()> {
        for status in [
            VisibilityStatus::Listed,
            VisibilityStatus::Draft,
            VisibilityStatus::Archived,
        ] {
            assert_eq!(status.as_str().parse::<VisibilityStatus>()?, status);
        }
        assert!("deleted".parse::<VisibilityStatus>().is_err());

        Ok(())
    }
}
