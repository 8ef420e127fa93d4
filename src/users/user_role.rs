use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Role the user currently acts in, the same account can switch between them.
#[derive(Deserialize, Serialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Tenant,
    Landlord,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Tenant => "tenant",
            UserRole::Landlord => "landlord",
        }
    }

    /// Returns the other role.
    pub fn toggle(self) -> Self {
        match self {
            UserRole::Tenant => UserRole::Landlord,
            UserRole::Landlord => UserRole::Tenant,
        }
    }

    /// Path of the dashboard for the role.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            UserRole::Tenant => "/tenant/dashboard",
            UserRole::Landlord => "/landlord/dashboard",
        }
    }
}

impl FromStr for UserRole {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "tenant" => Ok(UserRole::Tenant),
            "landlord" => Ok(UserRole::Landlord),
            value => Err(anyhow::anyhow!("Invalid user role value `{value}`.")),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::UserRole;

    #[test]
    fn default_and_toggle() {
        assert_eq!(UserRole::default(), UserRole::Tenant);
        assert_eq!(UserRole::Tenant.toggle(), UserRole::Landlord);
        assert_eq!(UserRole::Landlord.toggle(), UserRole::Tenant);
    }

    #[test]
    fn parsing() -> anyhow::Result<()> {
        assert_eq!("tenant".parse::<UserRole>()?, UserRole::Tenant);
        assert_eq!("landlord".parse::<UserRole>()?, UserRole::Landlord);
        assert!("admin".parse::<UserRole>().is_err());
        assert!("Landlord".parse::<UserRole>().is_err());

        Ok(())
    }

    #[test]
    fn serialization() -> anyhow::Result<()> {
        assert_eq!(serde_json::to_string(&UserRole::Landlord)?, r#""landlord""#);
        assert_eq!(UserRole::Tenant.dashboard_path(), "/tenant/dashboard");
        assert_eq!(UserRole::Landlord.dashboard_path(), "/landlord/dashboard");

        Ok(())
    }
}
