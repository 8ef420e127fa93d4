use serde_derive::{Deserialize, Serialize};
use url::Url;

/// Configuration for the components that are deployed separately.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ComponentsConfig {
    /// The URL of the public Ory Kratos API.
    pub kratos_url: Url,
}

impl Default for ComponentsConfig {
    fn default() -> Self {
        Self {
            kratos_url: Url::parse("http://localhost:4433")
                .expect("Cannot parse Kratos URL parameter."),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ComponentsConfig;
    use insta::assert_toml_snapshot;
    use url::Url;

    #[test]
    fn serialization_and_default() {
        assert_toml_snapshot!(ComponentsConfig::default(), @"kratos_url = 'http://localhost:4433/'");
    }

    #[test]
    fn deserialization() -> anyhow::Result<()> {
        let config: ComponentsConfig = toml::from_str(
            r#"
        kratos_url = 'https://auth.roomies.dev/'
    "#,
        )?;

        assert_eq!(
            config,
            ComponentsConfig {
                kratos_url: Url::parse("https://auth.roomies.dev")?,
            }
        );

        Ok(())
    }
}
