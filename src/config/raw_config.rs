use crate::config::{ComponentsConfig, DatabaseConfig, HttpConfig, SecurityConfig};
use figment::{Figment, Metadata, Profile, Provider, providers, providers::Format, value};
use serde_derive::{Deserialize, Serialize};
use url::Url;

/// Raw configuration structure that is used to read the configuration from the file.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RawConfig {
    /// Defines a TCP port to listen on.
    pub port: u16,
    /// External/public URL through which the service is being accessed.
    pub public_url: Url,
    /// Database configuration.
    pub db: DatabaseConfig,
    /// Session and role cookies configuration.
    pub security: SecurityConfig,
    /// Configuration for the components that are deployed separately.
    pub components: ComponentsConfig,
    /// Configuration for the outgoing HTTP requests.
    pub http: HttpConfig,
}

impl RawConfig {
    /// Reads the configuration from the file (TOML) and merges it with the default values and
    /// `ROOMIES_`-prefixed environment variables.
    pub fn read_from_file(path: &str) -> anyhow::Result<Self> {
        Ok(Figment::from(RawConfig::default())
            .merge(providers::Toml::file(path))
            .merge(providers::Env::prefixed("ROOMIES_").split("__"))
            .extract()?)
    }
}

impl Default for RawConfig {
    fn default() -> Self {
        let port = 7070;
        Self {
            port,
            public_url: Url::parse(&format!("http://localhost:{port}"))
                .expect("Cannot parse public URL parameter."),
            db: DatabaseConfig::default(),
            security: SecurityConfig::default(),
            components: ComponentsConfig::default(),
            http: HttpConfig::default(),
        }
    }
}

impl Provider for RawConfig {
    fn metadata(&self) -> Metadata {
        Metadata::named("Roomies main configuration")
    }

    fn data(&self) -> Result<value::Map<Profile, value::Dict>, figment::Error> {
        providers::Serialized::defaults(Self::default()).data()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::RawConfig;
    use insta::{assert_debug_snapshot, assert_toml_snapshot};
    use std::time::Duration;

    #[test]
    fn serialization_and_default() {
        assert_toml_snapshot!(RawConfig::default(), @r###"
        port = 7070
        public_url = 'http://localhost:7070/'

        [db]
        name = 'roomies'
        host = 'localhost'
        port = 5432
        username = 'postgres'
        max-connections = 10

        [security]
        session_cookie_name = 'id'
        role_cookie_name = 'role'

        [components]
        kratos_url = 'http://localhost:4433/'
        [http.client]
        timeout = 10000
        connect_timeout = 3000
        max_retries = 2
        "###);
    }

    #[test]
    fn deserialization() {
        let config: RawConfig = toml::from_str(
            r#"
        port = 8080
        public_url = 'https://roomies.dev/'

        [db]
        name = 'roomies'
        username = 'postgres'
        password = 'password'
        host = 'localhost'
        port = 5432
        max-connections = 20

        [security]
        session_cookie_name = 'ory_kratos_session'
        role_cookie_name = 'role'

        [components]
        kratos_url = 'https://auth.roomies.dev/'

        [http.client]
        timeout = 20000
    "#,
        )
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.public_url.as_str(), "https://roomies.dev/");
        assert_eq!(config.db.password.as_deref(), Some("password"));
        assert_eq!(config.db.max_connections, 20);
        assert_eq!(config.security.session_cookie_name, "ory_kratos_session");
        assert_eq!(
            config.components.kratos_url.as_str(),
            "https://auth.roomies.dev/"
        );
        assert_eq!(config.http.client.timeout, Duration::from_secs(20));
        assert_eq!(config.http.client.max_retries, 2);
    }

    #[test]
    fn read_from_file_merges_defaults() -> anyhow::Result<()> {
        figment::Jail::try_with(|jail| {
            jail.create_file(
                "roomies.toml",
                r#"
            port = 9090

            [components]
            kratos_url = 'https://auth.roomies.dev/'
        "#,
            )?;
            jail.set_env("ROOMIES_DB__NAME", "roomies_test");

            let config = RawConfig::read_from_file("roomies.toml")
                .map_err(|err| figment::Error::from(err.to_string()))?;
            assert_debug_snapshot!((config.port, config.db.name, config.components.kratos_url.as_str()), @r###"
            (
                9090,
                "roomies_test",
                "https://auth.roomies.dev/",
            )
            "###);

            Ok(())
        })?;

        Ok(())
    }
}
