use serde_derive::{Deserialize, Serialize};
use serde_with::{DurationMilliSeconds, serde_as};
use std::time::Duration;

/// Configuration of the outgoing HTTP requests (e.g. to the identity provider).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct HttpConfig {
    pub client: HttpClientConfig,
}

#[serde_as]
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct HttpClientConfig {
    /// Deadline for the whole request, including reading the response body.
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(default = "default_timeout")]
    pub timeout: Duration,
    /// Deadline for establishing a connection.
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: Duration,
    /// Number of retries with exponential backoff for transient failures, `0` disables retries.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            connect_timeout: default_connect_timeout(),
            max_retries: default_max_retries(),
        }
    }
}

const fn default_timeout() -> Duration {
    Duration::from_secs(10)
}

const fn default_connect_timeout() -> Duration {
    Duration::from_secs(3)
}

const fn default_max_retries() -> u32 {
    2
}

#[cfg(test)]
mod tests {
    use super::{HttpClientConfig, HttpConfig};
    use insta::assert_toml_snapshot;
    use std::time::Duration;

    #[test]
    fn serialization_and_default() {
        assert_toml_snapshot!(HttpConfig::default(), @r###"
        [client]
        timeout = 10000
        connect_timeout = 3000
        max_retries = 2
        "###);
    }

    #[test]
    fn deserialization() {
        let config: HttpConfig = toml::from_str(
            r#"
        [client]
        timeout = 5000
    "#,
        )
        .unwrap();
        assert_eq!(
            config,
            HttpConfig {
                client: HttpClientConfig {
                    timeout: Duration::from_secs(5),
                    ..Default::default()
                },
            }
        );
    }
}
