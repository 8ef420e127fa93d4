use serde_derive::{Deserialize, Serialize};
use sqlx::postgres::PgConnectOptions;

/// Configuration for the database connection.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct DatabaseConfig {
    /// Name of the database to connect to.
    pub name: String,
    /// Hostname to use to connect to the database.
    pub host: String,
    /// Port to use to connect to the database.
    pub port: u16,
    /// Username to use to connect to the database.
    pub username: String,
    /// Optional password to use to connect to the database.
    pub password: Option<String>,
    /// Maximum number of connections kept in the pool.
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Returns Postgres connection options for this configuration.
    pub fn connect_options(&self) -> PgConnectOptions {
        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .database(&self.name);
        match self.password {
            Some(ref password) => options.password(password),
            None => options,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            name: "roomies".to_string(),
            host: "localhost".to_string(),
            port: 5432,
            username: "postgres".to_string(),
            password: None,
            max_connections: 10,
        }
    }
}
