use crate::{config::Config, database::Database, network::Network};

/// Collection of the APIs, every module extends it with its own `*ApiExt`.
#[derive(Clone)]
pub struct Api {
    pub config: Config,
    pub db: Database,
    pub network: Network,
}

impl Api {
    /// Instantiates APIs collection with the specified config, database and network.
    pub fn new(config: Config, db: Database, network: Network) -> Self {
        Self {
            config,
            db,
            network,
        }
    }
}

impl AsRef<Api> for Api {
    fn as_ref(&self) -> &Self {
        self
    }
}
