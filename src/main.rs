mod api;
mod config;
mod database;
mod error;
mod filters;
mod network;
mod properties;
mod security;
mod server;
mod templates;
mod users;

use crate::config::{Config, RawConfig};
use anyhow::anyhow;
use clap::{Arg, Command, crate_authors, crate_description, crate_version, value_parser};
use std::env;
use tracing::info;

fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    if env::var("RUST_LOG_FORMAT").is_ok_and(|format| format == "json") {
        tracing_subscriber::fmt().json().flatten_event(true).init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let matches = Command::new("Roomies server")
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .arg(
            Arg::new("CONFIG")
                .env("ROOMIES_CONFIG")
                .short('c')
                .long("config")
                .default_value("roomies.toml")
                .help("Path to the application configuration file."),
        )
        .arg(
            Arg::new("PORT")
                .env("ROOMIES_PORT")
                .short('p')
                .long("port")
                .value_parser(value_parser!(u16))
                .help("Defines a TCP port to listen on."),
        )
        .get_matches();

    let raw_config = RawConfig::read_from_file(
        matches
            .get_one::<String>("CONFIG")
            .ok_or_else(|| anyhow!("<CONFIG> argument is not provided."))?,
    )?;

    info!("Roomies raw configuration: {raw_config:?}.");

    // CLI argument takes precedence.
    let http_port = matches
        .get_one::<u16>("PORT")
        .copied()
        .unwrap_or(raw_config.port);
    server::run(Config::from(raw_config), http_port)
}

#[cfg(test)]
mod tests {
    use crate::{
        api::Api,
        config::{Config, HttpClientConfig, HttpConfig},
        database::Database,
        network::Network,
        properties::{
            FurnishedType, HouseType, Location, Property, PropertyId, PropertyImage,
            PropertyWithDetails, RentDetails, VisibilityStatus,
        },
        server::AppState,
        templates::create_templates,
        users::{User, UserId},
    };
    use sqlx::postgres::PgPoolOptions;
    use time::{OffsetDateTime, macros::datetime};
    use url::Url;
    use uuid::uuid;

    pub struct MockPropertyBuilder {
        property: PropertyWithDetails,
    }

    impl MockPropertyBuilder {
        pub fn new(id: PropertyId) -> Self {
            // January 1, 2000 10:00:00
            let created_at = datetime!(2000-01-01 10:00 UTC);
            Self {
                property: PropertyWithDetails {
                    property: Property {
                        id,
                        title: "Cozy Apartment in Enschede".to_string(),
                        description: "Bright apartment close to the university.".to_string(),
                        landlord_id: mock_user_id(),
                        is_shared: false,
                        shared_with: None,
                        is_furnished: true,
                        furnished_type: FurnishedType::Fully,
                        square_meters: None,
                        type_of_flooring: None,
                        energy_efficiency_rating: None,
                        visibility_status: VisibilityStatus::Listed,
                        utilities_included: false,
                        pet_friendly: false,
                        parking_available: false,
                        is_bathroom_shared: false,
                        is_kitchen_shared: false,
                        garden_available: false,
                        storage_room_available: false,
                        created_at,
                        updated_at: created_at,
                    },
                    house_type: HouseType {
                        id: uuid!("00000000-0000-0000-0000-000000000003"),
                        name: "Apartment".to_string(),
                        description: None,
                    },
                    location: Location {
                        id: uuid!("00000000-0000-0000-0000-000000000004"),
                        address: "123 Main St".to_string(),
                        city: "Enschede".to_string(),
                        state: "Overijssel".to_string(),
                        country: "Netherlands".to_string(),
                        postal_code: "7511JD".to_string(),
                        latitude: None,
                        longitude: None,
                        nearby_amenities: None,
                    },
                    rent_details: RentDetails {
                        id: uuid!("00000000-0000-0000-0000-000000000005"),
                        rent_amount: 1200,
                        currency: "EUR".to_string(),
                        security_deposit: 2400,
                        utility_costs: None,
                        other_charges: None,
                    },
                    images: vec![],
                },
            }
        }

        pub fn set_pet_friendly(mut self) -> Self {
            self.property.property.pet_friendly = true;
            self
        }

        pub fn add_image(mut self, image: PropertyImage) -> Self {
            self.property.images.push(image);
            self
        }

        pub fn build(self) -> PropertyWithDetails {
            self.property
        }
    }

    pub fn mock_property_id() -> PropertyId {
        uuid!("00000000-0000-0000-0000-000000000001").into()
    }

    pub fn mock_user_id() -> UserId {
        uuid!("00000000-0000-0000-0000-000000000002").into()
    }

    pub fn mock_user() -> anyhow::Result<User> {
        Ok(User {
            id: mock_user_id(),
            email: "dev@roomies.dev".to_string(),
            // January 1, 2010 10:00:00
            created_at: OffsetDateTime::from_unix_timestamp(1262340000)?,
            is_activated: true,
        })
    }

    pub fn mock_config() -> anyhow::Result<Config> {
        Ok(Config {
            version: env!("CARGO_PKG_VERSION").to_string(),
            public_url: Url::parse("https://roomies.dev")?,
            db: Default::default(),
            security: Default::default(),
            components: Default::default(),
            http: HttpConfig {
                client: HttpClientConfig {
                    max_retries: 0,
                    ..Default::default()
                },
            },
        })
    }

    /// API backed by a lazy pool: nothing connects to the database until a query is executed.
    pub fn mock_api_with_config(config: Config) -> anyhow::Result<Api> {
        let pool = PgPoolOptions::new().connect_lazy_with(config.db.connect_options());
        let network = Network::create(&config.http.client)?;
        Ok(Api::new(config, Database::new(pool), network))
    }

    pub fn mock_app_state() -> anyhow::Result<AppState> {
        mock_app_state_with_config(mock_config()?)
    }

    pub fn mock_app_state_with_config(config: Config) -> anyhow::Result<AppState> {
        let api = mock_api_with_config(config.clone())?;
        Ok(AppState::new(config, api, create_templates()?))
    }
}
