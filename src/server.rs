mod app_state;
mod extractors;
mod filters_panel;
mod handlers;
mod http_errors;
mod page;
mod property_card;
mod sign_in_guard;
mod status;

use crate::{
    api::Api, config::Config, database::Database, network::Network,
    templates::create_templates,
};
use actix_web::{App, HttpServer, middleware, web};
use anyhow::Context;
use tracing::info;
use tracing_actix_web::TracingLogger;

pub use self::app_state::AppState;
use self::sign_in_guard::sign_in_guard;

#[actix_web::main]
pub async fn run(config: Config, http_port: u16) -> Result<(), anyhow::Error> {
    let db = Database::open(&config.db)
        .await
        .with_context(|| "Cannot open the database")?;
    let network = Network::create(&config.http.client)?;
    let api = Api::new(config.clone(), db, network);

    let state = web::Data::new(AppState::new(config, api, create_templates()?));
    let http_server_url = format!("0.0.0.0:{http_port}");
    let http_server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::from_fn(sign_in_guard))
            .wrap(middleware::NormalizePath::trim())
            .wrap(TracingLogger::default())
            .app_data(state.clone())
            .configure(configure_routes)
    });

    let http_server = http_server
        .bind(&http_server_url)
        .with_context(|| format!("Failed to bind to {}.", &http_server_url))?;

    info!("Roomies API server is available at http://{http_server_url}");

    http_server
        .run()
        .await
        .context("Failed to run Roomies API server.")
}

/// Registers all pages and API endpoints.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::landing_get))
        .service(
            web::scope("/api")
                .route("/status", web::get().to(handlers::status_get))
                .route("/properties", web::get().to(handlers::properties_search))
                .route("/user", web::get().to(handlers::user_get))
                .route("/user/role", web::post().to(handlers::user_role_set)),
        )
        .service(
            web::scope("/properties")
                .route("", web::get().to(handlers::properties_list))
                .route(
                    "/filters",
                    web::post().to(handlers::properties_filters_apply),
                )
                .route(
                    "/filters/reset",
                    web::post().to(handlers::properties_filters_reset),
                )
                .route("/{id}", web::get().to(handlers::properties_get)),
        )
        .service(
            web::scope("/landlord")
                .route("/dashboard", web::get().to(handlers::landlord_dashboard))
                .route(
                    "/dashboard/{id}",
                    web::get().to(handlers::landlord_property_get),
                )
                .route(
                    "/properties/new",
                    web::get().to(handlers::landlord_property_new),
                )
                .route(
                    "/properties",
                    web::post().to(handlers::landlord_properties_create),
                ),
        )
        .route(
            "/tenant/dashboard",
            web::get().to(handlers::tenant_dashboard),
        );
}
