use crate::{
    error::Error as RoomiesError,
    filters::FilterState,
    server::{
        app_state::AppState,
        page::{Layout, render_page},
        property_card::PropertyCard,
    },
    users::{User, UserRoleStore},
};
use actix_web::{HttpResponse, web};
use serde_json::json;

/// Number of the latest listings shown on the tenant dashboard.
const LATEST_LISTINGS_COUNT: usize = 6;

pub async fn tenant_dashboard(
    state: web::Data<AppState>,
    user: User,
    role_store: UserRoleStore,
) -> Result<HttpResponse, RoomiesError> {
    let mut properties = state
        .api
        .properties()
        .find(&FilterState::default())
        .await?;
    properties.truncate(LATEST_LISTINGS_COUNT);

    let layout = Layout::new("Dashboard", Some(user), &role_store);
    render_page(
        &state,
        "tenant_dashboard",
        &layout,
        json!({ "properties": PropertyCard::from_all(&properties, "/properties") }),
    )
}
