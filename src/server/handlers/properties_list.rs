use crate::{
    error::Error as RoomiesError,
    filters::{FiltersView, QueryString, ViewportClass},
    server::{
        app_state::AppState,
        filters_panel::FiltersPanel,
        page::{Layout, render_page},
        property_card::PropertyCard,
    },
    users::{User, UserRoleStore},
};
use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::json;

/// Listings page: filters are read from the query string and the panel is rendered in the container
/// that fits the client viewport.
pub async fn properties_list(
    state: web::Data<AppState>,
    req: HttpRequest,
    user: Option<User>,
    role_store: UserRoleStore,
    viewport: ViewportClass,
) -> Result<HttpResponse, RoomiesError> {
    let view = FiltersView::new(QueryString::parse(req.query_string()), viewport);
    let properties = state.api.properties().find(view.filters()).await?;

    let layout = Layout::new("Properties", user, &role_store);
    render_page(
        &state,
        "properties",
        &layout,
        json!({
            "filters": FiltersPanel::from(&view),
            "count": properties.len(),
            "properties": PropertyCard::from_all(&properties, "/properties"),
        }),
    )
}
