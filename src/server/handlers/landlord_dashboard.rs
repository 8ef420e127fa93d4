use crate::{
    error::Error as RoomiesError,
    properties::PropertyId,
    server::{
        app_state::AppState,
        page::{Layout, render_not_found, render_page},
        property_card::PropertyCard,
    },
    users::{User, UserRoleStore},
};
use actix_web::{HttpResponse, web};
use serde_json::json;

const LANDLORD_DASHBOARD_PATH: &str = "/landlord/dashboard";

/// Lists all properties of the signed-in landlord, including drafts and archived ones.
pub async fn landlord_dashboard(
    state: web::Data<AppState>,
    user: User,
    role_store: UserRoleStore,
) -> Result<HttpResponse, RoomiesError> {
    let properties = state.api.properties().find_by_landlord(user.id).await?;

    let layout = Layout::new("Your properties", Some(user), &role_store);
    render_page(
        &state,
        "landlord_dashboard",
        &layout,
        json!({ "properties": PropertyCard::from_all(&properties, LANDLORD_DASHBOARD_PATH) }),
    )
}

/// Shows a property of the signed-in landlord, properties of other landlords aren't disclosed.
pub async fn landlord_property_get(
    state: web::Data<AppState>,
    user: User,
    role_store: UserRoleStore,
    id: web::Path<PropertyId>,
) -> Result<HttpResponse, RoomiesError> {
    let property = state
        .api
        .properties()
        .get(id.into_inner())
        .await?
        .filter(|property| property.property.landlord_id == user.id);

    match property {
        Some(property) => {
            let layout = Layout::new(property.property.title.clone(), Some(user), &role_store);
            render_page(
                &state,
                "property",
                &layout,
                json!({ "property": property, "isOwner": true }),
            )
        }
        None => {
            let layout = Layout::new("Not found", Some(user), &role_store);
            render_not_found(&state, &layout, "The property you are looking for doesn't exist.")
        }
    }
}
