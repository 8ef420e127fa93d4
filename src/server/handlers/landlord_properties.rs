use crate::{
    error::Error as RoomiesError,
    properties::{FurnishedType, NewPropertyForm},
    server::{
        app_state::AppState,
        page::{Layout, render_page},
    },
    users::{User, UserRoleStore},
};
use actix_web::{HttpResponse, http::header, web};
use serde_json::json;

/// Form to publish a new property.
pub async fn landlord_property_new(
    state: web::Data<AppState>,
    user: User,
    role_store: UserRoleStore,
) -> Result<HttpResponse, RoomiesError> {
    let house_types = state.api.properties().get_house_types().await?;
    let furnished_types = FurnishedType::ALL
        .into_iter()
        .map(|furnished_type| {
            json!({ "value": furnished_type.as_str(), "label": furnished_type.label() })
        })
        .collect::<Vec<_>>();

    let layout = Layout::new("Add property", Some(user), &role_store);
    render_page(
        &state,
        "property_form",
        &layout,
        json!({ "houseTypes": house_types, "furnishedTypes": furnished_types }),
    )
}

/// Publishes a new property and redirects to its dashboard page.
pub async fn landlord_properties_create(
    state: web::Data<AppState>,
    user: User,
    form: web::Form<NewPropertyForm>,
) -> Result<HttpResponse, RoomiesError> {
    let property_id = state
        .api
        .properties()
        .create(user.id, form.into_inner())
        .await?;

    Ok(HttpResponse::SeeOther()
        .insert_header((
            header::LOCATION,
            format!("/landlord/dashboard/{property_id}"),
        ))
        .finish())
}
