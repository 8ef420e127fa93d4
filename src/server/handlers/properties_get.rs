use crate::{
    error::Error as RoomiesError,
    properties::{PropertyId, PropertyWithDetails, VisibilityStatus},
    server::{
        app_state::AppState,
        page::{Layout, render_not_found, render_page},
    },
    users::{User, UserRoleStore},
};
use actix_web::{HttpResponse, web};
use serde_json::json;

pub async fn properties_get(
    state: web::Data<AppState>,
    user: Option<User>,
    role_store: UserRoleStore,
    id: web::Path<PropertyId>,
) -> Result<HttpResponse, RoomiesError> {
    let property = state.api.properties().get(id.into_inner()).await?;
    let is_owner = |property: &PropertyWithDetails| {
        user.as_ref()
            .is_some_and(|user| user.id == property.property.landlord_id)
    };

    match property {
        Some(property)
            if property.property.visibility_status == VisibilityStatus::Listed
                || is_owner(&property) =>
        {
            let is_owner = is_owner(&property);
            let layout = Layout::new(property.property.title.clone(), user, &role_store);
            render_page(
                &state,
                "property",
                &layout,
                json!({ "property": property, "isOwner": is_owner }),
            )
        }
        _ => {
            let layout = Layout::new("Not found", user, &role_store);
            render_not_found(&state, &layout, "The property you are looking for doesn't exist.")
        }
    }
}
