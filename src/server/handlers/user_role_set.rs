use crate::{
    error::Error as RoomiesError,
    server::app_state::AppState,
    users::{UserRole, UserRoleStore},
};
use actix_web::{
    HttpResponse,
    cookie::{Cookie, SameSite},
    http::header,
    web,
};
use serde::Deserialize;
use serde_json::json;
use url::{Position, Url};

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserRoleParams {
    /// Role to switch to, the current role is toggled if not specified.
    role: Option<String>,
    /// Local path to send the browser to afterwards.
    return_to: Option<String>,
}

pub async fn user_role_set(
    state: web::Data<AppState>,
    role_store: UserRoleStore,
    params: web::Form<UserRoleParams>,
) -> Result<HttpResponse, RoomiesError> {
    let params = params.into_inner();
    let role = match params.role.as_deref().filter(|role| !role.is_empty()) {
        Some(role) => {
            role_store.set_role(
                role.parse::<UserRole>()
                    .map_err(RoomiesError::client_with_root_cause)?,
            );
            role_store.role()
        }
        None => role_store.toggle(),
    };

    let cookie = Cookie::build(state.config.security.role_cookie_name.clone(), role.as_str())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish();

    match params
        .return_to
        .as_deref()
        .and_then(|return_to| local_return_path(&state.config.public_url, return_to))
    {
        Some(path) => Ok(HttpResponse::SeeOther()
            .cookie(cookie)
            .insert_header((header::LOCATION, path))
            .finish()),
        None => Ok(HttpResponse::Ok()
            .cookie(cookie)
            .json(json!({ "role": role }))),
    }
}

/// Resolves `return_to` the way browsers do and keeps it only if it stays on the app origin.
fn local_return_path(public_url: &Url, return_to: &str) -> Option<String> {
    if !return_to.starts_with('/') {
        return None;
    }

    let url = public_url.join(return_to).ok()?;
    (url.origin() == public_url.origin()).then(|| url[Position::BeforePath..].to_string())
}
