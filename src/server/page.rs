use crate::{
    error::Error as RoomiesError,
    server::{app_state::AppState, extractors::VIEWPORT_WIDTH_HEADERS},
    users::{User, UserRole, UserRoleStore},
};
use actix_web::{
    HttpResponse,
    http::{StatusCode, header},
};
use anyhow::Context;
use serde::Serialize;

/// Data every page layout needs: who is signed in and in which role the pages are shown.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub title: String,
    pub user: Option<User>,
    pub role: UserRole,
    pub is_landlord: bool,
    pub dashboard_path: &'static str,
}

impl Layout {
    pub fn new(title: impl Into<String>, user: Option<User>, role_store: &UserRoleStore) -> Self {
        let role = role_store.role();
        Self {
            title: title.into(),
            user,
            role,
            is_landlord: role == UserRole::Landlord,
            dashboard_path: role.dashboard_path(),
        }
    }
}

#[derive(Serialize)]
struct PageContext<'a, T: Serialize> {
    layout: &'a Layout,
    #[serde(flatten)]
    page: T,
}

/// Renders page template within the layout.
pub fn render_page<T: Serialize>(
    state: &AppState,
    template: &str,
    layout: &Layout,
    page: T,
) -> Result<HttpResponse, RoomiesError> {
    render_page_with_status(state, StatusCode::OK, template, layout, page)
}

/// Renders "not found" page with the `404` status.
pub fn render_not_found(
    state: &AppState,
    layout: &Layout,
    message: &str,
) -> Result<HttpResponse, RoomiesError> {
    render_page_with_status(
        state,
        StatusCode::NOT_FOUND,
        "not_found",
        layout,
        serde_json::json!({ "message": message }),
    )
}

/// Responses ask the browser for viewport client hints so that subsequent requests can pick the
/// filters container.
fn render_page_with_status<T: Serialize>(
    state: &AppState,
    status: StatusCode,
    template: &str,
    layout: &Layout,
    page: T,
) -> Result<HttpResponse, RoomiesError> {
    let html = state
        .templates
        .render(template, &PageContext { layout, page })
        .with_context(|| format!("Failed to render `{template}` page."))?;

    let client_hints = VIEWPORT_WIDTH_HEADERS.join(", ");
    Ok(HttpResponse::build(status)
        .content_type(header::ContentType::html())
        .insert_header((header::HeaderName::from_static("accept-ch"), client_hints.as_str()))
        .insert_header((header::VARY, client_hints.as_str()))
        .body(html))
}

#[cfg(test)]
mod tests {
    use super::{Layout, render_not_found, render_page};
    use crate::{
        tests::{mock_app_state, mock_user},
        users::{UserRole, UserRoleStore},
    };
    use actix_web::{
        body::MessageBody,
        http::{StatusCode, header},
    };
    use insta::assert_json_snapshot;
    use serde_json::json;

    #[test]
    fn layout_follows_role() -> anyhow::Result<()> {
        let layout = Layout::new(
            "Dashboard",
            Some(mock_user()?),
            &UserRoleStore::new(UserRole::Landlord),
        );
        assert_json_snapshot!(layout, @r###"
        {
          "title": "Dashboard",
          "user": {
            "id": "00000000-0000-0000-0000-000000000002",
            "email": "dev@roomies.dev",
            "createdAt": 1262340000,
            "isActivated": true
          },
          "role": "landlord",
          "isLandlord": true,
          "dashboardPath": "/landlord/dashboard"
        }
        "###);

        let layout = Layout::new("Home", None, &UserRoleStore::default());
        assert_eq!(layout.role, UserRole::Tenant);
        assert_eq!(layout.dashboard_path, "/tenant/dashboard");

        Ok(())
    }

    #[actix_web::test]
    async fn renders_page_with_client_hints() -> anyhow::Result<()> {
        let state = mock_app_state()?;
        let layout = Layout::new("Not found", None, &UserRoleStore::default());
        let response = render_page(
            &state,
            "not_found",
            &layout,
            json!({ "message": "Property doesn't exist." }),
        )?;
        assert_eq!(response.status(), StatusCode::OK);

        assert_eq!(
            response.headers().get("accept-ch").map(|value| value.to_str()).transpose()?,
            Some("Sec-CH-Viewport-Width, Viewport-Width")
        );
        assert_eq!(
            response
                .headers()
                .get(header::CONTENT_TYPE)
                .map(|value| value.to_str())
                .transpose()?,
            Some("text/html; charset=utf-8")
        );

        let body = String::from_utf8(response.into_body().try_into_bytes().unwrap().to_vec())?;
        assert!(body.contains("<title>Not found · Roomies</title>"));
        assert!(body.contains("Property doesn&#x27;t exist."));

        Ok(())
    }

    #[actix_web::test]
    async fn renders_not_found_page() -> anyhow::Result<()> {
        let state = mock_app_state()?;
        let layout = Layout::new("Not found", None, &UserRoleStore::default());
        let response = render_not_found(&state, &layout, "Property doesn't exist.")?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}
