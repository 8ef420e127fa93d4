use crate::{
    security::{Credentials, is_protected_path},
    server::{app_state::AppState, http_errors::generic_internal_server_error},
};
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::{EitherBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    http::header,
    middleware::Next,
    web,
};
use anyhow::anyhow;
use tracing::error;
use url::Url;

/// Lets requests to the landlord and tenant areas through only for signed-in users, everyone else
/// is redirected to the identity provider sign-in flow.
pub async fn sign_in_guard<B: MessageBody>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error> {
    // Routing matches the percent-decoded path, the guard has to see the same one.
    if !is_protected_path(req.match_info().as_str()) {
        return Ok(next.call(req).await?.map_into_left_body());
    }

    let Some(state) = req.app_data::<web::Data<AppState>>().cloned() else {
        error!("Application state isn't configured.");
        return Ok(req
            .into_response(generic_internal_server_error())
            .map_into_right_body());
    };

    let credentials = req
        .cookie(&state.config.security.session_cookie_name)
        .map(Credentials::SessionCookie);
    let user = match credentials {
        Some(credentials) => state.api.security().authenticate(credentials).await,
        None => Ok(None),
    };

    match user {
        Ok(Some(user)) => {
            req.extensions_mut().insert(user);
            Ok(next.call(req).await?.map_into_left_body())
        }
        Ok(None) => {
            let sign_in_url = sign_in_redirect_url(&state, &req);
            match sign_in_url {
                Ok(sign_in_url) => Ok(req
                    .into_response(
                        HttpResponse::SeeOther()
                            .insert_header((header::LOCATION, sign_in_url.as_str()))
                            .finish(),
                    )
                    .map_into_right_body()),
                Err(err) => {
                    error!("Failed to build sign-in URL: {err:?}");
                    Ok(req
                        .into_response(generic_internal_server_error())
                        .map_into_right_body())
                }
            }
        }
        Err(err) => {
            error!(path = req.path(), "Failed to authenticate user: {err:?}");
            Ok(req
                .into_response(generic_internal_server_error())
                .map_into_right_body())
        }
    }
}

/// Sign-in URL that returns the user to the public URL of the requested page.
fn sign_in_redirect_url(state: &AppState, req: &ServiceRequest) -> anyhow::Result<Url> {
    let path_and_query = req
        .uri()
        .path_and_query()
        .map(|path_and_query| path_and_query.as_str())
        .ok_or_else(|| anyhow!("Request URI doesn't have a path."))?;
    let return_to = state.config.public_url.join(path_and_query)?;
    state.api.security().sign_in_url(&return_to)
}
