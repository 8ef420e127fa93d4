use crate::{
    server::app_state::AppState,
    users::{UserRole, UserRoleStore},
};
use actix_web::{Error, FromRequest, HttpRequest, dev::Payload, web};
use std::future::{Ready, ready};

/// Role store initialized from the role cookie, missing or unknown values mean the default role.
impl FromRequest for UserRoleStore {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let role = req
            .app_data::<web::Data<AppState>>()
            .and_then(|state| req.cookie(&state.config.security.role_cookie_name))
            .and_then(|cookie| cookie.value().parse::<UserRole>().ok())
            .unwrap_or_default();
        ready(Ok(UserRoleStore::new(role)))
    }
}
