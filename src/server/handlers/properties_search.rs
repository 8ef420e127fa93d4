use crate::{
    error::Error as RoomiesError,
    filters::{FilterState, QueryString},
    server::app_state::AppState,
};
use actix_web::{HttpRequest, HttpResponse, web};

pub async fn properties_search(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, RoomiesError> {
    let filters = FilterState::parse(&QueryString::parse(req.query_string()));
    Ok(HttpResponse::Ok().json(state.api.properties().find(&filters).await?))
}
