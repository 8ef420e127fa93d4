use actix_web::HttpResponse;
use serde_json::json;

pub fn generic_internal_server_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(json!({
        "message": "The operation could not be completed due to a system error. Please try again later."
    }))
}
