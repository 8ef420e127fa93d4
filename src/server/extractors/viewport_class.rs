use crate::filters::ViewportClass;
use actix_web::{Error, FromRequest, HttpRequest, dev::Payload};
use std::future::{Ready, ready};

/// Client hints carrying the layout viewport width in CSS pixels, in order of preference.
pub const VIEWPORT_WIDTH_HEADERS: [&str; 2] = ["Sec-CH-Viewport-Width", "Viewport-Width"];

/// Classifies the client viewport from client hints, wide if the client didn't send any.
impl FromRequest for ViewportClass {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let width = VIEWPORT_WIDTH_HEADERS.iter().find_map(|header| {
            req.headers()
                .get(*header)?
                .to_str()
                .ok()?
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|width| width.is_finite() && *width >= 0.0)
        });

        ready(Ok(width
            .map(|width| ViewportClass::from_width(width as u32))
            .unwrap_or_default()))
    }
}
