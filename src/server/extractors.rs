mod user;
mod user_role_store;
mod viewport_class;

pub use self::viewport_class::VIEWPORT_WIDTH_HEADERS;
