mod api_ext;
mod credentials;
mod kratos;
mod protected_routes;

pub use self::{credentials::Credentials, protected_routes::is_protected_path};
