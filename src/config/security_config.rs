use serde_derive::{Deserialize, Serialize};

/// Configuration for the session and role cookies.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SecurityConfig {
    /// Name of the session cookie used by the authentication component.
    pub session_cookie_name: String,
    /// Name of the cookie that stores the role the user currently acts in.
    pub role_cookie_name: String,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "id".to_string(),
            role_cookie_name: "role".to_string(),
        }
    }
}
