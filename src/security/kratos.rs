use crate::users::User;
use serde_derive::Deserialize;
use time::OffsetDateTime;
use uuid::Uuid;

/// Kratos session, see https://www.ory.sh/docs/kratos/reference/api#tag/frontend/operation/toSession.
#[derive(Debug, PartialEq, Deserialize)]
pub struct Session {
    pub id: Uuid,
    /// Whether the session is still active.
    #[serde(default)]
    pub active: bool,
    pub identity: Option<Identity>,
}

/// Kratos identity, see https://www.ory.sh/kratos/docs/reference/api#models-identity.
#[derive(Debug, PartialEq, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub traits: IdentityTraits,
    #[serde(default)]
    pub verifiable_addresses: Vec<IdentityVerifiableAddress>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct IdentityTraits {
    pub email: String,
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct IdentityVerifiableAddress {
    pub value: String,
    pub verified: bool,
}

impl Identity {
    /// Identity is activated once its primary email is verified.
    pub fn is_activated(&self) -> bool {
        self.verifiable_addresses
            .iter()
            .any(|address| address.verified && address.value == self.traits.email)
    }
}

impl From<Identity> for User {
    fn from(identity: Identity) -> Self {
        User {
            id: identity.id.into(),
            is_activated: identity.is_activated(),
            email: identity.traits.email,
            created_at: identity.created_at,
        }
    }
}
