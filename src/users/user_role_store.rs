use crate::users::UserRole;
use std::sync::{Arc, RwLock};

/// Holds the role the user currently acts in. Created per request from the role cookie and
/// handed to every view that needs it, clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct UserRoleStore {
    role: Arc<RwLock<UserRole>>,
}

impl UserRoleStore {
    pub fn new(role: UserRole) -> Self {
        Self {
            role: Arc::new(RwLock::new(role)),
        }
    }

    pub fn role(&self) -> UserRole {
        *self.role.read().unwrap_or_else(|err| err.into_inner())
    }

    pub fn set_role(&self, role: UserRole) {
        *self.role.write().unwrap_or_else(|err| err.into_inner()) = role;
    }

    /// Switches to the other role and returns it.
    pub fn toggle(&self) -> UserRole {
        let mut role = self.role.write().unwrap_or_else(|err| err.into_inner());
        *role = role.toggle();
        *role
    }
}
