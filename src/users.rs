mod user;
mod user_id;
mod user_role;
mod user_role_store;

pub use self::{
    user::User, user_id::UserId, user_role::UserRole, user_role_store::UserRoleStore,
};
