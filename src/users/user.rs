use crate::users::UserId;
use serde_derive::Serialize;
use time::OffsetDateTime;

/// Signed-in user, as resolved from the identity provider session.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    #[serde(with = "time::serde::timestamp")]
    pub created_at: OffsetDateTime,
    pub is_activated: bool,
}

impl AsRef<User> for User {
    fn as_ref(&self) -> &User {
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::tests::mock_user;
    use insta::assert_json_snapshot;

    #[test]
    fn serialization() -> anyhow::Result<()> {
        assert_json_snapshot!(mock_user()?, @r###"
        {
          "id": "00000000-0000-0000-0000-000000000002",
          "email": "dev@roomies.dev",
          "createdAt": 1262340000,
          "isActivated": true
        }
        "###);

        Ok(())
    }
}
