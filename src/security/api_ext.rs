use crate::{
    api::Api,
    security::{
        credentials::Credentials,
        kratos::{Identity, Session},
    },
    users::User,
};
use anyhow::anyhow;
use reqwest::StatusCode;
use tracing::{debug, error};
use url::Url;

/// Roomies security controller backed by Ory Kratos.
pub struct SecurityApiExt<'a> {
    api: &'a Api,
}

impl<'a> SecurityApiExt<'a> {
    /// Instantiates security API extension.
    pub fn new(api: &'a Api) -> Self {
        Self { api }
    }

    /// Authenticates user with the specified credentials. Returns `None` if credentials don't
    /// belong to an active session.
    pub async fn authenticate(&self, credentials: Credentials) -> anyhow::Result<Option<User>> {
        let Some(identity) = self.get_identity(&credentials).await? else {
            debug!("Couldn't retrieve user identity with session credentials.");
            return Ok(None);
        };

        Ok(Some(User::from(identity)))
    }

    /// Returns URL of the Kratos sign-in flow that sends the user back to `return_to` afterwards.
    pub fn sign_in_url(&self, return_to: &Url) -> anyhow::Result<Url> {
        let mut sign_in_url = Url::parse(&format!(
            "{}self-service/login/browser",
            self.api.config.components.kratos_url.as_str()
        ))?;
        sign_in_url
            .query_pairs_mut()
            .append_pair("return_to", return_to.as_str());
        Ok(sign_in_url)
    }

    /// Tries to retrieve user identity from Kratos using specified credentials.
    async fn get_identity(&self, credentials: &Credentials) -> anyhow::Result<Option<Identity>> {
        let Credentials::SessionCookie(cookie) = credentials;
        let response = self
            .api
            .network
            .http_client
            .get(format!(
                "{}sessions/whoami",
                self.api.config.components.kratos_url.as_str()
            ))
            .header("Cookie", format!("{}={}", cookie.name(), cookie.value()))
            .send()
            .await
            .map_err(|err| {
                error!("Cannot execute Kratos request: {err:?}");
                anyhow!(err)
            })?;

        let response_status = response.status();
        if !response_status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return match response_status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    debug!("Kratos request couldn't be authenticated: {error_text}");
                    Ok(None)
                }
                _ => {
                    error!(
                        "Kratos request failed with the status code `{response_status}` and body: {error_text}"
                    );
                    Err(anyhow!(
                        "Kratos request failed with the status code `{response_status}`."
                    ))
                }
            };
        }

        let session = response.json::<Session>().await?;
        Ok(if session.active { session.identity } else { None })
    }
}

impl Api {
    /// Returns an API to authenticate users.
    pub fn security(&self) -> SecurityApiExt<'_> {
        SecurityApiExt::new(self)
    }
}
