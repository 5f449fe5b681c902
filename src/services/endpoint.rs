/*
 * Responsibility
 * - GraphQL endpoint URL の parse
 * - userinfo (username / password) を取り出して URL から除去する
 * - scheme / host / port / path / query / fragment はそのまま残す
 */
use tracing::debug;
use url::Url;

use crate::error::AppError;

/// An endpoint URL with its userinfo split off.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    url: Url,
    username: String,
    password: String,
}

impl Endpoint {
    /// Parse `input` and strip any `user:password@` from it.
    ///
    /// Username and password are kept in the percent-encoded form the parser exposes.
    /// A missing password is the empty string.
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let mut url = Url::parse(input).map_err(|e| AppError::invalid_endpoint(input, e))?;

        let username = url.username().to_owned();
        let password = url.password().unwrap_or_default().to_owned();

        if !username.is_empty() || url.password().is_some() {
            let cleared = url.set_username("").and_then(|()| url.set_password(None));
            if cleared.is_err() {
                // Userinfo only parses on URLs with a host, which always accept the reset.
                debug!(endpoint = %url, "URL cannot have credentials removed");
            }
        }

        Ok(Self {
            url,
            username,
            password,
        })
    }

    /// The endpoint without credentials.
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}
