use chrono::{DateTime, Utc};
use http::StatusCode;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::cache::credential::Credential;
use crate::errors::AgentError;
use crate::sources::fetch::{decode_body, with_client_identification};

/// Body of the token endpoint response.
#[derive(Debug, Deserialize, Clone)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    /// seconds, sent as a string
    pub expires_in: String,
    #[serde(default)]
    pub status_code: Option<i64>,
}

impl TokenResponse {
    /// Fails when `expires_in` is not an integer or puts the expiry out of range.
    pub fn into_credential(self, issued_at: DateTime<Utc>) -> Result<Credential, AgentError> {
        let Ok(lifetime_secs) = self.expires_in.parse::<i64>() else {
            return Err(AgentError::MalformedTokenResponse(self.expires_in));
        };
        Credential::issue(self.access_token, self.token_type, issued_at, lifetime_secs)
            .ok_or(AgentError::MalformedTokenResponse(self.expires_in))
    }
}

/// Obtains bearer tokens and decides when the held one has to be replaced.
#[derive(Debug, Clone)]
pub struct TokenProvider {
    client: Client,
    url: String,
    user_agent: String,
}

impl TokenProvider {
    pub fn new(client: Client, url: String, user_agent: String) -> Self {
        Self { client, url, user_agent }
    }

    /// Returns `current` untouched while it is still valid at `now`,
    /// otherwise exchanges for a fresh one issued at `now`.
    pub async fn get_valid_credential(
        &self,
        current: Option<Credential>,
        now: DateTime<Utc>,
    ) -> Result<Credential, AgentError> {
        match current {
            Some(credential) if credential.is_valid_at(now) => {
                debug!("reusing token valid until {}", credential.expires_at);
                Ok(credential)
            }
            _ => {
                info!("requesting new token...");
                let credential = self.exchange(now).await?;
                info!("new {} token valid until {}", credential.token_type, credential.expires_at);
                Ok(credential)
            }
        }
    }

    async fn exchange(&self, issued_at: DateTime<Utc>) -> Result<Credential, AgentError> {
        let request = with_client_identification(self.client.post(&self.url), &self.user_agent);
        let response = request.send().await?;

        // the endpoint answers 403 when it does not like the user agent
        if response.status() == StatusCode::FORBIDDEN {
            return Err(AgentError::AuthDenied);
        }

        let token_response: TokenResponse = decode_body(response).await?;
        if let Some(code) = token_response.status_code {
            debug!("token endpoint status_code {}", code);
        }
        token_response.into_credential(issued_at)
    }
}
