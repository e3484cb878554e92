/// Shared request plumbing for the two upstream endpoints.

use http::header::USER_AGENT;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config::settings::AgentSettings;
use crate::errors::AgentError;

/// One client for the process lifetime; connections are pooled by reqwest.
pub fn build_client(settings: &AgentSettings) -> Result<Client, AgentError> {
    let mut builder = Client::builder();
    if let Some(timeout) = settings.request_timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Attach the spoofed client identification.
pub fn with_client_identification(request: RequestBuilder, user_agent: &str) -> RequestBuilder {
    request.header(USER_AGENT, user_agent)
}

/// Read the whole body, then decode it. A broken connection is a transport
/// error, a body that is not the expected JSON is a decode error.
pub async fn decode_body<T: DeserializeOwned>(response: Response) -> Result<T, AgentError> {
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
