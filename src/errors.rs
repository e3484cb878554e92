use thiserror::Error;

/// Everything that can stop the agent. None of these are retried: the driver
/// hands them up to `main`, which exits.
#[derive(Error, Debug)]
pub enum AgentError {
    /// Missing or malformed command line input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The token endpoint rejected the client identification string.
    #[error("403 Forbidden from token endpoint, change the user agent?")]
    AuthDenied,
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
    /// `expires_in` was not an integer.
    #[error("malformed token response: expires_in '{0}' is not an integer")]
    MalformedTokenResponse(String),
    #[error("malformed date '{0}', expected YYYY-MM-DD")]
    MalformedDate(String),
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
