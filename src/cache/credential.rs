use chrono::{DateTime, Duration, Utc};

use crate::utils::constants::TOKEN_SAFETY_MARGIN_SECS;

/// Bearer token plus the instant after which it must not be used.
///
/// Never mutated: a refresh produces a new value that replaces the old one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub value: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
}

impl Credential {
    /// Builds a credential issued at `issued_at` and declared valid for
    /// `lifetime_secs`; the safety margin is taken off the declared lifetime.
    ///
    /// `None` when the expiry does not fit in a `DateTime<Utc>`.
    pub fn issue(value: String, token_type: String, issued_at: DateTime<Utc>, lifetime_secs: i64) -> Option<Self> {
        let lifetime = lifetime_secs
            .checked_sub(TOKEN_SAFETY_MARGIN_SECS)
            .and_then(Duration::try_seconds)?;
        let expires_at = issued_at.checked_add_signed(lifetime)?;
        Some(Self { value, token_type, expires_at })
    }

    /// Check if token can still be sent at `now`
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}
