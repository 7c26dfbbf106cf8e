use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::error::{HubError, Result};

// ---------------------------------------------------------------------------
// TokenResponse — OAuth client-credentials grant body
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Lifetime in seconds.
    pub expires_in: u64,
    pub token_type: Option<String>,
}

// ---------------------------------------------------------------------------
// AccessToken — Cached bearer credential
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct AccessToken {
    pub value: String,
    pub expires_at: Instant,
}

impl AccessToken {
    /// Build a token from a grant response received at `issued_at`.
    ///
    /// Fails with [`HubError::Auth`] when `expires_in` does not fit the clock.
    pub fn issued(response: TokenResponse, issued_at: Instant) -> Result<Self> {
        let expires_at = issued_at
            .checked_add(Duration::from_secs(response.expires_in))
            .ok_or_else(|| {
                HubError::Auth(format!("token lifetime out of range: {}s", response.expires_in))
            })?;
        Ok(Self {
            value: response.access_token,
            expires_at,
        })
    }

    /// Whether the token is still usable at `now`, keeping `margin` in reserve.
    pub fn is_valid_at(&self, now: Instant, margin: Duration) -> bool {
        now.checked_add(margin)
            .is_some_and(|deadline| deadline < self.expires_at)
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("value", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
