//! Blocking HTTP connection to the card-catalog API.
//!
//! Owns the shared `reqwest` client, the catalog base URL and the retry policy
//! used by callers that opt into retries. Every catalog response is JSON; a
//! non-success status becomes [`HubError::Status`] (or [`HubError::NotFound`]
//! for 404) and an undecodable body becomes [`HubError::Json`].

use crate::config::RetryPolicy;
use crate::error::{HubError, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

pub struct Connection {
    client: Client,
    catalog_base: String,
    retry: RetryPolicy,
}

impl Connection {
    /// Create a connection around an existing HTTP client.
    pub fn new(client: Client, catalog_base: impl Into<String>, retry: RetryPolicy) -> Self {
        Self {
            client,
            catalog_base: catalog_base.into().trim_end_matches('/').to_string(),
            retry,
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn catalog_base(&self) -> &str {
        &self.catalog_base
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// Absolute catalog URL for `path` (which starts with `/`).
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.catalog_base, path)
    }

    /// Issue a single `GET` against the catalog and decode the JSON body.
    pub fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = self.url(path);
        tracing::debug!(%url, ?query, "catalog request");

        let resp = self.client.get(&url).query(query).send()?;
        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(HubError::NotFound(url));
        }
        if !status.is_success() {
            return Err(HubError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = resp.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Like [`get_json`](Self::get_json), retried according to the
    /// connection's [`RetryPolicy`]. The last error is returned when every
    /// attempt fails.
    pub fn get_json_with_retry<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let mut attempt = 0;
        loop {
            match self.get_json(path, query) {
                Ok(value) => return Ok(value),
                Err(e) if attempt < self.retry.max_retries => {
                    attempt += 1;
                    tracing::debug!(path, attempt, error = %e, "retrying catalog request");
                    if !self.retry.delay.is_zero() {
                        std::thread::sleep(self.retry.delay);
                    }
                }
                Err(e) => return Err(e),
            }
        }
    }
}
