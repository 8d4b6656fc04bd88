//! The transport client: connection pool, credential and raw JSON calls.

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};

/// Base URL of the sandbox environment, selected by `sand_` keys.
pub const URL_SANDBOX: &str = "https://sandbox-b2b.revolut.com/api/1.0";
/// Base URL of the production environment, selected by `prod_` keys.
pub const URL_PRODUCTION: &str = "https://b2b.revolut.com/api/1.0";

const USER_AGENT: &str = concat!("revolut-business/", env!("CARGO_PKG_VERSION"));

/// Single fixed timeout for every request. There is no per-request override.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Upper bound on idle connections kept for reuse.
const MAX_IDLE_CONNECTIONS: usize = 50;

/// Core structure for Revolut API access.
///
/// Holds a pooled HTTP client and the bearer credential derived from the API
/// key. Calls are issued one at a time and the client never retries on its
/// own; a 429 comes back to the caller like any other API error.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    bearer: String,
}

impl Client {
    /// Create a client for the environment the key's prefix selects:
    /// `sand_` for the sandbox, `prod_` for production. Any other prefix is
    /// a configuration error.
    pub fn new(key: &str) -> Result<Self> {
        let base_url = if key.starts_with("sand_") {
            URL_SANDBOX
        } else if key.starts_with("prod_") {
            URL_PRODUCTION
        } else {
            return Err(Error::KeyFormat);
        };

        Self::with_base_url(key, base_url)
    }

    /// Create a client against a custom base URL (for testing).
    pub fn with_base_url(key: &str, base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .pool_max_idle_per_host(MAX_IDLE_CONNECTIONS)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer: format!("Bearer {}", key),
        })
    }

    /// GET the given endpoint path and return the raw body with its status.
    /// Callers must check the status; a non-2xx answer is not an `Err` here.
    pub async fn get_json(&self, path: &str) -> Result<(StatusCode, Vec<u8>)> {
        let response = self
            .http
            .get(self.url(path))
            .header(AUTHORIZATION, self.bearer.as_str())
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?.to_vec();
        Ok((status, body))
    }

    /// Serialize `body` to JSON and POST it. Returns the raw response body
    /// and status regardless of success.
    pub async fn post_json<B>(&self, path: &str, body: &B) -> Result<(StatusCode, Vec<u8>)>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .http
            .post(self.url(path))
            .header(AUTHORIZATION, self.bearer.as_str())
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?.to_vec();
        Ok((status, body))
    }

    /// DELETE the given resource path. No body is expected on success, but
    /// the raw body is returned so failures can be decoded like any other.
    pub async fn delete_resource(&self, path: &str) -> Result<(StatusCode, Vec<u8>)> {
        let response = self
            .http
            .delete(self.url(path))
            .header(AUTHORIZATION, self.bearer.as_str())
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?.to_vec();
        Ok((status, body))
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

/// Decode a successful response body, or translate the failure.
pub(crate) fn decode_json<T>(status: StatusCode, body: &[u8], expected: StatusCode) -> Result<T>
where
    T: DeserializeOwned,
{
    if status != expected {
        return Err(Error::from_response(status.as_u16(), body));
    }

    Ok(serde_json::from_slice(body)?)
}

/// Check a bodiless operation's status, or translate the failure.
pub(crate) fn expect_status(status: StatusCode, body: &[u8], expected: StatusCode) -> Result<()> {
    if status != expected {
        return Err(Error::from_response(status.as_u16(), body));
    }

    Ok(())
}
