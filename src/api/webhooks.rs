//! Webhook registration.

use reqwest::StatusCode;

use crate::error::Result;
use crate::models::WebhookRequest;

use super::client::{expect_status, Client};
use super::EP_WEBHOOK;

impl Client {
    /// Register a callback URL to receive transaction events. The remote
    /// system posts `TransactionCreated` and `TransactionStateChanged`
    /// payloads to it.
    pub async fn add_webhook(&self, url: &str) -> Result<()> {
        let request = WebhookRequest {
            url: url.to_string(),
        };

        let (status, body) = self.post_json(EP_WEBHOOK, &request).await?;
        expect_status(status, &body, StatusCode::NO_CONTENT)
    }
}
