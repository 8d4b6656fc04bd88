//! Payments to counterparties.

use reqwest::StatusCode;

use crate::error::Result;
use crate::models::{PaymentRequest, PaymentResponse};

use super::client::{decode_json, Client};
use super::EP_PAY;

impl Client {
    /// Pay a counterparty. The request ID is the caller's idempotency token;
    /// the currency is uppercased before transmission. Scheduled payments
    /// come back in the "pending" state with no completion time.
    pub async fn pay(&self, request: &PaymentRequest) -> Result<PaymentResponse> {
        let mut request = request.clone();
        request.currency = request.currency.to_uppercase();

        let (status, body) = self.post_json(EP_PAY, &request).await?;
        decode_json(status, &body, StatusCode::OK)
    }
}
