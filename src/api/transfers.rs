//! Transfers between the business's own accounts.

use reqwest::StatusCode;

use crate::error::Result;
use crate::models::{TransferRequest, TransferResponse};

use super::client::{decode_json, Client};
use super::EP_TRANSFER;

impl Client {
    /// Move money between two owned accounts. The request ID is the caller's
    /// idempotency token; the currency is uppercased before transmission.
    pub async fn transfer(&self, request: &TransferRequest) -> Result<TransferResponse> {
        let mut request = request.clone();
        request.currency = request.currency.to_uppercase();

        let (status, body) = self.post_json(EP_TRANSFER, &request).await?;
        decode_json(status, &body, StatusCode::OK)
    }
}
