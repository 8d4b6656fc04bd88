//! Counterparty listing and management.

use reqwest::StatusCode;

use crate::error::Result;
use crate::models::{Counterparty, ExternalCounterpartyRequest, InternalCounterpartyRequest};

use super::client::{decode_json, expect_status, Client};
use super::{EP_COUNTERPARTIES, EP_COUNTERPARTY};

impl Client {
    /// List all counterparties known to the business.
    pub async fn counterparties(&self) -> Result<Vec<Counterparty>> {
        let (status, body) = self.get_json(EP_COUNTERPARTIES).await?;
        decode_json(status, &body, StatusCode::OK)
    }

    /// One counterparty by ID.
    pub async fn counterparty(&self, id: &str) -> Result<Counterparty> {
        let (status, body) = self.get_json(&format!("{}/{}", EP_COUNTERPARTY, id)).await?;
        decode_json(status, &body, StatusCode::OK)
    }

    /// Add an existing Revolut account as a counterparty. Personal profiles
    /// are matched by name and phone, business profiles by admin e-mail.
    pub async fn add_counterparty(
        &self,
        request: &InternalCounterpartyRequest,
    ) -> Result<Counterparty> {
        let (status, body) = self.post_json(EP_COUNTERPARTY, request).await?;
        decode_json(status, &body, StatusCode::OK)
    }

    /// Add an arbitrary external bank account as a counterparty. Which
    /// routing fields are required depends on country and currency; the
    /// remote API validates that, not this client.
    pub async fn add_external_counterparty(
        &self,
        request: &ExternalCounterpartyRequest,
    ) -> Result<Counterparty> {
        let (status, body) = self.post_json(EP_COUNTERPARTY, request).await?;
        decode_json(status, &body, StatusCode::OK)
    }

    /// Delete a counterparty by ID.
    pub async fn delete_counterparty(&self, id: &str) -> Result<()> {
        let path = format!("{}/{}", EP_COUNTERPARTY, id);
        let (status, body) = self.delete_resource(&path).await?;
        expect_status(status, &body, StatusCode::NO_CONTENT)
    }
}
