//! Account listing and bank detail lookups.

use reqwest::StatusCode;

use crate::error::Result;
use crate::models::{Account, BankDetails};

use super::client::{decode_json, Client};
use super::{EP_ACCOUNTS, EP_BANK_DETAILS};

impl Client {
    /// List the accounts visible to the configured API key.
    pub async fn accounts(&self) -> Result<Vec<Account>> {
        let (status, body) = self.get_json(EP_ACCOUNTS).await?;
        decode_json(status, &body, StatusCode::OK)
    }

    /// Basic information for one account ID.
    pub async fn account(&self, id: &str) -> Result<Account> {
        let (status, body) = self.get_json(&format!("{}/{}", EP_ACCOUNTS, id)).await?;
        decode_json(status, &body, StatusCode::OK)
    }

    /// Bank details for an account ID. An account can have several sets,
    /// one per payment scheme.
    pub async fn bank_details(&self, id: &str) -> Result<Vec<BankDetails>> {
        let path = format!("{}/{}/{}", EP_ACCOUNTS, id, EP_BANK_DETAILS);
        let (status, body) = self.get_json(&path).await?;
        decode_json(status, &body, StatusCode::OK)
    }
}
