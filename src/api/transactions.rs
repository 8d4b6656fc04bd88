//! Transaction history, lookup and cancellation.

use reqwest::StatusCode;

use crate::error::Result;
use crate::models::TransactionStatus;

use super::client::{decode_json, expect_status, Client};
use super::{EP_TRANSACTION, EP_TRANSACTIONS};

/// Optional filters for the transaction listing. Unset (or empty) fields are
/// left out of the request entirely.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Maximum number of records; the API returns 100 when unset.
    pub count: Option<u32>,
    /// Transaction type tag, e.g. "transfer".
    pub kind: Option<String>,
    /// ISO date to list from.
    pub from: Option<String>,
    /// ISO date to list to.
    pub to: Option<String>,
    /// Restrict to one counterparty ID.
    pub counterparty: Option<String>,
}

impl TransactionFilter {
    /// Build the query string. The field order is fixed (count, type, from,
    /// to, counterparty) so equal filters always produce the same URL.
    pub fn to_query(&self) -> String {
        let mut parts = Vec::new();

        if let Some(count) = self.count {
            parts.push(format!("count={}", count));
        }

        let fields = [
            ("type", &self.kind),
            ("from", &self.from),
            ("to", &self.to),
            ("counterparty", &self.counterparty),
        ];
        for (name, value) in fields {
            if let Some(value) = value {
                if !value.is_empty() {
                    parts.push(format!("{}={}", name, value));
                }
            }
        }

        parts.join("&")
    }
}

impl Client {
    /// List transactions matching the filter, newest first.
    pub async fn transactions(&self, filter: &TransactionFilter) -> Result<Vec<TransactionStatus>> {
        let query = filter.to_query();
        let path = if query.is_empty() {
            EP_TRANSACTIONS.to_string()
        } else {
            format!("{}?{}", EP_TRANSACTIONS, query)
        };

        let (status, body) = self.get_json(&path).await?;
        decode_json(status, &body, StatusCode::OK)
    }

    /// One transaction by ID.
    pub async fn transaction(&self, id: &str) -> Result<TransactionStatus> {
        let (status, body) = self.get_json(&format!("{}/{}", EP_TRANSACTION, id)).await?;
        decode_json(status, &body, StatusCode::OK)
    }

    /// Cancel a scheduled transaction by ID.
    pub async fn cancel_transaction(&self, id: &str) -> Result<()> {
        let path = format!("{}/{}", EP_TRANSACTION, id);
        let (status, body) = self.delete_resource(&path).await?;
        expect_status(status, &body, StatusCode::NO_CONTENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_fixed_order_and_empty_omission() {
        let filter = TransactionFilter {
            count: Some(50),
            kind: Some("transfer".to_string()),
            from: Some("2020-01-01".to_string()),
            to: Some(String::new()),
            counterparty: None,
        };
        assert_eq!(filter.to_query(), "count=50&type=transfer&from=2020-01-01");
    }

    #[test]
    fn test_query_empty_filter() {
        assert_eq!(TransactionFilter::default().to_query(), "");
    }

    #[test]
    fn test_query_all_fields() {
        let filter = TransactionFilter {
            count: Some(10),
            kind: Some("card_payment".to_string()),
            from: Some("2020-01-01".to_string()),
            to: Some("2020-02-01".to_string()),
            counterparty: Some("cp-1".to_string()),
        };
        assert_eq!(
            filter.to_query(),
            "count=10&type=card_payment&from=2020-01-01&to=2020-02-01&counterparty=cp-1"
        );
    }

    #[test]
    fn test_query_single_field_has_no_separator() {
        let filter = TransactionFilter {
            counterparty: Some("cp-1".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.to_query(), "counterparty=cp-1");
    }
}
