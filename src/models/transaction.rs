//! Transfer, payment and transaction records.

use serde::{Deserialize, Serialize};

/// Request body for a transfer between two of the business's own accounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRequest {
    /// Client-generated idempotency ID. Reusing it must not create a second
    /// transfer on the remote side.
    pub request_id: String,
    pub source_account_id: String,
    pub target_account_id: String,
    pub amount: f64,
    /// 3-letter ISO code, uppercased by the client before transmission.
    pub currency: String,
    /// Free text shown on the transaction. Highly recommended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// Response to a transfer request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferResponse {
    /// ID of the created transaction.
    pub id: String,
    /// "pending", "completed", "declined" or "failed".
    pub state: String,
    /// Reason code for the declined and failed states.
    #[serde(rename = "reason_code", default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Not available for scheduled transfers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

/// Request body for a payment to a counterparty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Client-generated idempotency ID, same contract as for transfers.
    pub request_id: String,
    /// Account to pay from.
    pub account_id: String,
    pub receiver: Receiver,
    pub amount: f64,
    /// 3-letter ISO code, uppercased by the client before transmission.
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// ISO date/time to initiate the payment at.
    #[serde(rename = "schedule_for", default, skip_serializing_if = "Option::is_none")]
    pub schedule_for: Option<String>,
}

/// Receiver of a payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Receiver {
    pub counterparty_id: String,
    /// A specific account of the counterparty. Optional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
}

/// Response to a payment request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentResponse {
    /// ID of the created transaction.
    pub id: String,
    /// "pending", "completed", "declined" or "failed".
    pub state: String,
    #[serde(rename = "reason_code", default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Not available for asynchronous or scheduled payments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

/// Full status of a transaction, as returned by lookups and listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionStatus {
    pub id: String,
    /// Transaction type tag, e.g. "transfer" or "card_payment".
    #[serde(rename = "type")]
    pub kind: String,
    /// Idempotency ID the client supplied, where one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// "pending", "completed", "declined" or "failed". One-way progression.
    pub state: String,
    /// Only meaningful for the declined and failed states.
    #[serde(rename = "reason_code", default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    #[serde(rename = "scheduled_for", default, skip_serializing_if = "Option::is_none")]
    pub scheduled_for: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant: Option<Merchant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// 2 legs for a transfer between own accounts, 1 otherwise.
    #[serde(default)]
    pub legs: Vec<Leg>,
}

/// One side of a transaction's money movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    #[serde(rename = "leg_id")]
    pub id: String,
    pub amount: f64,
    /// 3-letter ISO code.
    pub currency: String,
    /// Billing amount for cross-currency transactions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bill_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bill_currency: Option<String>,
    /// The owned account this leg moves money in or out of.
    pub account_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counterparty: Option<LegCounterparty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Card information, for card payments only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
}

/// Quick summary of the counterparty involved in one leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegCounterparty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// "self", "revolut" or "external".
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
}

/// Merchant info on card transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Merchant {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(rename = "category_code", default)]
    pub category: String,
    #[serde(default)]
    pub country: String,
}

/// Card details on card payments. The number is masked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "card_number")]
    pub number: String,
    #[serde(rename = "first_name", default)]
    pub first: String,
    #[serde(rename = "last_name", default)]
    pub last: String,
    #[serde(default)]
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_request_omits_empty_reference() {
        let req = TransferRequest {
            request_id: "revolut-0000000000000007".to_string(),
            source_account_id: "src".to_string(),
            target_account_id: "dst".to_string(),
            amount: 120.0,
            currency: "GBP".to_string(),
            reference: None,
        };
        let out = serde_json::to_string(&req).unwrap();
        assert!(!out.contains("reference"));
        assert!(out.contains("\"request_id\""));
        assert!(out.contains("\"source_account_id\""));
    }

    #[test]
    fn test_two_leg_transaction_decodes() {
        let body = r#"{
            "id": "tx-1",
            "type": "transfer",
            "request_id": "revolut-0000000000000001",
            "state": "completed",
            "created_at": "2020-02-01T10:00:00Z",
            "completed_at": "2020-02-01T10:00:01Z",
            "reference": "Expenses",
            "legs": [
                {
                    "leg_id": "leg-1",
                    "amount": -100.0,
                    "currency": "GBP",
                    "account_id": "acc-1",
                    "counterparty": {"type": "self", "account_id": "acc-2"},
                    "description": "To EUR"
                },
                {
                    "leg_id": "leg-2",
                    "amount": 117.1,
                    "currency": "EUR",
                    "bill_amount": 100.0,
                    "bill_currency": "GBP",
                    "account_id": "acc-2",
                    "counterparty": {"type": "self", "account_id": "acc-1"},
                    "description": "From GBP"
                }
            ]
        }"#;
        let tx: TransactionStatus = serde_json::from_str(body).unwrap();
        assert_eq!(tx.kind, "transfer");
        assert_eq!(tx.legs.len(), 2);
        assert_eq!(tx.legs[1].bill_currency.as_deref(), Some("GBP"));
        assert_eq!(tx.legs[0].counterparty.as_ref().unwrap().kind, "self");
        assert!(tx.merchant.is_none());
    }

    #[test]
    fn test_declined_payment_carries_reason() {
        let body = r#"{
            "id": "tx-2",
            "type": "payment",
            "state": "declined",
            "reason_code": "1042",
            "created_at": "2020-02-01T10:00:00Z",
            "legs": []
        }"#;
        let tx: TransactionStatus = serde_json::from_str(body).unwrap();
        assert_eq!(tx.state, "declined");
        assert_eq!(tx.reason.as_deref(), Some("1042"));
    }
}
