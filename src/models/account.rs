//! Account and bank detail records.

use serde::{Deserialize, Serialize};

/// One business account, or the account summary inside a counterparty.
///
/// The counterparty variant omits name, balance and state and carries a
/// `type` tag instead; everything situational is therefore optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// UUID assigned by the remote system. Always present.
    pub id: String,
    /// Display name. Not used in counterparty responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Not used in counterparty responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
    /// 3-letter ISO code. Always present.
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    /// ISO date/time, kept opaque.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// "revolut" or "external". Only used in counterparty responses.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Bank details retrieved for an account ID. An account can have several,
/// one per payment scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_code: Option<String>,
    #[serde(rename = "routing_number", default, skip_serializing_if = "Option::is_none")]
    pub routing_no: Option<String>,
    pub beneficiary: String,
    #[serde(rename = "beneficiary_address")]
    pub address: Address,
    /// Two-letter ISO code of the bank's country.
    #[serde(rename = "bank_country")]
    pub country: String,
    pub pooled: bool,
    /// Reference identifying the holder within a pooled account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_reference: Option<String>,
    /// One or more of: chaps, bacs, faster_payments, sepa, swift, ach.
    pub schemes: Vec<String>,
    pub estimated_time: EstimatedTime,
}

/// Estimated transfer time for a payment scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatedTime {
    /// "days" or "hours".
    pub unit: String,
    pub min: u32,
    pub max: u32,
}

/// An account-holder's address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename = "street_line1", default)]
    pub street1: String,
    #[serde(rename = "street_line2", default)]
    pub street2: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub city: String,
    /// Two-letter ISO code.
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub postcode: String,
}
