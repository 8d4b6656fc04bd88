//! Counterparty records and the two add-counterparty request shapes.

use serde::{Deserialize, Serialize};

use super::account::Address;

/// A payee or payer known to the account holder, either another Revolut
/// account or an external bank account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Counterparty {
    /// UUID assigned by the remote system.
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Phone number of a personal account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// "business" or "personal". Absent for external counterparties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_type: Option<String>,
    /// Two-letter ISO code.
    #[serde(rename = "bank_country", default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// "created" or "deleted".
    #[serde(default)]
    pub state: String,
    /// ISO date/time, kept opaque.
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    /// Sub-accounts this counterparty can be paid into.
    #[serde(default)]
    pub accounts: Vec<CounterpartyAccount>,
}

/// One account belonging to a counterparty, tagged "revolut" or "external".
/// The populated routing fields depend on the account's country and scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterpartyAccount {
    pub id: String,
    /// 3-letter ISO code.
    pub currency: String,
    /// "revolut" or "external".
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Required for UK GBP, US USD and SWIFT accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    /// UK GBP accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_code: Option<String>,
    /// US USD accounts.
    #[serde(rename = "routing_number", default, skip_serializing_if = "Option::is_none")]
    pub routing_no: Option<String>,
    /// IBAN/SWIFT accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "bank_country", default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// "no", "expected" or "free".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_charges: Option<String>,
}

/// Request body for adding an existing Revolut account as a counterparty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InternalCounterpartyRequest {
    /// "business" or "personal".
    pub profile_type: String,
    /// Required for personal accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Required for personal accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Address of the admin for a business account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Request body for adding a counterparty with a non-Revolut bank account.
///
/// Which routing fields are required depends on the destination country and
/// currency; the remote API enforces that, not this client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalCounterpartyRequest {
    /// Must exist if `individual_name` isn't present.
    #[serde(rename = "company_name", default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Must exist if `company` isn't present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub individual_name: Option<IndividualName>,
    /// Two-letter ISO code.
    pub bank_country: String,
    /// 3-letter ISO code.
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Required for UK GBP, US USD and SWIFT accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_no: Option<String>,
    /// Required for UK GBP accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_code: Option<String>,
    /// Required for US USD accounts.
    #[serde(rename = "routing_number", default, skip_serializing_if = "Option::is_none")]
    pub routing_no: Option<String>,
    /// Required for IBAN countries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    /// Required for IBAN/SWIFT accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,
}

/// Name of an individual external account holder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndividualName {
    #[serde(rename = "first_name")]
    pub first: String,
    #[serde(rename = "last_name")]
    pub last: String,
}
