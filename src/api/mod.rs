//! HTTP access to the Revolut for Business API.
//!
//! [`client::Client`] owns the connection and credential; each resource
//! module hangs its operations off the client as an `impl` block.

pub mod client;

mod accounts;
mod counterparties;
mod payments;
mod transactions;
mod transfers;
mod webhooks;

pub use client::Client;
pub use transactions::TransactionFilter;

// API endpoint path segments.
pub(crate) const EP_ACCOUNTS: &str = "accounts";
pub(crate) const EP_BANK_DETAILS: &str = "bank-details";
pub(crate) const EP_COUNTERPARTIES: &str = "counterparties";
pub(crate) const EP_COUNTERPARTY: &str = "counterparty";
pub(crate) const EP_TRANSFER: &str = "transfer";
pub(crate) const EP_PAY: &str = "pay";
pub(crate) const EP_TRANSACTIONS: &str = "transactions";
pub(crate) const EP_TRANSACTION: &str = "transaction";
pub(crate) const EP_WEBHOOK: &str = "webhook";
