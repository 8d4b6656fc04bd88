//! Typed records for the Revolut for Business wire format.
//!
//! This module organizes the request and response structs per API resource.
//! Field names mirror the documented JSON contract; optional wire fields are
//! `Option`s that stay off the wire entirely when absent.

pub mod account;
pub mod counterparty;
pub mod transaction;
pub mod webhook;

// Re-export commonly used types for convenience
pub use account::{Account, Address, BankDetails, EstimatedTime};
pub use counterparty::{
    Counterparty, CounterpartyAccount, ExternalCounterpartyRequest, IndividualName,
    InternalCounterpartyRequest,
};
pub use transaction::{
    Card, Leg, LegCounterparty, Merchant, PaymentRequest, PaymentResponse, Receiver,
    TransactionStatus, TransferRequest, TransferResponse,
};
pub use webhook::{WebhookPayload, WebhookRequest, EVENT_CREATED, EVENT_STATE_CHANGED};
