//! Unofficial client library for the Revolut for Business REST API.
//!
//! The API key's prefix selects the environment: `sand_` keys talk to the
//! sandbox, `prod_` keys to production. All requests carry the key as a
//! bearer credential.
//!
//! - [`api`] - the HTTP client and one module of operations per resource
//!   (accounts, counterparties, transfers, payments, transactions, webhooks)
//! - [`models`] - typed request/response records matching the wire format
//! - [`cache`] - local JSON-file caches with lazy fill-on-miss
//! - [`error`] - the error type, status-code table and envelope decoding
//! - [`validation`] - API key and transaction type checks
//!
//! ```no_run
//! use revolut_business::api::Client;
//!
//! # async fn demo() -> revolut_business::error::Result<()> {
//! let client = Client::new("sand_...")?;
//! for account in client.accounts().await? {
//!     println!("{}: {:?} {}", account.id, account.balance, account.currency);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cache;
pub mod error;
pub mod models;
pub mod validation;

pub use api::{Client, TransactionFilter};
pub use error::{Error, Result};
