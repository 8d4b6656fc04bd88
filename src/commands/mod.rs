//! Command handlers. Each module is one subcommand group; all of them take
//! the loaded configuration by reference and print their results to stdout.

pub mod account;
pub mod cache;
pub mod config;
pub mod counterparty;
pub mod json;
pub mod payment;
pub mod transfer;
pub mod webhook;

/// Shorten a UUID to its last element for display purposes.
pub(crate) fn short_uuid(id: &str) -> &str {
    id.rsplit('-').next().unwrap_or(id)
}

pub(crate) fn display_id(id: &str, short: bool) -> &str {
    if short {
        short_uuid(id)
    } else {
        id
    }
}

/// Render an ISO timestamp compactly; anything unparseable passes through.
pub(crate) fn short_time(iso: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(iso) {
        Ok(t) => t.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => iso.to_string(),
    }
}
