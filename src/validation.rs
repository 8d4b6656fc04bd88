//! Input validators for values the remote API is strict about.

/// Transaction types accepted by the transactions listing filter.
pub const TRANSACTION_TYPES: [&str; 14] = [
    "atm",
    "card_payment",
    "card_refund",
    "card_chargeback",
    "card_credit",
    "exchange",
    "fee",
    "loan",
    "qr_code",
    "refund",
    "tax",
    "topup",
    "topup_return",
    "transfer",
];

/// Check that the supplied string conforms to a valid Revolut API key's
/// format: at least 40 characters and a `prod_` or `sand_` prefix.
pub fn valid_key(s: &str) -> bool {
    if s.len() < 40 {
        return false;
    }

    s.starts_with("prod_") || s.starts_with("sand_")
}

/// Check a transaction type filter against the fixed enumeration.
/// Matching is exact; case variants and stray whitespace are rejected.
pub fn valid_transaction_type(t: &str) -> bool {
    TRANSACTION_TYPES.contains(&t)
}
