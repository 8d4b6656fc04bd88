//! Webhook registration and inbound event payloads.

use serde::{Deserialize, Serialize};

/// Event name for hooks fired when a transaction is created.
pub const EVENT_CREATED: &str = "TransactionCreated";
/// Event name for hooks fired when a transaction changes state.
pub const EVENT_STATE_CHANGED: &str = "TransactionStateChanged";

/// Request body for registering a callback URL. The URL must be HTTPS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookRequest {
    pub url: String,
}

/// An inbound webhook delivery. The `event` field discriminates between
/// [`EVENT_CREATED`] and [`EVENT_STATE_CHANGED`]; `data` is left as raw JSON
/// for the receiver to decode once the event kind is known.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookPayload {
    pub event: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub data: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_discriminator() {
        let body = r#"{
            "event": "TransactionStateChanged",
            "timestamp": "2020-02-01T10:00:00Z",
            "data": {"id": "tx-1", "old_state": "pending", "new_state": "completed"}
        }"#;
        let payload: WebhookPayload = serde_json::from_str(body).unwrap();
        assert_eq!(payload.event, EVENT_STATE_CHANGED);
        assert_eq!(payload.data["new_state"], "completed");
    }
}
