//! Webhook envelope types
//!
//! The envelope is the top-level payload a webhook delivery carries:
//! the event descriptor, the delivery attempt, and the event details.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Webhook event descriptor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WebhookEvent {
    pub id: String,

    #[serde(rename = "type")]
    pub event_type: String,

    pub version: String,

    /// Epoch milliseconds, carried as a string on the wire.
    pub fired_at: String,
}

impl WebhookEvent {
    /// Parse `fired_at` into a UTC timestamp.
    ///
    /// Returns `None` when the field is not a valid epoch-milliseconds
    /// string.
    pub fn fired_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_epoch_millis(&self.fired_at)
    }
}

/// A single delivery attempt of a webhook event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WebhookEventAttempt {
    pub id: String,

    /// Epoch milliseconds, carried as a string on the wire.
    pub sent_at: String,
}

impl WebhookEventAttempt {
    /// Parse `sent_at` into a UTC timestamp.
    pub fn sent_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_epoch_millis(&self.sent_at)
    }
}

/// The full webhook payload as delivered on the wire
///
/// `details` is an open-ended JSON value whose shape depends on the event
/// type. Unrecognized top-level fields are collected into `extra` and
/// written back on serialization, so a re-serialized envelope carries
/// exactly the fields the sender signed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WebhookEnvelope {
    pub webhook_event: WebhookEvent,

    pub webhook_event_attempt: WebhookEventAttempt,

    #[serde(default)]
    pub details: Value,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn parse_epoch_millis(value: &str) -> Option<DateTime<Utc>> {
    let millis = value.parse::<i64>().ok()?;
    Utc.timestamp_millis_opt(millis).single()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_envelope() -> WebhookEnvelope {
        WebhookEnvelope {
            webhook_event: WebhookEvent {
                id: "01j3521znn3b6wderr4vbyq18n".to_string(),
                event_type: "company.created".to_string(),
                version: "v1".to_string(),
                fired_at: "1722572118554".to_string(),
            },
            webhook_event_attempt: WebhookEventAttempt {
                id: "01j354j6nkwh3mdvhs6dsmswt8".to_string(),
                sent_at: "1722572118554".to_string(),
            },
            details: json!({"data": {"company": {"name": "Pyngy URL Shortenr"}}}),
            extra: Map::new(),
        }
    }

    #[test]
    fn test_envelope_serialization_roundtrip() {
        let envelope = sample_envelope();

        let json = serde_json::to_string(&envelope).unwrap();
        let parsed: WebhookEnvelope = serde_json::from_str(&json).unwrap();
        assert_eq!(envelope, parsed);
    }

    #[test]
    fn test_event_type_field_renamed() {
        let envelope = sample_envelope();
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(
            json["webhook_event"]["type"],
            json!("company.created"),
            "event_type must serialize under the wire name 'type'"
        );
    }

    #[test]
    fn test_missing_details_defaults_to_null() {
        let json = r#"{
            "webhook_event": {
                "id": "01j3521znn3b6wderr4vbyq18n",
                "type": "company.created",
                "version": "v1",
                "fired_at": "1722572118554"
            },
            "webhook_event_attempt": {
                "id": "01j354j6nkwh3mdvhs6dsmswt8",
                "sent_at": "1722572118554"
            }
        }"#;

        let envelope: WebhookEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.details, Value::Null);
    }

    #[test]
    fn test_extra_fields_preserved() {
        let json = r#"{
            "webhook_event": {
                "id": "01j3521znn3b6wderr4vbyq18n",
                "type": "company.created",
                "version": "v1",
                "fired_at": "1722572118554"
            },
            "webhook_event_attempt": {
                "id": "01j354j6nkwh3mdvhs6dsmswt8",
                "sent_at": "1722572118554"
            },
            "details": {},
            "delivery_region": "eu-west-1"
        }"#;

        let envelope: WebhookEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(
            envelope.extra.get("delivery_region"),
            Some(&json!("eu-west-1"))
        );

        let reserialized = serde_json::to_value(&envelope).unwrap();
        assert_eq!(reserialized["delivery_region"], json!("eu-west-1"));
    }

    #[test]
    fn test_fired_at_utc() {
        let envelope = sample_envelope();
        let fired_at = envelope.webhook_event.fired_at_utc().unwrap();

        assert_eq!(fired_at.timestamp_millis(), 1722572118554);
        assert_eq!(fired_at.to_rfc3339(), "2024-08-02T04:15:18.554+00:00");
    }

    #[test]
    fn test_sent_at_utc() {
        let envelope = sample_envelope();
        let sent_at = envelope.webhook_event_attempt.sent_at_utc().unwrap();

        assert_eq!(sent_at.timestamp_millis(), 1722572118554);
    }

    #[test]
    fn test_non_numeric_timestamp_is_none() {
        let mut envelope = sample_envelope();
        envelope.webhook_event.fired_at = "yesterday".to_string();

        assert!(envelope.webhook_event.fired_at_utc().is_none());
    }
}
