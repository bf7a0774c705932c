//! The uniform API response envelope
//!
//! Every endpoint answers with the same shape:
//! `{ "message": "...", "status": "OK" | "KO", ...payload }`.
//! Business rejections (for example an exhausted credit balance) travel in the
//! same envelope with `status: "KO"`, distinct from protocol-level errors.

use serde::{Deserialize, Serialize};

/// Outcome marker carried by every response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "KO")]
    Ko,
}

impl ResponseStatus {
    /// Check whether this marks a successful outcome
    pub fn is_ok(&self) -> bool {
        matches!(self, ResponseStatus::Ok)
    }
}

/// Response envelope wrapping an optional, flattened payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T = ()> {
    /// Human-readable outcome message
    pub message: String,

    /// Outcome marker ("OK" or "KO")
    pub status: ResponseStatus,

    /// Endpoint-specific payload, flattened into the envelope; a `None`
    /// payload contributes no fields
    #[serde(flatten)]
    pub payload: Option<T>,
}

impl<T> Envelope<T> {
    /// Successful outcome with a payload
    pub fn ok(message: impl Into<String>, payload: T) -> Self {
        Self {
            message: message.into(),
            status: ResponseStatus::Ok,
            payload: Some(payload),
        }
    }

    /// Business rejection carrying a payload
    pub fn ko_with(message: impl Into<String>, payload: T) -> Self {
        Self {
            message: message.into(),
            status: ResponseStatus::Ko,
            payload: Some(payload),
        }
    }
}

impl Envelope<()> {
    /// Successful outcome with no payload
    pub fn ok_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: ResponseStatus::Ok,
            payload: None,
        }
    }

    /// Business rejection or error with no payload
    pub fn ko(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: ResponseStatus::Ko,
            payload: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct PostPayload {
        post: serde_json::Value,
    }

    #[test]
    fn test_status_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&ResponseStatus::Ok).unwrap(), "\"OK\"");
        assert_eq!(serde_json::to_string(&ResponseStatus::Ko).unwrap(), "\"KO\"");
    }

    #[test]
    fn test_payload_is_flattened() {
        let envelope = Envelope::ok(
            "Post created successfully",
            PostPayload {
                post: json!({"id": 1}),
            },
        );
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["status"], "OK");
        assert_eq!(value["post"]["id"], 1);
    }

    #[test]
    fn test_empty_payload_is_omitted() {
        let envelope = Envelope::ko("Votre crédit est insuffisant");
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["status"], "KO");
        assert_eq!(value.as_object().unwrap().len(), 2);
    }
}
