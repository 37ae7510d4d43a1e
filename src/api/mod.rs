//! Wire payloads and the HTTP client for the bot relay.
//!
//! The relay exposes a single `POST` endpoint taking `{ bot, message }` and
//! answering `{ reply }`. Everything that can go wrong on that round trip is
//! discriminated in [`SendError`] so the caller can decide, at one place,
//! how failures surface to the user.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChatRequest<'a> {
    pub bot: &'a str,
    pub message: &'a str,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ChatReply {
    pub reply: String,
}

/// Why a send cycle failed. Collapsed to a single user-visible message at
/// the send-cycle boundary; the detail only feeds diagnostics.
#[derive(Debug)]
pub enum SendError {
    /// The request never completed (connection refused, DNS, mid-flight
    /// transport error).
    Transport(reqwest::Error),

    /// The relay answered with a non-success status.
    Status(StatusCode),

    /// The response body was not the expected JSON shape.
    Body(reqwest::Error),
}

impl fmt::Display for SendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendError::Transport(source) => write!(f, "request failed: {source}"),
            SendError::Status(status) => write!(f, "relay answered {status}"),
            SendError::Body(source) => write!(f, "malformed reply body: {source}"),
        }
    }
}

impl StdError for SendError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            SendError::Transport(source) | SendError::Body(source) => Some(source),
            SendError::Status(_) => None,
        }
    }
}

/// Thin wrapper around [`reqwest::Client`] pinned to one relay endpoint.
///
/// Cheap to clone; spawned send tasks each take their own copy.
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ChatClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// One round trip to the relay. No timeout, no retry; a cycle that has
    /// been dispatched always runs to a settled outcome.
    pub async fn send_chat(&self, bot: &str, message: &str) -> Result<String, SendError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&ChatRequest { bot, message })
            .send()
            .await
            .map_err(SendError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SendError::Status(status));
        }

        let body: ChatReply = response.json().await.map_err(SendError::Body)?;
        Ok(body.reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_to_relay_shape() {
        let request = ChatRequest {
            bot: "claude",
            message: "hi",
        };
        let value = serde_json::to_value(&request).expect("serialize");
        assert_eq!(value, json!({"bot": "claude", "message": "hi"}));
    }

    #[test]
    fn reply_deserializes_from_relay_shape() {
        let reply: ChatReply = serde_json::from_str(r#"{"reply":"hello"}"#).expect("deserialize");
        assert_eq!(reply.reply, "hello");
    }

    #[test]
    fn extra_reply_fields_are_ignored() {
        let reply: ChatReply =
            serde_json::from_str(r#"{"reply":"hello","usage":{"tokens":3}}"#).expect("deserialize");
        assert_eq!(reply.reply, "hello");
    }

    #[test]
    fn missing_reply_field_is_an_error() {
        let parsed = serde_json::from_str::<ChatReply>(r#"{"answer":"hello"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn status_errors_name_the_code() {
        let err = SendError::Status(StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("500"));
    }
}
