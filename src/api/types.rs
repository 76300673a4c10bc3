use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::api::format::ReplyFormatter;

/// Optional style hint sent along with the email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tone {
    /// No preference. Sent as an empty string.
    #[default]
    #[serde(rename = "")]
    Unspecified,
    #[serde(rename = "professional")]
    Professional,
    #[serde(rename = "casual")]
    Casual,
    #[serde(rename = "friendly")]
    Friendly,
}

impl Tone {
    /// Selector order.
    pub const ALL: [Tone; 4] = [
        Tone::Unspecified,
        Tone::Professional,
        Tone::Casual,
        Tone::Friendly,
    ];

    /// Value sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Unspecified => "",
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Friendly => "friendly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tone::Unspecified => "None",
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
            Tone::Friendly => "Friendly",
        }
    }

    /// Next tone in selector order, wrapping around.
    pub fn next(self) -> Tone {
        let index = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Body of `POST /api/email/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub email_content: String,
    pub tone: Tone,
}

impl GenerationRequest {
    /// Builds a request, or `None` when the content is blank after trimming.
    pub fn new(email_content: impl Into<String>, tone: Tone) -> Option<Self> {
        let email_content = email_content.into();
        if email_content.trim().is_empty() {
            return None;
        }
        Some(Self { email_content, tone })
    }
}

/// Successful response body.
///
/// The endpoint is not strictly typed: it may answer with plain text or
/// with arbitrary JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplyPayload {
    Text(String),
    Structured(Value),
}

impl ReplyPayload {
    /// Decodes a raw response body.
    ///
    /// A body that parses as a JSON string yields the string itself, any
    /// other JSON value is kept structured, and anything unparsable is
    /// taken verbatim.
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(Value::String(text)) => ReplyPayload::Text(text),
            Ok(value) => ReplyPayload::Structured(value),
            Err(_) => ReplyPayload::Text(body.to_string()),
        }
    }

    /// Text shown in the reply panel.
    pub fn into_display_text(self, formatter: &dyn ReplyFormatter) -> String {
        match self {
            ReplyPayload::Text(text) => text,
            ReplyPayload::Structured(value) => formatter.format(&value),
        }
    }
}
