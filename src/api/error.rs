//! Failure classification for the generation call.
//!
//! The variants only matter for the diagnostic log. Every one of them is
//! shown to the user as [`GENERATION_FAILED_MESSAGE`].

use thiserror::Error;

/// The only error text the UI ever displays for a failed generation.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate email reply. Please try again.";

#[derive(Debug, Error)]
pub enum GenerationError {
    /// Connection refused, DNS failure, TLS error, transport timeout.
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Endpoint answered with a non-2xx status.
    #[error("Endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body could not be read.
    #[error("Failed to read response body: {source}")]
    Body {
        #[source]
        source: reqwest::Error,
    },
}

impl GenerationError {
    /// User-friendly message for display.
    pub fn user_message(&self) -> &'static str {
        GENERATION_FAILED_MESSAGE
    }

    /// Technical details for diagnostics.
    pub fn details(&self) -> String {
        self.to_string()
    }

    /// Short classification for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            GenerationError::Transport { .. } => "transport",
            GenerationError::Status { .. } => "status",
            GenerationError::Body { .. } => "body",
        }
    }
}
