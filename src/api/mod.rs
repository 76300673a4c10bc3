//! Client side of the reply generation endpoint.
//!
//! - `types.rs` - request, tone and response payload model
//! - `error.rs` - failure classification and the user-facing message
//! - `format.rs` - structured-to-text rendering of non-string replies
//! - `client.rs` - the `ReplyGenerator` seam and its HTTP implementation

mod client;
mod error;
mod format;
mod types;

pub use client::{HttpReplyGenerator, ReplyGenerator, GENERATE_PATH};
pub use error::{GenerationError, GENERATION_FAILED_MESSAGE};
pub use format::{PrettyJson, ReplyFormatter};
pub use types::{GenerationRequest, ReplyPayload, Tone};
