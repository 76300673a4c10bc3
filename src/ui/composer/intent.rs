//! Intents for the email composer.

use std::time::{Duration, Instant};

use crate::api::Tone;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposerIntent {
    /// Typed character appended to the email.
    InsertChar(char),
    /// Pasted text appended to the email.
    InsertText(String),
    Newline,
    Backspace,
    /// Empty the email field.
    ClearInput,

    SelectTone(Tone),
    /// Advance to the next tone in selector order.
    CycleTone,

    /// A generation request is about to be sent.
    RequestStarted,
    /// The request completed with displayable text.
    RequestSucceeded { text: String },
    /// The request failed for any reason. Carries the user-facing text.
    RequestFailed { message: String },

    /// Move the reply view by `delta` rows, clamped to `0..=max`.
    ScrollReply { delta: i32, max: u16 },

    /// The reply was written to the clipboard.
    Copied { at: Instant, duration: Duration },
    /// Periodic clock tick; expires the copy notice.
    Tick { now: Instant },
    /// User closed the copy notice.
    DismissCopyNotice,

    /// Spinner animation tick while a request is pending.
    AnimationTick,
}

impl Intent for ComposerIntent {}
