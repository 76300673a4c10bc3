//! State for the email composer.

use std::time::{Duration, Instant};

use crate::api::{GenerationRequest, Tone};
use crate::ui::mvi::UiState;

/// The transient "Copied to clipboard" acknowledgement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyNotice {
    pub shown_at: Instant,
    pub duration: Duration,
}

impl CopyNotice {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.duration
    }

    /// Time left before the notice expires. Zero once expired.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.duration
            .saturating_sub(now.saturating_duration_since(self.shown_at))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComposerState {
    /// Original email the reply is generated for.
    pub email_content: String,
    pub tone: Tone,
    /// Last generated reply. Empty until a request succeeds.
    pub reply: String,
    /// First visible row of the wrapped reply.
    pub reply_scroll: u16,
    /// A generation request is in flight.
    pub pending: bool,
    /// User-facing error from the last request.
    pub error: Option<String>,
    pub copy_notice: Option<CopyNotice>,
    /// Spinner frame counter.
    pub animation_tick: u8,
}

impl UiState for ComposerState {}

impl ComposerState {
    /// Submit is enabled: there is non-blank content and nothing in flight.
    pub fn can_submit(&self) -> bool {
        !self.pending && !self.email_content.trim().is_empty()
    }

    /// There is a reply to copy.
    pub fn can_copy(&self) -> bool {
        !self.reply.is_empty()
    }

    pub fn copy_notice_visible(&self) -> bool {
        self.copy_notice.is_some()
    }

    /// Request for the current form, if one may be sent.
    pub fn request(&self) -> Option<GenerationRequest> {
        if self.pending {
            return None;
        }
        GenerationRequest::new(self.email_content.clone(), self.tone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_empty() {
        let state = ComposerState::default();
        assert!(state.email_content.is_empty());
        assert_eq!(state.tone, Tone::Unspecified);
        assert!(state.reply.is_empty());
        assert_eq!(state.reply_scroll, 0);
        assert!(!state.pending);
        assert!(state.error.is_none());
        assert!(!state.copy_notice_visible());
    }

    #[test]
    fn whitespace_only_content_cannot_submit() {
        let state = ComposerState {
            email_content: " \n\t".into(),
            ..Default::default()
        };
        assert!(!state.can_submit());
        assert!(state.request().is_none());
    }

    #[test]
    fn pending_state_cannot_submit() {
        let state = ComposerState {
            email_content: "Hi".into(),
            pending: true,
            ..Default::default()
        };
        assert!(!state.can_submit());
        assert!(state.request().is_none());
    }

    #[test]
    fn request_carries_content_and_tone() {
        let state = ComposerState {
            email_content: "Hi, can we reschedule?".into(),
            tone: Tone::Friendly,
            ..Default::default()
        };
        let request = state.request().unwrap();
        assert_eq!(request.email_content, "Hi, can we reschedule?");
        assert_eq!(request.tone, Tone::Friendly);
    }

    #[test]
    fn notice_reports_remaining_time() {
        let shown_at = Instant::now();
        let notice = CopyNotice {
            shown_at,
            duration: Duration::from_millis(2000),
        };
        assert_eq!(
            notice.remaining(shown_at + Duration::from_millis(1900)),
            Duration::from_millis(100)
        );
        assert_eq!(
            notice.remaining(shown_at + Duration::from_millis(2500)),
            Duration::ZERO
        );
    }

    #[test]
    fn notice_expires_after_duration() {
        let shown_at = Instant::now();
        let notice = CopyNotice {
            shown_at,
            duration: Duration::from_millis(2000),
        };
        assert!(!notice.is_expired(shown_at + Duration::from_millis(1999)));
        assert!(notice.is_expired(shown_at + Duration::from_millis(2000)));
    }
}
