//! Reducer for the email composer.

use crate::ui::mvi::Reducer;

use super::intent::ComposerIntent;
use super::state::{ComposerState, CopyNotice};

pub struct ComposerReducer;

impl Reducer for ComposerReducer {
    type State = ComposerState;
    type Intent = ComposerIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // The form is read-only while a request is in flight.
            ComposerIntent::InsertChar(_)
            | ComposerIntent::InsertText(_)
            | ComposerIntent::Newline
            | ComposerIntent::Backspace
            | ComposerIntent::ClearInput
            | ComposerIntent::SelectTone(_)
            | ComposerIntent::CycleTone
                if state.pending =>
            {
                state
            }

            ComposerIntent::InsertChar(ch) => {
                state.email_content.push(ch);
                state
            }
            ComposerIntent::InsertText(text) => {
                // Normalize CRLF from terminals that paste Windows line endings.
                state.email_content.push_str(&text.replace("\r\n", "\n").replace('\r', "\n"));
                state
            }
            ComposerIntent::Newline => {
                state.email_content.push('\n');
                state
            }
            ComposerIntent::Backspace => {
                state.email_content.pop();
                state
            }
            ComposerIntent::ClearInput => {
                state.email_content.clear();
                state
            }

            ComposerIntent::SelectTone(tone) => {
                state.tone = tone;
                state
            }
            ComposerIntent::CycleTone => {
                state.tone = state.tone.next();
                state
            }

            ComposerIntent::RequestStarted => {
                if !state.can_submit() {
                    return state;
                }
                state.reply.clear();
                state.reply_scroll = 0;
                state.error = None;
                state.pending = true;
                state.animation_tick = 0;
                state
            }
            ComposerIntent::RequestSucceeded { text } => {
                state.reply = text;
                state.reply_scroll = 0;
                state.error = None;
                state.pending = false;
                state
            }
            ComposerIntent::RequestFailed { message } => {
                state.reply.clear();
                state.reply_scroll = 0;
                state.error = Some(message);
                state.pending = false;
                state
            }
            ComposerIntent::ScrollReply { delta, max } => {
                let row = (i32::from(state.reply_scroll) + delta).clamp(0, i32::from(max));
                state.reply_scroll = u16::try_from(row).unwrap_or(max);
                state
            }

            ComposerIntent::Copied { at, duration } => {
                if state.can_copy() {
                    state.copy_notice = Some(CopyNotice {
                        shown_at: at,
                        duration,
                    });
                }
                state
            }
            ComposerIntent::Tick { now } => {
                if state.copy_notice.is_some_and(|notice| notice.is_expired(now)) {
                    state.copy_notice = None;
                }
                state
            }
            ComposerIntent::DismissCopyNotice => {
                state.copy_notice = None;
                state
            }

            ComposerIntent::AnimationTick => {
                if state.pending {
                    state.animation_tick = state.animation_tick.wrapping_add(1);
                }
                state
            }
        }
    }
}
