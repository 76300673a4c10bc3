//! Request orchestration for reply generation.
//!
//! Owns the composer state and is the only caller of the generation
//! endpoint. A request is accepted only when the email is non-blank and no
//! other request is in flight. Its result is folded back into state through
//! the composer reducer.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::runtime::Handle;
use uuid::Uuid;

use crate::api::{
    GenerationError, GenerationRequest, PrettyJson, ReplyFormatter, ReplyGenerator, ReplyPayload,
};
use crate::clipboard::ClipboardSink;
use crate::ui::composer::{ComposerIntent, ComposerReducer, ComposerState};
use crate::ui::mvi::Reducer;

/// Result of one generation call, tagged with the id it was started under.
#[derive(Debug)]
pub struct GenerationOutcome {
    pub request_id: Uuid,
    pub result: Result<ReplyPayload, GenerationError>,
}

pub struct ReplyOrchestrator<G> {
    generator: Arc<G>,
    formatter: Arc<dyn ReplyFormatter>,
    state: ComposerState,
    in_flight: Option<Uuid>,
}

impl<G: ReplyGenerator> ReplyOrchestrator<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator: Arc::new(generator),
            formatter: Arc::new(PrettyJson),
            state: ComposerState::default(),
            in_flight: None,
        }
    }

    /// Replace the renderer used for structured replies.
    pub fn with_formatter(mut self, formatter: Arc<dyn ReplyFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn state(&self) -> &ComposerState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Apply a user or timer intent to the composer state.
    pub fn dispatch(&mut self, intent: ComposerIntent) {
        self.state = ComposerReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    /// Enter the pending state and hand out the request to send.
    ///
    /// Returns `None` without touching state when the email is blank or a
    /// request is already in flight.
    pub fn begin(&mut self) -> Option<(Uuid, GenerationRequest)> {
        if self.in_flight.is_some() {
            tracing::debug!("Submit ignored: a request is already in flight");
            return None;
        }
        let request = self.state.request()?;

        let request_id = Uuid::new_v4();
        self.dispatch(ComposerIntent::RequestStarted);
        self.in_flight = Some(request_id);

        tracing::info!(
            request_id = %request_id,
            tone = request.tone.as_str(),
            content_chars = request.email_content.chars().count(),
            "Generating reply"
        );
        Some((request_id, request))
    }

    /// Fold a finished call back into state.
    ///
    /// Outcomes for anything other than the current in-flight request are
    /// dropped.
    pub fn complete(&mut self, outcome: GenerationOutcome) {
        if self.in_flight != Some(outcome.request_id) {
            tracing::warn!(
                request_id = %outcome.request_id,
                "Dropping outcome for a request that is not in flight"
            );
            return;
        }

        match outcome.result {
            Ok(payload) => {
                let text = payload.into_display_text(self.formatter.as_ref());
                tracing::info!(
                    request_id = %outcome.request_id,
                    reply_chars = text.chars().count(),
                    "Reply generated"
                );
                self.dispatch(ComposerIntent::RequestSucceeded { text });
            }
            Err(err) => {
                tracing::error!(
                    request_id = %outcome.request_id,
                    kind = err.kind(),
                    "Reply generation failed: {}",
                    err.details()
                );
                self.dispatch(ComposerIntent::RequestFailed {
                    message: err.user_message().to_string(),
                });
            }
        }
        self.in_flight = None;
    }

    /// Run one generation to completion on the current task.
    ///
    /// Returns `false` if the submit was ignored.
    pub async fn generate_reply(&mut self) -> bool {
        let Some((request_id, request)) = self.begin() else {
            return false;
        };
        let result = self.generator.generate(request).await;
        self.complete(GenerationOutcome { request_id, result });
        true
    }

    /// Start a generation on `runtime` and hand its outcome to `deliver`.
    ///
    /// The caller feeds the delivered outcome back through [`Self::complete`].
    /// Returns `false` if the submit was ignored.
    pub fn spawn_generate<F>(&mut self, runtime: &Handle, deliver: F) -> bool
    where
        F: FnOnce(GenerationOutcome) + Send + 'static,
    {
        let Some((request_id, request)) = self.begin() else {
            return false;
        };
        let generator = Arc::clone(&self.generator);
        runtime.spawn(async move {
            let result = generator.generate(request).await;
            deliver(GenerationOutcome { request_id, result });
        });
        true
    }

    /// Copy the current reply and raise the copy notice.
    ///
    /// A clipboard failure is only logged; the notice is shown either way.
    /// Returns `false` when there is no reply to copy.
    pub fn copy_reply(
        &mut self,
        clipboard: &mut dyn ClipboardSink,
        now: Instant,
        notice_duration: Duration,
    ) -> bool {
        if !self.state.can_copy() {
            return false;
        }
        if let Err(err) = clipboard.set_text(&self.state.reply) {
            tracing::warn!("Copy to clipboard failed: {}", err);
        }
        self.dispatch(ComposerIntent::Copied {
            at: now,
            duration: notice_duration,
        });
        true
    }
}
