use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use tokio::runtime::Handle;

use crate::api::ReplyGenerator;
use crate::clipboard::ClipboardSink;
use crate::orchestrator::{GenerationOutcome, ReplyOrchestrator};
use crate::ui::composer::{reply_scroll_limit, ComposerIntent, ComposerState};
use crate::ui::events::AppEvent;
use crate::ui::input::{map_key, KeyAction};
use crate::ui::layout::layout_regions;

/// The view layer: owns the orchestrator and reacts to events.
pub struct App<G> {
    should_quit: bool,
    orchestrator: ReplyOrchestrator<G>,
    clipboard: Box<dyn ClipboardSink>,
    runtime: Handle,
    events: Sender<AppEvent>,
    copy_notice: Duration,
    endpoint: String,
    /// Last known terminal size.
    screen: Option<Rect>,
}

impl<G: ReplyGenerator> App<G> {
    pub fn new(
        orchestrator: ReplyOrchestrator<G>,
        clipboard: Box<dyn ClipboardSink>,
        runtime: Handle,
        events: Sender<AppEvent>,
        copy_notice: Duration,
        endpoint: String,
    ) -> Self {
        Self {
            should_quit: false,
            orchestrator,
            clipboard,
            runtime,
            events,
            copy_notice,
            endpoint,
            screen: None,
        }
    }

    pub fn state(&self) -> &ComposerState {
        self.orchestrator.state()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        let Some(action) = map_key(key) else {
            return;
        };
        match action {
            KeyAction::Quit => self.request_quit(),
            KeyAction::Submit => {
                self.submit();
            }
            KeyAction::Copy => {
                self.copy(Instant::now());
            }
            KeyAction::DismissNotice => self.orchestrator.dispatch(ComposerIntent::DismissCopyNotice),
            KeyAction::ScrollReply(delta) => self.scroll_reply(delta),
            KeyAction::Edit(intent) => self.orchestrator.dispatch(intent),
        }
    }

    pub fn on_paste(&mut self, text: String) {
        self.orchestrator.dispatch(ComposerIntent::InsertText(text));
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.expire_notices(now);
        self.orchestrator.dispatch(ComposerIntent::AnimationTick);
    }

    /// Clear the copy notice if its time is up.
    pub fn expire_notices(&mut self, now: Instant) {
        self.orchestrator.dispatch(ComposerIntent::Tick { now });
    }

    /// How long the event loop may block before the next state change is due.
    ///
    /// Shorter than `tick_rate` while a copy notice is about to expire.
    pub fn poll_timeout(&self, now: Instant, tick_rate: Duration) -> Duration {
        self.state()
            .copy_notice
            .map_or(tick_rate, |notice| notice.remaining(now).min(tick_rate))
    }

    pub fn on_resize(&mut self, width: u16, height: u16) {
        self.screen = Some(Rect::new(0, 0, width, height));
        self.scroll_reply(0);
    }

    fn scroll_reply(&mut self, delta: i32) {
        let max = match self.screen {
            Some(screen) => {
                let (_, body, _) = layout_regions(screen);
                reply_scroll_limit(body, self.state())
            }
            // Size unknown; the view clamps on draw.
            None => u16::MAX,
        };
        self.orchestrator
            .dispatch(ComposerIntent::ScrollReply { delta, max });
    }

    /// Start a generation in the background. The outcome comes back as
    /// [`AppEvent::GenerationFinished`].
    pub fn submit(&mut self) -> bool {
        let events = self.events.clone();
        self.orchestrator.spawn_generate(&self.runtime, move |outcome| {
            if events.send(AppEvent::GenerationFinished(outcome)).is_err() {
                tracing::debug!("UI closed before the generation finished");
            }
        })
    }

    pub fn on_generation_finished(&mut self, outcome: GenerationOutcome) {
        self.orchestrator.complete(outcome);
    }

    pub fn copy(&mut self, now: Instant) -> bool {
        self.orchestrator
            .copy_reply(self.clipboard.as_mut(), now, self.copy_notice)
    }
}
