use std::sync::mpsc::RecvTimeoutError;
use std::time::{Duration, Instant};

use anyhow::Context;

use crate::api::HttpReplyGenerator;
use crate::clipboard::ClipboardHandler;
use crate::config::Config;
use crate::orchestrator::ReplyOrchestrator;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the composer until the user quits.
pub fn run(config: Config) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let generator = HttpReplyGenerator::new(&config.api.base_url)
        .context("Failed to build HTTP client")?;
    let endpoint = generator.endpoint().to_string();
    tracing::info!("Generation endpoint: {}", endpoint);

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(
        ReplyOrchestrator::new(generator),
        Box::new(ClipboardHandler::new()),
        runtime.handle().clone(),
        events.sender(),
        Duration::from_millis(config.ui.copy_notice_ms),
        endpoint,
    );

    let (mut terminal, guard) = setup_terminal().context("Failed to set up terminal")?;
    let size = terminal.size().context("Failed to read terminal size")?;
    app.on_resize(size.width, size.height);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(app.poll_timeout(Instant::now(), tick_rate)) {
            Ok(AppEvent::Key(key)) => app.on_key(key),
            Ok(AppEvent::Paste(text)) => app.on_paste(text),
            Ok(AppEvent::Tick) => app.on_tick(Instant::now()),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!("Terminal resized to {}x{}", cols, rows);
                app.on_resize(cols, rows);
            }
            Ok(AppEvent::GenerationFinished(outcome)) => app.on_generation_finished(outcome),
            Err(RecvTimeoutError::Timeout) => app.expire_notices(Instant::now()),
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    // Do not wait for an abandoned request on exit.
    runtime.shutdown_background();
    Ok(())
}
