//! Rendering for the email composer form.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::api::Tone;
use crate::ui::layout::bottom_centered_rect;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR, STATUS_OK,
};

use super::state::ComposerState;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const COPY_NOTICE: &str = "Copied to clipboard";
const COPY_NOTICE_WIDTH: u16 = 27;

/// Screen areas of the composer form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ComposerRegions {
    email: Rect,
    tone: Rect,
    action: Rect,
    error: Option<Rect>,
    reply: Option<Rect>,
}

fn composer_regions(area: Rect, state: &ComposerState) -> ComposerRegions {
    let has_error = state.error.is_some();
    let has_reply = !state.reply.is_empty();

    let mut constraints = vec![
        Constraint::Min(5),
        Constraint::Length(3),
        Constraint::Length(3),
    ];
    if has_error {
        constraints.push(Constraint::Length(3));
    }
    if has_reply {
        constraints.push(Constraint::Min(5));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut next = 3;
    let error = has_error.then(|| {
        next += 1;
        chunks[next - 1]
    });
    let reply = has_reply.then(|| chunks[next]);

    ComposerRegions {
        email: chunks[0],
        tone: chunks[1],
        action: chunks[2],
        error,
        reply,
    }
}

/// Render the whole form into `area`, plus the copy notice overlay.
pub fn render_composer(frame: &mut Frame, area: Rect, state: &ComposerState) {
    let regions = composer_regions(area, state);

    render_email(frame, regions.email, state);
    render_tone(frame, regions.tone, state.tone, state.pending);
    render_action(frame, regions.action, state);

    if let (Some(rect), Some(error)) = (regions.error, state.error.as_deref()) {
        render_error(frame, rect, error);
    }
    if let Some(rect) = regions.reply {
        render_reply(frame, rect, state);
    }
    if state.copy_notice_visible() {
        render_copy_notice(frame, area);
    }
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn render_email(frame: &mut Frame, area: Rect, state: &ComposerState) {
    let block = panel(" Original Email Content ");
    let inner = block.inner(area);

    let mut text = state.email_content.clone();
    if !state.pending {
        text.push('▏');
    }
    let scroll = scroll_offset(&text, inner.width, inner.height);

    let style = if state.pending {
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(HEADER_TEXT)
    };

    let paragraph = Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Rows `text` occupies once word-wrapped to `width` columns.
fn wrapped_rows(text: &str, width: u16) -> u16 {
    let rows = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .line_count(width);
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Keeps the tail of the text in view.
fn scroll_offset(text: &str, width: u16, visible_rows: u16) -> u16 {
    wrapped_rows(text, width).saturating_sub(visible_rows)
}

fn reply_block() -> Block<'static> {
    panel(" Generated Reply ").title_bottom(
        Line::from(Span::styled(
            " Ctrl+Y: Copy to Clipboard │ PgUp/PgDn: Scroll ",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        ))
        .right_aligned(),
    )
}

/// Largest useful reply scroll when the composer is drawn into `area`.
///
/// Zero when there is no reply or it fits in its panel.
pub fn reply_scroll_limit(area: Rect, state: &ComposerState) -> u16 {
    composer_regions(area, state)
        .reply
        .map_or(0, |rect| reply_limit_in(rect, &state.reply))
}

fn reply_limit_in(rect: Rect, reply: &str) -> u16 {
    let inner = reply_block().inner(rect);
    wrapped_rows(reply, inner.width).saturating_sub(inner.height)
}

fn tone_line(selected: Tone) -> Line<'static> {
    let mut spans = Vec::with_capacity(Tone::ALL.len() * 2);
    for tone in Tone::ALL {
        let style = if tone == selected {
            Style::default()
                .fg(HEADER_TEXT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM)
        };
        spans.push(Span::styled(format!(" {} ", tone.label()), style));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

fn render_tone(frame: &mut Frame, area: Rect, tone: Tone, pending: bool) {
    let mut line = tone_line(tone);
    if pending {
        line = line.style(Style::default().add_modifier(Modifier::DIM));
    }
    frame.render_widget(Paragraph::new(line).block(panel(" Tone (Optional) ")), area);
}

fn render_action(frame: &mut Frame, area: Rect, state: &ComposerState) {
    let line = if state.pending {
        let spinner = SPINNER_FRAMES[(state.animation_tick as usize) % SPINNER_FRAMES.len()];
        Line::from(vec![
            Span::styled(format!("{} ", spinner), Style::default().fg(STATUS_OK)),
            Span::styled("Generating reply...", Style::default().fg(HEADER_TEXT)),
        ])
    } else if state.can_submit() {
        Line::from(Span::styled(
            "Generate Reply",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            "Generate Reply",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        ))
    };

    let paragraph = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(paragraph, area);
}

fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let line = Line::from(vec![
        Span::styled("✗ ", Style::default().fg(STATUS_ERROR)),
        Span::styled(error.to_string(), Style::default().fg(HEADER_TEXT)),
    ]);
    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(STATUS_ERROR)),
    );
    frame.render_widget(paragraph, area);
}

fn render_reply(frame: &mut Frame, area: Rect, state: &ComposerState) {
    // Stored scroll may be stale after a resize.
    let scroll = state.reply_scroll.min(reply_limit_in(area, &state.reply));
    let paragraph = Paragraph::new(state.reply.clone())
        .style(Style::default().fg(HEADER_TEXT))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(reply_block());
    frame.render_widget(paragraph, area);
}

fn render_copy_notice(frame: &mut Frame, area: Rect) {
    let rect = bottom_centered_rect(COPY_NOTICE_WIDTH, 3, area);
    frame.render_widget(Clear, rect);
    let paragraph = Paragraph::new(Line::from(vec![
        Span::styled("✓ ", Style::default().fg(STATUS_OK)),
        Span::styled(COPY_NOTICE, Style::default().fg(HEADER_TEXT)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER)),
    );
    frame.render_widget(paragraph, rect);
}
