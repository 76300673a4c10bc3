use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key chord and what it does, in display order. Fits an 80-column terminal.
const KEY_HINTS: &[(&str, &str)] = &[
    ("Ctrl+G", "Generate"),
    ("Tab", "Tone"),
    ("Ctrl+Y", "Copy"),
    ("PgUp/Dn", "Scroll"),
    ("Ctrl+Q", "Quit"),
];

const SEPARATOR: &str = " │ ";

/// Bottom bar: key hints on the left, crate version on the right.
#[derive(Default)]
pub struct Footer;

impl Footer {
    pub fn new() -> Self {
        Self
    }

    fn hint_spans(style: Style) -> Vec<Span<'static>> {
        let key_style = style.add_modifier(Modifier::BOLD);
        let mut spans = vec![Span::styled(" ", style)];
        for (i, (key, action)) in KEY_HINTS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(SEPARATOR, style));
            }
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::styled(format!(": {}", action), style));
        }
        spans
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let mut spans = Self::hint_spans(text_style);
        let version = format!("v{} ", VERSION);

        // Widths in chars; the separator is multi-byte.
        let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let inner_width = area.width.saturating_sub(2) as usize;
        let padding = inner_width
            .saturating_sub(used)
            .saturating_sub(version.chars().count());

        spans.push(Span::styled(" ".repeat(padding), text_style));
        spans.push(Span::styled(version, text_style));

        Paragraph::new(Line::from(spans))
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
