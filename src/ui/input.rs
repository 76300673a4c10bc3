use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::composer::ComposerIntent;

/// Rows moved by PageUp/PageDown in the reply panel.
const REPLY_PAGE_ROWS: i32 = 5;

/// What a key press asks the app to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Submit,
    Copy,
    DismissNotice,
    /// Scroll the reply panel by this many rows (negative is up).
    ScrollReply(i32),
    /// Change the form contents.
    Edit(ComposerIntent),
}

pub fn map_key(key: KeyEvent) -> Option<KeyAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        return Some(KeyAction::Quit);
    }
    if is_ctrl_char(key, 'g') {
        return Some(KeyAction::Submit);
    }
    if is_ctrl_char(key, 'y') {
        return Some(KeyAction::Copy);
    }
    if is_ctrl_char(key, 'l') {
        return Some(KeyAction::Edit(ComposerIntent::ClearInput));
    }

    let intent = match key.code {
        KeyCode::Esc => return Some(KeyAction::DismissNotice),
        KeyCode::PageUp => return Some(KeyAction::ScrollReply(-REPLY_PAGE_ROWS)),
        KeyCode::PageDown => return Some(KeyAction::ScrollReply(REPLY_PAGE_ROWS)),
        KeyCode::Up if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(KeyAction::ScrollReply(-1))
        }
        KeyCode::Down if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(KeyAction::ScrollReply(1))
        }
        KeyCode::Tab => ComposerIntent::CycleTone,
        KeyCode::Enter => ComposerIntent::Newline,
        KeyCode::Backspace => ComposerIntent::Backspace,
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            ComposerIntent::InsertChar(ch)
        }
        _ => return None,
    };
    Some(KeyAction::Edit(intent))
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
