//! Keyboard handling for the preview screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use preview_core::Msg;

/// What a key press asks the application to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward a message to the preview state machine.
    Dispatch(Msg),
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Quit,
    None,
}

impl KeyAction {
    /// Convert a key event to an action given the URL currently in the input.
    pub fn from_key_event(event: KeyEvent, url: &str) -> Self {
        match (event.code, event.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL)
            | (KeyCode::Char('q'), KeyModifiers::CONTROL) => KeyAction::Quit,

            (KeyCode::Enter, _) => KeyAction::Dispatch(Msg::PreviewRequested),
            (KeyCode::Esc, _) | (KeyCode::Char('l'), KeyModifiers::CONTROL) => {
                KeyAction::Dispatch(Msg::ClearRequested)
            }

            // Line editing on the URL input; the cursor always sits at the end.
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                KeyAction::Dispatch(Msg::UrlChanged(String::new()))
            }
            (KeyCode::Char('w'), KeyModifiers::CONTROL) => {
                KeyAction::Dispatch(Msg::UrlChanged(delete_last_segment(url)))
            }
            (KeyCode::Backspace, _) => {
                let mut text = url.to_string();
                if text.pop().is_none() {
                    return KeyAction::None;
                }
                KeyAction::Dispatch(Msg::UrlChanged(text))
            }
            (KeyCode::Char(c), modifiers) if is_text_input(modifiers) => {
                KeyAction::Dispatch(Msg::UrlChanged(format!("{url}{c}")))
            }

            (KeyCode::Up, _) => KeyAction::ScrollUp,
            (KeyCode::Down, _) => KeyAction::ScrollDown,
            (KeyCode::PageUp, _) => KeyAction::PageUp,
            (KeyCode::PageDown, _) => KeyAction::PageDown,

            _ => KeyAction::None,
        }
    }
}

/// Plain and shifted characters, plus AltGr which some terminals report as Ctrl+Alt.
fn is_text_input(modifiers: KeyModifiers) -> bool {
    let without_shift = modifiers.difference(KeyModifiers::SHIFT);
    without_shift.is_empty() || without_shift == KeyModifiers::CONTROL | KeyModifiers::ALT
}

/// Removes trailing separators and then the path or host segment before them.
fn delete_last_segment(url: &str) -> String {
    let trimmed = url.trim_end_matches(is_separator);
    match trimmed.rfind(is_separator) {
        Some(idx) => trimmed[..=idx].to_string(),
        None => String::new(),
    }
}

fn is_separator(c: char) -> bool {
    matches!(c, '/' | '.' | '?' | '&' | '=' | ':' | ' ')
}

/// Key binding for display in the footer.
pub struct KeyBinding {
    pub keys: &'static str,
    pub description: &'static str,
}

pub fn key_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding {
            keys: "Enter",
            description: "Preview",
        },
        KeyBinding {
            keys: "Esc",
            description: "Clear",
        },
        KeyBinding {
            keys: "↑/↓ PgUp/PgDn",
            description: "Scroll",
        },
        KeyBinding {
            keys: "Ctrl-U",
            description: "Erase URL",
        },
        KeyBinding {
            keys: "Ctrl-C",
            description: "Quit",
        },
    ]
}
