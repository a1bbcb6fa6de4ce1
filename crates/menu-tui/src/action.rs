//! Action enum: what a key press asks the menu system to do.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;

use menu_core::config::KeyConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // ── Menu input ───────────────────────────────────────────────────────────
    Next,
    Prev,
    Select,
    Back,
    Reset,

    // ── System ───────────────────────────────────────────────────────────────
    Quit,
    Noop,
}

/// Key bindings resolved from the `[keys]` config section.
pub struct KeyMap {
    bindings: Vec<(KeyCode, Action)>,
}

impl KeyMap {
    pub fn from_config(keys: &KeyConfig) -> Self {
        let groups = [
            (&keys.next, Action::Next),
            (&keys.prev, Action::Prev),
            (&keys.select, Action::Select),
            (&keys.back, Action::Back),
            (&keys.reset, Action::Reset),
            (&keys.quit, Action::Quit),
        ];

        let mut bindings = Vec::new();
        for (names, action) in groups {
            for name in names {
                match parse_key(name) {
                    Some(code) => bindings.push((code, action)),
                    None => warn!("ignoring unknown key name {:?} for {:?}", name, action),
                }
            }
        }
        Self { bindings }
    }

    pub fn action_for(&self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }
        self.bindings
            .iter()
            .find(|(code, _)| *code == key.code)
            .map_or(Action::Noop, |&(_, action)| action)
    }

    /// Names of the first key bound to `action`, for the hints bar.
    pub fn hint(&self, action: Action) -> Option<String> {
        self.bindings
            .iter()
            .find(|(_, a)| *a == action)
            .map(|(code, _)| key_label(*code))
    }
}

pub fn parse_key(name: &str) -> Option<KeyCode> {
    let lower = name.trim().to_ascii_lowercase();
    let code = match lower.as_str() {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        _ => {
            let mut chars = name.trim().chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(code)
}

fn key_label(code: KeyCode) -> String {
    match code {
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Backspace => "Bksp".to_string(),
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        other => format!("{other:?}"),
    }
}
