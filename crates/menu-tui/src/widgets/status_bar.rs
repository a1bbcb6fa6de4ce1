//! Status bar: last callback message, separator, and key hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::action::{Action, KeyMap};
use crate::theme::{C_ACCENT, C_MUTED, C_ON, C_SECONDARY, C_SEPARATOR};

/// Draw the status line: wrap indicator and the last callback message.
pub fn draw_status_bar(frame: &mut Frame, area: Rect, status: &str, wrap: bool) {
    let wrap_span = if wrap {
        Span::styled("↻", Style::default().fg(C_ON))
    } else {
        Span::styled("⇥", Style::default().fg(C_ACCENT))
    };

    let status_span = Span::styled(status.to_string(), Style::default().fg(C_SECONDARY));

    let line = Line::from(vec![Span::raw(" "), wrap_span, Span::raw(" "), status_span]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw a horizontal separator line.
pub fn draw_separator(frame: &mut Frame, area: Rect) {
    let line = Line::from(Span::styled(
        "─".repeat(area.width as usize),
        Style::default().fg(C_SEPARATOR),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw the keybindings footer bar (one row).
pub fn draw_keys_bar(frame: &mut Frame, area: Rect, keys: &KeyMap, editing: bool) {
    let label = if editing { " EDIT " } else { " MENU " };
    let mut spans = vec![Span::styled(
        label,
        Style::default().fg(C_ACCENT).add_modifier(Modifier::BOLD),
    )];
    spans.push(Span::raw(" "));
    spans.push(Span::styled(key_hints(keys, editing), Style::default().fg(C_MUTED)));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Hint text built from the first key bound to each action.
pub fn key_hints(keys: &KeyMap, editing: bool) -> String {
    let entries: [(Action, &str); 6] = if editing {
        [
            (Action::Next, "more"),
            (Action::Prev, "less"),
            (Action::Select, "commit"),
            (Action::Back, "back"),
            (Action::Reset, "reset"),
            (Action::Quit, "quit"),
        ]
    } else {
        [
            (Action::Next, "next"),
            (Action::Prev, "prev"),
            (Action::Select, "select"),
            (Action::Back, "back"),
            (Action::Reset, "reset"),
            (Action::Quit, "quit"),
        ]
    };

    entries
        .iter()
        .filter_map(|(action, what)| keys.hint(*action).map(|k| format!("{k} {what}")))
        .collect::<Vec<_>>()
        .join("  ")
}
