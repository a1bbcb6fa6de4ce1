//! TerminalRenderer: paints the active menu as ratatui lines.
//!
//! `MenuSystem::display` drives this renderer; the app then takes the lines
//! and draws them inside the menu pane. Values are right-aligned to the pane
//! width set before each frame.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use menu_core::{
    Component, EditState, Menu, MenuId, MenuTree, NumericDisplayItem, NumericItem, Renderer,
    TextEditItem, ToggleItem,
};

use crate::theme::{
    style_default, style_editing, style_muted, style_secondary, style_selected, C_ACCENT, C_EDIT,
    C_ON,
};

const CURSOR_MARK: &str = "▸ ";
const NO_MARK: &str = "  ";
const DONE_SLOT: &str = "⏎";

#[derive(Debug)]
pub struct TerminalRenderer {
    title: String,
    lines: Vec<Line<'static>>,
    width: usize,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            lines: Vec::new(),
            width: 40,
        }
    }

    /// Inner width of the pane the lines will be drawn into.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
    }

    /// Breadcrumb of the menu drawn last, e.g. `Main › Settings`.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn take_lines(&mut self) -> Vec<Line<'static>> {
        std::mem::take(&mut self.lines)
    }

    fn row_style(item: &Component) -> Style {
        match (item.is_current(), item.has_focus()) {
            (true, true) => style_editing(),
            (true, false) => style_selected(),
            _ => style_default(),
        }
    }

    /// One menu row: marker, label, then `value` spans pushed to the right edge.
    fn push_row(&mut self, item: &Component, label: String, value: Vec<Span<'static>>) {
        let style = Self::row_style(item);
        let mark = if item.is_current() { CURSOR_MARK } else { NO_MARK };

        let used = mark.width()
            + label.width()
            + value.iter().map(|s| s.content.width()).sum::<usize>();
        let gap = self.width.saturating_sub(used).max(1);

        let mut spans = vec![Span::styled(mark, style), Span::styled(label, style)];
        if !value.is_empty() {
            spans.push(Span::styled(" ".repeat(gap), style));
            spans.extend(value);
        }
        self.lines.push(Line::from(spans));
    }
}

/// Path of menu names from the root down to `menu`.
pub fn breadcrumb(tree: &MenuTree, menu: MenuId) -> String {
    let mut names = Vec::new();
    let mut cursor = Some(menu);
    while let Some(id) = cursor {
        if let Some(c) = tree.component(id.component()) {
            names.push(c.name().to_string());
        }
        cursor = tree.parent(id);
    }
    names.reverse();
    names.join(" › ")
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, tree: &MenuTree, menu: MenuId) {
        self.lines.clear();
        self.title = breadcrumb(tree, menu);

        if tree.menu(menu).is_some_and(Menu::is_empty) {
            self.lines
                .push(Line::from(Span::styled("  (empty)", style_muted())));
            return;
        }
        for (_, child) in tree.children(menu) {
            child.render(tree, self);
        }
    }

    fn render_menu(&mut self, _tree: &MenuTree, component: &Component, menu: &Menu) {
        let hint = Span::styled(format!("{} ›", menu.len()), style_secondary());
        self.push_row(component, component.name().to_string(), vec![hint]);
    }

    fn render_menu_item(&mut self, item: &Component) {
        self.push_row(item, item.name().to_string(), Vec::new());
    }

    fn render_back_menu_item(&mut self, item: &Component) {
        self.push_row(item, format!("‹ {}", item.name()), Vec::new());
    }

    fn render_numeric_menu_item(&mut self, item: &Component, numeric: &NumericItem) {
        let value = if item.has_focus() {
            Span::styled(
                format!("[{}]", numeric.formatted_value()),
                Style::default().fg(C_EDIT).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(numeric.formatted_value(), style_secondary())
        };
        self.push_row(item, item.name().to_string(), vec![value]);
    }

    fn render_numeric_display_menu_item(&mut self, item: &Component, display: &NumericDisplayItem) {
        let value = Span::styled(display.formatted_value(), style_muted());
        self.push_row(item, item.name().to_string(), vec![value]);
    }

    fn render_toggle_menu_item(&mut self, item: &Component, toggle: &ToggleItem) {
        let color = if toggle.state() { C_ON } else { C_ACCENT };
        let value = Span::styled(
            toggle.state_label().to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        );
        self.push_row(item, item.name().to_string(), vec![value]);
    }

    fn render_text_edit_menu_item(&mut self, item: &Component, text: &TextEditItem) {
        self.push_row(item, item.name().to_string(), text_edit_spans(item, text));
    }
}

/// The buffer with the cursor cell highlighted while the item holds focus.
/// Position 0 is the commit slot drawn after the buffer.
fn text_edit_spans(item: &Component, text: &TextEditItem) -> Vec<Span<'static>> {
    let plain = style_secondary();
    if !item.has_focus() {
        return vec![Span::styled(format!("\"{}\"", text.value()), plain)];
    }

    let cursor = match text.edit_state() {
        EditState::Editing => Style::default()
            .fg(C_EDIT)
            .add_modifier(Modifier::REVERSED | Modifier::BOLD),
        _ => Style::default().fg(C_EDIT).add_modifier(Modifier::UNDERLINED),
    };

    let mut spans = vec![Span::styled("\"", plain)];
    for (i, ch) in text.value().chars().enumerate() {
        let style = if text.position() == i + 1 { cursor } else { plain };
        spans.push(Span::styled(ch.to_string(), style));
    }
    spans.push(Span::styled("\" ", plain));
    let done = if text.position() == 0 { cursor } else { plain };
    spans.push(Span::styled(DONE_SLOT, done));
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_core::{Item, MenuSystem};

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn system() -> MenuSystem<TerminalRenderer> {
        let mut ms = MenuSystem::new(TerminalRenderer::new(), "Main");
        let root = ms.root_menu();
        let tree = ms.tree_mut();
        tree.add_item(root, Item::new("Play")).unwrap();
        let settings = tree.add_menu(root, "Settings").unwrap();
        tree.add_item(settings, Item::back("Back")).unwrap();
        tree.add_item(settings, Item::toggle("Sound", ToggleItem::new("on", "off")))
            .unwrap();
        tree.add_item(
            settings,
            Item::text_edit("Name", TextEditItem::new("abc", 3)),
        )
        .unwrap();
        ms.renderer_mut().set_width(20);
        ms
    }

    #[test]
    fn test_rows_are_padded_to_width() {
        let mut ms = system();
        ms.display();
        let lines = ms.renderer_mut().take_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(line_text(&lines[0]), "▸ Play");
        let settings = line_text(&lines[1]);
        assert!(settings.starts_with("  Settings"));
        assert!(settings.ends_with("3 ›"));
        assert_eq!(settings.width(), 20);
    }

    #[test]
    fn test_breadcrumb_and_text_cursor() {
        let mut ms = system();
        ms.next(false);
        ms.select(false);
        assert_eq!(breadcrumb(ms.tree(), ms.current_menu()), "Main › Settings");

        ms.next(false);
        ms.next(false);
        ms.select(false);
        ms.display();
        assert_eq!(ms.renderer().title(), "Main › Settings");

        let lines = ms.renderer_mut().take_lines();
        assert_eq!(line_text(&lines[1]), format!("  Sound{}off", " ".repeat(10)));
        let name = &lines[2];
        assert!(line_text(name).ends_with("\"abc\" ⏎"));
        let cursor = name
            .spans
            .iter()
            .find(|s| s.style.add_modifier.contains(Modifier::UNDERLINED))
            .unwrap();
        assert_eq!(cursor.content, "a");
    }
}
