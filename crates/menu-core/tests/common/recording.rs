#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use menu_core::{
    Component, Menu, MenuId, MenuTree, NumericDisplayItem, NumericItem, Renderer, TextEditItem,
    ToggleItem,
};

/// Renders the active menu as plain text lines, one per child, prefixed with
/// `>` for the current child and `*` for a focused one.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub title: String,
    pub lines: Vec<String>,
    pub frames: usize,
}

impl RecordingRenderer {
    fn push(&mut self, item: &Component, body: String) {
        let marker = match (item.is_current(), item.has_focus()) {
            (true, true) => '*',
            (true, false) => '>',
            _ => ' ',
        };
        self.lines.push(format!("{marker} {body}"));
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, tree: &MenuTree, menu: MenuId) {
        self.frames += 1;
        self.lines.clear();
        self.title = tree
            .component(menu.into())
            .map(|c| c.name().to_string())
            .unwrap_or_default();
        for (_, child) in tree.children(menu) {
            child.render(tree, self);
        }
    }

    fn render_menu(&mut self, _tree: &MenuTree, component: &Component, _menu: &Menu) {
        self.push(component, format!("{}/", component.name()));
    }

    fn render_menu_item(&mut self, item: &Component) {
        self.push(item, item.name().to_string());
    }

    fn render_back_menu_item(&mut self, item: &Component) {
        self.push(item, format!("< {}", item.name()));
    }

    fn render_numeric_menu_item(&mut self, item: &Component, numeric: &NumericItem) {
        self.push(item, format!("{}: {}", item.name(), numeric.formatted_value()));
    }

    fn render_numeric_display_menu_item(&mut self, item: &Component, display: &NumericDisplayItem) {
        self.push(item, format!("{} = {}", item.name(), display.formatted_value()));
    }

    fn render_toggle_menu_item(&mut self, item: &Component, toggle: &ToggleItem) {
        self.push(item, format!("{} [{}]", item.name(), toggle.state_label()));
    }

    fn render_text_edit_menu_item(&mut self, item: &Component, text: &TextEditItem) {
        self.push(item, format!("{} '{}' @{}", item.name(), text.value(), text.position()));
    }
}

/// Counter handed out to callbacks.
pub fn hit_counter() -> (Rc<Cell<u32>>, impl FnMut(&Component) + 'static) {
    let hits = Rc::new(Cell::new(0));
    let inner = Rc::clone(&hits);
    (hits, move |_: &Component| inner.set(inner.get() + 1))
}

/// Log of component names in the order their callbacks ran.
pub fn name_log() -> (Rc<RefCell<Vec<String>>>, impl Fn() -> Box<dyn FnMut(&Component)>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let inner = Rc::clone(&log);
    let make = move || {
        let log = Rc::clone(&inner);
        Box::new(move |c: &Component| log.borrow_mut().push(c.name().to_string()))
            as Box<dyn FnMut(&Component)>
    };
    (log, make)
}
