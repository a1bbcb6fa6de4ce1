//! Renderer: the visitor that paints menus.
//!
//! One method per concrete component kind. `Component::render` always calls
//! the most specific one; the item methods a renderer does not care about
//! fall back to [`Renderer::render_menu_item`].
//!
//! The core never walks children on its own. [`Renderer::render`] receives
//! the active menu and decides what to draw, usually by iterating
//! [`MenuTree::children`] and calling `render` on each child.

use crate::component::{Component, ComponentKind, MenuId};
use crate::items::{ItemKind, NumericDisplayItem, NumericItem, TextEditItem, ToggleItem};
use crate::menu::Menu;
use crate::tree::MenuTree;

pub trait Renderer {
    /// Entry point used by `MenuSystem::display` for the active menu.
    fn render(&mut self, tree: &MenuTree, menu: MenuId);

    /// A menu shown as an entry of its parent.
    fn render_menu(&mut self, tree: &MenuTree, component: &Component, menu: &Menu);

    fn render_menu_item(&mut self, item: &Component);

    fn render_back_menu_item(&mut self, item: &Component) {
        self.render_menu_item(item);
    }

    fn render_numeric_menu_item(&mut self, item: &Component, _numeric: &NumericItem) {
        self.render_menu_item(item);
    }

    fn render_numeric_display_menu_item(&mut self, item: &Component, _display: &NumericDisplayItem) {
        self.render_menu_item(item);
    }

    fn render_toggle_menu_item(&mut self, item: &Component, _toggle: &ToggleItem) {
        self.render_menu_item(item);
    }

    fn render_text_edit_menu_item(&mut self, item: &Component, _text: &TextEditItem) {
        self.render_menu_item(item);
    }
}

impl Component {
    /// Dispatch to the renderer method matching this component's kind.
    pub fn render<R: Renderer + ?Sized>(&self, tree: &MenuTree, renderer: &mut R) {
        match &self.kind {
            ComponentKind::Menu(menu) => renderer.render_menu(tree, self, menu),
            ComponentKind::Item(ItemKind::Plain) => renderer.render_menu_item(self),
            ComponentKind::Item(ItemKind::Back) => renderer.render_back_menu_item(self),
            ComponentKind::Item(ItemKind::Numeric(n)) => renderer.render_numeric_menu_item(self, n),
            ComponentKind::Item(ItemKind::NumericDisplay(d)) => {
                renderer.render_numeric_display_menu_item(self, d)
            }
            ComponentKind::Item(ItemKind::Toggle(t)) => renderer.render_toggle_menu_item(self, t),
            ComponentKind::Item(ItemKind::TextEdit(t)) => renderer.render_text_edit_menu_item(self, t),
        }
    }
}
