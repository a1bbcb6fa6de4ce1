//! Component: the node type stored in a [`MenuTree`](crate::tree::MenuTree).
//!
//! Every node carries the same header (name, focus flag, current flag,
//! selection callback) and a [`ComponentKind`] saying whether it is a leaf
//! item or a nested menu.
//!
//! - `has_focus` is set while a component captures next/prev for its own
//!   value (numeric stepping, text editing). Menus never take focus.
//! - `is_current` marks the highlighted child of the owning menu; the menu
//!   keeps it in sync with its current index.

use std::fmt;

use tracing::trace;

use crate::items::{ItemKind, NumericDisplayItem, NumericItem, TextEditItem, ToggleItem};
use crate::menu::Menu;

/// Stable handle to a component stored in a `MenuTree`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(pub(crate) usize);

impl ComponentId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle to a component that is known to be a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MenuId(pub(crate) ComponentId);

impl MenuId {
    pub fn component(self) -> ComponentId {
        self.0
    }
}

impl From<MenuId> for ComponentId {
    fn from(id: MenuId) -> Self {
        id.0
    }
}

/// Callback run when a component is selected. Receives the component that
/// triggered it; state the callback needs is captured by the closure.
pub type SelectFn = Box<dyn FnMut(&Component)>;

/// What the system should do with its active menu after a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Keep the active menu.
    Stay,
    /// Make the given menu the active one.
    Enter(MenuId),
    /// Return to the parent of the active menu.
    Back,
}

pub enum ComponentKind {
    Item(ItemKind),
    Menu(Menu),
}

pub struct Component {
    name: String,
    has_focus: bool,
    is_current: bool,
    on_select: Option<SelectFn>,
    pub(crate) kind: ComponentKind,
}

impl Component {
    pub(crate) fn new(name: String, on_select: Option<SelectFn>, kind: ComponentKind) -> Self {
        Self {
            name,
            has_focus: false,
            is_current: false,
            on_select,
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    pub fn is_current(&self) -> bool {
        self.is_current
    }

    pub fn set_select_fn(&mut self, f: impl FnMut(&Component) + 'static) {
        self.on_select = Some(Box::new(f));
    }

    pub fn clear_select_fn(&mut self) {
        self.on_select = None;
    }

    pub fn kind(&self) -> &ComponentKind {
        &self.kind
    }

    pub fn is_menu(&self) -> bool {
        matches!(self.kind, ComponentKind::Menu(_))
    }

    /// Only menus have children, and only once something was appended.
    pub fn has_children(&self) -> bool {
        match &self.kind {
            ComponentKind::Menu(menu) => !menu.is_empty(),
            ComponentKind::Item(_) => false,
        }
    }

    pub fn as_menu(&self) -> Option<&Menu> {
        match &self.kind {
            ComponentKind::Menu(menu) => Some(menu),
            ComponentKind::Item(_) => None,
        }
    }

    pub fn as_numeric(&self) -> Option<&NumericItem> {
        match &self.kind {
            ComponentKind::Item(ItemKind::Numeric(n)) => Some(n),
            _ => None,
        }
    }

    pub fn as_numeric_mut(&mut self) -> Option<&mut NumericItem> {
        match &mut self.kind {
            ComponentKind::Item(ItemKind::Numeric(n)) => Some(n),
            _ => None,
        }
    }

    pub fn as_numeric_display(&self) -> Option<&NumericDisplayItem> {
        match &self.kind {
            ComponentKind::Item(ItemKind::NumericDisplay(n)) => Some(n),
            _ => None,
        }
    }

    pub fn as_numeric_display_mut(&mut self) -> Option<&mut NumericDisplayItem> {
        match &mut self.kind {
            ComponentKind::Item(ItemKind::NumericDisplay(n)) => Some(n),
            _ => None,
        }
    }

    pub fn as_toggle(&self) -> Option<&ToggleItem> {
        match &self.kind {
            ComponentKind::Item(ItemKind::Toggle(t)) => Some(t),
            _ => None,
        }
    }

    pub fn as_toggle_mut(&mut self) -> Option<&mut ToggleItem> {
        match &mut self.kind {
            ComponentKind::Item(ItemKind::Toggle(t)) => Some(t),
            _ => None,
        }
    }

    pub fn as_text_edit(&self) -> Option<&TextEditItem> {
        match &self.kind {
            ComponentKind::Item(ItemKind::TextEdit(t)) => Some(t),
            _ => None,
        }
    }

    pub fn as_text_edit_mut(&mut self) -> Option<&mut TextEditItem> {
        match &mut self.kind {
            ComponentKind::Item(ItemKind::TextEdit(t)) => Some(t),
            _ => None,
        }
    }

    pub(crate) fn as_menu_mut(&mut self) -> Option<&mut Menu> {
        match &mut self.kind {
            ComponentKind::Menu(menu) => Some(menu),
            ComponentKind::Item(_) => None,
        }
    }

    pub(crate) fn set_current(&mut self, is_current: bool) {
        self.is_current = is_current;
    }

    /// Focus-local next. Menus are navigated by the tree, so they report
    /// "not consumed" here.
    pub(crate) fn next(&mut self, looped: bool) -> bool {
        match &mut self.kind {
            ComponentKind::Item(kind) => kind.next(looped),
            ComponentKind::Menu(_) => false,
        }
    }

    pub(crate) fn prev(&mut self, looped: bool) -> bool {
        match &mut self.kind {
            ComponentKind::Item(kind) => kind.prev(looped),
            ComponentKind::Menu(_) => false,
        }
    }

    /// Run the select transition for this component. `id` is the
    /// component's own handle, used when a menu asks to be entered.
    pub(crate) fn select(&mut self, id: ComponentId) -> Navigation {
        let fire = match &mut self.kind {
            ComponentKind::Menu(_) => true,
            ComponentKind::Item(ItemKind::Numeric(_)) => {
                self.has_focus = !self.has_focus;
                // Only report once the user is done editing the value
                !self.has_focus
            }
            ComponentKind::Item(ItemKind::Toggle(toggle)) => {
                toggle.toggle();
                true
            }
            ComponentKind::Item(ItemKind::TextEdit(text)) => {
                self.has_focus = text.select(self.has_focus);
                !self.has_focus
            }
            ComponentKind::Item(
                ItemKind::Plain | ItemKind::Back | ItemKind::NumericDisplay(_),
            ) => true,
        };
        trace!(name = %self.name, focus = self.has_focus, "selected");

        if fire {
            self.fire();
        }

        match &self.kind {
            ComponentKind::Menu(_) => Navigation::Enter(MenuId(id)),
            ComponentKind::Item(ItemKind::Back) => Navigation::Back,
            ComponentKind::Item(_) => Navigation::Stay,
        }
    }

    /// Leaf part of a reset; menus additionally restore their indices in
    /// the tree.
    pub(crate) fn reset(&mut self) {
        self.has_focus = false;
        if let ComponentKind::Item(kind) = &mut self.kind {
            kind.reset();
        }
    }

    fn fire(&mut self) {
        // The callback gets a shared view of the component that owns it,
        // so it is parked outside the component for the duration of the call.
        if let Some(mut f) = self.on_select.take() {
            f(self);
            if self.on_select.is_none() {
                self.on_select = Some(f);
            }
        }
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.kind {
            ComponentKind::Item(kind) => kind.label(),
            ComponentKind::Menu(_) => "menu",
        };
        f.debug_struct("Component")
            .field("name", &self.name)
            .field("kind", &kind)
            .field("has_focus", &self.has_focus)
            .field("is_current", &self.is_current)
            .field("has_select_fn", &self.on_select.is_some())
            .finish()
    }
}
