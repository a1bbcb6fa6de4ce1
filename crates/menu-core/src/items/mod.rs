//! Leaf components.
//!
//! An [`Item`] is built by the caller and moved into a menu with
//! [`MenuTree::add_item`](crate::tree::MenuTree::add_item). Its
//! [`ItemKind`] decides how next/prev/select behave once it is current.

use std::fmt;

pub mod numeric;
pub mod text_edit;
pub mod toggle;

pub use numeric::{default_format, FormatFn, NumericDisplayItem, NumericItem};
pub use text_edit::{EditState, TextEditItem};
pub use toggle::ToggleItem;

use crate::component::{Component, ComponentKind, SelectFn};

pub enum ItemKind {
    /// Runs its callback on select.
    Plain,
    /// Runs its callback, then returns to the parent menu.
    Back,
    Numeric(NumericItem),
    NumericDisplay(NumericDisplayItem),
    Toggle(ToggleItem),
    TextEdit(TextEditItem),
}

impl ItemKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Plain => "item",
            Self::Back => "back",
            Self::Numeric(_) => "numeric",
            Self::NumericDisplay(_) => "display",
            Self::Toggle(_) => "toggle",
            Self::TextEdit(_) => "text",
        }
    }

    pub(crate) fn next(&mut self, looped: bool) -> bool {
        match self {
            Self::Numeric(n) => n.step_up(looped),
            Self::TextEdit(t) => t.next(),
            Self::Plain | Self::Back | Self::NumericDisplay(_) | Self::Toggle(_) => false,
        }
    }

    pub(crate) fn prev(&mut self, looped: bool) -> bool {
        match self {
            Self::Numeric(n) => n.step_down(looped),
            Self::TextEdit(t) => t.prev(),
            Self::Plain | Self::Back | Self::NumericDisplay(_) | Self::Toggle(_) => false,
        }
    }

    pub(crate) fn reset(&mut self) {
        if let Self::TextEdit(t) = self {
            t.reset();
        }
    }
}

/// A leaf waiting to be attached to a menu.
pub struct Item {
    name: String,
    on_select: Option<SelectFn>,
    kind: ItemKind,
}

impl Item {
    fn with_kind(name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            name: name.into(),
            on_select: None,
            kind,
        }
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self::with_kind(name, ItemKind::Plain)
    }

    pub fn back(name: impl Into<String>) -> Self {
        Self::with_kind(name, ItemKind::Back)
    }

    pub fn numeric(name: impl Into<String>, numeric: NumericItem) -> Self {
        Self::with_kind(name, ItemKind::Numeric(numeric))
    }

    pub fn numeric_display(name: impl Into<String>, display: NumericDisplayItem) -> Self {
        Self::with_kind(name, ItemKind::NumericDisplay(display))
    }

    pub fn toggle(name: impl Into<String>, toggle: ToggleItem) -> Self {
        Self::with_kind(name, ItemKind::Toggle(toggle))
    }

    pub fn text_edit(name: impl Into<String>, text: TextEditItem) -> Self {
        Self::with_kind(name, ItemKind::TextEdit(text))
    }

    /// Attach the selection callback.
    pub fn on_select(mut self, f: impl FnMut(&Component) + 'static) -> Self {
        self.on_select = Some(Box::new(f));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    pub(crate) fn into_component(self) -> Component {
        Component::new(self.name, self.on_select, ComponentKind::Item(self.kind))
    }
}

impl fmt::Debug for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("name", &self.name)
            .field("kind", &self.kind.label())
            .finish_non_exhaustive()
    }
}
