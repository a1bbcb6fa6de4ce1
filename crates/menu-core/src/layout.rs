//! Declarative menu layouts.
//!
//! A layout file describes the tree as nested `[[entry]]` tables:
//!
//! ```toml
//! name = "Main"
//!
//! [[entry]]
//! kind = "item"
//! name = "Start"
//!
//! [[entry]]
//! kind = "menu"
//! name = "Settings"
//!
//!   [[entry.entries]]
//!   kind = "numeric"
//!   name = "Volume"
//!   value = 5
//!   min = 0
//!   max = 10
//! ```
//!
//! Callbacks cannot be expressed in TOML; attach them after building, e.g.
//! with [`MenuTree::find`].

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::component::MenuId;
use crate::items::{Item, NumericDisplayItem, NumericItem, TextEditItem, ToggleItem};
use crate::tree::MenuTree;

#[derive(Debug, Clone, Deserialize)]
pub struct Layout {
    #[serde(default = "default_root_name")]
    pub name: String,
    #[serde(default, rename = "entry")]
    pub entries: Vec<Entry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entry {
    Item {
        name: String,
    },
    Back {
        name: String,
    },
    Numeric {
        name: String,
        #[serde(default)]
        value: f32,
        min: f32,
        max: f32,
        #[serde(default = "default_step")]
        step: f32,
    },
    Display {
        name: String,
        #[serde(default)]
        value: f32,
    },
    Toggle {
        name: String,
        #[serde(default = "default_on_label")]
        on: String,
        #[serde(default = "default_off_label")]
        off: String,
        #[serde(default)]
        state: bool,
    },
    Text {
        name: String,
        #[serde(default)]
        value: String,
        size: usize,
    },
    Menu {
        name: String,
        #[serde(default)]
        entries: Vec<Entry>,
    },
}

fn default_root_name() -> String {
    "Main".to_string()
}

fn default_step() -> f32 {
    1.0
}

fn default_on_label() -> String {
    "on".to_string()
}

fn default_off_label() -> String {
    "off".to_string()
}

impl Entry {
    pub fn name(&self) -> &str {
        match self {
            Self::Item { name }
            | Self::Back { name }
            | Self::Numeric { name, .. }
            | Self::Display { name, .. }
            | Self::Toggle { name, .. }
            | Self::Text { name, .. }
            | Self::Menu { name, .. } => name,
        }
    }

    fn to_item(&self) -> Option<Item> {
        let item = match self {
            Self::Item { name } => Item::new(name),
            Self::Back { name } => Item::back(name),
            Self::Numeric {
                name,
                value,
                min,
                max,
                step,
            } => Item::numeric(name, NumericItem::new(*value, *min, *max).with_increment(*step)),
            Self::Display { name, value } => {
                Item::numeric_display(name, NumericDisplayItem::new(*value))
            }
            Self::Toggle {
                name,
                on,
                off,
                state,
            } => Item::toggle(name, ToggleItem::new(on, off).with_state(*state)),
            Self::Text { name, value, size } => {
                Item::text_edit(name, TextEditItem::new(value, *size))
            }
            Self::Menu { .. } => return None,
        };
        Some(item)
    }
}

impl Entry {
    /// Numeric settings must be finite; NaN or infinity would never step
    /// back into range.
    fn check_numbers(&self) -> anyhow::Result<()> {
        let numbers: Vec<(&str, f32)> = match self {
            Self::Numeric {
                value,
                min,
                max,
                step,
                ..
            } => vec![("value", *value), ("min", *min), ("max", *max), ("step", *step)],
            Self::Display { value, .. } => vec![("value", *value)],
            _ => Vec::new(),
        };
        for (field, number) in numbers {
            if !number.is_finite() {
                anyhow::bail!("{:?}: {field} must be a finite number, got {number}", self.name());
            }
        }
        Ok(())
    }
}

impl Layout {
    /// Build a fresh tree whose root carries the layout's name.
    pub fn build(&self) -> anyhow::Result<MenuTree> {
        let mut tree = MenuTree::new(self.name.clone());
        let root = tree.root();
        append_entries(&mut tree, root, &self.entries)?;
        Ok(tree)
    }

    /// Append the layout's entries under an existing menu.
    pub fn append_to(&self, tree: &mut MenuTree, menu: MenuId) -> anyhow::Result<()> {
        append_entries(tree, menu, &self.entries)
    }
}

fn append_entries(tree: &mut MenuTree, menu: MenuId, entries: &[Entry]) -> anyhow::Result<()> {
    for entry in entries {
        match entry {
            Entry::Menu { name, entries } => {
                let sub = tree
                    .add_menu(menu, name.clone())
                    .with_context(|| format!("adding menu {name:?}"))?;
                append_entries(tree, sub, entries)?;
            }
            other => {
                other.check_numbers()?;
                if let Some(item) = other.to_item() {
                    tree.add_item(menu, item)
                        .with_context(|| format!("adding item {:?}", other.name()))?;
                }
            }
        }
    }
    Ok(())
}

pub fn parse_layout(content: &str) -> anyhow::Result<Layout> {
    let layout: Layout = toml::from_str(content)?;
    Ok(layout)
}

pub fn load_layout(path: &Path) -> anyhow::Result<Layout> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_layout(&content).with_context(|| format!("parsing {}", path.display()))
}
