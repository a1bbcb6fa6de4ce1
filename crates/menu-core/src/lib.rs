//! Menu navigation for small displays driven by three inputs: next,
//! previous and select.
//!
//! Build a [`MenuTree`] (by hand or from a [`layout`] file), hand it to a
//! [`MenuSystem`] together with a [`Renderer`], then feed input actions to
//! the system from a single polling loop and call
//! [`MenuSystem::display`] whenever the screen should be redrawn.

pub mod component;
pub mod config;
pub mod error;
pub mod items;
pub mod layout;
pub mod menu;
pub mod platform;
pub mod renderer;
pub mod system;
pub mod tree;

pub use component::{Component, ComponentId, ComponentKind, MenuId, Navigation, SelectFn};
pub use error::MenuError;
pub use items::{
    EditState, FormatFn, Item, ItemKind, NumericDisplayItem, NumericItem, TextEditItem, ToggleItem,
};
pub use menu::{Menu, MAX_CHILDREN};
pub use renderer::Renderer;
pub use system::MenuSystem;
pub use tree::MenuTree;
