//! Errors raised while building a menu tree.
//!
//! Navigation never fails: stepping clamps or wraps and boundary moves
//! report `false`. Only structural operations (attaching children, resolving
//! handles) return a [`MenuError`].

use std::collections::TryReserveError;

use thiserror::Error;

use crate::component::ComponentId;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("menu {menu} already holds {capacity} children")]
    MenuFull { menu: ComponentId, capacity: usize },

    #[error("could not grow child list")]
    Allocation(#[from] TryReserveError),

    #[error("component {0} is not a menu")]
    NotAMenu(ComponentId),

    #[error("no component with handle {0}")]
    UnknownComponent(ComponentId),
}
