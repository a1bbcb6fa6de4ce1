//! Menu: ordered children plus current-child tracking.
//!
//! A `Menu` only stores handles; the components themselves live in the
//! [`MenuTree`](crate::tree::MenuTree), which also keeps the children's
//! `is_current` flags in step with the indices kept here.

use crate::component::{ComponentId, MenuId};

/// Most children a single menu accepts.
pub const MAX_CHILDREN: usize = u8::MAX as usize;

#[derive(Debug, Clone, Default)]
pub struct Menu {
    children: Vec<ComponentId>,
    parent: Option<MenuId>,
    current: usize,
    previous: usize,
}

/// A change of current child: (old, new).
pub(crate) type Move = (ComponentId, ComponentId);

impl Menu {
    pub(crate) fn new(parent: Option<MenuId>) -> Self {
        Self {
            parent,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn children(&self) -> &[ComponentId] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<ComponentId> {
        self.children.get(index).copied()
    }

    /// Handle of the highlighted child, `None` for an empty menu.
    pub fn current(&self) -> Option<ComponentId> {
        self.child(self.current)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn previous_index(&self) -> usize {
        self.previous
    }

    pub fn parent(&self) -> Option<MenuId> {
        self.parent
    }

    pub(crate) fn has_room(&self) -> bool {
        self.children.len() < MAX_CHILDREN
    }

    pub(crate) fn reserve_one(&mut self) -> Result<(), std::collections::TryReserveError> {
        self.children.try_reserve(1)
    }

    /// Append a child. Returns true when it is the first one and therefore
    /// becomes current.
    pub(crate) fn push(&mut self, id: ComponentId) -> bool {
        self.children.push(id);
        self.children.len() == 1
    }

    pub(crate) fn advance(&mut self, looped: bool) -> Option<Move> {
        self.previous = self.current;
        let last = self.children.len().checked_sub(1)?;
        let target = if self.current < last {
            self.current + 1
        } else if looped {
            0
        } else {
            return None;
        };
        Some(self.move_to(target))
    }

    pub(crate) fn retreat(&mut self, looped: bool) -> Option<Move> {
        self.previous = self.current;
        let last = self.children.len().checked_sub(1)?;
        let target = if self.current > 0 {
            self.current - 1
        } else if looped {
            last
        } else {
            return None;
        };
        Some(self.move_to(target))
    }

    /// Back to the first child. `None` for an empty menu.
    pub(crate) fn rewind(&mut self) -> Option<Move> {
        let old = self.current();
        self.current = 0;
        self.previous = 0;
        let first = self.child(0)?;
        Some((old?, first))
    }

    fn move_to(&mut self, target: usize) -> Move {
        self.current = target;
        (self.children[self.previous], self.children[target])
    }
}
