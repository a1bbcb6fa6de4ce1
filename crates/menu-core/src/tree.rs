//! MenuTree: the arena that owns every component.
//!
//! Components are appended once and never removed, so a [`ComponentId`] stays
//! valid for the lifetime of the tree. Menus refer to their children and to
//! their parent by handle. Index 0 is the root menu.

use tracing::{trace, warn};

use crate::component::{Component, ComponentId, ComponentKind, MenuId, Navigation};
use crate::error::MenuError;
use crate::items::Item;
use crate::menu::{Menu, Move, MAX_CHILDREN};

const ROOT: MenuId = MenuId(ComponentId(0));

#[derive(Debug)]
pub struct MenuTree {
    components: Vec<Component>,
}

impl MenuTree {
    pub fn new(root_name: impl Into<String>) -> Self {
        let root = Component::new(root_name.into(), None, ComponentKind::Menu(Menu::new(None)));
        Self {
            components: vec![root],
        }
    }

    pub fn root(&self) -> MenuId {
        ROOT
    }

    /// Number of components, the root menu included.
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        self.components.get(id.0)
    }

    pub fn component_mut(&mut self, id: ComponentId) -> Option<&mut Component> {
        self.components.get_mut(id.0)
    }

    pub fn menu(&self, id: MenuId) -> Option<&Menu> {
        self.component(id.0)?.as_menu()
    }

    /// Typed handle for `id` if it names a menu.
    pub fn menu_id(&self, id: ComponentId) -> Option<MenuId> {
        self.component(id)?.is_menu().then_some(MenuId(id))
    }

    pub fn parent(&self, menu: MenuId) -> Option<MenuId> {
        self.menu(menu)?.parent()
    }

    /// Children of `menu` in display order.
    pub fn children(&self, menu: MenuId) -> impl Iterator<Item = (ComponentId, &Component)> + '_ {
        self.menu(menu)
            .map(Menu::children)
            .unwrap_or_default()
            .iter()
            .filter_map(move |&id| Some((id, self.component(id)?)))
    }

    pub fn current_id(&self, menu: MenuId) -> Option<ComponentId> {
        self.menu(menu)?.current()
    }

    pub fn current_component(&self, menu: MenuId) -> Option<&Component> {
        self.component(self.current_id(menu)?)
    }

    /// Every component with its handle, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ComponentId, &Component)> + '_ {
        self.components
            .iter()
            .enumerate()
            .map(|(i, c)| (ComponentId(i), c))
    }

    /// First component carrying `name`, in insertion order.
    pub fn find(&self, name: &str) -> Option<ComponentId> {
        self.iter().find(|(_, c)| c.name() == name).map(|(id, _)| id)
    }

    pub fn add_item(&mut self, menu: MenuId, item: Item) -> Result<ComponentId, MenuError> {
        self.append(menu, item.into_component())
    }

    pub fn add_menu(&mut self, menu: MenuId, name: impl Into<String>) -> Result<MenuId, MenuError> {
        let child = Component::new(name.into(), None, ComponentKind::Menu(Menu::new(Some(menu))));
        self.append(menu, child).map(MenuId)
    }

    fn append(&mut self, parent: MenuId, mut component: Component) -> Result<ComponentId, MenuError> {
        let id = ComponentId(self.components.len());

        let menu = self.checked_menu(parent)?;
        if !menu.has_room() {
            warn!(menu = ?parent.0, "menu full, rejecting {}", component.name());
            return Err(MenuError::MenuFull {
                menu: parent.0,
                capacity: MAX_CHILDREN,
            });
        }

        self.components.try_reserve(1)?;
        let menu = self.checked_menu_mut(parent)?;
        menu.reserve_one()?;
        if menu.push(id) {
            component.set_current(true);
        }
        trace!(parent = ?parent.0, child = ?id, "appended {}", component.name());
        self.components.push(component);
        Ok(id)
    }

    fn checked_menu(&self, id: MenuId) -> Result<&Menu, MenuError> {
        self.component(id.0)
            .ok_or(MenuError::UnknownComponent(id.0))?
            .as_menu()
            .ok_or(MenuError::NotAMenu(id.0))
    }

    fn checked_menu_mut(&mut self, id: MenuId) -> Result<&mut Menu, MenuError> {
        self.component_mut(id.0)
            .ok_or(MenuError::UnknownComponent(id.0))?
            .as_menu_mut()
            .ok_or(MenuError::NotAMenu(id.0))
    }

    // ── Navigation ───────────────────────────────────────────────────────────

    /// Move the highlight of `menu` one child forward. `false` for an empty
    /// menu and when the last child is current and `looped` is off.
    pub(crate) fn next(&mut self, menu: MenuId, looped: bool) -> bool {
        let step = self
            .component_mut(menu.0)
            .and_then(Component::as_menu_mut)
            .and_then(|m| m.advance(looped));
        self.apply(step)
    }

    pub(crate) fn prev(&mut self, menu: MenuId, looped: bool) -> bool {
        let step = self
            .component_mut(menu.0)
            .and_then(Component::as_menu_mut)
            .and_then(|m| m.retreat(looped));
        self.apply(step)
    }

    /// Select the current child of `menu`.
    pub(crate) fn activate(&mut self, menu: MenuId) -> Navigation {
        match self.current_id(menu) {
            Some(child) => self.select(child),
            None => Navigation::Stay,
        }
    }

    pub(crate) fn select(&mut self, id: ComponentId) -> Navigation {
        match self.component_mut(id) {
            Some(component) => component.select(id),
            None => Navigation::Stay,
        }
    }

    /// The current child of `menu` when it holds focus.
    pub(crate) fn focused_child(&self, menu: MenuId) -> Option<ComponentId> {
        let id = self.current_id(menu)?;
        self.component(id)?.has_focus().then_some(id)
    }

    /// Restore `id` and everything below it to the initial navigation state.
    pub(crate) fn reset(&mut self, id: ComponentId) {
        let children = match self.component_mut(id) {
            Some(component) => {
                component.reset();
                component.as_menu().map(|m| m.children().to_vec())
            }
            None => return,
        };
        let Some(children) = children else {
            return;
        };

        for child in children {
            self.reset(child);
        }
        let step = self
            .component_mut(id)
            .and_then(Component::as_menu_mut)
            .and_then(Menu::rewind);
        if let Some((old, first)) = step {
            self.set_current(old, false);
            self.set_current(first, true);
        }
    }

    fn apply(&mut self, step: Option<Move>) -> bool {
        let Some((old, new)) = step else {
            return false;
        };
        // clear first so a single-child wrap keeps its highlight
        self.set_current(old, false);
        self.set_current(new, true);
        trace!(from = ?old, to = ?new, "moved current");
        true
    }

    fn set_current(&mut self, id: ComponentId, is_current: bool) {
        if let Some(c) = self.component_mut(id) {
            c.set_current(is_current);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::NumericItem;

    fn flat(n: usize) -> MenuTree {
        let mut tree = MenuTree::new("root");
        for i in 0..n {
            tree.add_item(tree.root(), Item::new(format!("item {i}"))).unwrap();
        }
        tree
    }

    fn current_flags(tree: &MenuTree, menu: MenuId) -> Vec<bool> {
        tree.children(menu).map(|(_, c)| c.is_current()).collect()
    }

    fn assert_single_current(tree: &MenuTree, menu: MenuId) {
        let flags = current_flags(tree, menu);
        assert_eq!(flags.iter().filter(|&&f| f).count(), 1);
        let index = tree.menu(menu).unwrap().current_index();
        assert!(flags[index]);
    }

    #[test]
    fn test_first_child_becomes_current() {
        let tree = flat(3);
        assert_eq!(current_flags(&tree, tree.root()), vec![true, false, false]);
    }

    #[test]
    fn test_exactly_one_current_after_any_walk() {
        let mut tree = flat(4);
        let root = tree.root();
        let walk = [true, true, false, true, true, true, false, false, false, false, true];
        for (i, forward) in walk.into_iter().enumerate() {
            let looped = i % 2 == 0;
            if forward {
                tree.next(root, looped);
            } else {
                tree.prev(root, looped);
            }
            assert_single_current(&tree, root);
        }
    }

    #[test]
    fn test_next_then_prev_restores_index() {
        let mut tree = flat(4);
        let root = tree.root();
        tree.next(root, false);
        assert!(tree.next(root, false));
        assert!(tree.prev(root, false));
        assert_eq!(tree.menu(root).unwrap().current_index(), 1);
    }

    #[test]
    fn test_full_loop_returns_to_start() {
        let mut tree = flat(5);
        let root = tree.root();
        tree.next(root, false);
        for _ in 0..5 {
            assert!(tree.next(root, true));
        }
        assert_eq!(tree.menu(root).unwrap().current_index(), 1);
    }

    #[test]
    fn test_next_without_loop_pins_at_last() {
        let mut tree = flat(3);
        let root = tree.root();
        assert!(tree.next(root, false));
        assert!(tree.next(root, false));
        assert!(!tree.next(root, false));
        assert!(!tree.next(root, false));
        assert_eq!(tree.menu(root).unwrap().current_index(), 2);
        assert_single_current(&tree, root);
    }

    #[test]
    fn test_single_child_wrap_keeps_highlight() {
        let mut tree = flat(1);
        let root = tree.root();
        assert!(tree.next(root, true));
        assert!(tree.prev(root, true));
        assert_eq!(current_flags(&tree, root), vec![true]);
    }

    #[test]
    fn test_empty_menu_reports_not_consumed() {
        let mut tree = MenuTree::new("root");
        let root = tree.root();
        assert!(!tree.next(root, true));
        assert!(!tree.prev(root, false));
        assert_eq!(tree.activate(root), Navigation::Stay);
        tree.reset(root.into());
        assert!(tree.current_component(root).is_none());
        assert!(!tree.component(root.into()).unwrap().has_children());
    }

    #[test]
    fn test_add_menu_links_parent() {
        let mut tree = MenuTree::new("root");
        let root = tree.root();
        let sub = tree.add_menu(root, "sub").unwrap();
        let subsub = tree.add_menu(sub, "subsub").unwrap();
        assert_eq!(tree.parent(sub), Some(root));
        assert_eq!(tree.parent(subsub), Some(sub));
        assert_eq!(tree.parent(root), None);
        assert!(tree.component(root.into()).unwrap().has_children());
    }

    #[test]
    fn test_add_to_non_menu_is_rejected() {
        let mut tree = MenuTree::new("root");
        let leaf = tree.add_item(tree.root(), Item::new("leaf")).unwrap();
        let bogus = MenuId(leaf);
        let err = tree.add_item(bogus, Item::new("x")).unwrap_err();
        assert!(matches!(err, MenuError::NotAMenu(id) if id == leaf));

        let missing = MenuId(ComponentId(99));
        let err = tree.add_menu(missing, "x").unwrap_err();
        assert!(matches!(err, MenuError::UnknownComponent(_)));
        assert_eq!(tree.component_count(), 2);
    }

    #[test]
    fn test_menu_capacity_is_enforced() {
        let mut tree = flat(MAX_CHILDREN);
        let err = tree.add_item(tree.root(), Item::new("one too many")).unwrap_err();
        assert!(matches!(err, MenuError::MenuFull { capacity, .. } if capacity == MAX_CHILDREN));
        assert_eq!(tree.menu(tree.root()).unwrap().len(), MAX_CHILDREN);
    }

    #[test]
    fn test_reset_rewinds_recursively_and_drops_focus() {
        let mut tree = flat(2);
        let root = tree.root();
        let sub = tree.add_menu(root, "sub").unwrap();
        tree.add_item(sub, Item::new("a")).unwrap();
        let level = tree
            .add_item(sub, Item::numeric("level", NumericItem::new(1.0, 0.0, 9.0)))
            .unwrap();

        tree.next(root, false);
        tree.next(sub, false);
        tree.activate(sub);
        assert!(tree.component(level).unwrap().has_focus());

        tree.reset(root.into());
        assert_eq!(tree.menu(root).unwrap().current_index(), 0);
        assert_eq!(tree.menu(sub).unwrap().current_index(), 0);
        assert_eq!(tree.menu(sub).unwrap().previous_index(), 0);
        assert!(!tree.component(level).unwrap().has_focus());
        assert_single_current(&tree, root);
        assert_single_current(&tree, sub);
    }

    #[test]
    fn test_find_by_name() {
        let mut tree = flat(3);
        let sub = tree.add_menu(tree.root(), "Settings").unwrap();
        assert_eq!(tree.find("Settings"), Some(sub.component()));
        assert_eq!(tree.menu_id(sub.component()), Some(sub));
        assert_eq!(tree.find("item 1").map(ComponentId::index), Some(2));
        assert!(tree.find("nope").is_none());
    }
}
