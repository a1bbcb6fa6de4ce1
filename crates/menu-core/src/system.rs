//! MenuSystem: routes the three input actions through the tree.
//!
//! The system remembers which menu is on screen. `next`/`prev` go to the
//! current child when it holds focus and to the menu itself otherwise;
//! `select` activates the current child and follows the [`Navigation`] it
//! returns.

use tracing::debug;

use crate::component::{MenuId, Navigation};
use crate::renderer::Renderer;
use crate::tree::MenuTree;

pub struct MenuSystem<R> {
    tree: MenuTree,
    active: MenuId,
    renderer: R,
}

impl<R> MenuSystem<R> {
    /// A system with an empty root menu called `root_name`.
    pub fn new(renderer: R, root_name: impl Into<String>) -> Self {
        Self::with_tree(renderer, MenuTree::new(root_name))
    }

    /// A system over a tree that was built beforehand.
    pub fn with_tree(renderer: R, tree: MenuTree) -> Self {
        let active = tree.root();
        Self {
            tree,
            active,
            renderer,
        }
    }

    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut MenuTree {
        &mut self.tree
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn root_menu(&self) -> MenuId {
        self.tree.root()
    }

    /// The menu currently on screen.
    pub fn current_menu(&self) -> MenuId {
        self.active
    }

    pub fn next(&mut self, looped: bool) -> bool {
        match self.tree.focused_child(self.active) {
            Some(child) => self
                .tree
                .component_mut(child)
                .is_some_and(|c| c.next(looped)),
            None => self.tree.next(self.active, looped),
        }
    }

    pub fn prev(&mut self, looped: bool) -> bool {
        match self.tree.focused_child(self.active) {
            Some(child) => self
                .tree
                .component_mut(child)
                .is_some_and(|c| c.prev(looped)),
            None => self.tree.prev(self.active, looped),
        }
    }

    /// Activate the current child of the active menu.
    ///
    /// With `reset_on_leaf`, a selection that does not enter a submenu and
    /// does not leave the child holding focus sends the whole tree back to
    /// its initial state. A back item counts: it pops, then resets.
    pub fn select(&mut self, reset_on_leaf: bool) -> Navigation {
        let navigation = self.tree.activate(self.active);
        match navigation {
            Navigation::Enter(menu) => self.enter(menu),
            Navigation::Back => {
                self.back();
                if reset_on_leaf {
                    self.reset();
                }
            }
            Navigation::Stay => {
                if reset_on_leaf && self.tree.focused_child(self.active).is_none() {
                    self.reset();
                }
            }
        }
        navigation
    }

    /// Return to the parent menu. `false` when already at the root.
    pub fn back(&mut self) -> bool {
        match self.tree.parent(self.active) {
            Some(parent) => {
                debug!(from = %self.menu_name(self.active), to = %self.menu_name(parent), "back");
                self.active = parent;
                true
            }
            None => false,
        }
    }

    /// Show the root menu again and rewind every menu to its first child.
    pub fn reset(&mut self) {
        debug!("reset to root");
        self.active = self.tree.root();
        self.tree.reset(self.active.into());
    }

    fn enter(&mut self, menu: MenuId) {
        debug!(menu = %self.menu_name(menu), "entering menu");
        self.active = menu;
    }

    fn menu_name(&self, menu: MenuId) -> &str {
        self.tree.component(menu.into()).map_or("", |c| c.name())
    }
}

impl<R: Renderer> MenuSystem<R> {
    /// Render the active menu.
    pub fn display(&mut self) {
        self.renderer.render(&self.tree, self.active);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{Item, NumericItem};

    fn system() -> MenuSystem<()> {
        MenuSystem::new((), "root")
    }

    #[test]
    fn test_back_at_root_is_noop() {
        let mut ms = system();
        assert!(!ms.back());
        assert_eq!(ms.current_menu(), ms.root_menu());
    }

    #[test]
    fn test_focus_redirects_next_prev() {
        let mut ms = system();
        let root = ms.root_menu();
        let level = ms
            .tree_mut()
            .add_item(root, Item::numeric("level", NumericItem::new(5.0, 0.0, 10.0)))
            .unwrap();
        ms.tree_mut().add_item(root, Item::new("other")).unwrap();

        ms.select(false);
        assert!(ms.next(false));
        assert!(ms.next(false));
        assert_eq!(ms.tree().component(level).unwrap().as_numeric().unwrap().value(), 7.0);
        assert_eq!(ms.tree().menu(root).unwrap().current_index(), 0);

        ms.select(false);
        assert!(ms.next(false));
        assert_eq!(ms.tree().menu(root).unwrap().current_index(), 1);
    }

    #[test]
    fn test_reset_on_leaf_waits_for_focus_release() {
        let mut ms = system();
        let root = ms.root_menu();
        let sub = ms.tree_mut().add_menu(root, "sub").unwrap();
        ms.tree_mut()
            .add_item(sub, Item::numeric("level", NumericItem::new(1.0, 0.0, 3.0)))
            .unwrap();

        ms.select(true);
        assert_eq!(ms.current_menu(), sub);

        // entering focus is not a leaf selection
        ms.select(true);
        assert_eq!(ms.current_menu(), sub);

        ms.select(true);
        assert_eq!(ms.current_menu(), root);
    }

    #[test]
    fn test_select_on_empty_root_stays() {
        let mut ms = system();
        assert_eq!(ms.select(true), Navigation::Stay);
        assert!(!ms.next(true));
        assert!(!ms.prev(true));
    }
}
