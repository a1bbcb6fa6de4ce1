//! Editing a text buffer with nothing but next/prev/select.

mod common;

use common::recording::{hit_counter, RecordingRenderer};
use menu_core::{EditState, Item, MenuSystem, TextEditItem};

fn system() -> (MenuSystem<RecordingRenderer>, std::rc::Rc<std::cell::Cell<u32>>) {
    let mut ms = MenuSystem::new(RecordingRenderer::default(), "root");
    let root = ms.root_menu();
    let (hits, counter) = hit_counter();
    ms.tree_mut()
        .add_item(
            root,
            Item::text_edit("Name", TextEditItem::new("cat", 3)).on_select(counter),
        )
        .unwrap();
    ms.tree_mut().add_item(root, Item::new("Other")).unwrap();
    (ms, hits)
}

fn text_state(ms: &MenuSystem<RecordingRenderer>) -> (String, usize, EditState) {
    let id = ms.tree().find("Name").unwrap();
    let text = ms.tree().component(id).unwrap().as_text_edit().unwrap();
    (text.value().to_string(), text.position(), text.edit_state())
}

#[test]
fn edit_second_character_and_commit() {
    let (mut ms, hits) = system();

    ms.select(false);
    assert_eq!(text_state(&ms), ("cat".to_string(), 1, EditState::Selection));

    assert!(ms.next(false));
    ms.select(false);
    assert_eq!(text_state(&ms).2, EditState::Editing);

    assert!(ms.next(false));
    assert!(ms.next(false));
    assert_eq!(text_state(&ms).0, "cct");

    ms.select(false);
    assert_eq!(text_state(&ms).2, EditState::Selection);
    assert_eq!(hits.get(), 0);

    // walk back to the commit slot; cursor never wraps
    ms.prev(true);
    ms.prev(true);
    ms.prev(true);
    assert_eq!(text_state(&ms).1, 0);

    ms.select(false);
    assert_eq!(hits.get(), 1);
    assert!(!ms.tree().component(ms.tree().find("Name").unwrap()).unwrap().has_focus());

    // focus released: next moves the menu again
    assert!(ms.next(false));
    assert_eq!(ms.tree().menu(ms.root_menu()).unwrap().current_index(), 1);
}

#[test]
fn renderer_sees_cursor_and_focus() {
    let (mut ms, _) = system();
    ms.select(false);
    ms.next(false);
    ms.display();
    assert_eq!(ms.renderer().lines[0], "* Name 'cat' @2");
}

#[test]
fn reset_abandons_edit() {
    let (mut ms, hits) = system();
    ms.select(false);
    ms.next(false);
    ms.select(false);
    ms.next(false);
    ms.reset();

    let (value, position, state) = text_state(&ms);
    assert_eq!(value, "cbt");
    assert_eq!(position, 0);
    assert_eq!(state, EditState::Focused);
    assert_eq!(hits.get(), 0);
}
