//! Built-in layout and the callbacks the demo attaches to it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use menu_core::{Component, ComponentId, ComponentKind, ItemKind, MenuTree};

/// Used when no layout file exists at the configured path.
pub const DEFAULT_LAYOUT: &str = r#"
name = "Main"

[[entry]]
kind = "item"
name = "Start"

[[entry]]
kind = "menu"
name = "Settings"

  [[entry.entries]]
  kind = "back"
  name = "Back"

  [[entry.entries]]
  kind = "numeric"
  name = "Volume"
  value = 50
  min = 0
  max = 100
  step = 5

  [[entry.entries]]
  kind = "numeric"
  name = "Brightness"
  value = 3
  min = 0
  max = 10

  [[entry.entries]]
  kind = "toggle"
  name = "Sound"
  state = true

  [[entry.entries]]
  kind = "text"
  name = "Device name"
  value = "menutree"
  size = 12

[[entry]]
kind = "menu"
name = "Status"

  [[entry.entries]]
  kind = "back"
  name = "Back"

  [[entry.entries]]
  kind = "display"
  name = "Uptime"

[[entry]]
kind = "item"
name = "Quit"
"#;

/// Name of the display item the app refreshes with elapsed seconds.
pub const UPTIME: &str = "Uptime";

/// Plain item that stops the app when selected.
pub const QUIT: &str = "Quit";

/// State the callbacks write to and the app reads back.
#[derive(Debug, Clone, Default)]
pub struct Shared {
    pub status: Rc<RefCell<String>>,
    pub quit: Rc<Cell<bool>>,
}

/// Attach a status-reporting callback to every component and install the
/// demo's value formatters.
pub fn attach_callbacks(tree: &mut MenuTree, shared: &Shared) {
    let ids: Vec<ComponentId> = tree.iter().map(|(id, _)| id).collect();
    for id in ids {
        let Some(component) = tree.component_mut(id) else {
            continue;
        };
        let name = component.name().to_string();
        match name.as_str() {
            "Volume" => {
                if let Some(n) = component.as_numeric_mut() {
                    n.set_formatter(|v| format!("{v:.0}%"));
                }
            }
            UPTIME => {
                if let Some(d) = component.as_numeric_display_mut() {
                    d.set_formatter(|v| format!("{v:.0}s"));
                }
            }
            _ => {}
        }

        let shared = shared.clone();
        component.set_select_fn(move |c: &Component| {
            if c.name() == QUIT && matches!(c.kind(), ComponentKind::Item(ItemKind::Plain)) {
                shared.quit.set(true);
            }
            *shared.status.borrow_mut() = status_line(c);
        });
    }
}

/// What the status bar says after `component`'s callback runs.
pub fn status_line(component: &Component) -> String {
    let name = component.name();
    match component.kind() {
        ComponentKind::Menu(_) => format!("entered {name}"),
        ComponentKind::Item(ItemKind::Plain) => format!("selected {name}"),
        ComponentKind::Item(ItemKind::Back) => "back".to_string(),
        ComponentKind::Item(ItemKind::Numeric(n)) => format!("{name} set to {}", n.formatted_value()),
        ComponentKind::Item(ItemKind::NumericDisplay(d)) => {
            format!("{name} is {}", d.formatted_value())
        }
        ComponentKind::Item(ItemKind::Toggle(t)) => format!("{name} {}", t.state_label()),
        ComponentKind::Item(ItemKind::TextEdit(t)) => {
            format!("{name} saved as \"{}\"", t.value().trim_end())
        }
    }
}
