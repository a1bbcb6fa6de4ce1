//! App: terminal setup, the polling loop, and input dispatch.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    layout::{Constraint, Layout},
    widgets::Paragraph,
    Frame, Terminal,
};
use tracing::{debug, info};

use menu_core::{
    config::{Config, NavigationConfig},
    ComponentId, MenuSystem, MenuTree,
};

use crate::action::{Action, KeyMap};
use crate::demo::{Shared, UPTIME};
use crate::renderer::TerminalRenderer;
use crate::theme::C_EDIT;
use crate::widgets::pane_chrome::{pane_chrome, Badge};
use crate::widgets::status_bar::{draw_keys_bar, draw_separator, draw_status_bar};

const TICK: Duration = Duration::from_millis(250);

type Term = Terminal<CrosstermBackend<Stdout>>;

pub struct App {
    menu: MenuSystem<TerminalRenderer>,
    keys: KeyMap,
    nav: NavigationConfig,
    shared: Shared,
    uptime: Option<ComponentId>,
    started: Instant,
}

impl App {
    pub fn new(tree: MenuTree, config: &Config, shared: Shared) -> Self {
        let uptime = tree.find(UPTIME);
        Self {
            menu: MenuSystem::with_tree(TerminalRenderer::new(), tree),
            keys: KeyMap::from_config(&config.keys),
            nav: config.navigation.clone(),
            shared,
            uptime,
            started: Instant::now(),
        }
    }

    // ── Main run loop ─────────────────────────────────────────────────────────

    pub fn run(mut self) -> anyhow::Result<()> {
        debug!("run(): enabling raw mode");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        debug!("run(): terminal created, size={:?}", terminal.size());

        let result = self.event_loop(&mut terminal);

        // ── Teardown ──────────────────────────────────────────────────────────
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(&mut self, terminal: &mut Term) -> anyhow::Result<()> {
        loop {
            self.tick();
            terminal.draw(|f| self.draw(f))?;

            if self.should_quit() {
                info!("quit requested");
                return Ok(());
            }

            if !event::poll(TICK)? {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let action = self.keys.action_for(key);
                self.dispatch(action);
            }
        }
    }

    // ── Input ─────────────────────────────────────────────────────────────────

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Next => {
                if !self.menu.next(self.nav.wrap) {
                    debug!("next not consumed");
                }
            }
            Action::Prev => {
                if !self.menu.prev(self.nav.wrap) {
                    debug!("prev not consumed");
                }
            }
            Action::Select => {
                let nav = self.menu.select(self.nav.reset_on_leaf);
                debug!("select -> {:?}", nav);
            }
            Action::Back => {
                if !self.menu.back() {
                    self.set_status("already at the top");
                }
            }
            Action::Reset => {
                self.menu.reset();
                self.set_status("reset");
            }
            Action::Quit => self.shared.quit.set(true),
            Action::Noop => {}
        }
    }

    pub fn menu(&self) -> &MenuSystem<TerminalRenderer> {
        &self.menu
    }

    pub fn status(&self) -> String {
        self.shared.status.borrow().clone()
    }

    pub fn should_quit(&self) -> bool {
        self.shared.quit.get()
    }

    fn set_status(&self, message: &str) {
        *self.shared.status.borrow_mut() = message.to_string();
    }

    /// True while the highlighted item captures next/prev.
    fn editing(&self) -> bool {
        let menu = self.menu();
        menu.tree()
            .current_component(menu.current_menu())
            .is_some_and(|c| c.has_focus())
    }

    fn tick(&mut self) {
        let Some(id) = self.uptime else {
            return;
        };
        let secs = self.started.elapsed().as_secs() as f32;
        if let Some(display) = self
            .menu
            .tree_mut()
            .component_mut(id)
            .and_then(|c| c.as_numeric_display_mut())
        {
            display.set_value(secs);
        }
    }

    // ── Drawing ───────────────────────────────────────────────────────────────

    fn draw(&mut self, frame: &mut Frame) {
        let [pane, separator, status, keys] = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let editing = self.editing();
        self.menu
            .renderer_mut()
            .set_width(pane.width.saturating_sub(2) as usize);
        self.menu.display();

        let title = self.menu.renderer().title().to_string();
        let lines = self.menu.renderer_mut().take_lines();
        let badge = editing.then_some(Badge {
            text: "EDIT",
            color: C_EDIT,
        });
        let block = pane_chrome(&title, badge);
        let inner = block.inner(pane);

        let current = self
            .menu
            .tree()
            .menu(self.menu.current_menu())
            .map_or(0, |m| m.current_index());
        let scroll = current.saturating_sub(inner.height.saturating_sub(1) as usize) as u16;

        frame.render_widget(Paragraph::new(lines).block(block).scroll((scroll, 0)), pane);

        draw_separator(frame, separator);
        draw_status_bar(frame, status, &self.status(), self.nav.wrap);
        draw_keys_bar(frame, keys, &self.keys, editing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::{attach_callbacks, DEFAULT_LAYOUT};
    use menu_core::layout::parse_layout;

    fn app(config: Config) -> App {
        let mut tree = parse_layout(DEFAULT_LAYOUT).unwrap().build().unwrap();
        let shared = Shared::default();
        attach_callbacks(&mut tree, &shared);
        App::new(tree, &config, shared)
    }

    #[test]
    fn test_dispatch_walks_menus() {
        let mut app = app(Config::default());
        app.dispatch(Action::Next);
        app.dispatch(Action::Select);
        assert_eq!(app.status(), "entered Settings");
        assert_ne!(app.menu().current_menu(), app.menu().root_menu());

        app.dispatch(Action::Back);
        assert_eq!(app.menu().current_menu(), app.menu().root_menu());
        app.dispatch(Action::Back);
        assert_eq!(app.status(), "already at the top");

        app.dispatch(Action::Reset);
        assert_eq!(app.status(), "reset");
        let root = app.menu().tree().menu(app.menu().root_menu()).unwrap();
        assert_eq!(root.current_index(), 0);
    }

    #[test]
    fn test_wrap_follows_config() {
        let mut app = app(Config::default());
        app.dispatch(Action::Prev);
        let root = app.menu().tree().menu(app.menu().root_menu()).unwrap();
        assert_eq!(root.current_index(), 3);

        let mut config = Config::default();
        config.navigation.wrap = false;
        let mut app = self::app(config);
        app.dispatch(Action::Prev);
        let root = app.menu().tree().menu(app.menu().root_menu()).unwrap();
        assert_eq!(root.current_index(), 0);
    }

    #[test]
    fn test_quit_item_and_action() {
        let mut app = app(Config::default());
        app.dispatch(Action::Prev);
        assert!(!app.should_quit());
        app.dispatch(Action::Select);
        assert!(app.should_quit());

        let mut app = self::app(Config::default());
        app.dispatch(Action::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn test_tick_updates_uptime() {
        let mut app = app(Config::default());
        app.started = Instant::now() - Duration::from_secs(7);
        app.tick();
        let id = app.menu().tree().find(UPTIME).unwrap();
        let display = app.menu().tree().component(id).unwrap();
        assert_eq!(display.as_numeric_display().unwrap().formatted_value(), "7s");
    }
}
