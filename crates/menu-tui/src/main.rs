mod action;
mod app;
mod demo;
mod renderer;
mod theme;
mod widgets;

use anyhow::Context;

use menu_core::{config::Config, layout, platform};

fn main() -> anyhow::Result<()> {
    let data_dir = platform::data_dir();
    std::fs::create_dir_all(&data_dir)?;
    let log_path = data_dir.join("menutree.log");

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    // Allow RUST_LOG override; the terminal belongs to the menu, so logs go to a file.
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".to_string());
    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_env_filter(log_filter.as_str())
        .with_ansi(false)
        .init();

    // Print log path to stderr so the operator can tail it immediately.
    eprintln!("menutree log: {}", log_path.display());

    tracing::info!("menutree starting…");

    // ── Load config ──────────────────────────────────────────────────────────
    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("config unavailable, using defaults: {:#}", e);
        Config::default()
    });

    // ── Build the menu tree ──────────────────────────────────────────────────
    let layout_file = &config.paths.layout_file;
    let layout = if layout_file.exists() {
        tracing::info!("loading layout from {}", layout_file.display());
        layout::load_layout(layout_file)?
    } else {
        tracing::info!("no layout at {}, using built-in menu", layout_file.display());
        layout::parse_layout(demo::DEFAULT_LAYOUT).context("parsing built-in layout")?
    };
    let mut tree = layout.build()?;
    tracing::info!("menu tree ready: {} components", tree.component_count());

    let shared = demo::Shared::default();
    demo::attach_callbacks(&mut tree, &shared);

    // ── Run TUI ──────────────────────────────────────────────────────────────
    app::App::new(tree, &config, shared).run()
}
