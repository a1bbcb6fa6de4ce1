use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use anyhow::Context;

use super::platform;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub keys: KeyConfig,
    #[serde(default)]
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Loop flag handed to next/prev: wrap at the ends instead of stopping.
    #[serde(default = "default_wrap")]
    pub wrap: bool,
    /// Go back to the root menu after a leaf item is selected.
    #[serde(default)]
    pub reset_on_leaf: bool,
}

/// Key names bound to each input action. Names are interpreted by the
/// front end (e.g. "up", "enter", "k").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyConfig {
    #[serde(default = "default_next_keys")]
    pub next: Vec<String>,
    #[serde(default = "default_prev_keys")]
    pub prev: Vec<String>,
    #[serde(default = "default_select_keys")]
    pub select: Vec<String>,
    #[serde(default = "default_back_keys")]
    pub back: Vec<String>,
    #[serde(default = "default_reset_keys")]
    pub reset: Vec<String>,
    #[serde(default = "default_quit_keys")]
    pub quit: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// TOML file describing the menu tree.
    /// Defaults to `$XDG_CONFIG_HOME/menutree/menu.toml`.
    #[serde(default = "default_layout_file")]
    pub layout_file: PathBuf,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            wrap: default_wrap(),
            reset_on_leaf: false,
        }
    }
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            next: default_next_keys(),
            prev: default_prev_keys(),
            select: default_select_keys(),
            back: default_back_keys(),
            reset: default_reset_keys(),
            quit: default_quit_keys(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            layout_file: default_layout_file(),
        }
    }
}

fn default_wrap() -> bool {
    true
}

fn keys(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn default_next_keys() -> Vec<String> {
    keys(&["down", "j"])
}

fn default_prev_keys() -> Vec<String> {
    keys(&["up", "k"])
}

fn default_select_keys() -> Vec<String> {
    keys(&["enter", "right", "l", "space"])
}

fn default_back_keys() -> Vec<String> {
    keys(&["left", "h", "backspace"])
}

fn default_reset_keys() -> Vec<String> {
    keys(&["r"])
}

fn default_quit_keys() -> Vec<String> {
    keys(&["q", "esc"])
}

fn default_layout_file() -> PathBuf {
    platform::config_dir().join("menu.toml")
}

impl Config {
    /// Load from the default location, writing defaults there on first run.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Self =
            toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        platform::config_dir().join("config.toml")
    }
}
