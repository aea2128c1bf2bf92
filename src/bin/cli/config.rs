//! Configuration file support for face-attrs.
//!
//! Supports TOML configuration from:
//! - XDG config: `~/.config/face-attrs/config.toml` (lowest priority)
//! - Project-local: `.face-attrs.toml` (searched up directory tree)
//! - CLI flags (highest priority, applied separately)

use std::path::{Path, PathBuf};

use face_attrs::Result;
use serde::Deserialize;
use tracing::{debug, info, warn};

pub const PROJECT_CONFIG_NAME: &str = ".face-attrs.toml";

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub output: OutputConfig,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: "json" or "text".
    pub format: Option<String>,
    /// Pretty-print JSON output.
    pub pretty: Option<bool>,
}

impl AppConfig {
    /// Load configuration from XDG and project-local files.
    ///
    /// Missing files are silently ignored; unreadable or invalid ones are
    /// logged and skipped.
    pub fn load() -> Self {
        let project = std::env::current_dir()
            .ok()
            .and_then(|cwd| find_config_in_parents(&cwd));
        Self::load_from(xdg_config_path(), project)
    }

    fn load_from(xdg: Option<PathBuf>, project: Option<PathBuf>) -> Self {
        let mut config = Self::default();

        if let Some(xdg_path) = xdg {
            if xdg_path.exists() {
                info!("Loading XDG config: {}", xdg_path.display());
                if let Some(xdg_config) = load_file(&xdg_path) {
                    config = xdg_config;
                }
            } else {
                debug!("XDG config not found: {}", xdg_path.display());
            }
        }

        if let Some(project_path) = project {
            info!("Loading project config: {}", project_path.display());
            if let Some(project_config) = load_file(&project_path) {
                config.merge(project_config);
            }
        }

        if let Err(e) = config.validate() {
            warn!("{e}, ignoring");
            config.output.format = None;
        }

        config
    }

    fn validate(&self) -> std::result::Result<(), String> {
        if let Some(ref f) = self.output.format {
            if f != "json" && f != "text" {
                return Err(format!("output.format must be 'json' or 'text', got '{f}'"));
            }
        }
        Ok(())
    }

    /// Values from `other` override values in `self` when present.
    fn merge(&mut self, other: Self) {
        self.output.format = other.output.format.or_else(|| self.output.format.take());
        self.output.pretty = other.output.pretty.or(self.output.pretty);
    }
}

fn xdg_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("face-attrs").join("config.toml"))
}

/// Search for the project config in the given directory and its parents.
fn find_config_in_parents(start: &Path) -> Option<PathBuf> {
    let mut current = Some(start);

    while let Some(dir) = current {
        let config_path = dir.join(PROJECT_CONFIG_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        current = dir.parent();
    }

    None
}

fn load_file(path: &Path) -> Option<AppConfig> {
    match parse_file(path) {
        Ok(config) => Some(config),
        Err(e) => {
            warn!("Failed to load config file {}: {}", path.display(), e);
            None
        }
    }
}

fn parse_file(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}
