//! Configuration management for Pathfinder CLI.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the project configuration file.
pub const CONFIG_FILE: &str = "pathfinder.toml";

/// Pathfinder project configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub map: MapConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Map file, relative to the directory holding `pathfinder.toml`.
    #[serde(default = "default_map_file")]
    pub file: PathBuf,
    /// Background image reference written into new map files.
    #[serde(default = "default_background")]
    pub background: String,
}

// Default value functions
fn default_map_file() -> PathBuf { PathBuf::from("europa.graph") }
fn default_background() -> String { "file:europa.gif".to_string() }

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            file: default_map_file(),
            background: default_background(),
        }
    }
}

impl Config {
    /// Load config from pathfinder.toml in the current or parent directories.
    ///
    /// Returns the config together with the directory relative paths resolve
    /// against: the config file's directory, or the current directory when no
    /// config file exists.
    pub fn load() -> Result<(Self, PathBuf)> {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        match find_config_file(&cwd) {
            Some(path) => {
                let config = Self::from_file(&path)?;
                let root = path.parent().map(Path::to_path_buf).unwrap_or(cwd);
                Ok((config, root))
            }
            None => Ok((Config::default(), cwd)),
        }
    }

    /// Parse a specific config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// The map file this config points at, resolved against `root`.
    pub fn map_path(&self, root: &Path) -> PathBuf {
        root.join(&self.map.file)
    }
}

/// Find pathfinder.toml in `start` or its parent directories.
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Decide which map file a command works on: an explicit `--map` wins over
/// the configured one.
pub fn resolve_map(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    let (config, root) = Config::load()?;
    Ok(config.map_path(&root))
}
