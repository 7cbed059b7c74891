//! Application configuration for the Sections CLI.
//!
//! User config lives at `~/.sections/sections.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SectionsError};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "sections.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".sections";

// ---------------------------------------------------------------------------
// Config structs (matching sections.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// How grouped lists are printed.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// `[display]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Skip groups that hold no items.
    #[serde(default)]
    pub hide_empty: bool,

    /// Prefix each item with its `group:item` position.
    #[serde(default = "default_true")]
    pub numbered: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            hide_empty: false,
            numbered: true,
        }
    }
}

fn default_true() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.sections/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| SectionsError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.sections/sections.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| SectionsError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| SectionsError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| SectionsError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let content = toml::to_string_pretty(&AppConfig::default())
        .map_err(|e| SectionsError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| SectionsError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}
