//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.tabmove/config.toml` (global user preferences)
//! 3. **Explicit config** - a file passed on the command line (highest priority)
//!
//! Files are merged key by key before deserializing, so a file only needs
//! to contain the values it changes.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::types::TabMoveConfig;
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

/// Location of the user config file, if a home directory is known.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".tabmove").join("config.toml"))
}

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// A missing user config is not an error. A missing explicit config, a
/// parse error in any file, or a validation failure is.
pub fn load_hierarchy(explicit: Option<&Path>) -> Result<TabMoveConfig, ConfigError> {
    load_layers(user_config_path().as_deref(), explicit)
}

fn load_layers(
    user: Option<&Path>,
    explicit: Option<&Path>,
) -> Result<TabMoveConfig, ConfigError> {
    let mut merged = toml::Table::new();

    if let Some(path) = user {
        match read_table(path) {
            Ok(table) => {
                debug!(event = "core.config.user_loaded", path = %path.display());
                merge_tables(&mut merged, table);
            }
            Err(ConfigError::ConfigNotFound { .. }) => {}
            Err(e) => return Err(e),
        }
    }

    if let Some(path) = explicit {
        let table = read_table(path)?;
        debug!(event = "core.config.explicit_loaded", path = %path.display());
        merge_tables(&mut merged, table);
    }

    let config = from_table(merged, "<merged>")?;
    validate_config(&config)?;

    info!(
        event = "core.config.load_completed",
        root_id = %config.menu.root_id,
        window_prefix = %config.menu.window_prefix
    );
    Ok(config)
}

fn read_table(path: &Path) -> Result<toml::Table, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        Err(e) => return Err(e.into()),
    };
    content
        .parse::<toml::Table>()
        .map_err(|e| ConfigError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
}

fn from_table(table: toml::Table, origin: &str) -> Result<TabMoveConfig, ConfigError> {
    toml::Value::Table(table)
        .try_into()
        .map_err(|e: toml::de::Error| ConfigError::ConfigParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })
}

/// Merge `overlay` into `base`. Nested tables merge recursively, every
/// other value in `overlay` replaces the one in `base`.
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(incoming)) => {
                merge_tables(existing, incoming);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}
