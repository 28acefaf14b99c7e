//! Configuration validation logic.

use crate::config::types::TabMoveConfig;
use crate::errors::ConfigError;

/// Placeholder replaced with the tab count in `labels.move_many`.
pub const COUNT_PLACEHOLDER: &str = "{count}";

/// Validate a TabMoveConfig, returning an error if any values are invalid.
///
/// # Validation Rules
///
/// - `menu.root_id` and `menu.window_prefix` must be non-empty
/// - `menu.root_id` must not start with `menu.window_prefix`, otherwise
///   clicks on the root entry would be taken for window entries
/// - `menu.window_types` must list at least one type
/// - `labels.move_many` must contain `{count}`
pub fn validate_config(config: &TabMoveConfig) -> Result<(), ConfigError> {
    let menu = &config.menu;

    if menu.root_id.trim().is_empty() {
        return Err(invalid("menu.root_id must not be empty"));
    }
    if menu.window_prefix.trim().is_empty() {
        return Err(invalid("menu.window_prefix must not be empty"));
    }
    if menu.root_id.starts_with(&menu.window_prefix) {
        return Err(invalid(format!(
            "menu.root_id '{}' must not start with menu.window_prefix '{}'",
            menu.root_id, menu.window_prefix
        )));
    }
    if menu.window_types.is_empty() {
        return Err(invalid("menu.window_types must list at least one window type"));
    }
    if !config.labels.move_many.contains(COUNT_PLACEHOLDER) {
        return Err(invalid(format!(
            "labels.move_many must contain '{}'",
            COUNT_PLACEHOLDER
        )));
    }

    Ok(())
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidConfiguration {
        message: message.into(),
    }
}
