//! Default implementations for configuration types.
//!
//! Used by serde `#[serde(default = "...")]` attributes and `Default` impls.

use crate::config::types::{LabelConfig, MenuConfig};
use crate::host::types::WindowType;

const DEFAULT_ROOT_ID: &str = "move-tab-root";
const DEFAULT_WINDOW_PREFIX: &str = "move-tab-window-";

pub fn default_root_id() -> String {
    DEFAULT_ROOT_ID.to_string()
}

pub fn default_window_prefix() -> String {
    DEFAULT_WINDOW_PREFIX.to_string()
}

pub fn default_window_types() -> Vec<WindowType> {
    vec![WindowType::Normal]
}

pub fn default_move_single() -> String {
    "Move tab to…".to_string()
}

pub fn default_move_many() -> String {
    "Move {count} tabs to…".to_string()
}

pub fn default_no_other_windows_suffix() -> String {
    " (no other windows)".to_string()
}

pub fn default_untitled_tab() -> String {
    "(untitled tab)".to_string()
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            root_id: default_root_id(),
            window_prefix: default_window_prefix(),
            window_types: default_window_types(),
        }
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            move_single: default_move_single(),
            move_many: default_move_many(),
            no_other_windows_suffix: default_no_other_windows_suffix(),
            untitled_tab: default_untitled_tab(),
        }
    }
}
