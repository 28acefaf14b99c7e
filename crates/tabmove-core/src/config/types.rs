//! Configuration type definitions for tabmove.
//!
//! # Example Configuration
//!
//! ```toml
//! [menu]
//! root_id = "move-tab-root"
//! window_prefix = "move-tab-window-"
//! window_types = ["normal"]
//!
//! [labels]
//! move_single = "Move tab to…"
//! move_many = "Move {count} tabs to…"
//! no_other_windows_suffix = " (no other windows)"
//! untitled_tab = "(untitled tab)"
//! ```

use serde::{Deserialize, Serialize};

use crate::host::types::WindowType;

/// Main configuration loaded from TOML config files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TabMoveConfig {
    /// Menu identifiers and window enumeration
    #[serde(default)]
    pub menu: MenuConfig,

    /// User-visible menu labels
    #[serde(default)]
    pub labels: LabelConfig,
}

/// Menu identifiers and which windows are offered as move targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Identifier of the top-level "Move tab to…" entry.
    #[serde(default = "super::defaults::default_root_id")]
    pub root_id: String,

    /// Prefix of per-window entry ids; the window id is appended.
    #[serde(default = "super::defaults::default_window_prefix")]
    pub window_prefix: String,

    /// Window types offered as targets.
    /// Default: normal windows only.
    #[serde(default = "super::defaults::default_window_types")]
    pub window_types: Vec<WindowType>,
}

/// Menu labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelConfig {
    /// Root title when a single tab would move. Also the disabled default.
    #[serde(default = "super::defaults::default_move_single")]
    pub move_single: String,

    /// Root title when several tabs would move. `{count}` is replaced.
    #[serde(default = "super::defaults::default_move_many")]
    pub move_many: String,

    /// Appended to `move_single` when there is nowhere to move to.
    #[serde(default = "super::defaults::default_no_other_windows_suffix")]
    pub no_other_windows_suffix: String,

    /// Shown for a window whose active tab has no title.
    #[serde(default = "super::defaults::default_untitled_tab")]
    pub untitled_tab: String,
}
