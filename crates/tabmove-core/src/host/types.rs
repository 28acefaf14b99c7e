//! Data types exchanged with the browser host.
//!
//! These mirror the shapes the tabs/windows/menus APIs report. All of them
//! are serde-serializable so scenarios can be recorded and replayed.

use std::fmt;

use serde::{Deserialize, Serialize};

pub type TabId = i64;
pub type WindowId = i64;

/// Tab index meaning "append at the end of the tab strip".
pub const APPEND_INDEX: i64 = -1;

/// A browser tab as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub id: TabId,
    /// Absent for tabs that are not attached to a window (e.g. devtools).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_id: Option<WindowId>,
    #[serde(default)]
    pub index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub active: bool,
    /// The host's multi-select flag.
    #[serde(default)]
    pub highlighted: bool,
}

impl Tab {
    pub fn new(id: TabId, window_id: WindowId) -> Self {
        Self {
            id,
            window_id: Some(window_id),
            index: 0,
            title: None,
            active: false,
            highlighted: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn active(mut self) -> Self {
        self.active = true;
        self.highlighted = true;
        self
    }

    pub fn highlighted(mut self) -> Self {
        self.highlighted = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WindowType {
    #[default]
    Normal,
    Popup,
    Panel,
    Devtools,
}

impl WindowType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WindowType::Normal => "normal",
            WindowType::Popup => "popup",
            WindowType::Panel => "panel",
            WindowType::Devtools => "devtools",
        }
    }
}

impl fmt::Display for WindowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A browser window. `tabs` is only filled when the query asked to populate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub id: WindowId,
    #[serde(default, rename = "type")]
    pub window_type: WindowType,
    #[serde(default)]
    pub focused: bool,
    #[serde(default)]
    pub tabs: Vec<Tab>,
}

impl Window {
    pub fn new(id: WindowId) -> Self {
        Self {
            id,
            window_type: WindowType::Normal,
            focused: false,
            tabs: Vec::new(),
        }
    }

    pub fn of_type(mut self, window_type: WindowType) -> Self {
        self.window_type = window_type;
        self
    }

    pub fn with_tab(mut self, tab: Tab) -> Self {
        let mut tab = tab;
        tab.window_id = Some(self.id);
        tab.index = self.tabs.len();
        self.tabs.push(tab);
        self
    }
}

/// Where a menu entry is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuContext {
    All,
    Page,
    Frame,
    Selection,
    Link,
    Editable,
    Image,
    Tab,
    BrowserAction,
    Tools,
}

/// Identifier reported by the host for a clicked entry.
///
/// Hosts allow both string and integer menu ids, so a click may carry either.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MenuItemId {
    Str(String),
    Int(i64),
}

impl MenuItemId {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MenuItemId::Str(s) => Some(s),
            MenuItemId::Int(_) => None,
        }
    }
}

impl From<&str> for MenuItemId {
    fn from(value: &str) -> Self {
        MenuItemId::Str(value.to_string())
    }
}

impl From<String> for MenuItemId {
    fn from(value: String) -> Self {
        MenuItemId::Str(value)
    }
}

impl From<i64> for MenuItemId {
    fn from(value: i64) -> Self {
        MenuItemId::Int(value)
    }
}

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuItemId::Str(s) => f.write_str(s),
            MenuItemId::Int(i) => write!(f, "{}", i),
        }
    }
}

/// Properties for creating a menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub title: String,
    pub contexts: Vec<MenuContext>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Partial update of a menu entry. `None` fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MenuUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl MenuUpdate {
    pub fn new(title: impl Into<String>, enabled: bool) -> Self {
        Self {
            title: Some(title.into()),
            enabled: Some(enabled),
        }
    }
}

/// Result of removing a menu entry.
///
/// Removing an entry that does not exist is an expected race, not a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotFound,
}

/// Payload of the menu-shown event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ShownInfo {
    #[serde(default)]
    pub contexts: Vec<MenuContext>,
}

impl ShownInfo {
    pub fn includes(&self, context: MenuContext) -> bool {
        self.contexts.contains(&context)
    }
}

/// Payload of the menu-clicked event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickInfo {
    pub menu_item_id: MenuItemId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TabQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_id: Option<WindowId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlighted: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveProperties {
    pub window_id: WindowId,
    /// Target position; [`APPEND_INDEX`] appends.
    pub index: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TabUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct WindowQuery {
    #[serde(default)]
    pub populate: bool,
    /// Empty means every type.
    #[serde(default)]
    pub window_types: Vec<WindowType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct WindowUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focused: Option<bool>,
}
