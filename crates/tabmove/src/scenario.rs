//! Scenario files replayed by `tabmove simulate`.
//!
//! ```json
//! {
//!   "windows": [
//!     { "id": 1, "tabs": [{ "id": 5, "title": "Inbox", "active": true }] },
//!     { "id": 2, "tabs": [{ "id": 8, "title": "Music", "active": true }] }
//!   ],
//!   "steps": [
//!     { "step": "show", "tab_id": 5 },
//!     { "step": "click", "menu_item_id": "move-tab-window-2" },
//!     { "step": "hide" }
//!   ]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tabmove_core::TabMoveError;
use tabmove_core::host::{
    ClickInfo, HostError, MemoryBrowser, MenuContext, MenuItemId, ShownInfo, TabId, Window,
    WindowId,
};
use tabmove_core::menu::HostEvent;

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("Failed to read scenario '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse scenario '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Step {step}: tab {tab_id} does not exist")]
    UnknownTab { step: usize, tab_id: TabId },

    #[error("Step {step}: window {window_id} does not exist")]
    UnknownWindow { step: usize, window_id: WindowId },

    #[error("Invalid window layout: {source}")]
    InvalidLayout { source: HostError },

    #[error("Step {step}: cannot open window: {source}")]
    OpenWindow { step: usize, source: HostError },
}

impl TabMoveError for ScenarioError {
    fn error_code(&self) -> &'static str {
        match self {
            ScenarioError::Read { .. } => "SCENARIO_READ_FAILED",
            ScenarioError::Parse { .. } => "SCENARIO_PARSE_FAILED",
            ScenarioError::UnknownTab { .. } => "SCENARIO_UNKNOWN_TAB",
            ScenarioError::UnknownWindow { .. } => "SCENARIO_UNKNOWN_WINDOW",
            ScenarioError::InvalidLayout { .. } => "SCENARIO_INVALID_LAYOUT",
            ScenarioError::OpenWindow { .. } => "SCENARIO_OPEN_WINDOW_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        !matches!(self, ScenarioError::Read { .. })
    }
}

fn default_contexts() -> Vec<MenuContext> {
    vec![MenuContext::Tab]
}

/// One scripted action: a host event or a change made by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    Install,
    Startup,
    /// Open the context menu on a tab (looked up in the live browser).
    Show {
        #[serde(default)]
        tab_id: Option<TabId>,
        #[serde(default = "default_contexts")]
        contexts: Vec<MenuContext>,
    },
    Hide,
    Click {
        menu_item_id: MenuItemId,
    },
    /// Add tabs to the multi-selection.
    Highlight {
        tab_ids: Vec<TabId>,
    },
    CloseWindow {
        window_id: WindowId,
    },
    OpenWindow {
        window: Window,
    },
}

impl Step {
    /// Short human-readable description.
    pub fn describe(&self) -> String {
        match self {
            Step::Install => "install".to_string(),
            Step::Startup => "startup".to_string(),
            Step::Show { tab_id: Some(id), .. } => format!("show on tab {}", id),
            Step::Show { tab_id: None, .. } => "show without tab".to_string(),
            Step::Hide => "hide".to_string(),
            Step::Click { menu_item_id } => format!("click {}", menu_item_id),
            Step::Highlight { tab_ids } => format!("highlight {:?}", tab_ids),
            Step::CloseWindow { window_id } => format!("close window {}", window_id),
            Step::OpenWindow { window } => format!("open window {}", window.id),
        }
    }

    /// Apply the step to the browser. Returns the host event to dispatch,
    /// if the step produces one.
    pub fn apply(
        &self,
        index: usize,
        browser: &mut MemoryBrowser,
    ) -> Result<Option<HostEvent>, ScenarioError> {
        let event = match self {
            Step::Install => Some(HostEvent::Installed),
            Step::Startup => Some(HostEvent::Startup),
            Step::Show { tab_id, contexts } => {
                let tab = match tab_id {
                    Some(id) => Some(browser.tab(*id).cloned().ok_or(
                        ScenarioError::UnknownTab {
                            step: index,
                            tab_id: *id,
                        },
                    )?),
                    None => None,
                };
                Some(HostEvent::MenuShown {
                    info: ShownInfo {
                        contexts: contexts.clone(),
                    },
                    tab,
                })
            }
            Step::Hide => Some(HostEvent::MenuHidden),
            Step::Click { menu_item_id } => Some(HostEvent::MenuClicked {
                info: ClickInfo {
                    menu_item_id: menu_item_id.clone(),
                },
            }),
            Step::Highlight { tab_ids } => {
                for id in tab_ids {
                    browser
                        .set_highlighted(*id, true)
                        .map_err(|_| ScenarioError::UnknownTab {
                            step: index,
                            tab_id: *id,
                        })?;
                }
                None
            }
            Step::CloseWindow { window_id } => {
                browser
                    .close_window(*window_id)
                    .map_err(|_| ScenarioError::UnknownWindow {
                        step: index,
                        window_id: *window_id,
                    })?;
                None
            }
            Step::OpenWindow { window } => {
                browser
                    .open_window(window.clone())
                    .map_err(|source| ScenarioError::OpenWindow {
                        step: index,
                        source,
                    })?;
                None
            }
        };
        Ok(event)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub windows: Vec<Window>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let content = fs::read_to_string(path).map_err(|source| ScenarioError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Browser holding the scenario's starting layout.
    pub fn browser(&self) -> Result<MemoryBrowser, ScenarioError> {
        MemoryBrowser::new(self.windows.clone())
            .map_err(|source| ScenarioError::InvalidLayout { source })
    }

    pub fn parse(content: &str, origin: &Path) -> Result<Self, ScenarioError> {
        serde_json::from_str(content).map_err(|e| ScenarioError::Parse {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }
}
