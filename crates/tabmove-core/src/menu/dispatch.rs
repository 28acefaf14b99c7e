use serde::{Deserialize, Serialize};

use crate::host::types::{ClickInfo, ShownInfo, Tab, TabId, WindowId};
use crate::menu::errors::MoveStage;

/// Events the browser delivers to the extension, one at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    /// The extension was installed or updated.
    Installed,
    /// The browser profile started.
    Startup,
    /// A context menu opened. `tab` is the tab it was opened on, if any.
    MenuShown {
        #[serde(default)]
        info: ShownInfo,
        #[serde(default)]
        tab: Option<Tab>,
    },
    /// The context menu closed.
    MenuHidden,
    /// A menu entry was clicked.
    MenuClicked { info: ClickInfo },
}

/// Why an event was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// Menu opened on something other than a tab.
    NotTabContext,
    /// Clicked entry is not one of ours.
    NotWindowEntry,
    /// Clicked entry has no recorded target window.
    UnknownEntry,
    /// No tabs were captured when the menu was shown.
    NoSelection,
}

/// Why the root entry was left disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisabledReason {
    NoSelection,
    NoOtherWindows,
}

/// What handling one event did.
///
/// Handlers never fail towards the host; failures are logged and surface
/// here only so callers can observe them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    RootInstalled,
    RootInstallFailed {
        error: String,
    },
    Ignored {
        reason: IgnoreReason,
    },
    SubmenuDisabled {
        reason: DisabledReason,
        tab_count: usize,
    },
    SubmenuBuilt {
        tab_count: usize,
        targets: Vec<WindowId>,
    },
    SubmenuFailed {
        error: String,
    },
    MenuReset,
    TabsMoved {
        tab_ids: Vec<TabId>,
        window_id: WindowId,
    },
    MoveFailed {
        stage: MoveStage,
        error: String,
    },
}

/// Routes host events to their handlers.
pub trait Dispatch {
    fn dispatch(&mut self, event: HostEvent) -> Outcome;
}
