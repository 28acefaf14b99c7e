use crate::errors::TabMoveError;
use crate::host::types::{TabId, WindowId};

/// Failures reported by host API calls.
///
/// Removing an absent menu entry is not represented here; see
/// [`RemoveOutcome`](crate::host::types::RemoveOutcome).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("Menu entry '{id}' not found")]
    MenuNotFound { id: String },

    #[error("Menu entry '{id}' already exists")]
    DuplicateMenuId { id: String },

    #[error("Parent menu entry '{id}' not found")]
    ParentNotFound { id: String },

    #[error("Tab {id} not found")]
    TabNotFound { id: TabId },

    #[error("Window {id} not found")]
    WindowNotFound { id: WindowId },

    #[error("Window {id} already exists")]
    DuplicateWindowId { id: WindowId },

    #[error("Tab {id} already exists")]
    DuplicateTabId { id: TabId },

    #[error("Invalid tab index {index} for window {window_id}")]
    InvalidMoveIndex { window_id: WindowId, index: i64 },

    #[error("Host call '{api}' failed: {message}")]
    CallFailed { api: &'static str, message: String },
}

impl TabMoveError for HostError {
    fn error_code(&self) -> &'static str {
        match self {
            HostError::MenuNotFound { .. } => "HOST_MENU_NOT_FOUND",
            HostError::DuplicateMenuId { .. } => "HOST_DUPLICATE_MENU_ID",
            HostError::ParentNotFound { .. } => "HOST_PARENT_NOT_FOUND",
            HostError::TabNotFound { .. } => "HOST_TAB_NOT_FOUND",
            HostError::WindowNotFound { .. } => "HOST_WINDOW_NOT_FOUND",
            HostError::DuplicateWindowId { .. } => "HOST_DUPLICATE_WINDOW_ID",
            HostError::DuplicateTabId { .. } => "HOST_DUPLICATE_TAB_ID",
            HostError::InvalidMoveIndex { .. } => "HOST_INVALID_MOVE_INDEX",
            HostError::CallFailed { .. } => "HOST_CALL_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        // Windows and tabs can disappear between showing the menu and clicking.
        matches!(
            self,
            HostError::TabNotFound { .. } | HostError::WindowNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_failed_display() {
        let error = HostError::CallFailed {
            api: "tabs.move",
            message: "port disconnected".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Host call 'tabs.move' failed: port disconnected"
        );
        assert_eq!(error.error_code(), "HOST_CALL_FAILED");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_window_not_found_is_user_error() {
        let error = HostError::WindowNotFound { id: 42 };
        assert_eq!(error.to_string(), "Window 42 not found");
        assert!(error.is_user_error());
    }
}
