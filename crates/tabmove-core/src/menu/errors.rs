use std::fmt;

use serde::Serialize;

use crate::errors::TabMoveError;
use crate::host::errors::HostError;

/// Step of the move sequence that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveStage {
    Move,
    Activate,
    Focus,
}

impl fmt::Display for MoveStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self {
            MoveStage::Move => "move",
            MoveStage::Activate => "activate",
            MoveStage::Focus => "focus",
        };
        f.write_str(stage)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    #[error("Failed to install root menu entry: {source}")]
    RootInstall { source: HostError },

    #[error("Failed to build move-tab submenu: {source}")]
    Rebuild {
        #[from]
        source: HostError,
    },

    #[error("Failed to move tab(s) at {stage} step: {source}")]
    Move { stage: MoveStage, source: HostError },
}

impl MenuError {
    /// The underlying host failure.
    pub fn host_error(&self) -> &HostError {
        match self {
            MenuError::RootInstall { source }
            | MenuError::Rebuild { source }
            | MenuError::Move { source, .. } => source,
        }
    }
}

impl TabMoveError for MenuError {
    fn error_code(&self) -> &'static str {
        match self {
            MenuError::RootInstall { .. } => "MENU_ROOT_INSTALL_FAILED",
            MenuError::Rebuild { .. } => "MENU_REBUILD_FAILED",
            MenuError::Move { .. } => "MENU_MOVE_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        self.host_error().is_user_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display_names_stage() {
        let error = MenuError::Move {
            stage: MoveStage::Focus,
            source: HostError::WindowNotFound { id: 42 },
        };
        assert_eq!(
            error.to_string(),
            "Failed to move tab(s) at focus step: Window 42 not found"
        );
        assert_eq!(error.error_code(), "MENU_MOVE_FAILED");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_rebuild_error_from_host_error() {
        let error = MenuError::from(HostError::CallFailed {
            api: "windows.getAll",
            message: "disconnected".to_string(),
        });
        assert_eq!(error.error_code(), "MENU_REBUILD_FAILED");
        assert!(!error.is_user_error());
        assert!(matches!(error.host_error(), HostError::CallFailed { .. }));
    }
}
