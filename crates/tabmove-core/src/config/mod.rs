//! # Configuration System
//!
//! Hierarchical TOML configuration for tabmove.
//!
//! Every value has a built-in default, so the controller works with no
//! config file at all. See [`loading`] for the file hierarchy.
//!
//! ```rust
//! use tabmove_core::config::TabMoveConfig;
//!
//! let config = TabMoveConfig::default();
//! assert_eq!(config.menu.root_id, "move-tab-root");
//! assert_eq!(config.labels.move_single, "Move tab to…");
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{LabelConfig, MenuConfig, TabMoveConfig};
pub use validation::{COUNT_PLACEHOLDER, validate_config};

impl TabMoveConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy(
        explicit: Option<&std::path::Path>,
    ) -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy(explicit)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
