//! tabmove-core: move browser tabs between windows from the tab context menu
//!
//! This library provides the menu controller and the host boundary it is
//! written against. It is used by the simulator CLI and its tests.
//!
//! # Main Entry Points
//!
//! - [`menu`] - The "Move tab to…" controller and event dispatch
//! - [`host`] - Host capability traits and the in-memory browser
//! - [`config`] - Configuration management

pub mod config;
pub mod errors;
pub mod events;
pub mod host;
pub mod logging;
pub mod menu;

// Re-export commonly used types at crate root for convenience
pub use config::TabMoveConfig;
pub use errors::{ConfigError, TabMoveError};
pub use host::{BrowserHost, HostError, MemoryBrowser};
pub use menu::{Dispatch, HostEvent, MenuController, MenuError, Outcome};

// Re-export logging initialization
pub use logging::init_logging;
