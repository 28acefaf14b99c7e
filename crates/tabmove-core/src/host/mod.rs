//! Browser host boundary.
//!
//! - [`BrowserHost`] - Capability traits the controller is written against
//! - [`types`] - Tabs, windows and menu entries as the host reports them
//! - [`HostError`] - Host call failures
//! - [`memory`] - In-memory host used by tests and the simulator

pub mod errors;
pub mod memory;
pub mod traits;
pub mod types;

pub use errors::HostError;
pub use memory::{HostApi, HostCall, MemoryBrowser};
pub use traits::{BrowserHost, MenusApi, TabsApi, WindowsApi};
pub use types::{
    APPEND_INDEX, ClickInfo, MenuContext, MenuItem, MenuItemId, MenuUpdate, MoveProperties,
    RemoveOutcome, ShownInfo, Tab, TabId, TabQuery, TabUpdate, Window, WindowId, WindowQuery,
    WindowType, WindowUpdate,
};
