//! Context menu for moving tabs between windows.
//!
//! # Architecture
//!
//! - [`MenuController`] - Handles show/hide/click and owns the selection
//! - [`Dispatch`] / [`HostEvent`] / [`Outcome`] - Event routing
//! - [`labels`] - Menu titles and entry ids
//! - [`selection`] - Which tabs a menu invocation acts on
//! - [`state`] - Selection captured between show and hide
//!
//! # Usage
//!
//! ```rust
//! use tabmove_core::config::TabMoveConfig;
//! use tabmove_core::host::{MemoryBrowser, MenuContext, ShownInfo, Tab, Window};
//! use tabmove_core::menu::{Dispatch, HostEvent, MenuController, Outcome};
//!
//! let browser = MemoryBrowser::new(vec![
//!     Window::new(1).with_tab(Tab::new(10, 1).with_title("Docs").active()),
//!     Window::new(2).with_tab(Tab::new(20, 2).with_title("Mail").active()),
//! ])
//! .unwrap();
//! let mut controller = MenuController::start(browser, TabMoveConfig::default());
//!
//! let tab = controller.host().tab(10).cloned();
//! let outcome = controller.dispatch(HostEvent::MenuShown {
//!     info: ShownInfo { contexts: vec![MenuContext::Tab] },
//!     tab,
//! });
//! assert_eq!(outcome, Outcome::SubmenuBuilt { tab_count: 1, targets: vec![2] });
//! ```

pub mod controller;
pub mod dispatch;
pub mod errors;
pub mod labels;
pub mod selection;
pub mod state;

pub use controller::{MenuController, Rebuilt};
pub use dispatch::{DisabledReason, Dispatch, HostEvent, IgnoreReason, Outcome};
pub use errors::{MenuError, MoveStage};
pub use labels::{no_other_windows_title, root_title, window_entry_id, window_label};
pub use selection::selected_tabs_for_context;
pub use state::{ActiveSelection, MenuPhase};
