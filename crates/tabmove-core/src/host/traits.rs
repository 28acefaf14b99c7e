//! Host capability traits.
//!
//! The controller is written against these instead of a concrete browser so
//! it can run over [`MemoryBrowser`](crate::host::memory::MemoryBrowser) in
//! tests and in the simulator.

use crate::host::errors::HostError;
use crate::host::types::{
    MenuItem, MenuUpdate, MoveProperties, RemoveOutcome, Tab, TabId, TabQuery, TabUpdate, Window,
    WindowId, WindowQuery, WindowUpdate,
};

/// Context menu registry.
pub trait MenusApi {
    /// Create a menu entry. Fails if the id is already registered or the
    /// parent does not exist.
    fn create_menu(&mut self, item: &MenuItem) -> Result<(), HostError>;

    /// Update title and/or enabled state of an existing entry.
    fn update_menu(&mut self, id: &str, update: &MenuUpdate) -> Result<(), HostError>;

    /// Remove an entry and its children.
    ///
    /// # Returns
    /// * `Ok(RemoveOutcome::Removed)` - Entry existed and was removed
    /// * `Ok(RemoveOutcome::NotFound)` - Entry was already gone
    /// * `Err(HostError)` - Removal failed for another reason
    fn remove_menu(&mut self, id: &str) -> Result<RemoveOutcome, HostError>;

    /// Re-render a menu that is currently open.
    fn refresh_menus(&mut self) -> Result<(), HostError>;
}

/// Tab queries and mutations.
pub trait TabsApi {
    /// Tabs matching the query, in tab strip order.
    fn query_tabs(&mut self, query: &TabQuery) -> Result<Vec<Tab>, HostError>;

    /// Move tabs (keeping their relative order) into a window.
    fn move_tabs(&mut self, tab_ids: &[TabId], props: MoveProperties)
    -> Result<Vec<Tab>, HostError>;

    fn update_tab(&mut self, tab_id: TabId, update: TabUpdate) -> Result<Tab, HostError>;
}

/// Window enumeration and focus.
pub trait WindowsApi {
    fn get_all_windows(&mut self, query: &WindowQuery) -> Result<Vec<Window>, HostError>;

    fn update_window(
        &mut self,
        window_id: WindowId,
        update: WindowUpdate,
    ) -> Result<Window, HostError>;
}

/// Everything the menu controller needs from the browser.
pub trait BrowserHost: MenusApi + TabsApi + WindowsApi {}

impl<T: MenusApi + TabsApi + WindowsApi> BrowserHost for T {}
