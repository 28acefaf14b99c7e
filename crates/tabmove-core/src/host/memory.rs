//! In-memory browser host.
//!
//! Holds windows, tabs and a menu registry, applies the same rules a real
//! browser does for the calls the controller makes, and records every call
//! so tests can assert on exact host interaction. Individual APIs can be
//! made to fail with [`MemoryBrowser::fail`].

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::host::errors::HostError;
use crate::host::traits::{MenusApi, TabsApi, WindowsApi};
use crate::host::types::{
    APPEND_INDEX, MenuItem, MenuUpdate, MoveProperties, RemoveOutcome, Tab, TabId, TabQuery,
    TabUpdate, Window, WindowId, WindowQuery, WindowUpdate,
};

/// Host API methods, used to inject failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostApi {
    CreateMenu,
    UpdateMenu,
    RemoveMenu,
    RefreshMenus,
    QueryTabs,
    MoveTabs,
    UpdateTab,
    GetAllWindows,
    UpdateWindow,
}

impl HostApi {
    pub fn name(&self) -> &'static str {
        match self {
            HostApi::CreateMenu => "menus.create",
            HostApi::UpdateMenu => "menus.update",
            HostApi::RemoveMenu => "menus.remove",
            HostApi::RefreshMenus => "menus.refresh",
            HostApi::QueryTabs => "tabs.query",
            HostApi::MoveTabs => "tabs.move",
            HostApi::UpdateTab => "tabs.update",
            HostApi::GetAllWindows => "windows.getAll",
            HostApi::UpdateWindow => "windows.update",
        }
    }
}

/// A recorded host call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum HostCall {
    CreateMenu {
        item: MenuItem,
    },
    UpdateMenu {
        id: String,
        update: MenuUpdate,
    },
    RemoveMenu {
        id: String,
    },
    RefreshMenus,
    QueryTabs {
        query: TabQuery,
    },
    MoveTabs {
        tab_ids: Vec<TabId>,
        props: MoveProperties,
    },
    UpdateTab {
        tab_id: TabId,
        update: TabUpdate,
    },
    GetAllWindows {
        query: WindowQuery,
    },
    UpdateWindow {
        window_id: WindowId,
        update: WindowUpdate,
    },
}

#[derive(Debug, Clone)]
struct InjectedFailure {
    message: String,
    /// Calls that still succeed before the failure kicks in.
    successes_left: usize,
}

#[derive(Debug, Default)]
pub struct MemoryBrowser {
    windows: Vec<Window>,
    menus: Vec<MenuItem>,
    calls: Vec<HostCall>,
    failures: HashMap<HostApi, InjectedFailure>,
}

impl MemoryBrowser {
    /// Build a browser from a window layout.
    ///
    /// Tab indices and window back-references are normalised from the
    /// layout order. Window ids and tab ids must be unique across the
    /// whole layout.
    pub fn new(windows: Vec<Window>) -> Result<Self, HostError> {
        let mut browser = Self::default();
        for window in windows {
            browser.open_window(window)?;
        }
        Ok(browser)
    }

    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    pub fn window(&self, id: WindowId) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn tab(&self, id: TabId) -> Option<&Tab> {
        self.windows
            .iter()
            .flat_map(|w| w.tabs.iter())
            .find(|t| t.id == id)
    }

    pub fn focused_window(&self) -> Option<WindowId> {
        self.windows.iter().find(|w| w.focused).map(|w| w.id)
    }

    /// Registered menu entries in creation order.
    pub fn menus(&self) -> &[MenuItem] {
        &self.menus
    }

    pub fn menu(&self, id: &str) -> Option<&MenuItem> {
        self.menus.iter().find(|m| m.id == id)
    }

    /// Direct children of a menu entry in creation order.
    pub fn children_of(&self, parent_id: &str) -> Vec<&MenuItem> {
        self.menus
            .iter()
            .filter(|m| m.parent_id.as_deref() == Some(parent_id))
            .collect()
    }

    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Number of `menus.refresh` calls recorded.
    pub fn refresh_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, HostCall::RefreshMenus))
            .count()
    }

    /// Make every subsequent call to `api` fail with `message`.
    pub fn fail(&mut self, api: HostApi, message: impl Into<String>) {
        self.fail_after(api, 0, message);
    }

    /// Let the next `successes` calls to `api` through, then fail every
    /// call after that with `message`.
    pub fn fail_after(&mut self, api: HostApi, successes: usize, message: impl Into<String>) {
        self.failures.insert(
            api,
            InjectedFailure {
                message: message.into(),
                successes_left: successes,
            },
        );
    }

    pub fn clear_failure(&mut self, api: HostApi) {
        self.failures.remove(&api);
    }

    /// Set the multi-select flag on a tab, as the user ctrl-clicking would.
    pub fn set_highlighted(&mut self, tab_id: TabId, highlighted: bool) -> Result<(), HostError> {
        let tab = self
            .tab_mut(tab_id)
            .ok_or(HostError::TabNotFound { id: tab_id })?;
        tab.highlighted = highlighted;
        Ok(())
    }

    /// Open a new window. Used to simulate windows appearing mid-scenario.
    ///
    /// Fails if the window id, or any of its tab ids, is already in use.
    pub fn open_window(&mut self, window: Window) -> Result<(), HostError> {
        if self.window(window.id).is_some() {
            return Err(HostError::DuplicateWindowId { id: window.id });
        }
        let mut seen = HashSet::with_capacity(window.tabs.len());
        for tab in &window.tabs {
            if !seen.insert(tab.id) || self.tab(tab.id).is_some() {
                return Err(HostError::DuplicateTabId { id: tab.id });
            }
        }

        let mut window = window;
        reindex(&mut window);
        self.windows.push(window);
        Ok(())
    }

    /// Close a window and its tabs. Menu entries are left untouched.
    pub fn close_window(&mut self, window_id: WindowId) -> Result<(), HostError> {
        let before = self.windows.len();
        self.windows.retain(|w| w.id != window_id);
        if self.windows.len() == before {
            return Err(HostError::WindowNotFound { id: window_id });
        }
        Ok(())
    }

    fn record(&mut self, api: HostApi, call: HostCall) -> Result<(), HostError> {
        debug!(event = "host.memory.call_recorded", api = api.name());
        self.calls.push(call);
        match self.failures.get_mut(&api) {
            Some(failure) if failure.successes_left > 0 => {
                failure.successes_left -= 1;
                Ok(())
            }
            Some(failure) => Err(HostError::CallFailed {
                api: api.name(),
                message: failure.message.clone(),
            }),
            None => Ok(()),
        }
    }

    fn tab_mut(&mut self, id: TabId) -> Option<&mut Tab> {
        self.windows
            .iter_mut()
            .flat_map(|w| w.tabs.iter_mut())
            .find(|t| t.id == id)
    }

    fn window_index(&self, id: WindowId) -> Option<usize> {
        self.windows.iter().position(|w| w.id == id)
    }

    fn remove_menu_tree(&mut self, id: &str) {
        let children: Vec<String> = self
            .menus
            .iter()
            .filter(|m| m.parent_id.as_deref() == Some(id))
            .map(|m| m.id.clone())
            .collect();
        for child in children {
            self.remove_menu_tree(&child);
        }
        self.menus.retain(|m| m.id != id);
    }
}

/// Restore tab indices and window back-references after a mutation.
fn reindex(window: &mut Window) {
    for (index, tab) in window.tabs.iter_mut().enumerate() {
        tab.index = index;
        tab.window_id = Some(window.id);
        // The active tab is always part of the highlighted set.
        if tab.active {
            tab.highlighted = true;
        }
    }
}

/// Make sure a non-empty window has exactly one active tab.
fn ensure_active(window: &mut Window, preferred_index: usize) {
    if window.tabs.is_empty() || window.tabs.iter().any(|t| t.active) {
        return;
    }
    let index = preferred_index.min(window.tabs.len() - 1);
    window.tabs[index].active = true;
    window.tabs[index].highlighted = true;
}

impl MenusApi for MemoryBrowser {
    fn create_menu(&mut self, item: &MenuItem) -> Result<(), HostError> {
        self.record(
            HostApi::CreateMenu,
            HostCall::CreateMenu { item: item.clone() },
        )?;

        if self.menu(&item.id).is_some() {
            return Err(HostError::DuplicateMenuId {
                id: item.id.clone(),
            });
        }
        if let Some(parent) = &item.parent_id
            && self.menu(parent).is_none()
        {
            return Err(HostError::ParentNotFound { id: parent.clone() });
        }

        self.menus.push(item.clone());
        Ok(())
    }

    fn update_menu(&mut self, id: &str, update: &MenuUpdate) -> Result<(), HostError> {
        self.record(
            HostApi::UpdateMenu,
            HostCall::UpdateMenu {
                id: id.to_string(),
                update: update.clone(),
            },
        )?;

        let entry = self
            .menus
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| HostError::MenuNotFound { id: id.to_string() })?;
        if let Some(title) = &update.title {
            entry.title = title.clone();
        }
        if let Some(enabled) = update.enabled {
            entry.enabled = Some(enabled);
        }
        Ok(())
    }

    fn remove_menu(&mut self, id: &str) -> Result<RemoveOutcome, HostError> {
        self.record(HostApi::RemoveMenu, HostCall::RemoveMenu { id: id.to_string() })?;

        if self.menu(id).is_none() {
            return Ok(RemoveOutcome::NotFound);
        }
        self.remove_menu_tree(id);
        Ok(RemoveOutcome::Removed)
    }

    fn refresh_menus(&mut self) -> Result<(), HostError> {
        self.record(HostApi::RefreshMenus, HostCall::RefreshMenus)
    }
}

impl TabsApi for MemoryBrowser {
    fn query_tabs(&mut self, query: &TabQuery) -> Result<Vec<Tab>, HostError> {
        self.record(
            HostApi::QueryTabs,
            HostCall::QueryTabs {
                query: query.clone(),
            },
        )?;

        Ok(self
            .windows
            .iter()
            .filter(|w| query.window_id.is_none_or(|id| w.id == id))
            .flat_map(|w| w.tabs.iter())
            .filter(|t| query.highlighted.is_none_or(|h| t.highlighted == h))
            .cloned()
            .collect())
    }

    fn move_tabs(
        &mut self,
        tab_ids: &[TabId],
        props: MoveProperties,
    ) -> Result<Vec<Tab>, HostError> {
        self.record(
            HostApi::MoveTabs,
            HostCall::MoveTabs {
                tab_ids: tab_ids.to_vec(),
                props,
            },
        )?;

        if props.index < APPEND_INDEX {
            return Err(HostError::InvalidMoveIndex {
                window_id: props.window_id,
                index: props.index,
            });
        }
        if self.window_index(props.window_id).is_none() {
            return Err(HostError::WindowNotFound {
                id: props.window_id,
            });
        }
        if let Some(missing) = tab_ids.iter().find(|id| self.tab(**id).is_none()) {
            return Err(HostError::TabNotFound { id: *missing });
        }

        // Detach in the requested order, remembering where each tab was.
        let mut detached = Vec::with_capacity(tab_ids.len());
        let mut vacated: Vec<(WindowId, usize)> = Vec::new();
        for id in tab_ids {
            for window in &mut self.windows {
                if let Some(pos) = window.tabs.iter().position(|t| t.id == *id) {
                    let mut tab = window.tabs.remove(pos);
                    if window.id != props.window_id {
                        tab.active = false;
                        tab.highlighted = false;
                    }
                    vacated.push((window.id, pos));
                    detached.push(tab);
                    break;
                }
            }
        }

        let target = self
            .window_index(props.window_id)
            .ok_or(HostError::WindowNotFound {
                id: props.window_id,
            })?;
        let target_window = &mut self.windows[target];
        let start = if props.index == APPEND_INDEX {
            target_window.tabs.len()
        } else {
            (props.index as usize).min(target_window.tabs.len())
        };
        for (offset, tab) in detached.iter().enumerate() {
            target_window.tabs.insert(start + offset, tab.clone());
        }
        reindex(target_window);
        ensure_active(target_window, start);

        for (window_id, pos) in vacated {
            if let Some(idx) = self.window_index(window_id) {
                let window = &mut self.windows[idx];
                reindex(window);
                ensure_active(window, pos);
            }
        }
        // Browsers close a window once its last tab leaves.
        self.windows.retain(|w| !w.tabs.is_empty());

        let moved = tab_ids.iter().filter_map(|id| self.tab(*id).cloned()).collect();
        Ok(moved)
    }

    fn update_tab(&mut self, tab_id: TabId, update: TabUpdate) -> Result<Tab, HostError> {
        self.record(HostApi::UpdateTab, HostCall::UpdateTab { tab_id, update })?;

        let window = self
            .windows
            .iter_mut()
            .find(|w| w.tabs.iter().any(|t| t.id == tab_id))
            .ok_or(HostError::TabNotFound { id: tab_id })?;

        if update.active == Some(true) {
            for tab in &mut window.tabs {
                let is_target = tab.id == tab_id;
                tab.active = is_target;
                tab.highlighted = is_target;
            }
        }

        window
            .tabs
            .iter()
            .find(|t| t.id == tab_id)
            .cloned()
            .ok_or(HostError::TabNotFound { id: tab_id })
    }
}

impl WindowsApi for MemoryBrowser {
    fn get_all_windows(&mut self, query: &WindowQuery) -> Result<Vec<Window>, HostError> {
        self.record(
            HostApi::GetAllWindows,
            HostCall::GetAllWindows {
                query: query.clone(),
            },
        )?;

        Ok(self
            .windows
            .iter()
            .filter(|w| {
                query.window_types.is_empty() || query.window_types.contains(&w.window_type)
            })
            .map(|w| {
                let mut window = w.clone();
                if !query.populate {
                    window.tabs.clear();
                }
                window
            })
            .collect())
    }

    fn update_window(
        &mut self,
        window_id: WindowId,
        update: WindowUpdate,
    ) -> Result<Window, HostError> {
        self.record(
            HostApi::UpdateWindow,
            HostCall::UpdateWindow { window_id, update },
        )?;

        if self.window_index(window_id).is_none() {
            return Err(HostError::WindowNotFound { id: window_id });
        }
        if update.focused == Some(true) {
            for window in &mut self.windows {
                window.focused = window.id == window_id;
            }
        }

        self.window(window_id)
            .cloned()
            .ok_or(HostError::WindowNotFound { id: window_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::types::{MenuContext, WindowType};

    fn two_windows() -> MemoryBrowser {
        MemoryBrowser::new(vec![
            Window::new(1)
                .with_tab(Tab::new(10, 1).with_title("a").active())
                .with_tab(Tab::new(11, 1).with_title("b"))
                .with_tab(Tab::new(12, 1).with_title("c")),
            Window::new(2).with_tab(Tab::new(20, 2).with_title("d").active()),
        ])
        .unwrap()
    }

    fn item(id: &str, parent: Option<&str>) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            parent_id: parent.map(str::to_string),
            title: id.to_string(),
            contexts: vec![MenuContext::Tab],
            enabled: None,
        }
    }

    #[test]
    fn test_create_menu_rejects_duplicate_id() {
        let mut browser = MemoryBrowser::default();
        browser.create_menu(&item("root", None)).unwrap();
        let result = browser.create_menu(&item("root", None));
        assert_eq!(
            result,
            Err(HostError::DuplicateMenuId {
                id: "root".to_string()
            })
        );
    }

    #[test]
    fn test_create_menu_requires_parent() {
        let mut browser = MemoryBrowser::default();
        let result = browser.create_menu(&item("child", Some("missing")));
        assert!(matches!(result, Err(HostError::ParentNotFound { .. })));
        assert!(browser.menus().is_empty());
    }

    #[test]
    fn test_remove_menu_reports_not_found_and_removes_children() {
        let mut browser = MemoryBrowser::default();
        assert_eq!(browser.remove_menu("root"), Ok(RemoveOutcome::NotFound));

        browser.create_menu(&item("root", None)).unwrap();
        browser.create_menu(&item("child", Some("root"))).unwrap();
        assert_eq!(browser.remove_menu("root"), Ok(RemoveOutcome::Removed));
        assert!(browser.menus().is_empty());
    }

    #[test]
    fn test_update_menu_applies_partial_update() {
        let mut browser = MemoryBrowser::default();
        browser.create_menu(&item("root", None)).unwrap();
        browser
            .update_menu(
                "root",
                &MenuUpdate {
                    title: None,
                    enabled: Some(true),
                },
            )
            .unwrap();
        let root = browser.menu("root").unwrap();
        assert_eq!(root.title, "root");
        assert_eq!(root.enabled, Some(true));
    }

    #[test]
    fn test_query_tabs_filters_by_window_and_highlight() {
        let mut browser = two_windows();
        browser.set_highlighted(12, true).unwrap();
        let tabs = browser
            .query_tabs(&TabQuery {
                window_id: Some(1),
                highlighted: Some(true),
            })
            .unwrap();
        let ids: Vec<TabId> = tabs.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![10, 12]);
    }

    #[test]
    fn test_move_tabs_appends_in_order() {
        let mut browser = two_windows();
        let moved = browser
            .move_tabs(
                &[12, 11],
                MoveProperties {
                    window_id: 2,
                    index: APPEND_INDEX,
                },
            )
            .unwrap();

        assert_eq!(moved.len(), 2);
        let target: Vec<TabId> = browser.window(2).unwrap().tabs.iter().map(|t| t.id).collect();
        assert_eq!(target, vec![20, 12, 11]);
        assert_eq!(browser.tab(11).unwrap().index, 2);
        assert_eq!(browser.tab(11).unwrap().window_id, Some(2));
        // Target keeps its own active tab.
        assert!(browser.tab(20).unwrap().active);
    }

    #[test]
    fn test_move_tabs_reactivates_source_window() {
        let mut browser = two_windows();
        browser
            .move_tabs(
                &[10],
                MoveProperties {
                    window_id: 2,
                    index: APPEND_INDEX,
                },
            )
            .unwrap();
        let source = browser.window(1).unwrap();
        assert_eq!(source.tabs.iter().filter(|t| t.active).count(), 1);
        assert!(source.tabs[0].active);
    }

    #[test]
    fn test_move_last_tab_closes_source_window() {
        let mut browser = two_windows();
        browser
            .move_tabs(
                &[20],
                MoveProperties {
                    window_id: 1,
                    index: 0,
                },
            )
            .unwrap();
        assert!(browser.window(2).is_none());
        assert_eq!(browser.window(1).unwrap().tabs[0].id, 20);
    }

    #[test]
    fn test_move_tabs_validates_arguments() {
        let mut browser = two_windows();
        let bad_window = browser.move_tabs(
            &[10],
            MoveProperties {
                window_id: 99,
                index: APPEND_INDEX,
            },
        );
        assert_eq!(bad_window, Err(HostError::WindowNotFound { id: 99 }));

        let bad_tab = browser.move_tabs(
            &[10, 77],
            MoveProperties {
                window_id: 2,
                index: APPEND_INDEX,
            },
        );
        assert_eq!(bad_tab, Err(HostError::TabNotFound { id: 77 }));
        // Nothing moved on validation failure.
        assert_eq!(browser.window(1).unwrap().tabs.len(), 3);
    }

    #[test]
    fn test_update_tab_activates_single_tab() {
        let mut browser = two_windows();
        let tab = browser
            .update_tab(
                11,
                TabUpdate {
                    active: Some(true),
                },
            )
            .unwrap();
        assert!(tab.active);
        assert!(!browser.tab(10).unwrap().active);
    }

    #[test]
    fn test_get_all_windows_filters_type_and_populate() {
        let mut browser = two_windows();
        browser.open_window(Window::new(3).of_type(WindowType::Popup)).unwrap();

        let windows = browser
            .get_all_windows(&WindowQuery {
                populate: false,
                window_types: vec![WindowType::Normal],
            })
            .unwrap();
        assert_eq!(windows.len(), 2);
        assert!(windows.iter().all(|w| w.tabs.is_empty()));
    }

    #[test]
    fn test_new_rejects_duplicate_window_ids() {
        let result = MemoryBrowser::new(vec![
            Window::new(1).with_tab(Tab::new(10, 1).active()),
            Window::new(1).with_tab(Tab::new(11, 1).active()),
        ]);
        assert_eq!(result.unwrap_err(), HostError::DuplicateWindowId { id: 1 });
    }

    #[test]
    fn test_new_rejects_duplicate_tab_ids() {
        let within = MemoryBrowser::new(vec![
            Window::new(1)
                .with_tab(Tab::new(10, 1).active())
                .with_tab(Tab::new(10, 1)),
        ]);
        assert_eq!(within.unwrap_err(), HostError::DuplicateTabId { id: 10 });

        let across = MemoryBrowser::new(vec![
            Window::new(1).with_tab(Tab::new(10, 1).active()),
            Window::new(2).with_tab(Tab::new(10, 2).active()),
        ]);
        assert_eq!(across.unwrap_err(), HostError::DuplicateTabId { id: 10 });
    }

    #[test]
    fn test_open_window_rejects_ids_in_use() {
        let mut browser = two_windows();

        let same_window = browser.open_window(Window::new(2).with_tab(Tab::new(30, 2).active()));
        assert_eq!(same_window, Err(HostError::DuplicateWindowId { id: 2 }));

        let same_tab = browser.open_window(Window::new(3).with_tab(Tab::new(20, 3).active()));
        assert_eq!(same_tab, Err(HostError::DuplicateTabId { id: 20 }));

        let ids: Vec<WindowId> = browser.windows().iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(browser.tab(20).unwrap().window_id, Some(2));
    }

    #[test]
    fn test_fail_after_lets_earlier_calls_through() {
        let mut browser = two_windows();
        browser.fail_after(HostApi::RefreshMenus, 2, "menu closed");

        assert!(browser.refresh_menus().is_ok());
        assert!(browser.refresh_menus().is_ok());
        assert_eq!(
            browser.refresh_menus(),
            Err(HostError::CallFailed {
                api: "menus.refresh",
                message: "menu closed".to_string(),
            })
        );
        assert!(browser.refresh_menus().is_err());
        assert_eq!(browser.refresh_count(), 4);

        browser.clear_failure(HostApi::RefreshMenus);
        assert!(browser.refresh_menus().is_ok());
    }

    #[test]
    fn test_update_window_focuses_exclusively() {
        let mut browser = two_windows();
        browser
            .update_window(
                1,
                WindowUpdate {
                    focused: Some(true),
                },
            )
            .unwrap();
        browser
            .update_window(
                2,
                WindowUpdate {
                    focused: Some(true),
                },
            )
            .unwrap();
        assert_eq!(browser.focused_window(), Some(2));
    }

    #[test]
    fn test_injected_failure_is_recorded_and_returned() {
        let mut browser = two_windows();
        browser.fail(HostApi::RefreshMenus, "menu closed");
        let result = browser.refresh_menus();
        assert_eq!(
            result,
            Err(HostError::CallFailed {
                api: "menus.refresh",
                message: "menu closed".to_string()
            })
        );
        assert_eq!(browser.refresh_count(), 1);

        browser.clear_failure(HostApi::RefreshMenus);
        assert!(browser.refresh_menus().is_ok());
    }
}
