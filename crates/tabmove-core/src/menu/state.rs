//! Transient state of one context-menu invocation.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::host::types::{TabId, WindowId};

/// Where the controller is in the show → click/hide cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MenuPhase {
    /// No window entries on screen; the root is disabled.
    #[default]
    Idle,
    Building,
    /// Submenu populated with at least one window entry.
    Ready,
}

/// Selection captured when the menu was shown.
///
/// Cleared on hide so a later, unrelated click never acts on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveSelection {
    window_entries: BTreeMap<String, WindowId>,
    source_tab_ids: Vec<TabId>,
    source_window_id: Option<WindowId>,
}

impl ActiveSelection {
    pub fn record_source(&mut self, tab_ids: Vec<TabId>, window_id: Option<WindowId>) {
        self.source_tab_ids = tab_ids;
        self.source_window_id = window_id;
    }

    pub fn register_entry(&mut self, entry_id: String, window_id: WindowId) {
        self.window_entries.insert(entry_id, window_id);
    }

    pub fn target_for(&self, entry_id: &str) -> Option<WindowId> {
        self.window_entries.get(entry_id).copied()
    }

    /// Hand over all tracked entry ids, leaving the mapping empty.
    pub fn take_entries(&mut self) -> Vec<String> {
        std::mem::take(&mut self.window_entries).into_keys().collect()
    }

    pub fn entry_count(&self) -> usize {
        self.window_entries.len()
    }

    pub fn source_tab_ids(&self) -> &[TabId] {
        &self.source_tab_ids
    }

    pub fn source_window_id(&self) -> Option<WindowId> {
        self.source_window_id
    }

    pub fn has_selection(&self) -> bool {
        !self.source_tab_ids.is_empty()
    }

    pub fn clear_selection(&mut self) {
        self.source_tab_ids.clear();
        self.source_window_id = None;
    }

    pub fn is_empty(&self) -> bool {
        self.window_entries.is_empty() && !self.has_selection() && self.source_window_id.is_none()
    }
}
