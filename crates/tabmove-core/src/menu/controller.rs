//! The "Move tab to…" menu controller.
//!
//! Owns the host, the configuration and the selection captured when the
//! menu was shown. Each handler runs to completion before the next event is
//! dispatched, and none of them report failure back to the host: errors are
//! logged and the menu is forced back to its disabled default.

use tracing::{debug, error, info, warn};

use crate::config::TabMoveConfig;
use crate::host::errors::HostError;
use crate::host::traits::BrowserHost;
use crate::host::types::{
    APPEND_INDEX, ClickInfo, MenuContext, MenuItem, MenuUpdate, MoveProperties, ShownInfo, Tab,
    TabId, TabUpdate, WindowId, WindowQuery, WindowUpdate,
};
use crate::menu::dispatch::{DisabledReason, Dispatch, HostEvent, IgnoreReason, Outcome};
use crate::menu::errors::{MenuError, MoveStage};
use crate::menu::labels::{no_other_windows_title, root_title, window_entry_id, window_label};
use crate::menu::selection::selected_tabs_for_context;
use crate::menu::state::{ActiveSelection, MenuPhase};

/// What a successful rebuild left on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rebuilt {
    /// Nothing to move; root disabled with its default title.
    NoSelection,
    /// Source window is the only candidate; root disabled.
    NoOtherWindows { tab_count: usize },
    /// Root enabled with one entry per target window.
    Targets {
        tab_count: usize,
        targets: Vec<WindowId>,
    },
}

pub struct MenuController<H: BrowserHost> {
    host: H,
    config: TabMoveConfig,
    selection: ActiveSelection,
    phase: MenuPhase,
}

impl<H: BrowserHost> MenuController<H> {
    /// Create a controller without touching the host.
    pub fn new(host: H, config: TabMoveConfig) -> Self {
        Self {
            host,
            config,
            selection: ActiveSelection::default(),
            phase: MenuPhase::Idle,
        }
    }

    /// Create a controller and install the root entry right away.
    pub fn start(host: H, config: TabMoveConfig) -> Self {
        let mut controller = Self::new(host, config);
        if let Err(e) = controller.ensure_root_menu() {
            error!(event = "core.menu.root_install_failed", error = %e);
        }
        controller
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn config(&self) -> &TabMoveConfig {
        &self.config
    }

    pub fn selection(&self) -> &ActiveSelection {
        &self.selection
    }

    pub fn phase(&self) -> MenuPhase {
        self.phase
    }

    /// (Re)install the disabled root entry.
    ///
    /// A missing previous entry is expected. Any other removal failure is
    /// logged and installation continues; a creation failure is returned.
    pub fn ensure_root_menu(&mut self) -> Result<(), MenuError> {
        let root_id = &self.config.menu.root_id;

        if let Err(e) = self.host.remove_menu(root_id) {
            warn!(
                event = "core.menu.root_remove_failed",
                root_id = %root_id,
                error = %e
            );
        }

        let root = MenuItem {
            id: root_id.clone(),
            parent_id: None,
            title: self.config.labels.move_single.clone(),
            contexts: vec![MenuContext::Tab],
            enabled: Some(false),
        };
        self.host
            .create_menu(&root)
            .map_err(|source| MenuError::RootInstall { source })?;

        info!(event = "core.menu.root_install_completed", root_id = %root.id);
        Ok(())
    }

    /// Remove every tracked window entry and forget the mapping.
    ///
    /// Entries the host already dropped are skipped silently.
    pub fn clear_dynamic_window_items(&mut self) {
        let entries = self.selection.take_entries();
        if entries.is_empty() {
            return;
        }

        let count = entries.len();
        for entry_id in entries {
            if let Err(e) = self.host.remove_menu(&entry_id) {
                warn!(
                    event = "core.menu.entry_remove_failed",
                    entry_id = %entry_id,
                    error = %e
                );
            }
        }
        debug!(event = "core.menu.entries_cleared", count = count);
    }

    /// Rebuild the submenu for a menu opened on `context_tab`.
    ///
    /// Records the selection and creates one entry per other window. Host
    /// failures are returned untouched; the caller resets the menu.
    pub fn rebuild_window_submenu(
        &mut self,
        context_tab: Option<&Tab>,
    ) -> Result<Rebuilt, MenuError> {
        self.clear_dynamic_window_items();

        let source_tabs = selected_tabs_for_context(&mut self.host, context_tab)?;
        if source_tabs.is_empty() {
            let title = self.config.labels.move_single.clone();
            self.update_root(title, false)?;
            return Ok(Rebuilt::NoSelection);
        }

        let tab_ids: Vec<TabId> = source_tabs.iter().map(|tab| tab.id).collect();
        let source_window_id = source_tabs[0]
            .window_id
            .or_else(|| context_tab.and_then(|tab| tab.window_id));
        let tab_count = tab_ids.len();
        self.selection.record_source(tab_ids, source_window_id);

        let windows = self.host.get_all_windows(&WindowQuery {
            populate: true,
            window_types: self.config.menu.window_types.clone(),
        })?;
        let targets: Vec<_> = windows
            .into_iter()
            .filter(|window| Some(window.id) != source_window_id)
            .collect();

        if targets.is_empty() {
            let title = no_other_windows_title(&self.config.labels);
            self.update_root(title, false)?;
            return Ok(Rebuilt::NoOtherWindows { tab_count });
        }

        let title = root_title(tab_count, &self.config.labels);
        self.update_root(title, true)?;

        let mut target_ids = Vec::with_capacity(targets.len());
        for window in &targets {
            let entry_id = window_entry_id(&self.config.menu.window_prefix, window.id);
            self.selection.register_entry(entry_id.clone(), window.id);
            self.host.create_menu(&MenuItem {
                id: entry_id,
                parent_id: Some(self.config.menu.root_id.clone()),
                title: window_label(&window.tabs, &self.config.labels),
                contexts: vec![MenuContext::Tab],
                enabled: None,
            })?;
            target_ids.push(window.id);
        }

        Ok(Rebuilt::Targets {
            tab_count,
            targets: target_ids,
        })
    }

    /// Menu opened: rebuild and render, or fall back to the disabled root.
    pub fn on_shown(&mut self, info: &ShownInfo, tab: Option<&Tab>) -> Outcome {
        if !info.includes(MenuContext::Tab) {
            debug!(event = "core.menu.show_skipped", reason = "not_tab_context");
            return Outcome::Ignored {
                reason: IgnoreReason::NotTabContext,
            };
        }

        self.phase = MenuPhase::Building;
        info!(
            event = "core.menu.rebuild_started",
            tab_id = tab.map(|t| t.id)
        );

        match self.rebuild_window_submenu(tab) {
            Ok(rebuilt) => {
                self.refresh();
                self.phase = match rebuilt {
                    Rebuilt::Targets { .. } => MenuPhase::Ready,
                    Rebuilt::NoSelection | Rebuilt::NoOtherWindows { .. } => MenuPhase::Idle,
                };
                info!(event = "core.menu.rebuild_completed", result = ?rebuilt);
                match rebuilt {
                    Rebuilt::NoSelection => Outcome::SubmenuDisabled {
                        reason: DisabledReason::NoSelection,
                        tab_count: 0,
                    },
                    Rebuilt::NoOtherWindows { tab_count } => Outcome::SubmenuDisabled {
                        reason: DisabledReason::NoOtherWindows,
                        tab_count,
                    },
                    Rebuilt::Targets { tab_count, targets } => {
                        Outcome::SubmenuBuilt { tab_count, targets }
                    }
                }
            }
            Err(e) => {
                error!(event = "core.menu.rebuild_failed", error = %e);
                self.clear_dynamic_window_items();
                self.selection.clear_selection();
                self.reset_root();
                self.refresh();
                self.phase = MenuPhase::Idle;
                Outcome::SubmenuFailed {
                    error: e.to_string(),
                }
            }
        }
    }

    /// Menu closed: drop all entries and the captured selection.
    pub fn on_hidden(&mut self) -> Outcome {
        self.clear_dynamic_window_items();
        self.selection.clear_selection();
        self.reset_root();
        self.phase = MenuPhase::Idle;

        debug!(event = "core.menu.reset_completed");
        Outcome::MenuReset
    }

    /// Entry clicked: move the captured selection to the entry's window.
    pub fn on_clicked(&mut self, info: &ClickInfo) -> Outcome {
        let prefix = &self.config.menu.window_prefix;
        let Some(entry_id) = info
            .menu_item_id
            .as_str()
            .filter(|id| id.starts_with(prefix.as_str()))
        else {
            debug!(
                event = "core.menu.click_skipped",
                menu_item_id = %info.menu_item_id,
                reason = "not_window_entry"
            );
            return Outcome::Ignored {
                reason: IgnoreReason::NotWindowEntry,
            };
        };

        let Some(target_window_id) = self.selection.target_for(entry_id) else {
            debug!(
                event = "core.menu.click_skipped",
                entry_id = entry_id,
                reason = "unknown_entry"
            );
            return Outcome::Ignored {
                reason: IgnoreReason::UnknownEntry,
            };
        };
        if !self.selection.has_selection() {
            debug!(
                event = "core.menu.click_skipped",
                entry_id = entry_id,
                reason = "no_selection"
            );
            return Outcome::Ignored {
                reason: IgnoreReason::NoSelection,
            };
        }

        let tab_ids = self.selection.source_tab_ids().to_vec();
        match self.move_tabs_to_window(&tab_ids, target_window_id) {
            Ok(()) => Outcome::TabsMoved {
                tab_ids,
                window_id: target_window_id,
            },
            Err(e) => {
                error!(
                    event = "core.menu.move_failed",
                    window_id = target_window_id,
                    error = %e
                );
                let stage = match &e {
                    MenuError::Move { stage, .. } => *stage,
                    _ => MoveStage::Move,
                };
                Outcome::MoveFailed {
                    stage,
                    error: e.to_string(),
                }
            }
        }
    }

    /// Append `tab_ids` to `window_id`, activate the last one, focus the window.
    ///
    /// Steps run in order and stop at the first failure; completed steps
    /// are not undone.
    pub fn move_tabs_to_window(
        &mut self,
        tab_ids: &[TabId],
        window_id: WindowId,
    ) -> Result<(), MenuError> {
        let Some(&last_tab_id) = tab_ids.last() else {
            return Ok(());
        };
        info!(
            event = "core.menu.move_started",
            tab_ids = ?tab_ids,
            window_id = window_id
        );

        self.host
            .move_tabs(
                tab_ids,
                MoveProperties {
                    window_id,
                    index: APPEND_INDEX,
                },
            )
            .map_err(|source| MenuError::Move {
                stage: MoveStage::Move,
                source,
            })?;

        self.host
            .update_tab(
                last_tab_id,
                TabUpdate {
                    active: Some(true),
                },
            )
            .map_err(|source| MenuError::Move {
                stage: MoveStage::Activate,
                source,
            })?;

        self.host
            .update_window(
                window_id,
                WindowUpdate {
                    focused: Some(true),
                },
            )
            .map_err(|source| MenuError::Move {
                stage: MoveStage::Focus,
                source,
            })?;

        info!(
            event = "core.menu.move_completed",
            tab_count = tab_ids.len(),
            window_id = window_id
        );
        Ok(())
    }

    fn update_root(&mut self, title: String, enabled: bool) -> Result<(), HostError> {
        self.host
            .update_menu(&self.config.menu.root_id, &MenuUpdate::new(title, enabled))
    }

    /// Put the root back to its disabled default title.
    fn reset_root(&mut self) {
        let title = self.config.labels.move_single.clone();
        if let Err(e) = self.update_root(title, false) {
            warn!(event = "core.menu.root_reset_failed", error = %e);
        }
    }

    fn refresh(&mut self) {
        if let Err(e) = self.host.refresh_menus() {
            warn!(event = "core.menu.refresh_failed", error = %e);
        }
    }
}

impl<H: BrowserHost> Dispatch for MenuController<H> {
    fn dispatch(&mut self, event: HostEvent) -> Outcome {
        debug!(event = "core.menu.dispatch_started", host_event = ?event);

        match event {
            HostEvent::Installed | HostEvent::Startup => match self.ensure_root_menu() {
                Ok(()) => Outcome::RootInstalled,
                Err(e) => {
                    error!(event = "core.menu.root_install_failed", error = %e);
                    Outcome::RootInstallFailed {
                        error: e.to_string(),
                    }
                }
            },
            HostEvent::MenuShown { info, tab } => self.on_shown(&info, tab.as_ref()),
            HostEvent::MenuHidden => self.on_hidden(),
            HostEvent::MenuClicked { info } => self.on_clicked(&info),
        }
    }
}
