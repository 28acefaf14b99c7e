//! Which tabs a context-menu invocation acts on.

use tracing::debug;

use crate::host::errors::HostError;
use crate::host::traits::TabsApi;
use crate::host::types::{Tab, TabQuery};

/// Resolve the tabs a menu opened on `context_tab` should move.
///
/// - No context tab, or one without a window: nothing to move.
/// - No highlighted tabs in the window, or the context tab is not one of
///   them (right-click on an unselected tab): just the context tab.
/// - Otherwise the whole highlighted set, in host order.
pub fn selected_tabs_for_context<H: TabsApi + ?Sized>(
    host: &mut H,
    context_tab: Option<&Tab>,
) -> Result<Vec<Tab>, HostError> {
    let Some(context_tab) = context_tab else {
        return Ok(Vec::new());
    };
    let Some(window_id) = context_tab.window_id else {
        debug!(
            event = "core.selection.resolve_skipped",
            tab_id = context_tab.id,
            reason = "no_window"
        );
        return Ok(Vec::new());
    };

    let highlighted = host.query_tabs(&TabQuery {
        window_id: Some(window_id),
        highlighted: Some(true),
    })?;

    if highlighted.is_empty() || !highlighted.iter().any(|tab| tab.id == context_tab.id) {
        return Ok(vec![context_tab.clone()]);
    }

    Ok(highlighted)
}
