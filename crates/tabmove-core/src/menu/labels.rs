//! Menu titles and entry identifiers.

use crate::config::{COUNT_PLACEHOLDER, LabelConfig};
use crate::host::types::{Tab, WindowId};

/// Label for a window entry: `"<count> tab(s) — <active tab title>"`.
///
/// Falls back to `labels.untitled_tab` when no tab is active or the active
/// tab's title is missing or empty. "tab" is used only for exactly one tab.
pub fn window_label(tabs: &[Tab], labels: &LabelConfig) -> String {
    let active_title = tabs
        .iter()
        .find(|tab| tab.active)
        .and_then(|tab| tab.title.as_deref())
        .filter(|title| !title.is_empty())
        .unwrap_or(&labels.untitled_tab);
    let count = tabs.len();
    let tab_word = if count == 1 { "tab" } else { "tabs" };

    format!("{} {} — {}", count, tab_word, active_title)
}

/// Root title for an enabled menu moving `count` tabs.
pub fn root_title(count: usize, labels: &LabelConfig) -> String {
    if count > 1 {
        labels
            .move_many
            .replace(COUNT_PLACEHOLDER, &count.to_string())
    } else {
        labels.move_single.clone()
    }
}

/// Root title when the source window is the only candidate.
pub fn no_other_windows_title(labels: &LabelConfig) -> String {
    format!("{}{}", labels.move_single, labels.no_other_windows_suffix)
}

/// Identifier of the dynamic entry targeting `window_id`.
pub fn window_entry_id(prefix: &str, window_id: WindowId) -> String {
    format!("{}{}", prefix, window_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> LabelConfig {
        LabelConfig::default()
    }

    #[test]
    fn test_window_label_single_tab() {
        let tabs = vec![Tab::new(1, 1).with_title("X").active()];
        assert_eq!(window_label(&tabs, &labels()), "1 tab — X");
    }

    #[test]
    fn test_window_label_uses_active_tab_title() {
        let tabs = vec![
            Tab::new(1, 1).with_title("first"),
            Tab::new(2, 1).with_title("Y").active(),
            Tab::new(3, 1).with_title("third"),
        ];
        assert_eq!(window_label(&tabs, &labels()), "3 tabs — Y");
    }

    #[test]
    fn test_window_label_empty_list() {
        assert_eq!(window_label(&[], &labels()), "0 tabs — (untitled tab)");
    }

    #[test]
    fn test_window_label_untitled_active_tab() {
        let missing = vec![Tab::new(1, 1).active()];
        assert_eq!(window_label(&missing, &labels()), "1 tab — (untitled tab)");

        let empty = vec![Tab::new(1, 1).with_title("").active(), Tab::new(2, 1)];
        assert_eq!(window_label(&empty, &labels()), "2 tabs — (untitled tab)");
    }

    #[test]
    fn test_window_label_without_active_tab() {
        let tabs = vec![Tab::new(1, 1).with_title("A"), Tab::new(2, 1).with_title("B")];
        assert_eq!(window_label(&tabs, &labels()), "2 tabs — (untitled tab)");
    }

    #[test]
    fn test_root_title_singular_and_plural() {
        assert_eq!(root_title(1, &labels()), "Move tab to…");
        assert_eq!(root_title(3, &labels()), "Move 3 tabs to…");
        assert_eq!(root_title(0, &labels()), "Move tab to…");
    }

    #[test]
    fn test_no_other_windows_title() {
        assert_eq!(
            no_other_windows_title(&labels()),
            "Move tab to… (no other windows)"
        );
    }

    #[test]
    fn test_window_entry_id() {
        assert_eq!(window_entry_id("move-tab-window-", 42), "move-tab-window-42");
    }
}
