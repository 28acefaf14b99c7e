use tabmove_core::host::{MenuItem, Window};

/// Truncate a string to `max_len` characters, ending with "..." when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
    format!("{}...", kept)
}

pub struct WindowFormatter {
    id_width: usize,
    title_width: usize,
}

impl WindowFormatter {
    pub fn new(windows: &[Window]) -> Self {
        let title_width = windows
            .iter()
            .flat_map(|w| w.tabs.iter())
            .filter_map(|t| t.title.as_ref())
            .map(|t| t.chars().count())
            .max()
            .unwrap_or(16)
            .clamp(10, 50);
        let id_width = windows
            .iter()
            .flat_map(|w| w.tabs.iter())
            .map(|t| t.id.to_string().len())
            .max()
            .unwrap_or(2)
            .max(3);

        Self {
            id_width,
            title_width,
        }
    }

    pub fn print_windows(&self, windows: &[Window]) {
        for window in windows {
            println!("{}", self.window_header(window));
            for tab in &window.tabs {
                let title = tab.title.as_deref().unwrap_or("(untitled)");
                let mut flags = Vec::new();
                if tab.active {
                    flags.push("active");
                }
                if tab.highlighted && !tab.active {
                    flags.push("highlighted");
                }
                println!(
                    "  {:>3}  {:<id_w$}  {:<title_w$}  {}",
                    tab.index,
                    tab.id,
                    truncate(title, self.title_width),
                    flags.join(","),
                    id_w = self.id_width,
                    title_w = self.title_width,
                );
            }
        }
    }

    fn window_header(&self, window: &Window) -> String {
        let focus = if window.focused { ", focused" } else { "" };
        format!(
            "Window {} ({}{}) - {} tab(s)",
            window.id,
            window.window_type,
            focus,
            window.tabs.len()
        )
    }
}

/// Print the menu tree rooted at `root_id`.
pub fn print_menu(menus: &[MenuItem], root_id: &str) {
    let Some(root) = menus.iter().find(|m| m.id == root_id) else {
        println!("(no menu installed)");
        return;
    };
    let state = if root.enabled == Some(false) {
        "disabled"
    } else {
        "enabled"
    };
    println!("{} [{}]", root.title, state);
    for child in menus
        .iter()
        .filter(|m| m.parent_id.as_deref() == Some(root_id))
    {
        println!("  - {}  ({})", child.title, child.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate("Inbox", 10), "Inbox");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate("A very long tab title", 10), "A very ...");
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        assert_eq!(truncate("Möve tab to…", 12), "Möve tab to…");
    }
}
