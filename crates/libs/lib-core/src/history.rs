//! # History Panel
//!
//! Windowed display of the server-side message log for the active version.

use shared::{escape_html, excerpt, HistoryItem};

/// One rendered history line; text fields are escaped markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryRow {
    /// Role as sent by the server, used as a CSS modifier
    pub role: String,
    /// "You" or "Bot"
    pub badge: &'static str,
    pub text_html: String,
    pub ts_html: String,
}

/// What the history panel currently shows
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HistoryPanel {
    Loading,
    Refreshing,
    Empty,
    Rows(Vec<HistoryRow>),
    Cleared,
    Failed,
}

impl HistoryPanel {
    /// Placeholder shown while a fetch is in flight.
    pub fn pending(from_button: bool) -> Self {
        if from_button {
            HistoryPanel::Refreshing
        } else {
            HistoryPanel::Loading
        }
    }

    /// Build the panel from the server's items, keeping the last `window` of them.
    pub fn from_items(items: &[HistoryItem], window: usize, excerpt_chars: usize) -> Self {
        if items.is_empty() {
            return HistoryPanel::Empty;
        }

        let start = items.len().saturating_sub(window);
        let rows = items[start..]
            .iter()
            .map(|item| HistoryRow::render(item, excerpt_chars))
            .collect();
        HistoryPanel::Rows(rows)
    }
}

impl HistoryRow {
    fn render(item: &HistoryItem, excerpt_chars: usize) -> Self {
        let badge = if item.role == "user" { "You" } else { "Bot" };
        let text_html = escape_html(excerpt(&item.content, excerpt_chars)).replace('\n', " ");

        Self {
            role: item.role.clone(),
            badge,
            text_html,
            ts_html: escape_html(&item.ts),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(role: &str, content: &str) -> HistoryItem {
        HistoryItem {
            role: role.to_string(),
            content: content.to_string(),
            ts: "2026-10-16T09:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_empty_items() {
        assert_eq!(HistoryPanel::from_items(&[], 60, 160), HistoryPanel::Empty);
    }

    #[test]
    fn test_window_keeps_most_recent() {
        let items: Vec<HistoryItem> = (0..75).map(|i| item("user", &format!("msg {i}"))).collect();

        let HistoryPanel::Rows(rows) = HistoryPanel::from_items(&items, 60, 160) else {
            panic!("expected rows");
        };

        assert_eq!(rows.len(), 60);
        assert_eq!(rows[0].text_html, "msg 15");
        assert_eq!(rows[59].text_html, "msg 74");
    }

    #[test]
    fn test_row_truncates_then_escapes() {
        let long = format!("{}<b>", "x".repeat(158));
        let HistoryPanel::Rows(rows) = HistoryPanel::from_items(&[item("assistant", &long)], 60, 160) else {
            panic!("expected rows");
        };

        assert_eq!(rows[0].badge, "Bot");
        assert_eq!(rows[0].text_html, format!("{}&lt;b", "x".repeat(158)));
    }

    #[test]
    fn test_row_flattens_newlines_and_escapes_ts() {
        let mut entry = item("user", "a\nb");
        entry.ts = "<now>".to_string();
        let HistoryPanel::Rows(rows) = HistoryPanel::from_items(&[entry], 60, 160) else {
            panic!("expected rows");
        };

        assert_eq!(rows[0].badge, "You");
        assert_eq!(rows[0].text_html, "a b");
        assert_eq!(rows[0].ts_html, "&lt;now&gt;");
    }

    #[test]
    fn test_pending_placeholder() {
        assert_eq!(HistoryPanel::pending(true), HistoryPanel::Refreshing);
        assert_eq!(HistoryPanel::pending(false), HistoryPanel::Loading);
    }
}
