//! # Guided-Mode Suggestions
//!
//! Per-version cache of document section headings and the keystroke filter
//! over it.

use shared::Section;

/// Section headings loaded for one version.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionIndex {
    version: Option<String>,
    sections: Vec<Section>,
}

impl SectionIndex {
    /// Whether headings for `version` are already cached.
    pub fn is_loaded_for(&self, version: &str) -> bool {
        self.version.as_deref() == Some(version)
    }

    /// Replace the cache with the headings of `version`.
    pub fn load(&mut self, version: &str, sections: Vec<Section>) {
        self.version = Some(version.to_string());
        self.sections = sections;
    }

    /// Case-insensitive substring match on headings, at most `limit` results.
    ///
    /// A blank query lists every heading (still capped).
    pub fn filter(&self, query: &str, limit: usize) -> Vec<&Section> {
        let needle = query.trim().to_lowercase();
        self.sections
            .iter()
            .filter(|s| needle.is_empty() || s.heading.to_lowercase().contains(&needle))
            .take(limit)
            .collect()
    }
}

/// Input text placed in the draft when a suggestion is picked.
pub fn summarize_request(heading: &str) -> String {
    format!("Summarize the \"{}\" section.", heading)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(headings: &[&str]) -> SectionIndex {
        let mut idx = SectionIndex::default();
        idx.load(
            "RelativityOne",
            headings.iter().map(|h| Section { heading: h.to_string() }).collect(),
        );
        idx
    }

    #[test]
    fn test_filter_case_insensitive() {
        let idx = index(&["Security updates", "Processing", "Cybersecurity", "SECURE login"]);

        let found: Vec<&str> = idx.filter("secur", 60).iter().map(|s| s.heading.as_str()).collect();

        assert_eq!(found, vec!["Security updates", "Cybersecurity", "SECURE login"]);
    }

    #[test]
    fn test_filter_caps_results() {
        let headings: Vec<String> = (0..100).map(|i| format!("Security note {i}")).collect();
        let refs: Vec<&str> = headings.iter().map(String::as_str).collect();
        let idx = index(&refs);

        assert_eq!(idx.filter("secur", 60).len(), 60);
        assert_eq!(idx.filter("", 60).len(), 60);
    }

    #[test]
    fn test_blank_query_lists_all() {
        let idx = index(&["A", "B"]);
        assert_eq!(idx.filter("   ", 60).len(), 2);
    }

    #[test]
    fn test_cache_is_per_version() {
        let idx = index(&["A"]);
        assert!(idx.is_loaded_for("RelativityOne"));
        assert!(!idx.is_loaded_for("Server2024"));
        assert!(!SectionIndex::default().is_loaded_for("RelativityOne"));
    }

    #[test]
    fn test_summarize_request() {
        assert_eq!(summarize_request("Audit"), "Summarize the \"Audit\" section.");
    }
}
