//! Changelog entry model

use serde::Deserialize;

/// One released version and its notes, as returned by the changelog API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChangelogEntry {
    /// Version string (e.g. "0.8.0")
    pub version: String,
    /// Release time (unix seconds)
    #[serde(default)]
    pub ts: i64,
    /// Whether the release fixes security issues
    #[serde(default)]
    pub contains_security_updates: bool,
    /// Whether the release is a pre-release
    #[serde(default)]
    pub prerelease: bool,
    /// Change lines (absent when the release carries no notes)
    #[serde(default)]
    pub changes: Option<Vec<String>>,
}

impl ChangelogEntry {
    /// Create an entry with no flags and no change lines
    pub fn new(version: impl Into<String>, ts: i64) -> Self {
        Self {
            version: version.into(),
            ts,
            contains_security_updates: false,
            prerelease: false,
            changes: None,
        }
    }

    /// Builder: set change lines
    pub fn with_changes<I, S>(mut self, changes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.changes = Some(changes.into_iter().map(Into::into).collect());
        self
    }

    /// Builder: flag as containing security updates
    pub fn with_security_updates(mut self) -> Self {
        self.contains_security_updates = true;
        self
    }

    /// Builder: flag as pre-release
    pub fn with_prerelease(mut self) -> Self {
        self.prerelease = true;
        self
    }

    /// Change lines, empty when none were published
    pub fn change_lines(&self) -> &[String] {
        self.changes.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_entry() {
        let json = r#"{
            "version": "0.8.0",
            "ts": 1604048487,
            "changes": ["Add support for arm64", "Bump dependency"],
            "contains_security_updates": true,
            "prerelease": false
        }"#;
        let entry: ChangelogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.version, "0.8.0");
        assert_eq!(entry.ts, 1604048487);
        assert!(entry.contains_security_updates);
        assert!(!entry.prerelease);
        assert_eq!(entry.change_lines().len(), 2);
    }

    #[test]
    fn test_deserialize_null_changes() {
        let json = r#"{"version": "0.4.0", "ts": 1, "changes": null}"#;
        let entry: ChangelogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.changes, None);
        assert!(entry.change_lines().is_empty());
    }

    #[test]
    fn test_deserialize_missing_flags_default_false() {
        let json = r#"{"version": "1.0.0"}"#;
        let entry: ChangelogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry, ChangelogEntry::new("1.0.0", 0));
    }

    #[test]
    fn test_builders() {
        let entry = ChangelogEntry::new("2.0.0-rc.1", 10)
            .with_changes(["Breaking: drop v1 API"])
            .with_prerelease()
            .with_security_updates();
        assert!(entry.prerelease);
        assert!(entry.contains_security_updates);
        assert_eq!(entry.change_lines(), ["Breaking: drop v1 API".to_string()]);
    }
}
