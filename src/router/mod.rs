//! URL state for the changelog modal
//!
//! The open/closed state of the modal is mirrored into the query string so
//! it can be deep linked. History is injected through [`History`] so that
//! components never touch global navigation state.

mod query;

pub use query::{QueryParams, parse_query};

/// Query key carrying the open modal
pub const MODAL_PARAM: &str = "modal";

/// Value of [`MODAL_PARAM`] for the changelog modal
pub const CHANGELOG_MODAL: &str = "changelog";

/// Navigation context supplied by the caller and forwarded on every replace
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferrerState {
    /// The package page was reached from the starred packages page
    pub from_starred_page: Option<bool>,
    /// Search URL the user came from
    pub search_url_referer: Option<String>,
}

/// A history location: query string plus navigation state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    /// Query string including the leading `?`, or empty
    pub search: String,
    pub state: ReferrerState,
}

impl Location {
    /// Location with the changelog modal open
    pub fn changelog_open(state: ReferrerState) -> Self {
        let mut params = QueryParams::default();
        params.set(MODAL_PARAM, CHANGELOG_MODAL);
        Self {
            search: params.to_search(),
            state,
        }
    }

    /// Location with no modal open
    pub fn cleared(state: ReferrerState) -> Self {
        Self {
            search: String::new(),
            state,
        }
    }

    /// Whether this location asks for the changelog modal
    pub fn wants_changelog(&self) -> bool {
        parse_query(&self.search).get(MODAL_PARAM) == Some(CHANGELOG_MODAL)
    }
}

/// Navigation history that components may rewrite in place
pub trait History {
    /// Replace the current location without adding an entry
    fn replace(&mut self, location: Location);
}

/// In-memory history recording every replacement
#[derive(Debug, Clone, Default)]
pub struct MemoryHistory {
    current: Location,
    replacements: Vec<Location>,
}

impl MemoryHistory {
    /// Start at `location`
    pub fn new(location: Location) -> Self {
        Self {
            current: location,
            replacements: Vec::new(),
        }
    }

    /// Current location
    pub fn location(&self) -> &Location {
        &self.current
    }

    /// Every location passed to [`History::replace`], oldest first
    pub fn replacements(&self) -> &[Location] {
        &self.replacements
    }
}

impl History for MemoryHistory {
    fn replace(&mut self, location: Location) {
        tracing::debug!(search = %location.search, "history replaced");
        self.current = location.clone();
        self.replacements.push(location);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn referrer() -> ReferrerState {
        ReferrerState {
            from_starred_page: Some(true),
            search_url_referer: Some("/packages/search?ts_query_web=nginx".to_string()),
        }
    }

    #[test]
    fn test_changelog_open_location() {
        let location = Location::changelog_open(referrer());
        assert_snapshot!(location.search, @"?modal=changelog");
        assert_eq!(location.state, referrer());
        assert!(location.wants_changelog());
    }

    #[test]
    fn test_cleared_location_keeps_state() {
        let location = Location::cleared(referrer());
        assert_eq!(location.search, "");
        assert_eq!(location.state, referrer());
        assert!(!location.wants_changelog());
    }

    #[test]
    fn test_memory_history_records_replacements() {
        let mut history = MemoryHistory::default();
        history.replace(Location::changelog_open(ReferrerState::default()));
        history.replace(Location::cleared(ReferrerState::default()));

        assert_eq!(history.replacements().len(), 2);
        assert_eq!(history.location().search, "");
        assert_eq!(history.replacements()[0].search, "?modal=changelog");
    }
}
