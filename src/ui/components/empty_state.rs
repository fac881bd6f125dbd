//! Empty state components
//!
//! Display messages when there's no content to show.

use ratatui::{style::Stylize, text::Line};

/// Lines for a centered empty state display
pub fn empty_state(title: &str) -> Vec<Line<'static>> {
    vec![Line::from(""), Line::from(title.to_string()).dark_gray().centered()]
}

/// Empty state for a package that published no changelog entries
pub fn no_entries_state() -> Vec<Line<'static>> {
    empty_state("No changelog entries available")
}
