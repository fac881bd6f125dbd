//! UI tests using ratatui's TestBackend
//!
//! These tests render components into an in-memory terminal and inspect
//! the resulting cells and hit regions.

mod common;

#[path = "ui/test_modal.rs"]
mod test_modal;

#[path = "ui/test_changelog.rs"]
mod test_changelog;
