//! Changelog modal
//!
//! Shows the changelog of one package in a [`Modal`]. Entries are fetched
//! when the modal is first opened and cached by package id; reopening for
//! the same package reuses them. The open/closed state is mirrored into the
//! URL through an injected [`History`].
//!
//! Fetching itself is left to the owner: opening returns a
//! [`FetchRequest`], and the answer comes back through
//! [`ChangelogModal::complete_fetch`]. Answers that no longer match the
//! outstanding request are dropped.

mod render;

pub use render::{ChangelogBlock, build_blocks};

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;

use super::modal::{Modal, ModalEvent};
use crate::api::{FetchRequest, FetchResponse};
use crate::keys;
use crate::model::{ChangelogEntry, PackageSummary};
use crate::router::{History, Location, ReferrerState};
use crate::ui::element::{ElementId, HitMap};

/// Modal header and trigger label
pub const CHANGELOG_TITLE: &str = "Changelog";

/// Error shown when the changelog could not be fetched
pub const FETCH_ERROR_MESSAGE: &str =
    "An error occurred getting the package changelog, please try again later.";

/// Lifecycle of the changelog modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangelogState {
    /// Modal hidden, nothing in flight
    Closed,
    /// Fetch in flight, modal not shown yet
    Loading,
    /// Modal shown with entries
    Open,
    /// Modal shown with an error banner
    Error,
}

/// Changelog modal state
#[derive(Debug, Clone)]
pub struct ChangelogModal {
    package: PackageSummary,
    referrer: ReferrerState,
    modal: Modal,
    entries: Vec<ChangelogEntry>,
    /// Package whose entries are cached in `entries`
    last_fetched_id: Option<String>,
    /// Outstanding fetch, if any
    pending: Option<FetchRequest>,
    next_seq: u64,
    /// Where the trigger was drawn (None when not drawn)
    trigger_area: Option<Rect>,
}

impl ChangelogModal {
    /// Create a closed changelog modal for `package`
    pub fn new(package: PackageSummary, referrer: ReferrerState) -> Self {
        Self {
            package,
            referrer,
            modal: Modal::new(CHANGELOG_TITLE),
            entries: Vec::new(),
            last_fetched_id: None,
            pending: None,
            next_seq: 0,
            trigger_area: None,
        }
    }

    pub fn package(&self) -> &PackageSummary {
        &self.package
    }

    pub fn referrer(&self) -> &ReferrerState {
        &self.referrer
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    /// Entries currently cached
    pub fn entries(&self) -> &[ChangelogEntry] {
        &self.entries
    }

    /// Package id the cached entries belong to
    pub fn last_fetched_id(&self) -> Option<&str> {
        self.last_fetched_id.as_deref()
    }

    /// Outstanding fetch, if any
    pub fn pending(&self) -> Option<&FetchRequest> {
        self.pending.as_ref()
    }

    pub fn state(&self) -> ChangelogState {
        if self.pending.is_some() {
            ChangelogState::Loading
        } else if !self.modal.is_visible() {
            ChangelogState::Closed
        } else if self.modal.error().is_some() {
            ChangelogState::Error
        } else {
            ChangelogState::Open
        }
    }

    /// Whether the whole component is suppressed for this package
    pub fn is_hidden(&self) -> bool {
        !self.package.supports_changelog()
    }

    /// Whether the trigger is shown but inert
    pub fn is_trigger_disabled(&self) -> bool {
        !self.package.has_changelog || self.pending.is_some()
    }

    /// Apply the deep-link flag; `true` opens the modal if it is closed
    pub fn set_visible_changelog(
        &mut self,
        visible: bool,
        history: &mut dyn History,
    ) -> Option<FetchRequest> {
        if visible && self.state() == ChangelogState::Closed {
            self.open(history)
        } else {
            None
        }
    }

    /// Replace the package shown
    ///
    /// A different package id invalidates the cache, drops any fetch in
    /// flight and hides the modal. Hiding a shown modal clears the URL marker.
    pub fn set_package(&mut self, package: PackageSummary, history: &mut dyn History) {
        if package.package_id != self.package.package_id {
            tracing::debug!(
                from = %self.package.package_id,
                to = %package.package_id,
                "package changed, changelog cache invalidated"
            );
            self.entries.clear();
            self.last_fetched_id = None;
            self.pending = None;
            self.modal.set_error(None);
            let event = self.modal.close();
            self.on_modal_event(event, history);
        }
        self.package = package;
    }

    /// Request the modal to open
    ///
    /// Returns the fetch to run when the entries are not cached yet. Cached
    /// entries open the modal immediately.
    pub fn open(&mut self, history: &mut dyn History) -> Option<FetchRequest> {
        if self.is_hidden() || !self.package.has_changelog {
            return None;
        }
        if self.pending.is_some() || self.modal.is_visible() {
            return None;
        }

        if self.last_fetched_id.as_deref() == Some(self.package.package_id.as_str()) {
            tracing::debug!(package_id = %self.package.package_id, "changelog served from cache");
            self.show(history);
            return None;
        }

        self.next_seq += 1;
        let request = FetchRequest {
            seq: self.next_seq,
            package_id: self.package.package_id.clone(),
        };
        tracing::info!(package_id = %request.package_id, seq = request.seq, "fetching changelog");
        self.pending = Some(request.clone());
        Some(request)
    }

    /// Apply the answer to a fetch
    ///
    /// Returns `false` when the answer was stale and ignored.
    pub fn complete_fetch(&mut self, response: FetchResponse, history: &mut dyn History) -> bool {
        if self.pending.as_ref() != Some(&response.request) {
            tracing::debug!(
                seq = response.request.seq,
                package_id = %response.request.package_id,
                "dropping stale changelog response"
            );
            return false;
        }
        self.pending = None;

        match response.result {
            Ok(entries) => {
                tracing::info!(
                    package_id = %response.request.package_id,
                    count = entries.len(),
                    "changelog loaded"
                );
                self.entries = entries;
                self.last_fetched_id = Some(response.request.package_id);
                self.modal.set_error(None);
                self.show(history);
            }
            Err(err) => {
                tracing::warn!(
                    package_id = %response.request.package_id,
                    error = %err,
                    "changelog fetch failed"
                );
                self.entries.clear();
                self.last_fetched_id = None;
                self.modal.set_error(Some(FETCH_ERROR_MESSAGE.to_string()));
                self.modal.set_open(true);
            }
        }
        true
    }

    /// Close the modal and clear the URL marker
    pub fn close(&mut self, history: &mut dyn History) -> bool {
        let event = self.modal.close();
        self.on_modal_event(event, history);
        event.is_some()
    }

    /// Dismiss the error banner without closing
    pub fn clean_error(&mut self) -> bool {
        self.modal.clean_error().is_some()
    }

    /// Handle key input
    ///
    /// While the modal is shown every key goes to it; otherwise only the
    /// open-changelog key is recognised.
    pub fn handle_key(&mut self, key: KeyEvent, history: &mut dyn History) -> Option<FetchRequest> {
        if self.is_hidden() {
            return None;
        }
        if self.modal.is_visible() {
            let event = self.modal.handle_key(key);
            self.on_modal_event(event, history);
            return None;
        }
        match key.code {
            keys::OPEN_CHANGELOG => self.open(history),
            _ => None,
        }
    }

    /// Handle a left click at the given cell
    pub fn handle_click(
        &mut self,
        column: u16,
        row: u16,
        history: &mut dyn History,
    ) -> Option<FetchRequest> {
        if self.is_hidden() {
            return None;
        }
        if self.modal.is_visible() {
            let event = self.modal.handle_click(column, row);
            self.on_modal_event(event, history);
            return None;
        }
        let on_trigger = self
            .trigger_area
            .is_some_and(|area| area.contains((column, row).into()));
        if on_trigger { self.open(history) } else { None }
    }

    /// Scroll the modal body (mouse wheel)
    pub fn scroll_by(&mut self, delta: i32) {
        if self.modal.is_visible() {
            self.modal.scroll_by(delta);
        }
    }

    /// Element at a cell, from the last render
    pub fn element_at(&self, column: u16, row: u16) -> Option<ElementId> {
        if let Some(id) = self.modal.hits().hit(column, row) {
            return Some(id);
        }
        self.trigger_area
            .filter(|area| area.contains((column, row).into()))
            .map(|_| ElementId::ChangelogBtn)
    }

    /// Every element drawn by the last render
    pub fn elements(&self) -> HitMap {
        let mut hits = HitMap::default();
        if let Some(area) = self.trigger_area {
            hits.push(ElementId::ChangelogBtn, area);
        }
        for (id, rect) in self.modal.hits().iter() {
            hits.push(*id, *rect);
        }
        hits
    }

    fn show(&mut self, history: &mut dyn History) {
        self.modal.set_open(true);
        history.replace(Location::changelog_open(self.referrer.clone()));
    }

    fn on_modal_event(&mut self, event: Option<ModalEvent>, history: &mut dyn History) {
        match event {
            Some(ModalEvent::Closed) => {
                tracing::debug!(package_id = %self.package.package_id, "changelog closed");
                history.replace(Location::cleared(self.referrer.clone()));
            }
            Some(ModalEvent::ErrorCleaned) | Some(ModalEvent::Opened) | None => {}
        }
    }
}
