//! Generic modal dialog
//!
//! The modal keeps its state for its whole lifetime; closing it flips the
//! `visible` flag instead of tearing it down, so a close followed by a
//! reopen always starts from the same state.
//!
//! Owners learn about user actions through the [`ModalEvent`] returned by
//! the input handlers.

mod render;

use std::ops::Range;

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, text::Line};

use crate::keys;
use crate::ui::element::{ElementId, HitMap};

/// User action reported by the modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    /// Trigger button pressed, modal became visible
    Opened,
    /// A close control was used, modal became hidden
    Closed,
    /// Error banner dismissed
    ErrorCleaned,
}

/// Body content of a modal, laid out for a given width
///
/// `regions` maps line ranges of `lines` to elements so that the modal can
/// report where they ended up on screen.
#[derive(Debug, Clone, Default)]
pub struct ModalContent {
    pub lines: Vec<Line<'static>>,
    pub regions: Vec<(ElementId, Range<usize>)>,
}

impl From<Vec<Line<'static>>> for ModalContent {
    fn from(lines: Vec<Line<'static>>) -> Self {
        Self {
            lines,
            regions: Vec::new(),
        }
    }
}

/// Modal state
#[derive(Debug, Clone)]
pub struct Modal {
    /// Header text
    header: String,
    /// Trigger button label (self-managed modals only)
    button_content: Option<String>,
    /// Dialog visibility
    visible: bool,
    /// Error shown in the alert banner
    error: Option<String>,
    /// Last error brought into view
    revealed_error: Option<String>,
    /// Body scroll offset (lines)
    scroll: u16,
    /// Body line count from the last render
    content_height: u16,
    /// Body height from the last render
    viewport_height: u16,
    /// Where the trigger button was drawn
    trigger_area: Option<Rect>,
    /// Elements drawn by the last overlay render
    hits: HitMap,
}

impl Modal {
    /// Create a hidden modal with the given header
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            button_content: None,
            visible: false,
            error: None,
            revealed_error: None,
            scroll: 0,
            content_height: 0,
            viewport_height: 0,
            trigger_area: None,
            hits: HitMap::default(),
        }
    }

    /// Builder: show a trigger button with this label
    pub fn with_button(mut self, label: impl Into<String>) -> Self {
        self.button_content = Some(label.into());
        self
    }

    /// Builder: start open or closed
    pub fn with_open(mut self, open: bool) -> Self {
        self.visible = open;
        self
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn button_content(&self) -> Option<&str> {
        self.button_content.as_deref()
    }

    /// Whether the dialog is shown
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Drive visibility from the owner
    ///
    /// Does not emit events; the owner already knows.
    pub fn set_open(&mut self, open: bool) {
        if open && !self.visible {
            self.scroll = 0;
        }
        self.visible = open;
    }

    /// Show the dialog as if the trigger had been pressed
    pub fn open(&mut self) -> Option<ModalEvent> {
        if self.visible {
            return None;
        }
        self.set_open(true);
        Some(ModalEvent::Opened)
    }

    /// Hide the dialog; reports [`ModalEvent::Closed`] once per close
    pub fn close(&mut self) -> Option<ModalEvent> {
        if !self.visible {
            return None;
        }
        self.visible = false;
        Some(ModalEvent::Closed)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replace the error message
    ///
    /// Returns `true` when a new, non-empty error was brought into view.
    /// Setting the same error again does not scroll a second time.
    pub fn set_error(&mut self, error: Option<String>) -> bool {
        self.error = error.filter(|e| !e.is_empty());

        match &self.error {
            Some(err) if self.revealed_error.as_ref() != Some(err) => {
                // Banner sits above the body; resetting the body keeps both in view
                self.scroll = 0;
                self.revealed_error = Some(err.clone());
                true
            }
            Some(_) => false,
            None => {
                self.revealed_error = None;
                false
            }
        }
    }

    /// Dismiss the error banner; never closes the dialog
    pub fn clean_error(&mut self) -> Option<ModalEvent> {
        if self.error.is_none() {
            return None;
        }
        self.set_error(None);
        Some(ModalEvent::ErrorCleaned)
    }

    /// Current body scroll offset
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Scroll the body by `delta` lines, clamped to the content
    pub fn scroll_by(&mut self, delta: i32) {
        let max = self.max_scroll() as i32;
        self.scroll = (self.scroll as i32 + delta).clamp(0, max) as u16;
    }

    fn max_scroll(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Handle key input while the dialog is visible
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<ModalEvent> {
        if !self.visible {
            return None;
        }

        let page = self.viewport_height.max(1) as i32;
        match key.code {
            k if keys::is_close(k) => self.close(),
            keys::DISMISS_ERROR => self.clean_error(),
            k if keys::is_move_down(k) => {
                self.scroll_by(1);
                None
            }
            k if keys::is_move_up(k) => {
                self.scroll_by(-1);
                None
            }
            keys::PAGE_DOWN | keys::PAGE_DOWN_SPACE => {
                self.scroll_by(page);
                None
            }
            keys::PAGE_UP => {
                self.scroll_by(-page);
                None
            }
            keys::GO_TOP => {
                self.scroll = 0;
                None
            }
            keys::GO_BOTTOM => {
                self.scroll = self.max_scroll();
                None
            }
            _ => None,
        }
    }

    /// Handle a left click at the given cell
    pub fn handle_click(&mut self, column: u16, row: u16) -> Option<ModalEvent> {
        if !self.visible {
            let on_trigger = self
                .trigger_area
                .is_some_and(|area| area.contains((column, row).into()));
            return if on_trigger { self.open() } else { None };
        }

        match self.hits.hit(column, row)? {
            ElementId::CloseModalBtn | ElementId::CloseModalFooterBtn | ElementId::ModalBackdrop => {
                self.close()
            }
            ElementId::CloseAlertBtn => self.clean_error(),
            _ => None,
        }
    }

    /// Elements drawn by the last render
    pub fn hits(&self) -> &HitMap {
        &self.hits
    }

    /// Area of the trigger button, if drawn
    pub fn trigger_area(&self) -> Option<Rect> {
        self.trigger_area
    }
}
