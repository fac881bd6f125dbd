//! Addressable screen elements
//!
//! Components record where they drew their interactive parts so that mouse
//! clicks can be routed back to them and tests can locate them by id.

use ratatui::layout::{Position, Rect};

/// Accessibility-style role of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Button,
    Dialog,
    Alert,
    Presentation,
    Heading,
    Region,
}

/// Interactive or inspectable element of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    /// Trigger button of a self-managed modal
    OpenModalBtn,
    /// Area behind the dialog
    ModalBackdrop,
    /// The dialog frame itself
    Dialog,
    /// Close control in the dialog header
    CloseModalBtn,
    /// Close button in the dialog footer
    CloseModalFooterBtn,
    /// Error banner inside the dialog
    Alert,
    /// Dismiss control of the error banner
    CloseAlertBtn,
    /// Changelog trigger button
    ChangelogBtn,
    /// One changelog entry (by position)
    ChangelogBlock(usize),
    /// Title row of one changelog entry (by position)
    ChangelogBlockTitle(usize),
}

impl ElementId {
    /// Stable string id
    pub fn id(self) -> &'static str {
        match self {
            Self::OpenModalBtn => "openModalBtn",
            Self::ModalBackdrop => "modalBackdrop",
            Self::Dialog => "dialog",
            Self::CloseModalBtn => "closeModalBtn",
            Self::CloseModalFooterBtn => "closeModalFooterBtn",
            Self::Alert => "alert",
            Self::CloseAlertBtn => "closeAlertBtn",
            Self::ChangelogBtn => "changelogBtn",
            Self::ChangelogBlock(_) => "changelogBlock",
            Self::ChangelogBlockTitle(_) => "changelogBlockTitle",
        }
    }

    pub fn role(self) -> Role {
        match self {
            Self::OpenModalBtn
            | Self::CloseModalBtn
            | Self::CloseModalFooterBtn
            | Self::CloseAlertBtn
            | Self::ChangelogBtn => Role::Button,
            Self::ModalBackdrop => Role::Presentation,
            Self::Dialog => Role::Dialog,
            Self::Alert => Role::Alert,
            Self::ChangelogBlock(_) => Role::Region,
            Self::ChangelogBlockTitle(_) => Role::Heading,
        }
    }
}

/// Elements drawn during the last render, in paint order
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    entries: Vec<(ElementId, Rect)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Record an element; empty rects are ignored
    pub fn push(&mut self, id: ElementId, rect: Rect) {
        if !rect.is_empty() {
            self.entries.push((id, rect));
        }
    }

    /// Topmost element containing the cell
    pub fn hit(&self, column: u16, row: u16) -> Option<ElementId> {
        let pos = Position::new(column, row);
        self.entries
            .iter()
            .rev()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(id, _)| *id)
    }

    /// Area of an element, if it was drawn
    pub fn rect(&self, id: ElementId) -> Option<Rect> {
        self.entries
            .iter()
            .find(|(e, _)| *e == id)
            .map(|(_, rect)| *rect)
    }

    /// All drawn elements with the given string id
    pub fn find_all(&self, id: &str) -> Vec<(ElementId, Rect)> {
        self.entries
            .iter()
            .filter(|(e, _)| e.id() == id)
            .copied()
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(ElementId, Rect)> {
        self.entries.iter()
    }
}
