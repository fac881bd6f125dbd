//! Reusable UI components
//!
//! The generic [`Modal`] and the [`ChangelogModal`] built on top of it, plus
//! small building blocks shared by both.

pub mod changelog;
pub mod empty_state;
pub mod message;
pub mod modal;

pub use changelog::{ChangelogBlock, ChangelogModal, ChangelogState};
pub use empty_state::*;
pub use message::*;
pub use modal::{Modal, ModalContent, ModalEvent};

use ratatui::layout::{Constraint, Layout, Rect};

/// Calculate a centered rectangle within the given area
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical_margin = area.height.saturating_sub(height) / 2;
    let horizontal_margin = area.width.saturating_sub(width) / 2;

    let vertical_layout = Layout::vertical([
        Constraint::Length(vertical_margin),
        Constraint::Length(height),
        Constraint::Length(vertical_margin),
    ])
    .split(area);

    let horizontal_layout = Layout::horizontal([
        Constraint::Length(horizontal_margin),
        Constraint::Length(width),
        Constraint::Length(horizontal_margin),
    ])
    .split(vertical_layout[1]);

    horizontal_layout[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(40, 10, area);
        assert_eq!(rect, Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_rect_larger_than_area() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = centered_rect(40, 20, area);
        assert!(rect.width <= area.width);
        assert!(rect.height <= area.height);
    }
}
