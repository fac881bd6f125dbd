//! Keybinding definitions for pkglog
//!
//! All keybindings are defined here for easy modification.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

/// Check if key is Ctrl+C (quit from anywhere)
/// Note: Accept both 'c' and 'C' for terminal compatibility
pub fn is_interrupt(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

// =============================================================================
// Global keys
// =============================================================================

/// Quit application (or close the modal when one is open)
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Close the modal
pub const ESC: KeyCode = KeyCode::Esc;

/// Switch to the next package
pub const TAB: KeyCode = KeyCode::Tab;

// =============================================================================
// Changelog keys
// =============================================================================

/// Open the changelog
pub const OPEN_CHANGELOG: KeyCode = KeyCode::Char('c');

/// Dismiss the error banner
pub const DISMISS_ERROR: KeyCode = KeyCode::Char('x');

// =============================================================================
// Navigation keys (modal body scrolling)
// =============================================================================

/// Scroll up (vim style)
pub const MOVE_UP: KeyCode = KeyCode::Char('k');

/// Scroll up (arrow key)
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;

/// Scroll down (vim style)
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');

/// Scroll down (arrow key)
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;

/// Scroll one page up
pub const PAGE_UP: KeyCode = KeyCode::PageUp;

/// Scroll one page down
pub const PAGE_DOWN: KeyCode = KeyCode::PageDown;

/// Scroll one page down (space bar)
pub const PAGE_DOWN_SPACE: KeyCode = KeyCode::Char(' ');

/// Go to top
pub const GO_TOP: KeyCode = KeyCode::Char('g');

/// Go to bottom
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

/// Check if key closes a modal (Esc or q)
pub fn is_close(code: KeyCode) -> bool {
    matches!(code, ESC | QUIT)
}

// =============================================================================
// Key hints (status bar)
// =============================================================================

/// A key hint shown in the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

pub const HINT_CHANGELOG: KeyHint = KeyHint {
    key: "c",
    label: "Changelog",
    color: Color::Cyan,
};
pub const HINT_NEXT_PACKAGE: KeyHint = KeyHint {
    key: "Tab",
    label: "Next package",
    color: Color::Cyan,
};
pub const HINT_QUIT: KeyHint = KeyHint {
    key: "q",
    label: "Quit",
    color: Color::Red,
};
pub const HINT_SCROLL: KeyHint = KeyHint {
    key: "j/k",
    label: "Scroll",
    color: Color::Cyan,
};
pub const HINT_DISMISS: KeyHint = KeyHint {
    key: "x",
    label: "Dismiss error",
    color: Color::Yellow,
};
pub const HINT_CLOSE: KeyHint = KeyHint {
    key: "Esc",
    label: "Close",
    color: Color::Red,
};

/// Hints for the current screen state
pub fn current_hints(modal_open: bool, has_error: bool, changelog_enabled: bool) -> Vec<KeyHint> {
    if modal_open {
        let mut hints = vec![HINT_SCROLL];
        if has_error {
            hints.push(HINT_DISMISS);
        }
        hints.push(HINT_CLOSE);
        return hints;
    }

    let mut hints = Vec::new();
    if changelog_enabled {
        hints.push(HINT_CHANGELOG);
    }
    hints.push(HINT_NEXT_PACKAGE);
    hints.push(HINT_QUIT);
    hints
}
