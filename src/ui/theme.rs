//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::Color;

/// Colors for the modal dialog
pub mod modal {
    use super::*;

    /// Dialog border
    pub const BORDER: Color = Color::Cyan;
    /// Header close control
    pub const CLOSE_CONTROL: Color = Color::Red;
    /// Footer button foreground
    pub const BUTTON_FG: Color = Color::Black;
    /// Footer button background
    pub const BUTTON_BG: Color = Color::Cyan;
    /// Error banner background
    pub const ALERT_BG: Color = Color::Red;
    /// Error banner foreground
    pub const ALERT_FG: Color = Color::White;
}

/// Colors for changelog content
pub mod changelog {
    use super::*;

    /// Version title
    pub const VERSION: Color = Color::Yellow;
    /// Relative release time
    pub const TIMESTAMP: Color = Color::DarkGray;
    /// Security updates badge background
    pub const SECURITY_BADGE: Color = Color::Red;
    /// Pre-release badge background
    pub const PRERELEASE_BADGE: Color = Color::Magenta;
    /// Bullet before each change line
    pub const BULLET: Color = Color::Cyan;
    /// Enabled trigger button
    pub const TRIGGER: Color = Color::Cyan;
    /// Disabled trigger button
    pub const TRIGGER_DISABLED: Color = Color::DarkGray;
}

/// Colors for the package header and status bar
pub mod package_view {
    use super::*;

    /// Package title
    pub const TITLE: Color = Color::Green;
    /// Repository kind label
    pub const KIND: Color = Color::Cyan;
    /// Status bar location text
    pub const LOCATION: Color = Color::Yellow;
    /// Key hint
    pub const HINT_KEY: Color = Color::Cyan;
}
