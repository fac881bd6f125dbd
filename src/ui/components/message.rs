//! Error message components
//!
//! Provides consistent styling for error banners.

use ratatui::{
    prelude::*,
    text::{Line, Span},
};

use crate::ui::{symbols, theme};

/// Build the line shown inside a modal's alert banner
///
/// Format: `[bold] ! [/bold] message`
pub fn build_alert_line(error: &str) -> Line<'static> {
    let style = Style::default()
        .fg(theme::modal::ALERT_FG)
        .bg(theme::modal::ALERT_BG);
    Line::from(vec![
        Span::styled(format!(" {} ", symbols::ALERT), style.bold()),
        Span::styled(error.to_string(), style),
    ])
}
