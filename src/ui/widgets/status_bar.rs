//! Status bar widget

use ratatui::{Frame, prelude::*, text::Line, widgets::Paragraph};

use crate::keys::KeyHint;
use crate::router::Location;
use crate::ui::theme;

/// Build a status bar line: current location followed by key hints
pub fn build_status_bar(location: &Location, hints: &[KeyHint]) -> Line<'static> {
    let search = if location.search.is_empty() {
        "/".to_string()
    } else {
        location.search.clone()
    };

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(search, Style::default().fg(theme::package_view::LOCATION)),
    ];

    for hint in hints {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!(" [{}] {} ", hint.key, hint.label),
            Style::default().fg(Color::Black).bg(hint.color),
        ));
    }

    Line::from(spans)
}

/// Calculate status bar area at bottom of screen
fn status_bar_area(frame: &Frame) -> Option<Rect> {
    let area = frame.area();
    if area.height < 2 {
        return None;
    }

    Some(Rect {
        x: area.x,
        y: area.y + area.height - 1,
        width: area.width,
        height: 1,
    })
}

/// Render the status bar on the last row
pub fn render_status_bar(frame: &mut Frame, location: &Location, hints: &[KeyHint]) {
    let Some(status_area) = status_bar_area(frame) else {
        return;
    };
    frame.render_widget(
        Paragraph::new(build_status_bar(location, hints)),
        status_area,
    );
}
