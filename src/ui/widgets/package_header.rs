//! Package summary header

use ratatui::{
    Frame,
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::model::PackageSummary;
use crate::ui::theme;

/// Build the lines describing a package
pub fn build_package_lines(package: &PackageSummary) -> Vec<Line<'static>> {
    let mut title = vec![Span::styled(
        package.title().to_string(),
        Style::default()
            .fg(theme::package_view::TITLE)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(version) = &package.version {
        title.push(Span::raw(format!("  {}", version)));
    }

    let mut origin = vec![Span::styled(
        package.repository.kind.label(),
        Style::default().fg(theme::package_view::KIND),
    )];
    origin.push(Span::raw(format!(" · {}/{}", package.repository.name, package.name)));

    let mut lines = vec![Line::from(title), Line::from(origin)];

    if let Some(app_version) = &package.app_version {
        lines.push(Line::from(format!("App version: {}", app_version)).dark_gray());
    }
    if let Some(description) = &package.description {
        lines.push(Line::from(""));
        lines.push(Line::from(description.clone()));
    }
    lines
}

/// Render the package summary in a bordered block
pub fn render_package_header(frame: &mut Frame, area: Rect, package: &PackageSummary) {
    let paragraph = Paragraph::new(build_package_lines(package))
        .block(Block::default().borders(Borders::ALL).title(" Package "))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
