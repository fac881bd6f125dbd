//! Changelog rendering

use chrono::{DateTime, Utc};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{CHANGELOG_TITLE, ChangelogModal};
use crate::model::ChangelogEntry;
use crate::ui::components::modal::ModalContent;
use crate::ui::components::no_entries_state;
use crate::ui::element::ElementId;
use crate::ui::{symbols, theme, time};

/// Badge text for releases with security fixes
pub const SECURITY_BADGE: &str = "Contains security updates";

/// Badge text for pre-releases
pub const PRERELEASE_BADGE: &str = "Pre-release";

/// Indentation of change lines (bullet column included)
const CHANGE_INDENT: usize = 4;

/// One changelog entry prepared for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogBlock {
    /// Version, shown as the block title
    pub title: String,
    /// Relative release time ("3 hours ago")
    pub released: String,
    pub security_updates: bool,
    pub prerelease: bool,
    /// Change lines; empty for entries without notes
    pub changes: Vec<String>,
}

impl ChangelogBlock {
    fn from_entry(entry: &ChangelogEntry, now: DateTime<Utc>) -> Self {
        Self {
            title: entry.version.clone(),
            released: time::from_now(entry.ts, now),
            security_updates: entry.contains_security_updates,
            prerelease: entry.prerelease,
            changes: entry.change_lines().to_vec(),
        }
    }

    /// Title row: version, release time and badges
    pub fn title_line(&self) -> Line<'static> {
        let mut spans = vec![
            Span::styled(
                self.title.clone(),
                Style::default()
                    .fg(theme::changelog::VERSION)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                self.released.clone(),
                Style::default().fg(theme::changelog::TIMESTAMP),
            ),
        ];

        if self.security_updates {
            spans.push(Span::raw(" "));
            spans.push(badge(SECURITY_BADGE, theme::changelog::SECURITY_BADGE));
        }
        if self.prerelease {
            spans.push(Span::raw(" "));
            spans.push(badge(PRERELEASE_BADGE, theme::changelog::PRERELEASE_BADGE));
        }

        Line::from(spans)
    }

    /// Title row followed by the change lines wrapped to `width`
    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let mut lines = vec![self.title_line()];
        let text_width = (width as usize).saturating_sub(CHANGE_INDENT).max(1);

        for change in &self.changes {
            for (i, chunk) in textwrap::wrap(change, text_width).into_iter().enumerate() {
                let lead = if i == 0 {
                    Span::styled(
                        format!("  {} ", symbols::BULLET),
                        Style::default().fg(theme::changelog::BULLET),
                    )
                } else {
                    Span::raw(" ".repeat(CHANGE_INDENT))
                };
                lines.push(Line::from(vec![lead, Span::raw(chunk.into_owned())]));
            }
        }
        lines
    }
}

fn badge(text: &'static str, bg: Color) -> Span<'static> {
    Span::styled(
        format!(" {} ", text),
        Style::default()
            .fg(Color::White)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )
}

/// Prepare entries for display, keeping their order
pub fn build_blocks(entries: &[ChangelogEntry], now: DateTime<Utc>) -> Vec<ChangelogBlock> {
    entries
        .iter()
        .map(|entry| ChangelogBlock::from_entry(entry, now))
        .collect()
}

/// Lay out blocks for a body of `width` columns, one blank line apart
fn layout_blocks(blocks: &[ChangelogBlock], width: u16) -> ModalContent {
    let mut content = ModalContent::default();

    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            content.lines.push(Line::from(""));
        }
        let start = content.lines.len();
        content.lines.extend(block.lines(width));
        let end = content.lines.len();

        content.regions.push((ElementId::ChangelogBlock(i), start..end));
        content
            .regions
            .push((ElementId::ChangelogBlockTitle(i), start..start + 1));
    }

    content
}

impl ChangelogModal {
    /// Cached entries prepared for display
    pub fn blocks(&self, now: DateTime<Utc>) -> Vec<ChangelogBlock> {
        build_blocks(&self.entries, now)
    }

    /// Render the trigger button at the top-left of `area`
    ///
    /// Draws nothing for packages whose repository kind hides changelogs.
    pub fn render_trigger(&mut self, frame: &mut Frame, area: Rect) {
        if self.is_hidden() {
            self.trigger_area = None;
            return;
        }

        let text = if self.pending.is_some() {
            format!("[ {} {} ]", CHANGELOG_TITLE, symbols::LOADING)
        } else {
            format!("[ {} ]", CHANGELOG_TITLE)
        };
        let style = if self.is_trigger_disabled() {
            Style::default().fg(theme::changelog::TRIGGER_DISABLED)
        } else {
            Style::default()
                .fg(theme::changelog::TRIGGER)
                .add_modifier(Modifier::BOLD)
        };

        let button_area = Rect {
            width: (text.chars().count() as u16).min(area.width),
            height: area.height.min(1),
            ..area
        };
        frame.render_widget(Paragraph::new(Span::styled(text, style)), button_area);
        self.trigger_area = Some(button_area);
    }

    /// Render the modal over `area` when it is shown
    pub fn render(&mut self, frame: &mut Frame, area: Rect, now: DateTime<Utc>) {
        if self.is_hidden() {
            return;
        }

        let blocks = self.blocks(now);
        let show_empty_state = blocks.is_empty() && self.modal.error().is_none();

        self.modal.render(frame, area, |width| {
            if show_empty_state {
                ModalContent::from(no_entries_state())
            } else {
                layout_blocks(&blocks, width)
            }
        });
    }
}
