//! Modal rendering

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::{Modal, ModalContent};
use crate::ui::components::{build_alert_line, centered_rect};
use crate::ui::element::ElementId;
use crate::ui::{symbols, theme};

/// Widest the dialog gets on large terminals
const MAX_WIDTH: u16 = 96;

/// Footer button label
const FOOTER_CLOSE_LABEL: &str = "[ Close ]";

impl Modal {
    /// Render the trigger button at the top-left of `area`
    ///
    /// Does nothing for modals without a button label.
    pub fn render_trigger(&mut self, frame: &mut Frame, area: Rect) {
        let Some(label) = self.button_content.as_deref() else {
            self.trigger_area = None;
            return;
        };

        let text = format!("[ {} ]", label);
        let button_area = Rect {
            width: (text.chars().count() as u16).min(area.width),
            height: area.height.min(1),
            ..area
        };

        frame.render_widget(
            Paragraph::new(Span::styled(
                text,
                Style::default()
                    .fg(theme::modal::BUTTON_FG)
                    .bg(theme::modal::BUTTON_BG),
            )),
            button_area,
        );
        self.trigger_area = Some(button_area);
    }

    /// Render the dialog over `area` when visible
    ///
    /// `body` receives the usable body width and returns the lines to show.
    pub fn render<F>(&mut self, frame: &mut Frame, area: Rect, body: F)
    where
        F: FnOnce(u16) -> ModalContent,
    {
        self.hits.clear();
        if !self.visible {
            return;
        }

        // Backdrop: dim whatever is underneath
        frame
            .buffer_mut()
            .set_style(area, Style::default().add_modifier(Modifier::DIM));
        self.hits.push(ElementId::ModalBackdrop, area);

        let width = MAX_WIDTH.min(area.width.saturating_sub(4));
        let height = area.height.saturating_sub(4);
        let dialog_area = centered_rect(width, height, area);

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(Line::from(format!(" {} ", self.header)).bold())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::modal::BORDER));
        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);
        self.hits.push(ElementId::Dialog, dialog_area);

        let alert_height = u16::from(self.error.is_some());
        let [alert_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(alert_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

        self.render_body(frame, body_area, body(body_area.width));
        self.render_alert(frame, alert_area);
        self.render_header_close(frame, dialog_area);
        self.render_footer(frame, footer_area);
    }

    fn render_body(&mut self, frame: &mut Frame, area: Rect, content: ModalContent) {
        self.content_height = u16::try_from(content.lines.len()).unwrap_or(u16::MAX);
        self.viewport_height = area.height;
        self.scroll = self.scroll.min(self.max_scroll());

        let scroll = self.scroll as usize;
        let visible_end = scroll + area.height as usize;

        // Map element line ranges onto the part of the body that is on screen
        for (id, range) in &content.regions {
            let start = range.start.max(scroll);
            let end = range.end.min(visible_end);
            if start < end {
                self.hits.push(
                    *id,
                    Rect {
                        x: area.x,
                        y: area.y + (start - scroll) as u16,
                        width: area.width,
                        height: (end - start) as u16,
                    },
                );
            }
        }

        frame.render_widget(Paragraph::new(content.lines).scroll((self.scroll, 0)), area);
    }

    fn render_alert(&mut self, frame: &mut Frame, area: Rect) {
        let Some(error) = self.error.as_deref() else {
            return;
        };
        if area.is_empty() {
            return;
        }

        let dismiss_width = symbols::CLOSE.chars().count() as u16;
        let dismiss_area = Rect {
            x: area.right().saturating_sub(dismiss_width + 1),
            width: dismiss_width.min(area.width),
            ..area
        };
        let text_area = Rect {
            width: area.width.saturating_sub(dismiss_width + 2),
            ..area
        };

        frame.buffer_mut().set_style(
            area,
            Style::default()
                .fg(theme::modal::ALERT_FG)
                .bg(theme::modal::ALERT_BG),
        );
        frame.render_widget(Paragraph::new(build_alert_line(error)), text_area);
        frame.render_widget(
            Paragraph::new(Span::raw(symbols::CLOSE).bold()),
            dismiss_area,
        );

        self.hits.push(ElementId::Alert, area);
        self.hits.push(ElementId::CloseAlertBtn, dismiss_area);
    }

    fn render_header_close(&mut self, frame: &mut Frame, dialog_area: Rect) {
        let width = symbols::CLOSE.chars().count() as u16;
        // Leave room for the corner and at least part of the title
        if dialog_area.width < width + 6 {
            return;
        }

        let close_area = Rect {
            x: dialog_area.right() - width - 2,
            y: dialog_area.y,
            width,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                symbols::CLOSE,
                Style::default().fg(theme::modal::CLOSE_CONTROL),
            )),
            close_area,
        );
        self.hits.push(ElementId::CloseModalBtn, close_area);
    }

    fn render_footer(&mut self, frame: &mut Frame, area: Rect) {
        if area.is_empty() {
            return;
        }

        let width = (FOOTER_CLOSE_LABEL.len() as u16).min(area.width);
        let button_area = Rect {
            x: area.right() - width,
            width,
            ..area
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                FOOTER_CLOSE_LABEL,
                Style::default()
                    .fg(theme::modal::BUTTON_FG)
                    .bg(theme::modal::BUTTON_BG),
            )),
            button_area,
        );
        self.hits.push(ElementId::CloseModalFooterBtn, button_area);
    }
}
