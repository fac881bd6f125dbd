//! Rendering logic for the application

use ratatui::{Frame, prelude::*};

use super::state::App;
use crate::keys;
use crate::ui::widgets::{render_package_header, render_status_bar};

/// Height of the package summary block
const HEADER_HEIGHT: u16 = 8;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        // Reserve space for status bar at bottom
        let main_area = Rect {
            height: area.height.saturating_sub(1),
            ..area
        };

        let [header_area, trigger_area, _] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(main_area);

        render_package_header(frame, header_area, self.current_package());
        self.changelog.render_trigger(
            frame,
            Rect {
                x: trigger_area.x + 1,
                width: trigger_area.width.saturating_sub(1),
                ..trigger_area
            },
        );

        // Modal on top of everything but the status bar
        let now = self.now();
        self.changelog.render(frame, main_area, now);

        let hints = keys::current_hints(
            self.changelog.modal().is_visible(),
            self.changelog.modal().error().is_some(),
            !self.changelog.is_hidden() && !self.changelog.is_trigger_disabled(),
        );
        render_status_bar(frame, self.history.location(), &hints);
    }
}
