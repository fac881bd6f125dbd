//! Input handling for the application

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use super::state::App;
use crate::keys;

/// Lines scrolled per mouse wheel step
const WHEEL_STEP: i32 = 3;

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // Handle Ctrl+C globally
        if keys::is_interrupt(&key) {
            self.quit();
            return;
        }

        // An open modal captures all other keys
        if self.changelog.modal().is_visible() {
            let request = self.changelog.handle_key(key, &mut self.history);
            self.dispatch(request);
            return;
        }

        match key.code {
            keys::QUIT => self.quit(),
            keys::TAB => self.next_package(),
            _ => {
                let request = self.changelog.handle_key(key, &mut self.history);
                self.dispatch(request);
            }
        }
    }

    /// Handle mouse events (clicks and wheel)
    pub fn on_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let request =
                    self.changelog
                        .handle_click(mouse.column, mouse.row, &mut self.history);
                self.dispatch(request);
            }
            MouseEventKind::ScrollDown => self.changelog.scroll_by(WHEEL_STEP),
            MouseEventKind::ScrollUp => self.changelog.scroll_by(-WHEEL_STEP),
            _ => {}
        }
    }
}
