//! Rendering tests for the generic Modal

use ratatui::{Terminal, backend::TestBackend, text::Line};

use pkglog::ui::components::{Modal, ModalContent, ModalEvent};
use pkglog::ui::element::{ElementId, Role};

use crate::common::buffer_text;

fn draw(modal: &mut Modal, body: &[&str]) -> Terminal<TestBackend> {
    let lines: Vec<Line<'static>> = body.iter().map(|l| Line::from(l.to_string())).collect();
    let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            modal.render_trigger(frame, area);
            modal.render(frame, area, |_| ModalContent::from(lines));
        })
        .unwrap();
    terminal
}

#[test]
fn test_open_modal_layout() {
    let mut modal = Modal::new("Changelog").with_open(true);
    let terminal = draw(&mut modal, &["first line", "second line"]);
    let text = buffer_text(terminal.backend().buffer());

    assert!(text.contains(" Changelog "));
    assert!(text.contains("first line"));
    assert!(text.contains("second line"));
    assert!(text.contains("[ Close ]"));

    let hits = modal.hits();
    for id in [
        ElementId::ModalBackdrop,
        ElementId::Dialog,
        ElementId::CloseModalBtn,
        ElementId::CloseModalFooterBtn,
    ] {
        assert!(hits.rect(id).is_some(), "{} missing", id.id());
    }
    assert_eq!(ElementId::Dialog.role(), Role::Dialog);
    assert!(hits.rect(ElementId::Alert).is_none());
}

#[test]
fn test_dialog_sits_inside_backdrop() {
    let mut modal = Modal::new("title").with_open(true);
    draw(&mut modal, &["body"]);

    let backdrop = modal.hits().rect(ElementId::ModalBackdrop).unwrap();
    let dialog = modal.hits().rect(ElementId::Dialog).unwrap();
    assert_eq!(backdrop.intersection(dialog), dialog);
    assert!(dialog.width < backdrop.width);
}

#[test]
fn test_error_alert_and_dismiss() {
    let mut modal = Modal::new("title").with_open(true);
    modal.set_error(Some("something failed".to_string()));
    let terminal = draw(&mut modal, &["body"]);
    let text = buffer_text(terminal.backend().buffer());
    assert!(text.contains("something failed"));

    let dismiss = modal.hits().rect(ElementId::CloseAlertBtn).unwrap();
    assert_eq!(
        modal.handle_click(dismiss.x, dismiss.y),
        Some(ModalEvent::ErrorCleaned)
    );
    assert!(modal.is_visible());
    assert_eq!(modal.error(), None);

    let terminal = draw(&mut modal, &["body"]);
    let text = buffer_text(terminal.backend().buffer());
    assert!(!text.contains("something failed"));
}

#[test]
fn test_trigger_opens_then_footer_closes() {
    let mut modal = Modal::new("title").with_button("Open me");
    let terminal = draw(&mut modal, &["body"]);
    let text = buffer_text(terminal.backend().buffer());
    assert!(text.contains("[ Open me ]"));
    assert!(!text.contains("body"));

    let trigger = modal.trigger_area().unwrap();
    assert_eq!(
        modal.handle_click(trigger.x, trigger.y),
        Some(ModalEvent::Opened)
    );

    draw(&mut modal, &["body"]);
    let footer = modal.hits().rect(ElementId::CloseModalFooterBtn).unwrap();
    assert_eq!(
        modal.handle_click(footer.x, footer.y),
        Some(ModalEvent::Closed)
    );
    assert!(!modal.is_visible());
}
