//! Rendering tests for the ChangelogModal

use ratatui::{Terminal, backend::TestBackend, layout::Rect};

use pkglog::api::{ApiError, FetchResponse};
use pkglog::model::{ChangelogEntry, PackageSummary, RepositoryKind};
use pkglog::router::{Location, MemoryHistory, ReferrerState};
use pkglog::ui::components::{ChangelogModal, ChangelogState};
use pkglog::ui::element::ElementId;

use crate::common::{buffer_text, entries, fixed_now, package};

fn render(modal: &mut ChangelogModal) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            modal.render_trigger(frame, Rect { height: 1, ..area });
            modal.render(frame, area, fixed_now());
        })
        .unwrap();
    buffer_text(terminal.backend().buffer())
}

fn open_with(
    modal: &mut ChangelogModal,
    history: &mut MemoryHistory,
    result: Result<Vec<ChangelogEntry>, ApiError>,
) {
    let request = modal.open(history).expect("fetch expected");
    assert!(modal.complete_fetch(FetchResponse { request, result }, history));
}

#[test]
fn test_entries_render_in_order() {
    let mut modal = ChangelogModal::new(package("id"), ReferrerState::default());
    let mut history = MemoryHistory::default();
    open_with(
        &mut modal,
        &mut history,
        Ok(entries(&["0.8.0", "0.7.0", "0.6.0"])),
    );

    let text = render(&mut modal);
    let first = text.find("0.8.0").unwrap();
    let second = text.find("0.7.0").unwrap();
    let third = text.find("0.6.0").unwrap();
    assert!(first < second && second < third);
    assert!(text.contains("Release 0.7.0"));
    assert!(text.contains("3 hours ago"));

    let elements = modal.elements();
    assert_eq!(elements.find_all("changelogBlock").len(), 3);
    assert_eq!(elements.find_all("changelogBlockTitle").len(), 3);
}

#[test]
fn test_badges() {
    let ts = fixed_now().timestamp();
    let mut modal = ChangelogModal::new(package("id"), ReferrerState::default());
    let mut history = MemoryHistory::default();
    open_with(
        &mut modal,
        &mut history,
        Ok(vec![
            ChangelogEntry::new("2.0.0-rc.1", ts).with_prerelease(),
            ChangelogEntry::new("1.0.1", ts).with_security_updates(),
        ]),
    );

    let text = render(&mut modal);
    assert!(text.contains("Pre-release"));
    assert!(text.contains("Contains security updates"));
}

#[test]
fn test_failed_fetch_shows_alert() {
    let mut modal = ChangelogModal::new(package("id"), ReferrerState::default());
    let mut history = MemoryHistory::default();
    open_with(
        &mut modal,
        &mut history,
        Err(ApiError::NotFound("id".to_string())),
    );

    assert_eq!(modal.state(), ChangelogState::Error);
    let text = render(&mut modal);
    assert!(text.contains("An error occurred getting the package changelog"));
    assert!(modal.elements().rect(ElementId::Alert).is_some());
    assert!(!text.contains("No changelog entries available"));
    assert!(history.replacements().is_empty());
}

#[test]
fn test_empty_changelog() {
    let mut modal = ChangelogModal::new(package("id"), ReferrerState::default());
    let mut history = MemoryHistory::default();
    open_with(&mut modal, &mut history, Ok(Vec::new()));

    let text = render(&mut modal);
    assert!(text.contains("No changelog entries available"));
    assert!(modal.elements().find_all("changelogBlock").is_empty());
}

#[test]
fn test_excluded_kind_renders_nothing() {
    for kind in [
        RepositoryKind::Krew,
        RepositoryKind::Falco,
        RepositoryKind::HelmPlugin,
    ] {
        let pkg = PackageSummary::new("id", "test", kind);
        let mut modal = ChangelogModal::new(pkg, ReferrerState::default());
        let mut history = MemoryHistory::default();
        assert!(modal.open(&mut history).is_none());

        let text = render(&mut modal);
        assert!(!text.contains("Changelog"), "{:?} should hide", kind);
        assert!(modal.elements().iter().next().is_none());
    }
}

#[test]
fn test_click_trigger_then_close_updates_url() {
    let referrer = ReferrerState {
        from_starred_page: Some(true),
        search_url_referer: Some("/packages/search?ts_query_web=test".to_string()),
    };
    let mut modal = ChangelogModal::new(package("id"), referrer.clone());
    let mut history = MemoryHistory::default();

    render(&mut modal);
    let trigger = modal.elements().rect(ElementId::ChangelogBtn).unwrap();
    let request = modal
        .handle_click(trigger.x, trigger.y, &mut history)
        .expect("fetch expected");
    assert_eq!(request.package_id, "id");
    assert!(modal.complete_fetch(
        FetchResponse {
            request,
            result: Ok(entries(&["0.2.0"])),
        },
        &mut history,
    ));

    render(&mut modal);
    let close = modal.elements().rect(ElementId::CloseModalBtn).unwrap();
    modal.handle_click(close.x, close.y, &mut history);

    assert_eq!(modal.state(), ChangelogState::Closed);
    assert_eq!(
        history.replacements(),
        &[
            Location::changelog_open(referrer.clone()),
            Location::cleared(referrer),
        ]
    );
}
