//! Common test utilities for integration tests.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};
use ratatui::buffer::Buffer;

use pkglog::model::{ChangelogEntry, PackageSummary, RepositoryKind};

/// Fixed "now" used by every rendering test
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2021, 3, 1, 12, 0, 0).unwrap()
}

/// Helm package with a changelog
pub fn package(id: &str) -> PackageSummary {
    let mut pkg = PackageSummary::new(id, "test", RepositoryKind::Helm);
    pkg.display_name = Some("Pretty name".to_string());
    pkg.version = Some("1.0.0".to_string());
    pkg
}

/// Entries for `versions`, released three hours before [`fixed_now`]
pub fn entries(versions: &[&str]) -> Vec<ChangelogEntry> {
    let ts = fixed_now().timestamp() - 3 * 3600;
    versions
        .iter()
        .map(|v| ChangelogEntry::new(*v, ts).with_changes([format!("Release {}", v)]))
        .collect()
}

/// Write `<dir>/<package_id>.json` in the API format
pub fn write_changelog(dir: &Path, package_id: &str, versions: &[&str]) {
    let json: Vec<_> = entries(versions)
        .into_iter()
        .map(|e| {
            serde_json::json!({
                "version": e.version,
                "ts": e.ts,
                "contains_security_updates": e.contains_security_updates,
                "prerelease": e.prerelease,
                "changes": e.changes,
            })
        })
        .collect();
    fs::write(
        dir.join(format!("{}.json", package_id)),
        serde_json::to_string_pretty(&json).unwrap(),
    )
    .unwrap();
}

/// Flatten a buffer into newline separated rows
pub fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
