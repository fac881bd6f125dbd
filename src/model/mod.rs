//! Data models for pkglog
//!
//! UI-independent data structures: packages, their repositories, and
//! changelog entries.

mod changelog;
mod package;

pub use changelog::ChangelogEntry;
pub use package::{PackageSummary, Repository, RepositoryKind};
