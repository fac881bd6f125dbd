//! Changelog API layer
//!
//! The viewer only needs one call from the package API: fetch the changelog
//! of a package. The transport lives behind [`ChangelogApi`]; [`FixtureApi`]
//! serves JSON files from disk and [`FetchWorker`] runs calls off the UI
//! thread.

mod fixture;
mod worker;

pub use fixture::FixtureApi;
pub use worker::{FetchRequest, FetchResponse, FetchWorker};

use std::io;
use thiserror::Error;

use crate::model::ChangelogEntry;

/// Errors that can occur when fetching a changelog
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("No changelog found for package {0}")]
    NotFound(String),

    #[error("Failed to parse changelog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Source of changelog entries
pub trait ChangelogApi: Send + Sync {
    /// Fetch all changelog entries of a package, in display order
    fn get_changelog(&self, package_id: &str) -> Result<Vec<ChangelogEntry>, ApiError>;
}

impl<T: ChangelogApi + ?Sized> ChangelogApi for std::sync::Arc<T> {
    fn get_changelog(&self, package_id: &str) -> Result<Vec<ChangelogEntry>, ApiError> {
        (**self).get_changelog(package_id)
    }
}
