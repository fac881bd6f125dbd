//! File-backed changelog API
//!
//! Serves `<dir>/<package_id>.json`, each holding a JSON array of entries.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use super::{ApiError, ChangelogApi};
use crate::model::ChangelogEntry;

/// Changelog API reading JSON fixtures from a directory
#[derive(Debug, Clone)]
pub struct FixtureApi {
    dir: PathBuf,
    /// Artificial delay per request
    latency: Duration,
}

impl FixtureApi {
    /// Create an API serving files from `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            latency: Duration::ZERO,
        }
    }

    /// Delay every request by `latency`
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Directory the fixtures are read from
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, package_id: &str) -> Result<PathBuf, ApiError> {
        // Package ids map to file names; refuse anything that could escape the directory
        if package_id.is_empty()
            || package_id.contains(['/', '\\'])
            || package_id.starts_with('.')
        {
            return Err(ApiError::NotFound(package_id.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", package_id)))
    }
}

impl ChangelogApi for FixtureApi {
    fn get_changelog(&self, package_id: &str) -> Result<Vec<ChangelogEntry>, ApiError> {
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }

        let path = self.path_for(package_id)?;
        let content = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                ApiError::NotFound(package_id.to_string())
            } else {
                ApiError::Io(e)
            }
        })?;

        let entries: Vec<ChangelogEntry> = serde_json::from_str(&content)?;
        tracing::debug!(package_id, count = entries.len(), path = %path.display(), "changelog loaded");
        Ok(entries)
    }
}
