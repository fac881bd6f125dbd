//! Command line configuration
//!
//! Arguments fall back to `PKGLOG_*` environment variables where noted.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::model::PackageSummary;
use crate::router::{Location, ReferrerState};

/// Errors that can occur while building the configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No package file given")]
    NoPackages,

    #[error("Failed to read package file {path}: {source}")]
    PackageFile { path: PathBuf, source: io::Error },

    #[error("Invalid package file {path}: {source}")]
    InvalidPackage {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Changelog directory not found: {0}")]
    MissingChangelogDir(PathBuf),
}

/// Browse package changelogs in the terminal
#[derive(Debug, Parser)]
#[command(name = "pkglog", version, about)]
pub struct Args {
    /// Package summary JSON files (Tab cycles through them)
    #[arg(required = true, value_name = "PACKAGE_FILE")]
    pub packages: Vec<PathBuf>,

    /// Directory holding `<package_id>.json` changelog files
    /// [default: `changelog/` next to the first package file]
    #[arg(long, env = "PKGLOG_CHANGELOG_DIR")]
    pub changelog_dir: Option<PathBuf>,

    /// Initial query string, e.g. `?modal=changelog` to open the changelog
    #[arg(long, default_value = "")]
    pub url: String,

    /// Mark the navigation as coming from the starred packages page
    #[arg(long)]
    pub from_starred_page: bool,

    /// Search URL the navigation came from
    #[arg(long)]
    pub search_url_referer: Option<String>,

    /// Simulated latency of every changelog request, in milliseconds
    #[arg(long, env = "PKGLOG_LATENCY_MS", default_value_t = 0)]
    pub latency_ms: u64,

    /// Log file path [default: `<data dir>/pkglog/logs/pkglog-<pid>.log`]
    #[arg(long, env = "PKGLOG_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

/// Validated configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Package shown first
    pub package: PackageSummary,
    /// Further packages reachable with Tab
    pub more_packages: Vec<PackageSummary>,
    /// Initial URL state
    pub location: Location,
    pub changelog_dir: PathBuf,
    pub latency: Duration,
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Load package files and resolve defaults
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let (first_path, rest_paths) = args.packages.split_first().ok_or(ConfigError::NoPackages)?;

        let package = load_package(first_path)?;
        let more_packages = rest_paths
            .iter()
            .map(|path| load_package(path))
            .collect::<Result<Vec<_>, _>>()?;

        let changelog_dir = match args.changelog_dir {
            Some(dir) => dir,
            None => first_path
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join("changelog"),
        };
        if !changelog_dir.is_dir() {
            return Err(ConfigError::MissingChangelogDir(changelog_dir));
        }

        let location = Location {
            search: args.url,
            state: ReferrerState {
                from_starred_page: args.from_starred_page.then_some(true),
                search_url_referer: args.search_url_referer,
            },
        };

        Ok(Self {
            package,
            more_packages,
            location,
            changelog_dir,
            latency: Duration::from_millis(args.latency_ms),
            log_file: args.log_file,
        })
    }
}

fn load_package(path: &Path) -> Result<PackageSummary, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::PackageFile {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::InvalidPackage {
        path: path.to_path_buf(),
        source,
    })
}
