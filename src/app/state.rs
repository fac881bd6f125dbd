//! Application state and fetch plumbing

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::api::{ChangelogApi, FetchRequest, FetchWorker};
use crate::model::PackageSummary;
use crate::router::{Location, MemoryHistory};
use crate::ui::components::ChangelogModal;

/// The main application state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Packages that can be browsed (never empty)
    packages: Vec<PackageSummary>,
    /// Index of the package on screen
    selected: usize,
    /// Changelog modal for the package on screen
    pub changelog: ChangelogModal,
    /// URL state
    pub history: MemoryHistory,
    /// Runs changelog fetches off the UI thread
    worker: FetchWorker,
    /// Source of "now" for relative times
    clock: fn() -> DateTime<Utc>,
}

impl App {
    /// Construct a new instance of [`App`] showing `package`
    ///
    /// A `location` that asks for the changelog opens it right away.
    pub fn new(package: PackageSummary, location: Location, api: Arc<dyn ChangelogApi>) -> Self {
        let mut history = MemoryHistory::new(location.clone());
        let mut changelog = ChangelogModal::new(package.clone(), location.state.clone());
        let request = changelog.set_visible_changelog(location.wants_changelog(), &mut history);

        let mut app = Self {
            running: true,
            packages: vec![package],
            selected: 0,
            changelog,
            history,
            worker: FetchWorker::new(api),
            clock: Utc::now,
        };
        app.dispatch(request);
        app
    }

    /// Builder: add more packages to cycle through
    pub fn with_more_packages(mut self, more: Vec<PackageSummary>) -> Self {
        self.packages.extend(more);
        self
    }

    /// Builder: use a fixed clock (for reproducible rendering)
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    /// Package on screen
    pub fn current_package(&self) -> &PackageSummary {
        self.changelog.package()
    }

    pub fn packages(&self) -> &[PackageSummary] {
        &self.packages
    }

    pub(crate) fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    /// Start a fetch requested by the changelog modal
    pub(crate) fn dispatch(&self, request: Option<FetchRequest>) {
        if let Some(request) = request {
            self.worker.spawn(request);
        }
    }

    /// Apply fetch results that have arrived
    ///
    /// Called on every tick of the event loop. Returns how many results were
    /// applied (stale ones are not counted).
    pub fn tick(&mut self) -> usize {
        let mut applied = 0;
        for response in self.worker.drain() {
            if self.changelog.complete_fetch(response, &mut self.history) {
                applied += 1;
            }
        }
        applied
    }

    /// Show the next package (wraps around)
    pub(crate) fn next_package(&mut self) {
        if self.packages.len() < 2 {
            return;
        }
        self.selected = (self.selected + 1) % self.packages.len();
        if let Some(package) = self.packages.get(self.selected) {
            tracing::debug!(package_id = %package.package_id, "switching package");
            self.changelog.set_package(package.clone(), &mut self.history);
        }
    }

    /// Set running to false to quit the application.
    pub(crate) fn quit(&mut self) {
        self.running = false;
    }
}
