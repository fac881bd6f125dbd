//! Background changelog fetching
//!
//! Each request runs on its own thread and reports back through a channel
//! that the UI loop drains on every tick. Requests carry a sequence number
//! so the receiver can drop answers it is no longer waiting for.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use super::{ApiError, ChangelogApi};
use crate::model::ChangelogEntry;

/// A changelog fetch issued by a component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Sequence number, unique per issuing component
    pub seq: u64,
    /// Package whose changelog is requested
    pub package_id: String,
}

/// Outcome of a [`FetchRequest`]
#[derive(Debug)]
pub struct FetchResponse {
    pub request: FetchRequest,
    pub result: Result<Vec<ChangelogEntry>, ApiError>,
}

/// Runs changelog requests on background threads
pub struct FetchWorker {
    api: Arc<dyn ChangelogApi>,
    tx: Sender<FetchResponse>,
    rx: Receiver<FetchResponse>,
}

impl std::fmt::Debug for FetchWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchWorker").finish_non_exhaustive()
    }
}

impl FetchWorker {
    /// Create a worker backed by `api`
    pub fn new(api: Arc<dyn ChangelogApi>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { api, tx, rx }
    }

    /// Start a request without blocking the caller
    pub fn spawn(&self, request: FetchRequest) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tracing::debug!(seq = request.seq, package_id = %request.package_id, "fetch started");

        thread::spawn(move || {
            let result = api.get_changelog(&request.package_id);
            // Receiver gone means the app is shutting down
            let _ = tx.send(FetchResponse { request, result });
        });
    }

    /// Collect every response that has arrived so far
    pub fn drain(&self) -> Vec<FetchResponse> {
        self.rx.try_iter().collect()
    }

    /// Block until the next response arrives
    pub fn recv(&self) -> Option<FetchResponse> {
        self.rx.recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticApi;

    impl ChangelogApi for StaticApi {
        fn get_changelog(&self, package_id: &str) -> Result<Vec<ChangelogEntry>, ApiError> {
            if package_id == "missing" {
                return Err(ApiError::NotFound(package_id.to_string()));
            }
            Ok(vec![ChangelogEntry::new("1.0.0", 0)])
        }
    }

    #[test]
    fn test_response_carries_request() {
        let worker = FetchWorker::new(Arc::new(StaticApi));
        let request = FetchRequest {
            seq: 7,
            package_id: "id".to_string(),
        };
        worker.spawn(request.clone());

        let response = worker.recv().unwrap();
        assert_eq!(response.request, request);
        assert_eq!(response.result.unwrap().len(), 1);
    }

    #[test]
    fn test_error_is_reported() {
        let worker = FetchWorker::new(Arc::new(StaticApi));
        worker.spawn(FetchRequest {
            seq: 1,
            package_id: "missing".to_string(),
        });

        let response = worker.recv().unwrap();
        assert!(matches!(response.result, Err(ApiError::NotFound(_))));
    }

    #[test]
    fn test_drain_is_empty_without_requests() {
        let worker = FetchWorker::new(Arc::new(StaticApi));
        assert!(worker.drain().is_empty());
    }
}
