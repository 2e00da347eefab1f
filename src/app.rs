use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::{config, store::Store};

/// Shared application state handed to every worker.
///
/// Cloning is cheap; all clones observe the same store and counters.
#[derive(Debug, Clone)]
pub struct App {
    pub config: Arc<config::Server>,
    pub store: Store,
    pub started_at: DateTime<Utc>,
    requests: Arc<AtomicU64>,
}

impl App {
    #[must_use]
    pub fn new(cfg: config::Server) -> Self {
        Self {
            config: Arc::new(cfg),
            store: Store::new(),
            started_at: Utc::now(),
            requests: Arc::new(AtomicU64::new(0)),
        }
    }

    /// State for exercising route handlers in tests.
    #[must_use]
    pub fn for_tests() -> Self {
        Self::new(config::Server::for_tests())
    }
}

impl App {
    /// Number of requests dispatched since the process started.
    #[must_use]
    pub fn request_count(&self) -> u64 {
        self.requests.load(Ordering::Relaxed)
    }

    pub(crate) fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Whole seconds elapsed since the service started.
    #[must_use]
    pub fn uptime_secs(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}
