//! Readiness and uptime state shared between `main` and the probe endpoints.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Lifecycle of the running server.
///
/// Starts not ready. `main` marks it ready once the listener is bound and
/// flips it back when a shutdown signal arrives, so `/ready` starts failing
/// while in-flight requests drain.
#[derive(Debug)]
pub struct ShutdownState {
    ready: AtomicBool,
    started_at: Instant,
}

impl ShutdownState {
    pub fn new() -> Self {
        Self {
            ready: AtomicBool::new(false),
            started_at: Instant::now(),
        }
    }

    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::SeqCst);
        tracing::info!("server is ready");
    }

    pub fn begin_shutdown(&self) {
        self.ready.store(false, Ordering::SeqCst);
        tracing::info!("server is shutting down");
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

impl Default for ShutdownState {
    fn default() -> Self {
        Self::new()
    }
}
