// src/runtime/pause.rs
//
// Pauses are whatever the host service reports through `PauseTracker::record`.

use crate::check::{Check, CheckError, CheckResult};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Default)]
struct PauseState {
    last_nanos: AtomicU64,
    count: AtomicU64,
}

/// Shared recorder of the most recent pause observed by the service.
#[derive(Debug, Clone, Default)]
pub struct PauseTracker {
    state: Arc<PauseState>,
}

impl PauseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide tracker, read by configured pause checks.
    ///
    /// Nothing records into it on its own: the host has to call
    /// [`record`](Self::record) or [`measure`](Self::measure) on it, otherwise
    /// checks built on it always pass.
    pub fn global() -> &'static PauseTracker {
        static GLOBAL: OnceLock<PauseTracker> = OnceLock::new();
        GLOBAL.get_or_init(PauseTracker::new)
    }

    pub fn record(&self, pause: Duration) {
        let nanos = u64::try_from(pause.as_nanos()).unwrap_or(u64::MAX);
        self.state.last_nanos.store(nanos, Ordering::Relaxed);
        self.state.count.fetch_add(1, Ordering::Release);
    }

    /// Records the lifetime of the returned guard as a pause.
    pub fn measure(&self) -> PauseGuard<'_> {
        PauseGuard {
            tracker: self,
            started: Instant::now(),
        }
    }

    /// Most recent pause, or `None` if nothing was recorded yet.
    pub fn last_pause(&self) -> Option<Duration> {
        if self.pause_count() == 0 {
            return None;
        }
        Some(Duration::from_nanos(
            self.state.last_nanos.load(Ordering::Relaxed),
        ))
    }

    pub fn pause_count(&self) -> u64 {
        self.state.count.load(Ordering::Acquire)
    }
}

#[must_use = "the pause is recorded when the guard is dropped"]
pub struct PauseGuard<'a> {
    tracker: &'a PauseTracker,
    started: Instant,
}

impl Drop for PauseGuard<'_> {
    fn drop(&mut self) {
        self.tracker.record(self.started.elapsed());
    }
}

/// Succeeds while the most recent pause recorded by `tracker` is at most
/// `max`. A tracker that never recorded anything passes.
pub fn max_pause_check(tracker: PauseTracker, max: Duration) -> Check {
    Check::from_fn(move || check_pause(&tracker, max))
}

fn check_pause(tracker: &PauseTracker, max: Duration) -> CheckResult {
    let pause = tracker.last_pause().unwrap_or_default();
    if pause > max {
        debug!("Pause check failed: {:?} > {:?}", pause, max);
        return Err(CheckError::PauseExceeded { pause, max });
    }
    Ok(())
}
