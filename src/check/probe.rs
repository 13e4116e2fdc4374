// src/check/probe.rs
use super::error::CheckError;
use futures::future::BoxFuture;
use futures::FutureExt;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

pub type CheckResult = Result<(), CheckError>;

type ProbeFn = dyn Fn() -> BoxFuture<'static, CheckResult> + Send + Sync;

/// A deferred, zero-argument probe.
///
/// A `Check` only closes over its configuration. Cloning it is cheap and
/// every clone may be run concurrently from any number of tasks.
#[derive(Clone)]
pub struct Check {
    probe: Arc<ProbeFn>,
}

impl Check {
    /// Build a check from an async closure.
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = CheckResult> + Send + 'static,
    {
        Self {
            probe: Arc::new(move || f().boxed()),
        }
    }

    /// Build a check from a closure that does not need to await anything.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn() -> CheckResult + Send + Sync + 'static,
    {
        Self::new(move || futures::future::ready(f()))
    }

    /// Run the probe to completion.
    pub async fn run(&self) -> CheckResult {
        (self.probe)().await
    }

    /// Fail with [`CheckError::Timeout`] if the probe does not finish in time.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self::new(move || super::timeout::bounded("check", timeout, self.run_owned()))
    }

    fn run_owned(&self) -> BoxFuture<'static, CheckResult> {
        (self.probe)()
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check").finish_non_exhaustive()
    }
}
