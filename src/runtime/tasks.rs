// src/runtime/tasks.rs
use crate::check::{Check, CheckError};
use tokio::runtime::Handle;
use tracing::debug;

/// Succeeds while the current tokio runtime has at most `max` running tasks.
///
/// The caller always counts: a check awaited from `block_on` (and so from
/// `#[tokio::main]`) is not a spawned task and is added to the alive count.
pub fn task_count_check(max: usize) -> Check {
    Check::from_fn(move || {
        let handle = Handle::try_current().map_err(|_| CheckError::NoRuntime)?;
        let count = running_tasks(&handle);

        if count > max {
            debug!("Task count check failed: {} > {}", count, max);
            return Err(CheckError::TooManyTasks { count, max });
        }
        Ok(())
    })
}

fn running_tasks(handle: &Handle) -> usize {
    let alive = handle.metrics().num_alive_tasks();
    match tokio::task::try_id() {
        Some(_) => alive,
        None => alive + 1,
    }
}

/// Succeeds while the process runs at most `max` OS threads.
///
/// Only Linux exposes the thread count; elsewhere the check always fails
/// with [`CheckError::Unsupported`].
pub fn thread_count_check(max: usize) -> Check {
    Check::from_fn(move || {
        let count = current_thread_count()?;

        if count > max {
            debug!("Thread count check failed: {} > {}", count, max);
            return Err(CheckError::TooManyThreads { count, max });
        }
        Ok(())
    })
}

#[cfg(target_os = "linux")]
fn current_thread_count() -> Result<usize, CheckError> {
    let status = std::fs::read_to_string("/proc/self/status").map_err(|e| {
        debug!("Failed to read /proc/self/status: {}", e);
        CheckError::Unsupported("thread_count")
    })?;
    parse_thread_count(&status).ok_or(CheckError::Unsupported("thread_count"))
}

#[cfg(not(target_os = "linux"))]
fn current_thread_count() -> Result<usize, CheckError> {
    Err(CheckError::Unsupported("thread_count"))
}

// "Threads:\t12" line of /proc/<pid>/status
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_thread_count(status: &str) -> Option<usize> {
    status
        .lines()
        .find_map(|line| line.strip_prefix("Threads:"))
        .and_then(|value| value.trim().parse().ok())
}
