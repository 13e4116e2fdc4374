// src/runtime/mod.rs
mod pause;
mod tasks;

pub use pause::{max_pause_check, PauseGuard, PauseTracker};
pub use tasks::{task_count_check, thread_count_check};
