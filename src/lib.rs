// src/lib.rs
pub mod check;
pub mod config;
pub mod database;
pub mod network;
pub mod runtime;

pub use check::{BoxError, Check, CheckError, CheckResult};
pub use database::{database_ping_check, Pinger};
pub use network::{dns_resolve_check, http_get_check, http_get_check_with_statuses, tcp_dial_check};
pub use runtime::{max_pause_check, task_count_check, thread_count_check, PauseTracker};
