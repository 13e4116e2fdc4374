// src/check/mod.rs
mod error;
mod probe;
mod timeout;

pub use error::{BoxError, CheckError};
pub use probe::{Check, CheckResult};
pub(crate) use timeout::bounded;
