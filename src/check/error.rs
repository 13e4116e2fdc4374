// src/check/error.rs
use std::time::Duration;

/// Boxed error returned by pluggable probe targets such as database handles.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Reason a check failed. One variant per primitive that can fail.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("{probe} check timed out after {after:?}")]
    Timeout { probe: &'static str, after: Duration },

    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("returned status {status}")]
    UnexpectedStatus { status: u16 },

    #[error("database is nil")]
    NoDatabase,

    #[error("database ping failed: {0}")]
    Ping(#[source] BoxError),

    #[error("failed to resolve {host}: {source}")]
    Resolve {
        host: String,
        #[source]
        source: std::io::Error,
    },

    #[error("no addresses found for {host}")]
    NoAddresses { host: String },

    #[error("not running inside a tokio runtime")]
    NoRuntime,

    #[error("too many tasks ({count} > {max})")]
    TooManyTasks { count: usize, max: usize },

    #[error("too many threads ({count} > {max})")]
    TooManyThreads { count: usize, max: usize },

    #[error("{0} is not supported on this platform")]
    Unsupported(&'static str),

    #[error("recent pause took {pause:?} > {max:?}")]
    PauseExceeded { pause: Duration, max: Duration },
}

impl CheckError {
    /// Name of the primitive that failed.
    pub fn probe(&self) -> &'static str {
        match self {
            CheckError::Timeout { probe, .. } => *probe,
            CheckError::Connect { .. } => "tcp",
            CheckError::InvalidUrl { .. } | CheckError::Http(_) | CheckError::UnexpectedStatus { .. } => {
                "http"
            }
            CheckError::NoDatabase | CheckError::Ping(_) => "database",
            CheckError::Resolve { .. } | CheckError::NoAddresses { .. } => "dns",
            CheckError::NoRuntime | CheckError::TooManyTasks { .. } => "task_count",
            CheckError::TooManyThreads { .. } => "thread_count",
            CheckError::Unsupported(probe) => *probe,
            CheckError::PauseExceeded { .. } => "pause",
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, CheckError::Timeout { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_names() {
        assert_eq!(CheckError::NoDatabase.probe(), "database");
        assert_eq!(CheckError::UnexpectedStatus { status: 404 }.probe(), "http");
        assert_eq!(
            CheckError::Timeout {
                probe: "dns",
                after: Duration::from_secs(1)
            }
            .probe(),
            "dns"
        );
        assert_eq!(CheckError::TooManyTasks { count: 3, max: 1 }.probe(), "task_count");
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            CheckError::UnexpectedStatus { status: 404 }.to_string(),
            "returned status 404"
        );
        assert_eq!(
            CheckError::TooManyThreads { count: 12, max: 8 }.to_string(),
            "too many threads (12 > 8)"
        );
        assert!(CheckError::Timeout {
            probe: "tcp",
            after: Duration::from_millis(50)
        }
        .is_timeout());
    }
}
