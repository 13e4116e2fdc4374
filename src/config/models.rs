// src/config/models.rs
use crate::check::{Check, CheckError};
use crate::network::{dns_resolve_check, http_get_check_with_statuses, tcp_dial_check, DEFAULT_STATUSES};
use crate::runtime::{max_pause_check, task_count_check, thread_count_check, PauseTracker};
use serde::Deserialize;
use std::collections::HashSet;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub checks: Vec<CheckConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckConfig {
    pub name: String,
    #[serde(flatten)]
    pub kind: CheckKind,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CheckKind {
    Tcp {
        addr: String,
        #[serde(default = "default_timeout_ms")]
        timeout_ms: u64,
    },
    Http {
        url: String,
        #[serde(default = "default_timeout_ms")]
        timeout_ms: u64,
        #[serde(default)]
        expected_statuses: Option<Vec<u16>>,
    },
    Dns {
        host: String,
        #[serde(default = "default_timeout_ms")]
        timeout_ms: u64,
    },
    TaskCount {
        max: usize,
    },
    ThreadCount {
        max: usize,
    },
    Pause {
        max_ms: u64,
    },
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT.as_millis() as u64
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("check name must not be empty")]
    EmptyName,

    #[error("duplicate check name: {0}")]
    DuplicateName(String),

    #[error("check {0}: target must not be empty")]
    EmptyTarget(String),

    #[error("check {0}: timeout must be greater than zero")]
    ZeroTimeout(String),

    #[error("check {0}: invalid URL: {1}")]
    InvalidUrl(String, url::ParseError),

    #[error("check {0}: expected_statuses must not be empty")]
    EmptyStatuses(String),

    #[error("check {0}: invalid status code {1}")]
    InvalidStatus(String, u16),
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for check in &self.checks {
            check.validate()?;
            if !seen.insert(check.name.as_str()) {
                return Err(ConfigError::DuplicateName(check.name.clone()));
            }
        }
        Ok(())
    }

    /// Build every configured check, keyed by name.
    pub fn build(&self) -> Result<Vec<(String, Check)>, CheckError> {
        self.checks
            .iter()
            .map(|c| c.build().map(|check| (c.name.clone(), check)))
            .collect()
    }
}

impl CheckConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let name = || self.name.clone();

        if self.name.trim().is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if self.kind.timeout() == Some(Duration::ZERO) {
            return Err(ConfigError::ZeroTimeout(name()));
        }

        match &self.kind {
            CheckKind::Tcp { addr: target, .. } | CheckKind::Dns { host: target, .. } => {
                if target.trim().is_empty() {
                    return Err(ConfigError::EmptyTarget(name()));
                }
            }
            CheckKind::Http {
                url,
                expected_statuses,
                ..
            } => {
                url::Url::parse(url).map_err(|e| ConfigError::InvalidUrl(name(), e))?;
                if let Some(statuses) = expected_statuses {
                    if statuses.is_empty() {
                        return Err(ConfigError::EmptyStatuses(name()));
                    }
                    if let Some(&status) = statuses.iter().find(|s| !(100..=599).contains(*s)) {
                        return Err(ConfigError::InvalidStatus(name(), status));
                    }
                }
            }
            CheckKind::TaskCount { .. } | CheckKind::ThreadCount { .. } | CheckKind::Pause { .. } => {}
        }
        Ok(())
    }

    /// Pause checks read [`PauseTracker::global`].
    pub fn build(&self) -> Result<Check, CheckError> {
        let timeout = self.kind.timeout().unwrap_or(DEFAULT_TIMEOUT);

        let check = match &self.kind {
            CheckKind::Tcp { addr, .. } => tcp_dial_check(addr.clone(), timeout),
            CheckKind::Http {
                url,
                expected_statuses,
                ..
            } => match expected_statuses {
                Some(statuses) => http_get_check_with_statuses(url, timeout, statuses.iter().copied())?,
                None => http_get_check_with_statuses(url, timeout, DEFAULT_STATUSES.iter().copied())?,
            },
            CheckKind::Dns { host, .. } => dns_resolve_check(host.clone(), timeout),
            CheckKind::TaskCount { max } => task_count_check(*max),
            CheckKind::ThreadCount { max } => thread_count_check(*max),
            CheckKind::Pause { max_ms } => {
                max_pause_check(PauseTracker::global().clone(), Duration::from_millis(*max_ms))
            }
        };
        Ok(check)
    }
}

impl CheckKind {
    /// Probe timeout, for the network-bound kinds.
    pub fn timeout(&self) -> Option<Duration> {
        match self {
            CheckKind::Tcp { timeout_ms, .. }
            | CheckKind::Http { timeout_ms, .. }
            | CheckKind::Dns { timeout_ms, .. } => Some(Duration::from_millis(*timeout_ms)),
            _ => None,
        }
    }
}
