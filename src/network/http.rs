// src/network/http.rs
use crate::check::{bounded, Check, CheckError};
use reqwest::{redirect::Policy, Client};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Status codes accepted by [`http_get_check`].
pub const DEFAULT_STATUSES: &[u16] = &[200];

/// Succeeds if a GET on `url` answers `200 OK` within `timeout`.
///
/// Redirects are not followed, so a 3xx response fails the check.
pub fn http_get_check(url: &str, timeout: Duration) -> Result<Check, CheckError> {
    http_get_check_with_statuses(url, timeout, DEFAULT_STATUSES.iter().copied())
}

/// Like [`http_get_check`] but succeeds for any status in `statuses`.
///
/// An empty set accepts nothing.
pub fn http_get_check_with_statuses<I>(
    url: &str,
    timeout: Duration,
    statuses: I,
) -> Result<Check, CheckError>
where
    I: IntoIterator<Item = u16>,
{
    let url = Url::parse(url).map_err(|source| {
        warn!("Invalid HTTP check URL {}: {}", url, source);
        CheckError::InvalidUrl {
            url: url.to_string(),
            source,
        }
    })?;

    let client = Client::builder()
        .timeout(timeout)
        .redirect(Policy::none())
        .build()?;

    let statuses: Arc<[u16]> = statuses.into_iter().collect();

    Ok(Check::new(move || {
        let client = client.clone();
        let url = url.clone();
        let statuses = statuses.clone();

        async move {
            let response = bounded("http", timeout, async {
                client.get(url.clone()).send().await.map_err(|e| {
                    if e.is_timeout() {
                        CheckError::Timeout {
                            probe: "http",
                            after: timeout,
                        }
                    } else {
                        CheckError::Http(e)
                    }
                })
            })
            .await;

            let result = response.and_then(|response| {
                let status = response.status().as_u16();
                if statuses.contains(&status) {
                    Ok(())
                } else {
                    Err(CheckError::UnexpectedStatus { status })
                }
            });

            if let Err(e) = &result {
                debug!(%url, error = %e, "HTTP check failed");
            }
            result
        }
    }))
}
