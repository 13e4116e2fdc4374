// src/network/dns.rs
use crate::check::{bounded, Check, CheckError};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::lookup_host;
use tracing::debug;

/// Succeeds if `host` resolves to at least one address within `timeout`.
pub fn dns_resolve_check(host: impl Into<String>, timeout: Duration) -> Check {
    let host: Arc<str> = Arc::from(host.into());

    Check::new(move || {
        let host = host.clone();
        async move {
            let result = bounded("dns", timeout, async {
                match lookup_host((&*host, 0)).await {
                    Ok(mut addrs) => match addrs.next() {
                        Some(_) => Ok(()),
                        None => Err(CheckError::NoAddresses {
                            host: host.to_string(),
                        }),
                    },
                    Err(source) => Err(CheckError::Resolve {
                        host: host.to_string(),
                        source,
                    }),
                }
            })
            .await;

            if let Err(e) = &result {
                debug!(%host, error = %e, "DNS check failed");
            }
            result
        }
    })
}
