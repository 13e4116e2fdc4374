// src/network/tcp.rs
use crate::check::{bounded, Check, CheckError};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpStream;
use tracing::debug;

/// Succeeds if a TCP connection to `addr` (`host:port`) can be opened within
/// `timeout`. The connection is closed right away.
pub fn tcp_dial_check(addr: impl Into<String>, timeout: Duration) -> Check {
    let addr: Arc<str> = Arc::from(addr.into());

    Check::new(move || {
        let addr = addr.clone();
        async move {
            let result = bounded("tcp", timeout, async {
                TcpStream::connect(&*addr)
                    .await
                    .map_err(|source| CheckError::Connect {
                        addr: addr.to_string(),
                        source,
                    })
            })
            .await;

            match result {
                Ok(stream) => {
                    drop(stream);
                    Ok(())
                }
                Err(e) => {
                    debug!(%addr, error = %e, "TCP check failed");
                    Err(e)
                }
            }
        }
    })
}
