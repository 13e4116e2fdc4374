// src/database/ping.rs
use super::Pinger;
use crate::check::{bounded, Check, CheckError};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Succeeds if `db` answers a ping within `timeout`. Fails immediately when
/// no handle is given.
pub fn database_ping_check(db: Option<Arc<dyn Pinger>>, timeout: Duration) -> Check {
    Check::new(move || {
        let db = db.clone();
        async move {
            let Some(db) = db else {
                debug!("Database check failed: no handle");
                return Err(CheckError::NoDatabase);
            };

            let result = bounded("database", timeout, async {
                db.ping().await.map_err(CheckError::Ping)
            })
            .await;

            if let Err(e) = &result {
                debug!(error = %e, "Database check failed");
            }
            result
        }
    })
}
