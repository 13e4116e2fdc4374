// src/check/timeout.rs
use super::error::CheckError;
use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;

/// Await `fut`, failing with [`CheckError::Timeout`] once `after` elapses.
pub(crate) async fn bounded<F, T>(probe: &'static str, after: Duration, fut: F) -> Result<T, CheckError>
where
    F: Future<Output = Result<T, CheckError>>,
{
    match timeout(after, fut).await {
        Ok(result) => result,
        Err(_) => {
            tracing::debug!(probe, ?after, "probe timed out");
            Err(CheckError::Timeout { probe, after })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bounded_passes_through() {
        let value = bounded("test", Duration::from_secs(1), async { Ok::<_, CheckError>(7) })
            .await
            .unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn test_bounded_times_out() {
        let err = bounded("test", Duration::from_millis(10), async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok::<_, CheckError>(())
        })
        .await
        .unwrap_err();

        assert_eq!(err.probe(), "test");
        assert!(err.is_timeout());
    }
}
