// src/database/pinger.rs
use crate::check::BoxError;
use async_trait::async_trait;

/// A database handle that can prove it is alive with a round trip.
#[async_trait]
pub trait Pinger: Send + Sync {
    async fn ping(&self) -> Result<(), BoxError>;
}

#[cfg(feature = "sqlx")]
#[async_trait]
impl<DB> Pinger for sqlx::Pool<DB>
where
    DB: sqlx::Database,
{
    async fn ping(&self) -> Result<(), BoxError> {
        use sqlx::Connection;

        let mut conn = self.acquire().await?;
        conn.ping().await?;
        Ok(())
    }
}
