use crate::driver_identity::{MetadataError, MetadataReporting};
use anyhow::{Context, Result};
use sqlx::PgPool;

// The pool uses an Arc internally.
#[derive(Clone)]
pub struct Postgres {
    pub pool: PgPool,
}

impl Postgres {
    pub fn new(uri: &str) -> Result<Self> {
        Ok(Self {
            pool: PgPool::connect_lazy(uri)?,
        })
    }
}

#[async_trait::async_trait]
impl MetadataReporting for Postgres {
    async fn driver_name(&self) -> Result<String, MetadataError> {
        const QUERY: &str = "SELECT version()";
        // The connection returns to the pool when `ex` is dropped, on error
        // paths included.
        let mut ex = self
            .pool
            .acquire()
            .await
            .context("failed to acquire connection for the metadata query")?;
        let name: String = sqlx::query_scalar(QUERY)
            .fetch_one(&mut *ex)
            .await
            .context("no driver name reported by the data source")?;
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore]
    async fn postgres_reports_a_driver_name() {
        let db = Postgres::new("postgresql://").unwrap();
        let name = db.driver_name().await.unwrap();
        assert!(name.starts_with("PostgreSQL"));
    }
}
