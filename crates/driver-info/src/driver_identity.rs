//! Resolution of the identity of the database driver backing the configured
//! data source. The identity is queried exactly once at startup and is
//! read-only for the rest of the process lifetime.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetadataError {
    /// The data source could not produce connection metadata, for example
    /// because the connection failed or no driver name is reported.
    #[error("data source did not produce connection metadata")]
    Unavailable(#[from] anyhow::Error),
}

/// The single capability this service consumes from the data source: produce
/// the driver name reported by its connection metadata.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MetadataReporting: Send + Sync {
    async fn driver_name(&self) -> Result<String, MetadataError>;
}

/// The resolved driver identity. Constructing this type performs the one
/// metadata query of the process; request handlers only ever observe the
/// value stored here, so a read before initialization is unrepresentable.
pub struct DriverIdentity {
    driver_name: String,
}

impl DriverIdentity {
    /// Queries the data source for its connection metadata and caches the
    /// reported driver name. Errors are fatal to startup and must not be
    /// retried here; the caller decides how to abort.
    pub async fn initialize(source: &dyn MetadataReporting) -> Result<Self, MetadataError> {
        let driver_name = source.driver_name().await?;
        Ok(Self { driver_name })
    }

    pub fn driver_name(&self) -> &str {
        &self.driver_name
    }
}
