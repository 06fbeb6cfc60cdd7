use async_trait::async_trait;
use thiserror::Error;

use frota_core::{VehicleFilter, VehicleRecord};

pub mod memory;
pub mod vehicle;

pub use memory::InMemoryVehicleRepository;
pub use vehicle::SqlVehicleRepository;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("decode error: {0}")]
    Decode(String),
}

/// The catalog collaborator contract. Absent filter fields mean "no
/// constraint"; an empty result is `Ok(vec![])`, never an error.
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    async fn search(&self, filter: &VehicleFilter) -> Result<Vec<VehicleRecord>, RepositoryError>;

    /// Distinct brand names in the catalog, sorted for determinism.
    async fn distinct_brands(&self) -> Result<Vec<String>, RepositoryError>;
}
