//! SQLite persistence for the vehicle catalog.
//!
//! The [`VehicleRepository`] trait is the seam the agent talks through;
//! [`SqlVehicleRepository`] backs it with SQLite and
//! [`InMemoryVehicleRepository`] backs it with a plain `Vec` for tests.

pub mod connection;
pub mod fixtures;
pub mod migrations;
pub mod repositories;

pub use connection::{connect, connect_with_settings, DbPool};
pub use fixtures::{demo_records, seed_demo_inventory, SEED_VEHICLES};
pub use migrations::{run_pending, MIGRATOR};
pub use repositories::vehicle::vehicle_count;
pub use repositories::{
    InMemoryVehicleRepository, RepositoryError, SqlVehicleRepository, VehicleRepository,
};
