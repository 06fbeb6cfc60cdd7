//! Frota core - deterministic interpretation of vehicle-search requests.
//!
//! The pipeline for one user turn is:
//! 1. **Criteria extraction** (`extractor`) - normalized pt-BR text →
//!    structured [`CriteriaSet`]
//! 2. **Action classification** (`classifier`) - trigger phrases plus
//!    criteria → [`Action`]
//! 3. **Filter building** (`filter`) - criteria → canonical
//!    [`VehicleFilter`] with consistent bounds
//! 4. **Result formatting** (`formatter`) - catalog records → reply text
//!
//! Every step is a pure, total function: unrecognized input degrades to an
//! empty criteria set and a help reply, never an error. The interpreter is
//! strictly deterministic; no model, no dialogue state.

pub mod classifier;
pub mod config;
pub mod extractor;
pub mod filter;
pub mod formatter;
pub mod text;
pub mod vehicle;
pub mod vocabulary;

pub use classifier::{classify, Action};
pub use config::{AppConfig, ConfigError, DatabaseConfig, LoadOptions, LogFormat, LoggingConfig};
pub use extractor::{extract, CriteriaSet};
pub use filter::{build, VehicleFilter};
pub use vehicle::{FuelType, Transmission, UnknownToken, VehicleRecord};
