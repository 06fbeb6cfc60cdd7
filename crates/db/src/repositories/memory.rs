use std::collections::BTreeSet;

use async_trait::async_trait;

use frota_core::{VehicleFilter, VehicleRecord};

use super::{RepositoryError, VehicleRepository};

/// In-memory catalog mirroring the SQL matching semantics. Used by tests
/// and anywhere a database is not worth the setup.
#[derive(Clone, Debug, Default)]
pub struct InMemoryVehicleRepository {
    vehicles: Vec<VehicleRecord>,
}

impl InMemoryVehicleRepository {
    pub fn new(vehicles: Vec<VehicleRecord>) -> Self {
        Self { vehicles }
    }

    /// Catalog pre-loaded with the demo seed inventory.
    pub fn with_demo_inventory() -> Self {
        Self::new(crate::fixtures::demo_records())
    }
}

#[async_trait]
impl VehicleRepository for InMemoryVehicleRepository {
    async fn search(&self, filter: &VehicleFilter) -> Result<Vec<VehicleRecord>, RepositoryError> {
        let mut matches: Vec<VehicleRecord> =
            self.vehicles.iter().filter(|record| matches_filter(filter, record)).cloned().collect();
        matches.sort_by(|a, b| {
            (&a.brand, &a.model, a.year).cmp(&(&b.brand, &b.model, b.year))
        });
        Ok(matches)
    }

    async fn distinct_brands(&self) -> Result<Vec<String>, RepositoryError> {
        let brands: BTreeSet<&str> =
            self.vehicles.iter().map(|record| record.brand.as_str()).collect();
        Ok(brands.into_iter().map(str::to_string).collect())
    }
}

fn matches_filter(filter: &VehicleFilter, record: &VehicleRecord) -> bool {
    let contains = |haystack: &str, needle: &str| {
        haystack.to_lowercase().contains(&needle.to_lowercase())
    };

    filter.brand.as_deref().map_or(true, |brand| contains(&record.brand, brand))
        && filter.model.as_deref().map_or(true, |model| contains(&record.model, model))
        && filter.year_min.map_or(true, |year| record.year >= year)
        && filter.year_max.map_or(true, |year| record.year <= year)
        && filter.price_min.map_or(true, |price| record.price >= price)
        && filter.price_max.map_or(true, |price| record.price <= price)
        && filter.color.as_deref().map_or(true, |color| contains(&record.color, color))
        && filter.fuel.map_or(true, |fuel| record.fuel == fuel)
        && filter.transmission.map_or(true, |transmission| record.transmission == transmission)
        && filter.doors.map_or(true, |doors| record.doors == doors)
        && filter.mileage_max.map_or(true, |mileage| record.mileage <= mileage)
        && (filter.only_new != Some(true) || record.is_new)
}
