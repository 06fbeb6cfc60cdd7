//! Lowering a [`CriteriaSet`] into the canonical catalog filter.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::extractor::CriteriaSet;
use crate::vehicle::{FuelType, Transmission};

/// Fully bounded query specification handed to the catalog collaborator.
/// Absent fields mean "no constraint", never zero. The `model`, `doors`,
/// `mileage_max`, and `only_new` fields are not produced by the extractor
/// but are accepted on the MCP surface.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleFilter {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
    pub price_min: Option<Decimal>,
    pub price_max: Option<Decimal>,
    pub color: Option<String>,
    pub fuel: Option<FuelType>,
    pub transmission: Option<Transmission>,
    pub doors: Option<u8>,
    pub mileage_max: Option<i64>,
    pub only_new: Option<bool>,
}

impl VehicleFilter {
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }
}

/// Total and deterministic. Expands `year_exact` into a closed year range
/// and repairs inverted price/year bounds. No clamping against catalog
/// limits happens here; that belongs to the data-access layer.
pub fn build(criteria: &CriteriaSet) -> VehicleFilter {
    let (year_min, year_max) = match criteria.year_exact {
        Some(year) => (Some(year), Some(year)),
        None => ordered(criteria.year_min, criteria.year_max),
    };
    let (price_min, price_max) = ordered(criteria.price_min, criteria.price_max);

    VehicleFilter {
        brand: criteria.brand.clone(),
        model: None,
        year_min,
        year_max,
        price_min,
        price_max,
        color: criteria.color.clone(),
        fuel: criteria.fuel,
        transmission: criteria.transmission,
        doors: None,
        mileage_max: None,
        only_new: None,
    }
}

fn ordered<T: PartialOrd>(min: Option<T>, max: Option<T>) -> (Option<T>, Option<T>) {
    match (min, max) {
        (Some(low), Some(high)) if low > high => (Some(high), Some(low)),
        other => other,
    }
}
