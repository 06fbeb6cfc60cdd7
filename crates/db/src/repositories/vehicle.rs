use frota_core::{FuelType, Transmission, VehicleFilter, VehicleRecord};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite};
use tracing::debug;

use super::{RepositoryError, VehicleRepository};
use crate::DbPool;

/// SQLite-backed catalog. Free-text dimensions (brand, model, color)
/// match by case-insensitive substring (SQLite `LIKE`); fuel and
/// transmission compare against their exact storage tokens; numeric
/// dimensions use range predicates.
pub struct SqlVehicleRepository {
    pool: DbPool,
}

impl SqlVehicleRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

const SELECT_COLUMNS: &str = "SELECT brand, model, year, color, price, mileage, is_new, \
                              docs_clear, damaged, vin, fuel, doors, transmission FROM vehicles";

#[async_trait::async_trait]
impl VehicleRepository for SqlVehicleRepository {
    async fn search(&self, filter: &VehicleFilter) -> Result<Vec<VehicleRecord>, RepositoryError> {
        let mut query = QueryBuilder::<Sqlite>::new(SELECT_COLUMNS);
        query.push(" WHERE 1 = 1");

        if let Some(brand) = &filter.brand {
            query.push(" AND brand LIKE ").push_bind(contains_pattern(brand));
        }
        if let Some(model) = &filter.model {
            query.push(" AND model LIKE ").push_bind(contains_pattern(model));
        }
        if let Some(year_min) = filter.year_min {
            query.push(" AND year >= ").push_bind(year_min);
        }
        if let Some(year_max) = filter.year_max {
            query.push(" AND year <= ").push_bind(year_max);
        }
        if let Some(price_min) = filter.price_min.and_then(|price| price.to_f64()) {
            query.push(" AND price >= ").push_bind(price_min);
        }
        if let Some(price_max) = filter.price_max.and_then(|price| price.to_f64()) {
            query.push(" AND price <= ").push_bind(price_max);
        }
        if let Some(color) = &filter.color {
            query.push(" AND color LIKE ").push_bind(contains_pattern(color));
        }
        if let Some(fuel) = filter.fuel {
            query.push(" AND fuel = ").push_bind(fuel.storage_token());
        }
        if let Some(transmission) = filter.transmission {
            query.push(" AND transmission = ").push_bind(transmission.storage_token());
        }
        if let Some(doors) = filter.doors {
            query.push(" AND doors = ").push_bind(i64::from(doors));
        }
        if let Some(mileage_max) = filter.mileage_max {
            query.push(" AND mileage <= ").push_bind(mileage_max);
        }
        if filter.only_new == Some(true) {
            query.push(" AND is_new = 1");
        }

        query.push(" ORDER BY brand, model, year");

        debug!(sql = query.sql(), "catalog search");
        let rows = query.build().fetch_all(&self.pool).await?;
        rows.into_iter().map(row_to_record).collect()
    }

    async fn distinct_brands(&self) -> Result<Vec<String>, RepositoryError> {
        let rows = sqlx::query("SELECT DISTINCT brand FROM vehicles ORDER BY brand")
            .fetch_all(&self.pool)
            .await?;
        rows.iter()
            .map(|row| row.try_get::<String, _>("brand").map_err(RepositoryError::from))
            .collect()
    }
}

/// Total catalog size, used by readiness checks.
pub async fn vehicle_count(pool: &DbPool) -> Result<i64, RepositoryError> {
    let row = sqlx::query("SELECT COUNT(*) AS count FROM vehicles").fetch_one(pool).await?;
    Ok(row.try_get("count")?)
}

fn contains_pattern(needle: &str) -> String {
    format!("%{needle}%")
}

fn row_to_record(row: SqliteRow) -> Result<VehicleRecord, RepositoryError> {
    let price: f64 = row.try_get("price")?;
    let price = Decimal::from_f64_retain(price)
        .ok_or_else(|| RepositoryError::Decode(format!("unrepresentable price: {price}")))?
        .round_dp(2);

    let fuel: String = row.try_get("fuel")?;
    let fuel: FuelType =
        fuel.parse().map_err(|error: frota_core::UnknownToken| RepositoryError::Decode(error.to_string()))?;

    let transmission: String = row.try_get("transmission")?;
    let transmission: Transmission = transmission
        .parse()
        .map_err(|error: frota_core::UnknownToken| RepositoryError::Decode(error.to_string()))?;

    let doors: i64 = row.try_get("doors")?;
    let doors = u8::try_from(doors)
        .map_err(|_| RepositoryError::Decode(format!("door count out of range: {doors}")))?;

    Ok(VehicleRecord {
        brand: row.try_get("brand")?,
        model: row.try_get("model")?,
        year: row.try_get("year")?,
        color: row.try_get("color")?,
        price,
        mileage: row.try_get("mileage")?,
        is_new: row.try_get("is_new")?,
        docs_clear: row.try_get("docs_clear")?,
        damaged: row.try_get("damaged")?,
        vin: row.try_get("vin")?,
        fuel,
        doors,
        transmission,
    })
}
