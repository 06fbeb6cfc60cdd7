//! Demo inventory used by `frota seed`, the in-memory catalog, and tests.

use frota_core::{FuelType, Transmission, VehicleRecord};
use rust_decimal::Decimal;
use sqlx::QueryBuilder;

use crate::repositories::RepositoryError;
use crate::DbPool;

pub struct SeedVehicle {
    pub brand: &'static str,
    pub model: &'static str,
    pub year: i32,
    pub color: &'static str,
    pub price: f64,
    pub mileage: i64,
    pub is_new: bool,
    pub docs_clear: bool,
    pub damaged: bool,
    pub vin: &'static str,
    pub fuel: FuelType,
    pub doors: u8,
    pub transmission: Transmission,
}

pub const SEED_VEHICLES: &[SeedVehicle] = &[
    SeedVehicle {
        brand: "Nissan",
        model: "Kicks",
        year: 2022,
        color: "Prata",
        price: 98_500.0,
        mileage: 31_000,
        is_new: false,
        docs_clear: true,
        damaged: false,
        vin: "94DFB1KC0NB501234",
        fuel: FuelType::Flex,
        doors: 4,
        transmission: Transmission::Automatic,
    },
    SeedVehicle {
        brand: "Nissan",
        model: "Versa",
        year: 2022,
        color: "Branco",
        price: 89_900.0,
        mileage: 28_500,
        is_new: false,
        docs_clear: true,
        damaged: false,
        vin: "94DBC1KC5NB507781",
        fuel: FuelType::Flex,
        doors: 4,
        transmission: Transmission::Manual,
    },
    SeedVehicle {
        brand: "Ford",
        model: "Ka",
        year: 2020,
        color: "Branco",
        price: 54_900.0,
        mileage: 45_200,
        is_new: false,
        docs_clear: true,
        damaged: false,
        vin: "9BFZH54S2L8112045",
        fuel: FuelType::Flex,
        doors: 4,
        transmission: Transmission::Manual,
    },
    SeedVehicle {
        brand: "Ford",
        model: "Ranger",
        year: 2023,
        color: "Preto",
        price: 229_900.0,
        mileage: 12_000,
        is_new: false,
        docs_clear: true,
        damaged: false,
        vin: "8AFAR23L1PJ334019",
        fuel: FuelType::Diesel,
        doors: 4,
        transmission: Transmission::Automatic,
    },
    SeedVehicle {
        brand: "Toyota",
        model: "Corolla",
        year: 2022,
        color: "Prata",
        price: 135_000.0,
        mileage: 22_300,
        is_new: false,
        docs_clear: true,
        damaged: false,
        vin: "9BRBD3HE8N0228816",
        fuel: FuelType::Flex,
        doors: 4,
        transmission: Transmission::Automatic,
    },
    SeedVehicle {
        brand: "Toyota",
        model: "Hilux",
        year: 2021,
        color: "Cinza",
        price: 215_000.0,
        mileage: 38_700,
        is_new: false,
        docs_clear: true,
        damaged: false,
        vin: "8AJKB8CD2M1609453",
        fuel: FuelType::Diesel,
        doors: 4,
        transmission: Transmission::Automatic,
    },
    SeedVehicle {
        brand: "Chevrolet",
        model: "Onix",
        year: 2021,
        color: "Vermelho",
        price: 72_900.0,
        mileage: 33_800,
        is_new: false,
        docs_clear: true,
        damaged: false,
        vin: "9BGEB48A0MB145278",
        fuel: FuelType::Flex,
        doors: 4,
        transmission: Transmission::Manual,
    },
    SeedVehicle {
        brand: "Honda",
        model: "Civic",
        year: 2020,
        color: "Azul",
        price: 119_900.0,
        mileage: 41_000,
        is_new: false,
        docs_clear: true,
        damaged: true,
        vin: "93HFC2650LZ109337",
        fuel: FuelType::Gasoline,
        doors: 4,
        transmission: Transmission::Automatic,
    },
    SeedVehicle {
        brand: "Volkswagen",
        model: "Gol",
        year: 2019,
        color: "Prata",
        price: 49_900.0,
        mileage: 58_400,
        is_new: false,
        docs_clear: false,
        damaged: false,
        vin: "9BWAB45U4KT067912",
        fuel: FuelType::Flex,
        doors: 2,
        transmission: Transmission::Manual,
    },
    SeedVehicle {
        brand: "Volkswagen",
        model: "T-Cross",
        year: 2023,
        color: "Branco",
        price: 139_900.0,
        mileage: 8_900,
        is_new: false,
        docs_clear: true,
        damaged: false,
        vin: "9BWBH6BF1P4023558",
        fuel: FuelType::Flex,
        doors: 4,
        transmission: Transmission::Automatic,
    },
    SeedVehicle {
        brand: "Fiat",
        model: "Argo",
        year: 2021,
        color: "Cinza",
        price: 64_900.0,
        mileage: 36_200,
        is_new: false,
        docs_clear: true,
        damaged: false,
        vin: "9BD358A4NMY712046",
        fuel: FuelType::Flex,
        doors: 4,
        transmission: Transmission::Manual,
    },
    SeedVehicle {
        brand: "Hyundai",
        model: "HB20",
        year: 2022,
        color: "Branco",
        price: 79_900.0,
        mileage: 19_800,
        is_new: false,
        docs_clear: true,
        damaged: false,
        vin: "9BHBG51CANP224903",
        fuel: FuelType::Flex,
        doors: 4,
        transmission: Transmission::Automatic,
    },
    SeedVehicle {
        brand: "Jeep",
        model: "Compass",
        year: 2024,
        color: "Preto",
        price: 189_900.0,
        mileage: 0,
        is_new: true,
        docs_clear: true,
        damaged: false,
        vin: "988675124RKC90415",
        fuel: FuelType::Flex,
        doors: 4,
        transmission: Transmission::Automatic,
    },
    SeedVehicle {
        brand: "Renault",
        model: "Kwid",
        year: 2024,
        color: "Vermelho",
        price: 69_900.0,
        mileage: 0,
        is_new: true,
        docs_clear: true,
        damaged: false,
        vin: "93YRBB200RJ558127",
        fuel: FuelType::Flex,
        doors: 4,
        transmission: Transmission::Manual,
    },
];

/// Inserts the demo inventory. Safe to re-run because each seed has a
/// fixed VIN and the insert ignores duplicates.
pub async fn seed_demo_inventory(pool: &DbPool) -> Result<u64, RepositoryError> {
    let mut query = QueryBuilder::new(
        "INSERT OR IGNORE INTO vehicles (brand, model, year, color, price, mileage, is_new, \
         docs_clear, damaged, vin, fuel, doors, transmission) ",
    );
    query.push_values(SEED_VEHICLES, |mut row, seed| {
        row.push_bind(seed.brand)
            .push_bind(seed.model)
            .push_bind(seed.year)
            .push_bind(seed.color)
            .push_bind(seed.price)
            .push_bind(seed.mileage)
            .push_bind(seed.is_new)
            .push_bind(seed.docs_clear)
            .push_bind(seed.damaged)
            .push_bind(seed.vin)
            .push_bind(seed.fuel.storage_token())
            .push_bind(i64::from(seed.doors))
            .push_bind(seed.transmission.storage_token());
    });

    let result = query.build().execute(pool).await?;
    Ok(result.rows_affected())
}

/// The seed inventory as domain records, for the in-memory catalog.
pub fn demo_records() -> Vec<VehicleRecord> {
    SEED_VEHICLES
        .iter()
        .map(|seed| VehicleRecord {
            brand: seed.brand.to_string(),
            model: seed.model.to_string(),
            year: seed.year,
            color: seed.color.to_string(),
            price: Decimal::from_f64_retain(seed.price)
                .unwrap_or_default()
                .round_dp(2),
            mileage: seed.mileage,
            is_new: seed.is_new,
            docs_clear: seed.docs_clear,
            damaged: seed.damaged,
            vin: seed.vin.to_string(),
            fuel: seed.fuel,
            doors: seed.doors,
            transmission: seed.transmission,
        })
        .collect()
}
