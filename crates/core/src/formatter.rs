//! Rendering catalog results back into pt-BR reply text.
//!
//! All functions are pure formatting over the data they receive. Empty
//! results and unrecognized input are replies, not errors.

use std::collections::BTreeSet;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::vehicle::VehicleRecord;

/// At most this many vehicles are listed in full; the rest collapse into
/// an "e mais N opções" line.
pub const MAX_LISTED: usize = 5;

pub fn render_vehicles(records: &[VehicleRecord]) -> String {
    if records.is_empty() {
        return render_no_matches().to_string();
    }

    let total = records.len();
    let mut reply = if total == 1 {
        "Encontrei 1 veículo que atende seus critérios:\n\n".to_string()
    } else {
        format!("Encontrei {total} veículos que atendem seus critérios:\n\n")
    };

    for (position, record) in records.iter().take(MAX_LISTED).enumerate() {
        reply.push_str(&format!(
            "{}. {} {} {}\n   R$ {}\n   {} | {} km\n   {} | {}\n\n",
            position + 1,
            record.brand,
            record.model,
            record.year,
            format_price(record.price),
            record.color,
            group_thousands(record.mileage.unsigned_abs()),
            record.fuel,
            record.transmission,
        ));
    }

    if total > MAX_LISTED {
        reply.push_str(&format!("... e mais {} opções disponíveis!\n\n", total - MAX_LISTED));
    }

    reply.push_str("Algum desses te interessou? Posso ajudar com mais detalhes!");
    reply
}

pub fn render_brands(brands: &[String]) -> String {
    let distinct: BTreeSet<&str> = brands.iter().map(String::as_str).collect();
    if distinct.is_empty() {
        return "O estoque está vazio no momento.".to_string();
    }

    format!(
        "Temos estas marcas disponíveis:\n{}\n\nQual delas te interessa?",
        distinct.into_iter().collect::<Vec<_>>().join(", ")
    )
}

pub fn render_no_matches() -> &'static str {
    "Não encontrei veículos com esses critérios. Que tal tentar outros filtros?"
}

pub fn render_help() -> &'static str {
    "Não entendi o que você procura. Alguns exemplos do que posso fazer:\n\
     - \"nissan 2022\" busca por marca e ano\n\
     - \"ford até 80 mil\" busca por marca e preço máximo\n\
     - \"carros brancos automáticos\" busca por cor e câmbio\n\
     - \"entre 30 e 50 mil\" busca por faixa de preço\n\
     - \"que marcas vocês têm?\" lista as marcas do estoque\n\
     - \"todos os carros\" mostra o estoque completo"
}

pub fn render_catalog_failure() -> &'static str {
    "Desculpe, tive um problema ao consultar o estoque. Pode tentar novamente?"
}

/// `85000.5` → `"85,000.50"`. Thousands separators, two decimal places.
/// A value whose cents do not fit in `i64` falls back to the plain
/// decimal rendering instead of a wrong number.
fn format_price(price: Decimal) -> String {
    let rounded = price.round_dp(2);
    let Some(total_cents) = rounded.checked_mul(Decimal::from(100)).and_then(|c| c.to_i64())
    else {
        return rounded.to_string();
    };
    let sign = if total_cents < 0 { "-" } else { "" };
    let total_cents = total_cents.unsigned_abs();
    format!("{sign}{}.{:02}", group_thousands(total_cents / 100), total_cents % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (offset, digit) in digits.chars().enumerate() {
        if offset > 0 && (digits.len() - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{render_brands, render_help, render_no_matches, render_vehicles, MAX_LISTED};
    use crate::vehicle::{FuelType, Transmission, VehicleRecord};

    fn record(brand: &str, model: &str, year: i32, price: i64) -> VehicleRecord {
        VehicleRecord {
            brand: brand.to_string(),
            model: model.to_string(),
            year,
            color: "Preto".to_string(),
            price: Decimal::from(price),
            mileage: 10_000,
            is_new: false,
            docs_clear: true,
            damaged: false,
            vin: format!("VIN-{brand}-{model}"),
            fuel: FuelType::Flex,
            doors: 4,
            transmission: Transmission::Automatic,
        }
    }

    #[test]
    fn empty_results_render_the_no_matches_reply() {
        let reply = render_vehicles(&[]);
        assert_eq!(reply, render_no_matches());
        assert!(!reply.is_empty());
    }

    #[test]
    fn single_result_uses_singular_wording() {
        let reply = render_vehicles(&[record("Toyota", "Corolla", 2022, 85_000)]);
        assert!(reply.starts_with("Encontrei 1 veículo que atende"));
        assert!(reply.contains("Toyota Corolla 2022"));
        assert!(reply.contains("R$ 85,000.00"));
        assert!(reply.contains("10,000 km"));
        assert!(reply.contains("Flex | Automático"));
    }

    #[test]
    fn multiple_results_use_plural_wording() {
        let records =
            vec![record("Toyota", "Corolla", 2022, 85_000), record("Honda", "Civic", 2021, 92_000)];
        let reply = render_vehicles(&records);
        assert!(reply.starts_with("Encontrei 2 veículos que atendem"));
        assert!(reply.contains("Honda Civic 2021"));
        assert!(reply.contains("R$ 92,000.00"));
    }

    #[test]
    fn long_result_lists_are_truncated_with_an_overflow_line() {
        let records: Vec<_> =
            (0..8).map(|i| record("Fiat", &format!("Argo{i}"), 2021, 60_000)).collect();
        let reply = render_vehicles(&records);
        assert!(reply.contains("Encontrei 8 veículos"));
        assert!(reply.contains(&format!("{MAX_LISTED}. Fiat Argo{}", MAX_LISTED - 1)));
        assert!(!reply.contains("Argo5"));
        assert!(reply.contains("... e mais 3 opções disponíveis!"));
    }

    #[test]
    fn fractional_prices_keep_two_decimal_places() {
        let mut sample = record("Ford", "Ka", 2020, 0);
        sample.price = Decimal::new(5_499_950, 2); // 54999.50
        let reply = render_vehicles(&[sample]);
        assert!(reply.contains("R$ 54,999.50"));
    }

    #[test]
    fn absurdly_large_price_degrades_to_plain_decimal_text() {
        let mut sample = record("Ford", "Ka", 2020, 0);
        sample.price = Decimal::MAX;
        let reply = render_vehicles(&[sample]);
        assert!(!reply.contains("R$ 0.00"));
        assert!(reply.contains(&format!("R$ {}", Decimal::MAX)));
    }

    #[test]
    fn brand_list_is_deduplicated_and_sorted() {
        let brands = vec![
            "Toyota".to_string(),
            "Ford".to_string(),
            "Toyota".to_string(),
            "Chevrolet".to_string(),
        ];
        let reply = render_brands(&brands);
        assert!(reply.contains("Chevrolet, Ford, Toyota"));
    }

    #[test]
    fn empty_brand_list_has_a_distinct_reply() {
        assert!(render_brands(&[]).contains("estoque está vazio"));
    }

    #[test]
    fn help_enumerates_supported_query_shapes() {
        let help = render_help();
        assert!(help.contains("nissan 2022"));
        assert!(help.contains("ford até 80 mil"));
        assert!(help.contains("que marcas"));
        assert!(help.contains("todos os carros"));
    }
}
