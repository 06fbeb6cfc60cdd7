//! Static lookup tables for the criteria extractor and action classifier.
//!
//! Every surface form is stored pre-normalized (lower-case, accent-free),
//! matching the output of [`crate::text::normalize`]. Canonical names keep
//! their display casing and accents. The tables are fixed at compile time;
//! the vocabulary needs no runtime registration.

use crate::vehicle::{FuelType, Transmission};

/// Canonical brand display name → accepted surface tokens, including common
/// abbreviations and misspellings seen in real chat traffic.
pub const BRANDS: &[(&str, &[&str])] = &[
    ("BMW", &["bmw"]),
    ("Chevrolet", &["chevrolet", "chevy", "gm"]),
    ("Fiat", &["fiat"]),
    ("Ford", &["ford"]),
    ("Honda", &["honda"]),
    ("Hyundai", &["hyundai", "hiunday", "hundai"]),
    ("Jeep", &["jeep"]),
    ("Mercedes-Benz", &["mercedes", "mercedes-benz"]),
    ("Nissan", &["nissan"]),
    ("Renault", &["renault", "reno"]),
    ("Toyota", &["toyota", "toiota"]),
    ("Volkswagen", &["volkswagen", "volks", "vw"]),
];

/// Canonical color display name → surface tokens with gender/plural variants.
pub const COLORS: &[(&str, &[&str])] = &[
    ("Amarelo", &["amarelo", "amarela", "amarelos", "amarelas"]),
    ("Azul", &["azul", "azuis"]),
    ("Branco", &["branco", "branca", "brancos", "brancas"]),
    ("Cinza", &["cinza", "grafite"]),
    ("Prata", &["prata", "prateado", "prateada"]),
    ("Preto", &["preto", "preta", "pretos", "pretas"]),
    ("Verde", &["verde", "verdes"]),
    ("Vermelho", &["vermelho", "vermelha", "vermelhos", "vermelhas"]),
];

pub const FUELS: &[(FuelType, &[&str])] = &[
    (FuelType::Flex, &["flex"]),
    (FuelType::Gasoline, &["gasolina"]),
    (FuelType::Diesel, &["diesel"]),
    (FuelType::Electric, &["eletrico", "eletrica", "eletricos", "eletricas"]),
    (FuelType::Hybrid, &["hibrido", "hibrida", "hibridos", "hibridas"]),
];

pub const TRANSMISSIONS: &[(Transmission, &[&str])] = &[
    (Transmission::Automatic, &["automatico", "automatica", "automaticos", "automaticas"]),
    (Transmission::Manual, &["manual", "manuais"]),
];

/// Magnitude words scaling a bare number into a price value.
pub const MAGNITUDES: &[(&str, i64)] =
    &[("mil", 1_000), ("milhao", 1_000_000), ("milhoes", 1_000_000)];

/// Qualifier tokens marking the next number as an upper price bound.
pub const UPPER_BOUND_QUALIFIERS: &[&str] = &["ate", "maximo", "abaixo"];

/// Qualifier tokens marking the next number as a lower price bound.
pub const LOWER_BOUND_QUALIFIERS: &[&str] = &["partir", "minimo", "acima"];

/// Connective tokens skipped between a qualifier and its number
/// ("a partir de 50 mil", "até uns 80 mil").
pub const CONNECTIVES: &[&str] = &["de", "do", "da", "uns", "umas", "r", "rs", "reais"];

/// Trigger phrases (substring match on normalized text) for the
/// list-brands action.
pub const LIST_BRANDS_TRIGGERS: &[&str] = &[
    "que marcas",
    "quais marcas",
    "marcas disponiveis",
    "marcas voces tem",
    "lista de marcas",
];

/// Trigger phrases for the list-everything action.
pub const LIST_ALL_TRIGGERS: &[&str] = &[
    "todos os carros",
    "todos os veiculos",
    "todo o estoque",
    "estoque completo",
    "tudo que voces tem",
    "quero ver tudo",
];

pub fn brand_for_token(token: &str) -> Option<&'static str> {
    lookup(BRANDS, token)
}

pub fn color_for_token(token: &str) -> Option<&'static str> {
    lookup(COLORS, token)
}

pub fn fuel_for_token(token: &str) -> Option<FuelType> {
    lookup(FUELS, token)
}

pub fn transmission_for_token(token: &str) -> Option<Transmission> {
    lookup(TRANSMISSIONS, token)
}

pub fn magnitude_for_token(token: &str) -> Option<i64> {
    MAGNITUDES.iter().find(|(word, _)| *word == token).map(|(_, scale)| *scale)
}

fn lookup<T: Copy>(table: &'static [(T, &[&str])], token: &str) -> Option<T> {
    table
        .iter()
        .find(|(_, surface_forms)| surface_forms.contains(&token))
        .map(|(canonical, _)| *canonical)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_synonyms_resolve_to_canonical_name() {
        assert_eq!(brand_for_token("vw"), Some("Volkswagen"));
        assert_eq!(brand_for_token("chevy"), Some("Chevrolet"));
        assert_eq!(brand_for_token("toiota"), Some("Toyota"));
        assert_eq!(brand_for_token("fusca"), None);
    }

    #[test]
    fn color_variants_resolve_to_display_name() {
        assert_eq!(color_for_token("brancos"), Some("Branco"));
        assert_eq!(color_for_token("vermelha"), Some("Vermelho"));
        assert_eq!(color_for_token("roxo"), None);
    }

    #[test]
    fn fuel_and_transmission_lookups_cover_variants() {
        assert_eq!(fuel_for_token("eletricos"), Some(FuelType::Electric));
        assert_eq!(transmission_for_token("automaticas"), Some(Transmission::Automatic));
        assert_eq!(transmission_for_token("manuais"), Some(Transmission::Manual));
    }

    #[test]
    fn magnitudes_scale_as_expected() {
        assert_eq!(magnitude_for_token("mil"), Some(1_000));
        assert_eq!(magnitude_for_token("milhoes"), Some(1_000_000));
        assert_eq!(magnitude_for_token("bilhao"), None);
    }

    #[test]
    fn surface_forms_are_pre_normalized() {
        let all_forms = BRANDS
            .iter()
            .flat_map(|(_, forms)| forms.iter())
            .chain(COLORS.iter().flat_map(|(_, forms)| forms.iter()))
            .chain(FUELS.iter().flat_map(|(_, forms)| forms.iter()))
            .chain(TRANSMISSIONS.iter().flat_map(|(_, forms)| forms.iter()));

        for form in all_forms {
            assert_eq!(crate::text::normalize(form), *form, "surface form must be normalized");
        }
    }
}
