//! Criteria extraction: free-form pt-BR vehicle requests → [`CriteriaSet`].
//!
//! Extraction is total and best-effort: text with nothing recognizable
//! yields an empty set, and malformed numeric tokens are skipped rather
//! than failing the turn.
//!
//! Conflict policy: first brand mention wins; for color, fuel, and
//! transmission the last mention wins.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::text;
use crate::vehicle::{FuelType, Transmission};
use crate::vocabulary;

/// Structured view of what the user asked for. Every dimension is optional;
/// absence means unconstrained.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CriteriaSet {
    pub brand: Option<String>,
    pub year_exact: Option<i32>,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
    pub price_min: Option<Decimal>,
    pub price_max: Option<Decimal>,
    pub color: Option<String>,
    pub fuel: Option<FuelType>,
    pub transmission: Option<Transmission>,
}

impl CriteriaSet {
    pub fn is_empty(&self) -> bool {
        self.brand.is_none()
            && self.year_exact.is_none()
            && self.year_min.is_none()
            && self.year_max.is_none()
            && self.price_min.is_none()
            && self.price_max.is_none()
            && self.color.is_none()
            && self.fuel.is_none()
            && self.transmission.is_none()
    }
}

/// Plausible vehicle-year window. A bare 4-digit token outside it is ignored.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1990..=2100;

/// Scans the input and accumulates every recognized dimension.
pub fn extract(input: &str) -> CriteriaSet {
    let normalized = text::normalize(input);
    let tokens = text::tokenize(&normalized);

    let mut criteria = CriteriaSet::default();
    // Numeric tokens claimed by the price/year-bound pass must not be
    // re-read as bare years afterwards.
    let mut claimed = vec![false; tokens.len()];

    extract_bounds(&tokens, &mut claimed, &mut criteria);

    for (index, token) in tokens.iter().enumerate() {
        if criteria.brand.is_none() {
            if let Some(brand) = vocabulary::brand_for_token(token) {
                criteria.brand = Some(brand.to_string());
                continue;
            }
        }
        if let Some(color) = vocabulary::color_for_token(token) {
            criteria.color = Some(color.to_string());
            continue;
        }
        if let Some(fuel) = vocabulary::fuel_for_token(token) {
            criteria.fuel = Some(fuel);
            continue;
        }
        if let Some(transmission) = vocabulary::transmission_for_token(token) {
            criteria.transmission = Some(transmission);
            continue;
        }
        if !claimed[index] && criteria.year_exact.is_none() {
            if let Some(year) = parse_year(token) {
                criteria.year_exact = Some(year);
            }
        }
    }

    criteria
}

/// Bound direction selected by a qualifier word.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Bound {
    Lower,
    Upper,
}

fn extract_bounds(tokens: &[String], claimed: &mut [bool], criteria: &mut CriteriaSet) {
    let mut index = 0;
    while index < tokens.len() {
        let token = tokens[index].as_str();

        if token == "entre" {
            if let Some((low, high, next)) = parse_year_range(tokens, claimed, index + 1) {
                criteria.year_min = Some(low);
                criteria.year_max = Some(high);
                index = next;
                continue;
            }
            if let Some(range) = parse_price_range(tokens, claimed, index + 1) {
                // X becomes min and Y becomes max regardless of input order
                criteria.price_min = Some(range.first.min(range.second));
                criteria.price_max = Some(range.first.max(range.second));
                index = range.next_index;
                continue;
            }
        } else if let Some(bound) = qualifier_bound(token) {
            // A qualified bare year is a year bound ("a partir de 2020"),
            // never a price.
            let target = skip_connectives(tokens, index + 1);
            if let Some(year) = tokens.get(target).and_then(|t| parse_year(t)) {
                let followed_by_magnitude = tokens
                    .get(target + 1)
                    .is_some_and(|t| vocabulary::magnitude_for_token(t).is_some());
                if !followed_by_magnitude {
                    claimed[target] = true;
                    match bound {
                        Bound::Lower => criteria.year_min = Some(year),
                        Bound::Upper => criteria.year_max = Some(year),
                    }
                    index = target + 1;
                    continue;
                }
            }
            if let Some(amount) = parse_amount(tokens, claimed, index + 1) {
                match bound {
                    Bound::Lower => criteria.price_min = Some(amount.value),
                    Bound::Upper => criteria.price_max = Some(amount.value),
                }
                index = amount.next_index;
                continue;
            }
        }

        index += 1;
    }

    // Without any qualifier, a magnitude-scaled number still reads as a
    // budget cap ("carros de 80 mil", "algo de 70k").
    if criteria.price_min.is_none() && criteria.price_max.is_none() {
        for index in 0..tokens.len() {
            if claimed[index] {
                continue;
            }
            let Some((raw, suffix_scale)) = parse_number(&tokens[index]) else {
                continue;
            };
            let word_scale =
                tokens.get(index + 1).and_then(|t| vocabulary::magnitude_for_token(t));
            if let Some(scale) = suffix_scale.or(word_scale) {
                claimed[index] = true;
                criteria.price_max = Some(raw * Decimal::from(scale));
                break;
            }
        }
    }
}

fn qualifier_bound(token: &str) -> Option<Bound> {
    if vocabulary::UPPER_BOUND_QUALIFIERS.contains(&token) {
        Some(Bound::Upper)
    } else if vocabulary::LOWER_BOUND_QUALIFIERS.contains(&token) {
        Some(Bound::Lower)
    } else {
        None
    }
}

struct ParsedAmount {
    value: Decimal,
    next_index: usize,
}

/// Parses one monetary amount starting at `start`: optional connectives,
/// then a number, then an optional magnitude word ("80 mil", "80k", "80.000").
fn parse_amount(tokens: &[String], claimed: &mut [bool], start: usize) -> Option<ParsedAmount> {
    let number_index = skip_connectives(tokens, start);
    let (raw, suffix_scale) = parse_number(tokens.get(number_index)?)?;
    let mut next_index = number_index + 1;

    let scale = if suffix_scale.is_some() {
        suffix_scale
    } else if let Some(word_scale) =
        tokens.get(next_index).and_then(|t| vocabulary::magnitude_for_token(t))
    {
        next_index += 1;
        Some(word_scale)
    } else {
        None
    };

    claimed[number_index] = true;
    Some(ParsedAmount { value: apply_scale(raw, scale), next_index })
}

struct ParsedRange {
    first: Decimal,
    second: Decimal,
    next_index: usize,
}

/// Parses "X e Y", "X a Y" with optional magnitudes. A trailing magnitude
/// covers both ends when the first number carries none ("entre 30 e 50 mil").
fn parse_price_range(
    tokens: &[String],
    claimed: &mut [bool],
    start: usize,
) -> Option<ParsedRange> {
    let first_index = skip_connectives(tokens, start);
    let (first_raw, first_suffix) = parse_number(tokens.get(first_index)?)?;
    let mut index = first_index + 1;

    let mut first_scale = first_suffix;
    if first_scale.is_none() {
        if let Some(scale) = tokens.get(index).and_then(|t| vocabulary::magnitude_for_token(t)) {
            first_scale = Some(scale);
            index += 1;
        }
    }

    if !matches!(tokens.get(index).map(String::as_str), Some("e" | "a")) {
        return None;
    }
    index += 1;

    let second_index = skip_connectives(tokens, index);
    let (second_raw, second_suffix) = parse_number(tokens.get(second_index)?)?;
    index = second_index + 1;

    let mut second_scale = second_suffix;
    if second_scale.is_none() {
        if let Some(scale) = tokens.get(index).and_then(|t| vocabulary::magnitude_for_token(t)) {
            second_scale = Some(scale);
            index += 1;
        }
    }

    if first_scale.is_none() {
        first_scale = second_scale;
    }

    claimed[first_index] = true;
    claimed[second_index] = true;
    Some(ParsedRange {
        first: apply_scale(first_raw, first_scale),
        second: apply_scale(second_raw, second_scale),
        next_index: index,
    })
}

/// "entre 2015 e 2018" — both ends plausible years, no magnitude anywhere.
fn parse_year_range(
    tokens: &[String],
    claimed: &mut [bool],
    start: usize,
) -> Option<(i32, i32, usize)> {
    let first_index = skip_connectives(tokens, start);
    let first = parse_year(tokens.get(first_index)?)?;
    let mut index = first_index + 1;

    if !matches!(tokens.get(index).map(String::as_str), Some("e" | "a")) {
        return None;
    }
    index += 1;

    let second_index = skip_connectives(tokens, index);
    let second = parse_year(tokens.get(second_index)?)?;
    index = second_index + 1;

    if tokens.get(index).is_some_and(|t| vocabulary::magnitude_for_token(t).is_some()) {
        return None;
    }

    claimed[first_index] = true;
    claimed[second_index] = true;
    Some((first.min(second), first.max(second), index))
}

fn skip_connectives(tokens: &[String], mut index: usize) -> usize {
    while index < tokens.len() && vocabulary::CONNECTIVES.contains(&tokens[index].as_str()) {
        index += 1;
    }
    index
}

/// Parses a numeric token with pt-BR grouping dots, decimal comma, and an
/// optional `k` suffix. Returns the raw value plus the suffix scale.
/// Malformed tokens yield `None` and are skipped by the caller.
fn parse_number(token: &str) -> Option<(Decimal, Option<i64>)> {
    let (digits, suffix_scale) = match token.strip_suffix('k') {
        Some(prefix) if !prefix.is_empty() => (prefix, Some(1_000_i64)),
        _ => (token, None),
    };

    if digits.is_empty()
        || !digits.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | ','))
        || !digits.chars().any(|c| c.is_ascii_digit())
    {
        return None;
    }

    let canonical = digits.replace('.', "").replace(',', ".");
    canonical.parse::<Decimal>().ok().map(|value| (value, suffix_scale))
}

fn apply_scale(value: Decimal, scale: Option<i64>) -> Decimal {
    match scale {
        Some(scale) => value * Decimal::from(scale),
        None => value,
    }
}

fn parse_year(token: &str) -> Option<i32> {
    if token.len() != 4 || !token.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let year = token.parse::<i32>().ok()?;
    YEAR_RANGE.contains(&year).then_some(year)
}
