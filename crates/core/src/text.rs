//! Text normalization shared by the extractor and the classifier.
//!
//! All matching downstream happens on the normalized form: lower-case,
//! accent-free, single spaces. Tokens keep `.` and `,` so pt-BR number
//! grouping ("80.000", "1.234,56") survives tokenization.

/// Lower-cases, folds diacritics, and collapses whitespace runs.
pub fn normalize(text: &str) -> String {
    let folded: String = text.to_lowercase().chars().map(fold_diacritic).collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits normalized text into tokens. Punctuation becomes a separator,
/// except `.` and `,` inside a token, which are trimmed only at the edges.
pub fn tokenize(normalized: &str) -> Vec<String> {
    let mut separated = String::with_capacity(normalized.len());
    for character in normalized.chars() {
        if character.is_ascii_alphanumeric() || matches!(character, '.' | ',') {
            separated.push(character);
        } else {
            separated.push(' ');
        }
    }

    separated
        .split_whitespace()
        .map(|token| token.trim_matches(|c| c == '.' || c == ',').to_string())
        .filter(|token| !token.is_empty())
        .collect()
}

fn fold_diacritic(character: char) -> char {
    match character {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        other => other,
    }
}
