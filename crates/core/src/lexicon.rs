//! Synonym tables and free-text filter extraction.
//!
//! Every dictionary is an explicit ordered slice, and matching picks the
//! longest surface form found in the message, so "informal" resolves to the
//! casual style instead of leaking a "formal" match. Ties fall back to table
//! order. Matching is accent-insensitive: input is folded before scanning.

use rust_decimal::Decimal;

use crate::domain::filters::FilterState;
use crate::domain::product::Category;

pub const CATEGORY_SYNONYMS: &[(Category, &[&str])] = &[
    (Category::Camiseta, &["camiseta", "camisetas", "playera", "t-shirt", "tshirt", "tee"]),
    (Category::Sudadera, &["sudadera", "sudaderas", "hoodie", "hoodies", "sueter", "jersey"]),
    (Category::Pantalon, &["pantalon", "pantalones", "vaqueros", "jeans", "chinos"]),
    (Category::Vestido, &["vestido", "vestidos", "falda", "faldas"]),
    (Category::Chaqueta, &["chaqueta", "chaquetas", "cazadora", "abrigo", "bomber"]),
    (Category::Zapatillas, &["zapatillas", "zapatilla", "sneakers", "tenis", "bambas"]),
    (Category::Accesorio, &["accesorio", "accesorios", "gorra", "mochila", "cinturon"]),
    (Category::Traje, &["traje", "trajes", "esmoquin", "americana", "blazer"]),
];

pub const STYLE_SYNONYMS: &[(&str, &[&str])] = &[
    ("casual", &["casual", "informal", "basico", "basica"]),
    ("deporte", &["deporte", "deportivo", "deportiva", "running", "gym", "entrenar"]),
    ("elegante", &["elegante", "formal", "arreglado", "de vestir"]),
    ("urbano", &["urbano", "urbana", "street", "streetwear", "oversize"]),
];

pub const OCCASION_SYNONYMS: &[(&str, &[&str])] = &[
    ("trabajo", &["trabajo", "oficina", "entrevista"]),
    ("fiesta", &["fiesta", "salir", "de noche", "concierto"]),
    ("boda", &["boda", "ceremonia", "invitada", "invitado"]),
    ("diario", &["diario", "dia a dia", "uso diario"]),
];

pub const COLOR_SYNONYMS: &[(&str, &[&str])] = &[
    ("negro", &["negro", "negra", "negros", "negras"]),
    ("blanco", &["blanco", "blanca", "blancos", "blancas"]),
    ("azul", &["azul", "azules", "marino"]),
    ("rojo", &["rojo", "roja", "rojos", "granate"]),
    ("verde", &["verde", "verdes", "oliva"]),
    ("beige", &["beige", "crema", "arena"]),
    ("gris", &["gris", "grises"]),
    ("rosa", &["rosa", "rosa palo"]),
];

const SIZE_LABELS: &[&str] = &["xs", "s", "m", "l", "xl", "xxl"];

/// Budget phrase markers, in priority order. The first marker found in the
/// message that is followed by a number wins.
const BUDGET_MARKERS: &[&str] = &["menos de", "por debajo de", "hasta", "maximo"];

/// Lowercase and strip Spanish accents so "máximo" and "maximo" compare
/// equal. `ñ` is meaningful and kept as-is.
pub fn fold(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|ch| match ch {
            'á' | 'à' | 'ä' => 'a',
            'é' | 'è' | 'ë' => 'e',
            'í' | 'ì' | 'ï' => 'i',
            'ó' | 'ò' | 'ö' => 'o',
            'ú' | 'ù' | 'ü' => 'u',
            other => other,
        })
        .collect()
}

pub fn contains_any(folded: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|phrase| folded.contains(phrase))
}

/// Build a sparse [`FilterState`] from one free-text message.
pub fn extract(text: &str) -> FilterState {
    let folded = fold(text);
    FilterState {
        category: match_category(&folded),
        style: match_key(&folded, STYLE_SYNONYMS),
        occasion: match_key(&folded, OCCASION_SYNONYMS),
        color: match_key(&folded, COLOR_SYNONYMS),
        max_price: extract_max_price(&folded),
        size: extract_size(&folded),
    }
}

pub fn match_category(folded: &str) -> Option<Category> {
    let mut best: Option<(Category, usize)> = None;
    for (category, synonyms) in CATEGORY_SYNONYMS {
        for synonym in *synonyms {
            if folded.contains(synonym) && best.map_or(true, |(_, len)| synonym.len() > len) {
                best = Some((*category, synonym.len()));
            }
        }
    }
    best.map(|(category, _)| category)
}

fn match_key(folded: &str, table: &[(&'static str, &[&str])]) -> Option<String> {
    let mut best: Option<(&'static str, usize)> = None;
    for (key, synonyms) in table {
        for synonym in *synonyms {
            if folded.contains(synonym) && best.map_or(true, |(_, len)| synonym.len() > len) {
                best = Some((key, synonym.len()));
            }
        }
    }
    best.map(|(key, _)| key.to_string())
}

/// Price ceiling from phrases like "menos de 50", "hasta 30", "máximo 40" or
/// the literal "50€" / "50 euros". The parsed number passes through as-is;
/// an absurd ceiling just filters everything out.
pub fn extract_max_price(folded: &str) -> Option<Decimal> {
    for marker in BUDGET_MARKERS {
        if let Some(position) = folded.find(marker) {
            if let Some(amount) = first_number_in(&folded[position + marker.len()..]) {
                return Some(amount);
            }
        }
    }

    let tokens: Vec<&str> = folded.split_whitespace().collect();
    for (index, token) in tokens.iter().enumerate() {
        if let Some(raw) = token.strip_suffix('€') {
            if let Some(amount) = parse_amount(raw) {
                return Some(amount);
            }
        }
        let euro_unit_follows =
            matches!(tokens.get(index + 1), Some(&"euros") | Some(&"euro") | Some(&"eur"));
        if euro_unit_follows {
            if let Some(amount) = parse_amount(token) {
                return Some(amount);
            }
        }
    }
    None
}

fn first_number_in(tail: &str) -> Option<Decimal> {
    tail.split_whitespace().find_map(|token| parse_amount(token.trim_end_matches('€')))
}

fn parse_amount(raw: &str) -> Option<Decimal> {
    let normalized = raw.replace(',', ".");
    if normalized.is_empty() || !normalized.chars().next().is_some_and(|ch| ch.is_ascii_digit()) {
        return None;
    }
    normalized.parse::<Decimal>().ok()
}

/// Sizes are only taken from explicit "talla X" phrasing or from the
/// unambiguous multi-letter labels; a lone "m" or "l" is too noisy.
fn extract_size(folded: &str) -> Option<String> {
    let tokens: Vec<&str> = folded
        .split(|ch: char| !ch.is_ascii_alphanumeric())
        .filter(|token| !token.is_empty())
        .collect();

    for (index, token) in tokens.iter().enumerate() {
        if *token == "talla" {
            if let Some(next) = tokens.get(index + 1) {
                if SIZE_LABELS.contains(next) {
                    return Some(next.to_uppercase());
                }
            }
        }
    }

    tokens
        .iter()
        .find(|token| matches!(**token, "xs" | "xl" | "xxl"))
        .map(|token| token.to_uppercase())
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn every_category_synonym_extracts_its_category() {
        for (category, synonyms) in CATEGORY_SYNONYMS {
            for synonym in *synonyms {
                let sentence = format!("estoy mirando {synonym} para el finde");
                let filters = extract(&sentence);
                assert_eq!(
                    filters.category,
                    Some(*category),
                    "synonym `{synonym}` should map to {category:?}"
                );
            }
        }
    }

    #[test]
    fn every_style_occasion_and_color_synonym_extracts_its_key() {
        for (table, pick) in [
            (STYLE_SYNONYMS, "style"),
            (OCCASION_SYNONYMS, "occasion"),
            (COLOR_SYNONYMS, "color"),
        ] {
            for (key, synonyms) in table {
                for synonym in *synonyms {
                    let sentence = format!("algo {synonym} por favor");
                    let filters = extract(&sentence);
                    let extracted = match pick {
                        "style" => filters.style,
                        "occasion" => filters.occasion,
                        _ => filters.color,
                    };
                    assert_eq!(
                        extracted.as_deref(),
                        Some(*key),
                        "{pick} synonym `{synonym}` should map to `{key}`"
                    );
                }
            }
        }
    }

    #[test]
    fn hoodie_maps_to_sudadera() {
        let filters = extract("busco un hoodie");
        assert_eq!(filters.category, Some(Category::Sudadera));
    }

    #[test]
    fn longest_surface_form_wins_over_embedded_match() {
        // "informal" contains "formal"; the longer casual synonym must win.
        let filters = extract("algo informal para el finde");
        assert_eq!(filters.style.as_deref(), Some("casual"));
    }

    #[test]
    fn accented_input_matches_unaccented_synonyms() {
        let filters = extract("un vestido elegante, máximo 60€");
        assert_eq!(filters.category, Some(Category::Vestido));
        assert_eq!(filters.style.as_deref(), Some("elegante"));
        assert_eq!(filters.max_price, Some(Decimal::from(60)));
    }

    #[test]
    fn budget_markers_extract_price_ceiling() {
        for (text, expected) in [
            ("una sudadera de menos de 50", 50),
            ("hasta 30 me gastaria", 30),
            ("maximo 40 por favor", 40),
            ("por debajo de 25", 25),
        ] {
            let filters = extract(text);
            assert_eq!(filters.max_price, Some(Decimal::from(expected)), "text: {text}");
        }
    }

    #[test]
    fn literal_euro_amount_is_a_ceiling() {
        assert_eq!(extract("camisetas de 20€").max_price, Some(Decimal::from(20)));
        assert_eq!(extract("unos 35 euros").max_price, Some(Decimal::from(35)));
    }

    #[test]
    fn marker_without_number_is_ignored() {
        assert_eq!(extract("hasta luego").max_price, None);
    }

    #[test]
    fn negative_or_absurd_ceilings_pass_through() {
        // No range validation by design.
        assert_eq!(extract("menos de 0 euros").max_price, Some(Decimal::ZERO));
        assert_eq!(extract("menos de 99999").max_price, Some(Decimal::from(99_999)));
    }

    #[test]
    fn talla_phrasing_extracts_size() {
        assert_eq!(extract("camiseta talla m").size.as_deref(), Some("M"));
        assert_eq!(extract("sudadera en xl").size.as_deref(), Some("XL"));
        assert_eq!(extract("me encanta el mar").size, None);
    }

    #[test]
    fn gibberish_extracts_nothing() {
        assert!(extract("qwerty asdf zxcv").is_empty());
        assert!(extract("").is_empty());
    }
}
