//! Priority-cascade intent classification.
//!
//! Rules are evaluated in a fixed order and the first hit wins; overlapping
//! vocabulary between rules is resolved by that order, not by scoring. In
//! particular the FAQ scan runs before product search, so policy wording
//! ("talla", "envío") is answered instead of being treated as a filter.

use serde::{Deserialize, Serialize};

use crate::domain::filters::FilterState;
use crate::domain::product::Category;
use crate::faq::{self, FaqKey};
use crate::lexicon::{self, contains_any};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Thanks,
    Help,
    Bestsellers,
    NewArrivals,
    Faq { key: FaqKey },
    Search { filters: FilterState },
    Unknown,
}

impl Intent {
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Thanks => "thanks",
            Intent::Help => "help",
            Intent::Bestsellers => "bestsellers",
            Intent::NewArrivals => "new_arrivals",
            Intent::Faq { .. } => "faq",
            Intent::Search { .. } => "search",
            Intent::Unknown => "unknown",
        }
    }
}

// "que tal" is deliberately absent: it is a substring of "que talla" and
// would steal size-guide questions from the FAQ.
const GREETING_PHRASES: &[&str] = &["hola", "buenas", "buenos dias", "hey", "saludos"];

const THANKS_PHRASES: &[&str] = &["gracias", "genial", "perfecto", "de lujo"];

const BESTSELLER_PHRASES: &[&str] =
    &["mas vendido", "mas vendidos", "top ventas", "populares", "lo mas popular", "bestseller"];

const NEW_ARRIVAL_PHRASES: &[&str] =
    &["novedades", "nueva coleccion", "recien llegado", "lo nuevo", "ultimas llegadas"];

const SUIT_PHRASES: &[&str] = &["traje", "trajes", "esmoquin"];

const HELP_PHRASES: &[&str] =
    &["ayuda", "ayudame", "que puedes hacer", "como funciona", "no se que"];

/// Generic desire phrasing that turns a filterless message into a search.
const DESIRE_PHRASES: &[&str] =
    &["quiero", "busco", "estoy buscando", "necesito", "me gustaria", "enseñame"];

pub fn classify(text: &str) -> Intent {
    let folded = lexicon::fold(text);
    if folded.trim().is_empty() {
        return Intent::Unknown;
    }

    if contains_any(&folded, GREETING_PHRASES) {
        return Intent::Greeting;
    }
    if contains_any(&folded, THANKS_PHRASES) {
        return Intent::Thanks;
    }
    if contains_any(&folded, BESTSELLER_PHRASES) {
        return Intent::Bestsellers;
    }
    if contains_any(&folded, NEW_ARRIVAL_PHRASES) {
        return Intent::NewArrivals;
    }
    if contains_any(&folded, SUIT_PHRASES) {
        // Suit requests jump straight to a category search before the FAQ
        // scan can claim occasion words like "boda".
        let mut filters = lexicon::extract(text);
        filters.category.get_or_insert(Category::Traje);
        return Intent::Search { filters };
    }
    if contains_any(&folded, HELP_PHRASES) {
        return Intent::Help;
    }
    if let Some(entry) = faq::match_entry(&folded) {
        return Intent::Faq { key: entry.key };
    }

    let filters = lexicon::extract(text);
    if !filters.is_empty() || contains_any(&folded, DESIRE_PHRASES) {
        return Intent::Search { filters };
    }

    Intent::Unknown
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn hola_is_a_greeting() {
        assert_eq!(classify("hola"), Intent::Greeting);
        assert_eq!(classify("¡Hola! ¿qué tal?"), Intent::Greeting);
    }

    #[test]
    fn greeting_outranks_search_in_mixed_messages() {
        // First rule wins by design, even when filters are present.
        assert_eq!(classify("hola, busco una sudadera"), Intent::Greeting);
    }

    #[test]
    fn bestseller_and_new_arrival_phrases_classify() {
        assert_eq!(classify("enséñame lo más vendido"), Intent::Bestsellers);
        assert_eq!(classify("¿tenéis novedades?"), Intent::NewArrivals);
    }

    #[test]
    fn faq_claims_size_wording_before_search() {
        assert_eq!(classify("¿qué talla me queda mejor?"), Intent::Faq { key: FaqKey::Tallas });
    }

    #[test]
    fn shipping_question_is_faq() {
        assert_eq!(classify("envíos"), Intent::Faq { key: FaqKey::Envios });
    }

    #[test]
    fn filtered_request_is_search_with_extracted_filters() {
        let intent = classify("quiero una sudadera negra de menos de 50");
        let Intent::Search { filters } = intent else {
            panic!("expected search intent");
        };
        assert_eq!(filters.category, Some(Category::Sudadera));
        assert_eq!(filters.color.as_deref(), Some("negro"));
        assert_eq!(filters.max_price, Some(Decimal::from(50)));
    }

    #[test]
    fn desire_phrase_without_filters_is_a_generic_search() {
        let intent = classify("quiero algo chulo");
        assert!(matches!(intent, Intent::Search { ref filters } if filters.is_empty()));
    }

    #[test]
    fn suit_request_searches_the_traje_category() {
        let intent = classify("necesito un traje para una boda");
        let Intent::Search { filters } = intent else {
            panic!("expected search intent");
        };
        assert_eq!(filters.category, Some(Category::Traje));
        assert_eq!(filters.occasion.as_deref(), Some("boda"));
    }

    #[test]
    fn gibberish_and_empty_input_are_unknown() {
        assert_eq!(classify("xyzzy plugh"), Intent::Unknown);
        assert_eq!(classify(""), Intent::Unknown);
        assert_eq!(classify("   "), Intent::Unknown);
    }
}
