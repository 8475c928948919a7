//! The chat engine façade: classify, extract, rank, compose.
//!
//! `ChatEngine` is immutable after construction; all conversational state
//! lives in the caller-owned [`ChatSession`] threaded through
//! [`ChatEngine::process_message`]. Replies are a pure function of
//! (catalog, config, session, text).

use crate::catalog::{Catalog, ScoringWeights};
use crate::domain::filters::FilterState;
use crate::domain::product::{Category, Product};
use crate::domain::session::ChatSession;
use crate::errors::DomainError;
use crate::intent::{self, Intent};
use crate::reply::{self, ChatReply};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig {
    pub weights: ScoringWeights,
    /// Upper bound on product cards per reply.
    pub max_cards: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { weights: ScoringWeights::default(), max_cards: 4 }
    }
}

#[derive(Clone, Debug)]
pub struct ChatEngine {
    catalog: Catalog,
    config: EngineConfig,
}

impl ChatEngine {
    pub fn new(catalog: Catalog, config: EngineConfig) -> Result<Self, DomainError> {
        if config.max_cards == 0 {
            return Err(DomainError::InvariantViolation(
                "engine max_cards must be greater than zero".to_string(),
            ));
        }
        if config.weights.popularity_divisor <= 0.0 {
            return Err(DomainError::InvariantViolation(
                "engine popularity_divisor must be positive".to_string(),
            ));
        }
        Ok(Self { catalog, config })
    }

    pub fn with_seed_catalog() -> Self {
        Self { catalog: Catalog::seed(), config: EngineConfig::default() }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Handle one user message: classify the intent, run the matching
    /// pipeline, compose the reply, and update the session.
    pub fn process_message(&self, session: &mut ChatSession, text: &str) -> ChatReply {
        let intent = intent::classify(text);
        let reply = match &intent {
            Intent::Greeting => reply::greeting(),
            Intent::Thanks => reply::thanks(),
            Intent::Help => reply::help(),
            Intent::Bestsellers => {
                let results = self.catalog.popular(usize::MAX);
                reply::bestsellers(&results, self.config.max_cards)
            }
            Intent::NewArrivals => {
                let results = self.catalog.new_arrivals(usize::MAX);
                reply::new_arrivals(&results, self.config.max_cards)
            }
            Intent::Faq { key } => reply::faq(*key),
            Intent::Search { filters } => {
                let merged = filters.merged_over(&session.filters);
                let results = self.catalog.search(&merged, &self.config.weights);
                session.filters = merged;
                session.last_result_ids =
                    results.iter().map(|product| product.id.clone()).collect();
                reply::search(&results, self.config.max_cards)
            }
            Intent::Unknown => reply::unknown(),
        };

        session.record_turn(text, &intent, &reply.text);
        session.last_intent = Some(intent);
        reply
    }

    pub fn welcome_message(&self) -> ChatReply {
        reply::welcome()
    }

    pub fn popular_products(&self, count: usize) -> Vec<&Product> {
        self.catalog.popular(count)
    }

    pub fn new_products(&self, count: usize) -> Vec<&Product> {
        self.catalog.new_arrivals(count)
    }

    pub fn search_products(&self, filters: &FilterState) -> Vec<&Product> {
        self.catalog.search(filters, &self.config.weights)
    }

    pub fn category_products(&self, category: Category, count: usize) -> Vec<&Product> {
        self.catalog.by_category(category, count)
    }
}

impl Default for ChatEngine {
    fn default() -> Self {
        Self::with_seed_catalog()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::catalog::DEFAULT_WEIGHTS;

    #[test]
    fn zero_max_cards_is_rejected() {
        let config = EngineConfig { weights: DEFAULT_WEIGHTS, max_cards: 0 };
        assert!(matches!(
            ChatEngine::new(Catalog::seed(), config),
            Err(DomainError::InvariantViolation(_))
        ));
    }

    #[test]
    fn greeting_turn_does_not_touch_carried_filters() {
        let engine = ChatEngine::with_seed_catalog();
        let mut session = ChatSession::new();

        engine.process_message(&mut session, "quiero una sudadera negra");
        assert!(!session.filters.is_empty());
        let carried = session.filters.clone();

        engine.process_message(&mut session, "hola");
        assert_eq!(session.filters, carried);
        assert_eq!(session.turn_count(), 2);
    }

    #[test]
    fn later_turns_refine_carried_filters() {
        let engine = ChatEngine::with_seed_catalog();
        let mut session = ChatSession::new();

        engine.process_message(&mut session, "quiero una sudadera");
        let reply = engine.process_message(&mut session, "negra y de menos de 50");

        assert_eq!(session.filters.color.as_deref(), Some("negro"));
        assert_eq!(session.filters.max_price, Some(Decimal::from(50)));
        assert_eq!(
            session.filters.category,
            Some(Category::Sudadera),
            "category must carry over from the first turn"
        );
        assert!(reply.total_results >= 1);
        for card in &reply.products {
            assert!(card.price <= Decimal::from(50));
        }
    }

    #[test]
    fn search_records_result_ids_in_session() {
        let engine = ChatEngine::with_seed_catalog();
        let mut session = ChatSession::new();

        engine.process_message(&mut session, "busco zapatillas");
        assert!(!session.last_result_ids.is_empty());
        assert!(matches!(session.last_intent, Some(Intent::Search { .. })));
    }
}
