//! Atuendo core - deterministic shopping-assistant rule engine
//!
//! Everything in this crate is synchronous and pure: a static product
//! catalog, keyword lexicons, a priority-cascade intent classifier, a
//! weighted product ranker, and a response composer. Conversational state is
//! an explicit [`domain::session::ChatSession`] value owned by the caller.
//!
//! # Pipeline
//!
//! 1. **Intent classification** (`intent`) - free text → tagged [`Intent`]
//! 2. **Filter extraction** (`lexicon`) - synonym tables → [`FilterState`]
//! 3. **Ranking** (`catalog`) - hard filters + additive bonus scoring
//! 4. **Composition** (`reply`) - intent + results → display payload
//!
//! There are no error paths inside the pipeline: unmatched input degrades to
//! the `unknown` intent and a fallback reply.

pub mod catalog;
pub mod config;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod faq;
pub mod intent;
pub mod lexicon;
pub mod reply;

pub use catalog::{Catalog, ScoringWeights, DEFAULT_WEIGHTS};
pub use domain::filters::FilterState;
pub use domain::product::{Badge, Category, Product, ProductId};
pub use domain::session::{ChatSession, Turn};
pub use engine::{ChatEngine, EngineConfig};
pub use errors::DomainError;
pub use faq::{FaqEntry, FaqKey};
pub use intent::Intent;
pub use reply::{ChatReply, ProductCard};
