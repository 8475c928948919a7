//! End-to-end conversation scenarios against the seed catalog.

use rust_decimal::Decimal;

use atuendo_core::{Category, ChatEngine, ChatSession, Intent};

fn engine() -> ChatEngine {
    ChatEngine::with_seed_catalog()
}

#[test]
fn hola_greets_and_suggests_bestsellers() {
    let engine = engine();
    let mut session = ChatSession::new();

    let reply = engine.process_message(&mut session, "hola");

    assert!(matches!(session.last_intent, Some(Intent::Greeting)));
    assert!(reply.text.starts_with("¡Hola!"));
    assert!(reply.chips.iter().any(|chip| chip == "Lo más vendido"));
    assert!(reply.products.is_empty());
}

#[test]
fn filtered_request_returns_only_matching_products() {
    let engine = engine();
    let mut session = ChatSession::new();

    let reply = engine.process_message(&mut session, "quiero una sudadera negra de menos de 50");

    assert_eq!(session.filters.category, Some(Category::Sudadera));
    assert_eq!(session.filters.color.as_deref(), Some("negro"));
    assert_eq!(session.filters.max_price, Some(Decimal::from(50)));

    assert!(reply.total_results >= 1);
    for card in &reply.products {
        let product = engine.catalog().find(&card.id).expect("card refers to catalog product");
        assert_eq!(product.category, Category::Sudadera);
        assert!(product.price <= Decimal::from(50));
        assert!(product
            .colors
            .iter()
            .any(|color| color.to_lowercase().contains("negro")));
    }
}

#[test]
fn shipping_faq_answers_with_policy_and_link() {
    let engine = engine();
    let mut session = ChatSession::new();

    let reply = engine.process_message(&mut session, "envíos");

    assert!(matches!(
        session.last_intent,
        Some(Intent::Faq { key: atuendo_core::FaqKey::Envios })
    ));
    assert!(reply.text.contains("envíos") || reply.text.contains("Los envíos"));
    assert!(reply.text.contains("/envios"));
    assert!(reply.products.is_empty());
}

#[test]
fn gibberish_falls_back_with_suggestions() {
    let engine = engine();
    let mut session = ChatSession::new();

    let reply = engine.process_message(&mut session, "ñkjsdf qpwoeiru");

    assert!(matches!(session.last_intent, Some(Intent::Unknown)));
    assert!(reply.text.contains("No te he entendido"));
    assert!(!reply.chips.is_empty());
    assert!(reply.products.is_empty());
    assert_eq!(reply.total_results, 0);
}

#[test]
fn bestsellers_request_caps_cards_at_four() {
    let engine = engine();
    let mut session = ChatSession::new();

    let reply = engine.process_message(&mut session, "enséñame lo más vendido");

    assert!(matches!(session.last_intent, Some(Intent::Bestsellers)));
    assert_eq!(reply.products.len(), 4);
    assert!(reply.total_results > 4);
    assert!(reply.show_more.is_some());
}

#[test]
fn identical_messages_yield_identical_replies() {
    let engine = engine();

    let mut first_session = ChatSession::new();
    let mut second_session = ChatSession::new();
    let first = engine.process_message(&mut first_session, "busco zapatillas de deporte");
    let second = engine.process_message(&mut second_session, "busco zapatillas de deporte");

    assert_eq!(first, second);
}

#[test]
fn conversation_refines_filters_across_turns() {
    let engine = engine();
    let mut session = ChatSession::new();

    engine.process_message(&mut session, "busco una camiseta");
    let reply = engine.process_message(&mut session, "mejor en blanco");

    assert_eq!(session.filters.category, Some(Category::Camiseta));
    assert_eq!(session.filters.color.as_deref(), Some("blanco"));
    assert!(reply.total_results >= 1);
    for card in &reply.products {
        let product = engine.catalog().find(&card.id).expect("known product");
        assert_eq!(product.category, Category::Camiseta);
    }
}

#[test]
fn welcome_message_has_text_and_chips() {
    let reply = engine().welcome_message();
    assert!(!reply.text.is_empty());
    assert!(!reply.chips.is_empty());
}
