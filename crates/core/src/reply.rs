//! Reply payloads and canned response templates.
//!
//! The composer maps an intent plus ranked results to a display payload:
//! text, quick-reply chips, and at most `max_cards` product cards. It never
//! renders anything itself; the hosting surface (CLI, HTTP client) owns
//! presentation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::product::{Badge, Product, ProductId};
use crate::faq::{self, FaqKey};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub url: String,
    pub image: Option<String>,
    pub badge: Option<Badge>,
}

impl ProductCard {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            url: product.url.clone(),
            image: product.image.clone(),
            badge: product.badge,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub text: String,
    /// Suggested quick replies the surface can offer as buttons.
    pub chips: Vec<String>,
    pub products: Vec<ProductCard>,
    pub total_results: usize,
    /// "Ver N más" label when results were truncated to the card limit.
    pub show_more: Option<String>,
}

impl ChatReply {
    fn text_only(text: impl Into<String>, chips: &[&str]) -> Self {
        Self {
            text: text.into(),
            chips: chips.iter().map(|chip| chip.to_string()).collect(),
            products: Vec::new(),
            total_results: 0,
            show_more: None,
        }
    }

    fn with_products(
        text: impl Into<String>,
        chips: &[&str],
        results: &[&Product],
        max_cards: usize,
    ) -> Self {
        let total_results = results.len();
        let hidden = total_results.saturating_sub(max_cards);
        Self {
            text: text.into(),
            chips: chips.iter().map(|chip| chip.to_string()).collect(),
            products: results.iter().take(max_cards).map(|p| ProductCard::from_product(p)).collect(),
            total_results,
            show_more: (hidden > 0).then(|| format!("Ver {hidden} más")),
        }
    }
}

const DEFAULT_CHIPS: &[&str] = &["Lo más vendido", "Novedades", "Busco una sudadera", "Envíos"];

pub fn greeting() -> ChatReply {
    ChatReply::text_only(
        "¡Hola! Soy el asistente de la tienda. Puedo buscar ropa por estilo, color o precio, \
         enseñarte lo más vendido o resolver dudas de envíos y devoluciones.",
        DEFAULT_CHIPS,
    )
}

pub fn thanks() -> ChatReply {
    ChatReply::text_only(
        "¡De nada! Si necesitas algo más, aquí estoy.",
        &["Lo más vendido", "Novedades"],
    )
}

pub fn help() -> ChatReply {
    ChatReply::text_only(
        "Puedo buscar productos (\"quiero una sudadera negra de menos de 50\"), enseñarte lo más \
         vendido o las novedades, y responder dudas de envíos, devoluciones, tallas y pagos.",
        DEFAULT_CHIPS,
    )
}

pub fn unknown() -> ChatReply {
    ChatReply::text_only(
        "No te he entendido del todo. Prueba a decirme qué buscas, por ejemplo \"busco unas \
         zapatillas blancas\".",
        DEFAULT_CHIPS,
    )
}

pub fn bestsellers(results: &[&Product], max_cards: usize) -> ChatReply {
    ChatReply::with_products(
        "Estos son los productos más vendidos ahora mismo:",
        &["Novedades", "Busco una camiseta", "Envíos"],
        results,
        max_cards,
    )
}

pub fn new_arrivals(results: &[&Product], max_cards: usize) -> ChatReply {
    ChatReply::with_products(
        "Acaban de llegar estas novedades:",
        &["Lo más vendido", "Busco una sudadera"],
        results,
        max_cards,
    )
}

pub fn faq(key: FaqKey) -> ChatReply {
    let entry = faq::entry(key);
    ChatReply::text_only(
        format!("{} Más información en {}", entry.answer, entry.link),
        &["Envíos", "Devoluciones", "Guía de tallas", "Formas de pago"],
    )
}

pub fn search(results: &[&Product], max_cards: usize) -> ChatReply {
    if results.is_empty() {
        return ChatReply::text_only(
            "No he encontrado nada con esos filtros. Prueba con otro color, sube el presupuesto \
             o quita algún filtro.",
            &["Lo más vendido", "Novedades", "Quitar filtros"],
        );
    }

    let text = if results.len() == 1 {
        "He encontrado 1 artículo que encaja contigo:".to_string()
    } else {
        format!("He encontrado {} artículos que encajan contigo:", results.len())
    };
    ChatReply::with_products(text, &["Ver más baratos", "Otro color", "Novedades"], results, max_cards)
}

pub fn welcome() -> ChatReply {
    ChatReply::text_only(
        "¡Hola! ¿Qué estás buscando hoy? Puedo recomendarte ropa o resolver dudas de la tienda.",
        DEFAULT_CHIPS,
    )
}
