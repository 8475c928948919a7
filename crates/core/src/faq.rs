//! Static keyword-triggered answers for store policy questions.
//!
//! The table order is the scan priority: the first entry with a keyword hit
//! claims the message. FAQ runs before product search in the intent cascade,
//! so size-guide wording ("talla") resolves here rather than as a filter.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaqKey {
    Envios,
    Devoluciones,
    Tallas,
    Pagos,
    Horario,
}

pub struct FaqEntry {
    pub key: FaqKey,
    pub keywords: &'static [&'static str],
    pub answer: &'static str,
    pub link: &'static str,
}

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        key: FaqKey::Envios,
        keywords: &["envio", "envios", "entrega", "cuanto tarda", "gastos de envio"],
        answer: "Los envíos son gratis a partir de 40€ y tardan 24-72h en península.",
        link: "/envios",
    },
    FaqEntry {
        key: FaqKey::Devoluciones,
        keywords: &["devolucion", "devoluciones", "devolver", "reembolso", "cambiar"],
        answer: "Tienes 30 días para devoluciones y cambios gratuitos desde la entrega.",
        link: "/devoluciones",
    },
    FaqEntry {
        key: FaqKey::Tallas,
        keywords: &["talla", "tallas", "guia de tallas", "medidas", "me queda"],
        answer: "Cada ficha de producto incluye su tabla de medidas; si dudas entre dos tallas, elige la mayor.",
        link: "/guia-tallas",
    },
    FaqEntry {
        key: FaqKey::Pagos,
        keywords: &["pago", "pagos", "tarjeta", "paypal", "bizum", "formas de pago"],
        answer: "Aceptamos tarjeta, PayPal y Bizum; el cobro se realiza al confirmar el pedido.",
        link: "/pagos",
    },
    FaqEntry {
        key: FaqKey::Horario,
        keywords: &["horario", "atencion al cliente", "contacto", "telefono", "hablar con"],
        answer: "Atención al cliente de lunes a viernes, de 9:00 a 18:00.",
        link: "/contacto",
    },
];

/// First entry whose any keyword appears in the folded message.
pub fn match_entry(folded: &str) -> Option<&'static FaqEntry> {
    FAQ_ENTRIES
        .iter()
        .find(|entry| entry.keywords.iter().any(|keyword| folded.contains(keyword)))
}

pub fn entry(key: FaqKey) -> &'static FaqEntry {
    FAQ_ENTRIES
        .iter()
        .find(|entry| entry.key == key)
        .unwrap_or(&FAQ_ENTRIES[0])
}
