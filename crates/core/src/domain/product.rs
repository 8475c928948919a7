use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub String);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Camiseta,
    Sudadera,
    Pantalon,
    Vestido,
    Chaqueta,
    Zapatillas,
    Accesorio,
    Traje,
}

impl Category {
    /// Spanish display label as shown to shoppers.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Camiseta => "camiseta",
            Category::Sudadera => "sudadera",
            Category::Pantalon => "pantalón",
            Category::Vestido => "vestido",
            Category::Chaqueta => "chaqueta",
            Category::Zapatillas => "zapatillas",
            Category::Accesorio => "accesorio",
            Category::Traje => "traje",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    Nuevo,
    TopVentas,
}

impl Badge {
    pub fn label(&self) -> &'static str {
        match self {
            Badge::Nuevo => "Nuevo",
            Badge::TopVentas => "Top ventas",
        }
    }
}

/// A catalog entry. Seed data only: products are never created or mutated at
/// runtime by this engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub tags: Vec<String>,
    /// Price in EUR, major units.
    pub price: Decimal,
    /// Ordered size labels, smallest first.
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub in_stock: bool,
    pub popularity: u32,
    pub description: String,
    pub url: String,
    pub image: Option<String>,
    pub badge: Option<Badge>,
}
