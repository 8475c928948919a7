//! In-memory product catalog and scored search.
//!
//! Ranking is a pure function of (catalog, filters, weights): hard filters
//! exclude, soft bonuses add up, and the final sort breaks ties explicitly
//! (score desc, popularity desc, id asc) so identical inputs always yield
//! identical order.

use rust_decimal::Decimal;

use crate::domain::filters::FilterState;
use crate::domain::product::{Badge, Category, Product, ProductId};
use crate::lexicon::fold;

/// Additive bonus weights for soft filter matches, plus the divisor applied
/// to raw popularity for the baseline score.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoringWeights {
    pub category_bonus: f64,
    pub style_bonus: f64,
    pub occasion_bonus: f64,
    pub color_bonus: f64,
    pub popularity_divisor: f64,
}

/// Canonical scoring policy. Popularity is divided so it stays a baseline
/// and never outranks an explicit filter match.
pub const DEFAULT_WEIGHTS: ScoringWeights = ScoringWeights {
    category_bonus: 50.0,
    style_bonus: 30.0,
    occasion_bonus: 25.0,
    color_bonus: 20.0,
    popularity_divisor: 10.0,
};

impl Default for ScoringWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

#[derive(Clone, Debug)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The canonical seed catalog.
    pub fn seed() -> Self {
        Self::new(seed_products())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, product_id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == product_id)
    }

    /// Hard-filter then score and rank the catalog against `filters`.
    pub fn search(&self, filters: &FilterState, weights: &ScoringWeights) -> Vec<&Product> {
        let mut scored: Vec<(f64, &Product)> = self
            .products
            .iter()
            .filter(|product| passes_hard_filters(product, filters))
            .map(|product| (score(product, filters, weights), product))
            .collect();

        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| b.1.popularity.cmp(&a.1.popularity))
                .then_with(|| a.1.id.cmp(&b.1.id))
        });
        scored.into_iter().map(|(_, product)| product).collect()
    }

    /// In-stock products by descending popularity.
    pub fn popular(&self, count: usize) -> Vec<&Product> {
        let mut products: Vec<&Product> =
            self.products.iter().filter(|product| product.in_stock).collect();
        products.sort_by(|a, b| {
            b.popularity.cmp(&a.popularity).then_with(|| a.id.cmp(&b.id))
        });
        products.truncate(count);
        products
    }

    /// In-stock new arrivals (badge `Nuevo`, or a "nuevo" tag on unbadged
    /// seed rows) by descending popularity.
    pub fn new_arrivals(&self, count: usize) -> Vec<&Product> {
        let mut products: Vec<&Product> = self
            .products
            .iter()
            .filter(|product| product.in_stock && is_new(product))
            .collect();
        products.sort_by(|a, b| {
            b.popularity.cmp(&a.popularity).then_with(|| a.id.cmp(&b.id))
        });
        products.truncate(count);
        products
    }

    /// In-stock members of one category by descending popularity.
    pub fn by_category(&self, category: Category, count: usize) -> Vec<&Product> {
        let mut products: Vec<&Product> = self
            .products
            .iter()
            .filter(|product| product.in_stock && product.category == category)
            .collect();
        products.sort_by(|a, b| {
            b.popularity.cmp(&a.popularity).then_with(|| a.id.cmp(&b.id))
        });
        products.truncate(count);
        products
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seed()
    }
}

fn is_new(product: &Product) -> bool {
    product.badge == Some(Badge::Nuevo) || product.tags.iter().any(|tag| tag == "nuevo")
}

fn passes_hard_filters(product: &Product, filters: &FilterState) -> bool {
    if !product.in_stock {
        return false;
    }
    if let Some(category) = filters.category {
        if product.category != category {
            return false;
        }
    }
    if let Some(max_price) = filters.max_price {
        if product.price > max_price {
            return false;
        }
    }
    if let Some(size) = &filters.size {
        if !product.sizes.iter().any(|label| label.eq_ignore_ascii_case(size)) {
            return false;
        }
    }
    if let Some(color) = &filters.color {
        if !color_matches(product, color) {
            return false;
        }
    }
    true
}

/// Substring match on folded color names, so a product in "azul marino"
/// satisfies the filter "azul".
fn color_matches(product: &Product, color: &str) -> bool {
    let wanted = fold(color);
    product.colors.iter().any(|product_color| fold(product_color).contains(&wanted))
}

fn score(product: &Product, filters: &FilterState, weights: &ScoringWeights) -> f64 {
    let mut total = f64::from(product.popularity) / weights.popularity_divisor;

    if filters.category.is_some_and(|category| product.category == category) {
        total += weights.category_bonus;
    }
    if let Some(style) = &filters.style {
        if tag_matches(product, style) {
            total += weights.style_bonus;
        }
    }
    if let Some(occasion) = &filters.occasion {
        if tag_matches(product, occasion) {
            total += weights.occasion_bonus;
        }
    }
    if let Some(color) = &filters.color {
        if color_matches(product, color) {
            total += weights.color_bonus;
        }
    }
    total
}

fn tag_matches(product: &Product, wanted: &str) -> bool {
    let wanted = fold(wanted);
    product.tags.iter().any(|tag| fold(tag).contains(&wanted))
}

fn eur(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    category: Category,
    tags: &[&str],
    price_cents: i64,
    sizes: &[&str],
    colors: &[&str],
    in_stock: bool,
    popularity: u32,
    description: &str,
    badge: Option<Badge>,
) -> Product {
    Product {
        id: ProductId(id.to_string()),
        name: name.to_string(),
        category,
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        price: eur(price_cents),
        sizes: sizes.iter().map(|size| size.to_string()).collect(),
        colors: colors.iter().map(|color| color.to_string()).collect(),
        in_stock,
        popularity,
        description: description.to_string(),
        url: format!("/producto/{id}"),
        image: Some(format!("/img/{id}.webp")),
        badge,
    }
}

fn seed_products() -> Vec<Product> {
    vec![
        product(
            "camiseta-basica",
            "Camiseta Básica Orgánica",
            Category::Camiseta,
            &["casual", "diario", "basico"],
            19_90,
            &["XS", "S", "M", "L", "XL", "XXL"],
            &["blanco", "negro", "gris"],
            true,
            88,
            "Algodón orgánico de gramaje medio, corte regular.",
            Some(Badge::TopVentas),
        ),
        product(
            "camiseta-grafica",
            "Camiseta Gráfica Street",
            Category::Camiseta,
            &["urbano", "street"],
            24_90,
            &["S", "M", "L", "XL"],
            &["negro", "blanco"],
            true,
            72,
            "Estampado frontal serigrafiado, corte holgado.",
            Some(Badge::Nuevo),
        ),
        product(
            "sudadera-oversize",
            "Sudadera Capucha Oversize",
            Category::Sudadera,
            &["urbano", "casual", "oversize"],
            44_90,
            &["S", "M", "L", "XL"],
            &["negro", "gris"],
            true,
            91,
            "Felpa perchada pesada con capucha forrada.",
            Some(Badge::TopVentas),
        ),
        product(
            "sudadera-tecnica",
            "Sudadera Técnica Running",
            Category::Sudadera,
            &["deporte", "running"],
            39_90,
            &["S", "M", "L"],
            &["azul marino", "negro"],
            true,
            64,
            "Tejido transpirable de secado rápido con bolsillo trasero.",
            None,
        ),
        product(
            "pantalon-chino",
            "Pantalón Chino Slim",
            Category::Pantalon,
            &["casual", "trabajo"],
            39_90,
            &["S", "M", "L", "XL"],
            &["beige", "azul marino"],
            true,
            70,
            "Sarga elástica, corte slim con bajo ajustado.",
            None,
        ),
        product(
            "vaqueros-rectos",
            "Vaqueros Rectos",
            Category::Pantalon,
            &["casual", "diario"],
            49_90,
            &["S", "M", "L", "XL", "XXL"],
            &["azul"],
            true,
            77,
            "Denim rígido de pierna recta, tiro medio.",
            None,
        ),
        product(
            "vestido-midi",
            "Vestido Midi Fiesta",
            Category::Vestido,
            &["elegante", "fiesta", "boda"],
            59_90,
            &["XS", "S", "M", "L"],
            &["rojo", "negro"],
            true,
            69,
            "Satén fluido con abertura lateral y tirante fino.",
            None,
        ),
        product(
            "chaqueta-bomber",
            "Chaqueta Bomber",
            Category::Chaqueta,
            &["urbano", "street"],
            69_90,
            &["S", "M", "L", "XL"],
            &["verde oliva", "negro"],
            false,
            58,
            "Nailon acolchado con puños de canalé.",
            None,
        ),
        product(
            "zapatillas-urbanas",
            "Zapatillas Urbanas",
            Category::Zapatillas,
            &["urbano", "diario"],
            64_90,
            &["40", "41", "42", "43", "44"],
            &["blanco"],
            true,
            95,
            "Piel vegana con suela de goma vulcanizada.",
            Some(Badge::TopVentas),
        ),
        product(
            "zapatillas-running",
            "Zapatillas Running Ligeras",
            Category::Zapatillas,
            &["deporte", "running"],
            79_90,
            &["40", "41", "42", "43", "44", "45"],
            &["azul", "gris"],
            true,
            82,
            "Mediasuela de espuma reactiva, 240 gramos.",
            Some(Badge::Nuevo),
        ),
        product(
            "traje-dos-piezas",
            "Traje Slim Dos Piezas",
            Category::Traje,
            &["elegante", "boda", "trabajo"],
            149_90,
            &["S", "M", "L", "XL"],
            &["azul marino", "gris"],
            true,
            45,
            "Lana fría con americana de dos botones y pantalón de pinzas.",
            None,
        ),
        product(
            "gorra-logo",
            "Gorra Logo",
            Category::Accesorio,
            &["urbano", "casual"],
            14_90,
            &["U"],
            &["negro", "beige"],
            true,
            60,
            "Visera curva con cierre ajustable.",
            Some(Badge::Nuevo),
        ),
    ]
}
