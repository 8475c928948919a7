use atuendo_core::Catalog;

use crate::commands::CommandResult;

pub fn run(json: bool) -> CommandResult {
    let catalog = Catalog::seed();

    if json {
        return match serde_json::to_string_pretty(catalog.products()) {
            Ok(payload) => CommandResult { exit_code: 0, output: payload },
            Err(error) => CommandResult::failure("catalog", "serialization", error.to_string(), 4),
        };
    }

    let mut lines = vec![format!("seed catalog ({} products):", catalog.products().len())];
    for product in catalog.products() {
        let stock = if product.in_stock { "" } else { " [agotado]" };
        lines.push(format!(
            "- {} | {} | {} | {}€ | popularidad {}{}",
            product.id.0,
            product.name,
            product.category.label(),
            product.price,
            product.popularity,
            stock,
        ));
    }

    CommandResult { exit_code: 0, output: lines.join("\n") }
}
