use atuendo_core::config::{AppConfig, LoadOptions};
use atuendo_core::{Catalog, ChatEngine, ChatSession};

use crate::commands::CommandResult;

pub fn run(text: &str, json: bool) -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "ask",
                "config_validation",
                format!("configuration issue: {error}"),
                2,
            );
        }
    };

    let engine = match ChatEngine::new(Catalog::seed(), config.engine.to_engine_config()) {
        Ok(engine) => engine,
        Err(error) => {
            return CommandResult::failure("ask", "engine_init", error.to_string(), 3);
        }
    };

    let mut session = ChatSession::new();
    let reply = engine.process_message(&mut session, text);

    if json {
        return match serde_json::to_string_pretty(&reply) {
            Ok(payload) => CommandResult { exit_code: 0, output: payload },
            Err(error) => CommandResult::failure("ask", "serialization", error.to_string(), 4),
        };
    }

    CommandResult { exit_code: 0, output: render_reply(&reply) }
}

fn render_reply(reply: &atuendo_core::ChatReply) -> String {
    let mut lines = vec![reply.text.clone()];

    for card in &reply.products {
        lines.push(format!("  - {} | {}€ | {}", card.name, card.price, card.url));
    }
    if let Some(show_more) = &reply.show_more {
        lines.push(format!("  … {show_more}"));
    }
    if !reply.chips.is_empty() {
        lines.push(format!("Sugerencias: {}", reply.chips.join(" | ")));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::render_reply;
    use atuendo_core::{ChatEngine, ChatSession};

    #[test]
    fn rendered_reply_lists_cards_and_chips() {
        let engine = ChatEngine::with_seed_catalog();
        let mut session = ChatSession::new();
        let reply = engine.process_message(&mut session, "busco una camiseta");

        let rendered = render_reply(&reply);
        assert!(rendered.contains("Camiseta"));
        assert!(rendered.contains("Sugerencias:"));
    }
}
