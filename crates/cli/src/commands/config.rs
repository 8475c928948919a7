use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use atuendo_core::config::{AppConfig, LoadOptions};
use toml::Value;

pub fn run() -> String {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => return format!("config validation failed: {error}"),
    };

    let config_file_path = detect_config_path();
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());

    let mut lines = vec!["effective config (source precedence: env > file > default):".to_string()];

    let fields: [(&str, String, Option<&str>); 10] = [
        (
            "engine.category_bonus",
            config.engine.category_bonus.to_string(),
            None,
        ),
        ("engine.style_bonus", config.engine.style_bonus.to_string(), None),
        ("engine.occasion_bonus", config.engine.occasion_bonus.to_string(), None),
        ("engine.color_bonus", config.engine.color_bonus.to_string(), None),
        (
            "engine.popularity_divisor",
            config.engine.popularity_divisor.to_string(),
            Some("ATUENDO_ENGINE_POPULARITY_DIVISOR"),
        ),
        (
            "engine.max_cards",
            config.engine.max_cards.to_string(),
            Some("ATUENDO_ENGINE_MAX_CARDS"),
        ),
        (
            "server.bind_address",
            config.server.bind_address.clone(),
            Some("ATUENDO_SERVER_BIND_ADDRESS"),
        ),
        ("server.port", config.server.port.to_string(), Some("ATUENDO_SERVER_PORT")),
        ("logging.level", config.logging.level.clone(), Some("ATUENDO_LOGGING_LEVEL")),
        (
            "logging.format",
            format!("{:?}", config.logging.format),
            Some("ATUENDO_LOGGING_FORMAT"),
        ),
    ];

    for (key, value, env_key) in fields {
        lines.push(render_line(
            key,
            &value,
            field_source(key, env_key, config_file_doc.as_ref(), config_file_path.as_deref()),
        ));
    }

    lines.join("\n")
}

fn detect_config_path() -> Option<PathBuf> {
    let root = PathBuf::from("atuendo.toml");
    if root.exists() {
        return Some(root);
    }

    let nested = PathBuf::from("config/atuendo.toml");
    if nested.exists() {
        return Some(nested);
    }

    None
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_key: Option<&str>,
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    if let Some(env_key) = env_key {
        if env::var_os(env_key).is_some() {
            return format!("env ({env_key})");
        }
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}

#[cfg(test)]
mod tests {
    use super::contains_path;
    use toml::Value;

    #[test]
    fn contains_path_walks_nested_tables() {
        let doc: Value = "[engine]\nmax_cards = 6".parse().expect("toml");
        assert!(contains_path(&doc, "engine.max_cards"));
        assert!(!contains_path(&doc, "engine.color_bonus"));
        assert!(!contains_path(&doc, "server.port"));
    }
}
