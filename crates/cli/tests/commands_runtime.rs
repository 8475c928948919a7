use std::env;
use std::sync::{Mutex, OnceLock};

use atuendo_cli::commands::{ask, catalog};
use serde_json::Value;

#[test]
fn ask_renders_search_results_as_text() {
    with_env(&[], || {
        let result = ask::run("busco una sudadera negra de menos de 50 euros", false);
        assert_eq!(result.exit_code, 0, "expected successful ask run");
        assert!(result.output.contains("Sudadera"));
        assert!(result.output.contains("€"));
        assert!(result.output.contains("Sugerencias:"));
    });
}

#[test]
fn ask_json_emits_reply_payload() {
    with_env(&[], || {
        let result = ask::run("lo más vendido", true);
        assert_eq!(result.exit_code, 0);

        let payload = parse_payload(&result.output);
        assert!(payload["text"].as_str().is_some_and(|text| !text.is_empty()));
        assert!(payload["products"].as_array().is_some_and(|cards| !cards.is_empty()));
        assert!(payload["total_results"].as_u64().unwrap_or(0) >= 4);
    });
}

#[test]
fn ask_reports_config_failure_on_bad_env() {
    with_env(&[("ATUENDO_SERVER_PORT", "not-a-port")], || {
        let result = ask::run("hola", false);
        assert_eq!(result.exit_code, 2, "expected config validation failure code");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["command"], "ask");
        assert_eq!(payload["status"], "error");
        assert_eq!(payload["error_class"], "config_validation");
    });
}

#[test]
fn ask_respects_max_cards_override() {
    with_env(&[("ATUENDO_ENGINE_MAX_CARDS", "2")], || {
        let result = ask::run("novedades", true);
        assert_eq!(result.exit_code, 0);

        let payload = parse_payload(&result.output);
        let cards = payload["products"].as_array().expect("products array");
        assert!(cards.len() <= 2, "override should cap visible cards");
    });
}

#[test]
fn catalog_json_round_trips_seed_products() {
    with_env(&[], || {
        let result = catalog::run(true);
        assert_eq!(result.exit_code, 0);

        let payload = parse_payload(&result.output);
        let products = payload.as_array().expect("catalog array");
        assert_eq!(products.len(), 12);
        assert!(products.iter().any(|item| item["id"] == "zapatillas-urbanas"));
    });
}

fn parse_payload(output: &str) -> Value {
    serde_json::from_str(output).expect("command output should be valid JSON")
}

fn with_env(vars: &[(&str, &str)], test_fn: impl FnOnce()) {
    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    let _guard =
        ENV_LOCK.get_or_init(|| Mutex::new(())).lock().expect("env mutex should not be poisoned");

    let keys = [
        "ATUENDO_ENGINE_MAX_CARDS",
        "ATUENDO_ENGINE_POPULARITY_DIVISOR",
        "ATUENDO_SERVER_BIND_ADDRESS",
        "ATUENDO_SERVER_PORT",
        "ATUENDO_LOGGING_LEVEL",
        "ATUENDO_LOGGING_FORMAT",
        "ATUENDO_LOG_LEVEL",
        "ATUENDO_LOG_FORMAT",
    ];

    let previous_values: Vec<(&str, Option<String>)> =
        keys.iter().map(|key| (*key, env::var(key).ok())).collect();

    for key in &keys {
        env::remove_var(key);
    }
    for (key, value) in vars {
        env::set_var(key, value);
    }

    test_fn();

    for (key, value) in previous_values {
        if let Some(value) = value {
            env::set_var(key, value);
        } else {
            env::remove_var(key);
        }
    }
}
