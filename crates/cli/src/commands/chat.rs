use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use atuendo_core::config::{AppConfig, LoadOptions};
use atuendo_core::{Catalog, ChatEngine, ChatReply, ChatSession};

/// Interactive stdin/stdout loop. One session lives for the whole process;
/// filters refine across turns exactly as they would in the web widget.
pub fn run() -> ExitCode {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("configuration issue: {error}");
            return ExitCode::from(2);
        }
    };

    let engine = match ChatEngine::new(Catalog::seed(), config.engine.to_engine_config()) {
        Ok(engine) => engine,
        Err(error) => {
            eprintln!("engine init failed: {error}");
            return ExitCode::from(3);
        }
    };

    let mut session = ChatSession::new();
    print_reply(&engine.welcome_message());

    let stdin = io::stdin();
    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if matches!(text, "salir" | "exit" | "quit") {
            println!("¡Hasta pronto!");
            break;
        }

        let reply = engine.process_message(&mut session, text);
        print_reply(&reply);
    }

    ExitCode::SUCCESS
}

fn print_reply(reply: &ChatReply) {
    println!("{}", reply.text);
    for card in &reply.products {
        println!("  - {} | {}€ | {}", card.name, card.price, card.url);
    }
    if let Some(show_more) = &reply.show_more {
        println!("  ({show_more})");
    }
    if !reply.chips.is_empty() {
        println!("[{}]", reply.chips.join("] ["));
    }
}
