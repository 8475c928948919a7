pub mod commands;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "atuendo",
    about = "Atuendo shopping-assistant CLI",
    long_about = "Exercise the Atuendo rule engine from the terminal: one-shot questions, an \
                  interactive chat loop, catalog inspection, and effective-config review.",
    after_help = "Examples:\n  atuendo ask --text \"quiero una sudadera negra de menos de 50\"\n  atuendo chat\n  atuendo catalog --json"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Classify one message and print the composed reply")]
    Ask {
        #[arg(long, help = "Message to send to the assistant")]
        text: String,
        #[arg(long, help = "Emit the raw reply payload as JSON")]
        json: bool,
    },
    #[command(about = "Interactive chat loop on stdin/stdout")]
    Chat,
    #[command(about = "Print the seed catalog")]
    Catalog {
        #[arg(long, help = "Emit the catalog as JSON")]
        json: bool,
    },
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Ask { text, json } => commands::ask::run(&text, json),
        Command::Chat => return commands::chat::run(),
        Command::Catalog { json } => commands::catalog::run(json),
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
