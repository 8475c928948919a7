use std::process::ExitCode;

fn main() -> ExitCode {
    atuendo_cli::run()
}
