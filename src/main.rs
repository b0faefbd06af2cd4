use std::process::ExitCode;

use clap::Parser;
use question_bank::BankError;
use question_bank::cli::{self, Args, CommandResult};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("question_bank=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match cli::execute(&args) {
        Ok(CommandResult::Ok(output)) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Ok(CommandResult::Failed(output)) => {
            print!("{}", output);
            ExitCode::from(1)
        }
        Err(BankError::Schema(err)) => {
            eprintln!("Error: {}", err);
            for violation in &err.violations {
                eprintln!("  {}", violation);
            }
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}
