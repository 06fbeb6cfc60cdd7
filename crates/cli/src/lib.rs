pub mod commands;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "frota",
    about = "Frota vehicle-search assistant CLI",
    long_about = "Operate the Frota catalog: run the pt-BR chat assistant, apply migrations, \
                  load the demo inventory, and check runtime readiness.",
    after_help = "Examples:\n  frota chat\n  frota migrate\n  frota seed\n  frota doctor --json"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Start the interactive pt-BR chat assistant on stdin/stdout")]
    Chat,
    #[command(about = "Apply pending database migrations and return structured status output")]
    Migrate,
    #[command(about = "Load the deterministic demo inventory (idempotent)")]
    Seed,
    #[command(about = "Validate config and database connectivity checks")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Chat => commands::chat::run(),
        Command::Migrate => commands::migrate::run(),
        Command::Seed => commands::seed::run(),
        Command::Doctor { json } => {
            commands::CommandResult { exit_code: 0, output: commands::doctor::run(json) }
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Cli;

    #[test]
    fn parses_every_subcommand() {
        for args in [
            &["frota", "chat"][..],
            &["frota", "migrate"],
            &["frota", "seed"],
            &["frota", "doctor"],
            &["frota", "doctor", "--json"],
        ] {
            Cli::try_parse_from(args).expect("subcommand should parse");
        }
    }

    #[test]
    fn rejects_unknown_subcommands() {
        assert!(Cli::try_parse_from(["frota", "quote"]).is_err());
    }
}
