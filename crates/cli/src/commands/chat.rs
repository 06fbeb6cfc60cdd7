use std::io::{self, BufRead, Write};
use std::sync::Arc;

use crate::commands::CommandResult;
use frota_agent::AgentRuntime;
use frota_core::config::{AppConfig, LoadOptions};
use frota_db::{connect_with_settings, migrations, SqlVehicleRepository};

/// Any of these words on a line of its own ends the session.
const EXIT_WORDS: &[&str] = &["sair", "quit", "exit", "tchau"];

const BANNER: &str = "Olá! Sou o assistente da Frota. Me diga o que você procura \
                      (por exemplo \"nissan 2022\" ou \"carros até 80 mil\"). \
                      Digite \"sair\" para encerrar.";

const FAREWELL: &str = "Até logo! Volte quando quiser.";

pub fn run() -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "chat",
                "config_validation",
                format!("configuration issue: {error}"),
                2,
            );
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(error) => {
            return CommandResult::failure(
                "chat",
                "runtime_init",
                format!("failed to initialize async runtime: {error}"),
                3,
            );
        }
    };

    let agent = match runtime.block_on(async {
        let pool = connect_with_settings(
            &config.database.url,
            config.database.max_connections,
            config.database.timeout_secs,
        )
        .await
        .map_err(|error| ("db_connectivity", error.to_string(), 4u8))?;
        migrations::run_pending(&pool)
            .await
            .map_err(|error| ("migration", error.to_string(), 5u8))?;
        Ok::<AgentRuntime, (&'static str, String, u8)>(AgentRuntime::new(Arc::new(
            SqlVehicleRepository::new(pool),
        )))
    }) {
        Ok(agent) => agent,
        Err((error_class, message, exit_code)) => {
            return CommandResult::failure("chat", error_class, message, exit_code);
        }
    };

    println!("{BANNER}\n");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(error) => {
                return CommandResult::failure("chat", "stdin", error.to_string(), 7);
            }
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if is_exit_word(input) {
            break;
        }

        let reply = runtime.block_on(agent.handle_turn(input));
        println!("{reply}\n");
        let _ = io::stdout().flush();
    }

    CommandResult::success("chat", FAREWELL)
}

fn is_exit_word(input: &str) -> bool {
    let normalized = input.to_lowercase();
    EXIT_WORDS.contains(&normalized.as_str())
}
