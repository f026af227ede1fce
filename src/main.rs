use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufReader};
use virtual_pet::core::ConfigProvider;
use virtual_pet::utils::error::ErrorSeverity;
use virtual_pet::utils::logger;
use virtual_pet::{load_or_create, CliConfig, Console, JsonFileStore, PetSession, Shell};

fn main() -> anyhow::Result<()> {
    let config = match CliConfig::parse().resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if config.json_logs {
        logger::init_json_logger(config.log_level.as_deref());
    } else {
        logger::init_cli_logger(config.verbose, config.log_level.as_deref());
    }

    tracing::info!("Starting virtual-pet");
    tracing::debug!("CLI config: {:?}", config);

    let store = JsonFileStore::new(config.save_file());
    let mut console = Console::new(BufReader::new(io::stdin()), io::stdout());

    let pet = match load_or_create(&mut console, &store, config.default_name()) {
        Ok(Some(pet)) => pet,
        Ok(None) => return Ok(()),
        Err(e) => {
            tracing::error!(
                "❌ Could not start: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            let exit_code = if e.severity() >= ErrorSeverity::High { 3 } else { 1 };
            std::process::exit(exit_code);
        }
    };

    let rng = match config.seed() {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let session = PetSession::new(pet, rng);
    let mut shell = Shell::new(console, session, store);
    shell.run().context("interactive session failed")?;

    let (_, session) = shell.into_parts();
    tracing::info!(
        pet = %session.pet().name(),
        stars = session.stars(),
        "session finished"
    );
    Ok(())
}
