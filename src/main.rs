//! Accord CLI - Perfume Formulation Calculator
//!
//! Command-line interface for the Accord formulation engine.

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::{debug, info};

use accord::cli::{commands, Cli, Commands};
use accord::{AccordConfig, AccordError};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    info!("Accord v{}", env!("CARGO_PKG_VERSION"));

    let mut config = match &cli.config {
        Some(path) => AccordConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => AccordConfig::default(),
    };
    if let Some(path) = cli.catalog {
        config.catalog_path = Some(path);
    }

    let catalog = config.catalog().context("failed to load catalog")?;
    debug!("Catalog ready: {} notes", catalog.len());

    let result = match cli.command {
        Some(cmd) => handle_command(cmd, &catalog, &config),
        None => {
            println!("Accord v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    };

    result.map_err(|err| {
        for hint in err.recovery_suggestions() {
            eprintln!("hint: {}", hint);
        }
        anyhow::Error::new(err)
    })
}

fn handle_command(
    cmd: Commands,
    catalog: &accord::Catalog,
    config: &AccordConfig,
) -> Result<(), AccordError> {
    match cmd {
        Commands::Catalog {
            season,
            layer,
            json,
        } => commands::list_catalog(catalog, season, layer, json),
        Commands::Note { id, json } => commands::show_note(catalog, &id, json),
        Commands::Formulate {
            ids,
            skin,
            mass,
            concentration,
            json,
        } => commands::formulate(catalog, config, &ids, skin, mass, concentration, json),
        Commands::Sample {
            count,
            seed,
            with_note,
            json,
        } => commands::sample(catalog, config, count, seed, with_note.as_deref(), json),
    }
}
