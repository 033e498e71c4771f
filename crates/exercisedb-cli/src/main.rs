//! exercisedb - command-line access to the ExerciseDB API.
//!
//! Every command prints pretty JSON on stdout. Configuration comes from the
//! environment (optionally a `.env` file) and the global flags.

mod cli;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use exercisedb_core::config::API_KEY_VAR;
use exercisedb_core::{Exercise, ExerciseConfig, ExerciseDb, Page};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Command};

/// Initialize the tracing subscriber for logging
fn init_tracing(verbose: bool) {
    // RUST_LOG wins over --verbose when set
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn build_config(cli: &Cli) -> Result<ExerciseConfig> {
    let mut config = ExerciseConfig::from_lookup(|name| {
        if name == API_KEY_VAR {
            cli.api_key.clone()
        } else {
            std::env::var(name).ok()
        }
    })?;
    if let Some(ref dir) = cli.cache_dir {
        config = config.with_cache_dir(dir);
    }
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// One `display_name` per line, for `--names` output
fn name_lines(exercises: &[Exercise]) -> String {
    exercises
        .iter()
        .map(Exercise::display_name)
        .collect::<Vec<_>>()
        .join("\n")
}

fn print_exercises(exercises: &[Exercise], names: bool) -> Result<()> {
    if names {
        if !exercises.is_empty() {
            println!("{}", name_lines(exercises));
        }
        Ok(())
    } else {
        print_json(&exercises)
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = build_config(&cli)?;
    debug!(base_url = %config.base_url(), cache_dir = %config.cache_dir.display(), "Configuration loaded");
    let mut db = ExerciseDb::new(config)?;

    match cli.command {
        Command::Status => print_json(&db.check_status().await?),
        Command::Image { id } => print_json(&db.get_exercise_image(&id).await?),
        Command::Exercise { id } => print_json(&db.get_exercise_by_id(&id).await?),
        Command::Search {
            filter,
            value,
            limit,
            offset,
            names,
        } => {
            let results = db
                .search_exercises(&filter, &value, Page::new(limit, offset))
                .await?;
            info!(count = results.len(), "Search complete");
            print_exercises(&results, names)
        }
        Command::List {
            limit,
            offset,
            names,
        } => print_exercises(&db.list_all_exercises(Page::new(limit, offset)).await?, names),
        Command::Refs { no_cache } => {
            let data = db.fetch_all_reference_data(!no_cache).await?;
            if !no_cache {
                eprintln!("Cached to {}", db.config().cache_dir.display());
            }
            print_json(&data)
        }
        Command::Load { file } => {
            let list = db
                .load_reference_from_file(&file)
                .with_context(|| format!("Could not load {}", file.display()))?;
            print_json(&list)
        }
    }
}

#[tokio::main]
async fn main() {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
