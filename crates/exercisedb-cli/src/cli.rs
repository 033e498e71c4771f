//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use exercisedb_core::models::exercise::{DEFAULT_LIST_LIMIT, DEFAULT_SEARCH_LIMIT};

/// ExerciseDB API client
#[derive(Parser, Debug)]
#[command(name = "exercisedb")]
#[command(about = "Query the ExerciseDB fitness exercise API")]
#[command(version)]
pub struct Cli {
    /// RapidAPI key
    #[arg(long, env = "EXERCISE_DB_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Directory reference lists are cached in
    #[arg(long, value_name = "DIR", global = true)]
    pub cache_dir: Option<PathBuf>,

    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Check that the API gateway is up
    Status,

    /// Show image info for an exercise
    Image { id: String },

    /// Show a single exercise
    Exercise { id: String },

    /// Search exercises by a field, e.g. `search target biceps`
    Search {
        /// Field to filter on (name, target, equipment, bodyPart)
        filter: String,
        value: String,
        #[arg(long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
        /// Print one label per line instead of JSON
        #[arg(long)]
        names: bool,
    },

    /// List the exercise catalog
    List {
        #[arg(long, default_value_t = DEFAULT_LIST_LIMIT)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
        /// Print one label per line instead of JSON
        #[arg(long)]
        names: bool,
    },

    /// Fetch the target, equipment and body part lists
    Refs {
        /// Don't write the lists to the cache directory
        #[arg(long)]
        no_cache: bool,
    },

    /// Print a reference list from a cached JSON file
    Load { file: PathBuf },
}
