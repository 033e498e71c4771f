//! Client library for the ExerciseDB fitness exercise API.
//!
//! - [`api::ApiClient`]: typed GET calls with RapidAPI auth headers
//! - [`cache::ReferenceCache`]: reference lists held in memory, mirrored to JSON on demand
//! - [`ExerciseDb`]: both of the above behind one handle
//!
//! ```no_run
//! # async fn run() -> exercisedb_core::Result<()> {
//! use exercisedb_core::{ExerciseConfig, ExerciseDb, Page};
//!
//! let mut db = ExerciseDb::new(ExerciseConfig::new("my-rapidapi-key"))?;
//! let refs = db.fetch_all_reference_data(false).await?;
//! let hits = db.search_exercises("name", "push up", Page::search_default()).await?;
//! # let _ = (refs, hits);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use api::{encode_search_value, ApiClient};
pub use cache::ReferenceCache;
pub use client::ExerciseDb;
pub use config::ExerciseConfig;
pub use error::{CacheWriteSource, ExerciseDbError, Result};
pub use models::{Exercise, ListType, Page, ReferenceData};
