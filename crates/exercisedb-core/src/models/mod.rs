//! Data models for ExerciseDB entities.
//!
//! - `Exercise`: a catalog entry as returned by the search and lookup endpoints
//! - `ListType`: the three fixed reference vocabularies
//! - `Page`: limit/offset pagination for list and search calls

pub mod exercise;
pub mod reference;

pub use exercise::{Exercise, Page};
pub use reference::{ListType, ReferenceData};
