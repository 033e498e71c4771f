//! REST API client module for ExerciseDB.
//!
//! This module provides the `ApiClient` for talking to the ExerciseDB API
//! on RapidAPI: status, images, reference lists and exercise search.
//!
//! Every request carries the `x-rapidapi-key` and `x-rapidapi-host`
//! headers built from [`crate::config::ExerciseConfig`].

pub mod client;

pub use client::{encode_search_value, ApiClient};
