//! HTTP adapter around `darsana-core`.
//!
//! Accepts two texts and the scoring parameters, normalizes the texts,
//! scores them and returns the score map as JSON. No state is shared
//! between requests.

pub mod api;
pub mod config;
