//! League Table - ranks teams by wins from reported match results
//!
//! This crate provides an in-memory league table with roster-order
//! tie-breaking, a pluggable ranking trait and a plain-text printer.

pub mod config;
pub mod error;
pub mod league;
pub mod types;

// Re-export commonly used types and traits
pub use error::{LeagueError, Result};
pub use types::*;

// Re-export key components
pub use league::{print_ranking, League, Ranker};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
