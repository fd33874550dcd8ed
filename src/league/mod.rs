//! League table and ranking
//!
//! This module provides the in-memory league table, the [`Ranker`] trait and
//! the printer that renders any ranking as numbered lines.

pub mod ranker;
pub mod table;

// Re-export commonly used types
pub use ranker::{print_ranking, Ranker};
pub use table::League;
