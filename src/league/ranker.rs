//! Ranking capability and the printer that renders it
//!
//! Anything that can order team names implements [`Ranker`]; the printer only
//! depends on the trait, so alternative ranking strategies can be passed in
//! without touching it.

use crate::types::TeamName;
use std::io::{self, Write};

/// Trait for anything that produces an ordered ranking of team names
#[cfg_attr(test, mockall::automock)]
pub trait Ranker {
    /// Team names, best first
    fn ranking(&self) -> Vec<TeamName>;
}

/// Write one `"<position>. <name>"` line per ranked team, starting at 1
pub fn print_ranking<R, W>(ranker: &R, writer: &mut W) -> io::Result<()>
where
    R: Ranker + ?Sized,
    W: Write,
{
    for (index, name) in ranker.ranking().iter().enumerate() {
        writeln!(writer, "{}. {}", index + 1, name)?;
    }
    writer.flush()
}
