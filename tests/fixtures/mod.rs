//! Test fixtures shared by the integration tests

use league_table::{League, Ranker, Team, TeamName};
use std::cell::Cell;

/// Roster used throughout the scenarios: Markham, Sauga, Foo
pub fn demo_teams() -> Vec<Team> {
    vec![
        Team::with_players("Markham", ["Marcus", "Emma"]),
        Team::with_players("Sauga", ["Olly", "Bony"]),
        Team::with_players("Foo", ["a", "b"]),
    ]
}

pub fn demo_league() -> League {
    League::new(demo_teams()).unwrap()
}

/// Ranker returning a fixed order, ignoring any match data
#[derive(Debug, Default)]
pub struct StaticRanker {
    names: Vec<TeamName>,
    calls: Cell<usize>,
}

impl StaticRanker {
    pub fn new(names: &[&str]) -> Self {
        Self {
            names: names.iter().map(|name| name.to_string()).collect(),
            calls: Cell::new(0),
        }
    }

    /// Number of times the ranking has been requested
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Ranker for StaticRanker {
    fn ranking(&self) -> Vec<TeamName> {
        self.calls.set(self.calls.get() + 1);
        self.names.clone()
    }
}

/// Ranks alphabetically, a stand-in for an alternative strategy
pub struct AlphabeticalRanker<'a>(pub &'a League);

impl Ranker for AlphabeticalRanker<'_> {
    fn ranking(&self) -> Vec<TeamName> {
        let mut names = self.0.ranking();
        names.sort();
        names
    }
}
