//! League table: roster, win counts and ranking
//!
//! The table owns its win-count store and is only mutated through
//! `&mut self`. Counts start at zero, only ever grow, and teams are never
//! removed. Ranking is a stable sort on descending wins, so teams with equal
//! wins keep their roster order; teams registered on the fly come after the
//! roster in the order they were first reported.

use crate::error::{LeagueError, Result};
use crate::league::ranker::Ranker;
use crate::types::{MatchResult, Standing, Team, TeamName, UnknownTeamPolicy};
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::{debug, warn};

/// In-memory league table
#[derive(Debug, Clone)]
pub struct League {
    teams: Vec<Team>,
    /// Tie-break order: roster first, then auto-registered names
    order: Vec<TeamName>,
    wins: HashMap<TeamName, u32>,
    policy: UnknownTeamPolicy,
}

impl League {
    /// Create a league that registers unknown teams on first report
    pub fn new(teams: Vec<Team>) -> Result<Self> {
        Self::with_policy(teams, UnknownTeamPolicy::default())
    }

    /// Create a league with an explicit unknown-team policy
    ///
    /// Fails with [`LeagueError::InvalidRoster`] if two teams share a name.
    pub fn with_policy(teams: Vec<Team>, policy: UnknownTeamPolicy) -> Result<Self> {
        let mut seen = HashSet::with_capacity(teams.len());
        for team in &teams {
            if !seen.insert(team.name.as_str()) {
                return Err(LeagueError::InvalidRoster {
                    name: team.name.clone(),
                }
                .into());
            }
        }

        let order: Vec<TeamName> = teams.iter().map(|team| team.name.clone()).collect();
        let wins = order.iter().map(|name| (name.clone(), 0)).collect();

        debug!(teams = order.len(), %policy, "Created league");

        Ok(Self {
            teams,
            order,
            wins,
            policy,
        })
    }

    /// Record a match result and return the winner, or `None` for a draw
    pub fn report_match(
        &mut self,
        home: &str,
        home_score: u32,
        away: &str,
        away_score: u32,
    ) -> Result<Option<TeamName>> {
        self.record(&MatchResult::new(home, home_score, away, away_score))
    }

    /// Record a parsed or deserialized match result
    pub fn record(&mut self, result: &MatchResult) -> Result<Option<TeamName>> {
        self.ensure_known(&result.home)?;
        self.ensure_known(&result.away)?;

        let Some(winner) = result.winner() else {
            debug!(
                home = %result.home,
                away = %result.away,
                score = result.home_score,
                "Draw, no wins credited"
            );
            return Ok(None);
        };

        if let Some(count) = self.wins.get_mut(winner) {
            *count = count.saturating_add(1);
        }

        debug!(
            home = %result.home,
            home_score = result.home_score,
            away = %result.away,
            away_score = result.away_score,
            winner,
            "Recorded match result"
        );
        Ok(Some(winner.to_string()))
    }

    /// Check a team name against the policy before any mutation happens
    fn ensure_known(&mut self, name: &str) -> Result<()> {
        if self.wins.contains_key(name) {
            return Ok(());
        }

        match self.policy {
            UnknownTeamPolicy::Register => {
                self.register(name);
                Ok(())
            }
            UnknownTeamPolicy::Reject => {
                warn!(team = name, "Rejected result for unknown team");
                Err(LeagueError::UnknownParticipant {
                    name: name.to_string(),
                }
                .into())
            }
        }
    }

    fn register(&mut self, name: &str) {
        if !self.wins.contains_key(name) {
            debug!(team = name, "Registered unknown team with zero wins");
            self.wins.insert(name.to_string(), 0);
            self.order.push(name.to_string());
        }
    }

    /// Wins recorded for a team, if it is known to the league
    pub fn wins(&self, name: &str) -> Option<u32> {
        self.wins.get(name).copied()
    }

    /// Whether a team is on the roster or has been registered since
    pub fn contains(&self, name: &str) -> bool {
        self.wins.contains_key(name)
    }

    /// The roster the league was created with
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Policy applied to names outside the roster
    pub fn policy(&self) -> UnknownTeamPolicy {
        self.policy
    }

    /// Number of tracked teams, including auto-registered ones
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Ranked rows with their win counts
    pub fn standings(&self) -> Vec<Standing> {
        self.ranking()
            .into_iter()
            .enumerate()
            .map(|(index, name)| {
                let wins = self.wins(&name).unwrap_or(0);
                Standing {
                    rank: index + 1,
                    name,
                    wins,
                }
            })
            .collect()
    }
}

impl Ranker for League {
    fn ranking(&self) -> Vec<TeamName> {
        let mut ranked = self.order.clone();
        // sort_by_key is stable
        ranked.sort_by_key(|name| Reverse(self.wins.get(name).copied().unwrap_or(0)));
        ranked
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for standing in self.standings() {
            writeln!(f, "{}: {}", standing.name, standing.wins)?;
        }
        Ok(())
    }
}
