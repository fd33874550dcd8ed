//! Common types used throughout the league table

use crate::error::LeagueError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Unique identifier for teams within a league
pub type TeamName = String;

/// A participant in the league
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: TeamName,
    #[serde(default)]
    pub players: Vec<String>,
}

impl Team {
    /// Create a team without any listed players
    pub fn new(name: impl Into<TeamName>) -> Self {
        Self {
            name: name.into(),
            players: Vec::new(),
        }
    }

    /// Create a team with its player list
    pub fn with_players<I, S>(name: impl Into<TeamName>, players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            players: players.into_iter().map(Into::into).collect(),
        }
    }
}

/// How a league treats a team name that is not on its roster
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownTeamPolicy {
    /// Add the team with zero wins before crediting the result
    #[default]
    Register,
    /// Refuse the result with `LeagueError::UnknownParticipant`
    Reject,
}

impl std::fmt::Display for UnknownTeamPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnknownTeamPolicy::Register => write!(f, "register"),
            UnknownTeamPolicy::Reject => write!(f, "reject"),
        }
    }
}

impl FromStr for UnknownTeamPolicy {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "register" => Ok(UnknownTeamPolicy::Register),
            "reject" => Ok(UnknownTeamPolicy::Reject),
            other => Err(LeagueError::ConfigurationError {
                message: format!("Invalid unknown team policy: {}", other),
            }),
        }
    }
}

/// Outcome of a single match, as reported to a league
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub home: TeamName,
    pub home_score: u32,
    pub away: TeamName,
    pub away_score: u32,
}

impl MatchResult {
    pub fn new(
        home: impl Into<TeamName>,
        home_score: u32,
        away: impl Into<TeamName>,
        away_score: u32,
    ) -> Self {
        Self {
            home: home.into(),
            home_score,
            away: away.into(),
            away_score,
        }
    }

    /// Name of the winning team, or `None` for a draw
    pub fn winner(&self) -> Option<&str> {
        match self.home_score.cmp(&self.away_score) {
            std::cmp::Ordering::Greater => Some(self.home.as_str()),
            std::cmp::Ordering::Less => Some(self.away.as_str()),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Parses `NAME:SCORE,NAME:SCORE`, e.g. `Markham:10,Foo:12`
impl FromStr for MatchResult {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| LeagueError::InvalidMatchResult {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let (home, away) = s
            .split_once(',')
            .ok_or_else(|| invalid("expected two sides separated by ','"))?;

        let parse_side = |side: &str| -> Result<(TeamName, u32), LeagueError> {
            let (name, score) = side
                .rsplit_once(':')
                .ok_or_else(|| invalid("expected NAME:SCORE"))?;
            let name = name.trim();
            if name.is_empty() {
                return Err(invalid("team name cannot be empty"));
            }
            let score = score
                .trim()
                .parse()
                .map_err(|_| invalid("score must be a non-negative integer"))?;
            Ok((name.to_string(), score))
        };

        let (home, home_score) = parse_side(home)?;
        let (away, away_score) = parse_side(away)?;

        Ok(Self {
            home,
            home_score,
            away,
            away_score,
        })
    }
}

/// One row of a ranked league table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// 1-based position in the ranking
    pub rank: usize,
    pub name: TeamName,
    pub wins: u32,
}
