//! Main application configuration
//!
//! This module defines the configuration structures for the league-table
//! binary, including environment variable and TOML file loading and validation.

use crate::league::League;
use crate::types::{MatchResult, Team, UnknownTeamPolicy};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub service: ServiceSettings,
    #[serde(default)]
    pub league: LeagueSettings,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// League roster and results to replay on startup
///
/// Without a `[league]` section the demo league is used; a section that is
/// present but omits `teams` or `matches` leaves them empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueSettings {
    /// What to do with results naming a team outside the roster
    #[serde(default)]
    pub unknown_team_policy: UnknownTeamPolicy,
    /// Teams in roster order
    #[serde(default)]
    pub teams: Vec<Team>,
    /// Results recorded before the ranking is printed
    #[serde(default)]
    pub matches: Vec<MatchResult>,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "league-table".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for LeagueSettings {
    fn default() -> Self {
        Self {
            unknown_team_policy: UnknownTeamPolicy::Register,
            teams: vec![
                Team::with_players("Markham", ["Marcus", "Emma"]),
                Team::with_players("Sauga", ["Olly", "Bony"]),
                Team::with_players("Foo", ["a", "b"]),
            ],
            matches: vec![
                MatchResult::new("Markham", 10, "Foo", 12),
                MatchResult::new("Sauga", 10, "Foo", 12),
                MatchResult::new("Sauga", 10, "Markham", 12),
            ],
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from a TOML file; missing sections use defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup on top of the defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(name) = lookup("SERVICE_NAME") {
            config.service.name = name;
        }
        if let Some(log_level) = lookup("LOG_LEVEL") {
            config.service.log_level = log_level;
        }
        if let Some(policy) = lookup("UNKNOWN_TEAM_POLICY") {
            config.league.unknown_team_policy = policy
                .parse()
                .map_err(|_| anyhow!("Invalid UNKNOWN_TEAM_POLICY value: {}", policy))?;
        }

        validate_config(&config)?;
        Ok(config)
    }

    /// Build the configured league and record every configured result
    pub fn build_league(&self) -> Result<League> {
        let mut league =
            League::with_policy(self.league.teams.clone(), self.league.unknown_team_policy)?;

        for result in &self.league.matches {
            league.record(result)?;
        }

        Ok(league)
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.service.name.is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }

    if let Some(position) = config
        .league
        .teams
        .iter()
        .position(|team| team.name.trim().is_empty())
    {
        return Err(anyhow!("Team #{} has an empty name", position + 1));
    }

    let mut seen = HashSet::with_capacity(config.league.teams.len());
    if let Some(team) = config
        .league
        .teams
        .iter()
        .find(|team| !seen.insert(team.name.as_str()))
    {
        return Err(anyhow!("Duplicate team name: {}", team.name));
    }

    Ok(())
}
