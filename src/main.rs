//! Command line entry point for the league table
//!
//! Builds a league from configuration, replays the configured and
//! command-line match results, and prints the ranking.

use anyhow::Result;
use clap::Parser;
use league_table::config::{validate_config, AppConfig};
use league_table::{print_ranking, MatchResult, UnknownTeamPolicy};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{error, info};

/// League Table - rank teams by wins from reported match results
#[derive(Parser)]
#[command(
    name = "league-table",
    version,
    about = "Rank teams by wins from reported match results",
    long_about = "League Table keeps a fixed roster of teams, credits one win to the higher \
                 score of every reported match (draws credit nobody) and prints the teams \
                 by descending wins, keeping roster order between teams with equal wins."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Reject results for teams outside the roster
    #[arg(long, help = "Fail on results naming a team that is not on the roster")]
    strict: bool,

    /// Additional match results
    #[arg(
        short,
        long = "result",
        value_name = "NAME:SCORE,NAME:SCORE",
        help = "Record a match result after the configured ones (repeatable)"
    )]
    results: Vec<MatchResult>,

    /// Print standings as JSON
    #[arg(long, help = "Print standings as JSON instead of numbered lines")]
    json: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without ranking")]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from environment, file and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if args.strict {
        config.league.unknown_team_policy = UnknownTeamPolicy::Reject;
    }

    config.league.matches.extend(args.results.iter().cloned());

    validate_config(&config)?;
    Ok(config)
}

fn run(args: &Args, config: &AppConfig) -> Result<()> {
    if let Some(config_path) = &args.config {
        info!("Loaded configuration from: {}", config_path.display());
    }
    info!(
        service = %config.service.name,
        teams = config.league.teams.len(),
        matches = config.league.matches.len(),
        "Configuration loaded"
    );

    // Building the league checks the roster and replays every result
    let league = config.build_league()?;
    info!(
        teams = league.len(),
        policy = %league.policy(),
        "League built"
    );

    if args.dry_run {
        info!("Dry run completed - exiting without ranking");
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &league.standings())?;
        writeln!(out)?;
    } else {
        print_ranking(&league, &mut out)?;
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(&args, &config) {
        error!("{:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
