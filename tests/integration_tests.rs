//! Integration tests for the league table
//!
//! These tests drive the public API end to end:
//! - Roster validation and the demo league scenario
//! - Unknown team handling under both policies
//! - Printing rankings from the league and from other rankers
//! - Building a league from TOML configuration

mod fixtures;

use league_table::config::AppConfig;
use league_table::{
    print_ranking, League, LeagueError, MatchResult, Ranker, Team, UnknownTeamPolicy,
};

use fixtures::{demo_league, demo_teams, AlphabeticalRanker, StaticRanker};

fn render(ranker: &dyn Ranker) -> String {
    let mut out = Vec::new();
    print_ranking(ranker, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_demo_league_end_to_end() {
    let mut league = demo_league();

    league.report_match("Markham", 10, "Foo", 12).unwrap();
    league.report_match("Sauga", 10, "Foo", 12).unwrap();
    league.report_match("Sauga", 10, "Markham", 12).unwrap();

    assert_eq!(league.wins("Markham"), Some(1));
    assert_eq!(league.wins("Sauga"), Some(0));
    assert_eq!(league.wins("Foo"), Some(2));
    assert_eq!(league.ranking(), vec!["Foo", "Markham", "Sauga"]);
    assert_eq!(render(&league), "1. Foo\n2. Markham\n3. Sauga\n");
}

#[test]
fn test_fresh_league_prints_roster_order() {
    let league = demo_league();
    assert_eq!(render(&league), "1. Markham\n2. Sauga\n3. Foo\n");
    assert_eq!(league.teams(), demo_teams().as_slice());
}

#[test]
fn test_ranking_is_idempotent() {
    let mut league = demo_league();
    league.report_match("Foo", 1, "Sauga", 0).unwrap();

    let first = league.ranking();
    let second = league.ranking();
    assert_eq!(first, second);
    assert_eq!(first, vec!["Foo", "Markham", "Sauga"]);
}

#[test]
fn test_duplicate_roster_fails() {
    let mut teams = demo_teams();
    teams.push(Team::new("Sauga"));

    let err = League::new(teams).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<LeagueError>(),
        Some(LeagueError::InvalidRoster { name }) if name == "Sauga"
    ));
}

#[test]
fn test_draws_credit_nobody() {
    let mut league = League::new(vec![Team::new("A"), Team::new("B")]).unwrap();
    assert_eq!(league.report_match("A", 5, "B", 5).unwrap(), None);
    assert_eq!(league.wins("A"), Some(0));
    assert_eq!(league.wins("B"), Some(0));
    assert_eq!(league.ranking(), vec!["A", "B"]);
}

#[test]
fn test_unknown_team_appended_after_roster() {
    let mut league = League::new(vec![Team::new("A"), Team::new("B")]).unwrap();
    league.report_match("A", 3, "Z", 1).unwrap();

    assert_eq!(league.wins("Z"), Some(0));
    assert_eq!(league.wins("A"), Some(1));
    assert_eq!(league.ranking(), vec!["A", "B", "Z"]);

    // once Z wins it overtakes B
    league.report_match("B", 0, "Z", 2).unwrap();
    assert_eq!(league.ranking(), vec!["A", "Z", "B"]);
}

#[test]
fn test_strict_league_rejects_unknown_team() {
    let mut league = League::with_policy(demo_teams(), UnknownTeamPolicy::Reject).unwrap();

    let err = league
        .record(&MatchResult::new("Markham", 3, "Oakville", 1))
        .unwrap_err();
    assert_eq!(
        err.downcast_ref::<LeagueError>(),
        Some(&LeagueError::UnknownParticipant {
            name: "Oakville".to_string()
        })
    );
    assert_eq!(league.wins("Markham"), Some(0));
    assert_eq!(league.len(), 3);
}

#[test]
fn test_printer_accepts_other_rankers() {
    let ranker = StaticRanker::new(&["Zeta", "Alpha"]);
    assert_eq!(render(&ranker), "1. Zeta\n2. Alpha\n");
    assert_eq!(ranker.calls(), 1);

    let mut league = demo_league();
    league.report_match("Sauga", 1, "Markham", 0).unwrap();
    assert_eq!(
        render(&AlphabeticalRanker(&league)),
        "1. Foo\n2. Markham\n3. Sauga\n"
    );
}

#[test]
fn test_standings_serialize_to_json() {
    let mut league = demo_league();
    league.report_match("Markham", 10, "Foo", 12).unwrap();

    let json = serde_json::to_value(league.standings()).unwrap();
    assert_eq!(json[0]["rank"], 1);
    assert_eq!(json[0]["name"], "Foo");
    assert_eq!(json[0]["wins"], 1);
    assert_eq!(json[2]["name"], "Sauga");
}

#[test]
fn test_league_from_toml_config() {
    let config = AppConfig::from_toml_str(
        r#"
        [league]
        unknown_team_policy = "register"

        [[league.teams]]
        name = "North"

        [[league.teams]]
        name = "East"

        [[league.teams]]
        name = "South"

        [[league.matches]]
        home = "South"
        home_score = 2
        away = "North"
        away_score = 0

        [[league.matches]]
        home = "East"
        home_score = 1
        away = "West"
        away_score = 1
        "#,
    )
    .unwrap();

    let mut league =
        League::with_policy(config.league.teams.clone(), config.league.unknown_team_policy)
            .unwrap();
    for result in &config.league.matches {
        league.record(result).unwrap();
    }

    assert_eq!(league.ranking(), vec!["South", "North", "East", "West"]);
}

#[test]
fn test_default_config_reproduces_demo_ranking() {
    let config = AppConfig::default();
    let mut league = League::new(config.league.teams.clone()).unwrap();
    for result in &config.league.matches {
        league.record(result).unwrap();
    }
    assert_eq!(league.ranking(), vec!["Foo", "Markham", "Sauga"]);
}

#[test]
fn test_parsed_results_feed_the_league() {
    let mut league = demo_league();
    for line in ["Markham:10,Foo:12", "Sauga:10,Foo:12", "Sauga:10,Markham:12"] {
        let result: MatchResult = line.parse().unwrap();
        league.record(&result).unwrap();
    }
    assert_eq!(league.to_string(), "Foo: 2\nMarkham: 1\nSauga: 0\n");
}

#[test]
fn test_config_with_duplicate_roster_is_invalid() {
    let mut config = AppConfig::default();
    config.league.teams.push(Team::new("Foo"));

    let err = league_table::config::validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("Duplicate team name: Foo"));
    assert!(config.build_league().is_err());
}
