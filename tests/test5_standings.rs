mod common;

use rusty_matchplay::model::{MatchPlayer, ScoreEntry, Standing};
use rusty_matchplay::score::match_totals::rescore_match;
use rusty_matchplay::score::sort_utils::{competition_ranks, ranked_standings};
use rusty_matchplay::score::standings::{
    event_team_standings, player_standings, team_standings, tournament_standings,
};

fn summary(standings: &[Standing]) -> Vec<(&str, i32, u32)> {
    standings
        .iter()
        .map(|s| (s.name.as_str(), s.total_score, s.match_count))
        .collect()
}

#[test]
fn competition_ranking_skips_after_ties() {
    assert_eq!(competition_ranks(&[10, 10, 8, 5, 5, 5]), vec![1, 1, 3, 4, 4, 4]);
    assert_eq!(competition_ranks(&[7]), vec![1]);
    assert!(competition_ranks(&[]).is_empty());

    let entries: Vec<ScoreEntry> = [("a", 10), ("b", 10), ("c", 8)]
        .iter()
        .map(|&(name, score)| ScoreEntry {
            name: name.to_string(),
            score,
        })
        .collect();
    let ranked = ranked_standings(&entries);
    assert_eq!(ranked.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![1, 1, 3]);
    assert_eq!(ranked[2].name, "c");
}

#[test]
fn event_standings_count_completed_matches_only() {
    let league = common::rescored_league();
    let spring = &league.events[0];
    let standings = team_standings(&spring.matches, &spring.teams);
    // spring-2 is unfinished, spring-3 has one side on an unknown team
    assert_eq!(summary(&standings), vec![("Hawks", 73, 2), ("Eagles", 68, 1)]);
    assert!(standings.iter().all(|s| s.event_count == 1));
    assert!(standings.iter().all(|s| s.name != "Ghosts"));
}

#[test]
fn tied_teams_share_a_rank() {
    let league = common::rescored_league();
    let ranked = event_team_standings(&league.events[1]);
    let rows: Vec<(&str, i32, usize)> = ranked
        .iter()
        .map(|r| (r.standing.name.as_str(), r.standing.total_score, r.rank))
        .collect();
    assert_eq!(rows, vec![("Eagles", 113, 1), ("Hawks", 113, 1)]);
}

#[test]
fn no_completed_matches_leaves_teams_at_zero() {
    let mut league = common::rescored_league();
    let event = &mut league.events[0];
    for m in &mut event.matches {
        m.completed = false;
    }
    let standings = team_standings(&event.matches, &event.teams);
    assert_eq!(summary(&standings), vec![("Eagles", 0, 0), ("Hawks", 0, 0)]);
}

#[test]
fn tournament_standings_fold_every_event() {
    let league = common::rescored_league();
    let overall = tournament_standings(&league);

    let teams: Vec<(&str, i32, u32, u32, usize)> = overall
        .teams
        .iter()
        .map(|r| {
            let s = &r.standing;
            (s.name.as_str(), s.total_score, s.match_count, s.event_count, r.rank)
        })
        .collect();
    assert_eq!(teams, vec![("Hawks", 186, 4, 2, 1), ("Eagles", 181, 3, 2, 2)]);

    let players: Vec<(&str, i32, usize)> = overall
        .players
        .iter()
        .map(|r| (r.standing.name.as_str(), r.standing.total_score, r.rank))
        .collect();
    assert_eq!(
        players,
        vec![
            ("Ann", 113, 1),
            ("Cat", 112, 2),
            ("Dan", 74, 3),
            ("Bob", 68, 4),
            ("Eve", 36, 5),
        ]
    );
}

#[test]
fn player_standings_count_events_once() {
    let league = common::rescored_league();
    let players = player_standings(&league.events);
    let dan = players.iter().find(|s| s.name == "Dan").unwrap();
    assert_eq!((dan.match_count, dan.event_count), (2, 2));
    let bob = players.iter().find(|s| s.name == "Bob").unwrap();
    assert_eq!((bob.match_count, bob.event_count), (1, 1));
}

#[test]
fn equal_scores_order_by_match_count() {
    let league = common::rescored_league();
    let mut summer = league.events[1].clone();
    // an extra completed Hawks match with nothing scored, opponent on no known team
    let mut extra = summer.matches[1].clone();
    extra.id = "summer-3".to_string();
    extra.player1 = MatchPlayer::new("Eve", "Ghosts", 5.0);
    for hole in &mut extra.holes {
        hole.strokes1 = 0;
        hole.strokes2 = 0;
    }
    rescore_match(&mut extra);
    summer.matches.push(extra);

    let standings = team_standings(&summer.matches, &summer.teams);
    assert_eq!(summary(&standings), vec![("Hawks", 113, 3), ("Eagles", 113, 2)]);
    let ranked = event_team_standings(&summer);
    assert_eq!(ranked[0].rank, 1);
    assert_eq!(ranked[1].rank, 1);
}
