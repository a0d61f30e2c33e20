mod common;

use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rusty_matchplay::EngineError;
use rusty_matchplay::model::RosterEntry;
use rusty_matchplay::schedule::{new_match, random_pairings, schedule_event};

fn roster(names: &[&str]) -> Vec<RosterEntry> {
    names
        .iter()
        .map(|name| RosterEntry {
            name: (*name).to_string(),
            team_name: "Eagles".to_string(),
            handicap_index: 10.0,
            tee: None,
            playing_handicap: None,
        })
        .collect()
}

#[test]
fn odd_roster_leaves_one_bye() {
    let players = roster(&["a", "b", "c", "d", "e"]);
    let mut rng = StdRng::seed_from_u64(7);
    let (pairs, bye) = random_pairings(&players, &mut rng);
    assert_eq!(pairs.len(), 2);
    let bye = bye.expect("five players leave a bye");

    let mut seen: Vec<String> = pairs
        .iter()
        .flat_map(|(p1, p2)| [p1.name.clone(), p2.name.clone()])
        .collect();
    seen.push(bye.name);
    seen.sort();
    assert_eq!(seen, vec!["a", "b", "c", "d", "e"]);
}

#[test]
fn even_roster_pairs_everyone() {
    let players = roster(&["a", "b", "c", "d"]);
    let mut rng = StdRng::seed_from_u64(42);
    let (pairs, bye) = random_pairings(&players, &mut rng);
    assert_eq!(pairs.len(), 2);
    assert!(bye.is_none());
}

#[test]
fn new_match_starts_unscored_with_strokes_allocated() {
    let course = common::eighteen_hole_course();
    let mut players = roster(&["a", "b"]);
    players[0].playing_handicap = Some(8);
    players[1].playing_handicap = Some(10);

    let m = new_match("m-7", &players[0], &players[1], &course, None, 10).unwrap();
    assert_eq!(m.holes.len(), 18);
    assert_eq!(m.starting_hole, 10);
    assert!(m.holes.iter().all(|h| h.strokes1 == 0 && h.strokes2 == 0));
    assert_eq!(m.holes.iter().map(|h| h.received2).sum::<i32>(), 2);
    assert!(!m.completed);
    assert_eq!(m.totals().total1, 0);
}

#[test]
fn missing_playing_handicap_falls_back_to_the_index() {
    let course = common::eighteen_hole_course();
    let mut players = roster(&["a", "b"]);
    players[1].handicap_index = 14.0;
    let m = new_match("m-8", &players[0], &players[1], &course, None, 1).unwrap();
    assert_eq!(m.player2.handicap, 14.0);
    assert_eq!(m.holes.iter().map(|h| h.received2).sum::<i32>(), 4);
}

#[test]
fn starting_hole_must_be_on_the_course() {
    let course = common::eighteen_hole_course();
    let players = roster(&["a", "b"]);
    let err = new_match("m-9", &players[0], &players[1], &course, None, 19).unwrap_err();
    assert!(matches!(err, EngineError::InvalidInput(_)));
}

#[test]
fn scheduling_appends_matches_with_staggered_tee_times() {
    let mut league = common::load_league();
    let event = &mut league.events[0];
    event.roster.push(RosterEntry {
        name: "Eve".to_string(),
        team_name: "Hawks".to_string(),
        handicap_index: 4.0,
        tee: None,
        playing_handicap: None,
    });
    let first = NaiveDate::from_ymd_opt(2026, 4, 12)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();

    let mut rng = StdRng::seed_from_u64(3);
    let bye = schedule_event(event, first, 10, &mut rng).unwrap();
    assert!(bye.is_none());
    assert_eq!(event.matches.len(), 5);

    let created = &event.matches[3..];
    assert_eq!(created[0].id, "Spring Open-4");
    assert_eq!(created[1].id, "Spring Open-5");
    assert_eq!(created[0].tee_time, Some(first));
    assert_eq!(
        created[1].tee_time,
        Some(first + chrono::TimeDelta::minutes(10))
    );
    assert!(created.iter().all(|m| m.holes.len() == 9));
}

#[test]
fn scheduling_needs_a_course() {
    let mut league = common::load_league();
    let event = &mut league.events[0];
    event.course = None;
    let first = NaiveDate::from_ymd_opt(2026, 4, 12)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let err = schedule_event(event, first, 10, &mut rng).unwrap_err();
    assert!(matches!(err, EngineError::NotFound(_)));
}

#[test]
fn tee_time_overflow_is_rejected_without_appending() {
    let mut league = common::load_league();
    let event = &mut league.events[0];
    event.roster.push(RosterEntry {
        name: "Eve".to_string(),
        team_name: "Hawks".to_string(),
        handicap_index: 4.0,
        tee: None,
        playing_handicap: None,
    });
    let first = NaiveDate::from_ymd_opt(2026, 4, 12)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let err = schedule_event(event, first, i64::MAX / 2, &mut rng).unwrap_err();
    assert!(matches!(err, EngineError::InvalidInput(_)), "{err:?}");
    assert_eq!(event.matches.len(), 3);
}
