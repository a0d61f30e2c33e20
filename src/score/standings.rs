use ahash::RandomState;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::model::{
    Event, Match, RankedStanding, Side, Standing, Team, Tournament, TournamentStandings,
};
use crate::score::sort_utils::{rank_standings, sort_standings};

/// Team leaderboard for one event.
///
/// Only completed matches count. A side whose team name is not one of `teams`
/// is skipped for that side only.
#[must_use]
pub fn team_standings(matches: &[Match], teams: &[Team]) -> Vec<Standing> {
    let mut standings: Vec<Standing> = Vec::with_capacity(teams.len());
    let mut index: HashMap<&str, usize, RandomState> = HashMap::default();

    for team in teams {
        if index.contains_key(team.name.as_str()) {
            continue;
        }
        index.insert(team.name.as_str(), standings.len());
        standings.push(Standing {
            name: team.name.clone(),
            total_score: 0,
            match_count: 0,
            event_count: 1,
        });
    }

    for m in matches.iter().filter(|m| m.completed) {
        for player in [Side::Player1, Side::Player2].map(|side| m.player(side)) {
            match index.get(player.team_name.as_str()) {
                Some(&i) => {
                    standings[i].total_score += player.score;
                    standings[i].match_count += 1;
                }
                None => warn!(
                    match_id = %m.id,
                    team = %player.team_name,
                    "skipping match side with unknown team"
                ),
            }
        }
    }

    sort_standings(&mut standings);
    standings
}

/// Ranked team leaderboard for one event.
#[must_use]
pub fn event_team_standings(event: &Event) -> Vec<RankedStanding> {
    rank_standings(team_standings(&event.matches, &event.teams))
}

/// Fold per-event team leaderboards into one keyed by team name.
#[must_use]
pub fn aggregate_team_standings(events: &[Event]) -> Vec<Standing> {
    let mut totals: HashMap<String, Standing, RandomState> = HashMap::default();

    for event in events {
        for standing in team_standings(&event.matches, &event.teams) {
            let entry = totals
                .entry(standing.name.clone())
                .or_insert_with(|| Standing {
                    name: standing.name.clone(),
                    ..Standing::default()
                });
            entry.total_score += standing.total_score;
            entry.match_count += standing.match_count;
            entry.event_count += 1;
        }
    }

    let mut standings: Vec<Standing> = totals.into_values().collect();
    sort_standings(&mut standings);
    standings
}

/// Player leaderboard over the completed matches of every event.
#[must_use]
pub fn player_standings(events: &[Event]) -> Vec<Standing> {
    // name -> (standing, index of the last event counted)
    let mut totals: HashMap<String, (Standing, usize), RandomState> = HashMap::default();

    for (event_idx, event) in events.iter().enumerate() {
        for m in event.matches.iter().filter(|m| m.completed) {
            for player in [Side::Player1, Side::Player2].map(|side| m.player(side)) {
                let (standing, last_event) = totals
                    .entry(player.name.clone())
                    .or_insert_with(|| {
                        (
                            Standing {
                                name: player.name.clone(),
                                ..Standing::default()
                            },
                            usize::MAX,
                        )
                    });
                standing.total_score += player.score;
                standing.match_count += 1;
                if *last_event != event_idx {
                    standing.event_count += 1;
                    *last_event = event_idx;
                }
            }
        }
    }

    let mut standings: Vec<Standing> = totals.into_values().map(|(s, _)| s).collect();
    sort_standings(&mut standings);
    standings
}

/// Ranked team and player leaderboards across every event of a tournament.
#[must_use]
pub fn tournament_standings(tournament: &Tournament) -> TournamentStandings {
    let teams = rank_standings(aggregate_team_standings(&tournament.events));
    let players = rank_standings(player_standings(&tournament.events));
    debug!(
        tournament = %tournament.name,
        teams = teams.len(),
        players = players.len(),
        "tournament standings computed"
    );
    TournamentStandings { teams, players }
}
