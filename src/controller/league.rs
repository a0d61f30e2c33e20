use serde::Serialize;
use tracing::{info, warn};

use crate::args::CleanArgs;
use crate::model::{HandicapChange, RankedStanding, Tournament, TournamentStandings};
use crate::score::handicap::refresh_playing_handicaps;
use crate::score::match_totals::rescore_match;
use crate::score::standings::{event_team_standings, tournament_standings};

#[derive(Serialize, Debug, Clone)]
pub struct EventHandicapChange {
    pub event: String,
    #[serde(flatten)]
    pub change: HandicapChange,
}

#[derive(Serialize, Debug, Clone)]
pub struct EventStandings {
    pub event: String,
    pub teams: Vec<RankedStanding>,
}

#[derive(Serialize, Debug, Clone)]
pub struct LeagueReport {
    pub league: String,
    pub events: Vec<EventStandings>,
    /// Tournament-wide leaderboards, absent when one event was requested.
    pub overall: Option<TournamentStandings>,
    pub handicap_changes: Vec<EventHandicapChange>,
}

/// Recompute every match of every event from its holes. Returns the match count.
pub fn rescore_league(league: &mut Tournament) -> usize {
    let mut count = 0;
    for event in &mut league.events {
        for m in &mut event.matches {
            rescore_match(m);
            count += 1;
        }
    }
    info!(league = %league.name, matches = count, "league rescored");
    count
}

/// Refresh the cached playing handicaps of every event roster.
///
/// `allowance_override` replaces each event's own allowance when given.
pub fn refresh_league_handicaps(
    league: &mut Tournament,
    allowance_override: Option<f64>,
) -> Vec<EventHandicapChange> {
    let mut changes = Vec::new();
    for event in &mut league.events {
        let Some(course) = event.course.as_ref() else {
            warn!(event = %event.name, "no course, cached playing handicaps left as they are");
            continue;
        };
        let allowance = allowance_override.unwrap_or(event.allowance_percent);
        for change in refresh_playing_handicaps(&mut event.roster, course, allowance) {
            changes.push(EventHandicapChange {
                event: event.name.clone(),
                change,
            });
        }
    }
    changes
}

/// Build the standings report. Every match is rescored from its holes first.
#[must_use]
pub fn build_report(args: &CleanArgs) -> LeagueReport {
    let mut league = args.league.clone();

    let handicap_changes = if args.refresh_handicaps {
        refresh_league_handicaps(&mut league, args.allowance)
    } else {
        Vec::new()
    };

    // stored totals may predate the latest hole edits
    rescore_league(&mut league);

    let events = league
        .events
        .iter()
        .filter(|e| args.event.as_ref().is_none_or(|name| &e.name == name))
        .map(|e| EventStandings {
            event: e.name.clone(),
            teams: event_team_standings(e),
        })
        .collect();

    let overall = args
        .event
        .is_none()
        .then(|| tournament_standings(&league));

    LeagueReport {
        league: league.name.clone(),
        events,
        overall,
        handicap_changes,
    }
}
