//! Match creation: random pairing of an event roster and zeroed scorecards.

use chrono::{NaiveDateTime, TimeDelta};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info};

use crate::error::EngineError;
use crate::model::{Course, Event, HoleResult, Match, MatchPlayer, RosterEntry};
use crate::score::match_totals::allocate_match_strokes;

/// Shuffle the roster and pair neighbours. An odd player out gets a bye.
pub fn random_pairings<R: Rng + ?Sized>(
    roster: &[RosterEntry],
    rng: &mut R,
) -> (Vec<(RosterEntry, RosterEntry)>, Option<RosterEntry>) {
    let mut available: Vec<RosterEntry> = roster.to_vec();
    available.shuffle(rng);

    let bye = if available.len() % 2 == 1 {
        available.pop()
    } else {
        None
    };

    let pairs = available
        .chunks_exact(2)
        .map(|pair| (pair[0].clone(), pair[1].clone()))
        .collect();
    (pairs, bye)
}

fn match_player(entry: &RosterEntry) -> MatchPlayer {
    let handicap = match entry.playing_handicap {
        Some(playing) => f64::from(playing),
        None => {
            debug!(player = %entry.name, "no playing handicap, using handicap index");
            entry.handicap_index
        }
    };
    MatchPlayer::new(entry.name.clone(), entry.team_name.clone(), handicap)
}

/// Create a match with one unscored hole per course hole and strokes allocated.
///
/// # Errors
///
/// Returns an error when the course fails validation or the starting hole is
/// not on the course.
pub fn new_match(
    id: impl Into<String>,
    player1: &RosterEntry,
    player2: &RosterEntry,
    course: &Course,
    tee_time: Option<NaiveDateTime>,
    starting_hole: u8,
) -> Result<Match, EngineError> {
    course.validate()?;
    if starting_hole == 0 || starting_hole > course.hole_count() {
        return Err(EngineError::InvalidInput(format!(
            "starting hole {starting_hole} is not on {}",
            course.name
        )));
    }

    let mut holes: Vec<HoleResult> = course
        .holes
        .iter()
        .map(|h| HoleResult::new(h.number, h.difficulty_rank, h.par))
        .collect();
    holes.sort_by_key(|h| h.hole_number);

    let mut m = Match {
        id: id.into(),
        player1: match_player(player1),
        player2: match_player(player2),
        tee_time,
        starting_hole,
        holes,
        completed: false,
    };
    allocate_match_strokes(&mut m);
    Ok(m)
}

/// Pair the event roster at random and append one match per pair, with tee
/// times `interval_minutes` apart. Returns the player with a bye, if any.
///
/// # Errors
///
/// Returns `EngineError::NotFound` when the event has no course,
/// `EngineError::InvalidInput` when a staggered tee time overflows, or any
/// error from [`new_match`]. Nothing is appended on error.
pub fn schedule_event<R: Rng + ?Sized>(
    event: &mut Event,
    first_tee_time: NaiveDateTime,
    interval_minutes: i64,
    rng: &mut R,
) -> Result<Option<RosterEntry>, EngineError> {
    let course = event
        .course
        .as_ref()
        .ok_or_else(|| EngineError::NotFound(format!("course for event {}", event.name)))?;

    let (pairs, bye) = random_pairings(&event.roster, rng);
    let mut created = Vec::with_capacity(pairs.len());
    for (i, (p1, p2)) in pairs.iter().enumerate() {
        let tee_time = i64::try_from(i)
            .ok()
            .and_then(|slot| interval_minutes.checked_mul(slot))
            .and_then(TimeDelta::try_minutes)
            .and_then(|offset| first_tee_time.checked_add_signed(offset))
            .ok_or_else(|| {
                EngineError::InvalidInput(format!(
                    "tee time for pairing {} of {} is out of range",
                    i + 1,
                    event.name
                ))
            })?;
        let id = format!("{}-{}", event.name, event.matches.len() + i + 1);
        created.push(new_match(id, p1, p2, course, Some(tee_time), 1)?);
    }

    info!(
        event = %event.name,
        matches = created.len(),
        bye = ?bye.as_ref().map(|b| b.name.as_str()),
        "event scheduled"
    );
    event.matches.extend(created);
    Ok(bye)
}
