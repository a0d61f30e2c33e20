use tracing::{debug, info};

use crate::model::{Course, HandicapChange, RosterEntry, Tee};

/// Slope of a course of standard difficulty.
pub const STANDARD_SLOPE: f64 = 113.0;

// absorbs binary float noise such as 13.499999999 for an exact half
const ROUNDING_EPSILON: f64 = 1e-9;

/// Round to the nearest integer, halves go up (toward positive infinity).
#[must_use]
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5 + ROUNDING_EPSILON).floor() as i32
}

/// Convert a handicap index into a playing handicap for one tee.
///
/// `index × slope / 113 + (course_rating − par)`, scaled by the allowance percent
/// and rounded half up. The index may be negative.
#[must_use]
pub fn course_handicap(
    handicap_index: f64,
    slope: f64,
    course_rating: f64,
    par: i32,
    allowance_percent: f64,
) -> i32 {
    let raw = handicap_index * (slope / STANDARD_SLOPE) + (course_rating - f64::from(par));
    round_half_up(raw * allowance_percent / 100.0)
}

/// Playing handicap for a player's selected tee, `None` when no tee is selected.
#[must_use]
pub fn playing_handicap_for_tee(
    handicap_index: f64,
    tee: Option<&Tee>,
    par: i32,
    allowance_percent: f64,
) -> Option<i32> {
    tee.map(|t| {
        course_handicap(
            handicap_index,
            f64::from(t.slope),
            t.course_rating,
            par,
            allowance_percent,
        )
    })
}

fn fresh_playing_handicap(entry: &RosterEntry, course: &Course, allowance_percent: f64) -> Option<i32> {
    let tee = entry.tee.as_deref().and_then(|name| course.tee(name));
    playing_handicap_for_tee(entry.handicap_index, tee, course.par(), allowance_percent)
}

/// Roster entries whose cached playing handicap no longer matches its inputs.
#[must_use]
pub fn stale_playing_handicaps(
    roster: &[RosterEntry],
    course: &Course,
    allowance_percent: f64,
) -> Vec<HandicapChange> {
    roster
        .iter()
        .filter_map(|entry| {
            let current = fresh_playing_handicap(entry, course, allowance_percent);
            (current != entry.playing_handicap).then(|| HandicapChange {
                name: entry.name.clone(),
                previous: entry.playing_handicap,
                current,
            })
        })
        .collect()
}

/// Recompute every cached playing handicap and overwrite the stale ones.
pub fn refresh_playing_handicaps(
    roster: &mut [RosterEntry],
    course: &Course,
    allowance_percent: f64,
) -> Vec<HandicapChange> {
    let mut changes = Vec::new();
    for entry in roster.iter_mut() {
        let current = fresh_playing_handicap(entry, course, allowance_percent);
        if current == entry.playing_handicap {
            debug!(player = %entry.name, "playing handicap unchanged");
            continue;
        }
        info!(
            player = %entry.name,
            previous = ?entry.playing_handicap,
            current = ?current,
            "overwriting cached playing handicap"
        );
        changes.push(HandicapChange {
            name: entry.name.clone(),
            previous: entry.playing_handicap,
            current,
        });
        entry.playing_handicap = current;
    }
    changes
}
