use tracing::debug;

use crate::model::{HoleResult, Match, MatchTotals, Winner};
use crate::score::strokes::match_stroke_allocation_for_course;

/// Points added to the player who won more holes.
pub const MATCH_WIN_BONUS: i32 = 32;

/// Sum the played holes of a match and apply the match-win bonus.
///
/// Unplayed holes contribute nothing. The bonus goes to the side with strictly
/// more hole wins, and to neither side on equal counts.
#[must_use]
pub fn match_totals(holes: &[HoleResult]) -> MatchTotals {
    let mut totals = MatchTotals::default();

    for hole in holes.iter().filter(|h| h.is_played()) {
        totals.total1 += hole.net1;
        totals.total2 += hole.net2;
        match hole.winner {
            Winner::Player1 => totals.wins1 += 1,
            Winner::Player2 => totals.wins2 += 1,
            Winner::Tie => {}
        }
    }

    match totals.wins1.cmp(&totals.wins2) {
        std::cmp::Ordering::Greater => totals.total1 += MATCH_WIN_BONUS,
        std::cmp::Ordering::Less => totals.total2 += MATCH_WIN_BONUS,
        std::cmp::Ordering::Equal => {}
    }

    totals
}

/// Write the received strokes for every hole from the two match handicaps.
pub fn allocate_match_strokes(m: &mut Match) {
    let hole_count = m.hole_count();
    let (handicap1, handicap2) = (m.player1.handicap, m.player2.handicap);
    for hole in &mut m.holes {
        let (received1, received2) = match_stroke_allocation_for_course(
            handicap1,
            handicap2,
            hole.difficulty_rank,
            hole_count,
        );
        hole.received1 = received1;
        hole.received2 = received2;
    }
}

/// Full recomputation of a match: strokes, every hole, then the totals.
pub fn rescore_match(m: &mut Match) -> MatchTotals {
    allocate_match_strokes(m);
    for hole in &mut m.holes {
        hole.rescore();
    }
    let totals = match_totals(&m.holes);

    m.player1.score = totals.total1;
    m.player1.hole_wins = totals.wins1;
    m.player2.score = totals.total2;
    m.player2.hole_wins = totals.wins2;

    debug!(
        match_id = %m.id,
        total1 = totals.total1,
        total2 = totals.total2,
        wins1 = totals.wins1,
        wins2 = totals.wins2,
        "match rescored"
    );
    totals
}
