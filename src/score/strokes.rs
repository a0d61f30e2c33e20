use crate::score::handicap::round_half_up;

pub const FULL_ROUND_HOLES: u8 = 18;

/// Strokes received on a hole of the given difficulty rank for a differential.
///
/// Strokes go one per hole in rank order starting at rank 1; once every hole
/// has one, the next pass starts again at rank 1.
#[must_use]
pub fn strokes_received(differential: u32, difficulty_rank: u8, hole_count: u8) -> i32 {
    if hole_count == 0 || difficulty_rank == 0 || difficulty_rank > hole_count {
        return 0;
    }
    let holes = u32::from(hole_count);
    let full_passes = differential / holes;
    let remainder = differential % holes;
    let extra = u32::from(u32::from(difficulty_rank) <= remainder);
    i32::try_from(full_passes + extra).unwrap_or(i32::MAX)
}

/// Rounded handicap differential between two players.
#[must_use]
pub fn handicap_differential(handicap1: f64, handicap2: f64) -> u32 {
    u32::try_from(round_half_up((handicap1 - handicap2).abs())).unwrap_or(0)
}

/// Strokes each player receives on one hole of an 18-hole round.
#[must_use]
pub fn match_stroke_allocation(handicap1: f64, handicap2: f64, difficulty_rank: u8) -> (i32, i32) {
    match_stroke_allocation_for_course(handicap1, handicap2, difficulty_rank, FULL_ROUND_HOLES)
}

/// Strokes each player receives on one hole. Only the weaker player (higher
/// handicap on the signed scale) receives any.
#[must_use]
pub fn match_stroke_allocation_for_course(
    handicap1: f64,
    handicap2: f64,
    difficulty_rank: u8,
    hole_count: u8,
) -> (i32, i32) {
    let strokes = strokes_received(
        handicap_differential(handicap1, handicap2),
        difficulty_rank,
        hole_count,
    );
    if handicap1 > handicap2 {
        (strokes, 0)
    } else if handicap2 > handicap1 {
        (0, strokes)
    } else {
        (0, 0)
    }
}
