use crate::model::{RankedEntry, RankedStanding, ScoreEntry, Standing};

/// Sort a leaderboard: highest total first, then more matches, then name.
pub fn sort_standings(standings: &mut [Standing]) {
    standings.sort_by(|a, b| {
        b.total_score
            .cmp(&a.total_score)
            .then_with(|| b.match_count.cmp(&a.match_count))
            .then_with(|| a.name.cmp(&b.name))
    });
}

/// Competition ranks ("1224") over an already sorted score sequence.
#[must_use]
pub fn competition_ranks(sorted_scores: &[i32]) -> Vec<usize> {
    let mut ranks: Vec<usize> = Vec::with_capacity(sorted_scores.len());
    for (i, score) in sorted_scores.iter().enumerate() {
        let rank = match (i.checked_sub(1), ranks.last()) {
            (Some(prev), Some(&prev_rank)) if sorted_scores[prev] == *score => prev_rank,
            _ => i + 1,
        };
        ranks.push(rank);
    }
    ranks
}

/// Attach competition ranks to already sorted entries.
#[must_use]
pub fn ranked_standings(entries: &[ScoreEntry]) -> Vec<RankedEntry> {
    let scores: Vec<i32> = entries.iter().map(|e| e.score).collect();
    entries
        .iter()
        .zip(competition_ranks(&scores))
        .map(|(entry, rank)| RankedEntry {
            name: entry.name.clone(),
            score: entry.score,
            rank,
        })
        .collect()
}

/// Sort a leaderboard and attach competition ranks by total score.
#[must_use]
pub fn rank_standings(mut standings: Vec<Standing>) -> Vec<RankedStanding> {
    sort_standings(&mut standings);
    let scores: Vec<i32> = standings.iter().map(|s| s.total_score).collect();
    standings
        .into_iter()
        .zip(competition_ranks(&scores))
        .map(|(standing, rank)| RankedStanding { rank, standing })
        .collect()
}
