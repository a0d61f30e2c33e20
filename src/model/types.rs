use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::model::course::Course;
use crate::model::score::{HoleResult, MatchTotals, Side};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct MatchPlayer {
    pub name: String,
    pub team_name: String,
    /// Handicap used for stroke allocation in this match.
    pub handicap: f64,
    #[serde(default)]
    pub score: i32,
    #[serde(default)]
    pub hole_wins: u32,
}

impl MatchPlayer {
    #[must_use]
    pub fn new(name: impl Into<String>, team_name: impl Into<String>, handicap: f64) -> Self {
        Self {
            name: name.into(),
            team_name: team_name.into(),
            handicap,
            score: 0,
            hole_wins: 0,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Match {
    pub id: String,
    pub player1: MatchPlayer,
    pub player2: MatchPlayer,
    #[serde(default)]
    pub tee_time: Option<NaiveDateTime>,
    #[serde(default = "default_starting_hole")]
    pub starting_hole: u8,
    pub holes: Vec<HoleResult>,
    #[serde(default)]
    pub completed: bool,
}

fn default_starting_hole() -> u8 {
    1
}

impl Match {
    #[must_use]
    pub fn player(&self, side: Side) -> &MatchPlayer {
        match side {
            Side::Player1 => &self.player1,
            Side::Player2 => &self.player2,
        }
    }

    pub fn player_mut(&mut self, side: Side) -> &mut MatchPlayer {
        match side {
            Side::Player1 => &mut self.player1,
            Side::Player2 => &mut self.player2,
        }
    }

    pub fn hole_mut(&mut self, hole_number: u8) -> Option<&mut HoleResult> {
        self.holes.iter_mut().find(|h| h.hole_number == hole_number)
    }

    #[must_use]
    pub fn hole_count(&self) -> u8 {
        u8::try_from(self.holes.len()).unwrap_or(u8::MAX)
    }

    /// Headline totals as last written by the match aggregator.
    #[must_use]
    pub fn totals(&self) -> MatchTotals {
        MatchTotals {
            total1: self.player1.score,
            total2: self.player2.score,
            wins1: self.player1.hole_wins,
            wins2: self.player2.hole_wins,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Team {
    pub name: String,
    #[serde(default)]
    pub players: Vec<String>,
}

/// A player signed up for an event. `playing_handicap` is a cached value
/// derived from the index, the tee and the event allowance.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RosterEntry {
    pub name: String,
    pub team_name: String,
    pub handicap_index: f64,
    #[serde(default)]
    pub tee: Option<String>,
    #[serde(default)]
    pub playing_handicap: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HandicapChange {
    pub name: String,
    pub previous: Option<i32>,
    pub current: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Event {
    pub name: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub course: Option<Course>,
    #[serde(default = "default_allowance")]
    pub allowance_percent: f64,
    #[serde(default)]
    pub roster: Vec<RosterEntry>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub matches: Vec<Match>,
}

fn default_allowance() -> f64 {
    100.0
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Tournament {
    pub name: String,
    #[serde(default)]
    pub events: Vec<Event>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Standing {
    pub name: String,
    pub total_score: i32,
    pub match_count: u32,
    pub event_count: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RankedStanding {
    pub rank: usize,
    #[serde(flatten)]
    pub standing: Standing,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ScoreEntry {
    pub name: String,
    pub score: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RankedEntry {
    pub name: String,
    pub score: i32,
    pub rank: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct TournamentStandings {
    pub teams: Vec<RankedStanding>,
    pub players: Vec<RankedStanding>,
}
