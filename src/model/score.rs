use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player1,
    Player2,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Player1,
    Player2,
    #[default]
    Tie,
}

/// Net score relative to par, as shown next to a hole result.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub enum ScoreDisplay {
    Condor,
    Albatross,
    Eagle,
    Birdie,
    #[default]
    Par,
    Bogey,
    DoubleBogey,
    TripleBogey,
    Blowup,
}

impl ScoreDisplay {
    #[must_use]
    pub fn from_to_par(to_par: i32) -> Self {
        match to_par {
            i32::MIN..=-4 => Self::Condor,
            -3 => Self::Albatross,
            -2 => Self::Eagle,
            -1 => Self::Birdie,
            0 => Self::Par,
            1 => Self::Bogey,
            2 => Self::DoubleBogey,
            3 => Self::TripleBogey,
            _ => Self::Blowup,
        }
    }
}

impl From<i32> for ScoreDisplay {
    fn from(value: i32) -> Self {
        Self::from_to_par(value)
    }
}

/// Output of scoring one hole for both players.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoleNet {
    pub net1: i32,
    pub net2: i32,
    pub winner: Winner,
    pub played: bool,
    pub display1: Option<ScoreDisplay>,
    pub display2: Option<ScoreDisplay>,
}

/// One hole of a match. Raw strokes of 0 mean "not yet entered".
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct HoleResult {
    pub hole_number: u8,
    pub difficulty_rank: u8,
    pub par: i32,
    pub strokes1: i32,
    pub strokes2: i32,
    #[serde(default)]
    pub one_putt1: bool,
    #[serde(default)]
    pub one_putt2: bool,
    /// Handicap strokes each player receives on this hole.
    #[serde(default)]
    pub received1: i32,
    #[serde(default)]
    pub received2: i32,
    #[serde(default)]
    pub net1: i32,
    #[serde(default)]
    pub net2: i32,
    #[serde(default)]
    pub winner: Winner,
}

impl HoleResult {
    #[must_use]
    pub fn new(hole_number: u8, difficulty_rank: u8, par: i32) -> Self {
        Self {
            hole_number,
            difficulty_rank,
            par,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_played(&self) -> bool {
        self.strokes1 != 0 && self.strokes2 != 0
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchTotals {
    pub total1: i32,
    pub total2: i32,
    pub wins1: u32,
    pub wins2: u32,
}
