use serde::{Deserialize, Serialize};

use crate::error::EngineError;

pub const MIN_PAR: i32 = 3;
pub const MAX_PAR: i32 = 6;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Tee {
    pub name: String,
    pub course_rating: f64,
    pub slope: u32,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hole {
    pub number: u8,
    /// Stroke index, 1 is the hardest hole.
    pub difficulty_rank: u8,
    pub par: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Course {
    pub name: String,
    pub holes: Vec<Hole>,
    pub tees: Vec<Tee>,
}

impl Course {
    #[must_use]
    pub fn par(&self) -> i32 {
        self.holes.iter().map(|h| h.par).sum()
    }

    #[must_use]
    pub fn hole_count(&self) -> u8 {
        u8::try_from(self.holes.len()).unwrap_or(u8::MAX)
    }

    #[must_use]
    pub fn tee(&self, name: &str) -> Option<&Tee> {
        self.tees.iter().find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Check the hole layout and tee data.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidCourse` when the course has neither 9 nor 18 holes,
    /// when hole numbers or difficulty ranks are not a permutation of `1..=N`,
    /// when a par is outside 3-6, or when a tee has a zero slope.
    pub fn validate(&self) -> Result<(), EngineError> {
        let n = self.holes.len();
        if n != 9 && n != 18 {
            return Err(EngineError::InvalidCourse(format!(
                "{} has {n} holes, expected 9 or 18",
                self.name
            )));
        }

        let mut seen_numbers = vec![false; n];
        let mut seen_ranks = vec![false; n];
        for hole in &self.holes {
            let number = usize::from(hole.number);
            if number == 0 || number > n || seen_numbers[number - 1] {
                return Err(EngineError::InvalidCourse(format!(
                    "{}: hole number {} is out of range or repeated",
                    self.name, hole.number
                )));
            }
            seen_numbers[number - 1] = true;

            let rank = usize::from(hole.difficulty_rank);
            if rank == 0 || rank > n || seen_ranks[rank - 1] {
                return Err(EngineError::InvalidCourse(format!(
                    "{}: difficulty rank {} on hole {} is out of range or repeated",
                    self.name, hole.difficulty_rank, hole.number
                )));
            }
            seen_ranks[rank - 1] = true;

            if !(MIN_PAR..=MAX_PAR).contains(&hole.par) {
                return Err(EngineError::InvalidCourse(format!(
                    "{}: par {} on hole {} is outside {MIN_PAR}-{MAX_PAR}",
                    self.name, hole.par, hole.number
                )));
            }
        }

        if let Some(tee) = self.tees.iter().find(|t| t.slope == 0) {
            return Err(EngineError::InvalidCourse(format!(
                "{}: tee {} has a zero slope",
                self.name, tee.name
            )));
        }

        Ok(())
    }
}
