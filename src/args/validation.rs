use std::{fs, path::Path};

use crate::error::EngineError;
use crate::model::Tournament;

/// # Errors
///
/// Will return `Err` if the file is not readable, is not a json tournament,
/// or holds a course that fails validation
pub fn check_readable_file_and_json(file: &str) -> Result<Tournament, String> {
    let path = Path::new(file);
    if !path.is_file() {
        return Err(format!("The json file '{file}' is not readable."));
    }
    load_league(path).map_err(|e| format!("The json file '{file}' is not a league: {e}"))
}

/// Read and parse a league file.
///
/// # Errors
///
/// Returns `EngineError::Io` if the file cannot be read, otherwise see [`parse_league`]
pub fn load_league(path: &Path) -> Result<Tournament, EngineError> {
    let contents = fs::read_to_string(path)?;
    parse_league(&contents)
}

/// Parse a league and validate every event course.
///
/// # Errors
///
/// Returns `EngineError::Parse` if the json is malformed and
/// `EngineError::InvalidCourse` if a course is invalid
pub fn parse_league(contents: &str) -> Result<Tournament, EngineError> {
    let league: Tournament = serde_json::from_str(contents)?;
    for event in &league.events {
        if let Some(course) = &event.course {
            course.validate()?;
        }
    }
    Ok(league)
}

/// # Errors
///
/// Will return `Err` if the value is not a number between 0 and 100
pub fn check_allowance(value: &str) -> Result<f64, String> {
    let allowance: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("Allowance '{value}' is not a number."))?;
    if !(0.0..=100.0).contains(&allowance) {
        return Err(format!("Allowance {allowance} must be between 0 and 100."));
    }
    Ok(allowance)
}
