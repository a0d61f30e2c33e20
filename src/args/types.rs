use clap::Parser;

use crate::model::Tournament;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// League file: a json tournament with its events, teams and matches.
    #[arg(
        short = 'l',
        long,
        value_name = "LEAGUE_JSON",
        value_parser = crate::args::validation::check_readable_file_and_json
    )]
    pub league: Tournament,
    /// Only report the standings of this event.
    #[arg(short = 'e', long, value_name = "EVENT_NAME")]
    pub event: Option<String>,
    /// Recompute cached playing handicaps and report the ones that changed.
    #[arg(long)]
    pub refresh_handicaps: bool,
    /// Allowance percent applied when refreshing playing handicaps.
    #[arg(
        short = 'a',
        long,
        value_name = "PERCENT",
        value_parser = crate::args::validation::check_allowance
    )]
    pub allowance: Option<f64>,
    /// Print json instead of text tables.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub league: Tournament,
    pub event: Option<String>,
    pub refresh_handicaps: bool,
    pub allowance: Option<f64>,
    pub json: bool,
}

impl Args {
    /// Cross-field checks that clap cannot express.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `--event` names an event missing from the league file.
    pub fn validate(self) -> Result<CleanArgs, String> {
        if let Some(event) = &self.event {
            if !self.league.events.iter().any(|e| &e.name == event) {
                return Err(format!(
                    "Event '{event}' is not in league '{}'.",
                    self.league.name
                ));
            }
        }
        Ok(CleanArgs {
            league: self.league,
            event: self.event,
            refresh_handicaps: self.refresh_handicaps,
            allowance: self.allowance,
            json: self.json,
        })
    }
}
