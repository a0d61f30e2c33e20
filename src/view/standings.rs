use std::fmt::{self, Write};

use crate::controller::league::LeagueReport;
use crate::model::RankedStanding;

fn write_table(
    out: &mut String,
    title: &str,
    rows: &[RankedStanding],
    with_events: bool,
) -> fmt::Result {
    writeln!(out, "{title}")?;
    write!(out, "{:>4}  {:<24} {:>7} {:>7}", "Rank", "Name", "Score", "Matches")?;
    if with_events {
        write!(out, " {:>6}", "Events")?;
    }
    out.push('\n');

    for row in rows {
        let s = &row.standing;
        write!(
            out,
            "{:>4}  {:<24} {:>7} {:>7}",
            row.rank, s.name, s.total_score, s.match_count
        )?;
        if with_events {
            write!(out, " {:>6}", s.event_count)?;
        }
        out.push('\n');
    }
    out.push('\n');
    Ok(())
}

/// Plain-text rendering of a [`LeagueReport`].
///
/// # Errors
///
/// Returns `fmt::Error` if a row fails to format.
pub fn render_report_text(report: &LeagueReport) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{}\n", report.league)?;

    if !report.handicap_changes.is_empty() {
        writeln!(out, "Playing handicaps updated")?;
        let shown = |v: Option<i32>| v.map_or_else(|| "n/a".to_string(), |h| h.to_string());
        for c in &report.handicap_changes {
            writeln!(
                out,
                "  {} / {}: {} -> {}",
                c.event,
                c.change.name,
                shown(c.change.previous),
                shown(c.change.current)
            )?;
        }
        out.push('\n');
    }

    for event in &report.events {
        write_table(&mut out, &format!("Teams, {}", event.event), &event.teams, false)?;
    }

    if let Some(overall) = &report.overall {
        write_table(&mut out, "Teams, all events", &overall.teams, true)?;
        write_table(&mut out, "Players, all events", &overall.players, true)?;
    }

    Ok(out)
}
