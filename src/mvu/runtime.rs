use tracing::debug;

use crate::error::EngineError;
use crate::model::{Match, MatchTotals};
use crate::mvu::score::{Msg, MatchModel, run_effect, update};

/// Runs the MVU loop for one match edit: seeds with `init_msg` and drains
/// effects until the hole results and the totals are both recomputed.
///
/// # Errors
///
/// Returns the edit's error when it names an unknown hole or an invalid
/// stroke count; the match is left as it was.
pub fn run_match(model: &mut MatchModel, init_msg: Msg) -> Result<MatchTotals, EngineError> {
    model.error = None;
    let mut effects = update(model, init_msg);
    if let Some(e) = model.error.clone() {
        return Err(e);
    }

    while let Some(effect) = effects.pop() {
        debug!(match_id = %model.current.id, ?effect, "running effect");
        match run_effect(effect, model) {
            Msg::Failed(e) => {
                // Record failure and stop the loop.
                update(model, Msg::Failed(e.clone()));
                return Err(e);
            }
            other => {
                let next = update(model, other);
                effects.extend(next);
            }
        }
    }

    model
        .totals
        .ok_or_else(|| EngineError::from("edit produced no recomputation"))
}

/// Apply one edit to a match and return its recomputed totals.
///
/// # Errors
///
/// See [`run_match`].
pub fn apply_edit(m: &mut Match, msg: Msg) -> Result<MatchTotals, EngineError> {
    let mut model = MatchModel::new(m.clone());
    let totals = run_match(&mut model, msg)?;
    *m = model.into_match();
    Ok(totals)
}
