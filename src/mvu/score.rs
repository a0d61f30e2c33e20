use crate::error::EngineError;
use crate::model::{HoleResult, Match, MatchTotals, Side};
use crate::score::match_totals::{allocate_match_strokes, match_totals};

#[derive(Debug, Clone)]
pub struct MatchModel {
    pub current: Match,
    pub totals: Option<MatchTotals>,
    pub error: Option<EngineError>,
}

impl MatchModel {
    #[must_use]
    pub fn new(current: Match) -> Self {
        Self {
            current,
            totals: None,
            error: None,
        }
    }

    #[must_use]
    pub fn into_match(self) -> Match {
        self.current
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    StrokesEntered {
        hole_number: u8,
        side: Side,
        strokes: i32,
    },
    OnePuttSet {
        hole_number: u8,
        side: Side,
        one_putt: bool,
    },
    HandicapsChanged {
        handicap1: f64,
        handicap2: f64,
    },
    MarkCompleted(bool),
    HolesRescored(Vec<HoleResult>),
    TotalsComputed(MatchTotals),
    Failed(EngineError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    RescoreHoles,
    RecomputeTotals,
}

fn edit_hole(
    model: &mut MatchModel,
    hole_number: u8,
    edit: impl FnOnce(&mut HoleResult),
) -> Vec<Effect> {
    match model.current.hole_mut(hole_number) {
        Some(hole) => {
            edit(hole);
            vec![Effect::RescoreHoles]
        }
        None => {
            model.error = Some(EngineError::NotFound(format!(
                "hole {hole_number} in match {}",
                model.current.id
            )));
            vec![]
        }
    }
}

pub fn update(model: &mut MatchModel, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::StrokesEntered {
            hole_number,
            side,
            strokes,
        } => {
            if strokes < 0 {
                model.error = Some(EngineError::from(format!(
                    "negative stroke count {strokes} on hole {hole_number}"
                )));
                return vec![];
            }
            edit_hole(model, hole_number, |hole| match side {
                Side::Player1 => hole.strokes1 = strokes,
                Side::Player2 => hole.strokes2 = strokes,
            })
        }
        Msg::OnePuttSet {
            hole_number,
            side,
            one_putt,
        } => edit_hole(model, hole_number, |hole| match side {
            Side::Player1 => hole.one_putt1 = one_putt,
            Side::Player2 => hole.one_putt2 = one_putt,
        }),
        Msg::HandicapsChanged {
            handicap1,
            handicap2,
        } => {
            model.current.player_mut(Side::Player1).handicap = handicap1;
            model.current.player_mut(Side::Player2).handicap = handicap2;
            vec![Effect::RescoreHoles]
        }
        Msg::MarkCompleted(completed) => {
            model.current.completed = completed;
            vec![Effect::RescoreHoles]
        }
        Msg::HolesRescored(holes) => {
            model.current.holes = holes;
            model.totals = None;
            vec![Effect::RecomputeTotals]
        }
        Msg::TotalsComputed(totals) => {
            for (side, score, hole_wins) in [
                (Side::Player1, totals.total1, totals.wins1),
                (Side::Player2, totals.total2, totals.wins2),
            ] {
                let player = model.current.player_mut(side);
                player.score = score;
                player.hole_wins = hole_wins;
            }
            model.totals = Some(totals);
            vec![]
        }
        Msg::Failed(e) => {
            model.error = Some(e);
            vec![]
        }
    }
}

#[must_use]
pub fn run_effect(effect: Effect, model: &MatchModel) -> Msg {
    match effect {
        Effect::RescoreHoles => {
            let mut scratch = model.current.clone();
            allocate_match_strokes(&mut scratch);
            for hole in &mut scratch.holes {
                hole.rescore();
            }
            Msg::HolesRescored(scratch.holes)
        }
        Effect::RecomputeTotals => Msg::TotalsComputed(match_totals(&model.current.holes)),
    }
}
