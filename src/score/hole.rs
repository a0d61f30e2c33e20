use crate::model::{HoleNet, HoleResult, ScoreDisplay, Winner};

/// Score one hole for both players.
///
/// A hole is played only once both raw scores are nonzero; until then both
/// nets are 0 and the hole is a tie regardless of the one-putt flags.
#[must_use]
pub fn hole_net_score(
    eff1: i32,
    raw1: i32,
    one_putt1: bool,
    eff2: i32,
    raw2: i32,
    one_putt2: bool,
    par: i32,
) -> HoleNet {
    if raw1 == 0 || raw2 == 0 {
        return HoleNet::default();
    }

    let net1 = raw1 - eff1 - i32::from(one_putt1);
    let net2 = raw2 - eff2 - i32::from(one_putt2);
    let winner = match net1.cmp(&net2) {
        std::cmp::Ordering::Less => Winner::Player1,
        std::cmp::Ordering::Greater => Winner::Player2,
        std::cmp::Ordering::Equal => Winner::Tie,
    };

    HoleNet {
        net1,
        net2,
        winner,
        played: true,
        display1: Some(ScoreDisplay::from_to_par(net1 - par)),
        display2: Some(ScoreDisplay::from_to_par(net2 - par)),
    }
}

impl HoleResult {
    /// Recompute net scores and the winner from the raw inputs on this hole.
    pub fn rescore(&mut self) -> HoleNet {
        let net = hole_net_score(
            self.received1,
            self.strokes1,
            self.one_putt1,
            self.received2,
            self.strokes2,
            self.one_putt2,
            self.par,
        );
        self.net1 = net.net1;
        self.net2 = net.net2;
        self.winner = net.winner;
        net
    }
}
