use rusty_matchplay::args::validation::parse_league;
use rusty_matchplay::controller::league::rescore_league;
use rusty_matchplay::model::{Course, Hole, HoleResult, Match, MatchPlayer, Tee, Tournament};

pub fn load_league() -> Tournament {
    parse_league(include_str!("../test5_league.json")).expect("fixture league should parse")
}

pub fn rescored_league() -> Tournament {
    let mut league = load_league();
    rescore_league(&mut league);
    league
}

/// 18 holes, par 72, difficulty ranks a permutation of 1..=18.
pub fn eighteen_hole_course() -> Course {
    let ranks = [7, 15, 1, 11, 3, 17, 9, 13, 5, 8, 16, 2, 12, 4, 18, 10, 14, 6];
    let pars = [4, 4, 5, 3, 4, 4, 3, 4, 5, 4, 4, 5, 3, 4, 4, 3, 4, 5];
    Course {
        name: "Ridge Links".to_string(),
        holes: ranks
            .iter()
            .zip(pars.iter())
            .enumerate()
            .map(|(i, (&difficulty_rank, &par))| Hole {
                number: u8::try_from(i + 1).unwrap(),
                difficulty_rank,
                par,
            })
            .collect(),
        tees: vec![Tee {
            name: "Blue".to_string(),
            course_rating: 71.8,
            slope: 131,
        }],
    }
}

pub fn blank_match(course: &Course, handicap1: f64, handicap2: f64) -> Match {
    Match {
        id: "m-1".to_string(),
        player1: MatchPlayer::new("Alice", "Eagles", handicap1),
        player2: MatchPlayer::new("Brian", "Hawks", handicap2),
        tee_time: None,
        starting_hole: 1,
        holes: course
            .holes
            .iter()
            .map(|h| HoleResult::new(h.number, h.difficulty_rank, h.par))
            .collect(),
        completed: false,
    }
}
