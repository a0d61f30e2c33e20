pub mod handicap;
pub mod hole;
pub mod match_totals;
pub mod sort_utils;
pub mod standings;
pub mod strokes;

pub use handicap::*;
pub use hole::*;
pub use match_totals::*;
pub use sort_utils::*;
pub use standings::*;
pub use strokes::*;
