pub mod args;
pub mod error;
pub mod model;
pub mod schedule;
pub mod score;
pub mod controller {
    pub mod league;
}
pub mod mvu {
    pub mod runtime;
    pub mod score;
}
pub mod view {
    pub mod standings;
}

pub use error::EngineError;
