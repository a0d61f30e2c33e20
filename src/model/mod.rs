pub mod course;
pub mod score;
pub mod types;

pub use course::*;
pub use score::*;
pub use types::*;
