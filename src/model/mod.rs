pub mod result;
pub mod room;
pub mod stair;

pub use result::{FinishResult, ResultSink};
pub use room::{first_containing, PrismRoom, Room};
pub use stair::{Landing, Run, RunStyle, Staircase};
