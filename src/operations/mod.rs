pub mod classify;
pub mod path_filter;
pub mod side_partition;
pub mod skirting;
pub mod takeoff;

pub use classify::{FaceClass, FaceClassifier};
pub use path_filter::PathIntersectionFilter;
pub use side_partition::{RoomAdjacencyPartition, SidePartition, PROBE_OFFSET};
pub use skirting::SkirtingLength;
pub use takeoff::{FinishTakeoff, TakeoffBatch};
