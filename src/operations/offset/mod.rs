mod parallel_offset_2d;

pub use parallel_offset_2d::{OffsetSide, ParallelOffset2D, DEFAULT_DEGENERATE_THRESHOLD};
