/// Aggregation over the walked files: per-kind / per-extension totals and
/// the largest-files selection. Both are fed one record at a time and read
/// once the walk is over.

pub mod accumulator;
pub mod top_files;

pub use accumulator::{AccumulatorStore, Snapshot, Stats};
pub use top_files::{TopKSelector, DEFAULT_TOP_COUNT};
