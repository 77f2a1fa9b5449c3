/// DiskTally Core: walking, aggregation, and report rendering.
///
/// This crate contains all business logic with zero terminal dependencies.
/// Output goes through the [`report::Surface`] trait, implemented by the
/// frontend (or by [`report::BufferSurface`] in tests).
///
/// # Modules
///
/// - [`model`]: File records, entry kinds, colours and size formatting.
/// - [`stats`]: Per-kind / per-extension accumulation and top-K selection.
/// - [`report`]: Fixed-width, colour-coded rendering of live output and tables.
/// - [`scanner`]: Sequential filesystem walk producing records and errors.
/// - [`platform`]: Entry kind detection and size-on-disk queries.
pub mod model;
pub mod platform;
pub mod report;
pub mod scanner;
pub mod stats;
