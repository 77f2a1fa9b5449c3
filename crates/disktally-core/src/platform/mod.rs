/// Platform-specific functionality: entry kind detection and the
/// allocated-size-on-disk query.

pub mod disk_usage;

pub use disk_usage::{file_kind, size_on_disk, size_on_disk_or_zero};
