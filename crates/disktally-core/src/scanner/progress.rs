/// Walk events: what the walker hands to the aggregation and reporting
/// layers, one enumerated entry at a time.
use crate::model::FileRecord;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// A per-entry failure. Never fatal: the walk continues with the next entry.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The entry was listed but could not be stat'ed (or the root is missing).
    #[error("{}: {source}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The directory walker could not read an entry or a directory.
    #[error(transparent)]
    Walk(#[from] jwalk::Error),
}

impl ScanError {
    /// Path the failure relates to, when known.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Metadata { path, .. } => Some(path),
            Self::Walk(err) => err.path(),
        }
    }
}

/// One step of a walk.
#[derive(Debug)]
pub enum WalkEvent {
    /// A successfully stat'ed entry. Directories are included so a trace can
    /// show them; aggregation skips them.
    Entry(FileRecord),
    /// An entry that could not be read.
    Error(ScanError),
}

/// Running totals for a whole run, across all roots.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanSummary {
    pub files: u64,
    pub dirs: u64,
    pub errors: u64,
    pub duration: Duration,
}

impl ScanSummary {
    /// Count one event.
    pub fn record(&mut self, event: &WalkEvent) {
        match event {
            WalkEvent::Entry(rec) if rec.is_dir() => self.dirs += 1,
            WalkEvent::Entry(_) => self.files += 1,
            WalkEvent::Error(_) => self.errors += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FileKind;

    #[test]
    fn summary_counts_by_event_type() {
        let mut summary = ScanSummary::default();
        summary.record(&WalkEvent::Entry(FileRecord::new(
            "d".into(),
            FileKind::Directory,
            0,
            0,
        )));
        summary.record(&WalkEvent::Entry(FileRecord::new(
            "f".into(),
            FileKind::Regular,
            1,
            1,
        )));
        summary.record(&WalkEvent::Error(ScanError::Metadata {
            path: "gone".into(),
            source: io::Error::from(io::ErrorKind::NotFound),
        }));
        assert_eq!((summary.files, summary.dirs, summary.errors), (1, 1, 1));
    }

    #[test]
    fn metadata_error_mentions_path() {
        let err = ScanError::Metadata {
            path: PathBuf::from("some/where.txt"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().starts_with("some/where.txt: "));
        assert_eq!(err.path(), Some(Path::new("some/where.txt")));
    }
}
