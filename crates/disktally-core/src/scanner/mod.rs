/// Scanner module: sequential filesystem enumeration.
///
/// [`walk`] turns a root path into a lazy, forward-only stream of
/// [`WalkEvent`]s. The walker runs `jwalk` in serial mode with sorted
/// directory listings, so entries arrive in a stable depth-first order and a
/// live trace prints the same way on every run.
///
/// Links below the root are not followed; such a link is reported with its
/// own metadata. A root given as a link to a directory is walked through it.
pub mod progress;

use crate::model::{FileKind, FileRecord};
use crate::platform;
use progress::{ScanError, WalkEvent};

use jwalk::{DirEntryIter, Parallelism, WalkDir};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub use progress::ScanSummary;

/// Lazy walk over one root. Created by [`walk`].
pub struct Walk {
    root: PathBuf,
    /// Resolved directory actually listed when `root` is a link to one.
    /// Reported paths are rebased from it back onto `root`.
    target: Option<PathBuf>,
    /// Event to yield before pulling from `inner`: a missing root, a root
    /// that is a plain file, or a listing failure queued behind its
    /// directory entry.
    pending: Option<WalkEvent>,
    inner: Option<DirEntryIter<((), ())>>,
}

impl Walk {
    fn single(root: PathBuf, event: WalkEvent) -> Self {
        Walk {
            root,
            target: None,
            pending: Some(event),
            inner: None,
        }
    }

    fn failed(root: PathBuf, source: io::Error) -> Self {
        let event = WalkEvent::Error(ScanError::Metadata {
            path: root.clone(),
            source,
        });
        Self::single(root, event)
    }

    /// Path as the user sees it: under `root`, even when listing went
    /// through the resolved target.
    fn display_path(&self, listed: PathBuf) -> PathBuf {
        match &self.target {
            Some(target) => match listed.strip_prefix(target) {
                Ok(rel) => self.root.join(rel),
                Err(_) => listed,
            },
            None => listed,
        }
    }
}

/// Start walking `root`.
///
/// The root itself is not reported; its direct children have depth 0. A
/// root that is not a directory is reported as a single depth-0 entry, and
/// a root that cannot be stat'ed yields exactly one error event.
///
/// A root that is a symlink or junction to a directory is walked through
/// the link. Links below the root are never followed.
pub fn walk(root: impl AsRef<Path>) -> Walk {
    let root = root.as_ref().to_path_buf();
    info!("Walking {}", root.display());

    let meta = match fs::symlink_metadata(&root) {
        Ok(meta) => meta,
        Err(source) => return Walk::failed(root, source),
    };

    let is_link = matches!(
        platform::file_kind(&meta),
        FileKind::Symlink | FileKind::Junction
    );
    let links_to_dir = is_link && fs::metadata(&root).is_ok_and(|m| m.is_dir());

    if !meta.is_dir() && !links_to_dir {
        let record = stat_record(&root, &meta, 0);
        return Walk::single(root, WalkEvent::Entry(record));
    }

    let target = if links_to_dir {
        match fs::canonicalize(&root) {
            Ok(target) => {
                debug!("{} resolves to {}", root.display(), target.display());
                Some(target)
            }
            Err(source) => return Walk::failed(root, source),
        }
    } else {
        None
    };

    let walker = WalkDir::new(target.as_deref().unwrap_or(&root))
        .skip_hidden(false)
        .follow_links(false)
        .sort(true)
        .parallelism(Parallelism::Serial);

    Walk {
        root,
        target,
        pending: None,
        inner: Some(walker.into_iter()),
    }
}

impl Iterator for Walk {
    type Item = WalkEvent;

    fn next(&mut self) -> Option<WalkEvent> {
        if let Some(event) = self.pending.take() {
            return Some(event);
        }
        let inner = self.inner.as_mut()?;

        for entry_result in inner.by_ref() {
            let mut entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    debug!("walk error: {err}");
                    return Some(WalkEvent::Error(ScanError::Walk(err)));
                }
            };

            let listing_error = entry.read_children_error.take().map(|err| {
                debug!("read_dir error: {err}");
                WalkEvent::Error(ScanError::Walk(err))
            });

            // Depth 0 is the root itself, which is never reported.
            if entry.depth == 0 {
                match listing_error {
                    Some(event) => return Some(event),
                    None => continue,
                }
            }

            let path = self.display_path(entry.path());
            let depth = entry.depth - 1;
            let event = match entry.metadata() {
                Ok(meta) => WalkEvent::Entry(stat_record(&path, &meta, depth)),
                Err(err) => WalkEvent::Error(ScanError::Walk(err)),
            };
            // A directory that could not be listed is still reported, followed
            // by the listing failure.
            self.pending = listing_error;
            return Some(event);
        }

        self.inner = None;
        None
    }
}

/// Build a record from already-fetched metadata.
fn stat_record(path: &Path, meta: &fs::Metadata, depth: usize) -> FileRecord {
    let kind = platform::file_kind(meta);
    let (logical, on_disk) = if meta.is_dir() {
        (0, 0)
    } else {
        (meta.len(), platform::size_on_disk_or_zero(path, meta))
    };
    FileRecord::new(path.to_path_buf(), kind, logical, on_disk).at_depth(depth)
}
