/// A single enumerated filesystem entry and its kind.
///
/// Records are produced by the walker, consumed immediately by the
/// accumulator and the top-K selector, and only retained by the latter.
use std::path::{Path, PathBuf};

/// The filesystem entry type. Closed set; every platform maps into it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FileKind {
    Regular,
    Directory,
    Symlink,
    BlockDevice,
    CharDevice,
    Fifo,
    Socket,
    Junction,
    Unknown,
    NotFound,
    None,
}

impl FileKind {
    /// Every kind, in display order.
    pub const ALL: [FileKind; 11] = [
        Self::Regular,
        Self::Directory,
        Self::Symlink,
        Self::BlockDevice,
        Self::CharDevice,
        Self::Fifo,
        Self::Socket,
        Self::Junction,
        Self::Unknown,
        Self::NotFound,
        Self::None,
    ];

    /// Short label for the kind table.
    pub fn label(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Directory => "directory",
            Self::Symlink => "symlink",
            Self::BlockDevice => "block",
            Self::CharDevice => "character",
            Self::Fifo => "fifo",
            Self::Socket => "socket",
            Self::Junction => "junction",
            Self::Unknown => "unknown",
            Self::NotFound => "not found",
            Self::None => "none",
        }
    }
}

/// One filesystem entry of interest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path as enumerated (root-relative paths stay relative).
    pub path: PathBuf,
    pub kind: FileKind,
    /// Apparent size reported by the filesystem.
    pub logical_size: u64,
    /// Bytes actually allocated. May be smaller (sparse, compressed) or
    /// larger (block rounding) than `logical_size`.
    pub on_disk_size: u64,
    /// Nesting below the scan root; direct children of the root are 0.
    pub depth: usize,
}

impl FileRecord {
    pub fn new(path: PathBuf, kind: FileKind, logical_size: u64, on_disk_size: u64) -> Self {
        Self {
            path,
            kind,
            logical_size,
            on_disk_size,
            depth: 0,
        }
    }

    /// Builder-style depth setter used by the walker.
    pub fn at_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.kind == FileKind::Directory
    }

    /// Final path component, falling back to the whole path for roots.
    pub fn name(&self) -> String {
        match self.path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => self.path.to_string_lossy().into_owned(),
        }
    }

    /// Aggregation key for the extension table.
    pub fn extension(&self) -> String {
        extension_of(&self.path)
    }
}

/// Extension of `path` including the leading dot, case preserved.
///
/// Files without an extension (including dot-files such as `.bashrc`)
/// map to the empty string, which is a key like any other.
pub fn extension_of(path: &Path) -> String {
    match path.extension() {
        Some(ext) => format!(".{}", ext.to_string_lossy()),
        None => String::new(),
    }
}
