/// Running size statistics keyed by entry kind and by file extension.
///
/// One `add` per enumerated file updates three accumulators together:
/// the kind bucket, the extension bucket and the grand total. Reading
/// happens through a borrowed [`Snapshot`], so the store cannot change
/// while a report is being rendered from it.
use crate::model::{FileKind, FileRecord};
use compact_str::CompactString;
use std::collections::HashMap;

/// Count and size totals for one bucket.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub count: u64,
    pub total_logical_size: u64,
    pub total_on_disk_size: u64,
}

impl Stats {
    /// Account one file.
    ///
    /// Saturating: a `u64` of bytes is out of reach for real trees, but a
    /// wrap would silently corrupt the report.
    pub fn add(&mut self, logical_size: u64, on_disk_size: u64) {
        self.count = self.count.saturating_add(1);
        self.total_logical_size = self.total_logical_size.saturating_add(logical_size);
        self.total_on_disk_size = self.total_on_disk_size.saturating_add(on_disk_size);
    }

    /// Mean logical size rounded half away from zero, or `None` when empty.
    ///
    /// Five files totalling 12 bytes average to 2 (2.4 rounds down); six
    /// files totalling 15 bytes average to 3 (2.5 rounds up).
    pub fn average_logical_size(&self) -> Option<u64> {
        if self.is_empty() {
            return None;
        }
        let total = self.total_logical_size as u128;
        let count = self.count as u128;
        Some(((total + count / 2) / count) as u64)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// The accumulation store for a whole run.
#[derive(Debug, Default, Clone)]
pub struct AccumulatorStore {
    by_kind: HashMap<FileKind, Stats>,
    by_extension: HashMap<CompactString, Stats>,
    total: Stats,
}

impl AccumulatorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account one file in its kind bucket, its extension bucket and the
    /// grand total. Buckets are created zeroed on first use.
    pub fn add(&mut self, kind: FileKind, extension: &str, logical_size: u64, on_disk_size: u64) {
        self.by_extension
            .entry(CompactString::new(extension))
            .or_default()
            .add(logical_size, on_disk_size);
        self.by_kind
            .entry(kind)
            .or_default()
            .add(logical_size, on_disk_size);
        self.total.add(logical_size, on_disk_size);
    }

    /// [`add`](Self::add) with the kind, extension and sizes taken from a record.
    pub fn add_record(&mut self, record: &FileRecord) {
        let ext = record.extension();
        self.add(record.kind, &ext, record.logical_size, record.on_disk_size);
    }

    /// Running grand total, readable while accumulation is still going on
    /// (the live summary panel uses it).
    #[inline]
    pub fn total(&self) -> &Stats {
        &self.total
    }

    /// Read-only view for reporting.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot { store: self }
    }
}

/// Borrowed, read-only view over an [`AccumulatorStore`].
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    store: &'a AccumulatorStore,
}

impl<'a> Snapshot<'a> {
    pub fn total(&self) -> &'a Stats {
        &self.store.total
    }

    /// Kind buckets sorted by total logical size descending, ties in
    /// [`FileKind`] declaration order.
    pub fn by_kind(&self) -> Vec<(FileKind, &'a Stats)> {
        let mut rows: Vec<(FileKind, &Stats)> =
            self.store.by_kind.iter().map(|(k, s)| (*k, s)).collect();
        rows.sort_by(|a, b| {
            b.1.total_logical_size
                .cmp(&a.1.total_logical_size)
                .then(a.0.cmp(&b.0))
        });
        rows
    }

    /// Extension buckets sorted by total logical size descending, ties by
    /// extension text ascending so the order is reproducible between runs.
    pub fn by_extension(&self) -> Vec<(&'a str, &'a Stats)> {
        let mut rows: Vec<(&str, &Stats)> = self
            .store
            .by_extension
            .iter()
            .map(|(ext, s)| (ext.as_str(), s))
            .collect();
        rows.sort_by(|a, b| {
            b.1.total_logical_size
                .cmp(&a.1.total_logical_size)
                .then_with(|| a.0.cmp(b.0))
        });
        rows
    }

    /// Stats for a single extension, if any file carried it.
    pub fn extension(&self, ext: &str) -> Option<&'a Stats> {
        self.store.by_extension.get(ext)
    }

    /// Stats for a single kind, if any file had it.
    pub fn kind(&self, kind: FileKind) -> Option<&'a Stats> {
        self.store.by_kind.get(&kind)
    }
}
