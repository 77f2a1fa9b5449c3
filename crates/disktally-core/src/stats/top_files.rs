/// Top-K largest files selection.
///
/// Keeps a bounded min-heap of the K largest records offered so far, so
/// memory stays at O(K) no matter how many files the walk produces. The
/// final membership is the same as sorting every offered record by size
/// and truncating to K.
use crate::model::FileRecord;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Default number of files kept for the "largest files" listing.
pub const DEFAULT_TOP_COUNT: usize = 500;

/// A retained record plus its offer sequence number.
///
/// Ranks by size, and among equal sizes the earlier offer ranks higher.
/// That makes both eviction and final ordering deterministic for a run.
#[derive(Debug)]
struct Ranked {
    seq: u64,
    record: FileRecord,
}

impl Ranked {
    fn key(&self) -> (u64, Reverse<u64>) {
        (self.record.logical_size, Reverse(self.seq))
    }
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Ranked {}

/// Streaming selector for the K largest files by logical size.
#[derive(Debug)]
pub struct TopKSelector {
    k: usize,
    offered: u64,
    /// Min-heap: the weakest retained record sits on top.
    heap: BinaryHeap<Reverse<Ranked>>,
}

impl TopKSelector {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            offered: 0,
            // Cap the up-front allocation; K is user-facing and may be large.
            heap: BinaryHeap::with_capacity(k.min(4_096) + 1),
        }
    }

    /// Number of records this selector will retain at most.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.k
    }

    /// Number of records offered so far.
    #[inline]
    pub fn offered(&self) -> u64 {
        self.offered
    }

    /// Consider `record` for inclusion.
    ///
    /// Returns `true` if the record is currently among the top K.
    pub fn offer(&mut self, record: FileRecord) -> bool {
        let candidate = Ranked {
            seq: self.offered,
            record,
        };
        self.offered += 1;

        if self.k == 0 {
            return false;
        }
        if self.heap.len() < self.k {
            self.heap.push(Reverse(candidate));
            return true;
        }
        let beats_weakest = self
            .heap
            .peek()
            .is_some_and(|Reverse(weakest)| candidate > *weakest);
        if beats_weakest {
            self.heap.pop();
            self.heap.push(Reverse(candidate));
        }
        beats_weakest
    }

    /// The retained records, largest first. Length is `min(k, offered)`.
    pub fn finalize(self) -> Vec<FileRecord> {
        // `into_sorted_vec` is ascending over `Reverse`, i.e. strongest first.
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(ranked)| ranked.record)
            .collect()
    }
}

impl Default for TopKSelector {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FileKind;
    use proptest::prelude::*;

    fn rec(name: &str, size: u64) -> FileRecord {
        FileRecord::new(name.into(), FileKind::Regular, size, size)
    }

    fn sizes(records: &[FileRecord]) -> Vec<u64> {
        records.iter().map(|r| r.logical_size).collect()
    }

    /// Duplicate sizes at the top must both be returned.
    #[test]
    fn finalize_keeps_duplicates() {
        let mut sel = TopKSelector::new(3);
        for (i, s) in [10u64, 50, 5, 50, 1].iter().enumerate() {
            sel.offer(rec(&format!("f{i}"), *s));
        }
        assert_eq!(sizes(&sel.finalize()), vec![50, 50, 10]);
    }

    #[test]
    fn finalize_shorter_than_k() {
        let mut sel = TopKSelector::new(10);
        sel.offer(rec("a", 3));
        sel.offer(rec("b", 7));
        let top = sel.finalize();
        assert_eq!(sizes(&top), vec![7, 3]);
        assert_eq!(top[0].path.to_str(), Some("b"));
    }

    /// `k == 0` must retain nothing and not panic.
    #[test]
    fn zero_k_retains_nothing() {
        let mut sel = TopKSelector::new(0);
        assert!(!sel.offer(rec("a", 100)));
        assert_eq!(sel.offered(), 1);
        assert!(sel.finalize().is_empty());
    }

    /// Among equal sizes, the earlier offer wins both membership and order.
    #[test]
    fn ties_resolve_by_offer_order() {
        let mut sel = TopKSelector::new(2);
        sel.offer(rec("first", 5));
        sel.offer(rec("second", 5));
        sel.offer(rec("third", 5));
        let names: Vec<String> = sel.finalize().iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn offer_reports_membership() {
        let mut sel = TopKSelector::new(1);
        assert!(sel.offer(rec("a", 10)));
        assert!(!sel.offer(rec("b", 3)));
        assert!(sel.offer(rec("c", 11)));
        assert_eq!(sel.capacity(), 1);
        assert_eq!(sizes(&sel.finalize()), vec![11]);
    }

    proptest! {
        /// The selected sizes equal "sort descending, truncate to k" and do
        /// not depend on the order records were offered in.
        #[test]
        fn matches_full_sort_for_any_order(
            input in prop::collection::vec(0u64..1_000, 0..200),
            k in 0usize..50,
        ) {
            let mut expected = input.clone();
            expected.sort_unstable_by(|a, b| b.cmp(a));
            expected.truncate(k);

            let mut forward = TopKSelector::new(k);
            for (i, s) in input.iter().enumerate() {
                forward.offer(rec(&i.to_string(), *s));
            }
            let mut backward = TopKSelector::new(k);
            for (i, s) in input.iter().enumerate().rev() {
                backward.offer(rec(&i.to_string(), *s));
            }

            prop_assert_eq!(sizes(&forward.finalize()), expected.clone());
            prop_assert_eq!(sizes(&backward.finalize()), expected);
        }
    }
}
