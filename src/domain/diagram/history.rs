//! Bounded snapshot history with FIFO eviction.

use std::collections::VecDeque;

use super::snapshot::Snapshot;

/// Capacity-bounded, insertion-ordered log of snapshots.
///
/// Appending beyond capacity evicts the oldest entry, so the buffer always
/// holds the most recent `capacity` snapshots in order.
#[derive(Debug, Clone)]
pub struct SnapshotHistory {
    entries: VecDeque<Snapshot>,
    capacity: usize,
}

impl SnapshotHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a snapshot, evicting the oldest entry on overflow.
    pub fn push(&mut self, snapshot: Snapshot) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(snapshot);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Oldest-to-newest iteration.
    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&Snapshot> {
        self.entries.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diagram::{DiagramDocument, ExportPayload};
    use proptest::prelude::*;

    fn snapshot(tag: usize) -> Snapshot {
        Snapshot::new(
            ExportPayload::new(format!("data:image/png;base64,{tag}")),
            DiagramDocument::new(format!("<mxfile>{tag}</mxfile>")),
        )
    }

    #[test]
    fn push_keeps_insertion_order() {
        let mut history = SnapshotHistory::new(20);
        for i in 0..5 {
            history.push(snapshot(i));
        }
        let docs: Vec<_> = history.iter().map(|s| s.document().as_str().to_string()).collect();
        assert_eq!(docs[0], "<mxfile>0</mxfile>");
        assert_eq!(docs[4], "<mxfile>4</mxfile>");
        assert_eq!(history.latest().unwrap().document().as_str(), "<mxfile>4</mxfile>");
    }

    #[test]
    fn overflow_evicts_the_oldest_entries() {
        let mut history = SnapshotHistory::new(20);
        for i in 0..25 {
            history.push(snapshot(i));
        }
        assert_eq!(history.len(), 20);
        let docs: Vec<_> = history.iter().map(|s| s.document().as_str().to_string()).collect();
        assert_eq!(docs[0], "<mxfile>5</mxfile>");
        assert_eq!(docs[19], "<mxfile>24</mxfile>");
    }

    #[test]
    fn clear_empties_the_buffer() {
        let mut history = SnapshotHistory::new(20);
        history.push(snapshot(0));
        history.clear();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }

    proptest! {
        #[test]
        fn length_never_exceeds_capacity(pushes in 0usize..100, capacity in 1usize..32) {
            let mut history = SnapshotHistory::new(capacity);
            for i in 0..pushes {
                history.push(snapshot(i));
            }
            prop_assert!(history.len() <= capacity);
            prop_assert_eq!(history.len(), pushes.min(capacity));
        }

        #[test]
        fn buffer_holds_the_most_recent_entries_in_order(pushes in 1usize..100) {
            let mut history = SnapshotHistory::new(20);
            for i in 0..pushes {
                history.push(snapshot(i));
            }
            let first_kept = pushes.saturating_sub(20);
            for (offset, kept) in history.iter().enumerate() {
                let expected = format!("<mxfile>{}</mxfile>", first_kept + offset);
                prop_assert_eq!(kept.document().as_str(), expected.as_str());
            }
        }
    }
}
