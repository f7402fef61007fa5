//! Z-order index: z-index buckets of window IDs.

use std::collections::BTreeMap;

use crate::window::WindowId;

/// Maps each z-index to the windows registered at it.
///
/// Buckets are append-only and keep registration order. Keys iterate in
/// ascending numeric order, which is exactly paint order.
#[derive(Debug, Clone, Default)]
pub struct ZOrderIndex {
    buckets: BTreeMap<i32, Vec<WindowId>>,
}

impl ZOrderIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `id` to the bucket for `z_index`, creating the bucket if absent.
    pub fn insert(&mut self, z_index: i32, id: WindowId) {
        self.buckets.entry(z_index).or_default().push(id);
    }

    /// Drops every bucket.
    pub fn clear(&mut self) {
        self.buckets.clear();
    }

    /// Returns the IDs sharing `z_index`, in registration order.
    #[must_use]
    pub fn bucket(&self, z_index: i32) -> &[WindowId] {
        self.buckets.get(&z_index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct z-index values in use.
    #[must_use]
    pub fn levels(&self) -> usize {
        self.buckets.len()
    }

    /// Total number of indexed windows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Returns true if no window is indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Iterates IDs back-to-front: ascending z, registration order within a bucket.
    pub fn iter(&self) -> impl Iterator<Item = WindowId> + '_ {
        self.buckets.values().flat_map(|bucket| bucket.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_is_back_to_front() {
        let mut index = ZOrderIndex::new();
        index.insert(5, WindowId(0));
        index.insert(-2, WindowId(1));
        index.insert(5, WindowId(2));
        index.insert(0, WindowId(3));

        let order: Vec<_> = index.iter().collect();
        assert_eq!(order, vec![WindowId(1), WindowId(3), WindowId(0), WindowId(2)]);
        assert_eq!(index.levels(), 3);
        assert_eq!(index.len(), 4);
    }

    #[test]
    fn test_bucket_keeps_insertion_order() {
        let mut index = ZOrderIndex::new();
        index.insert(1, WindowId(7));
        index.insert(1, WindowId(3));

        assert_eq!(index.bucket(1), &[WindowId(7), WindowId(3)]);
        assert!(index.bucket(2).is_empty());
    }

    #[test]
    fn test_clear() {
        let mut index = ZOrderIndex::new();
        index.insert(1, WindowId(0));
        index.clear();

        assert!(index.is_empty());
        assert_eq!(index.iter().count(), 0);
    }
}
