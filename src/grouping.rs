// 🗂️ Grouped Index - one-to-many view over a flat collection
//
// Built on demand from a snapshot; there is no incremental maintenance.
// Rebuild after mutating the source.

use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct GroupedIndex<K, T> {
    groups: BTreeMap<K, Vec<T>>,
}

impl<K: Ord, T> GroupedIndex<K, T> {
    /// Group items by `key`, preserving source order inside each group
    pub fn build<I, F>(items: I, key: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> K,
    {
        let mut groups: BTreeMap<K, Vec<T>> = BTreeMap::new();
        for item in items {
            groups.entry(key(&item)).or_default().push(item);
        }
        GroupedIndex { groups }
    }

    /// Dependents for a key; empty when the key has none
    pub fn get(&self, key: &K) -> &[T] {
        self.groups.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.groups.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.groups.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[T])> + '_ {
        self.groups.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Number of distinct keys
    pub fn key_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of grouped items across all keys
    pub fn total(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<K: Ord, T> Default for GroupedIndex<K, T> {
    fn default() -> Self {
        GroupedIndex {
            groups: BTreeMap::new(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_preserves_order_and_count() {
        let source = vec![(101, 1), (102, 1), (103, 3), (104, 2), (105, 2)];
        let index = GroupedIndex::build(source, |(_, owner)| *owner);

        assert_eq!(index.key_count(), 3);
        assert_eq!(index.total(), 5);
        assert_eq!(index.get(&1), &[(101, 1), (102, 1)]);
        assert_eq!(index.get(&2), &[(104, 2), (105, 2)]);
        assert_eq!(index.get(&3), &[(103, 3)]);
    }

    #[test]
    fn test_missing_key_is_empty() {
        let index = GroupedIndex::build(vec!["a", "bb"], |s| s.len());
        assert!(index.get(&7).is_empty());
        assert!(!index.contains_key(&7));
    }

    #[test]
    fn test_keys_sorted() {
        let index = GroupedIndex::build(vec![5, 1, 3, 1], |n| *n);
        let keys: Vec<i32> = index.keys().copied().collect();
        assert_eq!(keys, vec![1, 3, 5]);
    }

    #[test]
    fn test_empty_source() {
        let index: GroupedIndex<i64, i64> = GroupedIndex::build(Vec::new(), |n| *n);
        assert!(index.is_empty());
        assert_eq!(index.total(), 0);
    }
}
