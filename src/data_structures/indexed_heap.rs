use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use num_traits::Float;

/// Errors reported by [`IndexedMinHeap`] operations.
///
/// A failed operation never mutates the heap.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HeapError {
    #[error("Value already present in heap: {0}")]
    DuplicateValue(String),

    #[error("Value not present in heap: {0}")]
    ValueNotFound(String),

    #[error("New key for {0} is not strictly less than its current key")]
    KeyNotDecreased(String),

    #[error("Key is not a comparable distance (NaN)")]
    InvalidKey,

    #[error("Heap is empty")]
    Empty,
}

/// A (value, key) pair stored at a heap array position
#[derive(Debug, Clone)]
struct HeapEntry<V, K> {
    value: V,
    key: K,
}

/// Binary min-heap over (value, key) pairs with a value -> position index.
///
/// Every value appears at most once. Besides the usual insert and extract-min,
/// the index gives O(1) `contains`/`key_of` and O(log n) `decrease_key` for
/// any value in the heap, not just the minimum.
///
/// Layout is 0-indexed: the parent of `i` is `(i - 1) / 2`, its children are
/// `2i + 1` and `2i + 2`. For every value `v` in the heap,
/// `entries[positions[v]].value == v`.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<V, K>
where
    V: Eq + Hash + Clone + Debug,
    K: Float + Debug,
{
    entries: Vec<HeapEntry<V, K>>,
    positions: HashMap<V, usize>,
}

impl<V, K> Default for IndexedMinHeap<V, K>
where
    V: Eq + Hash + Clone + Debug,
    K: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, K> IndexedMinHeap<V, K>
where
    V: Eq + Hash + Clone + Debug,
    K: Float + Debug,
{
    /// Creates a new empty heap
    pub fn new() -> Self {
        IndexedMinHeap {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Creates a new empty heap with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedMinHeap {
            entries: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Builds a heap from (value, key) pairs in O(n) using bottom-up heapify.
    ///
    /// Fails on the first duplicate value or NaN key.
    pub fn from_entries<I>(pairs: I) -> Result<Self, HeapError>
    where
        I: IntoIterator<Item = (V, K)>,
    {
        let pairs = pairs.into_iter();
        let mut heap = Self::with_capacity(pairs.size_hint().0);

        for (value, key) in pairs {
            if key.is_nan() {
                return Err(HeapError::InvalidKey);
            }
            if heap.positions.contains_key(&value) {
                return Err(HeapError::DuplicateValue(format!("{:?}", value)));
            }
            heap.positions.insert(value.clone(), heap.entries.len());
            heap.entries.push(HeapEntry { value, key });
        }

        // Internal nodes are 0..n/2; sift each down, deepest first
        for pos in (0..heap.entries.len() / 2).rev() {
            heap.sift_down(pos);
        }

        Ok(heap)
    }

    /// Returns the number of entries in the heap
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the heap has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if `value` is currently in the heap
    pub fn contains(&self, value: &V) -> bool {
        self.positions.contains_key(value)
    }

    /// Returns the current key of `value`, if present
    pub fn key_of(&self, value: &V) -> Option<K> {
        self.positions.get(value).map(|&pos| self.entries[pos].key)
    }

    /// Iterates over the values in the heap in array order
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.entries.iter().map(|entry| &entry.value)
    }

    /// Removes all entries
    pub fn clear(&mut self) {
        self.entries.clear();
        self.positions.clear();
    }

    /// Inserts `value` with priority `key`.
    pub fn insert(&mut self, value: V, key: K) -> Result<(), HeapError> {
        if key.is_nan() {
            return Err(HeapError::InvalidKey);
        }
        if self.positions.contains_key(&value) {
            return Err(HeapError::DuplicateValue(format!("{:?}", value)));
        }

        let pos = self.entries.len();
        self.positions.insert(value.clone(), pos);
        self.entries.push(HeapEntry { value, key });
        self.sift_up(pos);
        Ok(())
    }

    /// Lowers the key of `value` to `new_key`.
    ///
    /// `new_key` must be strictly less than the current key.
    pub fn decrease_key(&mut self, value: &V, new_key: K) -> Result<(), HeapError> {
        if new_key.is_nan() {
            return Err(HeapError::InvalidKey);
        }
        let pos = *self
            .positions
            .get(value)
            .ok_or_else(|| HeapError::ValueNotFound(format!("{:?}", value)))?;
        if !(new_key < self.entries[pos].key) {
            return Err(HeapError::KeyNotDecreased(format!("{:?}", value)));
        }

        self.entries[pos].key = new_key;
        self.sift_up(pos);
        Ok(())
    }

    /// Returns the minimum value and its key without removing it
    pub fn peek_min(&self) -> Result<(&V, K), HeapError> {
        self.entries
            .first()
            .map(|entry| (&entry.value, entry.key))
            .ok_or(HeapError::Empty)
    }

    /// Removes and returns the value with the smallest key, along with that key
    pub fn extract_min(&mut self) -> Result<(V, K), HeapError> {
        if self.entries.is_empty() {
            return Err(HeapError::Empty);
        }

        let last = self.entries.len() - 1;
        self.swap_entries(0, last);
        let min = self.entries.pop().ok_or(HeapError::Empty)?;
        self.positions.remove(&min.value);

        if !self.entries.is_empty() {
            self.sift_down(0);
        }

        Ok((min.value, min.key))
    }

    /// Swaps two array slots and repairs both index entries.
    ///
    /// This is the only place entries move once they are in the array.
    fn swap_entries(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.entries.swap(a, b);
        if let Some(pos) = self.positions.get_mut(&self.entries[a].value) {
            *pos = a;
        }
        if let Some(pos) = self.positions.get_mut(&self.entries[b].value) {
            *pos = b;
        }
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = parent_of(pos);
            if !(self.entries[pos].key < self.entries[parent].key) {
                break;
            }
            self.swap_entries(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.entries.len();
        loop {
            let left = left_child_of(pos);
            let right = left + 1;

            // Each child is compared against the best candidate so far
            let mut smallest = pos;
            if left < len && self.entries[left].key < self.entries[smallest].key {
                smallest = left;
            }
            if right < len && self.entries[right].key < self.entries[smallest].key {
                smallest = right;
            }

            if smallest == pos {
                break;
            }
            self.swap_entries(pos, smallest);
            pos = smallest;
        }
    }
}

#[inline]
fn parent_of(pos: usize) -> usize {
    (pos - 1) / 2
}

#[inline]
fn left_child_of(pos: usize) -> usize {
    2 * pos + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Checks heap order and the index bijection for every live position
    fn assert_invariants<V, K>(heap: &IndexedMinHeap<V, K>)
    where
        V: Eq + Hash + Clone + Debug,
        K: Float + Debug,
    {
        let len = heap.entries.len();
        assert_eq!(heap.positions.len(), len, "index size must match array size");

        for (pos, entry) in heap.entries.iter().enumerate() {
            assert_eq!(
                heap.positions.get(&entry.value),
                Some(&pos),
                "index out of sync for {:?}",
                entry.value
            );
            for child in [2 * pos + 1, 2 * pos + 2] {
                if child < len {
                    assert!(
                        entry.key <= heap.entries[child].key,
                        "heap order violated between {} and {}",
                        pos,
                        child
                    );
                }
            }
        }
    }

    #[test]
    fn test_insert_keeps_minimum_on_top() {
        let mut heap = IndexedMinHeap::new();
        for (value, key) in [("c", 3.0), ("a", 1.0), ("d", 4.0), ("b", 2.0), ("e", 0.5)] {
            heap.insert(value, key).unwrap();
            assert_invariants(&heap);
        }

        assert_eq!(heap.len(), 5);
        assert_eq!(heap.peek_min().unwrap(), (&"e", 0.5));
    }

    #[test]
    fn test_insert_duplicate_is_rejected_without_mutation() {
        let mut heap = IndexedMinHeap::new();
        heap.insert(1, 5.0).unwrap();
        heap.insert(2, 7.0).unwrap();

        let err = heap.insert(1, 0.0).unwrap_err();
        assert!(matches!(err, HeapError::DuplicateValue(_)));
        assert_eq!(heap.len(), 2);
        assert_eq!(heap.key_of(&1), Some(5.0));
        assert_invariants(&heap);
    }

    #[test]
    fn test_nan_keys_are_rejected() {
        let mut heap = IndexedMinHeap::new();
        assert_eq!(heap.insert(1, f64::NAN), Err(HeapError::InvalidKey));
        assert!(heap.is_empty());

        heap.insert(1, 3.0).unwrap();
        assert_eq!(heap.decrease_key(&1, f64::NAN), Err(HeapError::InvalidKey));
        assert_eq!(heap.key_of(&1), Some(3.0));
    }

    #[test]
    fn test_extract_min_yields_non_decreasing_keys() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut heap = IndexedMinHeap::new();
        for value in 0..200u32 {
            heap.insert(value, rng.gen_range(0.0..1000.0)).unwrap();
            assert_invariants(&heap);
        }

        let mut last = f64::NEG_INFINITY;
        while !heap.is_empty() {
            let (value, key) = heap.extract_min().unwrap();
            assert!(key >= last, "extracted {} after {}", key, last);
            assert!(!heap.contains(&value));
            assert_invariants(&heap);
            last = key;
        }
    }

    #[test]
    fn test_extract_min_on_empty_heap() {
        let mut heap: IndexedMinHeap<u32, f64> = IndexedMinHeap::new();
        assert_eq!(heap.extract_min().unwrap_err(), HeapError::Empty);
        assert_eq!(heap.peek_min().unwrap_err(), HeapError::Empty);
    }

    #[test]
    fn test_extract_last_entry_clears_index() {
        let mut heap = IndexedMinHeap::new();
        heap.insert('x', 1.0).unwrap();
        assert_eq!(heap.extract_min().unwrap(), ('x', 1.0));
        assert!(heap.is_empty());
        assert!(!heap.contains(&'x'));
        assert_invariants(&heap);
    }

    #[test]
    fn test_decrease_key_succeeds_only_when_strictly_smaller() {
        let mut heap = IndexedMinHeap::new();
        heap.insert("a", 10.0).unwrap();
        heap.insert("b", 20.0).unwrap();

        assert!(matches!(
            heap.decrease_key(&"b", 20.0),
            Err(HeapError::KeyNotDecreased(_))
        ));
        assert!(matches!(
            heap.decrease_key(&"b", 25.0),
            Err(HeapError::KeyNotDecreased(_))
        ));
        assert_eq!(heap.key_of(&"b"), Some(20.0));
        assert_invariants(&heap);

        heap.decrease_key(&"b", 5.0).unwrap();
        assert_invariants(&heap);
        assert_eq!(heap.peek_min().unwrap(), (&"b", 5.0));
    }

    #[test]
    fn test_decrease_key_on_missing_value() {
        let mut heap = IndexedMinHeap::new();
        heap.insert(1, 1.0).unwrap();
        assert!(matches!(
            heap.decrease_key(&2, 0.0),
            Err(HeapError::ValueNotFound(_))
        ));
        assert_eq!(heap.len(), 1);
    }

    #[test]
    fn test_decrease_key_from_infinity() {
        let mut heap = IndexedMinHeap::new();
        for v in 0..10 {
            heap.insert(v, f64::INFINITY).unwrap();
        }
        heap.decrease_key(&9, 0.0).unwrap();
        assert_invariants(&heap);
        heap.decrease_key(&4, 3.0).unwrap();
        assert_invariants(&heap);

        assert_eq!(heap.extract_min().unwrap(), (9, 0.0));
        assert_eq!(heap.extract_min().unwrap(), (4, 3.0));
        assert_eq!(heap.extract_min().unwrap().1, f64::INFINITY);
        assert_invariants(&heap);
    }

    #[test]
    fn test_sift_down_with_only_left_child() {
        // Three entries: after extraction the root has a single left child
        let mut heap = IndexedMinHeap::new();
        heap.insert(0, 1.0).unwrap();
        heap.insert(1, 3.0).unwrap();
        heap.insert(2, 2.0).unwrap();

        assert_eq!(heap.extract_min().unwrap(), (0, 1.0));
        assert_invariants(&heap);
        assert_eq!(heap.extract_min().unwrap(), (2, 2.0));
        assert_eq!(heap.extract_min().unwrap(), (1, 3.0));
    }

    #[test]
    fn test_sift_down_picks_right_child_when_smallest() {
        let mut heap = IndexedMinHeap::from_entries(vec![
            ("root", 0.0),
            ("left", 5.0),
            ("right", 1.0),
            ("ll", 6.0),
            ("lr", 7.0),
        ])
        .unwrap();
        assert_invariants(&heap);

        assert_eq!(heap.extract_min().unwrap().0, "root");
        assert_invariants(&heap);
        assert_eq!(heap.peek_min().unwrap(), (&"right", 1.0));
    }

    #[test]
    fn test_peek_is_idempotent() {
        let mut heap = IndexedMinHeap::new();
        heap.insert(3, 3.0).unwrap();
        heap.insert(1, 1.0).unwrap();

        let first = heap.peek_min().map(|(v, k)| (*v, k)).unwrap();
        let second = heap.peek_min().map(|(v, k)| (*v, k)).unwrap();
        assert_eq!(first, second);
        assert_eq!(heap.len(), 2);
    }

    #[test]
    fn test_from_entries_heapifies() {
        let pairs: Vec<(usize, f64)> = (0..50).map(|i| (i, ((i * 37) % 50) as f64)).collect();
        let mut heap = IndexedMinHeap::from_entries(pairs).unwrap();
        assert_invariants(&heap);
        assert_eq!(heap.len(), 50);

        let mut last = f64::NEG_INFINITY;
        while let Ok((_, key)) = heap.extract_min() {
            assert!(key >= last);
            last = key;
        }
    }

    #[test]
    fn test_from_entries_rejects_duplicates() {
        let result = IndexedMinHeap::from_entries(vec![(1, 1.0), (2, 2.0), (1, 3.0)]);
        assert!(matches!(result, Err(HeapError::DuplicateValue(_))));
    }

    #[test]
    fn test_random_operation_sequences_keep_invariants() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut heap: IndexedMinHeap<u32, f64> = IndexedMinHeap::new();

        for _ in 0..2000 {
            match rng.gen_range(0..3) {
                0 => {
                    let value = rng.gen_range(0..100);
                    let key = rng.gen_range(0.0..100.0);
                    let existed = heap.contains(&value);
                    assert_eq!(heap.insert(value, key).is_ok(), !existed);
                }
                1 => {
                    let value = rng.gen_range(0..100);
                    let new_key = rng.gen_range(0.0..100.0);
                    let expected = heap.key_of(&value).map_or(false, |k| new_key < k);
                    assert_eq!(heap.decrease_key(&value, new_key).is_ok(), expected);
                }
                _ => {
                    let min_before = heap.peek_min().map(|(_, k)| k).ok();
                    match heap.extract_min() {
                        Ok((_, key)) => assert_eq!(Some(key), min_before),
                        Err(err) => assert_eq!(err, HeapError::Empty),
                    }
                }
            }
            assert_invariants(&heap);
        }
    }

    #[test]
    fn test_values_and_clear() {
        let mut heap = IndexedMinHeap::new();
        heap.insert("a", 1.0f32).unwrap();
        heap.insert("b", 2.0f32).unwrap();

        let mut values: Vec<_> = heap.values().copied().collect();
        values.sort();
        assert_eq!(values, vec!["a", "b"]);

        heap.clear();
        assert!(heap.is_empty());
        assert!(!heap.contains(&"a"));
    }
}
