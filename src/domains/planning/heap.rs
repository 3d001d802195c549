use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Binary min-heap keyed by an `f64` priority, with no knowledge of
/// grid semantics.
///
/// There is no decrease-key or arbitrary removal. Callers that push the
/// same item more than once must filter superseded entries at pop time
/// (lazy deletion); tie order among equal priorities is unspecified.
#[derive(Debug)]
pub struct MinHeap<T> {
    entries: BinaryHeap<HeapEntry<T>>,
}

#[derive(Debug)]
struct HeapEntry<T> {
    item: T,
    priority: OrderedFloat<f64>,
}

impl<T> PartialEq for HeapEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl<T> Eq for HeapEntry<T> {}

impl<T> PartialOrd for HeapEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for HeapEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering: BinaryHeap is a max-heap by default
        other.priority.cmp(&self.priority)
    }
}

impl<T> MinHeap<T> {
    pub fn new() -> Self {
        Self {
            entries: BinaryHeap::new(),
        }
    }

    pub fn push(&mut self, item: T, priority: f64) {
        self.entries.push(HeapEntry {
            item,
            priority: OrderedFloat(priority),
        });
    }

    /// Remove and return the item with the minimum priority.
    pub fn pop(&mut self) -> Option<T> {
        self.entries.pop().map(|entry| entry.item)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
