//! Binary min-heap used as a priority queue
//!
//! Storage grows by doubling, starting from a small fixed capacity, and is
//! released by [`MinHeap::clear`].

const INITIAL_CAPACITY: usize = 4;

/// Min-heap of `i32` values
#[derive(Debug, Clone, Default)]
pub struct MinHeap {
    items: Vec<i32>,
}

impl MinHeap {
    /// Create an empty heap. No storage is allocated until the first insert.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value
    pub fn insert(&mut self, value: i32) {
        if self.items.len() == self.items.capacity() {
            let target = (self.items.capacity() * 2).max(INITIAL_CAPACITY);
            self.items.reserve_exact(target - self.items.len());
        }
        self.items.push(value);
        self.sift_up(self.items.len() - 1);
    }

    /// Remove and return the smallest value
    pub fn delete_min(&mut self) -> Option<i32> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let min = self.items.pop();
        self.sift_down(0);
        min
    }

    /// Smallest value without removing it
    pub fn peek_min(&self) -> Option<i32> {
        self.items.first().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Allocated slots
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Drop every value and release the storage
    pub fn clear(&mut self) {
        self.items = Vec::new();
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.items[parent] <= self.items[index] {
                break;
            }
            self.items.swap(parent, index);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;
            if left < len && self.items[left] < self.items[smallest] {
                smallest = left;
            }
            if right < len && self.items[right] < self.items[smallest] {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.items.swap(index, smallest);
            index = smallest;
        }
    }
}

impl FromIterator<i32> for MinHeap {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut heap = MinHeap::new();
        for value in iter {
            heap.insert(value);
        }
        heap
    }
}
