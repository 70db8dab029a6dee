use std::collections::BinaryHeap;
use std::sync::Arc;

/// A max-heap with value semantics and O(1) copies.
///
/// Clones share the underlying [`BinaryHeap`]. The first mutation through a
/// clone whose storage is shared deep-copies the heap, so no two handles
/// ever observe each other's later `push`/`pop` calls.
///
/// # Examples
///
/// ```rust
/// use topk::collections::CowPriorityQueue;
///
/// let mut a: CowPriorityQueue<u64> = [3, 9, 4].into_iter().collect();
/// let mut b = a.clone();
/// assert!(a.is_shared());
///
/// assert_eq!(b.pop(), Some(9));
/// assert_eq!(a.peek(), Some(&9));
/// assert_eq!(b.peek(), Some(&4));
/// assert!(!a.is_shared());
/// # a.push(1);
/// ```
#[derive(Clone)]
pub struct CowPriorityQueue<T: Ord + Clone> {
    heap: Arc<BinaryHeap<T>>,
}

impl<T: Ord + Clone> CowPriorityQueue<T> {
    pub fn new() -> Self {
        CowPriorityQueue {
            heap: Arc::new(BinaryHeap::new()),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        CowPriorityQueue {
            heap: Arc::new(BinaryHeap::with_capacity(capacity)),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the greatest element without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek()
    }

    /// Returns true while another handle still shares this storage.
    #[inline]
    pub fn is_shared(&self) -> bool {
        Arc::strong_count(&self.heap) > 1
    }

    pub fn push(&mut self, item: T) {
        Arc::make_mut(&mut self.heap).push(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }
        Arc::make_mut(&mut self.heap).pop()
    }

    /// Drops every element. Shared storage is released rather than copied.
    pub fn clear(&mut self) {
        if self.is_shared() {
            self.heap = Arc::new(BinaryHeap::new());
        } else {
            Arc::make_mut(&mut self.heap).clear();
        }
    }

    /// Consumes the queue, returning its elements in ascending order.
    pub fn into_sorted_vec(self) -> Vec<T> {
        Arc::try_unwrap(self.heap)
            .unwrap_or_else(|shared| (*shared).clone())
            .into_sorted_vec()
    }
}

impl<T: Ord + Clone> Default for CowPriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone> FromIterator<T> for CowPriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        CowPriorityQueue {
            heap: Arc::new(iter.into_iter().collect()),
        }
    }
}

impl<T: Ord + Clone> Extend<T> for CowPriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        Arc::make_mut(&mut self.heap).extend(iter);
    }
}

impl<T: Ord + Clone + std::fmt::Debug> std::fmt::Debug for CowPriorityQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CowPriorityQueue")
            .field("len", &self.len())
            .field("shared", &self.is_shared())
            .field("top", &self.peek())
            .finish()
    }
}
