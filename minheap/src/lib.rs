/*!
A fixed capacity, array backed binary min-heap.

Entries are ordered by their [`Weighted::weight`]. Entries with the same weight leave the heap in
the order they were inserted, which makes everything built on top of it deterministic.

```
use minheap::{MinHeap, Weighted};

struct Item(u64);
impl Weighted for Item {
    fn weight(&self) -> u64 {
        self.0
    }
}

let mut heap = MinHeap::with_capacity(3);
heap.insert(Item(5)).unwrap();
heap.insert(Item(1)).unwrap();
heap.insert(Item(3)).unwrap();
assert_eq!(heap.extract_min().unwrap().0, 1);
assert_eq!(heap.extract_min().unwrap().0, 3);
```
*/

mod error;

use log::trace;

pub use error::HeapError;

/// Anything that can be stored in the [`MinHeap`].
pub trait Weighted {
    fn weight(&self) -> u64;
}

#[derive(Debug, Clone)]
struct Slot<T> {
    /// insertion counter, used as tie break for equal weights
    seq: u64,
    item: T,
}

impl<T: Weighted> Slot<T> {
    #[inline]
    fn key(&self) -> (u64, u64) {
        (self.item.weight(), self.seq)
    }
}

#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    slots: Vec<Slot<T>>,
    capacity: usize,
    next_seq: u64,
}

impl<T> MinHeap<T> {
    /// Creates an empty heap which accepts at most `capacity` entries at the same time.
    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            slots: Vec::with_capacity(capacity),
            capacity,
            next_seq: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[inline]
fn parent(pos: usize) -> usize {
    (pos - 1) / 2
}

#[inline]
fn left(pos: usize) -> usize {
    2 * pos + 1
}

#[inline]
fn right(pos: usize) -> usize {
    2 * pos + 2
}

impl<T: Weighted> MinHeap<T> {
    /// Appends `item` and sifts it up while it is strictly lighter than its parent.
    pub fn insert(&mut self, item: T) -> Result<(), HeapError> {
        if self.slots.len() == self.capacity {
            return Err(HeapError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        trace!("insert weight:{} seq:{}", item.weight(), seq);

        self.slots.push(Slot { seq, item });
        self.sift_up(self.slots.len() - 1);
        debug_assert!(self.is_valid_min_heap());
        Ok(())
    }

    /// Removes the lightest entry. On equal weights the earliest inserted entry is returned.
    pub fn extract_min(&mut self) -> Result<T, HeapError> {
        if self.slots.is_empty() {
            return Err(HeapError::EmptyQueueAccess);
        }
        // move the last element to the vacated root
        let slot = self.slots.swap_remove(0);
        if !self.slots.is_empty() {
            self.sift_down(0);
        }
        debug_assert!(self.is_valid_min_heap());
        trace!("extract weight:{} seq:{}", slot.item.weight(), slot.seq);
        Ok(slot.item)
    }

    pub fn peek(&self) -> Option<&T> {
        self.slots.first().map(|slot| &slot.item)
    }

    /// every non-root entry must not be lighter than its parent
    pub fn is_valid_min_heap(&self) -> bool {
        (1..self.slots.len()).all(|pos| self.slots[parent(pos)].key() <= self.slots[pos].key())
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent_pos = parent(pos);
            if self.slots[pos].key() < self.slots[parent_pos].key() {
                self.slots.swap(pos, parent_pos);
                pos = parent_pos;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.slots.len();
        loop {
            let (l, r) = (left(pos), right(pos));
            let mut smallest = pos;
            if l < len && self.slots[l].key() < self.slots[smallest].key() {
                smallest = l;
            }
            if r < len && self.slots[r].key() < self.slots[smallest].key() {
                smallest = r;
            }
            if smallest == pos {
                return;
            }
            self.slots.swap(pos, smallest);
            pos = smallest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Item {
        weight: u64,
        id: char,
    }

    impl Weighted for Item {
        fn weight(&self) -> u64 {
            self.weight
        }
    }

    fn item(id: char, weight: u64) -> Item {
        Item { weight, id }
    }

    fn drain(heap: &mut MinHeap<Item>) -> Vec<Item> {
        let mut out = vec![];
        while let Ok(item) = heap.extract_min() {
            out.push(item);
        }
        out
    }

    #[test]
    fn extracts_in_weight_order() {
        let weights = [10, 15, 12, 3, 4, 13, 1, 8, 20, 14];
        let mut heap = MinHeap::with_capacity(weights.len());
        for (i, weight) in weights.iter().enumerate() {
            heap.insert(item((b'A' + i as u8) as char, *weight)).unwrap();
        }
        assert_eq!(heap.len(), 10);
        assert!(heap.is_valid_min_heap());

        let out: Vec<u64> = drain(&mut heap).iter().map(|el| el.weight).collect();
        assert_eq!(out, vec![1, 3, 4, 8, 10, 12, 13, 14, 15, 20]);
        assert!(heap.is_empty());
    }

    #[test]
    fn ties_leave_in_insertion_order() {
        let mut heap = MinHeap::with_capacity(5);
        heap.insert(item('a', 2)).unwrap();
        heap.insert(item('b', 1)).unwrap();
        heap.insert(item('c', 2)).unwrap();
        heap.insert(item('d', 1)).unwrap();
        heap.insert(item('e', 2)).unwrap();

        let ids: String = drain(&mut heap).iter().map(|el| el.id).collect();
        assert_eq!(ids, "bdace");
    }

    #[test]
    fn tie_break_survives_reinsertion() {
        let mut heap = MinHeap::with_capacity(3);
        heap.insert(item('a', 1)).unwrap();
        heap.insert(item('b', 1)).unwrap();
        heap.insert(item('c', 2)).unwrap();
        let a = heap.extract_min().unwrap();
        let b = heap.extract_min().unwrap();
        assert_eq!((a.id, b.id), ('a', 'b'));
        // same weight as 'c', but inserted later
        heap.insert(item('x', 2)).unwrap();
        assert_eq!(heap.extract_min().unwrap().id, 'c');
        assert_eq!(heap.extract_min().unwrap().id, 'x');
    }

    #[test]
    fn zero_weights() {
        let mut heap = MinHeap::with_capacity(3);
        heap.insert(item('a', 0)).unwrap();
        heap.insert(item('b', 7)).unwrap();
        heap.insert(item('c', 0)).unwrap();
        assert_eq!(heap.peek().map(|el| el.id), Some('a'));
        let ids: String = drain(&mut heap).iter().map(|el| el.id).collect();
        assert_eq!(ids, "acb");
    }

    #[test]
    fn capacity_exceeded() {
        let mut heap = MinHeap::with_capacity(2);
        heap.insert(item('a', 1)).unwrap();
        heap.insert(item('b', 2)).unwrap();
        assert_eq!(
            heap.insert(item('c', 3)),
            Err(HeapError::CapacityExceeded { capacity: 2 })
        );
        // the failed insert leaves the heap untouched
        assert_eq!(heap.len(), 2);
        assert_eq!(heap.extract_min().unwrap().id, 'a');
    }

    #[test]
    fn empty_queue_access() {
        let mut heap: MinHeap<Item> = MinHeap::with_capacity(1);
        assert_eq!(heap.extract_min(), Err(HeapError::EmptyQueueAccess));
        heap.insert(item('a', 1)).unwrap();
        heap.extract_min().unwrap();
        assert_eq!(heap.extract_min(), Err(HeapError::EmptyQueueAccess));
        assert!(heap.peek().is_none());
    }

    #[test]
    fn zero_capacity() {
        let mut heap = MinHeap::with_capacity(0);
        assert_eq!(heap.capacity(), 0);
        assert_eq!(
            heap.insert(item('a', 1)),
            Err(HeapError::CapacityExceeded { capacity: 0 })
        );
    }

    #[test]
    fn interleaved_insert_extract_keeps_invariant() {
        let mut heap: MinHeap<Item> = MinHeap::with_capacity(8);
        let mut last_extracted = 0;
        for round in 0..40_u64 {
            if heap.len() == heap.capacity() {
                last_extracted = heap.extract_min().unwrap().weight;
            }
            // never insert below the last extracted weight, like the merge loop
            let weight = last_extracted + (round * 7919) % 13;
            heap.insert(item('x', weight)).unwrap();
            assert!(heap.is_valid_min_heap());
        }
        let out: Vec<u64> = drain(&mut heap).iter().map(|el| el.weight).collect();
        let mut sorted = out.clone();
        sorted.sort_unstable();
        assert_eq!(out, sorted);
        assert!(out[0] >= last_extracted);
    }
}
