use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::{Error, Result};

/// One heap slot: the stored item and its current priority.
#[derive(Debug, Clone)]
struct PriorityNode<T, P> {
    item: T,
    priority: P,
}

/// An indexed min-priority queue over unique items.
///
/// Backed by a dense array binary heap plus a position table mapping each item
/// to its current slot, so membership tests run in O(1) and in-place priority
/// changes in O(log n). This is the frontier structure for shortest-path
/// search: vertices are the items, f = g + h values are the priorities.
///
/// Items must be unique; all precondition violations fail fast with a crate
/// [`Error`](crate::Error) and leave the queue unchanged. Ordering among equal
/// priorities is whatever the heap layout yields.
#[derive(Debug, Clone)]
pub struct IndexedMinPq<T, P>
where
    T: Eq + Hash + Clone + Debug,
    P: PartialOrd + Copy + Debug,
{
    /// Heap-ordered storage, root at index 0
    nodes: Vec<PriorityNode<T, P>>,

    /// Item -> current index in `nodes`, kept in sync on every swap
    positions: HashMap<T, usize>,
}

impl<T, P> IndexedMinPq<T, P>
where
    T: Eq + Hash + Clone + Debug,
    P: PartialOrd + Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        IndexedMinPq {
            nodes: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Creates a new empty priority queue with preallocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedMinPq {
            nodes: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the number of items in the queue
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the queue holds no items
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns true if the given item is present. O(1).
    pub fn contains(&self, item: &T) -> bool {
        self.positions.contains_key(item)
    }

    /// Adds an item with the given priority. O(log n).
    ///
    /// Fails with [`Error::DuplicateItem`] if the item is already present.
    pub fn add(&mut self, item: T, priority: P) -> Result<()> {
        if self.contains(&item) {
            return Err(Error::DuplicateItem);
        }
        let index = self.nodes.len();
        self.positions.insert(item.clone(), index);
        self.nodes.push(PriorityNode { item, priority });
        self.percolate_up(index);
        Ok(())
    }

    /// Returns the item with the least priority without removing it.
    ///
    /// Fails with [`Error::EmptyQueue`] if the queue is empty.
    pub fn peek_min(&self) -> Result<&T> {
        self.nodes.first().map(|node| &node.item).ok_or(Error::EmptyQueue)
    }

    /// Removes and returns the item with the least priority. O(log n).
    ///
    /// Fails with [`Error::EmptyQueue`] if the queue is empty.
    pub fn remove_min(&mut self) -> Result<T> {
        if self.nodes.is_empty() {
            return Err(Error::EmptyQueue);
        }
        let last = self.nodes.len() - 1;
        self.nodes.swap(0, last);
        let min = match self.nodes.pop() {
            Some(node) => node,
            None => return Err(Error::EmptyQueue),
        };
        self.positions.remove(&min.item);
        if !self.nodes.is_empty() {
            self.positions.insert(self.nodes[0].item.clone(), 0);
            self.percolate_down(0);
        }
        Ok(min.item)
    }

    /// Changes the priority of an already-present item. O(log n).
    ///
    /// Fails with [`Error::ItemNotFound`] if the item is absent. The moved
    /// item may need to travel either direction: a numerically smaller value
    /// can still violate order against the children after an increase
    /// elsewhere, so both percolations are checked.
    pub fn change_priority(&mut self, item: &T, priority: P) -> Result<()> {
        let index = *self.positions.get(item).ok_or(Error::ItemNotFound)?;
        if self.nodes[index].priority != priority {
            self.nodes[index].priority = priority;
            let moved = self.percolate_up(index);
            if moved == index {
                self.percolate_down(index);
            }
        }
        Ok(())
    }

    /// True when the node at `a` has a strictly greater priority than the one
    /// at `b`. NaN priorities compare false and therefore never swap.
    fn greater(&self, a: usize, b: usize) -> bool {
        self.nodes[a].priority > self.nodes[b].priority
    }

    /// Swaps two slots and fixes both position-table entries.
    fn swap(&mut self, a: usize, b: usize) {
        self.nodes.swap(a, b);
        self.positions.insert(self.nodes[a].item.clone(), a);
        self.positions.insert(self.nodes[b].item.clone(), b);
    }

    /// Sifts the node at `index` toward the root while its parent is greater.
    /// Returns the final resting index.
    fn percolate_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.greater(parent, index) {
                break;
            }
            self.swap(parent, index);
            index = parent;
        }
        index
    }

    /// Sifts the node at `index` toward the leaves, swapping with the smaller
    /// child while the heap property is violated. Returns the final index.
    fn percolate_down(&mut self, mut index: usize) -> usize {
        let len = self.nodes.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut child = left;
            if right < len && self.greater(left, right) {
                child = right;
            }
            if !self.greater(index, child) {
                break;
            }
            self.swap(index, child);
            index = child;
        }
        index
    }
}

impl<T, P> Default for IndexedMinPq<T, P>
where
    T: Eq + Hash + Clone + Debug,
    P: PartialOrd + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
