//! Frontier: the generated-but-not-yet-expanded nodes of a search.
//!
//! The ordering policy decides which node comes out next:
//! - `Fifo`: oldest first (breadth-first search).
//! - `Lifo`: newest first (depth-first search).
//! - `Priority`: lowest evaluation `f = g + h` first, ties broken by insertion order
//!   (A*). Backed by a binary heap.

use crate::node::NodeId;
use crate::problem::Cost;
use std::cmp;
use std::collections::{BinaryHeap, VecDeque};

/// How a [`Frontier`] orders its nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Ordering {
    Fifo,
    Lifo,
    Priority,
}

/// Heap entry for the priority policy.
///
/// `BinaryHeap` is a max-heap, so the comparison is reversed: the entry with the
/// smallest `f`, then the smallest sequence number, compares as the greatest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PriorityEntry {
    f: Cost,
    sequence: u64,
    id: NodeId,
}

impl Ord for PriorityEntry {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for PriorityEntry {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug)]
enum Queue {
    Fifo(VecDeque<NodeId>),
    Lifo(Vec<NodeId>),
    Priority {
        heap: BinaryHeap<PriorityEntry>,
        next_sequence: u64,
    },
}

/// An ordered collection of node ids awaiting expansion.
#[derive(Debug)]
pub struct Frontier {
    queue: Queue,
}

impl Frontier {
    /// Creates an empty frontier with the given ordering policy.
    pub fn new(policy: Ordering) -> Self {
        let queue = match policy {
            Ordering::Fifo => Queue::Fifo(VecDeque::new()),
            Ordering::Lifo => Queue::Lifo(Vec::new()),
            Ordering::Priority => Queue::Priority {
                heap: BinaryHeap::new(),
                next_sequence: 0,
            },
        };
        Frontier { queue }
    }

    pub fn policy(&self) -> Ordering {
        match &self.queue {
            Queue::Fifo(_) => Ordering::Fifo,
            Queue::Lifo(_) => Ordering::Lifo,
            Queue::Priority { .. } => Ordering::Priority,
        }
    }

    /// Inserts a node. `f` is the node's evaluation; only the priority policy reads it.
    pub fn push(&mut self, id: NodeId, f: Cost) {
        match &mut self.queue {
            Queue::Fifo(queue) => queue.push_back(id),
            Queue::Lifo(stack) => stack.push(id),
            Queue::Priority {
                heap,
                next_sequence,
            } => {
                heap.push(PriorityEntry {
                    f,
                    sequence: *next_sequence,
                    id,
                });
                *next_sequence += 1;
            }
        }
    }

    /// Removes and returns the next node according to the ordering policy.
    pub fn pop(&mut self) -> Option<NodeId> {
        match &mut self.queue {
            Queue::Fifo(queue) => queue.pop_front(),
            Queue::Lifo(stack) => stack.pop(),
            Queue::Priority { heap, .. } => heap.pop().map(|entry| entry.id),
        }
    }

    pub fn len(&self) -> usize {
        match &self.queue {
            Queue::Fifo(queue) => queue.len(),
            Queue::Lifo(stack) => stack.len(),
            Queue::Priority { heap, .. } => heap.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
