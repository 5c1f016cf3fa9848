//! Priority-queue operations over signed byte records.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Instant;

use crate::scan;
use crate::timing::report_elapsed;

/// A min-heap of records plus the value to look for in it.
#[derive(Debug, Clone)]
pub struct QueueOps {
    target: i8,
    heap: BinaryHeap<Reverse<i8>>,
}

impl QueueOps {
    pub fn new(target: i8, items: impl IntoIterator<Item = i8>) -> Self {
        Self {
            target,
            heap: items.into_iter().map(Reverse).collect(),
        }
    }

    pub fn contains(&self) -> bool {
        let start = Instant::now();
        let found = self.heap.iter().any(|&Reverse(v)| v == self.target);
        report_elapsed(start, "find in queue");

        tracing::info!(target_value = self.target, found, "queue lookup");
        found
    }

    pub fn min_max(&self) -> Option<(i8, i8)> {
        if self.heap.is_empty() {
            tracing::warn!("queue is empty");
            return None;
        }
        let start = Instant::now();
        let result = scan::min_max(self.heap.iter().map(|&Reverse(v)| v));
        report_elapsed(start, "min/max in queue");

        if let Some((min, max)) = result {
            tracing::info!(min, max, "queue bounds");
        }
        result
    }

    /// Smallest element without removing it.
    pub fn peek(&self) -> Option<i8> {
        self.heap.peek().map(|&Reverse(v)| v)
    }

    /// Remove and return the smallest element.
    pub fn poll(&mut self) -> Option<i8> {
        self.heap.pop().map(|Reverse(v)| v)
    }

    /// Peek at the head, remove it, then peek at the new head.
    pub fn cycle_head(&mut self) -> Option<i8> {
        let Some(head) = self.peek() else {
            tracing::warn!("queue is empty");
            return None;
        };
        tracing::info!(head, "queue head (peek)");

        let polled = self.poll();
        tracing::info!(polled, "removed queue head (poll)");

        let next = self.peek();
        tracing::info!(next, "new queue head");
        polled
    }

    pub fn run(&mut self) {
        self.contains();
        self.min_max();
        self.cycle_head();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
