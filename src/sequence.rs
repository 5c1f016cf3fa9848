//! Ordered-list operations over signed byte records.

use std::time::Instant;

use crate::scan;
use crate::timing::report_elapsed;

/// A list of records plus the value to look for in it.
#[derive(Debug, Clone)]
pub struct SequenceOps {
    target: i8,
    items: Vec<i8>,
    sorted: bool,
}

impl SequenceOps {
    pub fn new(target: i8, items: Vec<i8>) -> Self {
        Self {
            target,
            items,
            sorted: false,
        }
    }

    pub fn sort(&mut self) {
        let start = Instant::now();
        self.items.sort_unstable();
        self.sorted = true;
        report_elapsed(start, "sort list");
    }

    /// Index of the target value, if present.
    ///
    /// Uses binary search once the list has been sorted and a linear scan
    /// before that. With duplicates, any matching index may be returned.
    pub fn find(&self) -> Option<usize> {
        let start = Instant::now();
        let pos = if self.sorted {
            self.items.binary_search(&self.target).ok()
        } else {
            self.items.iter().position(|&v| v == self.target)
        };
        report_elapsed(start, "find in list");

        match pos {
            Some(pos) => tracing::info!(target_value = self.target, pos, "found in list"),
            None => tracing::info!(target_value = self.target, "not found in list"),
        }
        pos
    }

    pub fn min_max(&self) -> Option<(i8, i8)> {
        if self.items.is_empty() {
            tracing::warn!("list is empty");
            return None;
        }
        let start = Instant::now();
        let result = scan::min_max(self.items.iter().copied());
        report_elapsed(start, "min/max in list");

        if let Some((min, max)) = result {
            tracing::info!(min, max, "list bounds");
        }
        result
    }

    /// Find, bound, sort, then find and bound again.
    pub fn run(&mut self) {
        self.find();
        self.min_max();
        self.sort();
        self.find();
        self.min_max();
    }

    #[inline]
    pub fn as_slice(&self) -> &[i8] {
        &self.items
    }

    #[inline]
    pub fn into_vec(self) -> Vec<i8> {
        self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }
}
