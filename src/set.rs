//! Hash-set operations over signed byte records.

use std::collections::HashSet;
use std::time::Instant;

use crate::scan;
use crate::timing::report_elapsed;

/// How the source array relates to the set built from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetAnalysis {
    pub array_len: usize,
    pub set_len: usize,
    pub all_present: bool,
}

/// The source records, the set of their distinct values, and a search target.
#[derive(Debug, Clone)]
pub struct SetOps {
    target: i8,
    items: Vec<i8>,
    set: HashSet<i8>,
}

impl SetOps {
    pub fn new(target: i8, items: Vec<i8>) -> Self {
        let set = items.iter().copied().collect();
        Self { target, items, set }
    }

    pub fn contains(&self) -> bool {
        let start = Instant::now();
        let found = self.set.contains(&self.target);
        report_elapsed(start, "find in set");

        tracing::info!(target_value = self.target, found, "set lookup");
        found
    }

    pub fn min_max(&self) -> Option<(i8, i8)> {
        if self.set.is_empty() {
            tracing::warn!("set is empty");
            return None;
        }
        let start = Instant::now();
        let result = scan::min_max(self.set.iter().copied());
        report_elapsed(start, "min/max in set");

        if let Some((min, max)) = result {
            tracing::info!(min, max, "set bounds");
        }
        result
    }

    pub fn analyze(&self) -> SetAnalysis {
        let analysis = SetAnalysis {
            array_len: self.items.len(),
            set_len: self.set.len(),
            all_present: self.items.iter().all(|v| self.set.contains(v)),
        };
        tracing::info!(
            array_len = analysis.array_len,
            set_len = analysis.set_len,
            all_present = analysis.all_present,
            "array vs set"
        );
        analysis
    }

    pub fn run(&self) {
        self.contains();
        self.min_max();
        self.analyze();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_and_analyze() {
        let ops = SetOps::new(3, vec![3, 3, 1, -7, 1]);
        assert_eq!(ops.len(), 3);
        assert_eq!(
            ops.analyze(),
            SetAnalysis {
                array_len: 5,
                set_len: 3,
                all_present: true,
            }
        );
    }

    #[test]
    fn test_contains() {
        assert!(SetOps::new(-7, vec![3, -7]).contains());
        assert!(!SetOps::new(8, vec![3, -7]).contains());
    }

    #[test]
    fn test_min_max() {
        let ops = SetOps::new(0, vec![12, -1, 12, 100]);
        assert_eq!(ops.min_max(), Some((-1, 100)));
    }

    #[test]
    fn test_empty_set() {
        let ops = SetOps::new(0, Vec::new());
        assert!(ops.is_empty());
        assert_eq!(ops.min_max(), None);
        assert!(ops.analyze().all_present);
    }
}
