//! # collection-ops
//!
//! Search, sort, min/max and edit operations over the standard collections:
//! ordered lists, hash and sorted maps, priority queues and hash sets.
//!
//! The one piece of real logic is the [`SecondaryKeyIndex`]: a disposable,
//! value-sorted projection of a map that can be binary-searched by value with
//! a probe entry, even though the map itself is keyed by something else.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use collection_ops::{find_by_value, build_sorted_by_value, Pet};
//!
//! let mut owners: HashMap<Pet, String> = HashMap::new();
//! owners.insert(Pet::new("Luna"), "Irina".to_string());
//! owners.insert(Pet::new("Miro"), "Olena".to_string());
//! owners.insert(Pet::new("Nala"), "Olena".to_string());
//!
//! let sorted = build_sorted_by_value(&owners);
//! assert_eq!(sorted[0].key, Some(&Pet::new("Luna")));
//!
//! let olena = "Olena".to_string();
//! assert!(find_by_value(&sorted, Some(&olena)).is_some());
//!
//! let bohdan = "Bohdan".to_string();
//! assert!(find_by_value(&sorted, Some(&bohdan)).is_none());
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod entry;
pub mod error;
pub mod index;
pub mod map;
pub mod queue;
pub mod records;
pub mod scan;
pub mod sequence;
pub mod set;
pub mod timing;

pub use config::Config;
pub use entry::{Entry, Pet};
pub use error::{Error, Result};
pub use index::{
    build_sorted_by_value, find_by_value, nulls_first, ByKey, ByValue, EntryOrder,
    SecondaryKeyIndex, SortedView,
};
pub use map::{sample_pets, KeyValueMap, MapOps, MapScenario};
pub use queue::QueueOps;
pub use records::{load_records, write_records};
pub use scan::min_max;
pub use sequence::SequenceOps;
pub use set::{SetAnalysis, SetOps};
pub use timing::{elapsed_nanos, report_elapsed, timed};

#[cfg(test)]
mod proptests;
