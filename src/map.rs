//! Hash map and sorted map operations.
//!
//! [`MapOps`] drives the same sequence of lookups and edits over any map that
//! implements [`KeyValueMap`]. Lookups by value go through a
//! [`SecondaryKeyIndex`] rebuilt on every call; listing in key order goes
//! through a key-sorted view. Neither changes the map's own layout.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::hash::{BuildHasher, Hash};
use std::time::Instant;

use crate::entry::{Entry, Pet};
use crate::index::{ByKey, SecondaryKeyIndex, SortedView};
use crate::timing::report_elapsed;

/// The map operations the demo needs, over `HashMap` and `BTreeMap` alike.
pub trait KeyValueMap {
    type Key;
    type Value;

    /// Name used in operation labels.
    const KIND: &'static str;

    fn get(&self, key: &Self::Key) -> Option<&Self::Value>;
    fn insert(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value>;
    fn remove(&mut self, key: &Self::Key) -> Option<Self::Value>;
    fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&Self::Key, &mut Self::Value) -> bool;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> KeyValueMap for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    const KIND: &'static str = "HashMap";

    fn get(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        HashMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        HashMap::remove(self, key)
    }

    fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        HashMap::retain(self, f)
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

impl<K: Ord, V> KeyValueMap for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    const KIND: &'static str = "BTreeMap";

    fn get(&self, key: &K) -> Option<&V> {
        BTreeMap::get(self, key)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        BTreeMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        BTreeMap::remove(self, key)
    }

    fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        BTreeMap::retain(self, f)
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

/// Keys and values the demo searches for, adds and deletes.
#[derive(Debug, Clone)]
pub struct MapScenario<K, V> {
    pub search_key: K,
    pub search_value: V,
    pub add_key: K,
    pub add_value: V,
}

impl MapScenario<Pet, String> {
    pub fn pets() -> Self {
        Self {
            search_key: Pet::new("Luna"),
            search_value: "Olena".to_string(),
            add_key: Pet::new("Kir"),
            add_value: "Bohdan".to_string(),
        }
    }
}

/// Ten pets and their owners. Several owners have more than one pet.
pub fn sample_pets() -> Vec<(Pet, String)> {
    [
        ("Tum", "Andrii"),
        ("Luna", "Irina"),
        ("Miro", "Olena"),
        ("Nala", "Olena"),
        ("Tyson", "Irina"),
        ("Barsik", "Andrii"),
        ("Goofy", "Tymofii"),
        ("Boni", "Polina"),
        ("Musia", "Stefaniia"),
        ("Chipo", "Yaroslav"),
    ]
    .into_iter()
    .map(|(pet, owner)| (Pet::new(pet), owner.to_string()))
    .collect()
}

pub struct MapOps<M> {
    map: M,
}

impl<M> MapOps<M>
where
    M: KeyValueMap,
    M::Key: Ord + Clone + Display,
    M::Value: Ord + Clone + Display,
    for<'a> &'a M: IntoIterator<Item = (&'a M::Key, &'a M::Value)>,
{
    pub fn new(map: M) -> Self {
        Self { map }
    }

    pub fn find_by_key(&self, key: &M::Key) -> Option<&M::Value> {
        let start = Instant::now();
        let found = self.map.get(key);
        report_elapsed(start, &format!("find by key in {}", M::KIND));

        match found {
            Some(value) => tracing::info!(%key, %value, "key found"),
            None => tracing::info!(%key, "key not found"),
        }
        found
    }

    /// Any one entry holding `value`, located by binary search over a
    /// value-sorted projection of the map.
    pub fn find_by_value(&self, value: &M::Value) -> Option<Entry<'_, M::Key, M::Value>> {
        let start = Instant::now();
        let index = SecondaryKeyIndex::by_value(&self.map);
        let found = index.find_value(Some(value));
        report_elapsed(start, &format!("binary search by value in {}", M::KIND));

        match found.and_then(|e| e.key) {
            Some(key) => tracing::info!(%value, %key, "value found"),
            None => tracing::info!(%value, "value not found"),
        }
        found
    }

    /// Log the map's entries in its own iteration order and return them.
    pub fn entries(&self) -> Vec<Entry<'_, M::Key, M::Value>> {
        let start = Instant::now();
        let entries: Vec<_> = (&self.map)
            .into_iter()
            .map(|(k, v)| Entry::new(k, Some(v)))
            .collect();
        report_elapsed(start, &format!("list {} entries", M::KIND));

        for entry in &entries {
            tracing::info!("  {entry}");
        }
        entries
    }

    /// Entries in key order. The map itself is left as it is.
    pub fn sorted_by_key(&self) -> Vec<Entry<'_, M::Key, M::Value>> {
        let start = Instant::now();
        let view: SortedView<'_, _, _, ByKey> = SortedView::by_key(&self.map);
        report_elapsed(start, &format!("sort {} by key", M::KIND));

        for entry in view.iter() {
            tracing::info!("  {entry}");
        }
        view.into_entries()
    }

    pub fn add(&mut self, key: M::Key, value: M::Value) -> Option<M::Value> {
        tracing::info!(%key, %value, "adding entry");
        let start = Instant::now();
        let old = self.map.insert(key, value);
        report_elapsed(start, &format!("add entry to {}", M::KIND));
        old
    }

    pub fn remove_by_key(&mut self, key: &M::Key) -> Option<M::Value> {
        let start = Instant::now();
        let removed = self.map.remove(key);
        report_elapsed(start, &format!("remove by key from {}", M::KIND));

        match &removed {
            Some(value) => tracing::info!(%key, %value, "removed entry"),
            None => tracing::info!(%key, "no entry to remove"),
        }
        removed
    }

    /// Remove every entry holding `value`; returns how many were removed.
    pub fn remove_by_value(&mut self, value: &M::Value) -> usize {
        let start = Instant::now();
        let before = self.map.len();
        self.map.retain(|_, v| *v != *value);
        let removed = before - self.map.len();
        report_elapsed(start, &format!("remove by value from {}", M::KIND));

        tracing::info!(%value, removed, "removed entries by value");
        removed
    }

    pub fn run(&mut self, scenario: &MapScenario<M::Key, M::Value>) {
        tracing::info!(kind = M::KIND, len = self.map.len(), "initial size");

        self.find_by_key(&scenario.search_key);
        self.find_by_value(&scenario.search_value);

        self.entries();
        self.sorted_by_key();
        // The sorted view leaves the map as it was.
        self.entries();

        self.find_by_key(&scenario.search_key);
        self.find_by_value(&scenario.search_value);

        self.add(scenario.add_key.clone(), scenario.add_value.clone());
        self.remove_by_key(&scenario.search_key);
        self.remove_by_value(&scenario.search_value);

        tracing::info!(kind = M::KIND, len = self.map.len(), "final size");
    }

    #[inline]
    pub fn map(&self) -> &M {
        &self.map
    }

    #[inline]
    pub fn into_inner(self) -> M {
        self.map
    }
}
