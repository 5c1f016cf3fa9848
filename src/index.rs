//! Sorted projections of a mapping and probe-based binary search.
//!
//! A mapping keyed by one field (a `HashMap` or `BTreeMap` keyed by [`Pet`])
//! can still be searched by its values: copy the entries into a vector,
//! sort that vector with a value comparator, then binary-search it with a
//! probe entry that carries only the target value.
//!
//! The projection is disposable. It borrows from the mapping, is rebuilt for
//! every query, and never changes the mapping itself.
//!
//! [`Pet`]: crate::Pet

use std::cmp::Ordering;

use crate::entry::Entry;

/// Total order over optional references where `None` sorts first.
///
/// Two `None`s compare equal; otherwise the natural order of `T` applies.
#[inline]
pub fn nulls_first<T: Ord + ?Sized>(left: Option<&T>, right: Option<&T>) -> Ordering {
    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(l), Some(r)) => l.cmp(r),
    }
}

/// An order over entries that looks at a single field.
///
/// The same comparator value must be used to sort a projection and to
/// search it.
pub trait EntryOrder<K, V> {
    fn compare(&self, left: &Entry<'_, K, V>, right: &Entry<'_, K, V>) -> Ordering;
}

/// Orders entries by value, nulls first. Keys are ignored, so a probe with
/// no key compares equal to every entry holding the same value.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByValue;

impl<K, V: Ord> EntryOrder<K, V> for ByValue {
    #[inline]
    fn compare(&self, left: &Entry<'_, K, V>, right: &Entry<'_, K, V>) -> Ordering {
        nulls_first(left.value, right.value)
    }
}

/// Orders entries by key, nulls first.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByKey;

impl<K: Ord, V> EntryOrder<K, V> for ByKey {
    #[inline]
    fn compare(&self, left: &Entry<'_, K, V>, right: &Entry<'_, K, V>) -> Ordering {
        nulls_first(left.key, right.key)
    }
}

/// Whether `entries` is non-decreasing under `order`.
pub fn is_sorted_by<K, V, O: EntryOrder<K, V>>(entries: &[Entry<'_, K, V>], order: &O) -> bool {
    entries
        .windows(2)
        .all(|w| order.compare(&w[0], &w[1]) != Ordering::Greater)
}

/// Copy `mapping` into a vector sorted by value.
///
/// Entries sharing a value keep their iteration order from `mapping`; no
/// key-based tie-break is applied.
pub fn build_sorted_by_value<'a, K, V, I>(mapping: I) -> Vec<Entry<'a, K, V>>
where
    K: 'a,
    V: Ord + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    SortedView::by_value(mapping).into_entries()
}

/// Binary-search a value-sorted projection for `target`.
///
/// `sorted` must already be ordered by [`ByValue`] (as produced by
/// [`build_sorted_by_value`]). That precondition is not checked; on other
/// input the result is unspecified. When several entries share `target`,
/// whichever one the search lands on is returned.
pub fn find_by_value<'a, K, V: Ord>(
    sorted: &[Entry<'a, K, V>],
    target: Option<&V>,
) -> Option<Entry<'a, K, V>> {
    let probe = Entry::probe(target);
    sorted
        .binary_search_by(|entry| ByValue.compare(entry, &probe))
        .ok()
        .map(|pos| sorted[pos])
}

/// A vector of borrowed entries sorted by `O`.
pub struct SortedView<'a, K, V, O> {
    entries: Vec<Entry<'a, K, V>>,
    order: O,
}

/// A projection sorted by value, searchable by value.
pub type SecondaryKeyIndex<'a, K, V> = SortedView<'a, K, V, ByValue>;

impl<'a, K, V: Ord> SortedView<'a, K, V, ByValue> {
    pub fn by_value<I>(mapping: I) -> Self
    where
        I: IntoIterator<Item = (&'a K, &'a V)>,
    {
        Self::from_entries(
            mapping.into_iter().map(|(k, v)| Entry::new(k, Some(v))),
            ByValue,
        )
    }

    /// Like [`SortedView::by_value`] for mappings whose values may be null.
    pub fn by_nullable_value<I>(mapping: I) -> Self
    where
        I: IntoIterator<Item = (&'a K, &'a Option<V>)>,
    {
        Self::from_entries(
            mapping.into_iter().map(|(k, v)| Entry::new(k, v.as_ref())),
            ByValue,
        )
    }

    pub fn find_value(&self, target: Option<&V>) -> Option<Entry<'a, K, V>> {
        self.find(&Entry::probe(target))
    }
}

impl<'a, K: Ord, V> SortedView<'a, K, V, ByKey> {
    pub fn by_key<I>(mapping: I) -> Self
    where
        I: IntoIterator<Item = (&'a K, &'a V)>,
    {
        Self::from_entries(
            mapping.into_iter().map(|(k, v)| Entry::new(k, Some(v))),
            ByKey,
        )
    }
}

impl<'a, K, V, O: EntryOrder<K, V>> SortedView<'a, K, V, O> {
    pub fn from_entries<I>(entries: I, order: O) -> Self
    where
        I: IntoIterator<Item = Entry<'a, K, V>>,
    {
        let mut entries: Vec<_> = entries.into_iter().collect();
        entries.sort_by(|a, b| order.compare(a, b));
        Self { entries, order }
    }

    /// Position of an entry equal to `probe` under the view's order, or the
    /// insertion point if there is none.
    pub fn position(&self, probe: &Entry<'_, K, V>) -> Result<usize, usize> {
        self.entries
            .binary_search_by(|entry| self.order.compare(entry, probe))
    }

    pub fn find(&self, probe: &Entry<'_, K, V>) -> Option<Entry<'a, K, V>> {
        self.position(probe).ok().map(|pos| self.entries[pos])
    }

    #[inline]
    pub fn entries(&self) -> &[Entry<'a, K, V>] {
        &self.entries
    }

    #[inline]
    pub fn into_entries(self) -> Vec<Entry<'a, K, V>> {
        self.entries
    }

    #[inline]
    pub fn order(&self) -> &O {
        &self.order
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Entry<'a, K, V>> + '_ {
        self.entries.iter().copied()
    }
}
