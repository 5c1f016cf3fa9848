//! Key/value entries and the `Pet` key type.

use std::fmt;

/// A borrowed key/value pair drawn from a mapping.
///
/// Both sides are optional: a real entry always carries its key, while a
/// probe (see [`Entry::probe`]) carries only the field being searched for.
/// A `None` value models a null value in the source mapping.
pub struct Entry<'a, K, V> {
    pub key: Option<&'a K>,
    pub value: Option<&'a V>,
}

impl<'a, K, V> Entry<'a, K, V> {
    #[inline]
    pub fn new(key: &'a K, value: Option<&'a V>) -> Self {
        Self {
            key: Some(key),
            value,
        }
    }

    /// Synthetic entry with no key, used to binary-search by value.
    #[inline]
    pub fn probe(value: Option<&'a V>) -> Self {
        Self { key: None, value }
    }

    #[inline]
    pub fn is_probe(&self) -> bool {
        self.key.is_none()
    }
}

// Manual impls: an entry is two references and is copyable whatever K and V are.
impl<K, V> Clone for Entry<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for Entry<'_, K, V> {}

impl<K: PartialEq, V: PartialEq> PartialEq for Entry<'_, K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.value == other.value
    }
}

impl<K: Eq, V: Eq> Eq for Entry<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Entry<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Entry<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.key {
            Some(key) => write!(f, "{key}")?,
            None => f.write_str("<probe>")?,
        }
        f.write_str(" -> ")?;
        match self.value {
            Some(value) => write!(f, "{value}"),
            None => f.write_str("null"),
        }
    }
}

/// A pet identified by its nickname.
///
/// Equality, hashing and ordering are all derived from the single
/// `nickname` field, so a `Pet` behaves the same as a `HashMap` key and as a
/// `BTreeMap` key. A missing nickname orders before every present one.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pet {
    nickname: Option<String>,
}

impl Pet {
    pub fn new(nickname: impl Into<String>) -> Self {
        Self {
            nickname: Some(nickname.into()),
        }
    }

    pub fn unnamed() -> Self {
        Self { nickname: None }
    }

    pub fn nickname(&self) -> Option<&str> {
        self.nickname.as_deref()
    }
}

impl fmt::Display for Pet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.nickname {
            Some(name) => write!(f, "Pet({name})"),
            None => f.write_str("Pet(<unnamed>)"),
        }
    }
}

impl From<&str> for Pet {
    fn from(nickname: &str) -> Self {
        Self::new(nickname)
    }
}
