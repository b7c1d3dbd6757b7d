// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Insertion-ordered property storage.
//!
//! This module provides [`PropMap`], the name → value map carried by every
//! render call.
//!
//! # Implementation
//!
//! Entries live in a `SmallVec` in insertion order and are looked up with a
//! linear scan. Render-time bags are small (a handful of attributes plus a
//! few transient flags) and are rebuilt on every render, so keeping them
//! contiguous and allocation-free beats hashing. Insertion order is preserved
//! so that forwarded attributes come out in the order the caller wrote them.

use smallvec::SmallVec;

use crate::key::PropKey;
use crate::value::PropValue;

/// Default inline capacity for property entries.
///
/// Most render calls pass fewer than 8 properties, so this avoids heap
/// allocation in the common case.
const INLINE_CAPACITY: usize = 8;

type Entries = SmallVec<[(PropKey, PropValue); INLINE_CAPACITY]>;

/// An insertion-ordered map from [`PropKey`] to [`PropValue`].
///
/// Setting an existing key replaces its value in place, keeping the key's
/// original position.
///
/// # Example
///
/// ```rust
/// use understory_props::{PropMap, PropValue};
///
/// let mut map = PropMap::new();
/// map.set("$enabled", true);
/// map.set("type", "submit");
///
/// let (transient, rest) = map.split_transient();
/// assert_eq!(transient.get("$enabled"), Some(&PropValue::Bool(true)));
/// assert_eq!(rest.get("type").and_then(PropValue::as_str), Some("submit"));
/// assert!(rest.get("$enabled").is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropMap {
    entries: Entries,
}

impl PropMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the map has no entries.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k.as_str() == name)
    }

    /// Sets a value, returning the previous value for the key if any.
    pub fn set(
        &mut self,
        key: impl Into<PropKey>,
        value: impl Into<PropValue>,
    ) -> Option<PropValue> {
        let key = key.into();
        let value = value.into();
        match self.position(key.as_str()) {
            Some(idx) => Some(core::mem::replace(&mut self.entries[idx].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Returns the value for `name`, if set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.position(name).map(|idx| &self.entries[idx].1)
    }

    /// Returns `true` if `name` is set.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Removes and returns the value for `name`, preserving the order of
    /// the remaining entries.
    pub fn remove(&mut self, name: &str) -> Option<PropValue> {
        self.position(name).map(|idx| self.entries.remove(idx).1)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&PropKey, &PropValue)> + '_ {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &PropKey> + '_ {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Splits the map into `(transient, rest)`.
    ///
    /// Both halves keep their relative insertion order.
    #[must_use]
    pub fn split_transient(self) -> (Self, Self) {
        let mut transient = Entries::new();
        let mut rest = Entries::new();
        for (key, value) in self.entries {
            if key.is_transient() {
                transient.push((key, value));
            } else {
                rest.push((key, value));
            }
        }
        (Self { entries: transient }, Self { entries: rest })
    }

    /// Drops every transient entry.
    pub fn retain_non_transient(&mut self) {
        self.entries.retain(|(k, _)| !k.is_transient());
    }
}

impl<K, V> FromIterator<(K, V)> for PropMap
where
    K: Into<PropKey>,
    V: Into<PropValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for PropMap
where
    K: Into<PropKey>,
    V: Into<PropValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

impl IntoIterator for PropMap {
    type Item = (PropKey, PropValue);
    type IntoIter = smallvec::IntoIter<[(PropKey, PropValue); INLINE_CAPACITY]>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
