// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property keys.

use alloc::borrow::Cow;
use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;

/// Leading character that marks a property as transient.
///
/// Transient properties exist only to drive class computation. They are
/// stripped before reaching a primitive element and forwarded unchanged to
/// nested components.
pub const TRANSIENT_MARKER: char = '$';

/// The name of a property.
///
/// Static names (the common case) are stored without allocating.
///
/// # Example
///
/// ```rust
/// use understory_props::PropKey;
///
/// let key = PropKey::from("$enabled");
/// assert!(key.is_transient());
/// assert!(!PropKey::from("disabled").is_transient());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PropKey(Cow<'static, str>);

impl PropKey {
    /// Creates a key from a static name.
    #[must_use]
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Returns the key as a string slice.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if this key starts with [`TRANSIENT_MARKER`].
    #[must_use]
    #[inline]
    pub fn is_transient(&self) -> bool {
        is_transient(&self.0)
    }
}

/// Returns `true` if `name` starts with [`TRANSIENT_MARKER`].
#[must_use]
#[inline]
pub fn is_transient(name: &str) -> bool {
    name.starts_with(TRANSIENT_MARKER)
}

impl fmt::Debug for PropKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for PropKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for PropKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for PropKey {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

impl From<String> for PropKey {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl From<Cow<'static, str>> for PropKey {
    fn from(name: Cow<'static, str>) -> Self {
        Self(name)
    }
}
