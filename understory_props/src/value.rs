// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property values.
//!
//! This module provides [`PropValue`], the value stored under each key of a
//! [`PropMap`](crate::PropMap), and [`AnyValue`] for values of arbitrary
//! `'static` types (callbacks, handles, application data).

use alloc::rc::Rc;
use alloc::string::String;
use core::any::{Any, TypeId};
use core::fmt;

/// A shared, type-erased value.
///
/// Wraps a value of any `'static` type behind an `Rc` together with its
/// [`TypeId`], so that it can be stored in a heterogeneous property bag and
/// downcast later. Cloning only bumps the reference count.
///
/// # Example
///
/// ```rust
/// use understory_props::AnyValue;
///
/// let value = AnyValue::new(42_i32);
/// assert!(value.is::<i32>());
/// assert_eq!(value.downcast_ref::<i32>(), Some(&42));
///
/// let cloned = value.clone();
/// assert!(cloned.ptr_eq(&value));
/// ```
#[derive(Clone)]
pub struct AnyValue {
    inner: Rc<dyn Any>,
    type_id: TypeId,
}

impl AnyValue {
    /// Creates a new erased value from a concrete value.
    #[must_use]
    pub fn new<T: 'static>(value: T) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            inner: Rc::new(value),
        }
    }

    /// Returns the [`TypeId`] of the contained value.
    #[must_use]
    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns `true` if the contained value is of type `T`.
    #[must_use]
    #[inline]
    pub fn is<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Attempts to downcast to a reference of type `T`.
    ///
    /// Returns `None` if the contained value is not of type `T`.
    #[must_use]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.inner.downcast_ref()
    }

    /// Returns `true` if both values share the same allocation.
    #[must_use]
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyValue")
            .field("type_id", &self.type_id)
            .finish_non_exhaustive()
    }
}

/// A single property value.
///
/// Scalar and text variants cover what a primitive element can carry as an
/// attribute. Everything else (event handlers, application handles) goes in
/// [`PropValue::Any`], which primitive hosts are free to ignore.
#[derive(Clone, Debug)]
pub enum PropValue {
    /// A boolean flag, e.g. `disabled` or `$enabled`.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// Text.
    Text(String),
    /// Any other `'static` value.
    Any(AnyValue),
}

impl PropValue {
    /// Wraps an arbitrary value as [`PropValue::Any`].
    #[must_use]
    pub fn any<T: 'static>(value: T) -> Self {
        Self::Any(AnyValue::new(value))
    }

    /// Returns the loose truth value of this property.
    ///
    /// `false`, `0`, `0.0`, `NaN` and the empty string are falsy; everything
    /// else, including any [`PropValue::Any`], is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Int(n) => *n != 0,
            Self::Float(x) => *x != 0.0 && !x.is_nan(),
            Self::Text(s) => !s.is_empty(),
            Self::Any(_) => true,
        }
    }

    /// Returns the boolean if this is a [`PropValue::Bool`].
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer if this is a [`PropValue::Int`].
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the number if this is a [`PropValue::Float`] or [`PropValue::Int`].
    ///
    /// Integers wider than 2^53 lose precision.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(x) => Some(*x),
            Self::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Returns the text if this is a [`PropValue::Text`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Downcasts a [`PropValue::Any`] to `T`.
    #[must_use]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        match self {
            Self::Any(v) => v.downcast_ref(),
            _ => None,
        }
    }
}

/// `Any` values compare by identity; everything else by value.
impl PartialEq for PropValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Any(a), Self::Any(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for PropValue {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<AnyValue> for PropValue {
    fn from(value: AnyValue) -> Self {
        Self::Any(value)
    }
}
