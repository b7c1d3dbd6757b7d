// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Props: render-time property bags.
//!
//! This crate provides the storage half of class-composed components: the
//! name → value map that a caller hands to a component on every render.
//! Class computation and target dispatch live in `understory_classes`.
//!
//! ## Core Concepts
//!
//! - [`PropKey`] - a property name. Names starting with [`TRANSIENT_MARKER`]
//!   (`$`) are *transient*: they exist only to drive class computation.
//! - [`PropValue`] - booleans, numbers and text, plus [`AnyValue`] for
//!   arbitrary `'static` data such as callbacks.
//! - [`PropMap`] - an insertion-ordered map with an explicit
//!   [`split_transient`](PropMap::split_transient) partition.
//!
//! ## Quick Start
//!
//! ```rust
//! use understory_props::{PropMap, PropValue};
//!
//! let mut props = PropMap::new();
//! props.set("$enabled", true);
//! props.set("aria-label", "Save");
//!
//! assert!(props.get("$enabled").is_some_and(PropValue::is_truthy));
//!
//! // A primitive element only ever sees the non-transient half.
//! let (_transient, attributes) = props.split_transient();
//! assert_eq!(attributes.len(), 1);
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod key;
mod map;
mod value;

pub use key::{PropKey, TRANSIENT_MARKER, is_transient};
pub use map::PropMap;
pub use value::{AnyValue, PropValue};
