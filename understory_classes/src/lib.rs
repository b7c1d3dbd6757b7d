// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Classes: class-composed UI components.
//!
//! This crate builds components whose class string is assembled from static
//! literal fragments and fragments computed from the current props, merged
//! with whatever class string the caller passes, and handed to a base
//! target: a primitive element (`"button"`, `"div"`) or another component.
//!
//! ## Core Concepts
//!
//! ### Declaring
//!
//! [`tw`] selects a base [`Target`]; the returned [`ComposeBuilder`] takes an
//! ordered sequence of [`Fragment`]s and builds a [`Composed`] component.
//! Declarations are immutable and cheap to clone.
//!
//! ```rust
//! use understory_classes::{Props, tw};
//!
//! let button = tw("button")
//!     .literal("text-primary-700")
//!     .computed(|p: &Props| {
//!         if p.flag("$enabled") { "bg-primary-100" } else { "bg-neutral-400" }
//!     })
//!     .literal("rounded-sm")
//!     .build();
//!
//! let html = button.render(Props::new().with_class_name("shadow")).to_string();
//! assert_eq!(
//!     html,
//!     r#"<button class="text-primary-700 bg-neutral-400 rounded-sm shadow"></button>"#,
//! );
//! ```
//!
//! ### Transient properties
//!
//! Properties whose name starts with `$` drive fragments only. They never
//! reach a primitive element, but are forwarded unchanged to components so
//! that nested compositions can read them too.
//!
//! ### Nesting
//!
//! A [`Composed`] can be the base of another composition. Each level passes
//! its merged class string down, so the innermost level's classes come
//! first and the outermost level's last.
//!
//! ```rust
//! use understory_classes::{Props, tw};
//!
//! let base = tw("button").literal("p-4 rounded-sm").build();
//! let red = tw(&base).literal("bg-red-700 text-white").build();
//!
//! assert_eq!(
//!     red.render(Props::new().with_child("Hello")).to_string(),
//!     r#"<button class="p-4 rounded-sm bg-red-700 text-white">Hello</button>"#,
//! );
//! ```
//!
//! ### Rendering as something else
//!
//! [`Props::with_render_as`] swaps the target for a single render without
//! touching the declaration. Class computation is unaffected; forwarding
//! follows the kind of the effective target.
//!
//! ## Features
//!
//! - `tracing`: emit `debug!` events when components are declared and
//!   `trace!` events for each render, under the `understory_classes::compose`
//!   target.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod compose;
mod fragment;
mod node;
mod props;
mod target;

pub use compose::{ComposeBuilder, Composed, tw};
pub use fragment::{ClassList, Fragment, IntoClass, evaluate};
pub use node::{Element, Node, NodeRef};
pub use props::{FromProps, PropParts, Props};
pub use target::{ElementTag, Render, TagError, Target};

pub use understory_props::{AnyValue, PropKey, PropMap, PropValue, TRANSIENT_MARKER};
