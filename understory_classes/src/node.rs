// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render output handed to the host.
//!
//! [`Node`] is the boundary with the host UI runtime: composed components
//! produce nodes, the host mounts them. The [`Display`](fmt::Display)
//! implementation writes HTML-style markup, which is what tests and
//! server-side hosts compare against.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt::{self, Write as _};

use understory_props::{AnyValue, PropKey, PropMap, PropValue};

use crate::target::{ElementTag, is_name_char};

/// A node in the rendered tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Node {
    /// Renders nothing.
    #[default]
    Empty,
    /// A text node.
    Text(String),
    /// A primitive element.
    Element(Element),
    /// A sequence of sibling nodes.
    List(Vec<Self>),
}

impl Node {
    /// Returns the element, if this node is one.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.into())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<Self>> for Node {
    fn from(nodes: Vec<Self>) -> Self {
        Self::List(nodes)
    }
}

/// A primitive element with its final class string and attributes.
///
/// `attributes` never holds transient properties when produced by a
/// composed component.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    /// The element tag.
    pub tag: ElementTag,
    /// The `class` attribute, if any.
    pub class_name: Option<String>,
    /// Remaining attributes in caller order.
    pub attributes: PropMap,
    /// Child nodes.
    pub children: Vec<Node>,
    /// Reference slot the host fills in when mounting.
    pub node_ref: Option<NodeRef>,
}

impl Element {
    /// Creates an element with no class, attributes or children.
    #[must_use]
    pub fn new(tag: impl Into<ElementTag>) -> Self {
        Self {
            tag: tag.into(),
            class_name: None,
            attributes: PropMap::new(),
            children: Vec::new(),
            node_ref: None,
        }
    }

    /// Sets the class string.
    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Sets an attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<PropKey>, value: impl Into<PropValue>) -> Self {
        self.attributes.set(key, value);
        self
    }

    /// Appends a child.
    #[must_use]
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends children.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Returns the attribute value for `name`.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&PropValue> {
        self.attributes.get(name)
    }
}

/// A shared reference slot forwarded to the rendered element.
///
/// The host stores its native handle with [`NodeRef::attach`] when it mounts
/// the element; application code reads it back with [`NodeRef::current`].
/// Equality is identity.
#[derive(Clone, Default)]
pub struct NodeRef {
    slot: Rc<RefCell<Option<AnyValue>>>,
}

impl NodeRef {
    /// Creates an empty reference.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the host handle.
    pub fn attach(&self, handle: AnyValue) {
        *self.slot.borrow_mut() = Some(handle);
    }

    /// Clears the host handle.
    pub fn detach(&self) {
        self.slot.borrow_mut().take();
    }

    /// Returns the host handle, if attached.
    #[must_use]
    pub fn current(&self) -> Option<AnyValue> {
        self.slot.borrow().clone()
    }

    /// Returns `true` if both references share the same slot.
    #[must_use]
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("attached", &self.slot.borrow().is_some())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(text) => write_escaped(f, text),
            Self::Element(el) => fmt::Display::fmt(el, f),
            Self::List(nodes) => nodes.iter().try_for_each(|n| fmt::Display::fmt(n, f)),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        if let Some(class_name) = &self.class_name {
            f.write_str(" class=\"")?;
            write_escaped(f, class_name)?;
            f.write_char('"')?;
        }
        for (key, value) in self.attributes.iter() {
            write_attribute(f, key, value)?;
        }
        if self.tag.is_void() {
            return f.write_str("/>");
        }
        f.write_char('>')?;
        for child in &self.children {
            fmt::Display::fmt(child, f)?;
        }
        write!(f, "</{}>", self.tag)
    }
}

/// `false` and non-scalar values are not rendered; `true` renders as an
/// empty attribute. Keys that are not plain attribute names are skipped.
fn write_attribute(f: &mut fmt::Formatter<'_>, key: &PropKey, value: &PropValue) -> fmt::Result {
    if !is_attribute_name(key.as_str()) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "understory_classes::node",
            key = key.as_str(),
            "skipped attribute with invalid name"
        );
        return Ok(());
    }
    match value {
        PropValue::Bool(false) | PropValue::Any(_) => Ok(()),
        PropValue::Bool(true) => write!(f, " {key}=\"\""),
        PropValue::Int(n) => write!(f, " {key}=\"{n}\""),
        PropValue::Float(x) => write!(f, " {key}=\"{x}\""),
        PropValue::Text(text) => {
            write!(f, " {key}=\"")?;
            write_escaped(f, text)?;
            f.write_char('"')
        }
    }
}

fn is_attribute_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_name_char)
}

fn write_escaped(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    let mut last = 0;
    for (idx, ch) in text.char_indices() {
        let escaped = match ch {
            '&' => "&amp;",
            '<' => "&lt;",
            '>' => "&gt;",
            '"' => "&quot;",
            '\'' => "&#x27;",
            _ => continue,
        };
        f.write_str(&text[last..idx])?;
        f.write_str(escaped)?;
        last = idx + ch.len_utf8();
    }
    f.write_str(&text[last..])
}
