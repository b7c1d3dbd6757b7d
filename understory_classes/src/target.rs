// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render targets.
//!
//! A [`Target`] is what a composed component ultimately hands its props to:
//! either a primitive element understood natively by the host
//! ([`ElementTag`]) or another renderable unit ([`Render`]).

use alloc::borrow::Cow;
use alloc::rc::Rc;
use alloc::string::String;
use core::fmt;

use crate::node::Node;
use crate::props::Props;

/// Something that turns props into a [`Node`].
///
/// Implemented for every `Fn(Props) -> Node` (custom components) and for
/// [`Composed`](crate::Composed).
pub trait Render {
    /// Renders with the given props.
    fn render(&self, props: Props) -> Node;

    /// Whether a node reference passed to this unit should be forwarded.
    ///
    /// Plain custom components do not accept references, so the default is
    /// `false` and the reference is dropped before the call.
    fn forwards_ref(&self) -> bool {
        false
    }
}

impl<F> Render for F
where
    F: Fn(Props) -> Node,
{
    fn render(&self, props: Props) -> Node {
        self(props)
    }
}

/// The name of a primitive element, e.g. `button` or `div`.
///
/// [`ElementTag::new`] performs no validation; the host decides what it
/// accepts. Use [`ElementTag::try_new`] to reject malformed names up front.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementTag(Cow<'static, str>);

impl ElementTag {
    /// Creates a tag from a static name without validation.
    #[must_use]
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Creates a tag, checking that the name is a plausible element name.
    ///
    /// A valid name starts with an ASCII letter and continues with ASCII
    /// alphanumerics, `-`, `_`, `.` or `:`.
    ///
    /// ```rust
    /// use understory_classes::{ElementTag, TagError};
    ///
    /// assert!(ElementTag::try_new("my-element").is_ok());
    /// assert_eq!(ElementTag::try_new(""), Err(TagError::Empty));
    /// ```
    pub fn try_new(name: impl Into<Cow<'static, str>>) -> Result<Self, TagError> {
        let name = name.into();
        let mut chars = name.chars();
        match chars.next() {
            None => return Err(TagError::Empty),
            Some(c) if !c.is_ascii_alphabetic() => {
                return Err(TagError::InvalidStart {
                    name: name.into_owned(),
                });
            }
            Some(_) => {}
        }
        if let Some(ch) = chars.find(|c| !is_name_char(*c)) {
            return Err(TagError::InvalidChar {
                name: name.into_owned(),
                ch,
            });
        }
        Ok(Self(name))
    }

    /// Returns the tag name.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for elements that never have children (`input`, `img`, ...).
    #[must_use]
    pub fn is_void(&self) -> bool {
        matches!(
            &*self.0,
            "area"
                | "base"
                | "br"
                | "col"
                | "embed"
                | "hr"
                | "img"
                | "input"
                | "link"
                | "meta"
                | "source"
                | "track"
                | "wbr"
        )
    }
}

pub(crate) fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':')
}

impl fmt::Debug for ElementTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ElementTag").field(&&*self.0).finish()
    }
}

impl fmt::Display for ElementTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for ElementTag {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

/// Error returned by [`ElementTag::try_new`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TagError {
    /// The name was empty.
    Empty,
    /// The name does not start with an ASCII letter.
    InvalidStart {
        /// The rejected name.
        name: String,
    },
    /// The name contains a character that is not allowed.
    InvalidChar {
        /// The rejected name.
        name: String,
        /// The first offending character.
        ch: char,
    },
}

impl fmt::Display for TagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("element tag name is empty"),
            Self::InvalidStart { name } => {
                write!(f, "element tag name {name:?} must start with an ASCII letter")
            }
            Self::InvalidChar { name, ch } => {
                write!(f, "element tag name {name:?} contains invalid character {ch:?}")
            }
        }
    }
}

impl core::error::Error for TagError {}

/// The unit a composed component renders into.
///
/// Identity is by reference: two component targets are equal only if they
/// share the same allocation.
#[derive(Clone)]
pub enum Target {
    /// A primitive element, rendered by the host.
    Element(ElementTag),
    /// A custom or composed component.
    Component(Rc<dyn Render>),
}

impl Target {
    /// Creates a component target from any [`Render`] implementation.
    ///
    /// ```rust
    /// use understory_classes::{Element, Node, Props, Target};
    ///
    /// let card = Target::component(|props: Props| -> Node {
    ///     Element::new("section")
    ///         .with_class_name(props.class_name().unwrap_or_default())
    ///         .into()
    /// });
    /// assert!(!card.is_element());
    /// ```
    #[must_use]
    pub fn component<R: Render + 'static>(component: R) -> Self {
        Self::Component(Rc::new(component))
    }

    /// Returns `true` if this target is a primitive element.
    #[must_use]
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element(_))
    }

    /// Returns the element tag, if this is a primitive element.
    #[must_use]
    pub fn as_element(&self) -> Option<&ElementTag> {
        match self {
            Self::Element(tag) => Some(tag),
            Self::Component(_) => None,
        }
    }
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(tag) => f.debug_tuple("Element").field(&tag.as_str()).finish(),
            Self::Component(c) => f
                .debug_tuple("Component")
                .field(&Rc::as_ptr(c).cast::<()>())
                .finish(),
        }
    }
}

impl PartialEq for Target {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Element(a), Self::Element(b)) => a == b,
            (Self::Component(a), Self::Component(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<ElementTag> for Target {
    fn from(tag: ElementTag) -> Self {
        Self::Element(tag)
    }
}

impl From<&'static str> for Target {
    fn from(tag: &'static str) -> Self {
        Self::Element(ElementTag::new(tag))
    }
}

impl From<Rc<dyn Render>> for Target {
    fn from(component: Rc<dyn Render>) -> Self {
        Self::Component(component)
    }
}
