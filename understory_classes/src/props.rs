// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The render-time property bag.

use alloc::string::String;
use alloc::vec::Vec;

use understory_props::{AnyValue, PropKey, PropMap, PropValue};

use crate::node::{Node, NodeRef};
use crate::target::Target;

/// Properties passed to a component on a single render.
///
/// The reserved slots (`class_name`, `render_as`, `node_ref`, `children`) are
/// kept apart from the open-ended [`PropMap`], which also holds transient
/// (`$`-prefixed) properties.
///
/// # Example
///
/// ```rust
/// use understory_classes::Props;
///
/// let props = Props::new()
///     .with_class_name("bg-white")
///     .with("$enabled", true)
///     .with("type", "submit")
///     .with_child("Save");
///
/// assert!(props.flag("$enabled"));
/// assert_eq!(props.text("type"), Some("submit"));
/// assert_eq!(props.class_name(), Some("bg-white"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Props {
    class_name: Option<String>,
    render_as: Option<Target>,
    node_ref: Option<NodeRef>,
    children: Vec<Node>,
    values: PropMap,
}

/// The owned pieces of a [`Props`], see [`Props::into_parts`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropParts {
    /// Caller-supplied class string.
    pub class_name: Option<String>,
    /// Per-render override target.
    pub render_as: Option<Target>,
    /// Reference to forward.
    pub node_ref: Option<NodeRef>,
    /// Children.
    pub children: Vec<Node>,
    /// Every other property, transient ones included.
    pub values: PropMap,
}

/// A typed view of the properties a component declares.
///
/// Fragments built with [`Fragment::typed`](crate::Fragment::typed) read
/// their inputs through this trait instead of looking names up in the bag.
///
/// ```rust
/// use understory_classes::{FromProps, Props, tw};
///
/// struct ButtonProps {
///     enabled: bool,
///     size: Option<String>,
/// }
///
/// impl FromProps for ButtonProps {
///     fn from_props(props: &Props) -> Self {
///         Self {
///             enabled: props.flag("$enabled"),
///             size: props.text("$size").map(String::from),
///         }
///     }
/// }
///
/// let button = tw("button")
///     .typed(|p: &ButtonProps| p.enabled.then_some("bg-primary-100"))
///     .typed(|p: &ButtonProps| p.size.as_ref().map(|s| format!("text-{s}")))
///     .build();
///
/// let props = Props::new().with("$enabled", true).with("$size", "lg");
/// assert_eq!(button.class_string(&props), "bg-primary-100 text-lg");
/// ```
pub trait FromProps {
    /// Extracts the declared properties from `props`.
    fn from_props(props: &Props) -> Self;
}

impl FromProps for Props {
    fn from_props(props: &Props) -> Self {
        props.clone()
    }
}

/// Property names that address the caller class string.
const CLASS_KEYS: [&str; 2] = ["class", "className"];

fn is_class_key(name: &str) -> bool {
    CLASS_KEYS.contains(&name)
}

impl Props {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the caller-supplied class string.
    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Renders as `target` instead of the declared base.
    #[must_use]
    pub fn with_render_as(mut self, target: impl Into<Target>) -> Self {
        self.render_as = Some(target.into());
        self
    }

    /// Sets the reference to forward to the rendered element.
    #[must_use]
    pub fn with_node_ref(mut self, node_ref: NodeRef) -> Self {
        self.node_ref = Some(node_ref);
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

    /// Sets a property.
    ///
    /// `class` and `className` are not ordinary properties: text set under
    /// either name becomes the caller class string, as if set with
    /// [`with_class_name`](Self::with_class_name).
    #[must_use]
    pub fn with(mut self, key: impl Into<PropKey>, value: impl Into<PropValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets a property holding an arbitrary value.
    #[must_use]
    pub fn with_any<T: 'static>(self, key: impl Into<PropKey>, value: T) -> Self {
        self.with(key, AnyValue::new(value))
    }

    /// Sets a property in place, returning the previous value.
    ///
    /// See [`with`](Self::with) for the class names.
    pub fn set(
        &mut self,
        key: impl Into<PropKey>,
        value: impl Into<PropValue>,
    ) -> Option<PropValue> {
        let key = key.into();
        let value = value.into();
        if is_class_key(key.as_str()) {
            let previous = self.class_name.take().map(PropValue::Text);
            self.class_name = value.as_str().map(String::from);
            return previous;
        }
        self.values.set(key, value)
    }

    /// Returns the caller-supplied class string.
    #[must_use]
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// Returns the override target, if any.
    #[must_use]
    pub fn render_as(&self) -> Option<&Target> {
        self.render_as.as_ref()
    }

    /// Returns the reference to forward, if any.
    #[must_use]
    pub fn node_ref(&self) -> Option<&NodeRef> {
        self.node_ref.as_ref()
    }

    /// Returns the children.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Returns the open-ended properties.
    #[must_use]
    pub fn values(&self) -> &PropMap {
        &self.values
    }

    /// Returns the property named `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.values.get(name)
    }

    /// Returns `true` if `name` is set to a truthy value.
    ///
    /// Missing properties are falsy, so optional flags read naturally:
    /// `props.flag("$enabled")`.
    #[must_use]
    pub fn flag(&self, name: &str) -> bool {
        self.get(name).is_some_and(PropValue::is_truthy)
    }

    /// Returns the text of `name`, if it holds text.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(PropValue::as_str)
    }

    /// Downcasts the arbitrary value stored under `name`.
    #[must_use]
    pub fn get_any<T: 'static>(&self, name: &str) -> Option<&T> {
        self.get(name).and_then(PropValue::downcast_ref::<T>)
    }

    /// Splits the bag into its reserved slots and the remaining properties.
    #[must_use]
    pub fn into_parts(self) -> PropParts {
        PropParts {
            class_name: self.class_name,
            render_as: self.render_as,
            node_ref: self.node_ref,
            children: self.children,
            values: self.values,
        }
    }
}

impl From<PropParts> for Props {
    /// Class names left in `values` are folded into the class slot; an
    /// explicit `class_name` wins.
    fn from(mut parts: PropParts) -> Self {
        for name in CLASS_KEYS {
            if let Some(value) = parts.values.remove(name)
                && parts.class_name.is_none()
            {
                parts.class_name = value.as_str().map(String::from);
            }
        }
        Self {
            class_name: parts.class_name,
            render_as: parts.render_as,
            node_ref: parts.node_ref,
            children: parts.children,
            values: parts.values,
        }
    }
}
