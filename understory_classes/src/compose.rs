// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The composition wrapper.
//!
//! [`tw`] starts a declaration from a base [`Target`]; the resulting
//! [`ComposeBuilder`] collects fragments and builds a [`Composed`] unit that
//! can be rendered any number of times, or used as the base of another
//! composition.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

use crate::fragment::{ClassList, Fragment, IntoClass, evaluate};
use crate::node::{Element, Node};
use crate::props::{FromProps, PropParts, Props};
use crate::target::{Render, Target};

/// Starts declaring a composed component over `base`.
///
/// ```rust
/// use understory_classes::{Props, tw};
///
/// let button = tw("button")
///     .literal("text-primary-700")
///     .computed(|p: &Props| p.flag("$enabled").then_some("bg-primary-100"))
///     .literal("rounded-sm")
///     .build();
///
/// let node = button.render(Props::new().with("$enabled", true).with_child("Save"));
/// assert_eq!(
///     node.to_string(),
///     r#"<button class="text-primary-700 bg-primary-100 rounded-sm">Save</button>"#,
/// );
/// ```
#[must_use]
pub fn tw(base: impl Into<Target>) -> ComposeBuilder {
    ComposeBuilder {
        base: base.into(),
        fragments: Vec::new(),
    }
}

/// Collects the fragments of a composed component.
///
/// Created by [`tw`].
#[derive(Debug)]
pub struct ComposeBuilder {
    base: Target,
    fragments: Vec<Fragment>,
}

impl ComposeBuilder {
    /// Appends literal class text.
    #[must_use]
    pub fn literal(self, text: impl Into<Cow<'static, str>>) -> Self {
        self.fragment(Fragment::literal(text))
    }

    /// Appends a class computed from the props of each render.
    #[must_use]
    pub fn computed<F, R>(self, f: F) -> Self
    where
        F: Fn(&Props) -> R + 'static,
        R: IntoClass,
    {
        self.fragment(Fragment::computed(f))
    }

    /// Appends a class computed from typed properties, see [`FromProps`].
    #[must_use]
    pub fn typed<P, F, R>(self, f: F) -> Self
    where
        P: FromProps,
        F: Fn(&P) -> R + 'static,
        R: IntoClass,
    {
        self.fragment(Fragment::typed(f))
    }

    /// Appends a fragment.
    #[must_use]
    pub fn fragment(mut self, fragment: impl Into<Fragment>) -> Self {
        self.fragments.push(fragment.into());
        self
    }

    /// Appends fragments in order.
    #[must_use]
    pub fn fragments(mut self, fragments: impl IntoIterator<Item = Fragment>) -> Self {
        self.fragments.extend(fragments);
        self
    }

    /// Freezes the declaration.
    #[must_use]
    pub fn build(self) -> Composed {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "understory_classes::compose",
            base = ?self.base,
            fragments = self.fragments.len(),
            "declared composed component"
        );
        Composed {
            inner: Rc::new(ComposedData {
                base: self.base,
                fragments: self.fragments.into_boxed_slice(),
            }),
        }
    }
}

/// A reusable component that computes its classes from fragments and
/// renders into a base target.
///
/// The declaration is immutable; cloning shares it. Each call to
/// [`render`](Self::render) is a pure function of the props it is given.
///
/// # Rendering
///
/// 1. The effective target is the props' [`render_as`](Props::render_as)
///    override if present, else the declared base.
/// 2. The fragments are evaluated against the props.
/// 3. The caller's class string is appended after the own classes.
/// 4. `render_as` and the caller's class string are not forwarded. A primitive
///    element additionally loses every transient (`$`) property; a component
///    receives them unchanged.
/// 5. The node reference reaches a primitive element, or a component that
///    [forwards references](Render::forwards_ref); otherwise it is dropped.
///
/// Because each level passes its merged class string down as the inner
/// level's caller class string, a chain of compositions renders the innermost
/// level's classes first and the outermost level's last.
#[derive(Clone, Debug)]
pub struct Composed {
    inner: Rc<ComposedData>,
}

#[derive(Debug)]
struct ComposedData {
    base: Target,
    fragments: Box<[Fragment]>,
}

impl Composed {
    /// Returns the declared base target.
    #[must_use]
    pub fn base(&self) -> &Target {
        &self.inner.base
    }

    /// Returns the declared fragments.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.inner.fragments
    }

    /// Returns this level's own classes for `props`.
    #[must_use]
    pub fn classes(&self, props: &Props) -> ClassList<'_> {
        evaluate(&self.inner.fragments, props)
    }

    /// Returns this level's final class string for `props`: own classes
    /// followed by the caller's.
    #[must_use]
    pub fn class_string(&self, props: &Props) -> String {
        self.classes(props).merge(props.class_name())
    }

    /// Returns the target `props` would render into.
    #[must_use]
    pub fn effective_target<'a>(&'a self, props: &'a Props) -> &'a Target {
        props.render_as().unwrap_or(&self.inner.base)
    }

    /// Renders with `props`.
    #[must_use]
    pub fn render(&self, props: Props) -> Node {
        let class_name = self.class_string(&props);
        let PropParts {
            class_name: _,
            render_as,
            node_ref,
            children,
            mut values,
        } = props.into_parts();
        let target = render_as.unwrap_or_else(|| self.inner.base.clone());

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "understory_classes::compose",
            effective = ?target,
            class_name = %class_name,
            "render"
        );

        match target {
            Target::Element(tag) => {
                values.retain_non_transient();
                Node::Element(Element {
                    tag,
                    class_name: Some(class_name),
                    attributes: values,
                    children,
                    node_ref,
                })
            }
            Target::Component(component) => {
                let node_ref = node_ref.filter(|_| component.forwards_ref());
                component.render(Props::from(PropParts {
                    class_name: Some(class_name),
                    render_as: None,
                    node_ref,
                    children,
                    values,
                }))
            }
        }
    }
}

impl Render for Composed {
    fn render(&self, props: Props) -> Node {
        Self::render(self, props)
    }

    fn forwards_ref(&self) -> bool {
        true
    }
}

impl From<Composed> for Target {
    fn from(composed: Composed) -> Self {
        Self::Component(Rc::new(composed))
    }
}

impl From<&Composed> for Target {
    fn from(composed: &Composed) -> Self {
        composed.clone().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeRef;
    use alloc::string::ToString;

    fn element(node: &Node) -> &Element {
        node.as_element().expect("expected an element")
    }

    #[test]
    fn renders_base_element_with_own_classes() {
        let c = tw("button").literal("text-primary-700").build();
        let node = c.render(Props::new());
        let el = element(&node);
        assert_eq!(el.tag.as_str(), "button");
        assert_eq!(el.class_name.as_deref(), Some("text-primary-700"));
        assert!(el.attributes.is_empty());
    }

    #[test]
    fn empty_declaration_still_sets_class() {
        let c = tw("div").build();
        assert_eq!(c.render(Props::new()).to_string(), "<div class=\"\"></div>");
    }

    #[test]
    fn override_target_replaces_base() {
        let c = tw("button").literal("x").build();
        let node = c.render(Props::new().with_render_as("a").with("href", "/"));
        assert_eq!(node.to_string(), "<a class=\"x\" href=\"/\"></a>");
    }

    #[test]
    fn effective_target_prefers_override() {
        let c = tw("button").build();
        let plain = Props::new();
        let overridden = Props::new().with_render_as("span");
        assert_eq!(*c.effective_target(&plain), Target::from("button"));
        assert_eq!(*c.effective_target(&overridden), Target::from("span"));
    }

    #[test]
    fn reference_reaches_primitive_element() {
        let node_ref = NodeRef::new();
        let c = tw("input").build();
        let node = c.render(Props::new().with_node_ref(node_ref.clone()));
        assert!(
            element(&node)
                .node_ref
                .as_ref()
                .is_some_and(|r| r.ptr_eq(&node_ref))
        );
    }

    #[test]
    fn reference_dropped_for_plain_component() {
        let seen = Rc::new(core::cell::Cell::new(true));
        let seen_in = seen.clone();
        let plain = Target::component(move |props: Props| -> Node {
            seen_in.set(props.node_ref().is_some());
            Node::Empty
        });
        let c = tw(plain).build();
        let _ = c.render(Props::new().with_node_ref(NodeRef::new()));
        assert!(!seen.get());
    }

    #[test]
    fn reference_forwarded_through_nested_composition() {
        let node_ref = NodeRef::new();
        let inner = tw("button").literal("a").build();
        let outer = tw(&inner).literal("b").build();
        let node = outer.render(Props::new().with_node_ref(node_ref.clone()));
        let el = element(&node);
        assert_eq!(el.class_name.as_deref(), Some("a b"));
        assert!(el.node_ref.as_ref().is_some_and(|r| r.ptr_eq(&node_ref)));
    }

    #[test]
    fn clones_share_declaration() {
        let c = tw("p").literal("a").build();
        let d = c.clone();
        assert!(Rc::ptr_eq(&c.inner, &d.inner));
        assert_eq!(d.fragments().len(), 1);
        assert_eq!(*d.base(), Target::from("p"));
    }
}
