// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Class fragments and their evaluation.
//!
//! A composed component is declared with an ordered list of [`Fragment`]s:
//! literal class text interleaved with functions of the current [`Props`].
//! [`evaluate`] turns that list into the [`ClassList`] for one render.

use alloc::borrow::Cow;
use alloc::rc::Rc;
use alloc::string::String;
use core::fmt;

use smallvec::SmallVec;

use crate::props::{FromProps, Props};

/// Values a computed fragment may return.
///
/// `None` means "contribute nothing", which makes conditional classes read
/// naturally: `props.flag("$sticky").then_some("sticky")`. An empty string
/// contributes nothing either.
pub trait IntoClass {
    /// Converts into an optional class token.
    fn into_class(self) -> Option<Cow<'static, str>>;
}

impl IntoClass for &'static str {
    fn into_class(self) -> Option<Cow<'static, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl IntoClass for String {
    fn into_class(self) -> Option<Cow<'static, str>> {
        Some(Cow::Owned(self))
    }
}

impl IntoClass for Cow<'static, str> {
    fn into_class(self) -> Option<Cow<'static, str>> {
        Some(self)
    }
}

impl<T: IntoClass> IntoClass for Option<T> {
    fn into_class(self) -> Option<Cow<'static, str>> {
        self.and_then(IntoClass::into_class)
    }
}

type ClassFn = dyn Fn(&Props) -> Option<Cow<'static, str>>;

/// One unit of class contribution.
#[derive(Clone)]
pub enum Fragment {
    /// Static class text. Surrounding whitespace is ignored.
    Literal(Cow<'static, str>),
    /// Class text computed from the current props.
    Computed(Rc<ClassFn>),
}

impl Fragment {
    /// Creates a literal fragment.
    #[must_use]
    pub fn literal(text: impl Into<Cow<'static, str>>) -> Self {
        Self::Literal(text.into())
    }

    /// Creates a computed fragment.
    #[must_use]
    pub fn computed<F, R>(f: F) -> Self
    where
        F: Fn(&Props) -> R + 'static,
        R: IntoClass,
    {
        Self::Computed(Rc::new(move |props: &Props| f(props).into_class()))
    }

    /// Creates a computed fragment over the typed properties `P`.
    ///
    /// `P` is extracted from the props of each render before `f` runs.
    #[must_use]
    pub fn typed<P, F, R>(f: F) -> Self
    where
        P: FromProps,
        F: Fn(&P) -> R + 'static,
        R: IntoClass,
    {
        Self::computed(move |props: &Props| f(&P::from_props(props)))
    }

    /// Returns this fragment's contribution for `props`, if any.
    #[must_use]
    pub fn evaluate(&self, props: &Props) -> Option<Cow<'_, str>> {
        match self {
            Self::Literal(text) => {
                let text = text.trim();
                (!text.is_empty()).then_some(Cow::Borrowed(text))
            }
            Self::Computed(f) => f(props).filter(|class| !class.is_empty()),
        }
    }
}

impl fmt::Debug for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl From<&'static str> for Fragment {
    fn from(text: &'static str) -> Self {
        Self::literal(text)
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Self::literal(text)
    }
}

/// Inline capacity for class tokens; most components declare a handful.
const INLINE_TOKENS: usize = 8;

/// The ordered class tokens produced by one composition level.
///
/// Tokens keep declaration order and are never deduplicated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList<'a> {
    tokens: SmallVec<[Cow<'a, str>; INLINE_TOKENS]>,
}

impl<'a> ClassList<'a> {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no fragment contributed.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the number of contributed tokens.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Appends a token.
    pub fn push(&mut self, token: impl Into<Cow<'a, str>>) {
        self.tokens.push(token.into());
    }

    /// Iterates tokens in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.tokens.iter().map(|t| &**t)
    }

    /// Joins the tokens with single spaces.
    #[must_use]
    pub fn join(&self) -> String {
        let mut out = String::new();
        self.write_joined(&mut out);
        out
    }

    /// Merges with a caller-supplied class string.
    ///
    /// Own tokens come first and the caller's string last, then the whole
    /// result is trimmed. Whitespace inside tokens is left alone.
    ///
    /// ```rust
    /// use understory_classes::ClassList;
    ///
    /// let mut own = ClassList::new();
    /// own.push("text-primary-700");
    /// assert_eq!(own.merge(Some("bg-white")), "text-primary-700 bg-white");
    /// assert_eq!(own.merge(None), "text-primary-700");
    /// assert_eq!(ClassList::new().merge(Some("bg-white")), "bg-white");
    /// ```
    #[must_use]
    pub fn merge(&self, caller: Option<&str>) -> String {
        let mut out = String::new();
        self.write_joined(&mut out);
        out.push(' ');
        out.push_str(caller.unwrap_or_default());
        let trimmed = out.trim();
        if trimmed.len() == out.len() {
            out
        } else {
            trimmed.into()
        }
    }

    fn write_joined(&self, out: &mut String) {
        for (idx, token) in self.tokens.iter().enumerate() {
            if idx > 0 {
                out.push(' ');
            }
            out.push_str(token);
        }
    }
}

impl fmt::Display for ClassList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, token) in self.tokens.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

impl<'a, T: Into<Cow<'a, str>>> FromIterator<T> for ClassList<'a> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Evaluates `fragments` in declaration order against `props`.
///
/// Literals contribute their trimmed text, computed fragments their
/// non-empty result; nothing else is filtered. Neither `props` nor the
/// fragments are touched, so identical inputs give identical lists.
///
/// ```rust
/// use understory_classes::{Fragment, Props, evaluate};
///
/// let fragments = [
///     Fragment::literal("text-primary-700"),
///     Fragment::computed(|p: &Props| {
///         if p.flag("$enabled") { "bg-primary-100" } else { "bg-neutral-400" }
///     }),
///     Fragment::literal("rounded-sm"),
/// ];
///
/// let on = Props::new().with("$enabled", true);
/// assert_eq!(
///     evaluate(&fragments, &on).join(),
///     "text-primary-700 bg-primary-100 rounded-sm",
/// );
/// ```
#[must_use]
pub fn evaluate<'a>(fragments: &'a [Fragment], props: &Props) -> ClassList<'a> {
    fragments
        .iter()
        .filter_map(|fragment| fragment.evaluate(props))
        .collect()
}
