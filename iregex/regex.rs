use std::sync::Arc;

use indexmap::IndexSet;

use crate::{Fragments, Shape};

pub(crate) type NameSet = IndexSet<Arc<str>, ahash::RandomState>;

/// An immutable pattern value: an ordered sequence of raw text fragments
/// plus the names of the capture groups it introduces.
///
/// Every transform returns a new value. Inputs are never modified, and the
/// fragment storage is shared between a value and everything derived from
/// it.
#[derive(Clone, Default)]
pub struct Regex {
    fragments: Fragments,
    names: Arc<NameSet>,
}

impl Regex {
    /// The empty pattern.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A value holding `text` as raw pattern syntax. Metacharacters keep
    /// their meaning; use [`Regex::escaped`] to match text verbatim.
    #[must_use]
    pub fn literal(text: impl AsRef<str>) -> Self {
        Self::from_fragments(Fragments::single(text.as_ref()))
    }

    /// A value that matches `text` verbatim.
    #[must_use]
    pub fn escaped(text: impl AsRef<str>) -> Self {
        Self::literal(::regex::escape(text.as_ref()))
    }

    #[inline]
    pub(crate) fn from_fragments(fragments: Fragments) -> Self {
        Self {
            fragments,
            names: Arc::default(),
        }
    }

    #[inline]
    pub(crate) fn with_names(fragments: Fragments, names: Arc<NameSet>) -> Self {
        Self { fragments, names }
    }

    /// Same capture names, different text.
    #[inline]
    pub(crate) fn map_fragments(&self, f: impl FnOnce(&Fragments) -> Fragments) -> Self {
        Self::with_names(f(&self.fragments), self.names.clone())
    }

    #[inline]
    #[must_use]
    pub fn fragments(&self) -> &Fragments {
        &self.fragments
    }

    /// The pattern text.
    #[inline]
    #[must_use]
    pub fn render(&self) -> String {
        self.fragments.render()
    }

    #[inline]
    #[must_use]
    pub fn shape(&self) -> Shape {
        Shape::of(&self.render())
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Names of the named capture groups in this pattern, in the order they
    /// were introduced.
    pub fn capture_names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.names.iter().map(|name| &**name)
    }

    #[inline]
    #[must_use]
    pub fn has_capture_name(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    #[inline]
    pub(crate) fn names(&self) -> &Arc<NameSet> {
        &self.names
    }
}

impl std::fmt::Display for Regex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for fragment in &self.fragments {
            f.write_str(fragment)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Regex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Regex(r\"{self}\")")
    }
}

/// Two values are equal when they render the same text.
impl PartialEq for Regex {
    fn eq(&self, other: &Self) -> bool {
        self.fragments.text_len() == other.fragments.text_len()
            && self.render() == other.render()
    }
}

impl Eq for Regex {}

impl PartialEq<str> for Regex {
    fn eq(&self, other: &str) -> bool {
        self.render() == other
    }
}

impl PartialEq<&str> for Regex {
    fn eq(&self, other: &&str) -> bool {
        self.render() == *other
    }
}

impl std::hash::Hash for Regex {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.render().hash(state);
    }
}

impl serde::Serialize for Regex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
