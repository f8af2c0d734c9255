//! Persistent storage for the raw text pieces that make up a pattern.
//!
//! A [`Fragments`] sequence is a binary rope of reference-counted nodes.
//! Joining two sequences allocates a single node and shares both inputs, so
//! long derivation chains never copy the text that came before them.

use std::sync::Arc;

/// An atomic piece of raw pattern syntax.
pub type Fragment = Arc<str>;

#[derive(Clone, Default)]
pub struct Fragments {
    root: Option<Arc<Node>>,
}

enum Node {
    Leaf(Fragment),
    Join {
        left: Arc<Node>,
        right: Arc<Node>,
        count: usize,
        text_len: usize,
    },
}

impl Node {
    #[inline]
    fn count(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Join { count, .. } => *count,
        }
    }

    #[inline]
    fn text_len(&self) -> usize {
        match self {
            Node::Leaf(s) => s.len(),
            Node::Join { text_len, .. } => *text_len,
        }
    }
}

impl Fragments {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A sequence holding one fragment. Empty text yields an empty sequence.
    #[must_use]
    pub fn single(text: &str) -> Self {
        if text.is_empty() {
            return Self::new();
        }
        Self {
            root: Some(Arc::new(Node::Leaf(text.into()))),
        }
    }

    /// Number of fragments.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.root.as_deref().map_or(0, Node::count)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Length in bytes of the rendered text.
    #[inline]
    #[must_use]
    pub fn text_len(&self) -> usize {
        self.root.as_deref().map_or(0, Node::text_len)
    }

    /// `self` followed by `other`. Both inputs are shared, not copied.
    #[must_use]
    pub fn join(&self, other: &Fragments) -> Fragments {
        match (&self.root, &other.root) {
            (None, _) => other.clone(),
            (_, None) => self.clone(),
            (Some(left), Some(right)) => Fragments {
                root: Some(Arc::new(Node::Join {
                    count: left.count() + right.count(),
                    text_len: left.text_len() + right.text_len(),
                    left: left.clone(),
                    right: right.clone(),
                })),
            },
        }
    }

    #[must_use]
    pub fn push(&self, text: &str) -> Fragments {
        self.join(&Fragments::single(text))
    }

    #[must_use]
    pub fn prepend(&self, text: &str) -> Fragments {
        Fragments::single(text).join(self)
    }

    /// `open`, then `self`, then `close`.
    #[must_use]
    pub fn surround(&self, open: &str, close: &str) -> Fragments {
        self.prepend(open).push(close)
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            stack: self.root.as_deref().into_iter().collect(),
        }
    }

    /// Concatenate all fragments in order.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.text_len());
        for fragment in self {
            out.push_str(fragment);
        }
        out
    }
}

impl<'a> FromIterator<&'a str> for Fragments {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Fragments::new(), |acc, text| acc.push(text))
    }
}

impl<'a> IntoIterator for &'a Fragments {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order traversal over the leaves of a [`Fragments`] rope.
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while let Some(node) = self.stack.pop() {
            match node {
                Node::Leaf(text) => return Some(&**text),
                Node::Join { left, right, .. } => {
                    self.stack.push(right);
                    self.stack.push(left);
                }
            }
        }
        None
    }
}

impl std::fmt::Debug for Fragments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for Fragments {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for Fragments {}
