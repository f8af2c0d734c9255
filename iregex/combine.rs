use std::{any::Any, sync::Arc};

use crate::{Error, Fragments, Regex, Shape, consts};

/// Anything a combinator accepts: raw pattern text or a built value.
#[derive(Debug, Clone)]
pub enum Operand {
    Literal(String),
    Built(Regex),
}

impl Operand {
    /// Normalize to a builder value.
    #[must_use]
    pub fn into_regex(self) -> Regex {
        match self {
            Operand::Literal(s) => Regex::literal(s),
            Operand::Built(re) => re,
        }
    }

    /// Accept a dynamically typed operand. Strings, chars and [`Regex`]
    /// values are supported.
    pub fn from_any(value: &dyn Any) -> Result<Operand, Error> {
        if let Some(re) = value.downcast_ref::<Regex>() {
            Ok(Operand::Built(re.clone()))
        } else if let Some(s) = value.downcast_ref::<String>() {
            Ok(Operand::Literal(s.clone()))
        } else if let Some(s) = value.downcast_ref::<&'static str>() {
            Ok(Operand::Literal((*s).to_owned()))
        } else if let Some(c) = value.downcast_ref::<char>() {
            Ok(Operand::Literal(c.to_string()))
        } else {
            Err(Error::UnsupportedOperandType)
        }
    }
}

impl From<&str> for Operand {
    #[inline]
    fn from(s: &str) -> Self {
        Operand::Literal(s.to_owned())
    }
}

impl From<String> for Operand {
    #[inline]
    fn from(s: String) -> Self {
        Operand::Literal(s)
    }
}

impl From<&String> for Operand {
    #[inline]
    fn from(s: &String) -> Self {
        Operand::Literal(s.clone())
    }
}

impl From<char> for Operand {
    #[inline]
    fn from(c: char) -> Self {
        Operand::Literal(c.to_string())
    }
}

impl From<Regex> for Operand {
    #[inline]
    fn from(re: Regex) -> Self {
        Operand::Built(re)
    }
}

impl From<&Regex> for Operand {
    #[inline]
    fn from(re: &Regex) -> Self {
        Operand::Built(re.clone())
    }
}

/// `a` followed by `b`. Fails if both sides introduce the same capture name.
pub fn concatenate(a: impl Into<Operand>, b: impl Into<Operand>) -> Result<Regex, Error> {
    a.into().into_regex().concat(b)
}

/// `(?:a|b)`. Fails if either side introduces a named capture group.
pub fn alternate(a: impl Into<Operand>, b: impl Into<Operand>) -> Result<Regex, Error> {
    a.into().into_regex().alternate(b)
}

impl Regex {
    /// `self` followed by `other`.
    pub fn concat(&self, other: impl Into<Operand>) -> Result<Regex, Error> {
        let other = other.into().into_regex();
        if let Some(name) = self
            .capture_names()
            .find(|name| other.has_capture_name(name))
        {
            tracing::trace!("capture name `{name}` on both sides of `{self}` + `{other}`");
            return Err(Error::NameCollision(name.to_owned()));
        }

        let names = if other.names().is_empty() {
            self.names().clone()
        } else if self.names().is_empty() {
            other.names().clone()
        } else {
            let mut names = (**self.names()).clone();
            names.extend(other.names().iter().cloned());
            Arc::new(names)
        };
        Ok(Regex::with_names(
            self.fragments().join(other.fragments()),
            names,
        ))
    }

    /// `(?:self|other)`. Operands that are already non-capture groups are
    /// spliced in rather than nested.
    pub fn alternate(&self, other: impl Into<Operand>) -> Result<Regex, Error> {
        let other = other.into().into_regex();
        let named = self
            .capture_names()
            .chain(other.capture_names())
            .map(str::to_owned)
            .collect::<Vec<_>>();
        if !named.is_empty() {
            return Err(Error::NonEmptyCaptureGroups(named));
        }

        let fragments = branch(self)
            .push("|")
            .join(&branch(&other))
            .surround("(?:", ")");
        Ok(Regex::from_fragments(fragments))
    }

    /// Append `.*`.
    #[must_use]
    pub fn anything(&self) -> Regex {
        self.append(&consts::ANYTHING)
    }

    /// Append `\s*`.
    #[must_use]
    pub fn whitespace(&self) -> Regex {
        self.append(&consts::ANY_WHITESPACE)
    }

    /// Append any number of line breaks in any platform convention.
    #[must_use]
    pub fn newlines(&self) -> Regex {
        self.append(&consts::ANY_NEWLINES)
    }

    /// Concatenate a value known to carry no capture names.
    fn append(&self, tail: &Regex) -> Regex {
        debug_assert!(tail.names().is_empty());
        self.map_fragments(|f| f.join(tail.fragments()))
    }
}

/// The fragments to place on one side of `|`.
fn branch(re: &Regex) -> Fragments {
    let text = re.render();
    if Shape::of(&text) == Shape::NonCaptureGroup {
        Fragments::single(&text[3..text.len() - 1])
    } else {
        re.fragments().clone()
    }
}

impl<T: Into<Operand>> std::ops::Add<T> for Regex {
    type Output = Result<Regex, Error>;

    #[inline]
    fn add(self, rhs: T) -> Self::Output {
        self.concat(rhs)
    }
}

impl<T: Into<Operand>> std::ops::Add<T> for &Regex {
    type Output = Result<Regex, Error>;

    #[inline]
    fn add(self, rhs: T) -> Self::Output {
        self.concat(rhs)
    }
}

impl std::ops::Add<Regex> for &str {
    type Output = Result<Regex, Error>;

    #[inline]
    fn add(self, rhs: Regex) -> Self::Output {
        concatenate(self, rhs)
    }
}

impl std::ops::Add<&Regex> for &str {
    type Output = Result<Regex, Error>;

    #[inline]
    fn add(self, rhs: &Regex) -> Self::Output {
        concatenate(self, rhs)
    }
}

impl<T: Into<Operand>> std::ops::BitOr<T> for Regex {
    type Output = Result<Regex, Error>;

    #[inline]
    fn bitor(self, rhs: T) -> Self::Output {
        self.alternate(rhs)
    }
}

impl<T: Into<Operand>> std::ops::BitOr<T> for &Regex {
    type Output = Result<Regex, Error>;

    #[inline]
    fn bitor(self, rhs: T) -> Self::Output {
        self.alternate(rhs)
    }
}

impl std::ops::BitOr<Regex> for &str {
    type Output = Result<Regex, Error>;

    #[inline]
    fn bitor(self, rhs: Regex) -> Self::Output {
        alternate(self, rhs)
    }
}

impl std::ops::BitOr<&Regex> for &str {
    type Output = Result<Regex, Error>;

    #[inline]
    fn bitor(self, rhs: &Regex) -> Self::Output {
        alternate(self, rhs)
    }
}
