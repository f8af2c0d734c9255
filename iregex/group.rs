use std::sync::Arc;

use crate::{Error, Fragments, Regex, Shape};

impl Regex {
    /// Wrap in an anonymous capture group `(...)`.
    ///
    /// A value that is already a capture group is returned as is, and a
    /// non-capture group `(?:X)` becomes `(X)` rather than `((?:X))`.
    pub fn to_capture_group(&self) -> Result<Regex, Error> {
        let text = self.render();
        match Shape::of(&text) {
            Shape::NamedCaptureGroup => Err(already_captured(text)),
            Shape::CaptureGroup => Ok(self.clone()),
            Shape::NonCaptureGroup => Ok(self.rewrap("(", inner(&text, "(?:"))),
            _ => Ok(self.map_fragments(|f| f.surround("(", ")"))),
        }
    }

    /// Wrap in a non-capture group `(?:...)`, unless the value already binds
    /// as a single atom.
    pub fn to_non_capture_group(&self) -> Result<Regex, Error> {
        let text = self.render();
        match Shape::of(&text) {
            shape if shape.is_atom() => Ok(self.clone()),
            Shape::NamedCaptureGroup => Err(already_captured(text)),
            Shape::CaptureGroup => Ok(self.rewrap("(?:", inner(&text, "("))),
            _ => Ok(self.map_fragments(|f| f.surround("(?:", ")"))),
        }
    }

    /// Wrap in a named capture group `(?<name>...)` and register `name`.
    ///
    /// An existing `(` or `(?:` delimiter is replaced instead of nested.
    pub fn to_named_capture_group(&self, name: &str) -> Result<Regex, Error> {
        validate_group_name(name)?;
        let text = self.render();
        let shape = Shape::of(&text);
        if shape == Shape::NamedCaptureGroup {
            return Err(already_captured(text));
        }
        if self.has_capture_name(name) {
            return Err(Error::NameCollision(name.to_owned()));
        }

        let open = format!("(?<{name}>");
        let fragments = match shape {
            Shape::NonCaptureGroup => Fragments::single(inner(&text, "(?:")).surround(&open, ")"),
            Shape::CaptureGroup => Fragments::single(inner(&text, "(")).surround(&open, ")"),
            _ => self.fragments().surround(&open, ")"),
        };

        let mut names = (**self.names()).clone();
        names.insert(name.into());
        Ok(Regex::with_names(fragments, Arc::new(names)))
    }

    /// `(?=...)`
    #[must_use]
    pub fn to_lookahead(&self) -> Regex {
        self.map_fragments(|f| f.surround("(?=", ")"))
    }

    /// `(?<=...)`
    #[must_use]
    pub fn to_lookbehind(&self) -> Regex {
        self.map_fragments(|f| f.surround("(?<=", ")"))
    }

    /// `(?!...)`
    #[must_use]
    pub fn to_negative_lookahead(&self) -> Regex {
        self.map_fragments(|f| f.surround("(?!", ")"))
    }

    /// `(?<!...)`
    #[must_use]
    pub fn to_negative_lookbehind(&self) -> Regex {
        self.map_fragments(|f| f.surround("(?<!", ")"))
    }

    /// Replace the outer delimiters with `open` and `)`.
    fn rewrap(&self, open: &str, inner: &str) -> Regex {
        self.map_fragments(|_| Fragments::single(inner).surround(open, ")"))
    }
}

/// The text between an opening delimiter `open` and the final `)`.
fn inner<'a>(text: &'a str, open: &str) -> &'a str {
    &text[open.len()..text.len() - 1]
}

fn already_captured(text: String) -> Error {
    tracing::trace!("rejecting regroup of named capture group `{text}`");
    Error::AlreadyCaptured(text)
}

/// Group names accepted by both supported engines.
fn validate_group_name(name: &str) -> Result<(), Error> {
    let mut chars = name.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(Error::invalid_argument(format!(
            "`{name}` is not a valid capture group name"
        )))
    }
}
