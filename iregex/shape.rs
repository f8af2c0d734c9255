//! Classification of the outermost syntax of rendered pattern text.
//!
//! Every grouping transform and quantifier asks [`Shape::of`] what it is
//! looking at before deciding whether parentheses are needed.

/// The outer syntactic shape of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// One character, or a backslash followed by one character.
    SingleChar,
    /// `[...]` or `[^...]`.
    CharClass,
    /// `(?<name>...)`
    NamedCaptureGroup,
    /// `(?:...)`
    NonCaptureGroup,
    /// `(?=...)`, `(?!...)`, `(?<=...)` or `(?<!...)`
    Lookaround,
    /// `(...)`
    CaptureGroup,
    Other,
}

impl Shape {
    /// Classify `text`. Earlier rules win.
    #[must_use]
    pub fn of(text: &str) -> Shape {
        if is_single_char(text) {
            return Shape::SingleChar;
        }

        if text.starts_with('[') && text.ends_with(']') {
            return if closes_at_end(text) {
                Shape::CharClass
            } else {
                Shape::Other
            };
        }

        if !(text.starts_with('(') && text.ends_with(')')) || !closes_at_end(text) {
            return Shape::Other;
        }

        // The third-character check keeps lookbehind from being read as a name.
        if let Some(rest) = text.strip_prefix("(?<") {
            if text.chars().count() >= 5 && !rest.starts_with(['=', '!']) {
                return Shape::NamedCaptureGroup;
            }
        }

        if text.starts_with("(?:") {
            Shape::NonCaptureGroup
        } else if ["(?=", "(?!", "(?<=", "(?<!"]
            .iter()
            .any(|prefix| text.starts_with(prefix))
        {
            Shape::Lookaround
        } else if text.starts_with("(?") {
            Shape::Other
        } else {
            Shape::CaptureGroup
        }
    }

    /// True for shapes that already bind as a single atom under a quantifier.
    #[inline]
    #[must_use]
    pub fn is_atom(self) -> bool {
        matches!(
            self,
            Shape::SingleChar | Shape::CharClass | Shape::NonCaptureGroup
        )
    }
}

/// One character, or a two-character escape such as `\d`.
#[must_use]
pub fn is_single_char(text: &str) -> bool {
    let mut chars = text.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(_), None, _) => true,
        (Some('\\'), Some(_), None) => true,
        _ => false,
    }
}

/// True if `text` ends in `?`, `*`, `+`, `{m}`, `{m,}` or `{m,n}`.
#[must_use]
pub fn is_repeating(text: &str) -> bool {
    let Some(last) = text.chars().next_back() else {
        return false;
    };
    let body = &text[..text.len() - last.len_utf8()];
    match last {
        '?' | '*' | '+' => !is_escaped(body),
        '}' => {
            let Some(open) = body.rfind('{') else {
                return false;
            };
            let prefix = &body[..open];
            is_bounds(&body[open + 1..]) && !is_escaped(prefix) && !is_brace_escape(prefix)
        }
        _ => false,
    }
}

/// True if `text` ends in a repetition suffix that is already lazy (`*?`,
/// `{m,n}?`, ...).
#[must_use]
pub fn is_lazy(text: &str) -> bool {
    text.strip_suffix('?')
        .is_some_and(|body| !is_escaped(body) && is_repeating(body))
}

/// `m`, `m,` or `m,n`, all decimal.
fn is_bounds(s: &str) -> bool {
    let (min, max) = s.split_once(',').unwrap_or((s, ""));
    !min.is_empty()
        && min.bytes().all(|b| b.is_ascii_digit())
        && max.bytes().all(|b| b.is_ascii_digit())
}

/// True if `prefix` ends in an escape that takes a braced argument, such as
/// `\x` in `\x{41}` or `\p` in `\p{L}`.
fn is_brace_escape(prefix: &str) -> bool {
    prefix
        .strip_suffix(['x', 'u', 'U', 'p', 'P'])
        .is_some_and(is_escaped)
}

/// True if the character following `prefix` would be escaped, i.e. `prefix`
/// ends in an odd number of backslashes.
fn is_escaped(prefix: &str) -> bool {
    prefix.bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 1
}

/// True if the opening delimiter at the start of `text` is closed by its last
/// character, so that the whole text is one group or one class.
fn closes_at_end(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut class_depth = 0usize;
    let mut group_depth = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                i += 2;
                continue;
            }
            b'[' => {
                class_depth += 1;
                // A `]` right after `[` or `[^` is a literal member.
                if bytes.get(i + 1) == Some(&b'^') {
                    i += 1;
                }
                if bytes.get(i + 1) == Some(&b']') {
                    i += 1;
                }
            }
            b']' if class_depth > 0 => {
                class_depth -= 1;
                if class_depth == 0 && group_depth == 0 {
                    return i == bytes.len() - 1;
                }
            }
            b'(' if class_depth == 0 => group_depth += 1,
            b')' if class_depth == 0 => {
                let Some(depth) = group_depth.checked_sub(1) else {
                    return false;
                };
                group_depth = depth;
                if group_depth == 0 {
                    return i == bytes.len() - 1;
                }
            }
            _ => {}
        }
        i += 1;
    }
    false
}
