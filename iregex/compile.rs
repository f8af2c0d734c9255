//! Hand-off from built patterns to a regex engine.
//!
//! The builder itself never matches text. [`Regex::compile`] passes the
//! rendered string to the [`regex`] crate when it can, and falls back to the
//! backtracking [`fancy_regex`] engine for syntax the former rejects, such as
//! lookaround.

use std::ops::Range;

use ahash::HashMap;
use parking_lot::Mutex;

use crate::{CompileError, Regex};

bitflags::bitflags! {
    /// Engine flags, passed through to the engine unchanged.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    pub struct Flags: u8 {
        /// `i`
        const CASE_INSENSITIVE = 1 << 0;
        /// `m`: `^` and `$` match at line boundaries.
        const MULTI_LINE = 1 << 1;
        /// `s`: `.` also matches `\n`.
        const DOT_MATCHES_NEW_LINE = 1 << 2;
        /// `x`: whitespace and `#` comments in the pattern are ignored.
        const IGNORE_WHITESPACE = 1 << 3;
    }
}

impl Flags {
    /// The inline form, e.g. `(?im)`. Empty when no flag is set.
    #[must_use]
    pub fn to_inline(self) -> String {
        const LETTERS: [(Flags, char); 4] = [
            (Flags::CASE_INSENSITIVE, 'i'),
            (Flags::MULTI_LINE, 'm'),
            (Flags::DOT_MATCHES_NEW_LINE, 's'),
            (Flags::IGNORE_WHITESPACE, 'x'),
        ];
        if self.is_empty() {
            return String::new();
        }
        let mut inline = String::from("(?");
        inline.extend(
            LETTERS
                .iter()
                .filter(|(flag, _)| self.contains(*flag))
                .map(|(_, letter)| letter),
        );
        inline.push(')');
        inline
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Engine {
    /// Try [`Engine::Standard`], fall back to [`Engine::Backtracking`] if the
    /// pattern uses syntax it does not support.
    #[default]
    Auto,
    /// The [`regex`] crate. Linear time, no lookaround.
    Standard,
    /// The [`fancy_regex`] crate. Supports lookaround; may backtrack.
    Backtracking,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CompileOptions {
    pub engine: Engine,
    pub flags: Flags,
    /// Only match the whole haystack.
    pub anchored: bool,
    /// Approximate compiled size limit, in bytes.
    pub size_limit: Option<usize>,
    /// Backtracking steps allowed per search. Only used by
    /// [`Engine::Backtracking`].
    pub backtrack_limit: Option<usize>,
}

/// A compiled pattern.
#[derive(Debug, Clone)]
pub struct CompiledRegex {
    inner: Inner,
}

#[derive(Debug, Clone)]
enum Inner {
    Standard(regex::Regex),
    Backtracking(fancy_regex::Regex),
}

impl Regex {
    /// Compile with default options.
    pub fn compile(&self) -> Result<CompiledRegex, CompileError> {
        self.compile_with(&CompileOptions::default())
    }

    pub fn compile_with(&self, options: &CompileOptions) -> Result<CompiledRegex, CompileError> {
        compile_str(&self.render(), options)
    }
}

fn compile_str(pattern: &str, options: &CompileOptions) -> Result<CompiledRegex, CompileError> {
    let pattern = if options.anchored && options.flags.contains(Flags::IGNORE_WHITESPACE) {
        // A trailing `#` comment must not swallow the closing delimiter.
        format!("\\A(?:{pattern}\n)\\z")
    } else if options.anchored {
        format!(r"\A(?:{pattern})\z")
    } else {
        pattern.to_owned()
    };
    tracing::trace!("compiling `{pattern}` with {options:?}");

    match options.engine {
        Engine::Standard => Ok(standard(&pattern, options)?),
        Engine::Backtracking => backtracking(&pattern, options),
        Engine::Auto => match standard(&pattern, options) {
            Ok(compiled) => Ok(compiled),
            Err(regex::Error::Syntax(reason)) => {
                tracing::debug!("falling back to backtracking engine for `{pattern}`: {reason}");
                backtracking(&pattern, options)
            }
            Err(err) => Err(err.into()),
        },
    }
}

fn standard(pattern: &str, options: &CompileOptions) -> Result<CompiledRegex, regex::Error> {
    let flags = options.flags;
    let mut builder = regex::RegexBuilder::new(pattern);
    builder
        .case_insensitive(flags.contains(Flags::CASE_INSENSITIVE))
        .multi_line(flags.contains(Flags::MULTI_LINE))
        .dot_matches_new_line(flags.contains(Flags::DOT_MATCHES_NEW_LINE))
        .ignore_whitespace(flags.contains(Flags::IGNORE_WHITESPACE));
    if let Some(limit) = options.size_limit {
        builder.size_limit(limit);
    }
    Ok(CompiledRegex {
        inner: Inner::Standard(builder.build()?),
    })
}

fn backtracking(pattern: &str, options: &CompileOptions) -> Result<CompiledRegex, CompileError> {
    let pattern = options.flags.to_inline() + pattern;
    let mut builder = fancy_regex::RegexBuilder::new(&pattern);
    if let Some(limit) = options.backtrack_limit {
        builder.backtrack_limit(limit);
    }
    if let Some(limit) = options.size_limit {
        builder.delegate_size_limit(limit);
    }
    Ok(CompiledRegex {
        inner: Inner::Backtracking(builder.build()?),
    })
}

impl CompiledRegex {
    /// The engine that compiled this pattern. Never [`Engine::Auto`].
    #[must_use]
    pub fn engine(&self) -> Engine {
        match self.inner {
            Inner::Standard(_) => Engine::Standard,
            Inner::Backtracking(_) => Engine::Backtracking,
        }
    }

    /// The pattern as the engine received it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match &self.inner {
            Inner::Standard(re) => re.as_str(),
            Inner::Backtracking(re) => re.as_str(),
        }
    }

    pub fn is_match(&self, haystack: &str) -> Result<bool, CompileError> {
        match &self.inner {
            Inner::Standard(re) => Ok(re.is_match(haystack)),
            Inner::Backtracking(re) => re.is_match(haystack).map_err(CompileError::matching),
        }
    }

    /// Byte range of the leftmost match.
    pub fn find(&self, haystack: &str) -> Result<Option<Range<usize>>, CompileError> {
        match &self.inner {
            Inner::Standard(re) => Ok(re.find(haystack).map(|m| m.range())),
            Inner::Backtracking(re) => Ok(re
                .find(haystack)
                .map_err(CompileError::matching)?
                .map(|m| m.start()..m.end())),
        }
    }

    /// Text captured by the group `name` in the leftmost match.
    pub fn captures_name<'h>(
        &self,
        haystack: &'h str,
        name: &str,
    ) -> Result<Option<&'h str>, CompileError> {
        match &self.inner {
            Inner::Standard(re) => Ok(re
                .captures(haystack)
                .and_then(|caps| caps.name(name))
                .map(|m| m.as_str())),
            Inner::Backtracking(re) => Ok(re
                .captures(haystack)
                .map_err(CompileError::matching)?
                .and_then(|caps| caps.name(name))
                .map(|m| m.as_str())),
        }
    }

    /// Names of the named groups, in pattern order.
    #[must_use]
    pub fn capture_names(&self) -> Vec<&str> {
        match &self.inner {
            Inner::Standard(re) => re.capture_names().flatten().collect(),
            Inner::Backtracking(re) => re.capture_names().flatten().collect(),
        }
    }
}

/// Compiled patterns, keyed by pattern text and options.
///
/// Entries are never evicted. Callers that compile unbounded sets of
/// patterns own eviction through [`CompileCache::clear`].
#[derive(Default)]
pub struct CompileCache {
    entries: Mutex<HashMap<(String, CompileOptions), CompiledRegex>>,
}

impl CompileCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compile(
        &self,
        regex: &Regex,
        options: &CompileOptions,
    ) -> Result<CompiledRegex, CompileError> {
        let key = (regex.render(), options.clone());
        if let Some(compiled) = self.entries.lock().get(&key) {
            tracing::trace!("compile cache hit: `{}`", key.0);
            return Ok(compiled.clone());
        }

        // Compile without holding the lock.
        let compiled = compile_str(&key.0, options)?;
        Ok(self.entries.lock().entry(key).or_insert(compiled).clone())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}
