use std::sync::Arc;

/// Errors raised by the builder. Every variant is a caller error reported at
/// the offending call; the operand is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("`{0}` is already repeating")]
    AlreadyRepeating(String),
    #[error("`{0}` is already a named capture group")]
    AlreadyCaptured(String),
    #[error("`{0}` is not a single character")]
    NotACharacter(String),
    #[error("capture group name `{0}` is used more than once")]
    NameCollision(String),
    #[error("alternation operands may not contain named capture groups; found {0:?}")]
    NonEmptyCaptureGroups(Vec<String>),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("unsupported operand type; expected a string or a regex")]
    UnsupportedOperandType,
}

impl Error {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Errors raised by the compiler adapter.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CompileError {
    #[error(transparent)]
    Standard(#[from] regex::Error),
    #[error(transparent)]
    Backtracking(Arc<fancy_regex::Error>),
    /// The backtracking engine gave up while matching, e.g. because the
    /// backtrack limit was exceeded.
    #[error("match failed: {0}")]
    Match(Arc<fancy_regex::Error>),
}

impl From<fancy_regex::Error> for CompileError {
    #[inline]
    fn from(err: fancy_regex::Error) -> Self {
        Self::Backtracking(Arc::new(err))
    }
}

impl CompileError {
    #[inline]
    pub(crate) fn matching(err: fancy_regex::Error) -> Self {
        Self::Match(Arc::new(err))
    }
}
