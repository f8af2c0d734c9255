//! Ready-made values for common pattern pieces.

use std::sync::LazyLock;

use crate::Regex;

macro_rules! consts {
    ($($(#[$meta:meta])* $name:ident = $text:expr;)*) => {
        $(
            $(#[$meta])*
            pub static $name: LazyLock<Regex> = LazyLock::new(|| Regex::literal($text));
        )*
    };
}

consts! {
    /// Any whitespace character.
    WHITESPACE = r"\s";
    /// Any non-whitespace character.
    NON_WHITESPACE = r"\S";
    /// `a` to `z`.
    LOWERCASE = "[a-z]";
    /// `A` to `Z`.
    UPPERCASE = "[A-Z]";
    /// Any ASCII letter.
    LETTER = "[a-zA-Z]";
    /// Any decimal digit.
    DIGIT = r"\d";
    /// Any character that is not a decimal digit.
    NON_DIGIT = r"\D";
    /// Any word character.
    WORD = r"\w";
    /// Any non-word character.
    NON_WORD = r"\W";
    /// Any character except a line break.
    ANY = ".";
    /// Zero or more of any character.
    ANYTHING = ".*";
    /// Zero or more whitespace characters.
    ANY_WHITESPACE = r"\s*";
    /// A line break: `\n`, `\r` or `\r\n`.
    NEWLINE = r"(?:\n|\r\n?)";
    /// Zero or more line breaks.
    ANY_NEWLINES = r"(?:\n|\r\n?)*";
    START_OF_LINE = "^";
    END_OF_LINE = "$";
    START_OF_TEXT = r"\A";
    END_OF_TEXT = r"\z";
    WORD_BOUNDARY = r"\b";
    PERIOD = r"\.";
    PLUS = r"\+";
    ASTERISK = r"\*";
    QUESTION_MARK = r"\?";
    DOLLAR = r"\$";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Shape;

    #[test]
    fn shapes() {
        assert_eq!(DIGIT.shape(), Shape::SingleChar);
        assert_eq!(LETTER.shape(), Shape::CharClass);
        assert_eq!(NEWLINE.shape(), Shape::NonCaptureGroup);
        assert_eq!(ANYTHING.shape(), Shape::Other);
    }

    #[test]
    fn atoms_repeat_without_grouping() {
        assert_eq!(DIGIT.zero_or_more().unwrap(), r"\d*");
        assert_eq!(LETTER.one_or_more().unwrap(), "[a-zA-Z]+");
        assert_eq!(NEWLINE.optional().unwrap(), r"(?:\n|\r\n?)?");
        assert!(ANYTHING.optional().is_err());
    }
}
