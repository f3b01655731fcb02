//! Source and token preprocessing.
//!
//! Two preprocessors bridge the raw input and the parser:
//!
//! * [`CommentStripper`] removes `//`-to-end-of-line and `/* … */` comments
//!   from raw source while leaving comment-like bytes inside quoted strings
//!   untouched. The contract is parse equivalence: parsing the stripped
//!   text behaves exactly like parsing the original under RFC 7950 comment
//!   semantics.
//! * [`TokenPreprocessor`] drops whitespace and newline tokens from the
//!   tokenizer's output before the statement parser runs.
//!
//! Line comments consume bytes only up to the terminating newline; the
//! newline itself is kept so adjacent lines never join. An unterminated
//! block comment at end of input is logged as a warning and the stripped
//! prefix is returned.

use thiserror::Error;

use crate::tokenizer::token::TokenSpan;

/// A trait for preprocessing different types of input.
pub trait Preprocessor<T, U = T> {
    /// Process the input of type T and return the processed result.
    fn process(&self, input: T) -> U;
}

/// Token-stream preprocessor: removes whitespace and newline tokens.
#[derive(Debug, Clone, Default)]
pub struct TokenPreprocessor {}

impl TokenPreprocessor {
    pub fn new() -> Self {
        Self {}
    }
}

impl Preprocessor<Vec<TokenSpan>> for TokenPreprocessor {
    fn process(&self, input: Vec<TokenSpan>) -> Vec<TokenSpan> {
        input
            .into_iter()
            .filter(|span| !span.token.is_whitespace() && !span.token.is_newline())
            .collect()
    }
}

/// Error raised by the comment stripper.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StripError {
    /// The stripper requires non-empty input; feeding it nothing is caller
    /// misuse, not a recoverable parse condition.
    #[error("empty input")]
    EmptyInput,
}

#[derive(Clone, Copy, PartialEq)]
enum State {
    Normal,
    SingleQuotedString,
    DoubleQuotedString,
    Escaped,
    SingleLineComment,
    BlockComment,
}

/// Byte state machine that deletes comments from YANG source.
#[derive(Debug, Clone, Default)]
pub struct CommentStripper {}

impl CommentStripper {
    pub fn new() -> Self {
        Self {}
    }

    /// Strips comments, preserving quoted-string content byte for byte.
    pub fn strip(&self, input: &str) -> Result<String, StripError> {
        if input.is_empty() {
            return Err(StripError::EmptyInput);
        }

        let mut output = String::with_capacity(input.len());
        let mut state = State::Normal;
        let mut chars = input.chars().peekable();

        while let Some(c) = chars.next() {
            match state {
                State::Normal => match c {
                    '"' => {
                        state = State::DoubleQuotedString;
                        output.push(c);
                    }
                    '\'' => {
                        state = State::SingleQuotedString;
                        output.push(c);
                    }
                    '/' => match chars.peek() {
                        Some('/') => {
                            chars.next();
                            state = State::SingleLineComment;
                        }
                        Some('*') => {
                            chars.next();
                            state = State::BlockComment;
                        }
                        _ => output.push(c),
                    },
                    _ => output.push(c),
                },
                State::SingleQuotedString => {
                    output.push(c);
                    if c == '\'' {
                        state = State::Normal;
                    }
                }
                State::DoubleQuotedString => {
                    output.push(c);
                    match c {
                        '"' => state = State::Normal,
                        '\\' => state = State::Escaped,
                        _ => {}
                    }
                }
                State::Escaped => {
                    output.push(c);
                    state = State::DoubleQuotedString;
                }
                State::SingleLineComment => {
                    if c == '\n' {
                        output.push(c);
                        state = State::Normal;
                    }
                }
                State::BlockComment => {
                    if c == '*' && chars.peek() == Some(&'/') {
                        chars.next();
                        state = State::Normal;
                    }
                }
            }
        }

        if state == State::BlockComment {
            tracing::warn!("block comment not terminated before end of input");
        }

        Ok(output)
    }
}

impl Preprocessor<&str, Result<String, StripError>> for CommentStripper {
    fn process(&self, input: &str) -> Result<String, StripError> {
        self.strip(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(input: &str) -> String {
        CommentStripper::new().strip(input).unwrap()
    }

    #[test]
    fn test_line_comment() {
        assert_eq!(strip("leaf a; // trailing\nleaf b;"), "leaf a; \nleaf b;");
    }

    #[test]
    fn test_line_comment_keeps_newline() {
        // Without the newline the two atoms would join into one.
        assert_eq!(strip("a// x\nb"), "a\nb");
    }

    #[test]
    fn test_block_comment() {
        assert_eq!(strip("a /* comment */ b"), "a  b");
        assert_eq!(strip("a /* multi\nline */ b"), "a  b");
    }

    #[test]
    fn test_comment_bytes_inside_strings_survive() {
        assert_eq!(strip(r#"x "a // b" y"#), r#"x "a // b" y"#);
        assert_eq!(strip(r#"x "a /* b */" y"#), r#"x "a /* b */" y"#);
        assert_eq!(strip("x 'a // b' y"), "x 'a // b' y");
    }

    #[test]
    fn test_escaped_quote_does_not_end_string() {
        assert_eq!(strip(r#""a\" // not a comment" z"#), r#""a\" // not a comment" z"#);
    }

    #[test]
    fn test_lone_slash_preserved() {
        assert_eq!(strip("path /a/b;"), "path /a/b;");
    }

    #[test]
    fn test_unterminated_block_comment_recovers() {
        assert_eq!(strip("a /* never closed"), "a ");
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(
            CommentStripper::new().strip(""),
            Err(StripError::EmptyInput)
        );
    }

    #[test]
    fn test_token_preprocessor_filters() {
        use crate::tokenizer::token::Tokenizer;

        let spans = Tokenizer::new().tokenize("leaf a {\n}\n").unwrap();
        let filtered = TokenPreprocessor::new().process(spans);
        assert_eq!(filtered.len(), 4);
        assert!(filtered
            .iter()
            .all(|s| !s.token.is_whitespace() && !s.token.is_newline()));
    }
}
