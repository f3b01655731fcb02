//! Whitespace and newline tokens.
//!
//! Both are preserved in the raw token stream and removed by the
//! [`crate::preprocessor::TokenPreprocessor`] before parsing.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    combinator::value,
    error::context,
};

use super::token::{ParserResult, Token};

/// Parses a run of spaces and tabs.
pub fn parse_whitespace(input: &str) -> ParserResult<Token> {
    context(
        "whitespace",
        value(Token::Whitespace, take_while1(|c| c == ' ' || c == '\t')),
    )(input)
}

/// Parses a single line break (`\n`, `\r\n` or `\r`).
pub fn parse_newline(input: &str) -> ParserResult<Token> {
    context(
        "newline",
        value(Token::Newline, alt((tag("\r\n"), tag("\n"), tag("\r")))),
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace() {
        let (rest, token) = parse_whitespace("  \t x").unwrap();
        assert_eq!(token, Token::Whitespace);
        assert_eq!(rest, "x");
    }

    #[test]
    fn test_newline() {
        assert_eq!(parse_newline("\nx").unwrap(), ("x", Token::Newline));
        assert_eq!(parse_newline("\r\nx").unwrap(), ("x", Token::Newline));
        assert!(parse_newline(" x").is_err());
    }
}
