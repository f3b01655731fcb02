//! Structural delimiter tokens.

use nom::{branch::alt, character::complete::char, combinator::value, error::context};

use super::token::{ParserResult, Token};

/// The three structural delimiters of the statement grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    OpenBrace,
    CloseBrace,
    Semicolon,
}

impl Delimiter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Delimiter::OpenBrace => "{",
            Delimiter::CloseBrace => "}",
            Delimiter::Semicolon => ";",
        }
    }
}

impl std::fmt::Display for Delimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a single delimiter token.
pub fn parse_delimiter(input: &str) -> ParserResult<Token> {
    context(
        "delimiter",
        alt((
            value(Token::Delimiter(Delimiter::OpenBrace), char('{')),
            value(Token::Delimiter(Delimiter::CloseBrace), char('}')),
            value(Token::Delimiter(Delimiter::Semicolon), char(';')),
        )),
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiters() {
        let (rest, token) = parse_delimiter("{ rest").unwrap();
        assert_eq!(token, Token::Delimiter(Delimiter::OpenBrace));
        assert_eq!(rest, " rest");

        assert!(parse_delimiter("x").is_err());
    }
}
