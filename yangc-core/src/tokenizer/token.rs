//! Core token types and the tokenizer driver.

use std::fmt;

use nom::branch::alt;
use thiserror::Error;

use super::literal::{parse_atom, parse_string_literal};
use super::symbol::{parse_delimiter, Delimiter};
use super::whitespace::{parse_newline, parse_whitespace};

/// Shared result type of the nom-level token parsers.
pub type ParserResult<'a, T> = nom::IResult<&'a str, T, nom::error::VerboseError<&'a str>>;

/// A single lexical element of YANG source text.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Unquoted run of bytes: keyword, identifier or unquoted argument.
    Atom(String),
    /// Quoted string with escapes resolved and concatenation joined.
    Str(String),
    /// `{`, `}` or `;`.
    Delimiter(Delimiter),
    Whitespace,
    Newline,
}

impl Token {
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace)
    }

    pub fn is_newline(&self) -> bool {
        matches!(self, Token::Newline)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Atom(s) => f.write_str(s),
            Token::Str(s) => write!(f, "{s:?}"),
            Token::Delimiter(d) => d.fmt(f),
            Token::Whitespace => f.write_str("<whitespace>"),
            Token::Newline => f.write_str("<newline>"),
        }
    }
}

/// A token together with the line/column where it started (1-based).
#[derive(Debug, Clone, PartialEq)]
pub struct TokenSpan {
    pub token: Token,
    pub line: usize,
    pub column: usize,
}

/// Lexical errors. An unterminated string and a bad escape are told apart so
/// diagnostics can point at the offending byte.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TokenizeError {
    #[error("unterminated string literal at line {line}, column {column}")]
    UnterminatedString { line: usize, column: usize },
    #[error("invalid escape '\\{escape}' in string at line {line}, column {column}")]
    InvalidEscape {
        escape: char,
        line: usize,
        column: usize,
    },
    #[error("unexpected character {character:?} at line {line}, column {column}")]
    UnexpectedCharacter {
        character: char,
        line: usize,
        column: usize,
    },
}

fn parse_token(input: &str) -> ParserResult<Token> {
    alt((
        parse_newline,
        parse_whitespace,
        parse_delimiter,
        parse_string_literal,
        parse_atom,
    ))(input)
}

/// Classifies a lexical failure by re-scanning the failed region.
fn classify_failure(rest: &str, line: usize, column: usize) -> TokenizeError {
    let mut chars = rest.chars();
    match chars.next() {
        Some('"') => {
            let mut escaped = false;
            for c in chars {
                if escaped {
                    if !matches!(c, 'n' | 't' | '"' | '\\') {
                        return TokenizeError::InvalidEscape {
                            escape: c,
                            line,
                            column,
                        };
                    }
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == '"' {
                    break;
                }
            }
            TokenizeError::UnterminatedString { line, column }
        }
        Some('\'') => TokenizeError::UnterminatedString { line, column },
        Some(character) => TokenizeError::UnexpectedCharacter {
            character,
            line,
            column,
        },
        None => TokenizeError::UnterminatedString { line, column },
    }
}

/// The tokenizer. Stateless across invocations; construct once and feed it
/// any number of inputs.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {}

impl Tokenizer {
    pub fn new() -> Self {
        Self {}
    }

    /// Tokenizes comment-free YANG source into positioned tokens.
    #[tracing::instrument(level = "debug", skip(self, input))]
    pub fn tokenize(&mut self, input: &str) -> Result<Vec<TokenSpan>, TokenizeError> {
        let mut spans = Vec::new();
        let mut rest = input;
        let mut line = 1usize;
        let mut column = 1usize;

        while !rest.is_empty() {
            match parse_token(rest) {
                Ok((next, token)) => {
                    spans.push(TokenSpan {
                        token,
                        line,
                        column,
                    });
                    let consumed = &rest[..rest.len() - next.len()];
                    for c in consumed.chars() {
                        if c == '\n' {
                            line += 1;
                            column = 1;
                        } else {
                            column += 1;
                        }
                    }
                    rest = next;
                }
                Err(_) => return Err(classify_failure(rest, line, column)),
            }
        }
        Ok(spans)
    }
}
