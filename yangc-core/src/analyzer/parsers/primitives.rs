//! Token-level and argument-level primitives shared by the grammar.
//!
//! Statement keywords are matched against unquoted atoms only; arguments
//! accept quoted and unquoted tokens alike, so `yang-version "1.1";` and
//! `yang-version 1.1;` parse identically. Typed argument parsers surface
//! construction failures as [`ParseError::Failure`] carrying the stream
//! position.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::analyzer::core::{ParseError, ParseResult, Parser};
use crate::analyzer::prelude::*;
use crate::ast::types::{
    Date, DeviateKind, Identifier, IdentifierRef, MaxElementsValue, Modifier, OrderedBy, PathExpr,
    RangeExpr, Status, Uri, ValueError, Version,
};
use crate::ast::UnknownStmt;
use crate::tokenizer::keyword::Keyword;
use crate::tokenizer::symbol::Delimiter;
use crate::tokenizer::token::Token;

use super::unknown::parse_unknown;

pub fn open_brace() -> impl Parser<Token, ()> {
    as_unit(equal(Token::Delimiter(Delimiter::OpenBrace)))
}

pub fn close_brace() -> impl Parser<Token, ()> {
    as_unit(equal(Token::Delimiter(Delimiter::CloseBrace)))
}

pub fn semicolon() -> impl Parser<Token, ()> {
    as_unit(equal(Token::Delimiter(Delimiter::Semicolon)))
}

/// Matches one statement keyword. Case-sensitive, atom tokens only: a quoted
/// `"leaf"` is a string argument, never a keyword.
pub fn keyword(kw: Keyword) -> impl Parser<Token, ()> {
    let name: &'static str = kw.into();
    satisfy(
        move |token: &Token| match token {
            Token::Atom(s) if s == name => Some(()),
            _ => None,
        },
        name,
    )
}

/// Any string-valued argument token, quoted or unquoted.
pub fn string_arg() -> impl Parser<Token, String> {
    satisfy(
        |token: &Token| match token {
            Token::Atom(s) | Token::Str(s) => Some(s.clone()),
            _ => None,
        },
        "string argument",
    )
}

/// A typed argument parser: applies a conversion to the argument token's
/// text, reporting conversion failures with the stream position.
pub struct Arg<T, E, F> {
    f: F,
    _phantom: PhantomData<(T, E)>,
}

impl<T, E, F> Parser<Token, T> for Arg<T, E, F>
where
    F: Fn(&str) -> Result<T, E>,
    E: fmt::Display,
{
    fn parse(&self, input: &[Token], pos: usize) -> ParseResult<T> {
        match input.get(pos) {
            Some(Token::Atom(s)) | Some(Token::Str(s)) => {
                (self.f)(s).map(|value| (pos + 1, value)).map_err(|e| {
                    ParseError::Failure {
                        message: e.to_string(),
                        position: pos,
                        context: None,
                    }
                })
            }
            Some(token) => Err(ParseError::Unexpected {
                expected: "argument".to_string(),
                found: token.to_string(),
                position: pos,
                context: None,
            }),
            None => Err(ParseError::UnexpectedEof {
                position: pos,
                context: None,
            }),
        }
    }
}

pub fn arg<T, E, F>(f: F) -> Arg<T, E, F>
where
    F: Fn(&str) -> Result<T, E>,
    E: fmt::Display,
{
    Arg {
        f,
        _phantom: PhantomData,
    }
}

pub fn identifier_arg() -> impl Parser<Token, Identifier> {
    arg(|s: &str| Identifier::new(s))
}

pub fn identifier_ref_arg() -> impl Parser<Token, IdentifierRef> {
    arg(IdentifierRef::from_str)
}

pub fn date_arg() -> impl Parser<Token, Date> {
    arg(Date::from_str)
}

pub fn version_arg() -> impl Parser<Token, Version> {
    arg(Version::from_str)
}

pub fn uri_arg() -> impl Parser<Token, Uri> {
    arg(|s: &str| Uri::new(s))
}

pub fn bool_arg() -> impl Parser<Token, bool> {
    arg(|s: &str| {
        s.parse::<bool>().map_err(|_| ValueError::InvalidArgument {
            kind: "boolean",
            text: s.to_string(),
        })
    })
}

pub fn status_arg() -> impl Parser<Token, Status> {
    arg(|s: &str| {
        s.parse::<Status>().map_err(|_| ValueError::InvalidArgument {
            kind: "status",
            text: s.to_string(),
        })
    })
}

pub fn ordered_by_arg() -> impl Parser<Token, OrderedBy> {
    arg(|s: &str| {
        s.parse::<OrderedBy>()
            .map_err(|_| ValueError::InvalidArgument {
                kind: "ordered-by",
                text: s.to_string(),
            })
    })
}

pub fn modifier_arg() -> impl Parser<Token, Modifier> {
    arg(|s: &str| {
        s.parse::<Modifier>()
            .map_err(|_| ValueError::InvalidArgument {
                kind: "modifier",
                text: s.to_string(),
            })
    })
}

pub fn deviate_kind_arg() -> impl Parser<Token, DeviateKind> {
    arg(|s: &str| {
        s.parse::<DeviateKind>()
            .map_err(|_| ValueError::InvalidArgument {
                kind: "deviate",
                text: s.to_string(),
            })
    })
}

pub fn max_elements_arg() -> impl Parser<Token, MaxElementsValue> {
    arg(MaxElementsValue::from_str)
}

pub fn uint64_arg(kind: &'static str) -> impl Parser<Token, u64> {
    arg(move |s: &str| {
        s.parse::<u64>().map_err(|_| ValueError::InvalidArgument {
            kind,
            text: s.to_string(),
        })
    })
}

pub fn int64_arg(kind: &'static str) -> impl Parser<Token, i64> {
    arg(move |s: &str| {
        s.parse::<i64>().map_err(|_| ValueError::InvalidArgument {
            kind,
            text: s.to_string(),
        })
    })
}

pub fn uint8_arg(kind: &'static str) -> impl Parser<Token, u8> {
    arg(move |s: &str| {
        s.parse::<u8>().map_err(|_| ValueError::InvalidArgument {
            kind,
            text: s.to_string(),
        })
    })
}

pub fn range_arg() -> impl Parser<Token, RangeExpr> {
    arg(RangeExpr::from_str)
}

pub fn path_arg() -> impl Parser<Token, PathExpr> {
    arg(PathExpr::from_str)
}

/// `key` argument: identifiers separated by any of space, tab, newline,
/// carriage return.
pub fn key_arg() -> impl Parser<Token, Vec<Identifier>> {
    arg(|s: &str| {
        s.split_whitespace()
            .map(Identifier::new)
            .collect::<Result<Vec<_>, _>>()
    })
}

/// `unique` argument: whitespace-separated descendant paths.
pub fn unique_arg() -> impl Parser<Token, Vec<String>> {
    arg(|s: &str| {
        Ok::<_, ValueError>(s.split_whitespace().map(str::to_string).collect::<Vec<_>>())
    })
}

/// A `{ … }` block of child statements.
///
/// Runs the child parser until the closing brace, absorbing bare `;` empty
/// statements. A child the alternation does not admit surfaces as
/// [`ParseError::UnexpectedStatement`] with the offending keyword.
pub struct Block<P> {
    child: P,
}

pub fn block<P>(child: P) -> Block<P> {
    Block { child }
}

impl<P, O> Parser<Token, Vec<O>> for Block<P>
where
    P: Parser<Token, O>,
{
    fn parse(&self, input: &[Token], pos: usize) -> ParseResult<Vec<O>> {
        let (mut pos, _) = open_brace().parse(input, pos)?;
        let mut items = Vec::new();
        loop {
            match input.get(pos) {
                None => {
                    return Err(ParseError::UnexpectedEof {
                        position: pos,
                        context: None,
                    })
                }
                Some(Token::Delimiter(Delimiter::CloseBrace)) => return Ok((pos + 1, items)),
                Some(Token::Delimiter(Delimiter::Semicolon)) => pos += 1,
                Some(token) => match self.child.parse(input, pos) {
                    Ok((new_pos, item)) => {
                        items.push(item);
                        pos = new_pos;
                    }
                    Err(ParseError::NoAlternative { position, .. }) if position == pos => {
                        return Err(ParseError::UnexpectedStatement {
                            keyword: token.to_string(),
                            position: pos,
                            context: None,
                        })
                    }
                    Err(e) => return Err(e),
                },
            }
        }
    }
}

/// Statement tail: either `;` (no body) or a block of child statements.
pub fn stmt_body<P, O>(child: P) -> impl Parser<Token, Vec<O>>
where
    P: Parser<Token, O> + 'static,
    O: 'static,
{
    choice(vec![
        Box::new(map(semicolon(), |_| Vec::new())),
        Box::new(block(child)),
    ])
}

/// Statement tail for keywords whose only legal children are extensions.
pub fn extension_block() -> impl Parser<Token, Vec<UnknownStmt>> {
    stmt_body(parse_unknown())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::token::Tokenizer;

    pub(crate) fn tokens(input: &str) -> Vec<Token> {
        use crate::preprocessor::{Preprocessor, TokenPreprocessor};

        let spans = Tokenizer::new().tokenize(input).unwrap();
        TokenPreprocessor::new()
            .process(spans)
            .into_iter()
            .map(|span| span.token)
            .collect()
    }

    #[test]
    fn test_keyword_matches_atoms_only() {
        let input = tokens("leaf");
        assert!(keyword(Keyword::Leaf).parse(&input, 0).is_ok());

        let quoted = vec![Token::Str("leaf".into())];
        assert!(keyword(Keyword::Leaf).parse(&quoted, 0).is_err());
    }

    #[test]
    fn test_key_arg_spans_lines() {
        let input = vec![Token::Str(
            "source-port destination-port\n       source-address destination-address".into(),
        )];
        let (_, keys) = key_arg().parse(&input, 0).unwrap();
        let names: Vec<&str> = keys.iter().map(|k| k.as_str()).collect();
        assert_eq!(
            names,
            [
                "source-port",
                "destination-port",
                "source-address",
                "destination-address",
            ]
        );
    }

    #[test]
    fn test_typed_arg_failure_carries_position() {
        let input = tokens("maybe");
        match ordered_by_arg().parse(&input, 0) {
            Err(ParseError::Failure { position, message, .. }) => {
                assert_eq!(position, 0);
                assert!(message.contains("ordered-by"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_block_absorbs_empty_statements() {
        let input = tokens("{ ; a; ; }");
        let child = map(keyword(Keyword::Leaf), |_| ());
        // 'a' is not admitted by the child alternation
        let result = block(choice(vec![Box::new(child), Box::new(map(
            satisfy(
                |t: &Token| match t {
                    Token::Atom(s) if s == "a" => Some(()),
                    _ => None,
                },
                "a",
            ),
            |_| (),
        ))]))
        .parse(&input, 0);
        let (pos, items) = result.unwrap();
        assert_eq!(pos, input.len());
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_block_reports_unexpected_statement() {
        let input = tokens("{ bogus; }");
        let child = choice::<Token, ()>(vec![Box::new(map(keyword(Keyword::Leaf), |_| ()))]);
        match block(child).parse(&input, 0) {
            Err(ParseError::UnexpectedStatement { keyword, position, .. }) => {
                assert_eq!(keyword, "bogus");
                assert_eq!(position, 1);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
