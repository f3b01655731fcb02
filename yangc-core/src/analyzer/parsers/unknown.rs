//! Unknown (vendor-extension) statements and the generic fallback grammar.
//!
//! An unknown statement is any `prefix:keyword [argument] (";" | "{…}")`.
//! Its body, when present, is parsed with the generic "any valid YANG
//! statement" production, so arbitrarily nested extension content survives
//! verbatim.

use std::str::FromStr;

use crate::analyzer::core::Parser;
use crate::analyzer::prelude::*;
use crate::ast::types::PrefixedIdentifier;
use crate::ast::{GenericStmt, UnknownStmt};
use crate::tokenizer::token::Token;

use super::primitives::{block, semicolon, string_arg};

fn prefixed_keyword() -> impl Parser<Token, PrefixedIdentifier> {
    satisfy(
        |token: &Token| match token {
            Token::Atom(s) => PrefixedIdentifier::from_str(s).ok(),
            _ => None,
        },
        "prefixed keyword",
    )
}

fn any_keyword() -> impl Parser<Token, String> {
    satisfy(
        |token: &Token| match token {
            Token::Atom(s) => Some(s.clone()),
            _ => None,
        },
        "keyword",
    )
}

fn generic_tail() -> impl Parser<Token, Option<Vec<GenericStmt>>> {
    choice(vec![
        Box::new(map(semicolon(), |_| None)),
        Box::new(map(block(lazy(parse_generic)), Some)),
    ])
}

/// The generic statement shape: `keyword [argument] (";" | "{" body "}")`.
pub fn parse_generic() -> impl Parser<Token, GenericStmt> {
    with_context(
        map(
            tuple3(any_keyword(), optional(string_arg()), generic_tail()),
            |(keyword, arg, body)| GenericStmt { keyword, arg, body },
        ),
        "generic statement",
    )
}

/// An unknown statement: prefixed keyword, optional argument, optional body.
pub fn parse_unknown() -> impl Parser<Token, UnknownStmt> {
    with_context(
        map(
            tuple3(prefixed_keyword(), optional(string_arg()), generic_tail()),
            |(id, arg, body)| UnknownStmt { id, arg, body },
        ),
        "unknown statement",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::types::Identifier;

    fn tokens(input: &str) -> Vec<Token> {
        use crate::preprocessor::{Preprocessor, TokenPreprocessor};
        use crate::tokenizer::token::Tokenizer;

        let spans = Tokenizer::new().tokenize(input).unwrap();
        TokenPreprocessor::new()
            .process(spans)
            .into_iter()
            .map(|span| span.token)
            .collect()
    }

    fn prefixed(prefix: &str, name: &str) -> PrefixedIdentifier {
        PrefixedIdentifier::new(
            Identifier::new_unchecked(prefix),
            Identifier::new_unchecked(name),
        )
    }

    #[test]
    fn test_unknown_without_body() {
        let input = tokens("tailf:info \"some text\";");
        let (pos, stmt) = parse_unknown().parse(&input, 0).unwrap();
        assert_eq!(pos, input.len());
        assert_eq!(
            stmt,
            UnknownStmt {
                id: prefixed("tailf", "info"),
                arg: Some("some text".to_string()),
                body: None,
            }
        );
    }

    #[test]
    fn test_unknown_nested_body() {
        let input = tokens(
            r#"tailf:callpoint "ncs-rfs-service-hook" {
                 tailf:transaction-hook "subtree" {
                   tailf:invocation-mode "per-transaction";
                 }
               }"#,
        );
        let (pos, stmt) = parse_unknown().parse(&input, 0).unwrap();
        assert_eq!(pos, input.len());
        assert_eq!(stmt.id, prefixed("tailf", "callpoint"));
        assert_eq!(stmt.arg.as_deref(), Some("ncs-rfs-service-hook"));

        let body = stmt.body.unwrap();
        assert_eq!(body.len(), 1);
        assert_eq!(body[0].keyword, "tailf:transaction-hook");
        assert_eq!(body[0].arg.as_deref(), Some("subtree"));

        let inner = body[0].body.as_ref().unwrap();
        assert_eq!(
            inner[0],
            GenericStmt {
                keyword: "tailf:invocation-mode".to_string(),
                arg: Some("per-transaction".to_string()),
                body: None,
            }
        );
    }

    #[test]
    fn test_unprefixed_keyword_is_not_unknown() {
        let input = tokens("leaf x;");
        assert!(parse_unknown().parse(&input, 0).is_err());
    }

    #[test]
    fn test_generic_accepts_any_statement() {
        let input = tokens("container c { leaf l { type string; } }");
        let (pos, stmt) = parse_generic().parse(&input, 0).unwrap();
        assert_eq!(pos, input.len());
        assert_eq!(stmt.keyword, "container");
        assert_eq!(stmt.arg.as_deref(), Some("c"));
        assert_eq!(stmt.body.as_ref().unwrap().len(), 1);
    }
}
