//! String literal and atom tokens.
//!
//! Double-quoted strings process the escapes `\n`, `\t`, `\"` and `\\`;
//! any other byte after a backslash is a lexical error. Single-quoted
//! strings carry their bytes verbatim. Two string literals joined by `+`
//! (whitespace and newlines permitted around it) form a single logical
//! string; chains are left-associative and the joined value carries no
//! trace of the `+` or the surrounding whitespace.

use nom::{
    branch::alt,
    bytes::complete::{is_not, take_while1},
    character::complete::{char, multispace0},
    combinator::{cut, map, opt, value},
    error::{context, ErrorKind, ParseError},
    multi::many0,
    sequence::{pair, preceded, terminated, tuple},
};

use super::token::{ParserResult, Token};

fn escaped_content(input: &str) -> ParserResult<String> {
    map(
        opt(nom::bytes::complete::escaped_transform(
            is_not("\\\""),
            '\\',
            alt((
                value("\n", char('n')),
                value("\t", char('t')),
                value("\"", char('"')),
                value("\\", char('\\')),
            )),
        )),
        Option::unwrap_or_default,
    )(input)
}

/// Parses a double-quoted string, resolving escapes.
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_double_quoted(input: &str) -> ParserResult<String> {
    context(
        "double-quoted string",
        preceded(char('"'), cut(terminated(escaped_content, char('"')))),
    )(input)
}

/// Parses a single-quoted string; no escape processing (RFC 7950 §6.1.3).
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_single_quoted(input: &str) -> ParserResult<String> {
    context(
        "single-quoted string",
        preceded(
            char('\''),
            cut(terminated(
                map(opt(is_not("'")), |content: Option<&str>| {
                    content.unwrap_or_default().to_string()
                }),
                char('\''),
            )),
        ),
    )(input)
}

fn parse_quoted(input: &str) -> ParserResult<String> {
    alt((parse_double_quoted, parse_single_quoted))(input)
}

/// Parses a string literal, joining any `+`-concatenated chain into one
/// [`Token::Str`].
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_string_literal(input: &str) -> ParserResult<Token> {
    context(
        "string literal",
        map(
            pair(
                parse_quoted,
                many0(preceded(
                    tuple((multispace0, char('+'), multispace0)),
                    parse_quoted,
                )),
            ),
            |(first, rest)| {
                let mut joined = first;
                for fragment in rest {
                    joined.push_str(&fragment);
                }
                Token::Str(joined)
            },
        ),
    )(input)
}

/// Parses an unquoted atom: a maximal run of non-whitespace bytes that are
/// none of `{`, `}`, `;`, `"`, `'`.
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_atom(input: &str) -> ParserResult<Token> {
    context(
        "atom",
        map(
            take_while1(|c: char| {
                !c.is_whitespace() && !matches!(c, '{' | '}' | ';' | '"' | '\'')
            }),
            |s: &str| Token::Atom(s.to_string()),
        ),
    )(input)
}

/// Literal-block lexer: consumes a `{ … }` block, tracking brace nesting
/// while ignoring braces inside quoted strings (and honoring backslash
/// escapes in double-quoted ones), and yields the exact text between the
/// outer braces.
#[tracing::instrument(level = "debug", skip(input))]
pub fn capture_block(input: &str) -> ParserResult<&str> {
    #[derive(Clone, Copy)]
    enum State {
        Normal,
        SingleQuoted,
        DoubleQuoted,
        Escaped,
    }

    let mut chars = input.char_indices();
    if !matches!(chars.next(), Some((_, '{'))) {
        return Err(nom::Err::Error(ParseError::from_error_kind(
            input,
            ErrorKind::Char,
        )));
    }

    let mut depth = 1usize;
    let mut state = State::Normal;
    for (idx, ch) in chars {
        match state {
            State::Normal => match ch {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok((&input[idx + ch.len_utf8()..], &input[1..idx]));
                    }
                }
                '\'' => state = State::SingleQuoted,
                '"' => state = State::DoubleQuoted,
                _ => {}
            },
            State::SingleQuoted => {
                if ch == '\'' {
                    state = State::Normal;
                }
            }
            State::DoubleQuoted => match ch {
                '"' => state = State::Normal,
                '\\' => state = State::Escaped,
                _ => {}
            },
            State::Escaped => state = State::DoubleQuoted,
        }
    }
    Err(nom::Err::Failure(ParseError::from_error_kind(
        input,
        ErrorKind::TakeUntil,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_quoted_escapes() {
        let (rest, s) = parse_double_quoted(r#""a\nb\t\"c\\" tail"#).unwrap();
        assert_eq!(s, "a\nb\t\"c\\");
        assert_eq!(rest, " tail");
    }

    #[test]
    fn test_single_quoted_no_escapes() {
        let (rest, s) = parse_single_quoted(r#"'a\nb' tail"#).unwrap();
        assert_eq!(s, r"a\nb");
        assert_eq!(rest, " tail");
    }

    #[test]
    fn test_empty_strings() {
        assert_eq!(parse_double_quoted(r#""""#).unwrap().1, "");
        assert_eq!(parse_single_quoted("''").unwrap().1, "");
    }

    #[test]
    fn test_concatenation() {
        let (rest, token) = parse_string_literal("\"ab\" + \"cd\";").unwrap();
        assert_eq!(token, Token::Str("abcd".to_string()));
        assert_eq!(rest, ";");

        let (_, token) = parse_string_literal("\"ab\"\n   + 'cd'\n   + \"ef\"").unwrap();
        assert_eq!(token, Token::Str("abcdef".to_string()));
    }

    #[test]
    fn test_concatenation_stops_without_string() {
        let (rest, token) = parse_string_literal("\"ab\" + x").unwrap();
        assert_eq!(token, Token::Str("ab".to_string()));
        assert_eq!(rest, " + x");
    }

    #[test]
    fn test_unterminated_is_failure() {
        assert!(matches!(
            parse_double_quoted("\"never closed"),
            Err(nom::Err::Failure(_))
        ));
    }

    #[test]
    fn test_atom() {
        let (rest, token) = parse_atom("leaf-list rest").unwrap();
        assert_eq!(token, Token::Atom("leaf-list".to_string()));
        assert_eq!(rest, " rest");

        let (rest, token) = parse_atom("urn:example:system;").unwrap();
        assert_eq!(token, Token::Atom("urn:example:system".to_string()));
        assert_eq!(rest, ";");

        assert!(parse_atom("{").is_err());
    }

    #[test]
    fn test_capture_block() {
        let (rest, inner) = capture_block("{ a { b } c } tail").unwrap();
        assert_eq!(inner, " a { b } c ");
        assert_eq!(rest, " tail");
    }

    #[test]
    fn test_capture_block_ignores_braces_in_strings() {
        let (_, inner) = capture_block(r#"{ pattern "}{" ; x '}' }"#).unwrap();
        assert_eq!(inner, r#" pattern "}{" ; x '}' "#);

        let (_, inner) = capture_block(r#"{ "a\"}" }"#).unwrap();
        assert_eq!(inner, r#" "a\"}" "#);
    }

    #[test]
    fn test_capture_block_unbalanced() {
        assert!(matches!(
            capture_block("{ never closed"),
            Err(nom::Err::Failure(_))
        ));
    }
}
