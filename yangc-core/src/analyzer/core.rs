//! Core parser interface and error types of the combinator system.

use thiserror::Error;

/// Parser trait defining the core parsing interface.
///
/// A parser takes an input slice and a position and returns either a success
/// with the new position and output value, or a [`ParseError`].
///
/// # Type Parameters
///
/// * `I` - The input token type
/// * `O` - The output value type
pub trait Parser<I, O> {
    /// Attempts to parse the input starting at the given position.
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O>;
}

/// Result type for parsing operations: new position plus parsed value.
pub type ParseResult<O> = Result<(usize, O), ParseError>;

/// Error type for parsing operations. Positions are token indices; the
/// pipeline entry points translate them back to line/column.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Unexpected end of input.
    #[error("unexpected end of input at position {position}, context: {context:?}")]
    UnexpectedEof {
        position: usize,
        context: Option<String>,
    },
    /// A specific token was expected and something else was found.
    #[error("expected {expected}, found {found} at position {position}, context: {context:?}")]
    Unexpected {
        expected: String,
        found: String,
        position: usize,
        context: Option<String>,
    },
    /// No alternative of a choice matched.
    #[error("no alternative matched at position {position}, context: {context:?}")]
    NoAlternative {
        position: usize,
        context: Option<String>,
    },
    /// A statement appeared in a body whose alternation does not admit it.
    #[error("statement {keyword:?} not permitted here at position {position}, context: {context:?}")]
    UnexpectedStatement {
        keyword: String,
        position: usize,
        context: Option<String>,
    },
    /// Explicit failure, e.g. a typed argument parser rejecting its input.
    #[error("{message} at position {position}, context: {context:?}")]
    Failure {
        message: String,
        position: usize,
        context: Option<String>,
    },
}

impl ParseError {
    /// Appends a human-readable context frame.
    pub fn with_context(self, ctx: &str) -> Self {
        fn extend(context: Option<String>, ctx: &str) -> Option<String> {
            Some(match context {
                Some(existing) => format!("{existing} -> {ctx}"),
                None => ctx.to_string(),
            })
        }
        match self {
            ParseError::UnexpectedEof { position, context } => ParseError::UnexpectedEof {
                position,
                context: extend(context, ctx),
            },
            ParseError::Unexpected {
                expected,
                found,
                position,
                context,
            } => ParseError::Unexpected {
                expected,
                found,
                position,
                context: extend(context, ctx),
            },
            ParseError::NoAlternative { position, context } => ParseError::NoAlternative {
                position,
                context: extend(context, ctx),
            },
            ParseError::UnexpectedStatement {
                keyword,
                position,
                context,
            } => ParseError::UnexpectedStatement {
                keyword,
                position,
                context: extend(context, ctx),
            },
            ParseError::Failure {
                message,
                position,
                context,
            } => ParseError::Failure {
                message,
                position,
                context: extend(context, ctx),
            },
        }
    }

    /// The token index where the error occurred.
    pub fn position(&self) -> usize {
        match self {
            ParseError::UnexpectedEof { position, .. }
            | ParseError::Unexpected { position, .. }
            | ParseError::NoAlternative { position, .. }
            | ParseError::UnexpectedStatement { position, .. }
            | ParseError::Failure { position, .. } => *position,
        }
    }
}
