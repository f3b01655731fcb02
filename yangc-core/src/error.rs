//! Crate-level error type aggregating the pipeline stages.

use thiserror::Error;

use crate::analyzer::core::ParseError;
use crate::analyzer::parsers::module::AggregateError;
use crate::preprocessor::StripError;
use crate::tokenizer::token::TokenizeError;

/// Any failure of the source-to-AST pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Strip(#[from] StripError),
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
    /// A parse failure, with the token position translated back to the
    /// source line and column.
    #[error("parse error at line {line}, column {column}: {source}")]
    Parse {
        line: usize,
        column: usize,
        #[source]
        source: ParseError,
    },
    #[error(transparent)]
    Aggregate(#[from] AggregateError),
}

pub type Result<T> = std::result::Result<T, Error>;
