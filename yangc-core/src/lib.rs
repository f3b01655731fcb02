//! yangc-core: a YANG (RFC 7950) front-end.
//!
//! Ingests YANG source text and produces a structured, semantically linked
//! in-memory representation for downstream code generation, validation or
//! protocol tooling.
//!
//! ## Pipeline
//!
//! ```text
//! Source → CommentStripper → Tokenizer → TokenPreprocessor → Parser → AST
//!                                                                     │
//!                                                    ModuleAggregator → Module
//!                                                                     │
//!                                                            Resolver → [Node]
//! ```
//!
//! * **Comment stripping** ([`preprocessor`]): removes `//` and `/* … */`
//!   comments while protecting quoted strings
//! * **Tokenization** ([`tokenizer`]): positioned tokens with string-literal
//!   and concatenation handling
//! * **Parsing** ([`analyzer`]): parser combinators over the token stream
//!   building the typed statement tree ([`ast`])
//! * **Resolution** ([`resolver`]): definition/use tables with path-scoped
//!   name lookup
//! * **Lint** ([`lint`]): post-parse duplicate-statement diagnostics
//!
//! The crate is purely functional: no I/O, no process-wide state, no shared
//! mutable data. Parallelism across inputs is the caller's concern and needs
//! no coordination here.
//!
//! ## Entry points
//!
//! ```rust
//! use yangc_core::parse_module;
//!
//! let module = parse_module(
//!     r#"module example { namespace "urn:example"; prefix ex; }"#,
//! ).unwrap();
//! assert_eq!(module.name.as_str(), "example");
//! ```

pub mod analyzer;
pub mod ast;
pub mod error;
pub mod lint;
pub mod preprocessor;
pub mod resolver;
pub mod tokenizer;

pub use ast::module::{Module, Submodule};
pub use ast::Statement;
pub use error::{Error, Result};
pub use resolver::{collect_definitions, resolve, Node, NodeKind, StatementInfo};
pub use tokenizer::literal::capture_block;

use analyzer::core::ParseError;
use analyzer::parsers::module as module_parser;
use analyzer::parsers::primitives::semicolon;
use analyzer::prelude::many;
use analyzer::Parser;
use preprocessor::{CommentStripper, Preprocessor, StripError, TokenPreprocessor};
use tokenizer::token::{Token, TokenSpan, TokenizeError, Tokenizer};

/// Removes comments from raw YANG source. See
/// [`preprocessor::CommentStripper`].
pub fn strip_comments(text: &str) -> std::result::Result<String, StripError> {
    CommentStripper::new().strip(text)
}

/// Tokenizes comment-free YANG source into positioned tokens.
pub fn tokenize(text: &str) -> std::result::Result<Vec<TokenSpan>, TokenizeError> {
    Tokenizer::new().tokenize(text)
}

fn prepare(text: &str) -> Result<Vec<TokenSpan>> {
    let stripped = strip_comments(text)?;
    let spans = tokenize(&stripped)?;
    Ok(TokenPreprocessor::new().process(spans))
}

fn located(spans: &[TokenSpan], e: ParseError) -> Error {
    let (line, column) = spans
        .get(e.position())
        .or_else(|| spans.last())
        .map(|span| (span.line, span.column))
        .unwrap_or((1, 1));
    Error::Parse {
        line,
        column,
        source: e,
    }
}

/// Requires that nothing but empty statements follows `pos`.
fn expect_end(tokens: &[Token], spans: &[TokenSpan], pos: usize) -> Result<()> {
    let (pos, _) = many(semicolon())
        .parse(tokens, pos)
        .map_err(|e| located(spans, e))?;
    if pos < tokens.len() {
        return Err(located(
            spans,
            ParseError::Failure {
                message: "unexpected trailing input".to_string(),
                position: pos,
                context: None,
            },
        ));
    }
    Ok(())
}

/// Parses a complete `module` from source text.
pub fn parse_module(text: &str) -> Result<Module> {
    let spans = prepare(text)?;
    let tokens: Vec<Token> = spans.iter().map(|span| span.token.clone()).collect();
    let (pos, (name, items)) = module_parser::parse_module_stmt()
        .parse(&tokens, 0)
        .map_err(|e| located(&spans, e))?;
    expect_end(&tokens, &spans, pos)?;
    Ok(module_parser::aggregate_module(name, items)?)
}

/// Parses a complete `submodule` from source text.
pub fn parse_submodule(text: &str) -> Result<Submodule> {
    let spans = prepare(text)?;
    let tokens: Vec<Token> = spans.iter().map(|span| span.token.clone()).collect();
    let (pos, (name, items)) = module_parser::parse_submodule_stmt()
        .parse(&tokens, 0)
        .map_err(|e| located(&spans, e))?;
    expect_end(&tokens, &spans, pos)?;
    Ok(module_parser::aggregate_submodule(name, items)?)
}

/// Parses a single statement from source text, for partial-input testing.
pub fn parse_statement(text: &str) -> Result<Statement> {
    let spans = prepare(text)?;
    let tokens: Vec<Token> = spans.iter().map(|span| span.token.clone()).collect();
    let (pos, statement) = module_parser::parse_statement()
        .parse(&tokens, 0)
        .map_err(|e| located(&spans, e))?;
    expect_end(&tokens, &spans, pos)?;
    Ok(statement)
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    #[ctor::ctor]
    fn init_tests() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
    }
}
