//! Grammar tests. Token streams are produced with the real tokenizer and
//! preprocessor so the tests exercise the same path the library entry
//! points use; a few tests build token vectors by hand to pin the exact
//! stream shape.

use crate::preprocessor::{Preprocessor, TokenPreprocessor};
use crate::tokenizer::token::{Token, Tokenizer};

mod data_test;
mod module_test;

pub(crate) fn tokens(input: &str) -> Vec<Token> {
    let spans = Tokenizer::new().tokenize(input).unwrap();
    TokenPreprocessor::new()
        .process(spans)
        .into_iter()
        .map(|span| span.token)
        .collect()
}
