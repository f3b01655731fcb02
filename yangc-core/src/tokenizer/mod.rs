//! Lexical analysis of YANG source text.
//!
//! The tokenizer transforms comment-free source (see
//! [`crate::preprocessor`]) into a stream of [`token::TokenSpan`]s carrying
//! line/column positions for error reporting.
//!
//! ## Token classes
//!
//! * **Delimiters**: `{`, `}`, `;` ([`symbol`])
//! * **Strings**: single-quoted (literal bytes), double-quoted (escape
//!   processing), and `+`-concatenated chains joined into one token
//!   ([`literal`])
//! * **Atoms**: maximal runs of unquoted bytes; keywords, identifiers and
//!   unquoted arguments all arrive as atoms and are told apart by the parser
//! * **Whitespace / newlines**: preserved as tokens so the preprocessor can
//!   filter them, mirroring the format-preserving token stream design
//!
//! ## Keywords
//!
//! YANG keywords share lexical space with identifiers and unquoted
//! arguments (`type string;` carries the atom `string` as an argument, not a
//! keyword), so the tokenizer never classifies keywords itself. The
//! [`keyword::Keyword`] enum is matched against atoms by the statement
//! parsers.

pub mod keyword;
pub mod literal;
pub mod symbol;
pub mod token;
pub mod whitespace;
