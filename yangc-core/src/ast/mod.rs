//! Abstract syntax tree for the YANG statement grammar.
//!
//! Statements are constructed by the parser and immutable afterwards; the
//! resolver derives its tables separately and never aliases back into the
//! tree beyond identifier strings.
//!
//! * [`types`]: argument value types (identifiers, dates, versions, ranges,
//!   paths, URIs) with checked construction
//! * [`stmt`]: one typed node per RFC 7950 keyword, plus the unknown and
//!   generic fallbacks
//! * [`module`]: aggregated `Module` / `Submodule` records

pub mod module;
pub mod stmt;
pub mod types;

pub use module::{
    BodyStmt, LinkageStmt, Meta, Module, ModuleHeader, Submodule, SubmoduleHeader,
};
pub use stmt::*;
pub use types::{
    Bound, Date, DeviateKind, Identifier, IdentifierRef, Interval, MaxElementsValue, Modifier,
    OrderedBy, PathExpr, PrefixedIdentifier, RangeExpr, Status, Uri, ValueError, Version,
};
