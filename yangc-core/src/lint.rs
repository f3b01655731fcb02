//! Post-parse duplicate-statement detection.
//!
//! The grammar parses zero-or-one substatements as zero-or-more so that
//! parsing stays monotone; this pass walks the finished tree and reports
//! substatements that appeared more often than the grammar allows. Callers
//! decide whether a [`Diagnostic`] is fatal.

use std::fmt;

use crate::ast::module::{BodyStmt, Module};
use crate::ast::stmt::*;
use crate::tokenizer::keyword::Keyword;

/// A duplicated single-cardinality substatement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub keyword: Keyword,
    pub context: String,
    pub count: usize,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} appears {} times under {}",
            self.keyword, self.count, self.context
        )
    }
}

fn check(out: &mut Vec<Diagnostic>, keyword: Keyword, context: impl Fn() -> String, count: usize) {
    if count > 1 {
        out.push(Diagnostic {
            keyword,
            context: context(),
            count,
        });
    }
}

fn check_type(out: &mut Vec<Diagnostic>, stmt: &TypeStmt) {
    let context = || format!("type {}", stmt.name);
    let count_of = |f: fn(&TypeBody) -> bool| stmt.body.iter().filter(|b| f(b)).count();

    check(
        out,
        Keyword::Length,
        context,
        count_of(|b| matches!(b, TypeBody::Length(_))),
    );
    check(
        out,
        Keyword::Range,
        context,
        count_of(|b| matches!(b, TypeBody::Range(_))),
    );
    check(
        out,
        Keyword::FractionDigits,
        context,
        count_of(|b| matches!(b, TypeBody::FractionDigits(_))),
    );
    check(
        out,
        Keyword::Path,
        context,
        count_of(|b| matches!(b, TypeBody::Path(_))),
    );
    check(
        out,
        Keyword::RequireInstance,
        context,
        count_of(|b| matches!(b, TypeBody::RequireInstance(_))),
    );

    for item in &stmt.body {
        if let TypeBody::Type(t) = item {
            check_type(out, t);
        }
    }
}

fn check_typedef(out: &mut Vec<Diagnostic>, stmt: &TypedefStmt) {
    let types: Vec<&TypeStmt> = stmt
        .body
        .iter()
        .filter_map(|b| match b {
            TypedefBody::Type(t) => Some(t),
            _ => None,
        })
        .collect();
    check(
        out,
        Keyword::Type,
        || format!("typedef {}", stmt.name),
        types.len(),
    );
    for t in types {
        check_type(out, t);
    }
}

fn check_data_def(out: &mut Vec<Diagnostic>, stmt: &DataDefStmt) {
    match stmt {
        DataDefStmt::Container(s) => {
            for item in &s.body {
                match item {
                    ContainerBody::Typedef(t) => check_typedef(out, t),
                    ContainerBody::Grouping(g) => check_grouping(out, g),
                    ContainerBody::DataDef(d) => check_data_def(out, d),
                    _ => {}
                }
            }
        }
        DataDefStmt::Leaf(s) => {
            let types: Vec<&TypeStmt> = s
                .body
                .iter()
                .filter_map(|b| match b {
                    LeafBody::Type(t) => Some(t),
                    _ => None,
                })
                .collect();
            check(out, Keyword::Type, || format!("leaf {}", s.name), types.len());
            for t in types {
                check_type(out, t);
            }
        }
        DataDefStmt::LeafList(s) => {
            let types: Vec<&TypeStmt> = s
                .body
                .iter()
                .filter_map(|b| match b {
                    LeafListBody::Type(t) => Some(t),
                    _ => None,
                })
                .collect();
            check(
                out,
                Keyword::Type,
                || format!("leaf-list {}", s.name),
                types.len(),
            );
            for t in types {
                check_type(out, t);
            }
        }
        DataDefStmt::List(s) => {
            check(
                out,
                Keyword::Key,
                || format!("list {}", s.name),
                s.body
                    .iter()
                    .filter(|b| matches!(b, ListBody::Key(_)))
                    .count(),
            );
            for item in &s.body {
                match item {
                    ListBody::Typedef(t) => check_typedef(out, t),
                    ListBody::Grouping(g) => check_grouping(out, g),
                    ListBody::DataDef(d) => check_data_def(out, d),
                    _ => {}
                }
            }
        }
        DataDefStmt::Choice(s) => {
            for item in &s.body {
                match item {
                    ChoiceBody::Case(c) => {
                        for inner in &c.body {
                            if let CaseBody::DataDef(d) = inner {
                                check_data_def(out, d);
                            }
                        }
                    }
                    ChoiceBody::DataDef(d) => check_data_def(out, d),
                    _ => {}
                }
            }
        }
        DataDefStmt::Anydata(_) | DataDefStmt::Anyxml(_) | DataDefStmt::Uses(_) => {}
    }
}

fn check_grouping(out: &mut Vec<Diagnostic>, stmt: &GroupingStmt) {
    for item in &stmt.body {
        match item {
            GroupingBody::Typedef(t) => check_typedef(out, t),
            GroupingBody::Grouping(g) => check_grouping(out, g),
            GroupingBody::DataDef(d) => check_data_def(out, d),
            _ => {}
        }
    }
}

/// Reports duplicated single-cardinality substatements across a module.
pub fn duplicate_statements(module: &Module) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    for stmt in &module.body {
        match stmt {
            BodyStmt::Typedef(t) => check_typedef(&mut out, t),
            BodyStmt::Grouping(g) => check_grouping(&mut out, g),
            BodyStmt::DataDef(d) => check_data_def(&mut out, d),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_module;

    #[test]
    fn test_duplicate_length_under_type_string() {
        let module = parse_module(
            r#"module m {
                 namespace "urn:m";
                 prefix m;
                 leaf a {
                   type string {
                     length "1..10";
                     length "1..20";
                   }
                 }
               }"#,
        )
        .unwrap();
        let diagnostics = duplicate_statements(&module);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].keyword, Keyword::Length);
        assert_eq!(diagnostics[0].count, 2);
        assert_eq!(diagnostics[0].context, "type string");
    }

    #[test]
    fn test_duplicate_key_under_list() {
        let module = parse_module(
            r#"module m {
                 namespace "urn:m";
                 prefix m;
                 list l {
                   key a;
                   key b;
                   leaf a { type string; }
                   leaf b { type string; }
                 }
               }"#,
        )
        .unwrap();
        let diagnostics = duplicate_statements(&module);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].keyword, Keyword::Key);
    }

    #[test]
    fn test_clean_module_has_no_diagnostics() {
        let module = parse_module(
            r#"module m {
                 namespace "urn:m";
                 prefix m;
                 typedef t { type string { length "1..10"; } }
                 leaf a { type t; }
               }"#,
        )
        .unwrap();
        assert!(duplicate_statements(&module).is_empty());
    }
}
