//! Definition/use resolver.
//!
//! Walks a module's AST depth-first and produces a flat table of nodes:
//! every `typedef` and `grouping` becomes a definition tagged with a
//! per-module, per-name sequence number assigned in source order; every
//! `type` and `uses` reference becomes a use, initially unresolved. The
//! separable [`resolve`] pass then links each use to the nearest lexically
//! preceding definition of the same name on an enclosing path.
//!
//! Statements without a label (`input`, `output`, `augment`, `deviation`)
//! contribute nothing to the path; their children are visited under the
//! unchanged path.

use std::collections::HashMap;

use crate::ast::module::{BodyStmt, Module};
use crate::ast::stmt::*;
use crate::ast::types::{Identifier, IdentifierRef};
use crate::tokenizer::keyword::Keyword;

/// One entry of the resolver output: a path from the module root plus the
/// node kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub path: Vec<Identifier>,
    pub kind: NodeKind,
}

/// What a resolver node is. Sequences on definitions are 1-based and
/// monotonic per identifier name; uses carry `None` until resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    TypeDefinition {
        name: Identifier,
        sequence: u32,
    },
    GroupingDefinition {
        name: Identifier,
        sequence: u32,
    },
    TypeUse {
        name: IdentifierRef,
        sequence: Option<u32>,
    },
    GroupingUse {
        name: IdentifierRef,
        sequence: Option<u32>,
    },
}

/// A lightweight view of a statement offered to the collection predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementInfo<'a> {
    pub keyword: Keyword,
    pub label: Option<&'a str>,
}

struct Walker<'f, F> {
    filter: &'f F,
    path: Vec<Identifier>,
    counters: HashMap<String, u32>,
    nodes: Vec<Node>,
}

impl<F> Walker<'_, F>
where
    F: Fn(&StatementInfo) -> bool,
{
    fn next_sequence(&mut self, name: &Identifier) -> u32 {
        let counter = self.counters.entry(name.as_str().to_string()).or_insert(1);
        let sequence = *counter;
        *counter += 1;
        sequence
    }

    fn admit(&self, keyword: Keyword, label: Option<&str>) -> bool {
        (self.filter)(&StatementInfo { keyword, label })
    }

    fn typedef(&mut self, stmt: &TypedefStmt) {
        let sequence = self.next_sequence(&stmt.name);
        self.path.push(stmt.name.clone());
        if self.admit(Keyword::Typedef, Some(stmt.name.as_str())) {
            self.nodes.push(Node {
                path: self.path.clone(),
                kind: NodeKind::TypeDefinition {
                    name: stmt.name.clone(),
                    sequence,
                },
            });
        }
        for item in &stmt.body {
            if let TypedefBody::Type(t) = item {
                self.type_use(t);
            }
        }
        self.path.pop();
    }

    fn type_use(&mut self, stmt: &TypeStmt) {
        if self.admit(Keyword::Type, None) {
            self.nodes.push(Node {
                path: self.path.clone(),
                kind: NodeKind::TypeUse {
                    name: stmt.name.clone(),
                    sequence: None,
                },
            });
        }
        // Union member types sit in the body and are uses themselves.
        for item in &stmt.body {
            if let TypeBody::Type(t) = item {
                self.type_use(t);
            }
        }
    }

    fn grouping(&mut self, stmt: &GroupingStmt) {
        let sequence = self.next_sequence(&stmt.name);
        self.path.push(stmt.name.clone());
        if self.admit(Keyword::Grouping, Some(stmt.name.as_str())) {
            self.nodes.push(Node {
                path: self.path.clone(),
                kind: NodeKind::GroupingDefinition {
                    name: stmt.name.clone(),
                    sequence,
                },
            });
        }
        for item in &stmt.body {
            match item {
                GroupingBody::Typedef(t) => self.typedef(t),
                GroupingBody::Grouping(g) => self.grouping(g),
                GroupingBody::DataDef(d) => self.data_def(d),
                GroupingBody::Action(a) => self.action(a),
                GroupingBody::Notification(n) => self.notification(n),
                _ => {}
            }
        }
        self.path.pop();
    }

    fn uses(&mut self, stmt: &UsesStmt) {
        if self.admit(Keyword::Uses, None) {
            self.nodes.push(Node {
                path: self.path.clone(),
                kind: NodeKind::GroupingUse {
                    name: stmt.name.clone(),
                    sequence: None,
                },
            });
        }
        for item in &stmt.body {
            if let UsesBody::Augment(a) = item {
                self.augment(a);
            }
        }
    }

    fn data_def(&mut self, stmt: &DataDefStmt) {
        match stmt {
            DataDefStmt::Container(s) => {
                self.path.push(s.name.clone());
                for item in &s.body {
                    match item {
                        ContainerBody::Typedef(t) => self.typedef(t),
                        ContainerBody::Grouping(g) => self.grouping(g),
                        ContainerBody::DataDef(d) => self.data_def(d),
                        ContainerBody::Action(a) => self.action(a),
                        ContainerBody::Notification(n) => self.notification(n),
                        _ => {}
                    }
                }
                self.path.pop();
            }
            DataDefStmt::Leaf(s) => {
                self.path.push(s.name.clone());
                for item in &s.body {
                    if let LeafBody::Type(t) = item {
                        self.type_use(t);
                    }
                }
                self.path.pop();
            }
            DataDefStmt::LeafList(s) => {
                self.path.push(s.name.clone());
                for item in &s.body {
                    if let LeafListBody::Type(t) = item {
                        self.type_use(t);
                    }
                }
                self.path.pop();
            }
            DataDefStmt::List(s) => {
                self.path.push(s.name.clone());
                for item in &s.body {
                    match item {
                        ListBody::Typedef(t) => self.typedef(t),
                        ListBody::Grouping(g) => self.grouping(g),
                        ListBody::DataDef(d) => self.data_def(d),
                        ListBody::Action(a) => self.action(a),
                        ListBody::Notification(n) => self.notification(n),
                        _ => {}
                    }
                }
                self.path.pop();
            }
            DataDefStmt::Choice(s) => {
                self.path.push(s.name.clone());
                for item in &s.body {
                    match item {
                        ChoiceBody::Case(c) => self.case(c),
                        ChoiceBody::DataDef(d) => self.data_def(d),
                        _ => {}
                    }
                }
                self.path.pop();
            }
            DataDefStmt::Anydata(_) | DataDefStmt::Anyxml(_) => {}
            DataDefStmt::Uses(s) => self.uses(s),
        }
    }

    fn case(&mut self, stmt: &CaseStmt) {
        self.path.push(stmt.name.clone());
        for item in &stmt.body {
            if let CaseBody::DataDef(d) = item {
                self.data_def(d);
            }
        }
        self.path.pop();
    }

    fn action(&mut self, stmt: &ActionStmt) {
        self.path.push(stmt.name.clone());
        self.operation_body(&stmt.body);
        self.path.pop();
    }

    fn rpc(&mut self, stmt: &RpcStmt) {
        self.path.push(stmt.name.clone());
        self.operation_body(&stmt.body);
        self.path.pop();
    }

    fn operation_body(&mut self, body: &[OperationBody]) {
        for item in body {
            match item {
                OperationBody::Typedef(t) => self.typedef(t),
                OperationBody::Grouping(g) => self.grouping(g),
                OperationBody::Input(i) => self.io_body(&i.body),
                OperationBody::Output(o) => self.io_body(&o.body),
                _ => {}
            }
        }
    }

    fn io_body(&mut self, body: &[IoBody]) {
        for item in body {
            match item {
                IoBody::Typedef(t) => self.typedef(t),
                IoBody::Grouping(g) => self.grouping(g),
                IoBody::DataDef(d) => self.data_def(d),
                _ => {}
            }
        }
    }

    fn notification(&mut self, stmt: &NotificationStmt) {
        self.path.push(stmt.name.clone());
        for item in &stmt.body {
            match item {
                NotificationBody::Typedef(t) => self.typedef(t),
                NotificationBody::Grouping(g) => self.grouping(g),
                NotificationBody::DataDef(d) => self.data_def(d),
                _ => {}
            }
        }
        self.path.pop();
    }

    fn augment(&mut self, stmt: &AugmentStmt) {
        for item in &stmt.body {
            match item {
                AugmentBody::DataDef(d) => self.data_def(d),
                AugmentBody::Case(c) => self.case(c),
                AugmentBody::Action(a) => self.action(a),
                AugmentBody::Notification(n) => self.notification(n),
                _ => {}
            }
        }
    }

    fn deviation(&mut self, stmt: &DeviationStmt) {
        for item in &stmt.body {
            if let DeviationBody::Deviate(d) = item {
                for inner in &d.body {
                    if let DeviateBody::Type(t) = inner {
                        self.type_use(t);
                    }
                }
            }
        }
    }

    fn body_stmt(&mut self, stmt: &BodyStmt) {
        match stmt {
            BodyStmt::Typedef(t) => self.typedef(t),
            BodyStmt::Grouping(g) => self.grouping(g),
            BodyStmt::DataDef(d) => self.data_def(d),
            BodyStmt::Augment(a) => self.augment(a),
            BodyStmt::Rpc(r) => self.rpc(r),
            BodyStmt::Notification(n) => self.notification(n),
            BodyStmt::Deviation(d) => self.deviation(d),
            BodyStmt::Extension(_)
            | BodyStmt::Feature(_)
            | BodyStmt::Identity(_)
            | BodyStmt::Unknown(_) => {}
        }
    }
}

/// Collects definition and use nodes from a module, depth-first in source
/// order. Nodes rejected by the predicate are not emitted, but their
/// children are still traversed; sequence numbers are assigned either way.
pub fn collect_definitions<F>(module: &Module, filter: F) -> Vec<Node>
where
    F: Fn(&StatementInfo) -> bool,
{
    let mut walker = Walker {
        filter: &filter,
        path: vec![module.name.clone()],
        counters: HashMap::new(),
        nodes: Vec::new(),
    };
    for stmt in &module.body {
        walker.body_stmt(stmt);
    }
    walker.nodes
}

fn definition_matches(
    node: &Node,
    want_type: bool,
    use_name: &Identifier,
    use_path: &[Identifier],
) -> Option<(usize, u32)> {
    let (name, sequence) = match &node.kind {
        NodeKind::TypeDefinition { name, sequence } if want_type => (name, *sequence),
        NodeKind::GroupingDefinition { name, sequence } if !want_type => (name, *sequence),
        _ => return None,
    };
    if name != use_name {
        return None;
    }
    let parent = &node.path[..node.path.len() - 1];
    if use_path.starts_with(parent) {
        Some((parent.len(), sequence))
    } else {
        None
    }
}

/// Fills in the sequence of every unresolved use from the nearest lexically
/// preceding definition of the same name on an enclosing path. Prefixed
/// references point outside the module and stay unresolved, as do uses with
/// no matching definition; both are reported as warnings, never errors.
pub fn resolve(mut nodes: Vec<Node>) -> Vec<Node> {
    for i in 0..nodes.len() {
        let (want_type, name, path) = match &nodes[i].kind {
            NodeKind::TypeUse {
                name,
                sequence: None,
            } => (true, name.clone(), nodes[i].path.clone()),
            NodeKind::GroupingUse {
                name,
                sequence: None,
            } => (false, name.clone(), nodes[i].path.clone()),
            _ => continue,
        };

        let plain = match &name {
            IdentifierRef::Plain(id) => id.clone(),
            IdentifierRef::Prefixed(_) => {
                tracing::warn!(reference = %name, "prefixed reference left unresolved");
                continue;
            }
        };

        let mut best: Option<(usize, u32)> = None;
        for candidate in nodes[..i].iter() {
            if let Some((depth, sequence)) =
                definition_matches(candidate, want_type, &plain, &path)
            {
                if best.map_or(true, |(best_depth, _)| depth >= best_depth) {
                    best = Some((depth, sequence));
                }
            }
        }

        match best {
            Some((_, sequence)) => match &mut nodes[i].kind {
                NodeKind::TypeUse { sequence: slot, .. }
                | NodeKind::GroupingUse { sequence: slot, .. } => *slot = Some(sequence),
                _ => unreachable!(),
            },
            None => {
                tracing::warn!(reference = %name, "unresolved reference");
            }
        }
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_module;

    fn ids(path: &[Identifier]) -> Vec<&str> {
        path.iter().map(|p| p.as_str()).collect()
    }

    fn collect_all(module: &Module) -> Vec<Node> {
        collect_definitions(module, |_| true)
    }

    #[test]
    fn test_sibling_typedefs_get_sequences() {
        let module = parse_module(
            r#"module m {
                 namespace "urn:m";
                 prefix m;
                 typedef foo { type string; }
                 leaf a { type foo; }
                 typedef foo { type string; }
               }"#,
        )
        .unwrap();
        let nodes = resolve(collect_all(&module));

        let definitions: Vec<(u32, Vec<&str>)> = nodes
            .iter()
            .filter_map(|n| match &n.kind {
                NodeKind::TypeDefinition { sequence, .. } => Some((*sequence, ids(&n.path))),
                _ => None,
            })
            .collect();
        assert_eq!(
            definitions,
            vec![(1, vec!["m", "foo"]), (2, vec!["m", "foo"])]
        );

        // The use sits between the two definitions and must see the first.
        let use_seq = nodes.iter().find_map(|n| match &n.kind {
            NodeKind::TypeUse { name, sequence } if name.name().as_str() == "foo" => {
                Some(*sequence)
            }
            _ => None,
        });
        assert_eq!(use_seq, Some(Some(1)));
    }

    #[test]
    fn test_shadowing_prefers_nearest_scope() {
        let module = parse_module(
            r#"module m {
                 namespace "urn:m";
                 prefix m;
                 typedef foo { type string; }
                 container c {
                   typedef foo { type uint8; }
                   leaf l { type foo; }
                 }
                 leaf top { type foo; }
               }"#,
        )
        .unwrap();
        let nodes = resolve(collect_all(&module));

        let uses: Vec<(Vec<&str>, Option<u32>)> = nodes
            .iter()
            .filter_map(|n| match &n.kind {
                NodeKind::TypeUse { name, sequence } if name.name().as_str() == "foo" => {
                    Some((ids(&n.path), *sequence))
                }
                _ => None,
            })
            .collect();
        assert_eq!(
            uses,
            vec![
                (vec!["m", "c", "l"], Some(2)),
                (vec!["m", "top"], Some(1)),
            ]
        );
    }

    #[test]
    fn test_grouping_uses_resolve() {
        let module = parse_module(
            r#"module m {
                 namespace "urn:m";
                 prefix m;
                 grouping endpoint {
                   leaf address { type string; }
                 }
                 container c { uses endpoint; }
               }"#,
        )
        .unwrap();
        let nodes = resolve(collect_all(&module));

        let grouping_use = nodes
            .iter()
            .find_map(|n| match &n.kind {
                NodeKind::GroupingUse { sequence, .. } => Some((ids(&n.path), *sequence)),
                _ => None,
            })
            .unwrap();
        assert_eq!(grouping_use, (vec!["m", "c"], Some(1)));
    }

    #[test]
    fn test_unresolved_and_prefixed_uses_stay_none() {
        let module = parse_module(
            r#"module m {
                 namespace "urn:m";
                 prefix m;
                 leaf a { type missing; }
                 leaf b { type inet:uri; }
               }"#,
        )
        .unwrap();
        let nodes = resolve(collect_all(&module));
        for node in &nodes {
            if let NodeKind::TypeUse { sequence, .. } = &node.kind {
                assert_eq!(*sequence, None);
            }
        }
    }

    #[test]
    fn test_filter_skips_emission_but_traverses_children() {
        let module = parse_module(
            r#"module m {
                 namespace "urn:m";
                 prefix m;
                 grouping g {
                   typedef inner { type string; }
                   leaf l { type inner; }
                 }
               }"#,
        )
        .unwrap();
        // Reject grouping nodes; their contents must still be collected.
        let nodes = collect_definitions(&module, |info| info.keyword != Keyword::Grouping);
        assert!(nodes.iter().all(|n| !matches!(
            n.kind,
            NodeKind::GroupingDefinition { .. } | NodeKind::GroupingUse { .. }
        )));
        assert!(nodes
            .iter()
            .any(|n| matches!(&n.kind, NodeKind::TypeDefinition { name, .. } if name.as_str() == "inner")));
        assert!(nodes
            .iter()
            .any(|n| matches!(&n.kind, NodeKind::TypeUse { .. })));
    }

    #[test]
    fn test_definition_sequences_unique_per_name() {
        let module = parse_module(
            r#"module m {
                 namespace "urn:m";
                 prefix m;
                 typedef t { type string; }
                 container c {
                   typedef t { type string; }
                   container d { typedef t { type string; } }
                 }
                 grouping t { leaf x { type string; } }
               }"#,
        )
        .unwrap();
        let nodes = collect_all(&module);
        let mut seen = std::collections::HashSet::new();
        for node in &nodes {
            if let NodeKind::TypeDefinition { name, sequence }
            | NodeKind::GroupingDefinition { name, sequence } = &node.kind
            {
                assert!(
                    seen.insert((name.as_str().to_string(), *sequence)),
                    "duplicate (name, sequence)"
                );
            }
        }
        assert_eq!(seen.len(), 4);
    }
}
