//! End-to-end pipeline tests over complete module texts.

use yangc_core::ast::module::{BodyStmt, LinkageStmt};
use yangc_core::ast::types::Version;
use yangc_core::ast::{ContainerBody, DataDefStmt, LeafBody, ListBody};
use yangc_core::{parse_module, parse_statement, strip_comments, Error};

/// RFC 7950 §4.2.2.5, trimmed to the shape checked below.
const EXAMPLE_SYSTEM: &str = r#"
module example-system {
  yang-version 1.1;
  namespace "urn:example:system";
  prefix "sys";

  organization "Example Inc.";
  contact "joe@example.com";
  description
    "The module for entities implementing the Example system.";

  revision 2007-06-09 {
    description "Initial revision.";
  }

  container system {
    leaf host-name {
      type string;
      description "Hostname for this system.";
    }

    leaf-list domain-search {
      type string;
      description "List of domain names to search.";
    }

    container login {
      leaf message {
        type string;
        description
          "Message given at start of login session.";
      }

      list user {
        key "name";
        leaf name {
          type string;
        }
        leaf full-name {
          type string;
        }
        leaf class {
          type string;
        }
      }
    }
  }
}
"#;

#[test]
fn it_parses_the_example_system_module() {
    let module = parse_module(EXAMPLE_SYSTEM).unwrap();

    assert_eq!(module.name.as_str(), "example-system");
    assert_eq!(module.header.version, Some(Version::new(1, 1)));
    assert_eq!(
        module.header.namespace.as_ref().unwrap().as_str(),
        "urn:example:system"
    );
    assert_eq!(module.header.prefix.as_ref().unwrap().as_str(), "sys");
    assert_eq!(
        module.meta.organization.as_ref().unwrap().text,
        "Example Inc."
    );

    assert_eq!(module.revisions.len(), 1);
    assert_eq!(module.revisions[0].date.to_string(), "2007-06-09");

    assert_eq!(module.body.len(), 1);
    let system = match &module.body[0] {
        BodyStmt::DataDef(DataDefStmt::Container(c)) => c,
        other => panic!("unexpected body: {other:?}"),
    };
    assert_eq!(system.name.as_str(), "system");

    let children: Vec<&DataDefStmt> = system
        .body
        .iter()
        .filter_map(|b| match b {
            ContainerBody::DataDef(d) => Some(d),
            _ => None,
        })
        .collect();
    assert_eq!(children.len(), 3);
    assert!(
        matches!(children[0], DataDefStmt::Leaf(leaf) if leaf.name.as_str() == "host-name")
    );
    assert!(matches!(
        children[1],
        DataDefStmt::LeafList(ll) if ll.name.as_str() == "domain-search"
    ));

    let login = match children[2] {
        DataDefStmt::Container(c) => c,
        other => panic!("unexpected child: {other:?}"),
    };
    assert_eq!(login.name.as_str(), "login");

    let user = login
        .body
        .iter()
        .find_map(|b| match b {
            ContainerBody::DataDef(DataDefStmt::List(l)) => Some(l),
            _ => None,
        })
        .unwrap();
    assert_eq!(user.name.as_str(), "user");

    let key = user
        .body
        .iter()
        .find_map(|b| match b {
            ListBody::Key(k) => Some(k),
            _ => None,
        })
        .unwrap();
    assert_eq!(key.keys.len(), 1);
    assert_eq!(key.keys[0].as_str(), "name");

    let leaves: Vec<&str> = user
        .body
        .iter()
        .filter_map(|b| match b {
            ListBody::DataDef(DataDefStmt::Leaf(l)) => Some(l.name.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(leaves, ["name", "full-name", "class"]);
}

#[test]
fn it_parses_commented_source_identically() {
    let commented = r#"
// leading comment
module m { // trailing
  namespace "urn:m"; /* inline */ prefix m;
  /* block
     comment */
  leaf a { type string; }
}
"#;
    let clean = r#"

module m {
  namespace "urn:m";  prefix m;

  leaf a { type string; }
}
"#;
    assert_eq!(
        parse_module(commented).unwrap(),
        parse_module(clean).unwrap()
    );
}

#[test]
fn it_preserves_comment_bytes_inside_strings() {
    let source = r#"module m {
  namespace "urn:m";
  prefix m;
  leaf a { type string; description "see http://example.com // not a comment"; }
}"#;
    let module = parse_module(source).unwrap();
    let leaf = match &module.body[0] {
        BodyStmt::DataDef(DataDefStmt::Leaf(l)) => l,
        other => panic!("unexpected body: {other:?}"),
    };
    let description = leaf
        .body
        .iter()
        .find_map(|b| match b {
            LeafBody::Description(d) => Some(d.text.as_str()),
            _ => None,
        })
        .unwrap();
    assert_eq!(description, "see http://example.com // not a comment");
}

#[test]
fn it_reports_parse_errors_with_position() {
    let source = "module m {\n  namespace \"urn:m\";\n  prefix m;\n  revision 2010-13-04;\n}";
    match parse_module(source) {
        Err(Error::Parse { line, .. }) => assert_eq!(line, 4),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn it_rejects_trailing_garbage() {
    let source = r#"module m { namespace "urn:m"; prefix m; } extra"#;
    assert!(matches!(
        parse_module(source),
        Err(Error::Parse { .. })
    ));
}

#[test]
fn it_rejects_empty_input() {
    assert!(matches!(parse_module(""), Err(Error::Strip(_))));
}

#[test]
fn it_keeps_import_and_include_linkage() {
    let source = r#"module m {
  namespace "urn:m";
  prefix m;
  import a { prefix a; }
  include m-types;
}"#;
    let module = parse_module(source).unwrap();
    assert_eq!(module.linkage.len(), 2);
    assert!(matches!(module.linkage[0], LinkageStmt::Import(_)));
    assert!(matches!(module.linkage[1], LinkageStmt::Include(_)));
}

#[test]
fn it_parses_single_statements() {
    let statement = parse_statement("leaf x { type string; }").unwrap();
    assert!(matches!(
        statement,
        yangc_core::Statement::DataDef(DataDefStmt::Leaf(_))
    ));
}

#[test]
fn strip_comments_requires_input() {
    assert!(strip_comments("").is_err());
    assert_eq!(strip_comments("a // b\n").unwrap(), "a \n");
}
