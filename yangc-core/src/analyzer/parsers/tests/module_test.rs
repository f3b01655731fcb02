use super::tokens;
use crate::analyzer::core::Parser;
use crate::analyzer::parsers::module::*;
use crate::ast::module::{BodyStmt, LinkageStmt};
use crate::ast::types::Version;
use crate::ast::*;

#[test]
fn test_yang_version_forms() {
    for (text, expected) in [
        ("yang-version 1;", Version::new(1, 0)),
        ("yang-version 1.1;", Version::new(1, 1)),
        ("yang-version \"1.1\";", Version::new(1, 1)),
    ] {
        let input = tokens(text);
        let (_, stmt) = parse_yang_version().parse(&input, 0).unwrap();
        assert_eq!(stmt.version, expected, "{text}");
    }
}

#[test]
fn test_namespace_requires_absolute_uri() {
    let input = tokens(r#"namespace "urn:example:system";"#);
    let (_, stmt) = parse_namespace().parse(&input, 0).unwrap();
    assert_eq!(stmt.uri.as_str(), "urn:example:system");

    let input = tokens(r#"namespace "not a uri";"#);
    assert!(parse_namespace().parse(&input, 0).is_err());
}

#[test]
fn test_parse_import_with_prefix_and_revision() {
    let input = tokens(
        r#"import ietf-yang-types {
             prefix yang;
             revision-date 2013-07-15;
           }"#,
    );
    let (_, stmt) = parse_import().parse(&input, 0).unwrap();
    assert_eq!(stmt.module.as_str(), "ietf-yang-types");
    assert!(matches!(stmt.body[0], ImportBody::Prefix(_)));
    match &stmt.body[1] {
        ImportBody::RevisionDate(rd) => assert_eq!(rd.date.to_string(), "2013-07-15"),
        other => panic!("unexpected body: {other:?}"),
    }
}

#[test]
fn test_parse_revision() {
    let input = tokens(r#"revision 2007-06-09 { description "Initial revision."; }"#);
    let (_, stmt) = parse_revision().parse(&input, 0).unwrap();
    assert_eq!(stmt.date.to_string(), "2007-06-09");
    assert!(matches!(stmt.body[0], RevisionBody::Description(_)));
}

#[test]
fn test_revision_rejects_impossible_dates() {
    for text in ["revision 2010-13-04;", "revision 2010-02-30;"] {
        let input = tokens(text);
        assert!(parse_revision().parse(&input, 0).is_err(), "{text}");
    }
}

#[test]
fn test_parse_identity_and_feature() {
    let input = tokens(r#"identity eth { base interface-type; }"#);
    let (_, stmt) = parse_identity().parse(&input, 0).unwrap();
    assert_eq!(stmt.name.as_str(), "eth");
    assert!(matches!(stmt.body[0], IdentityBody::Base(_)));

    let input = tokens(r#"feature local-storage { description "Has disk."; }"#);
    let (_, stmt) = parse_feature().parse(&input, 0).unwrap();
    assert_eq!(stmt.name.as_str(), "local-storage");
}

#[test]
fn test_parse_extension_with_argument() {
    let input = tokens(
        r#"extension annotation {
             argument name { yin-element true; }
           }"#,
    );
    let (_, stmt) = parse_extension().parse(&input, 0).unwrap();
    match &stmt.body[0] {
        ExtensionBody::Argument(arg) => {
            assert_eq!(arg.name.as_str(), "name");
            assert!(matches!(
                arg.body[0],
                ArgumentBody::YinElement(YinElementStmt { value: true, .. })
            ));
        }
        other => panic!("unexpected body: {other:?}"),
    }
}

#[test]
fn test_parse_deviation() {
    use crate::ast::types::DeviateKind;

    let input = tokens(
        r#"deviation "/sys:system/sys:radius" {
             deviate not-supported;
           }"#,
    );
    let (_, stmt) = parse_deviation().parse(&input, 0).unwrap();
    assert_eq!(stmt.target, "/sys:system/sys:radius");
    match &stmt.body[0] {
        DeviationBody::Deviate(d) => assert_eq!(d.kind, DeviateKind::NotSupported),
        other => panic!("unexpected body: {other:?}"),
    }
}

#[test]
fn test_module_sections_aggregate_in_order() {
    let input = tokens(
        r#"module acme {
             yang-version 1.1;
             namespace "urn:acme";
             prefix acme;
             import ietf-yang-types { prefix yang; }
             organization "ACME";
             contact "support@acme.example";
             revision 2024-01-01;
             container top { presence "enabled"; }
           }"#,
    );
    let (pos, (name, items)) = parse_module_stmt().parse(&input, 0).unwrap();
    assert_eq!(pos, input.len());
    let module = aggregate_module(name, items).unwrap();

    assert_eq!(module.name.as_str(), "acme");
    assert_eq!(module.header.version, Some(Version::new(1, 1)));
    assert_eq!(module.header.prefix.as_ref().unwrap().as_str(), "acme");
    assert_eq!(module.linkage.len(), 1);
    assert!(matches!(module.linkage[0], LinkageStmt::Import(_)));
    assert_eq!(module.meta.organization.as_ref().unwrap().text, "ACME");
    assert_eq!(module.revisions.len(), 1);
    assert_eq!(module.body.len(), 1);
    assert!(matches!(module.body[0], BodyStmt::DataDef(_)));
}

#[test]
fn test_module_section_order_violation() {
    let input = tokens(
        r#"module acme {
             namespace "urn:acme";
             prefix acme;
             organization "ACME";
             import ietf-yang-types { prefix yang; }
           }"#,
    );
    let (_, (name, items)) = parse_module_stmt().parse(&input, 0).unwrap();
    assert_eq!(
        aggregate_module(name, items),
        Err(AggregateError::OutOfOrder {
            keyword: "import",
            section: "linkage",
        })
    );
}

#[test]
fn test_unknown_statements_attach_to_current_section() {
    let input = tokens(
        r#"module acme {
             namespace "urn:acme";
             prefix acme;
             acme:header-marker;
             import ietf-yang-types { prefix yang; }
             acme:linkage-marker;
           }"#,
    );
    let (_, (name, items)) = parse_module_stmt().parse(&input, 0).unwrap();
    let module = aggregate_module(name, items).unwrap();
    assert_eq!(module.header.extensions.len(), 1);
    assert_eq!(
        module.header.extensions[0].id.to_string(),
        "acme:header-marker"
    );
    assert_eq!(module.linkage.len(), 2);
    assert!(matches!(module.linkage[1], LinkageStmt::Unknown(_)));
}

#[test]
fn test_belongs_to_rejected_in_module() {
    let input = tokens(
        r#"module acme {
             belongs-to parent { prefix p; }
           }"#,
    );
    let (_, (name, items)) = parse_module_stmt().parse(&input, 0).unwrap();
    assert_eq!(
        aggregate_module(name, items),
        Err(AggregateError::NotAllowed {
            keyword: "belongs-to",
            context: "module",
        })
    );
}

#[test]
fn test_parse_submodule() {
    let input = tokens(
        r#"submodule acme-types {
             yang-version 1.1;
             belongs-to acme { prefix acme; }
             typedef percent { type uint8; }
           }"#,
    );
    let (pos, (name, items)) = parse_submodule_stmt().parse(&input, 0).unwrap();
    assert_eq!(pos, input.len());
    let submodule = aggregate_submodule(name, items).unwrap();
    assert_eq!(submodule.name.as_str(), "acme-types");
    assert!(submodule.header.belongs_to.is_some());
    assert_eq!(submodule.body.len(), 1);
}

#[test]
fn test_parse_statement_covers_small_statements() {
    for text in [
        "config true;",
        "status deprecated;",
        "min-elements 2;",
        "prefix acme;",
        r#"pattern "[a-z]+";"#,
        "input { leaf x { type string; } }",
        "tailf:hidden full;",
    ] {
        let input = tokens(text);
        let result = parse_statement().parse(&input, 0);
        let (pos, _) = result.unwrap_or_else(|e| panic!("{text}: {e:?}"));
        assert_eq!(pos, input.len(), "{text}");
    }
}
