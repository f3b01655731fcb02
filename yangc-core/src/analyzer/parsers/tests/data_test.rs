use super::tokens;
use crate::analyzer::core::Parser;
use crate::analyzer::parsers::data::*;
use crate::ast::types::Identifier;
use crate::ast::*;
use crate::tokenizer::symbol::Delimiter;
use crate::tokenizer::token::Token;

#[test]
fn test_parse_leaf_from_token_vector() {
    let input = vec![
        Token::Atom("leaf".to_string()),
        Token::Atom("host-name".to_string()),
        Token::Delimiter(Delimiter::OpenBrace),
        Token::Atom("type".to_string()),
        Token::Atom("string".to_string()),
        Token::Delimiter(Delimiter::Semicolon),
        Token::Delimiter(Delimiter::CloseBrace),
    ];

    let expected = LeafStmt {
        name: Identifier::new_unchecked("host-name"),
        body: vec![LeafBody::Type(TypeStmt {
            name: "string".parse().unwrap(),
            body: vec![],
        })],
    };

    assert_eq!(parse_leaf().parse(&input, 0), Ok((input.len(), expected)));
}

#[test]
fn test_leaf_list_is_not_parsed_as_leaf() {
    let input = tokens("leaf-list domain-search { type string; }");
    assert!(parse_leaf().parse(&input, 0).is_err());

    let (pos, stmt) = parse_data_def().parse(&input, 0).unwrap();
    assert_eq!(pos, input.len());
    match stmt {
        DataDefStmt::LeafList(leaf_list) => {
            assert_eq!(leaf_list.name.as_str(), "domain-search");
        }
        other => panic!("unexpected data-def: {other:?}"),
    }
}

#[test]
fn test_parse_container_nested() {
    let input = tokens(
        r#"container system {
             leaf host-name { type string; }
             container login {
               leaf message { type string; }
             }
           }"#,
    );
    let (pos, stmt) = parse_container().parse(&input, 0).unwrap();
    assert_eq!(pos, input.len());
    assert_eq!(stmt.name.as_str(), "system");
    assert_eq!(stmt.body.len(), 2);
    match &stmt.body[1] {
        ContainerBody::DataDef(DataDefStmt::Container(login)) => {
            assert_eq!(login.name.as_str(), "login");
            assert_eq!(login.body.len(), 1);
        }
        other => panic!("unexpected body: {other:?}"),
    }
}

#[test]
fn test_parse_list_with_key() {
    let input = tokens(
        r#"list user {
             key "name";
             leaf name { type string; }
             leaf full-name { type string; }
           }"#,
    );
    let (_, stmt) = parse_list().parse(&input, 0).unwrap();
    assert_eq!(stmt.name.as_str(), "user");
    match &stmt.body[0] {
        ListBody::Key(key) => {
            assert_eq!(key.keys.len(), 1);
            assert_eq!(key.keys[0].as_str(), "name");
        }
        other => panic!("unexpected body: {other:?}"),
    }
}

#[test]
fn test_parse_choice_with_case_and_shorthand() {
    let input = tokens(
        r#"choice transfer-method {
             case interval { leaf interval { type uint16; } }
             leaf manual { type empty; }
           }"#,
    );
    let (_, stmt) = parse_choice().parse(&input, 0).unwrap();
    assert_eq!(stmt.name.as_str(), "transfer-method");
    assert!(matches!(stmt.body[0], ChoiceBody::Case(_)));
    assert!(matches!(
        stmt.body[1],
        ChoiceBody::DataDef(DataDefStmt::Leaf(_))
    ));
}

#[test]
fn test_parse_grouping_with_nested_grouping() {
    let input = tokens(
        r#"grouping endpoint {
             grouping port { leaf port { type uint16; } }
             leaf address { type string; }
             uses port;
           }"#,
    );
    let (_, stmt) = parse_grouping().parse(&input, 0).unwrap();
    assert_eq!(stmt.name.as_str(), "endpoint");
    assert!(matches!(stmt.body[0], GroupingBody::Grouping(_)));
    assert!(matches!(
        stmt.body[2],
        GroupingBody::DataDef(DataDefStmt::Uses(_))
    ));
}

#[test]
fn test_parse_uses_with_refine_and_augment() {
    let input = tokens(
        r#"uses endpoint {
             refine "address" { default "127.0.0.1"; }
             augment "port" { leaf protocol { type string; } }
           }"#,
    );
    let (_, stmt) = parse_uses().parse(&input, 0).unwrap();
    assert_eq!(stmt.name.to_string(), "endpoint");
    match &stmt.body[0] {
        UsesBody::Refine(refine) => assert_eq!(refine.target, "address"),
        other => panic!("unexpected body: {other:?}"),
    }
    match &stmt.body[1] {
        UsesBody::Augment(augment) => assert_eq!(augment.target, "port"),
        other => panic!("unexpected body: {other:?}"),
    }
}

#[test]
fn test_parse_anydata_and_anyxml() {
    let input = tokens("anydata blob { config false; }");
    let (_, stmt) = parse_anydata().parse(&input, 0).unwrap();
    assert_eq!(stmt.name.as_str(), "blob");

    let input = tokens("anyxml data;");
    let (_, stmt) = parse_anyxml().parse(&input, 0).unwrap();
    assert_eq!(stmt.name.as_str(), "data");
    assert!(stmt.body.is_empty());
}

#[test]
fn test_unknown_statement_inside_data_body() {
    let input = tokens(
        r#"container c {
             tailf:callpoint "hook" {
               tailf:transaction-hook "subtree";
             }
             leaf x { type string; }
           }"#,
    );
    let (pos, stmt) = parse_container().parse(&input, 0).unwrap();
    assert_eq!(pos, input.len());
    assert!(matches!(stmt.body[0], ContainerBody::Unknown(_)));
    assert!(matches!(stmt.body[1], ContainerBody::DataDef(_)));
}

#[test]
fn test_augment_with_action_and_case() {
    let input = tokens(
        r#"augment "/sys:system" {
             action reboot { input { leaf delay { type uint32; } } }
           }"#,
    );
    let (_, stmt) = parse_augment().parse(&input, 0).unwrap();
    assert_eq!(stmt.target, "/sys:system");
    assert!(matches!(stmt.body[0], AugmentBody::Action(_)));
}
