//! Data-definition statements: container, leaf, leaf-list, list, choice,
//! case, anydata, anyxml, uses, grouping, refine and augment.
//!
//! These productions are mutually recursive (a container holds data-defs,
//! a grouping holds containers, a choice holds cases holding data-defs, and
//! so on), so every edge between them runs through `lazy`, which defers
//! construction of the inner parser to parse time.

use crate::analyzer::core::Parser;
use crate::analyzer::prelude::*;
use crate::ast::*;
use crate::tokenizer::keyword::Keyword;
use crate::tokenizer::token::Token;

use super::common::{
    parse_config, parse_default, parse_description, parse_if_feature, parse_key, parse_mandatory,
    parse_max_elements, parse_min_elements, parse_must, parse_ordered_by, parse_presence,
    parse_reference, parse_status, parse_unique, parse_units, parse_when,
};
use super::primitives::{identifier_arg, identifier_ref_arg, keyword, stmt_body, string_arg};
use super::rpcs::{parse_action, parse_notification};
use super::types::{parse_type, parse_typedef};
use super::unknown::parse_unknown;

/// The reusable `container | leaf | leaf-list | list | choice | anydata |
/// anyxml | uses` alternation. `leaf-list` is tried before `leaf`.
pub fn parse_data_def() -> impl Parser<Token, DataDefStmt> {
    with_context(
        choice(vec![
            Box::new(map(lazy(parse_container), DataDefStmt::Container)),
            Box::new(map(lazy(parse_leaf_list), DataDefStmt::LeafList)),
            Box::new(map(lazy(parse_leaf), DataDefStmt::Leaf)),
            Box::new(map(lazy(parse_list), DataDefStmt::List)),
            Box::new(map(lazy(parse_choice), DataDefStmt::Choice)),
            Box::new(map(lazy(parse_anydata), DataDefStmt::Anydata)),
            Box::new(map(lazy(parse_anyxml), DataDefStmt::Anyxml)),
            Box::new(map(lazy(parse_uses), DataDefStmt::Uses)),
        ]),
        "data definition",
    )
}

fn container_body() -> impl Parser<Token, ContainerBody> {
    choice(vec![
        Box::new(map(parse_when(), ContainerBody::When)),
        Box::new(map(parse_if_feature(), ContainerBody::IfFeature)),
        Box::new(map(parse_must(), ContainerBody::Must)),
        Box::new(map(parse_presence(), ContainerBody::Presence)),
        Box::new(map(parse_config(), ContainerBody::Config)),
        Box::new(map(parse_status(), ContainerBody::Status)),
        Box::new(map(parse_description(), ContainerBody::Description)),
        Box::new(map(parse_reference(), ContainerBody::Reference)),
        Box::new(map(parse_typedef(), ContainerBody::Typedef)),
        Box::new(map(lazy(parse_grouping), ContainerBody::Grouping)),
        Box::new(map(parse_data_def(), ContainerBody::DataDef)),
        Box::new(map(lazy(parse_action), ContainerBody::Action)),
        Box::new(map(lazy(parse_notification), ContainerBody::Notification)),
        Box::new(map(parse_unknown(), ContainerBody::Unknown)),
    ])
}

pub fn parse_container() -> impl Parser<Token, ContainerStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Container)), identifier_arg()),
                stmt_body(container_body()),
            ),
            |(name, body)| ContainerStmt { name, body },
        ),
        "container statement",
    )
}

fn leaf_body() -> impl Parser<Token, LeafBody> {
    choice(vec![
        Box::new(map(parse_when(), LeafBody::When)),
        Box::new(map(parse_if_feature(), LeafBody::IfFeature)),
        Box::new(map(parse_type(), LeafBody::Type)),
        Box::new(map(parse_units(), LeafBody::Units)),
        Box::new(map(parse_must(), LeafBody::Must)),
        Box::new(map(parse_default(), LeafBody::Default)),
        Box::new(map(parse_config(), LeafBody::Config)),
        Box::new(map(parse_mandatory(), LeafBody::Mandatory)),
        Box::new(map(parse_status(), LeafBody::Status)),
        Box::new(map(parse_description(), LeafBody::Description)),
        Box::new(map(parse_reference(), LeafBody::Reference)),
        Box::new(map(parse_unknown(), LeafBody::Unknown)),
    ])
}

pub fn parse_leaf() -> impl Parser<Token, LeafStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Leaf)), identifier_arg()),
                stmt_body(leaf_body()),
            ),
            |(name, body)| LeafStmt { name, body },
        ),
        "leaf statement",
    )
}

fn leaf_list_body() -> impl Parser<Token, LeafListBody> {
    choice(vec![
        Box::new(map(parse_when(), LeafListBody::When)),
        Box::new(map(parse_if_feature(), LeafListBody::IfFeature)),
        Box::new(map(parse_type(), LeafListBody::Type)),
        Box::new(map(parse_units(), LeafListBody::Units)),
        Box::new(map(parse_must(), LeafListBody::Must)),
        Box::new(map(parse_default(), LeafListBody::Default)),
        Box::new(map(parse_config(), LeafListBody::Config)),
        Box::new(map(parse_min_elements(), LeafListBody::MinElements)),
        Box::new(map(parse_max_elements(), LeafListBody::MaxElements)),
        Box::new(map(parse_ordered_by(), LeafListBody::OrderedBy)),
        Box::new(map(parse_status(), LeafListBody::Status)),
        Box::new(map(parse_description(), LeafListBody::Description)),
        Box::new(map(parse_reference(), LeafListBody::Reference)),
        Box::new(map(parse_unknown(), LeafListBody::Unknown)),
    ])
}

pub fn parse_leaf_list() -> impl Parser<Token, LeafListStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::LeafList)), identifier_arg()),
                stmt_body(leaf_list_body()),
            ),
            |(name, body)| LeafListStmt { name, body },
        ),
        "leaf-list statement",
    )
}

fn list_body() -> impl Parser<Token, ListBody> {
    choice(vec![
        Box::new(map(parse_when(), ListBody::When)),
        Box::new(map(parse_if_feature(), ListBody::IfFeature)),
        Box::new(map(parse_must(), ListBody::Must)),
        Box::new(map(parse_key(), ListBody::Key)),
        Box::new(map(parse_unique(), ListBody::Unique)),
        Box::new(map(parse_config(), ListBody::Config)),
        Box::new(map(parse_min_elements(), ListBody::MinElements)),
        Box::new(map(parse_max_elements(), ListBody::MaxElements)),
        Box::new(map(parse_ordered_by(), ListBody::OrderedBy)),
        Box::new(map(parse_status(), ListBody::Status)),
        Box::new(map(parse_description(), ListBody::Description)),
        Box::new(map(parse_reference(), ListBody::Reference)),
        Box::new(map(parse_typedef(), ListBody::Typedef)),
        Box::new(map(lazy(parse_grouping), ListBody::Grouping)),
        Box::new(map(parse_data_def(), ListBody::DataDef)),
        Box::new(map(lazy(parse_action), ListBody::Action)),
        Box::new(map(lazy(parse_notification), ListBody::Notification)),
        Box::new(map(parse_unknown(), ListBody::Unknown)),
    ])
}

pub fn parse_list() -> impl Parser<Token, ListStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::List)), identifier_arg()),
                stmt_body(list_body()),
            ),
            |(name, body)| ListStmt { name, body },
        ),
        "list statement",
    )
}

fn choice_body() -> impl Parser<Token, ChoiceBody> {
    choice(vec![
        Box::new(map(parse_when(), ChoiceBody::When)),
        Box::new(map(parse_if_feature(), ChoiceBody::IfFeature)),
        Box::new(map(parse_default(), ChoiceBody::Default)),
        Box::new(map(parse_config(), ChoiceBody::Config)),
        Box::new(map(parse_mandatory(), ChoiceBody::Mandatory)),
        Box::new(map(parse_status(), ChoiceBody::Status)),
        Box::new(map(parse_description(), ChoiceBody::Description)),
        Box::new(map(parse_reference(), ChoiceBody::Reference)),
        Box::new(map(lazy(parse_case), ChoiceBody::Case)),
        Box::new(map(parse_data_def(), ChoiceBody::DataDef)),
        Box::new(map(parse_unknown(), ChoiceBody::Unknown)),
    ])
}

pub fn parse_choice() -> impl Parser<Token, ChoiceStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Choice)), identifier_arg()),
                stmt_body(choice_body()),
            ),
            |(name, body)| ChoiceStmt { name, body },
        ),
        "choice statement",
    )
}

fn case_body() -> impl Parser<Token, CaseBody> {
    choice(vec![
        Box::new(map(parse_when(), CaseBody::When)),
        Box::new(map(parse_if_feature(), CaseBody::IfFeature)),
        Box::new(map(parse_status(), CaseBody::Status)),
        Box::new(map(parse_description(), CaseBody::Description)),
        Box::new(map(parse_reference(), CaseBody::Reference)),
        Box::new(map(parse_data_def(), CaseBody::DataDef)),
        Box::new(map(parse_unknown(), CaseBody::Unknown)),
    ])
}

pub fn parse_case() -> impl Parser<Token, CaseStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Case)), identifier_arg()),
                stmt_body(case_body()),
            ),
            |(name, body)| CaseStmt { name, body },
        ),
        "case statement",
    )
}

fn any_body() -> impl Parser<Token, AnyBody> {
    choice(vec![
        Box::new(map(parse_when(), AnyBody::When)),
        Box::new(map(parse_if_feature(), AnyBody::IfFeature)),
        Box::new(map(parse_must(), AnyBody::Must)),
        Box::new(map(parse_config(), AnyBody::Config)),
        Box::new(map(parse_mandatory(), AnyBody::Mandatory)),
        Box::new(map(parse_status(), AnyBody::Status)),
        Box::new(map(parse_description(), AnyBody::Description)),
        Box::new(map(parse_reference(), AnyBody::Reference)),
        Box::new(map(parse_unknown(), AnyBody::Unknown)),
    ])
}

pub fn parse_anydata() -> impl Parser<Token, AnydataStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Anydata)), identifier_arg()),
                stmt_body(any_body()),
            ),
            |(name, body)| AnydataStmt { name, body },
        ),
        "anydata statement",
    )
}

pub fn parse_anyxml() -> impl Parser<Token, AnyxmlStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Anyxml)), identifier_arg()),
                stmt_body(any_body()),
            ),
            |(name, body)| AnyxmlStmt { name, body },
        ),
        "anyxml statement",
    )
}

fn uses_body() -> impl Parser<Token, UsesBody> {
    choice(vec![
        Box::new(map(parse_when(), UsesBody::When)),
        Box::new(map(parse_if_feature(), UsesBody::IfFeature)),
        Box::new(map(parse_status(), UsesBody::Status)),
        Box::new(map(parse_description(), UsesBody::Description)),
        Box::new(map(parse_reference(), UsesBody::Reference)),
        Box::new(map(lazy(parse_refine), UsesBody::Refine)),
        Box::new(map(lazy(parse_augment), UsesBody::Augment)),
        Box::new(map(parse_unknown(), UsesBody::Unknown)),
    ])
}

pub fn parse_uses() -> impl Parser<Token, UsesStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Uses)), identifier_ref_arg()),
                stmt_body(uses_body()),
            ),
            |(name, body)| UsesStmt { name, body },
        ),
        "uses statement",
    )
}

fn refine_body() -> impl Parser<Token, RefineBody> {
    choice(vec![
        Box::new(map(parse_if_feature(), RefineBody::IfFeature)),
        Box::new(map(parse_must(), RefineBody::Must)),
        Box::new(map(parse_presence(), RefineBody::Presence)),
        Box::new(map(parse_default(), RefineBody::Default)),
        Box::new(map(parse_config(), RefineBody::Config)),
        Box::new(map(parse_mandatory(), RefineBody::Mandatory)),
        Box::new(map(parse_min_elements(), RefineBody::MinElements)),
        Box::new(map(parse_max_elements(), RefineBody::MaxElements)),
        Box::new(map(parse_description(), RefineBody::Description)),
        Box::new(map(parse_reference(), RefineBody::Reference)),
        Box::new(map(parse_unknown(), RefineBody::Unknown)),
    ])
}

/// `refine`: the argument is a descendant schema node path, kept verbatim.
pub fn parse_refine() -> impl Parser<Token, RefineStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Refine)), string_arg()),
                stmt_body(refine_body()),
            ),
            |(target, body)| RefineStmt { target, body },
        ),
        "refine statement",
    )
}

fn grouping_body() -> impl Parser<Token, GroupingBody> {
    choice(vec![
        Box::new(map(parse_status(), GroupingBody::Status)),
        Box::new(map(parse_description(), GroupingBody::Description)),
        Box::new(map(parse_reference(), GroupingBody::Reference)),
        Box::new(map(parse_typedef(), GroupingBody::Typedef)),
        Box::new(map(lazy(parse_grouping), GroupingBody::Grouping)),
        Box::new(map(parse_data_def(), GroupingBody::DataDef)),
        Box::new(map(lazy(parse_action), GroupingBody::Action)),
        Box::new(map(lazy(parse_notification), GroupingBody::Notification)),
        Box::new(map(parse_unknown(), GroupingBody::Unknown)),
    ])
}

pub fn parse_grouping() -> impl Parser<Token, GroupingStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Grouping)), identifier_arg()),
                stmt_body(grouping_body()),
            ),
            |(name, body)| GroupingStmt { name, body },
        ),
        "grouping statement",
    )
}

fn augment_body() -> impl Parser<Token, AugmentBody> {
    choice(vec![
        Box::new(map(parse_when(), AugmentBody::When)),
        Box::new(map(parse_if_feature(), AugmentBody::IfFeature)),
        Box::new(map(parse_status(), AugmentBody::Status)),
        Box::new(map(parse_description(), AugmentBody::Description)),
        Box::new(map(parse_reference(), AugmentBody::Reference)),
        Box::new(map(parse_data_def(), AugmentBody::DataDef)),
        Box::new(map(lazy(parse_case), AugmentBody::Case)),
        Box::new(map(lazy(parse_action), AugmentBody::Action)),
        Box::new(map(lazy(parse_notification), AugmentBody::Notification)),
        Box::new(map(parse_unknown(), AugmentBody::Unknown)),
    ])
}

/// `augment`: the argument is a schema node path, kept verbatim.
pub fn parse_augment() -> impl Parser<Token, AugmentStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Augment)), string_arg()),
                stmt_body(augment_body()),
            ),
            |(target, body)| AugmentStmt { target, body },
        ),
        "augment statement",
    )
}
