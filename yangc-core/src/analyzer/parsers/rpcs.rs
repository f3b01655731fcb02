//! Operations and notifications: `rpc`, `action`, `input`, `output`,
//! `notification`.

use crate::analyzer::core::Parser;
use crate::analyzer::prelude::*;
use crate::ast::*;
use crate::tokenizer::keyword::Keyword;
use crate::tokenizer::token::Token;

use super::common::{parse_description, parse_if_feature, parse_must, parse_reference, parse_status};
use super::data::{parse_data_def, parse_grouping};
use super::primitives::{identifier_arg, keyword, stmt_body};
use super::types::parse_typedef;
use super::unknown::parse_unknown;

fn operation_body() -> impl Parser<Token, OperationBody> {
    choice(vec![
        Box::new(map(parse_if_feature(), OperationBody::IfFeature)),
        Box::new(map(parse_status(), OperationBody::Status)),
        Box::new(map(parse_description(), OperationBody::Description)),
        Box::new(map(parse_reference(), OperationBody::Reference)),
        Box::new(map(parse_typedef(), OperationBody::Typedef)),
        Box::new(map(lazy(parse_grouping), OperationBody::Grouping)),
        Box::new(map(lazy(parse_input), OperationBody::Input)),
        Box::new(map(lazy(parse_output), OperationBody::Output)),
        Box::new(map(parse_unknown(), OperationBody::Unknown)),
    ])
}

pub fn parse_rpc() -> impl Parser<Token, RpcStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Rpc)), identifier_arg()),
                stmt_body(operation_body()),
            ),
            |(name, body)| RpcStmt { name, body },
        ),
        "rpc statement",
    )
}

pub fn parse_action() -> impl Parser<Token, ActionStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Action)), identifier_arg()),
                stmt_body(operation_body()),
            ),
            |(name, body)| ActionStmt { name, body },
        ),
        "action statement",
    )
}

fn io_body() -> impl Parser<Token, IoBody> {
    choice(vec![
        Box::new(map(parse_must(), IoBody::Must)),
        Box::new(map(parse_typedef(), IoBody::Typedef)),
        Box::new(map(lazy(parse_grouping), IoBody::Grouping)),
        Box::new(map(parse_data_def(), IoBody::DataDef)),
        Box::new(map(parse_unknown(), IoBody::Unknown)),
    ])
}

/// `input` carries no argument.
pub fn parse_input() -> impl Parser<Token, InputStmt> {
    with_context(
        map(
            preceded(as_unit(keyword(Keyword::Input)), stmt_body(io_body())),
            |body| InputStmt { body },
        ),
        "input statement",
    )
}

/// `output` carries no argument.
pub fn parse_output() -> impl Parser<Token, OutputStmt> {
    with_context(
        map(
            preceded(as_unit(keyword(Keyword::Output)), stmt_body(io_body())),
            |body| OutputStmt { body },
        ),
        "output statement",
    )
}

fn notification_body() -> impl Parser<Token, NotificationBody> {
    choice(vec![
        Box::new(map(parse_if_feature(), NotificationBody::IfFeature)),
        Box::new(map(parse_must(), NotificationBody::Must)),
        Box::new(map(parse_status(), NotificationBody::Status)),
        Box::new(map(parse_description(), NotificationBody::Description)),
        Box::new(map(parse_reference(), NotificationBody::Reference)),
        Box::new(map(parse_typedef(), NotificationBody::Typedef)),
        Box::new(map(lazy(parse_grouping), NotificationBody::Grouping)),
        Box::new(map(parse_data_def(), NotificationBody::DataDef)),
        Box::new(map(parse_unknown(), NotificationBody::Unknown)),
    ])
}

pub fn parse_notification() -> impl Parser<Token, NotificationStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Notification)), identifier_arg()),
                stmt_body(notification_body()),
            ),
            |(name, body)| NotificationStmt { name, body },
        ),
        "notification statement",
    )
}
