//! The type system: `type`, its restriction body, and `typedef`.
//!
//! Which restrictions are meaningful depends on the named base type
//! (numeric range, string length/pattern, enum, bits, leafref path,
//! identityref base, union member types); the grammar admits the full
//! alternation and leaves semantic pairing to later passes.

use crate::analyzer::core::Parser;
use crate::analyzer::prelude::*;
use crate::ast::*;
use crate::tokenizer::keyword::Keyword;
use crate::tokenizer::token::Token;

use super::common::{
    parse_default, parse_description, parse_error_app_tag, parse_error_message, parse_if_feature,
    parse_reference, parse_status, parse_units,
};
use super::primitives::{
    bool_arg, extension_block, identifier_arg, identifier_ref_arg, int64_arg, keyword,
    modifier_arg, path_arg, range_arg, stmt_body, string_arg, uint64_arg, uint8_arg,
};
use super::unknown::parse_unknown;

fn error_info_body() -> impl Parser<Token, ErrorInfoBody> {
    choice(vec![
        Box::new(map(parse_error_message(), ErrorInfoBody::ErrorMessage)),
        Box::new(map(parse_error_app_tag(), ErrorInfoBody::ErrorAppTag)),
        Box::new(map(parse_description(), ErrorInfoBody::Description)),
        Box::new(map(parse_reference(), ErrorInfoBody::Reference)),
        Box::new(map(parse_unknown(), ErrorInfoBody::Unknown)),
    ])
}

pub fn parse_range() -> impl Parser<Token, RangeStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Range)), range_arg()),
                stmt_body(error_info_body()),
            ),
            |(ranges, body)| RangeStmt { ranges, body },
        ),
        "range statement",
    )
}

pub fn parse_length() -> impl Parser<Token, LengthStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Length)), range_arg()),
                stmt_body(error_info_body()),
            ),
            |(lengths, body)| LengthStmt { lengths, body },
        ),
        "length statement",
    )
}

pub fn parse_modifier() -> impl Parser<Token, ModifierStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Modifier)), modifier_arg()),
                extension_block(),
            ),
            |(modifier, extensions)| ModifierStmt {
                modifier,
                extensions,
            },
        ),
        "modifier statement",
    )
}

fn pattern_body() -> impl Parser<Token, PatternBody> {
    choice(vec![
        Box::new(map(parse_modifier(), PatternBody::Modifier)),
        Box::new(map(parse_error_message(), PatternBody::ErrorMessage)),
        Box::new(map(parse_error_app_tag(), PatternBody::ErrorAppTag)),
        Box::new(map(parse_description(), PatternBody::Description)),
        Box::new(map(parse_reference(), PatternBody::Reference)),
        Box::new(map(parse_unknown(), PatternBody::Unknown)),
    ])
}

pub fn parse_pattern() -> impl Parser<Token, PatternStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Pattern)), string_arg()),
                stmt_body(pattern_body()),
            ),
            |(pattern, body)| PatternStmt { pattern, body },
        ),
        "pattern statement",
    )
}

pub fn parse_fraction_digits() -> impl Parser<Token, FractionDigitsStmt> {
    with_context(
        map(
            tuple2(
                preceded(
                    as_unit(keyword(Keyword::FractionDigits)),
                    uint8_arg("fraction-digits"),
                ),
                extension_block(),
            ),
            |(digits, extensions)| FractionDigitsStmt { digits, extensions },
        ),
        "fraction-digits statement",
    )
}

pub fn parse_value() -> impl Parser<Token, ValueStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Value)), int64_arg("value")),
                extension_block(),
            ),
            |(value, extensions)| ValueStmt { value, extensions },
        ),
        "value statement",
    )
}

fn enum_body() -> impl Parser<Token, EnumBody> {
    choice(vec![
        Box::new(map(parse_if_feature(), EnumBody::IfFeature)),
        Box::new(map(parse_value(), EnumBody::Value)),
        Box::new(map(parse_status(), EnumBody::Status)),
        Box::new(map(parse_description(), EnumBody::Description)),
        Box::new(map(parse_reference(), EnumBody::Reference)),
        Box::new(map(parse_unknown(), EnumBody::Unknown)),
    ])
}

/// `enum`: the argument is an arbitrary (non-empty in practice) string, not
/// an identifier.
pub fn parse_enum() -> impl Parser<Token, EnumStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Enum)), string_arg()),
                stmt_body(enum_body()),
            ),
            |(name, body)| EnumStmt { name, body },
        ),
        "enum statement",
    )
}

pub fn parse_position() -> impl Parser<Token, PositionStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Position)), uint64_arg("position")),
                extension_block(),
            ),
            |(position, extensions)| PositionStmt {
                position,
                extensions,
            },
        ),
        "position statement",
    )
}

fn bit_body() -> impl Parser<Token, BitBody> {
    choice(vec![
        Box::new(map(parse_if_feature(), BitBody::IfFeature)),
        Box::new(map(parse_position(), BitBody::Position)),
        Box::new(map(parse_status(), BitBody::Status)),
        Box::new(map(parse_description(), BitBody::Description)),
        Box::new(map(parse_reference(), BitBody::Reference)),
        Box::new(map(parse_unknown(), BitBody::Unknown)),
    ])
}

pub fn parse_bit() -> impl Parser<Token, BitStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Bit)), identifier_arg()),
                stmt_body(bit_body()),
            ),
            |(name, body)| BitStmt { name, body },
        ),
        "bit statement",
    )
}

pub fn parse_path() -> impl Parser<Token, PathStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Path)), path_arg()),
                extension_block(),
            ),
            |(path, extensions)| PathStmt { path, extensions },
        ),
        "path statement",
    )
}

pub fn parse_require_instance() -> impl Parser<Token, RequireInstanceStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::RequireInstance)), bool_arg()),
                extension_block(),
            ),
            |(value, extensions)| RequireInstanceStmt { value, extensions },
        ),
        "require-instance statement",
    )
}

pub fn parse_base() -> impl Parser<Token, BaseStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Base)), identifier_ref_arg()),
                extension_block(),
            ),
            |(name, extensions)| BaseStmt { name, extensions },
        ),
        "base statement",
    )
}

fn type_body() -> impl Parser<Token, TypeBody> {
    choice(vec![
        Box::new(map(parse_range(), TypeBody::Range)),
        Box::new(map(parse_fraction_digits(), TypeBody::FractionDigits)),
        Box::new(map(parse_length(), TypeBody::Length)),
        Box::new(map(parse_pattern(), TypeBody::Pattern)),
        Box::new(map(parse_enum(), TypeBody::Enum)),
        Box::new(map(parse_bit(), TypeBody::Bit)),
        Box::new(map(parse_path(), TypeBody::Path)),
        Box::new(map(parse_require_instance(), TypeBody::RequireInstance)),
        Box::new(map(parse_base(), TypeBody::Base)),
        Box::new(map(lazy(parse_type), TypeBody::Type)),
        Box::new(map(parse_unknown(), TypeBody::Unknown)),
    ])
}

/// `type`: the argument names a built-in or derived type; union member
/// types nest recursively in the body.
pub fn parse_type() -> impl Parser<Token, TypeStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Type)), identifier_ref_arg()),
                stmt_body(type_body()),
            ),
            |(name, body)| TypeStmt { name, body },
        ),
        "type statement",
    )
}

fn typedef_body() -> impl Parser<Token, TypedefBody> {
    choice(vec![
        Box::new(map(parse_type(), TypedefBody::Type)),
        Box::new(map(parse_units(), TypedefBody::Units)),
        Box::new(map(parse_default(), TypedefBody::Default)),
        Box::new(map(parse_status(), TypedefBody::Status)),
        Box::new(map(parse_description(), TypedefBody::Description)),
        Box::new(map(parse_reference(), TypedefBody::Reference)),
        Box::new(map(parse_unknown(), TypedefBody::Unknown)),
    ])
}

pub fn parse_typedef() -> impl Parser<Token, TypedefStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Typedef)), identifier_arg()),
                stmt_body(typedef_body()),
            ),
            |(name, body)| TypedefStmt { name, body },
        ),
        "typedef statement",
    )
}
