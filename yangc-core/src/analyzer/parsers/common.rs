//! Meta statements and the small constraint statements shared across many
//! bodies: descriptions, references, config/mandatory/status flags, list
//! cardinalities, `must` and `when`.

use crate::analyzer::core::Parser;
use crate::analyzer::prelude::*;
use crate::ast::*;
use crate::tokenizer::keyword::Keyword;
use crate::tokenizer::token::Token;

use super::primitives::{
    bool_arg, extension_block, key_arg, keyword, max_elements_arg, ordered_by_arg, status_arg,
    stmt_body, string_arg, uint64_arg, unique_arg,
};
use super::unknown::parse_unknown;

pub fn parse_organization() -> impl Parser<Token, OrganizationStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Organization)), string_arg()),
                extension_block(),
            ),
            |(text, extensions)| OrganizationStmt { text, extensions },
        ),
        "organization statement",
    )
}

pub fn parse_contact() -> impl Parser<Token, ContactStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Contact)), string_arg()),
                extension_block(),
            ),
            |(text, extensions)| ContactStmt { text, extensions },
        ),
        "contact statement",
    )
}

pub fn parse_description() -> impl Parser<Token, DescriptionStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Description)), string_arg()),
                extension_block(),
            ),
            |(text, extensions)| DescriptionStmt { text, extensions },
        ),
        "description statement",
    )
}

pub fn parse_reference() -> impl Parser<Token, ReferenceStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Reference)), string_arg()),
                extension_block(),
            ),
            |(text, extensions)| ReferenceStmt { text, extensions },
        ),
        "reference statement",
    )
}

pub fn parse_units() -> impl Parser<Token, UnitsStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Units)), string_arg()),
                extension_block(),
            ),
            |(name, extensions)| UnitsStmt { name, extensions },
        ),
        "units statement",
    )
}

pub fn parse_presence() -> impl Parser<Token, PresenceStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Presence)), string_arg()),
                extension_block(),
            ),
            |(text, extensions)| PresenceStmt { text, extensions },
        ),
        "presence statement",
    )
}

pub fn parse_default() -> impl Parser<Token, DefaultStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Default)), string_arg()),
                extension_block(),
            ),
            |(value, extensions)| DefaultStmt { value, extensions },
        ),
        "default statement",
    )
}

pub fn parse_config() -> impl Parser<Token, ConfigStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Config)), bool_arg()),
                extension_block(),
            ),
            |(value, extensions)| ConfigStmt { value, extensions },
        ),
        "config statement",
    )
}

pub fn parse_mandatory() -> impl Parser<Token, MandatoryStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Mandatory)), bool_arg()),
                extension_block(),
            ),
            |(value, extensions)| MandatoryStmt { value, extensions },
        ),
        "mandatory statement",
    )
}

pub fn parse_status() -> impl Parser<Token, StatusStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Status)), status_arg()),
                extension_block(),
            ),
            |(status, extensions)| StatusStmt { status, extensions },
        ),
        "status statement",
    )
}

pub fn parse_ordered_by() -> impl Parser<Token, OrderedByStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::OrderedBy)), ordered_by_arg()),
                extension_block(),
            ),
            |(order, extensions)| OrderedByStmt { order, extensions },
        ),
        "ordered-by statement",
    )
}

pub fn parse_min_elements() -> impl Parser<Token, MinElementsStmt> {
    with_context(
        map(
            tuple2(
                preceded(
                    as_unit(keyword(Keyword::MinElements)),
                    uint64_arg("min-elements"),
                ),
                extension_block(),
            ),
            |(count, extensions)| MinElementsStmt { count, extensions },
        ),
        "min-elements statement",
    )
}

pub fn parse_max_elements() -> impl Parser<Token, MaxElementsStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::MaxElements)), max_elements_arg()),
                extension_block(),
            ),
            |(count, extensions)| MaxElementsStmt { count, extensions },
        ),
        "max-elements statement",
    )
}

pub fn parse_key() -> impl Parser<Token, KeyStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Key)), key_arg()),
                extension_block(),
            ),
            |(keys, extensions)| KeyStmt { keys, extensions },
        ),
        "key statement",
    )
}

pub fn parse_unique() -> impl Parser<Token, UniqueStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Unique)), unique_arg()),
                extension_block(),
            ),
            |(paths, extensions)| UniqueStmt { paths, extensions },
        ),
        "unique statement",
    )
}

pub fn parse_if_feature() -> impl Parser<Token, IfFeatureStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::IfFeature)), string_arg()),
                extension_block(),
            ),
            |(expr, extensions)| IfFeatureStmt { expr, extensions },
        ),
        "if-feature statement",
    )
}

pub fn parse_error_message() -> impl Parser<Token, ErrorMessageStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::ErrorMessage)), string_arg()),
                extension_block(),
            ),
            |(text, extensions)| ErrorMessageStmt { text, extensions },
        ),
        "error-message statement",
    )
}

pub fn parse_error_app_tag() -> impl Parser<Token, ErrorAppTagStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::ErrorAppTag)), string_arg()),
                extension_block(),
            ),
            |(tag, extensions)| ErrorAppTagStmt { tag, extensions },
        ),
        "error-app-tag statement",
    )
}

fn must_body() -> impl Parser<Token, MustBody> {
    choice(vec![
        Box::new(map(parse_error_message(), MustBody::ErrorMessage)),
        Box::new(map(parse_error_app_tag(), MustBody::ErrorAppTag)),
        Box::new(map(parse_description(), MustBody::Description)),
        Box::new(map(parse_reference(), MustBody::Reference)),
        Box::new(map(parse_unknown(), MustBody::Unknown)),
    ])
}

/// `must`: the argument is an XPath string, often a multi-line
/// `+`-concatenated one; it is carried verbatim.
pub fn parse_must() -> impl Parser<Token, MustStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Must)), string_arg()),
                stmt_body(must_body()),
            ),
            |(condition, body)| MustStmt { condition, body },
        ),
        "must statement",
    )
}

fn when_body() -> impl Parser<Token, WhenBody> {
    choice(vec![
        Box::new(map(parse_description(), WhenBody::Description)),
        Box::new(map(parse_reference(), WhenBody::Reference)),
        Box::new(map(parse_unknown(), WhenBody::Unknown)),
    ])
}

pub fn parse_when() -> impl Parser<Token, WhenStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::When)), string_arg()),
                stmt_body(when_body()),
            ),
            |(condition, body)| WhenStmt { condition, body },
        ),
        "when statement",
    )
}
