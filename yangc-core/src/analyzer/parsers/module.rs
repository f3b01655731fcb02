//! Module and submodule parsing, the remaining top-level statements, and
//! the section aggregator.
//!
//! A `module name { … }` parses into its name plus an ordered item list;
//! [`aggregate_module`] then partitions the items into header, linkage,
//! meta, revisions and body, validating that the sections appear in that
//! order. Unknown statements attach to whichever section is current.

use thiserror::Error;

use crate::analyzer::core::Parser;
use crate::analyzer::prelude::*;
use crate::ast::module::{
    BodyStmt, LinkageStmt, Meta, Module, ModuleHeader, Submodule, SubmoduleHeader,
};
use crate::ast::types::Identifier;
use crate::ast::*;
use crate::tokenizer::keyword::Keyword;
use crate::tokenizer::token::Token;

use super::common::{
    parse_config, parse_contact, parse_default, parse_description, parse_error_app_tag,
    parse_error_message, parse_if_feature, parse_key, parse_mandatory, parse_max_elements,
    parse_min_elements, parse_must, parse_ordered_by, parse_organization, parse_presence,
    parse_reference, parse_status, parse_unique, parse_units, parse_when,
};
use super::data::{
    parse_augment, parse_case, parse_data_def, parse_grouping, parse_refine,
};
use super::primitives::{
    block, bool_arg, date_arg, deviate_kind_arg, extension_block, identifier_arg, keyword,
    stmt_body, string_arg, uri_arg, version_arg,
};
use super::rpcs::{parse_action, parse_input, parse_notification, parse_output, parse_rpc};
use super::types::{
    parse_base, parse_bit, parse_enum, parse_fraction_digits, parse_length, parse_modifier,
    parse_path, parse_pattern, parse_position, parse_range, parse_require_instance, parse_type,
    parse_typedef, parse_value,
};
use super::unknown::parse_unknown;

pub fn parse_yang_version() -> impl Parser<Token, YangVersionStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::YangVersion)), version_arg()),
                extension_block(),
            ),
            |(version, extensions)| YangVersionStmt {
                version,
                extensions,
            },
        ),
        "yang-version statement",
    )
}

pub fn parse_namespace() -> impl Parser<Token, NamespaceStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Namespace)), uri_arg()),
                extension_block(),
            ),
            |(uri, extensions)| NamespaceStmt { uri, extensions },
        ),
        "namespace statement",
    )
}

pub fn parse_prefix() -> impl Parser<Token, PrefixStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Prefix)), identifier_arg()),
                extension_block(),
            ),
            |(prefix, extensions)| PrefixStmt { prefix, extensions },
        ),
        "prefix statement",
    )
}

pub fn parse_revision_date() -> impl Parser<Token, RevisionDateStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::RevisionDate)), date_arg()),
                extension_block(),
            ),
            |(date, extensions)| RevisionDateStmt { date, extensions },
        ),
        "revision-date statement",
    )
}

fn import_body() -> impl Parser<Token, ImportBody> {
    choice(vec![
        Box::new(map(parse_prefix(), ImportBody::Prefix)),
        Box::new(map(parse_revision_date(), ImportBody::RevisionDate)),
        Box::new(map(parse_description(), ImportBody::Description)),
        Box::new(map(parse_reference(), ImportBody::Reference)),
        Box::new(map(parse_unknown(), ImportBody::Unknown)),
    ])
}

pub fn parse_import() -> impl Parser<Token, ImportStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Import)), identifier_arg()),
                stmt_body(import_body()),
            ),
            |(module, body)| ImportStmt { module, body },
        ),
        "import statement",
    )
}

fn include_body() -> impl Parser<Token, IncludeBody> {
    choice(vec![
        Box::new(map(parse_revision_date(), IncludeBody::RevisionDate)),
        Box::new(map(parse_description(), IncludeBody::Description)),
        Box::new(map(parse_reference(), IncludeBody::Reference)),
        Box::new(map(parse_unknown(), IncludeBody::Unknown)),
    ])
}

pub fn parse_include() -> impl Parser<Token, IncludeStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Include)), identifier_arg()),
                stmt_body(include_body()),
            ),
            |(submodule, body)| IncludeStmt { submodule, body },
        ),
        "include statement",
    )
}

fn belongs_to_body() -> impl Parser<Token, BelongsToBody> {
    choice(vec![
        Box::new(map(parse_prefix(), BelongsToBody::Prefix)),
        Box::new(map(parse_unknown(), BelongsToBody::Unknown)),
    ])
}

pub fn parse_belongs_to() -> impl Parser<Token, BelongsToStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::BelongsTo)), identifier_arg()),
                stmt_body(belongs_to_body()),
            ),
            |(module, body)| BelongsToStmt { module, body },
        ),
        "belongs-to statement",
    )
}

fn revision_body() -> impl Parser<Token, RevisionBody> {
    choice(vec![
        Box::new(map(parse_description(), RevisionBody::Description)),
        Box::new(map(parse_reference(), RevisionBody::Reference)),
        Box::new(map(parse_unknown(), RevisionBody::Unknown)),
    ])
}

pub fn parse_revision() -> impl Parser<Token, RevisionStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Revision)), date_arg()),
                stmt_body(revision_body()),
            ),
            |(date, body)| RevisionStmt { date, body },
        ),
        "revision statement",
    )
}

fn feature_body() -> impl Parser<Token, FeatureBody> {
    choice(vec![
        Box::new(map(parse_if_feature(), FeatureBody::IfFeature)),
        Box::new(map(parse_status(), FeatureBody::Status)),
        Box::new(map(parse_description(), FeatureBody::Description)),
        Box::new(map(parse_reference(), FeatureBody::Reference)),
        Box::new(map(parse_unknown(), FeatureBody::Unknown)),
    ])
}

pub fn parse_feature() -> impl Parser<Token, FeatureStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Feature)), identifier_arg()),
                stmt_body(feature_body()),
            ),
            |(name, body)| FeatureStmt { name, body },
        ),
        "feature statement",
    )
}

fn identity_body() -> impl Parser<Token, IdentityBody> {
    choice(vec![
        Box::new(map(parse_if_feature(), IdentityBody::IfFeature)),
        Box::new(map(parse_base(), IdentityBody::Base)),
        Box::new(map(parse_status(), IdentityBody::Status)),
        Box::new(map(parse_description(), IdentityBody::Description)),
        Box::new(map(parse_reference(), IdentityBody::Reference)),
        Box::new(map(parse_unknown(), IdentityBody::Unknown)),
    ])
}

pub fn parse_identity() -> impl Parser<Token, IdentityStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Identity)), identifier_arg()),
                stmt_body(identity_body()),
            ),
            |(name, body)| IdentityStmt { name, body },
        ),
        "identity statement",
    )
}

pub fn parse_yin_element() -> impl Parser<Token, YinElementStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::YinElement)), bool_arg()),
                extension_block(),
            ),
            |(value, extensions)| YinElementStmt { value, extensions },
        ),
        "yin-element statement",
    )
}

fn argument_body() -> impl Parser<Token, ArgumentBody> {
    choice(vec![
        Box::new(map(parse_yin_element(), ArgumentBody::YinElement)),
        Box::new(map(parse_unknown(), ArgumentBody::Unknown)),
    ])
}

pub fn parse_argument() -> impl Parser<Token, ArgumentStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Argument)), identifier_arg()),
                stmt_body(argument_body()),
            ),
            |(name, body)| ArgumentStmt { name, body },
        ),
        "argument statement",
    )
}

fn extension_body() -> impl Parser<Token, ExtensionBody> {
    choice(vec![
        Box::new(map(parse_argument(), ExtensionBody::Argument)),
        Box::new(map(parse_status(), ExtensionBody::Status)),
        Box::new(map(parse_description(), ExtensionBody::Description)),
        Box::new(map(parse_reference(), ExtensionBody::Reference)),
        Box::new(map(parse_unknown(), ExtensionBody::Unknown)),
    ])
}

pub fn parse_extension() -> impl Parser<Token, ExtensionStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Extension)), identifier_arg()),
                stmt_body(extension_body()),
            ),
            |(name, body)| ExtensionStmt { name, body },
        ),
        "extension statement",
    )
}

fn deviate_body() -> impl Parser<Token, DeviateBody> {
    choice(vec![
        Box::new(map(parse_type(), DeviateBody::Type)),
        Box::new(map(parse_units(), DeviateBody::Units)),
        Box::new(map(parse_must(), DeviateBody::Must)),
        Box::new(map(parse_unique(), DeviateBody::Unique)),
        Box::new(map(parse_default(), DeviateBody::Default)),
        Box::new(map(parse_config(), DeviateBody::Config)),
        Box::new(map(parse_mandatory(), DeviateBody::Mandatory)),
        Box::new(map(parse_min_elements(), DeviateBody::MinElements)),
        Box::new(map(parse_max_elements(), DeviateBody::MaxElements)),
        Box::new(map(parse_unknown(), DeviateBody::Unknown)),
    ])
}

pub fn parse_deviate() -> impl Parser<Token, DeviateStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Deviate)), deviate_kind_arg()),
                stmt_body(deviate_body()),
            ),
            |(kind, body)| DeviateStmt { kind, body },
        ),
        "deviate statement",
    )
}

fn deviation_body() -> impl Parser<Token, DeviationBody> {
    choice(vec![
        Box::new(map(parse_description(), DeviationBody::Description)),
        Box::new(map(parse_reference(), DeviationBody::Reference)),
        Box::new(map(parse_deviate(), DeviationBody::Deviate)),
        Box::new(map(parse_unknown(), DeviationBody::Unknown)),
    ])
}

/// `deviation`: the argument is a schema node path, kept verbatim.
pub fn parse_deviation() -> impl Parser<Token, DeviationStmt> {
    with_context(
        map(
            tuple2(
                preceded(as_unit(keyword(Keyword::Deviation)), string_arg()),
                stmt_body(deviation_body()),
            ),
            |(target, body)| DeviationStmt { target, body },
        ),
        "deviation statement",
    )
}

/// A top-level body statement.
pub fn parse_body_stmt() -> impl Parser<Token, BodyStmt> {
    choice(vec![
        Box::new(map(parse_extension(), BodyStmt::Extension)),
        Box::new(map(parse_feature(), BodyStmt::Feature)),
        Box::new(map(parse_identity(), BodyStmt::Identity)),
        Box::new(map(parse_typedef(), BodyStmt::Typedef)),
        Box::new(map(parse_grouping(), BodyStmt::Grouping)),
        Box::new(map(parse_data_def(), BodyStmt::DataDef)),
        Box::new(map(parse_augment(), BodyStmt::Augment)),
        Box::new(map(parse_rpc(), BodyStmt::Rpc)),
        Box::new(map(parse_notification(), BodyStmt::Notification)),
        Box::new(map(parse_deviation(), BodyStmt::Deviation)),
    ])
}

/// One top-level item of a module or submodule, in source order.
#[derive(Debug, Clone, PartialEq)]
pub enum ModuleItem {
    YangVersion(YangVersionStmt),
    Namespace(NamespaceStmt),
    Prefix(PrefixStmt),
    BelongsTo(BelongsToStmt),
    Import(ImportStmt),
    Include(IncludeStmt),
    Organization(OrganizationStmt),
    Contact(ContactStmt),
    Description(DescriptionStmt),
    Reference(ReferenceStmt),
    Revision(RevisionStmt),
    Body(BodyStmt),
    Unknown(UnknownStmt),
}

fn module_item() -> impl Parser<Token, ModuleItem> {
    choice(vec![
        Box::new(map(parse_yang_version(), ModuleItem::YangVersion)),
        Box::new(map(parse_namespace(), ModuleItem::Namespace)),
        Box::new(map(parse_prefix(), ModuleItem::Prefix)),
        Box::new(map(parse_belongs_to(), ModuleItem::BelongsTo)),
        Box::new(map(parse_import(), ModuleItem::Import)),
        Box::new(map(parse_include(), ModuleItem::Include)),
        Box::new(map(parse_organization(), ModuleItem::Organization)),
        Box::new(map(parse_contact(), ModuleItem::Contact)),
        Box::new(map(parse_description(), ModuleItem::Description)),
        Box::new(map(parse_reference(), ModuleItem::Reference)),
        Box::new(map(parse_revision(), ModuleItem::Revision)),
        Box::new(map(parse_body_stmt(), ModuleItem::Body)),
        Box::new(map(parse_unknown(), ModuleItem::Unknown)),
    ])
}

/// Parses `module name { … }` into the name and raw item list.
pub fn parse_module_stmt() -> impl Parser<Token, (Identifier, Vec<ModuleItem>)> {
    with_context(
        tuple2(
            preceded(as_unit(keyword(Keyword::Module)), identifier_arg()),
            block(module_item()),
        ),
        "module statement",
    )
}

/// Parses `submodule name { … }` into the name and raw item list.
pub fn parse_submodule_stmt() -> impl Parser<Token, (Identifier, Vec<ModuleItem>)> {
    with_context(
        tuple2(
            preceded(as_unit(keyword(Keyword::Submodule)), identifier_arg()),
            block(module_item()),
        ),
        "submodule statement",
    )
}

/// Section-order violations and statements a (sub)module cannot carry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AggregateError {
    #[error("{keyword} statement out of order: {section} section already passed")]
    OutOfOrder {
        keyword: &'static str,
        section: &'static str,
    },
    #[error("{keyword} statement not allowed in {context}")]
    NotAllowed {
        keyword: &'static str,
        context: &'static str,
    },
}

#[derive(Clone, Copy, PartialEq, PartialOrd)]
enum Section {
    Header,
    Linkage,
    Meta,
    Revision,
    Body,
}

impl Section {
    fn name(self) -> &'static str {
        match self {
            Section::Header => "header",
            Section::Linkage => "linkage",
            Section::Meta => "meta",
            Section::Revision => "revision",
            Section::Body => "body",
        }
    }
}

struct Sections {
    current: Section,
    linkage: Vec<LinkageStmt>,
    meta: Meta,
    revisions: Vec<RevisionStmt>,
    body: Vec<BodyStmt>,
}

impl Sections {
    fn new() -> Self {
        Self {
            current: Section::Header,
            linkage: Vec::new(),
            meta: Meta::default(),
            revisions: Vec::new(),
            body: Vec::new(),
        }
    }

    fn enter(&mut self, keyword: &'static str, target: Section) -> Result<(), AggregateError> {
        if target < self.current {
            return Err(AggregateError::OutOfOrder {
                keyword,
                section: target.name(),
            });
        }
        self.current = target;
        Ok(())
    }

    fn attach_unknown(&mut self, header_extensions: &mut Vec<UnknownStmt>, unknown: UnknownStmt) {
        match self.current {
            Section::Header => header_extensions.push(unknown),
            Section::Linkage => self.linkage.push(LinkageStmt::Unknown(unknown)),
            Section::Meta => self.meta.extensions.push(unknown),
            Section::Revision | Section::Body => self.body.push(BodyStmt::Unknown(unknown)),
        }
    }
}

fn set_once<T>(slot: &mut Option<T>, keyword: &'static str, value: T) {
    if slot.is_none() {
        *slot = Some(value);
    } else {
        tracing::warn!(keyword, "duplicate statement ignored, keeping the first");
    }
}

fn fill_meta(
    sections: &mut Sections,
    item: ModuleItem,
    header_extensions: &mut Vec<UnknownStmt>,
) -> Result<(), AggregateError> {
    match item {
        ModuleItem::Organization(s) => {
            sections.enter("organization", Section::Meta)?;
            set_once(&mut sections.meta.organization, "organization", s);
        }
        ModuleItem::Contact(s) => {
            sections.enter("contact", Section::Meta)?;
            set_once(&mut sections.meta.contact, "contact", s);
        }
        ModuleItem::Description(s) => {
            sections.enter("description", Section::Meta)?;
            set_once(&mut sections.meta.description, "description", s);
        }
        ModuleItem::Reference(s) => {
            sections.enter("reference", Section::Meta)?;
            set_once(&mut sections.meta.reference, "reference", s);
        }
        ModuleItem::Import(s) => {
            sections.enter("import", Section::Linkage)?;
            sections.linkage.push(LinkageStmt::Import(s));
        }
        ModuleItem::Include(s) => {
            sections.enter("include", Section::Linkage)?;
            sections.linkage.push(LinkageStmt::Include(s));
        }
        ModuleItem::Revision(s) => {
            sections.enter("revision", Section::Revision)?;
            sections.revisions.push(s);
        }
        ModuleItem::Body(s) => {
            sections.enter("body statement", Section::Body)?;
            sections.body.push(s);
        }
        ModuleItem::Unknown(s) => sections.attach_unknown(header_extensions, s),
        // Header statements are handled by the callers.
        ModuleItem::YangVersion(_)
        | ModuleItem::Namespace(_)
        | ModuleItem::Prefix(_)
        | ModuleItem::BelongsTo(_) => unreachable!("header item reached section fill"),
    }
    Ok(())
}

/// Partitions a module's top-level items into the five sections.
pub fn aggregate_module(
    name: Identifier,
    items: Vec<ModuleItem>,
) -> Result<Module, AggregateError> {
    let mut header = ModuleHeader::default();
    let mut sections = Sections::new();

    for item in items {
        match item {
            ModuleItem::YangVersion(s) => {
                sections.enter("yang-version", Section::Header)?;
                set_once(&mut header.version, "yang-version", s.version);
                header.extensions.extend(s.extensions);
            }
            ModuleItem::Namespace(s) => {
                sections.enter("namespace", Section::Header)?;
                set_once(&mut header.namespace, "namespace", s.uri);
                header.extensions.extend(s.extensions);
            }
            ModuleItem::Prefix(s) => {
                sections.enter("prefix", Section::Header)?;
                set_once(&mut header.prefix, "prefix", s.prefix);
                header.extensions.extend(s.extensions);
            }
            ModuleItem::BelongsTo(_) => {
                return Err(AggregateError::NotAllowed {
                    keyword: "belongs-to",
                    context: "module",
                })
            }
            other => fill_meta(&mut sections, other, &mut header.extensions)?,
        }
    }

    Ok(Module {
        name,
        header,
        linkage: sections.linkage,
        meta: sections.meta,
        revisions: sections.revisions,
        body: sections.body,
    })
}

/// Partitions a submodule's top-level items into the five sections.
pub fn aggregate_submodule(
    name: Identifier,
    items: Vec<ModuleItem>,
) -> Result<Submodule, AggregateError> {
    let mut header = SubmoduleHeader::default();
    let mut sections = Sections::new();

    for item in items {
        match item {
            ModuleItem::YangVersion(s) => {
                sections.enter("yang-version", Section::Header)?;
                set_once(&mut header.version, "yang-version", s.version);
                header.extensions.extend(s.extensions);
            }
            ModuleItem::BelongsTo(s) => {
                sections.enter("belongs-to", Section::Header)?;
                set_once(&mut header.belongs_to, "belongs-to", s);
            }
            ModuleItem::Namespace(_) => {
                return Err(AggregateError::NotAllowed {
                    keyword: "namespace",
                    context: "submodule",
                })
            }
            ModuleItem::Prefix(_) => {
                return Err(AggregateError::NotAllowed {
                    keyword: "prefix",
                    context: "submodule",
                })
            }
            other => fill_meta(&mut sections, other, &mut header.extensions)?,
        }
    }

    Ok(Submodule {
        name,
        header,
        linkage: sections.linkage,
        meta: sections.meta,
        revisions: sections.revisions,
        body: sections.body,
    })
}

/// Any single statement, for partial-input parsing.
pub fn parse_statement() -> impl Parser<Token, Statement> {
    with_context(
        choice(vec![
            Box::new(map(parse_yang_version(), Statement::YangVersion)),
            Box::new(map(parse_namespace(), Statement::Namespace)),
            Box::new(map(parse_prefix(), Statement::Prefix)),
            Box::new(map(parse_import(), Statement::Import)),
            Box::new(map(parse_include(), Statement::Include)),
            Box::new(map(parse_belongs_to(), Statement::BelongsTo)),
            Box::new(map(parse_organization(), Statement::Organization)),
            Box::new(map(parse_contact(), Statement::Contact)),
            Box::new(map(parse_description(), Statement::Description)),
            Box::new(map(parse_reference(), Statement::Reference)),
            Box::new(map(parse_revision_date(), Statement::RevisionDate)),
            Box::new(map(parse_revision(), Statement::Revision)),
            Box::new(map(parse_extension(), Statement::Extension)),
            Box::new(map(parse_argument(), Statement::Argument)),
            Box::new(map(parse_yin_element(), Statement::YinElement)),
            Box::new(map(parse_feature(), Statement::Feature)),
            Box::new(map(parse_identity(), Statement::Identity)),
            Box::new(map(parse_base(), Statement::Base)),
            Box::new(map(parse_typedef(), Statement::Typedef)),
            Box::new(map(parse_type(), Statement::Type)),
            Box::new(map(parse_range(), Statement::Range)),
            Box::new(map(parse_length(), Statement::Length)),
            Box::new(map(parse_pattern(), Statement::Pattern)),
            Box::new(map(parse_modifier(), Statement::Modifier)),
            Box::new(map(parse_fraction_digits(), Statement::FractionDigits)),
            Box::new(map(parse_enum(), Statement::Enum)),
            Box::new(map(parse_value(), Statement::Value)),
            Box::new(map(parse_bit(), Statement::Bit)),
            Box::new(map(parse_position(), Statement::Position)),
            Box::new(map(parse_path(), Statement::Path)),
            Box::new(map(parse_require_instance(), Statement::RequireInstance)),
            Box::new(map(parse_units(), Statement::Units)),
            Box::new(map(parse_default(), Statement::Default)),
            Box::new(map(parse_config(), Statement::Config)),
            Box::new(map(parse_mandatory(), Statement::Mandatory)),
            Box::new(map(parse_presence(), Statement::Presence)),
            Box::new(map(parse_status(), Statement::Status)),
            Box::new(map(parse_ordered_by(), Statement::OrderedBy)),
            Box::new(map(parse_min_elements(), Statement::MinElements)),
            Box::new(map(parse_max_elements(), Statement::MaxElements)),
            Box::new(map(parse_key(), Statement::Key)),
            Box::new(map(parse_unique(), Statement::Unique)),
            Box::new(map(parse_if_feature(), Statement::IfFeature)),
            Box::new(map(parse_error_message(), Statement::ErrorMessage)),
            Box::new(map(parse_error_app_tag(), Statement::ErrorAppTag)),
            Box::new(map(parse_must(), Statement::Must)),
            Box::new(map(parse_when(), Statement::When)),
            Box::new(map(parse_grouping(), Statement::Grouping)),
            Box::new(map(parse_data_def(), Statement::DataDef)),
            Box::new(map(parse_case(), Statement::Case)),
            Box::new(map(parse_refine(), Statement::Refine)),
            Box::new(map(parse_augment(), Statement::Augment)),
            Box::new(map(parse_rpc(), Statement::Rpc)),
            Box::new(map(parse_action(), Statement::Action)),
            Box::new(map(parse_input(), Statement::Input)),
            Box::new(map(parse_output(), Statement::Output)),
            Box::new(map(parse_notification(), Statement::Notification)),
            Box::new(map(parse_deviation(), Statement::Deviation)),
            Box::new(map(parse_deviate(), Statement::Deviate)),
            Box::new(map(parse_unknown(), Statement::Unknown)),
        ]),
        "statement",
    )
}
