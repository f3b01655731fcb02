//! Module-level records produced by the aggregator.
//!
//! A parsed `module` or `submodule` statement stream is partitioned in
//! source order into header, linkage, meta, revision and body sections.
//! Unknown statements are attached to whichever section was current when
//! they appeared.

use super::stmt::{
    AugmentStmt, BelongsToStmt, ContactStmt, DataDefStmt, DescriptionStmt, DeviationStmt,
    ExtensionStmt, FeatureStmt, GroupingStmt, IdentityStmt, ImportStmt, IncludeStmt,
    NotificationStmt, OrganizationStmt, ReferenceStmt, RevisionStmt, RpcStmt, TypedefStmt,
    UnknownStmt,
};
use super::types::{Identifier, Uri, Version};

/// The `yang-version` / `namespace` / `prefix` header of a module.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModuleHeader {
    pub version: Option<Version>,
    pub namespace: Option<Uri>,
    pub prefix: Option<Identifier>,
    pub extensions: Vec<UnknownStmt>,
}

/// The `yang-version` / `belongs-to` header of a submodule.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubmoduleHeader {
    pub version: Option<Version>,
    pub belongs_to: Option<BelongsToStmt>,
    pub extensions: Vec<UnknownStmt>,
}

/// An `import` or `include` in the linkage section.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkageStmt {
    Import(ImportStmt),
    Include(IncludeStmt),
    Unknown(UnknownStmt),
}

/// Organization, contact, description and reference of a (sub)module.
///
/// The grammar admits repetitions; the aggregator keeps the first occurrence
/// of each and logs later ones.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Meta {
    pub organization: Option<OrganizationStmt>,
    pub contact: Option<ContactStmt>,
    pub description: Option<DescriptionStmt>,
    pub reference: Option<ReferenceStmt>,
    pub extensions: Vec<UnknownStmt>,
}

/// A top-level body statement of a module or submodule.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyStmt {
    Extension(ExtensionStmt),
    Feature(FeatureStmt),
    Identity(IdentityStmt),
    Typedef(TypedefStmt),
    Grouping(GroupingStmt),
    DataDef(DataDefStmt),
    Augment(AugmentStmt),
    Rpc(RpcStmt),
    Notification(NotificationStmt),
    Deviation(DeviationStmt),
    Unknown(UnknownStmt),
}

/// A fully aggregated `module`.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    pub name: Identifier,
    pub header: ModuleHeader,
    pub linkage: Vec<LinkageStmt>,
    pub meta: Meta,
    pub revisions: Vec<RevisionStmt>,
    pub body: Vec<BodyStmt>,
}

/// A fully aggregated `submodule`.
#[derive(Debug, Clone, PartialEq)]
pub struct Submodule {
    pub name: Identifier,
    pub header: SubmoduleHeader,
    pub linkage: Vec<LinkageStmt>,
    pub meta: Meta,
    pub revisions: Vec<RevisionStmt>,
    pub body: Vec<BodyStmt>,
}

impl Module {
    /// Top-level typedef lookup by name.
    pub fn find_typedef(&self, name: &str) -> Option<&TypedefStmt> {
        self.body.iter().find_map(|stmt| match stmt {
            BodyStmt::Typedef(t) if t.name.as_str() == name => Some(t),
            _ => None,
        })
    }

    /// Top-level grouping lookup by name.
    pub fn find_grouping(&self, name: &str) -> Option<&GroupingStmt> {
        self.body.iter().find_map(|stmt| match stmt {
            BodyStmt::Grouping(g) if g.name.as_str() == name => Some(g),
            _ => None,
        })
    }
}
