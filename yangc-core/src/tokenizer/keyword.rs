//! The RFC 7950 statement keywords.
//!
//! Keywords are not a separate token class: they share lexical space with
//! identifiers and unquoted arguments, so atoms are matched against
//! [`Keyword`] by the statement parsers, case-sensitively and only in
//! keyword position. `strum` provides the kebab-case string mapping in both
//! directions.

use std::str::FromStr;

/// Every concrete statement keyword of the YANG statement grammar.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Keyword {
    Action,
    Anydata,
    Anyxml,
    Argument,
    Augment,
    Base,
    BelongsTo,
    Bit,
    Case,
    Choice,
    Config,
    Contact,
    Container,
    Default,
    Description,
    Deviate,
    Deviation,
    Enum,
    ErrorAppTag,
    ErrorMessage,
    Extension,
    Feature,
    FractionDigits,
    Grouping,
    Identity,
    IfFeature,
    Import,
    Include,
    Input,
    Key,
    Leaf,
    LeafList,
    Length,
    List,
    Mandatory,
    MaxElements,
    MinElements,
    Modifier,
    Module,
    Must,
    Namespace,
    Notification,
    OrderedBy,
    Organization,
    Output,
    Path,
    Pattern,
    Position,
    Prefix,
    Presence,
    Range,
    Reference,
    Refine,
    RequireInstance,
    Revision,
    RevisionDate,
    Rpc,
    Status,
    Submodule,
    Type,
    Typedef,
    Unique,
    Units,
    Uses,
    Value,
    When,
    YangVersion,
    YinElement,
}

impl Keyword {
    /// Matches an unquoted atom against the keyword table. Exact and
    /// case-sensitive; `leaf-listx` is not a keyword, and neither is `Leaf`.
    pub fn from_atom(atom: &str) -> Option<Keyword> {
        Keyword::from_str(atom).ok()
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_all_keywords_round_trip() {
        for keyword in Keyword::iter() {
            let text = keyword.to_string();
            assert_eq!(Keyword::from_atom(&text), Some(keyword), "{text}");
        }
    }

    #[test]
    fn test_kebab_case_spelling() {
        assert_eq!(Keyword::LeafList.to_string(), "leaf-list");
        assert_eq!(Keyword::YangVersion.to_string(), "yang-version");
        assert_eq!(Keyword::BelongsTo.to_string(), "belongs-to");
        assert_eq!(Keyword::ErrorAppTag.to_string(), "error-app-tag");
    }

    #[test]
    fn test_non_keywords_rejected() {
        for atom in ["leaflist", "Leaf", "leaf-listx", "string", "tailf:info"] {
            assert_eq!(Keyword::from_atom(atom), None, "{atom}");
        }
    }
}
