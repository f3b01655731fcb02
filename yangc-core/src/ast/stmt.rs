//! Typed statement nodes.
//!
//! Every RFC 7950 keyword owns a struct whose argument field carries the
//! semantically appropriate type and whose body enum lists that keyword's
//! legal child statements. Every body enum ends in an `Unknown` branch so
//! vendor extensions survive anywhere. Cardinality is not enforced here:
//! bodies are ordered sequences exactly as they appeared in the source.

use super::types::{
    Date, DeviateKind, Identifier, IdentifierRef, MaxElementsValue, Modifier, OrderedBy, PathExpr,
    PrefixedIdentifier, RangeExpr, Status, Uri, Version,
};

/// A statement whose keyword bears a prefix, i.e. a vendor extension.
/// Preserved verbatim: `(prefix:keyword, optional argument, optional body)`.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownStmt {
    pub id: PrefixedIdentifier,
    pub arg: Option<String>,
    pub body: Option<Vec<GenericStmt>>,
}

/// The fallback "any valid YANG statement" shape:
/// `keyword [argument] (";" | "{" body "}")`.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericStmt {
    pub keyword: String,
    pub arg: Option<String>,
    pub body: Option<Vec<GenericStmt>>,
}

// ---------------------------------------------------------------------------
// Header, linkage, meta, revision
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct YangVersionStmt {
    pub version: Version,
    pub extensions: Vec<UnknownStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NamespaceStmt {
    pub uri: Uri,
    pub extensions: Vec<UnknownStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrefixStmt {
    pub prefix: Identifier,
    pub extensions: Vec<UnknownStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportStmt {
    pub module: Identifier,
    pub body: Vec<ImportBody>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ImportBody {
    Prefix(PrefixStmt),
    RevisionDate(RevisionDateStmt),
    Description(DescriptionStmt),
    Reference(ReferenceStmt),
    Unknown(UnknownStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct IncludeStmt {
    pub submodule: Identifier,
    pub body: Vec<IncludeBody>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum IncludeBody {
    RevisionDate(RevisionDateStmt),
    Description(DescriptionStmt),
    Reference(ReferenceStmt),
    Unknown(UnknownStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BelongsToStmt {
    pub module: Identifier,
    pub body: Vec<BelongsToBody>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BelongsToBody {
    Prefix(PrefixStmt),
    Unknown(UnknownStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrganizationStmt {
    pub text: String,
    pub extensions: Vec<UnknownStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactStmt {
    pub text: String,
    pub extensions: Vec<UnknownStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DescriptionStmt {
    pub text: String,
    pub extensions: Vec<UnknownStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceStmt {
    pub text: String,
    pub extensions: Vec<UnknownStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevisionStmt {
    pub date: Date,
    pub body: Vec<RevisionBody>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RevisionBody {
    Description(DescriptionStmt),
    Reference(ReferenceStmt),
    Unknown(UnknownStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevisionDateStmt {
    pub date: Date,
    pub extensions: Vec<UnknownStmt>,
}

// ---------------------------------------------------------------------------
// Small leaf-like statements
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct UnitsStmt {
    pub name: String,
    pub extensions: Vec<UnknownStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DefaultStmt {
    pub value: String,
    pub extensions: Vec<UnknownStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigStmt {
    pub value: bool,
    pub extensions: Vec<UnknownStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MandatoryStmt {
    pub value: bool,
    pub extensions: Vec<UnknownStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PresenceStmt {
    pub text: String,
    pub extensions: Vec<UnknownStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusStmt {
    pub status: Status,
    pub extensions: Vec<UnknownStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderedByStmt {
    pub order: OrderedBy,
    pub extensions: Vec<UnknownStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MinElementsStmt {
    pub count: u64,
    pub extensions: Vec<UnknownStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MaxElementsStmt {
    pub count: MaxElementsValue,
    pub extensions: Vec<UnknownStmt>,
}

/// `key` argument: a whitespace-separated identifier list.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyStmt {
    pub keys: Vec<Identifier>,
    pub extensions: Vec<UnknownStmt>,
}

/// `unique` argument: whitespace-separated descendant paths.
#[derive(Debug, Clone, PartialEq)]
pub struct UniqueStmt {
    pub paths: Vec<String>,
    pub extensions: Vec<UnknownStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfFeatureStmt {
    pub expr: String,
    pub extensions: Vec<UnknownStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorMessageStmt {
    pub text: String,
    pub extensions: Vec<UnknownStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorAppTagStmt {
    pub tag: String,
    pub extensions: Vec<UnknownStmt>,
}

/// `must` carries an XPath string argument; the expression is not evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct MustStmt {
    pub condition: String,
    pub body: Vec<MustBody>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MustBody {
    ErrorMessage(ErrorMessageStmt),
    ErrorAppTag(ErrorAppTagStmt),
    Description(DescriptionStmt),
    Reference(ReferenceStmt),
    Unknown(UnknownStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhenStmt {
    pub condition: String,
    pub body: Vec<WhenBody>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WhenBody {
    Description(DescriptionStmt),
    Reference(ReferenceStmt),
    Unknown(UnknownStmt),
}

// ---------------------------------------------------------------------------
// Type system
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct TypeStmt {
    pub name: IdentifierRef,
    pub body: Vec<TypeBody>,
}

/// The type-body alternation; which members are meaningful depends on the
/// named base type (numeric range, string length/pattern, enum, bits,
/// leafref path, identityref base, union member types).
#[derive(Debug, Clone, PartialEq)]
pub enum TypeBody {
    Range(RangeStmt),
    FractionDigits(FractionDigitsStmt),
    Length(LengthStmt),
    Pattern(PatternStmt),
    Enum(EnumStmt),
    Bit(BitStmt),
    Path(PathStmt),
    RequireInstance(RequireInstanceStmt),
    Base(BaseStmt),
    Type(TypeStmt),
    Unknown(UnknownStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RangeStmt {
    pub ranges: RangeExpr,
    pub body: Vec<ErrorInfoBody>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LengthStmt {
    pub lengths: RangeExpr,
    pub body: Vec<ErrorInfoBody>,
}

/// Shared body of `range` and `length`.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorInfoBody {
    ErrorMessage(ErrorMessageStmt),
    ErrorAppTag(ErrorAppTagStmt),
    Description(DescriptionStmt),
    Reference(ReferenceStmt),
    Unknown(UnknownStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatternStmt {
    pub pattern: String,
    pub body: Vec<PatternBody>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PatternBody {
    Modifier(ModifierStmt),
    ErrorMessage(ErrorMessageStmt),
    ErrorAppTag(ErrorAppTagStmt),
    Description(DescriptionStmt),
    Reference(ReferenceStmt),
    Unknown(UnknownStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModifierStmt {
    pub modifier: Modifier,
    pub extensions: Vec<UnknownStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FractionDigitsStmt {
    pub digits: u8,
    pub extensions: Vec<UnknownStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumStmt {
    pub name: String,
    pub body: Vec<EnumBody>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EnumBody {
    IfFeature(IfFeatureStmt),
    Value(ValueStmt),
    Status(StatusStmt),
    Description(DescriptionStmt),
    Reference(ReferenceStmt),
    Unknown(UnknownStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValueStmt {
    pub value: i64,
    pub extensions: Vec<UnknownStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BitStmt {
    pub name: Identifier,
    pub body: Vec<BitBody>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BitBody {
    IfFeature(IfFeatureStmt),
    Position(PositionStmt),
    Status(StatusStmt),
    Description(DescriptionStmt),
    Reference(ReferenceStmt),
    Unknown(UnknownStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PositionStmt {
    pub position: u64,
    pub extensions: Vec<UnknownStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PathStmt {
    pub path: PathExpr,
    pub extensions: Vec<UnknownStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequireInstanceStmt {
    pub value: bool,
    pub extensions: Vec<UnknownStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BaseStmt {
    pub name: IdentifierRef,
    pub extensions: Vec<UnknownStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypedefStmt {
    pub name: Identifier,
    pub body: Vec<TypedefBody>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypedefBody {
    Type(TypeStmt),
    Units(UnitsStmt),
    Default(DefaultStmt),
    Status(StatusStmt),
    Description(DescriptionStmt),
    Reference(ReferenceStmt),
    Unknown(UnknownStmt),
}

// ---------------------------------------------------------------------------
// Data definitions
// ---------------------------------------------------------------------------

/// The reusable data-definition alternation embedded in container, list,
/// grouping, choice, case, augment, input and output bodies.
#[derive(Debug, Clone, PartialEq)]
pub enum DataDefStmt {
    Container(ContainerStmt),
    Leaf(LeafStmt),
    LeafList(LeafListStmt),
    List(ListStmt),
    Choice(ChoiceStmt),
    Anydata(AnydataStmt),
    Anyxml(AnyxmlStmt),
    Uses(UsesStmt),
}

impl DataDefStmt {
    /// The node's label where it has one (`uses` refers, it does not name).
    pub fn name(&self) -> Option<&Identifier> {
        match self {
            DataDefStmt::Container(s) => Some(&s.name),
            DataDefStmt::Leaf(s) => Some(&s.name),
            DataDefStmt::LeafList(s) => Some(&s.name),
            DataDefStmt::List(s) => Some(&s.name),
            DataDefStmt::Choice(s) => Some(&s.name),
            DataDefStmt::Anydata(s) => Some(&s.name),
            DataDefStmt::Anyxml(s) => Some(&s.name),
            DataDefStmt::Uses(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContainerStmt {
    pub name: Identifier,
    pub body: Vec<ContainerBody>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContainerBody {
    When(WhenStmt),
    IfFeature(IfFeatureStmt),
    Must(MustStmt),
    Presence(PresenceStmt),
    Config(ConfigStmt),
    Status(StatusStmt),
    Description(DescriptionStmt),
    Reference(ReferenceStmt),
    Typedef(TypedefStmt),
    Grouping(GroupingStmt),
    DataDef(DataDefStmt),
    Action(ActionStmt),
    Notification(NotificationStmt),
    Unknown(UnknownStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeafStmt {
    pub name: Identifier,
    pub body: Vec<LeafBody>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LeafBody {
    When(WhenStmt),
    IfFeature(IfFeatureStmt),
    Type(TypeStmt),
    Units(UnitsStmt),
    Must(MustStmt),
    Default(DefaultStmt),
    Config(ConfigStmt),
    Mandatory(MandatoryStmt),
    Status(StatusStmt),
    Description(DescriptionStmt),
    Reference(ReferenceStmt),
    Unknown(UnknownStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeafListStmt {
    pub name: Identifier,
    pub body: Vec<LeafListBody>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LeafListBody {
    When(WhenStmt),
    IfFeature(IfFeatureStmt),
    Type(TypeStmt),
    Units(UnitsStmt),
    Must(MustStmt),
    Default(DefaultStmt),
    Config(ConfigStmt),
    MinElements(MinElementsStmt),
    MaxElements(MaxElementsStmt),
    OrderedBy(OrderedByStmt),
    Status(StatusStmt),
    Description(DescriptionStmt),
    Reference(ReferenceStmt),
    Unknown(UnknownStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListStmt {
    pub name: Identifier,
    pub body: Vec<ListBody>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListBody {
    When(WhenStmt),
    IfFeature(IfFeatureStmt),
    Must(MustStmt),
    Key(KeyStmt),
    Unique(UniqueStmt),
    Config(ConfigStmt),
    MinElements(MinElementsStmt),
    MaxElements(MaxElementsStmt),
    OrderedBy(OrderedByStmt),
    Status(StatusStmt),
    Description(DescriptionStmt),
    Reference(ReferenceStmt),
    Typedef(TypedefStmt),
    Grouping(GroupingStmt),
    DataDef(DataDefStmt),
    Action(ActionStmt),
    Notification(NotificationStmt),
    Unknown(UnknownStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceStmt {
    pub name: Identifier,
    pub body: Vec<ChoiceBody>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChoiceBody {
    When(WhenStmt),
    IfFeature(IfFeatureStmt),
    Default(DefaultStmt),
    Config(ConfigStmt),
    Mandatory(MandatoryStmt),
    Status(StatusStmt),
    Description(DescriptionStmt),
    Reference(ReferenceStmt),
    Case(CaseStmt),
    DataDef(DataDefStmt),
    Unknown(UnknownStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseStmt {
    pub name: Identifier,
    pub body: Vec<CaseBody>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CaseBody {
    When(WhenStmt),
    IfFeature(IfFeatureStmt),
    Status(StatusStmt),
    Description(DescriptionStmt),
    Reference(ReferenceStmt),
    DataDef(DataDefStmt),
    Unknown(UnknownStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnydataStmt {
    pub name: Identifier,
    pub body: Vec<AnyBody>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnyxmlStmt {
    pub name: Identifier,
    pub body: Vec<AnyBody>,
}

/// Shared body of `anydata` and `anyxml`.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyBody {
    When(WhenStmt),
    IfFeature(IfFeatureStmt),
    Must(MustStmt),
    Config(ConfigStmt),
    Mandatory(MandatoryStmt),
    Status(StatusStmt),
    Description(DescriptionStmt),
    Reference(ReferenceStmt),
    Unknown(UnknownStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct UsesStmt {
    pub name: IdentifierRef,
    pub body: Vec<UsesBody>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UsesBody {
    When(WhenStmt),
    IfFeature(IfFeatureStmt),
    Status(StatusStmt),
    Description(DescriptionStmt),
    Reference(ReferenceStmt),
    Refine(RefineStmt),
    Augment(AugmentStmt),
    Unknown(UnknownStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RefineStmt {
    pub target: String,
    pub body: Vec<RefineBody>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RefineBody {
    IfFeature(IfFeatureStmt),
    Must(MustStmt),
    Presence(PresenceStmt),
    Default(DefaultStmt),
    Config(ConfigStmt),
    Mandatory(MandatoryStmt),
    MinElements(MinElementsStmt),
    MaxElements(MaxElementsStmt),
    Description(DescriptionStmt),
    Reference(ReferenceStmt),
    Unknown(UnknownStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupingStmt {
    pub name: Identifier,
    pub body: Vec<GroupingBody>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GroupingBody {
    Status(StatusStmt),
    Description(DescriptionStmt),
    Reference(ReferenceStmt),
    Typedef(TypedefStmt),
    Grouping(GroupingStmt),
    DataDef(DataDefStmt),
    Action(ActionStmt),
    Notification(NotificationStmt),
    Unknown(UnknownStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AugmentStmt {
    pub target: String,
    pub body: Vec<AugmentBody>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AugmentBody {
    When(WhenStmt),
    IfFeature(IfFeatureStmt),
    Status(StatusStmt),
    Description(DescriptionStmt),
    Reference(ReferenceStmt),
    DataDef(DataDefStmt),
    Case(CaseStmt),
    Action(ActionStmt),
    Notification(NotificationStmt),
    Unknown(UnknownStmt),
}

// ---------------------------------------------------------------------------
// Operations, notifications, deviations, extensions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct RpcStmt {
    pub name: Identifier,
    pub body: Vec<OperationBody>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionStmt {
    pub name: Identifier,
    pub body: Vec<OperationBody>,
}

/// Shared body of `rpc` and `action`.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationBody {
    IfFeature(IfFeatureStmt),
    Status(StatusStmt),
    Description(DescriptionStmt),
    Reference(ReferenceStmt),
    Typedef(TypedefStmt),
    Grouping(GroupingStmt),
    Input(InputStmt),
    Output(OutputStmt),
    Unknown(UnknownStmt),
}

/// `input` takes no argument.
#[derive(Debug, Clone, PartialEq)]
pub struct InputStmt {
    pub body: Vec<IoBody>,
}

/// `output` takes no argument.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputStmt {
    pub body: Vec<IoBody>,
}

/// Shared body of `input` and `output`.
#[derive(Debug, Clone, PartialEq)]
pub enum IoBody {
    Must(MustStmt),
    Typedef(TypedefStmt),
    Grouping(GroupingStmt),
    DataDef(DataDefStmt),
    Unknown(UnknownStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct NotificationStmt {
    pub name: Identifier,
    pub body: Vec<NotificationBody>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NotificationBody {
    IfFeature(IfFeatureStmt),
    Must(MustStmt),
    Status(StatusStmt),
    Description(DescriptionStmt),
    Reference(ReferenceStmt),
    Typedef(TypedefStmt),
    Grouping(GroupingStmt),
    DataDef(DataDefStmt),
    Unknown(UnknownStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureStmt {
    pub name: Identifier,
    pub body: Vec<FeatureBody>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FeatureBody {
    IfFeature(IfFeatureStmt),
    Status(StatusStmt),
    Description(DescriptionStmt),
    Reference(ReferenceStmt),
    Unknown(UnknownStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct IdentityStmt {
    pub name: Identifier,
    pub body: Vec<IdentityBody>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum IdentityBody {
    IfFeature(IfFeatureStmt),
    Base(BaseStmt),
    Status(StatusStmt),
    Description(DescriptionStmt),
    Reference(ReferenceStmt),
    Unknown(UnknownStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtensionStmt {
    pub name: Identifier,
    pub body: Vec<ExtensionBody>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExtensionBody {
    Argument(ArgumentStmt),
    Status(StatusStmt),
    Description(DescriptionStmt),
    Reference(ReferenceStmt),
    Unknown(UnknownStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentStmt {
    pub name: Identifier,
    pub body: Vec<ArgumentBody>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentBody {
    YinElement(YinElementStmt),
    Unknown(UnknownStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct YinElementStmt {
    pub value: bool,
    pub extensions: Vec<UnknownStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeviationStmt {
    pub target: String,
    pub body: Vec<DeviationBody>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeviationBody {
    Description(DescriptionStmt),
    Reference(ReferenceStmt),
    Deviate(DeviateStmt),
    Unknown(UnknownStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeviateStmt {
    pub kind: DeviateKind,
    pub body: Vec<DeviateBody>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeviateBody {
    Type(TypeStmt),
    Units(UnitsStmt),
    Must(MustStmt),
    Unique(UniqueStmt),
    Default(DefaultStmt),
    Config(ConfigStmt),
    Mandatory(MandatoryStmt),
    MinElements(MinElementsStmt),
    MaxElements(MaxElementsStmt),
    Unknown(UnknownStmt),
}

// ---------------------------------------------------------------------------
// The statement sum
// ---------------------------------------------------------------------------

/// Any single YANG statement, for partial-input parsing and uniform
/// module bodies. `module` and `submodule` themselves parse through the
/// dedicated entry points.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    YangVersion(YangVersionStmt),
    Namespace(NamespaceStmt),
    Prefix(PrefixStmt),
    Import(ImportStmt),
    Include(IncludeStmt),
    BelongsTo(BelongsToStmt),
    Organization(OrganizationStmt),
    Contact(ContactStmt),
    Description(DescriptionStmt),
    Reference(ReferenceStmt),
    Revision(RevisionStmt),
    RevisionDate(RevisionDateStmt),
    Extension(ExtensionStmt),
    Argument(ArgumentStmt),
    YinElement(YinElementStmt),
    Feature(FeatureStmt),
    Identity(IdentityStmt),
    Base(BaseStmt),
    Typedef(TypedefStmt),
    Type(TypeStmt),
    Range(RangeStmt),
    Length(LengthStmt),
    Pattern(PatternStmt),
    Modifier(ModifierStmt),
    FractionDigits(FractionDigitsStmt),
    Enum(EnumStmt),
    Value(ValueStmt),
    Bit(BitStmt),
    Position(PositionStmt),
    Path(PathStmt),
    RequireInstance(RequireInstanceStmt),
    Units(UnitsStmt),
    Default(DefaultStmt),
    Config(ConfigStmt),
    Mandatory(MandatoryStmt),
    Presence(PresenceStmt),
    Status(StatusStmt),
    OrderedBy(OrderedByStmt),
    MinElements(MinElementsStmt),
    MaxElements(MaxElementsStmt),
    Key(KeyStmt),
    Unique(UniqueStmt),
    IfFeature(IfFeatureStmt),
    ErrorMessage(ErrorMessageStmt),
    ErrorAppTag(ErrorAppTagStmt),
    Must(MustStmt),
    When(WhenStmt),
    Grouping(GroupingStmt),
    DataDef(DataDefStmt),
    Case(CaseStmt),
    Refine(RefineStmt),
    Augment(AugmentStmt),
    Rpc(RpcStmt),
    Action(ActionStmt),
    Input(InputStmt),
    Output(OutputStmt),
    Notification(NotificationStmt),
    Deviation(DeviationStmt),
    Deviate(DeviateStmt),
    Unknown(UnknownStmt),
}
