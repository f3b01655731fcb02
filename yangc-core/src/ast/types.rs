//! Argument value types shared across the statement tree.
//!
//! Every typed statement argument (identifiers, dates, versions, range and
//! length expressions, schema paths, URIs) lives here together with its
//! checked constructor. Construction failures are reported through
//! [`ValueError`] so the parser can attach a stream position to them.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error raised by checked construction of argument values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The string is not a valid YANG identifier.
    #[error("invalid identifier: {0:?}")]
    InvalidIdentifier(String),
    /// The year/month/day triple does not name a civil-calendar date.
    #[error("invalid date: {0}")]
    InvalidDate(String),
    /// A typed argument parser rejected its input.
    #[error("invalid {kind} argument: {text:?}")]
    InvalidArgument {
        kind: &'static str,
        text: String,
    },
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.'
}

/// A plain YANG identifier: `ALPHA | "_"` followed by
/// `ALPHA | DIGIT | "_" | "-" | "."`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Checked construction; rejects malformed input.
    pub fn new(s: impl Into<String>) -> Result<Self, ValueError> {
        let s = s.into();
        if Self::is_valid(&s) {
            Ok(Self(s))
        } else {
            Err(ValueError::InvalidIdentifier(s))
        }
    }

    /// Unchecked construction for caller-guaranteed input.
    pub fn new_unchecked(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Whether `s` satisfies the identifier grammar.
    pub fn is_valid(s: &str) -> bool {
        let mut chars = s.chars();
        match chars.next() {
            Some(c) if is_identifier_start(c) => chars.all(is_identifier_char),
            _ => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Identifier {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// A `prefix:name` identifier pair, both halves plain identifiers.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrefixedIdentifier {
    pub prefix: Identifier,
    pub name: Identifier,
}

impl PrefixedIdentifier {
    pub fn new(prefix: Identifier, name: Identifier) -> Self {
        Self { prefix, name }
    }
}

impl fmt::Display for PrefixedIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.prefix, self.name)
    }
}

impl FromStr for PrefixedIdentifier {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, name) = s
            .split_once(':')
            .ok_or_else(|| ValueError::InvalidIdentifier(s.to_string()))?;
        Ok(Self::new(Identifier::new(prefix)?, Identifier::new(name)?))
    }
}

/// Either a plain or a prefixed identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IdentifierRef {
    Plain(Identifier),
    Prefixed(PrefixedIdentifier),
}

impl IdentifierRef {
    /// The unprefixed half of the reference.
    pub fn name(&self) -> &Identifier {
        match self {
            IdentifierRef::Plain(id) => id,
            IdentifierRef::Prefixed(p) => &p.name,
        }
    }

    pub fn prefix(&self) -> Option<&Identifier> {
        match self {
            IdentifierRef::Plain(_) => None,
            IdentifierRef::Prefixed(p) => Some(&p.prefix),
        }
    }
}

impl fmt::Display for IdentifierRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierRef::Plain(id) => id.fmt(f),
            IdentifierRef::Prefixed(p) => p.fmt(f),
        }
    }
}

impl FromStr for IdentifierRef {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(':') {
            PrefixedIdentifier::from_str(s).map(IdentifierRef::Prefixed)
        } else {
            Identifier::new(s).map(IdentifierRef::Plain)
        }
    }
}

fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// A revision date, rendered `YYYY-MM-DD` and ordered (year, month, day).
///
/// Validity is enforced on construction: month 13, day 32 and February 30
/// are all rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: u16,
    month: u8,
    day: u8,
}

impl Date {
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ValueError> {
        if month == 0 || month > 12 || day == 0 || day > days_in_month(year, month) {
            return Err(ValueError::InvalidDate(format!(
                "{year:04}-{month:02}-{day:02}"
            )));
        }
        Ok(Self { year, month, day })
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for Date {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValueError::InvalidDate(s.to_string());
        let bytes = s.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return Err(invalid());
        }
        let year: u16 = s[0..4].parse().map_err(|_| invalid())?;
        let month: u8 = s[5..7].parse().map_err(|_| invalid())?;
        let day: u8 = s[8..10].parse().map_err(|_| invalid())?;
        Date::new(year, month, day)
    }
}

/// A YANG language version. `1` parses as (1, 0); `1.1` as (1, 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl Version {
    pub fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.minor == 0 {
            write!(f, "{}", self.major)
        } else {
            write!(f, "{}.{}", self.major, self.minor)
        }
    }
}

impl FromStr for Version {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValueError::InvalidArgument {
            kind: "version",
            text: s.to_string(),
        };
        match s.split_once('.') {
            None => Ok(Version::new(s.parse().map_err(|_| invalid())?, 0)),
            Some((major, minor)) => Ok(Version::new(
                major.parse().map_err(|_| invalid())?,
                minor.parse().map_err(|_| invalid())?,
            )),
        }
    }
}

/// Definition lifecycle status.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display, strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Status {
    Current,
    Deprecated,
    Obsolete,
}

/// `ordered-by` argument.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display, strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum OrderedBy {
    User,
    System,
}

/// `modifier` argument; `invert-match` is the only value defined.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display, strum::AsRefStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Modifier {
    InvertMatch,
}

/// `deviate` argument.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display, strum::AsRefStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum DeviateKind {
    Add,
    Replace,
    Delete,
    NotSupported,
}

/// `max-elements` argument: `unbounded` or a positive 64-bit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxElementsValue {
    Unbounded,
    Bounded(u64),
}

impl fmt::Display for MaxElementsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaxElementsValue::Unbounded => f.write_str("unbounded"),
            MaxElementsValue::Bounded(n) => write!(f, "{n}"),
        }
    }
}

impl FromStr for MaxElementsValue {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "unbounded" {
            return Ok(MaxElementsValue::Unbounded);
        }
        match s.parse::<u64>() {
            Ok(n) if n > 0 => Ok(MaxElementsValue::Bounded(n)),
            _ => Err(ValueError::InvalidArgument {
                kind: "max-elements",
                text: s.to_string(),
            }),
        }
    }
}

/// One endpoint of a range or length interval. `min` and `max` are the
/// sentinel bounds of the underlying type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Min,
    Max,
    Value(i64),
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Min => f.write_str("min"),
            Bound::Max => f.write_str("max"),
            Bound::Value(v) => write!(f, "{v}"),
        }
    }
}

impl FromStr for Bound {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "min" => Ok(Bound::Min),
            "max" => Ok(Bound::Max),
            _ => s.parse::<i64>().map(Bound::Value).map_err(|_| {
                ValueError::InvalidArgument {
                    kind: "range bound",
                    text: s.to_string(),
                }
            }),
        }
    }
}

/// A single interval: a lone bound, or `lower..upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub lower: Bound,
    pub upper: Option<Bound>,
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.upper {
            None => self.lower.fmt(f),
            Some(upper) => write!(f, "{}..{}", self.lower, upper),
        }
    }
}

/// A `range` or `length` argument: intervals joined by `|`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeExpr(pub Vec<Interval>);

impl fmt::Display for RangeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|i| i.to_string()).collect();
        f.write_str(&parts.join(" | "))
    }
}

impl FromStr for RangeExpr {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValueError::InvalidArgument {
            kind: "range",
            text: s.to_string(),
        };
        let mut intervals = Vec::new();
        for part in s.split('|') {
            let part = part.trim();
            if part.is_empty() {
                return Err(invalid());
            }
            let interval = match part.split_once("..") {
                None => Interval {
                    lower: part.parse()?,
                    upper: None,
                },
                Some((lower, upper)) => Interval {
                    lower: lower.trim().parse()?,
                    upper: Some(upper.trim().parse()?),
                },
            };
            intervals.push(interval);
        }
        if intervals.is_empty() {
            return Err(invalid());
        }
        Ok(RangeExpr(intervals))
    }
}

/// A `path` argument: absolute `/a/b/c` or relative `../../a`, each segment
/// an identifier possibly carrying a prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathExpr {
    Absolute(Vec<IdentifierRef>),
    Relative {
        up: usize,
        segments: Vec<IdentifierRef>,
    },
}

impl fmt::Display for PathExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathExpr::Absolute(segments) => {
                for segment in segments {
                    write!(f, "/{segment}")?;
                }
                Ok(())
            }
            PathExpr::Relative { up, segments } => {
                for _ in 0..*up {
                    f.write_str("../")?;
                }
                let parts: Vec<String> = segments.iter().map(|s| s.to_string()).collect();
                f.write_str(&parts.join("/"))
            }
        }
    }
}

impl FromStr for PathExpr {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValueError::InvalidArgument {
            kind: "path",
            text: s.to_string(),
        };
        let parse_segments = |text: &str| -> Result<Vec<IdentifierRef>, ValueError> {
            text.split('/')
                .map(|segment| segment.parse().map_err(|_| invalid()))
                .collect()
        };
        if let Some(rest) = s.strip_prefix('/') {
            if rest.is_empty() {
                return Err(invalid());
            }
            return Ok(PathExpr::Absolute(parse_segments(rest)?));
        }
        let mut up = 0;
        let mut rest = s;
        while let Some(stripped) = rest.strip_prefix("../") {
            up += 1;
            rest = stripped;
        }
        if up == 0 || rest.is_empty() {
            return Err(invalid());
        }
        Ok(PathExpr::Relative {
            up,
            segments: parse_segments(rest)?,
        })
    }
}

/// An absolute URI, as required by `namespace`. Only the scheme shape is
/// validated (`scheme ":" non-empty-rest`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uri(String);

impl Uri {
    pub fn new(s: impl Into<String>) -> Result<Self, ValueError> {
        let s = s.into();
        let valid = s.split_once(':').is_some_and(|(scheme, rest)| {
            !rest.is_empty()
                && scheme
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_ascii_alphabetic())
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        });
        if valid {
            Ok(Self(s))
        } else {
            Err(ValueError::InvalidArgument {
                kind: "uri",
                text: s,
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Uri {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
