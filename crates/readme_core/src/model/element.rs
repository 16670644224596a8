//! Element domain model.
//!
//! # Responsibility
//! - Define the closed set of README building blocks as one tagged enum.
//! - Fix the JSON wire shape exchanged with editor collaborators.
//!
//! # Invariants
//! - `id` is assigned by the caller and preserved verbatim.
//! - `type` is the discriminant and never changes after construction.
//! - `hidden_for` is carried through unchanged and never interpreted here.
//!
//! # See also
//! - crates/readme_core/src/model/validate.rs

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque caller-assigned identifier, unique within one document.
pub type ElementId = String;

/// Wire names of every element kind, in declaration order.
pub const ELEMENT_TYPES: [&str; 11] = [
    "header",
    "text",
    "banner",
    "badge",
    "installation",
    "code-block",
    "table",
    "tech-stack",
    "git-contribution",
    "divider",
    "image",
];

/// One README building block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Caller-assigned id; the core never generates or rewrites it.
    pub id: ElementId,
    /// Persona tags consumed by external viewers.
    #[serde(
        rename = "hiddenFor",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub hidden_for: Vec<String>,
    /// Serialized inline, discriminated by the `type` field.
    #[serde(flatten)]
    pub kind: ElementKind,
}

impl Element {
    /// Creates an element with no persona tags.
    pub fn new(id: impl Into<ElementId>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            hidden_for: Vec::new(),
            kind,
        }
    }

    /// Returns the wire discriminant of this element.
    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }
}

/// Closed set of element payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ElementKind {
    Header(HeaderBlock),
    Text(TextBlock),
    Banner(BannerBlock),
    Badge(BadgeBlock),
    Installation(InstallationBlock),
    CodeBlock(CodeBlock),
    Table(TableBlock),
    TechStack(TechStackBlock),
    GitContribution(GitContributionBlock),
    Divider(DividerBlock),
    Image(ImageBlock),
}

impl ElementKind {
    /// Returns the wire discriminant, matching one entry of [`ELEMENT_TYPES`].
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Header(_) => "header",
            Self::Text(_) => "text",
            Self::Banner(_) => "banner",
            Self::Badge(_) => "badge",
            Self::Installation(_) => "installation",
            Self::CodeBlock(_) => "code-block",
            Self::Table(_) => "table",
            Self::TechStack(_) => "tech-stack",
            Self::GitContribution(_) => "git-contribution",
            Self::Divider(_) => "divider",
            Self::Image(_) => "image",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderBlock {
    pub content: String,
    /// Heading depth. Values past `u8::MAX` saturate; renderers clamp to `1..=6`.
    #[serde(default = "default_header_level", deserialize_with = "header_level")]
    pub level: u8,
}

fn default_header_level() -> u8 {
    1
}

/// Accepts any non-negative integer or `null`.
fn header_level<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let level = Option::<u64>::deserialize(deserializer)?;
    Ok(level.map_or_else(default_header_level, |level| {
        u8::try_from(level).unwrap_or(u8::MAX)
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    pub content: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "TextStyle::is_empty"
    )]
    pub style: TextStyle,
}

/// Advisory presentation hints authored in the visual editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(
        default,
        deserialize_with = "optional_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub font_size: Option<String>,
    #[serde(
        default,
        deserialize_with = "optional_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub font_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl TextStyle {
    pub fn is_empty(&self) -> bool {
        self.font_size.is_none()
            && self.font_weight.is_none()
            && self.text_align.is_none()
            && self.color.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerBlock {
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub variant: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeBlock {
    pub content: String,
    /// Shields rendering style (`flat`, `for-the-badge`, ...).
    #[serde(default, deserialize_with = "null_as_default")]
    pub variant: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallationBlock {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBlock {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Pipe table payload.
///
/// `headers.len()` is authoritative for the column count; rows of any other
/// length are repaired at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableBlock {
    pub headers: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechStackBlock {
    pub technologies: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub layout: TechLayout,
    /// Badge style-family key; empty means "names only" where a layout allows it.
    #[serde(default, deserialize_with = "null_as_default")]
    pub badge_style: String,
    /// Theme key overriding the render context when non-empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub theme: String,
}

/// Arrangement of a tech-stack panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TechLayout {
    #[default]
    Badges,
    List,
    Inline,
    Grouped,
    Grid,
}

impl TechLayout {
    pub const ALL: [TechLayout; 5] = [
        Self::Badges,
        Self::List,
        Self::Inline,
        Self::Grouped,
        Self::Grid,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Badges => "badges",
            Self::List => "list",
            Self::Inline => "inline",
            Self::Grouped => "grouped",
            Self::Grid => "grid",
        }
    }

    /// Parses an exact wire value.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|layout| layout.as_str() == value)
    }
}

impl From<String> for TechLayout {
    fn from(value: String) -> Self {
        Self::parse(value.as_str()).unwrap_or_default()
    }
}

impl From<TechLayout> for String {
    fn from(value: TechLayout) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitContributionBlock {
    pub username: String,
    pub repository: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividerBlock {
    #[serde(default, deserialize_with = "null_as_default")]
    pub divider_style: DividerStyle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DividerStyle {
    #[default]
    Line,
    Dots,
    Stars,
}

impl DividerStyle {
    pub const ALL: [DividerStyle; 3] = [Self::Line, Self::Dots, Self::Stars];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Dots => "dots",
            Self::Stars => "stars",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.as_str() == value)
    }
}

impl From<String> for DividerStyle {
    fn from(value: String) -> Self {
        Self::parse(value.as_str()).unwrap_or_default()
    }
}

impl From<DividerStyle> for String {
    fn from(value: DividerStyle) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageBlock {
    pub src: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub alt: String,
    /// Kept as text so both `120` and `"50%"` survive a round trip.
    #[serde(
        default,
        deserialize_with = "optional_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub width: Option<String>,
    #[serde(
        default,
        deserialize_with = "optional_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub height: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// Reads `null` as the field's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts a JSON string or number and keeps it as text.
fn optional_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.map(|scalar| match scalar {
        Scalar::Text(text) => text,
        Scalar::Integer(number) => number.to_string(),
        Scalar::Float(number) => number.to_string(),
    }))
}
