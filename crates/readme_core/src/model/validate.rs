//! Strict element shape checks for collaborator input.
//!
//! # Responsibility
//! - Answer "is this JSON value a well-formed element?" without decoding it.
//! - Name the first offending field so editor dialogs can surface it.
//!
//! # Invariants
//! - Validation is side-effect free.
//! - Unknown extra fields are accepted.
//! - Rendering never depends on this check; the renderer degrades on its own.

use crate::model::element::ELEMENT_TYPES;
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Shape violation found by [`validate_element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementValidationError {
    NotAnObject,
    MissingId,
    MissingType,
    UnknownType(String),
    MissingField {
        kind: &'static str,
        field: &'static str,
    },
    InvalidField {
        kind: &'static str,
        field: &'static str,
        expected: &'static str,
    },
}

impl Display for ElementValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAnObject => write!(f, "element must be a JSON object"),
            Self::MissingId => write!(f, "element is missing a string `id`"),
            Self::MissingType => write!(f, "element is missing a string `type`"),
            Self::UnknownType(kind) => write!(f, "unknown element type `{kind}`"),
            Self::MissingField { kind, field } => {
                write!(f, "{kind} element is missing required field `{field}`")
            }
            Self::InvalidField {
                kind,
                field,
                expected,
            } => write!(f, "{kind} element field `{field}` must be {expected}"),
        }
    }
}

impl Error for ElementValidationError {}

#[derive(Debug, Clone, Copy)]
enum Shape {
    Text,
    /// String or number, kept as text by the decoder.
    Scalar,
    PositiveInteger,
    TextList,
    TextGrid,
    OneOf(&'static [&'static str]),
    /// Object of advisory text style hints.
    TextStyle,
}

impl Shape {
    fn expected(self) -> &'static str {
        match self {
            Self::Text => "a string",
            Self::Scalar => "a string or a number",
            Self::PositiveInteger => "a positive integer",
            Self::TextList => "an array of strings",
            Self::TextGrid => "an array of string arrays",
            Self::OneOf(_) => "one of the documented values",
            Self::TextStyle => "an object with string or numeric style hints",
        }
    }

    fn accepts(self, value: &Value) -> bool {
        match self {
            Self::Text => value.is_string(),
            Self::Scalar => value.is_string() || value.is_number(),
            Self::PositiveInteger => value.as_u64().is_some_and(|number| number > 0),
            Self::TextList => is_text_list(value),
            Self::TextGrid => value
                .as_array()
                .is_some_and(|rows| rows.iter().all(is_text_list)),
            Self::OneOf(allowed) => value
                .as_str()
                .is_some_and(|text| allowed.contains(&text)),
            Self::TextStyle => value.as_object().is_some_and(|hints| {
                STYLE_HINTS.iter().all(|&(hint, shape)| {
                    hints
                        .get(hint)
                        .map_or(true, |value| value.is_null() || shape.accepts(value))
                })
            }),
        }
    }
}

const LAYOUT_VALUES: &[&str] = &["badges", "list", "inline", "grouped", "grid"];
const DIVIDER_VALUES: &[&str] = &["line", "dots", "stars"];
const STYLE_HINTS: &[(&str, Shape)] = &[
    ("fontSize", Shape::Scalar),
    ("fontWeight", Shape::Scalar),
    ("textAlign", Shape::Text),
    ("color", Shape::Text),
];

/// Fields an element cannot be decoded without.
fn required_fields(kind: &str) -> &'static [(&'static str, Shape)] {
    match kind {
        "header" | "text" | "banner" | "badge" | "installation" | "code-block" => {
            &[("content", Shape::Text)]
        }
        "table" => &[("headers", Shape::TextList)],
        "tech-stack" => &[("technologies", Shape::TextList)],
        "git-contribution" => &[("username", Shape::Text), ("repository", Shape::Text)],
        "image" => &[("src", Shape::Text)],
        _ => &[],
    }
}

/// Defaulted fields that must still have the right shape when present.
/// `null` stands for "absent" and decodes to the default.
fn optional_fields(kind: &str) -> &'static [(&'static str, Shape)] {
    match kind {
        "header" => &[("level", Shape::PositiveInteger)],
        "text" => &[("style", Shape::TextStyle)],
        "banner" => &[("variant", Shape::Text), ("color", Shape::Text)],
        "badge" => &[("variant", Shape::Text)],
        "code-block" => &[("language", Shape::Text)],
        "table" => &[("rows", Shape::TextGrid)],
        "tech-stack" => &[
            ("layout", Shape::OneOf(LAYOUT_VALUES)),
            ("badgeStyle", Shape::Text),
            ("theme", Shape::Text),
        ],
        "divider" => &[("dividerStyle", Shape::OneOf(DIVIDER_VALUES))],
        "image" => &[
            ("alt", Shape::Text),
            ("width", Shape::Scalar),
            ("height", Shape::Scalar),
        ],
        _ => &[],
    }
}

/// Checks the discriminant and required fields of one element value.
///
/// # Errors
/// - Returns the first violation found, checking `id`, then `type`, then
///   required fields in declaration order, then optional field types.
pub fn validate_element(value: &Value) -> Result<(), ElementValidationError> {
    let object = value.as_object().ok_or(ElementValidationError::NotAnObject)?;

    if !object.get("id").is_some_and(Value::is_string) {
        return Err(ElementValidationError::MissingId);
    }

    let raw_kind = object
        .get("type")
        .and_then(Value::as_str)
        .ok_or(ElementValidationError::MissingType)?;
    let kind = ELEMENT_TYPES
        .iter()
        .copied()
        .find(|known| *known == raw_kind)
        .ok_or_else(|| ElementValidationError::UnknownType(raw_kind.to_string()))?;

    if let Some(tags) = object.get("hiddenFor") {
        if !tags.is_null() && !is_text_list(tags) {
            return Err(ElementValidationError::InvalidField {
                kind,
                field: "hiddenFor",
                expected: Shape::TextList.expected(),
            });
        }
    }

    for &(field, shape) in required_fields(kind) {
        check_field(object, kind, field, shape, true)?;
    }
    for &(field, shape) in optional_fields(kind) {
        check_field(object, kind, field, shape, false)?;
    }

    Ok(())
}

/// Boolean form of [`validate_element`].
pub fn is_valid_element(value: &Value) -> bool {
    validate_element(value).is_ok()
}

fn check_field(
    object: &Map<String, Value>,
    kind: &'static str,
    field: &'static str,
    shape: Shape,
    required: bool,
) -> Result<(), ElementValidationError> {
    match object.get(field) {
        None | Some(Value::Null) if required => {
            Err(ElementValidationError::MissingField { kind, field })
        }
        None | Some(Value::Null) => Ok(()),
        Some(value) if shape.accepts(value) => Ok(()),
        Some(_) => Err(ElementValidationError::InvalidField {
            kind,
            field,
            expected: shape.expected(),
        }),
    }
}

fn is_text_list(value: &Value) -> bool {
    value
        .as_array()
        .is_some_and(|items| items.iter().all(Value::is_string))
}

#[cfg(test)]
mod tests {
    use super::{DIVIDER_VALUES, LAYOUT_VALUES};
    use crate::model::element::{DividerStyle, TechLayout};

    #[test]
    fn layout_values_match_typed_model() {
        let typed: Vec<&str> = TechLayout::ALL.iter().map(|layout| layout.as_str()).collect();
        assert_eq!(typed, LAYOUT_VALUES);
    }

    #[test]
    fn divider_values_match_typed_model() {
        let typed: Vec<&str> = DividerStyle::ALL.iter().map(|style| style.as_str()).collect();
        assert_eq!(typed, DIVIDER_VALUES);
    }
}

