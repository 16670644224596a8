//! Document value type and lossy JSON decoding.
//!
//! # Responsibility
//! - Hold the ordered element sequence that makes up one README.
//! - Decode collaborator JSON one element at a time, so one malformed entry
//!   never poisons the rest of the document.
//!
//! # Invariants
//! - Element order is render order and is never rearranged here.
//! - Lossy decoding never fails; rejected entries are reported, not dropped
//!   silently.

use crate::model::element::Element;
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Ordered sequence of elements. Callers replace it wholesale; elements are
/// never edited in place by the core.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(Vec<Element>);

/// One entry rejected by [`Document::from_value_lossy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedElement {
    /// Position in the input array, or `0` when the input was not an array.
    pub index: usize,
    /// Decoder message describing the rejection.
    pub reason: String,
}

/// Result of lossy decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LossyDocument {
    pub document: Document,
    pub skipped: Vec<SkippedElement>,
}

impl Document {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.0.iter()
    }

    pub fn elements(&self) -> &[Element] {
        &self.0
    }

    pub fn into_elements(self) -> Vec<Element> {
        self.0
    }

    /// Returns the first element carrying `id`.
    pub fn find(&self, id: &str) -> Option<&Element> {
        self.0.iter().find(|element| element.id == id)
    }

    /// Returns ids that occur more than once, in first-seen order.
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for element in &self.0 {
            *counts.entry(element.id.as_str()).or_default() += 1;
        }

        let mut duplicates = Vec::new();
        for element in &self.0 {
            let id = element.id.as_str();
            if counts.get(id).copied().unwrap_or(0) > 1 && !duplicates.contains(&id) {
                duplicates.push(id);
            }
        }
        duplicates
    }

    /// Decodes a JSON array element by element.
    ///
    /// Entries with an unknown `type`, a missing required field or a
    /// wrong-typed field are skipped and listed in `skipped`. Input that is
    /// not an array decodes to an empty document.
    pub fn from_value_lossy(value: &Value) -> LossyDocument {
        let Some(items) = value.as_array() else {
            return LossyDocument {
                document: Document::new(),
                skipped: vec![SkippedElement {
                    index: 0,
                    reason: format!("expected an array of elements, got {}", json_kind(value)),
                }],
            };
        };

        let mut elements = Vec::with_capacity(items.len());
        let mut skipped = Vec::new();
        for (index, item) in items.iter().enumerate() {
            match Element::deserialize(item) {
                Ok(element) => elements.push(element),
                Err(err) => skipped.push(SkippedElement {
                    index,
                    reason: err.to_string(),
                }),
            }
        }

        if !skipped.is_empty() {
            warn!(
                "event=document_decode module=model status=partial decoded={} skipped={}",
                elements.len(),
                skipped.len()
            );
        }

        LossyDocument {
            document: Document(elements),
            skipped,
        }
    }

    /// Parses JSON text lossily. Returns `Err` only when the text is not JSON.
    pub fn from_json_str_lossy(text: &str) -> Result<LossyDocument, serde_json::Error> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_value_lossy(&value))
    }
}

impl From<Vec<Element>> for Document {
    fn from(value: Vec<Element>) -> Self {
        Self(value)
    }
}

impl FromIterator<Element> for Document {
    fn from_iter<T: IntoIterator<Item = Element>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Document {
    type Item = Element;
    type IntoIter = std::vec::IntoIter<Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::Document;
    use serde_json::json;

    #[test]
    fn duplicate_ids_are_reported_once_in_first_seen_order() {
        let lossy = Document::from_value_lossy(&json!([
            {"id": "b", "type": "divider"},
            {"id": "a", "type": "divider"},
            {"id": "b", "type": "divider"},
            {"id": "a", "type": "divider"},
            {"id": "b", "type": "divider"}
        ]));
        assert_eq!(lossy.document.duplicate_ids(), vec!["b", "a"]);
    }

    #[test]
    fn non_array_input_decodes_to_empty_document() {
        let lossy = Document::from_value_lossy(&json!({"id": "x"}));
        assert!(lossy.document.is_empty());
        assert_eq!(lossy.skipped.len(), 1);
        assert!(lossy.skipped[0].reason.contains("object"));
    }
}
