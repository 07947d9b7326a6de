//! Shared identity and output types.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;
use std::collections::BTreeMap;

/// Schema of the singleton document declaring the canonical layer order.
pub const LAYERING_POLICY_SCHEMA: &str = "strata/LayeringPolicy/v1";

/// Identity of a document within one revision: schema plus metadata name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct DocumentId {
	pub schema: Box<str>,
	pub name: Box<str>,
}

impl DocumentId {
	pub fn new(schema: &str, name: &str) -> Self {
		Self { schema: schema.into(), name: name.into() }
	}
}

impl std::fmt::Display for DocumentId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "[{}] {}", self.schema, self.name)
	}
}

/// Identifier of one stored revision of the document set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct RevisionId(pub u64);

impl std::fmt::Display for RevisionId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// One fully rendered document: identity fields plus the data computed by
/// layering and substitution. The input document's own `data` block is never
/// written back; this is a fresh snapshot produced per resolution run.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedDocument {
	pub schema: Box<str>,
	pub name: Box<str>,
	pub layer: Box<str>,
	pub labels: Option<BTreeMap<String, String>>,
	pub rendered_data: Value,
}

impl RenderedDocument {
	pub fn id(&self) -> DocumentId {
		DocumentId { schema: self.schema.clone(), name: self.name.clone() }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_document_id_display() {
		let id = DocumentId::new("example/Kind/v1", "doc-a");
		assert_eq!(id.to_string(), "[example/Kind/v1] doc-a");
	}

	#[test]
	fn test_document_id_ordering() {
		let a = DocumentId::new("example/Kind/v1", "a");
		let b = DocumentId::new("example/Kind/v1", "b");
		let c = DocumentId::new("example/Other/v1", "a");
		assert!(a < b);
		assert!(b < c);
	}

	#[test]
	fn test_rendered_document_serializes_camel_case() {
		let doc = RenderedDocument {
			schema: "example/Kind/v1".into(),
			name: "doc-a".into(),
			layer: "site".into(),
			labels: None,
			rendered_data: json!({"a": 1}),
		};
		let value = serde_json::to_value(&doc).unwrap();
		assert_eq!(
			value,
			json!({
				"schema": "example/Kind/v1",
				"name": "doc-a",
				"layer": "site",
				"renderedData": {"a": 1}
			})
		);
	}
}

// vim: ts=4
