//! Document model: typed accessors over one raw document tree.
//!
//! A [`Document`] wraps the storage representation of a single document
//! (schema + metadata + data) and exposes the layering and substitution
//! metadata through explicit accessors. Structurally absent fields yield
//! well-defined defaults (empty string, empty mapping, empty sequence);
//! present-but-malformed structures fail with `ValidationError`, and an
//! unknown action method fails with `UnsupportedActionMethod`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::path;
use crate::prelude::*;
use crate::types::LAYERING_POLICY_SCHEMA;

static NULL: Value = Value::Null;

/// Layering action methods a child may apply against its parent's data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionMethod {
	Merge,
	Replace,
	Delete,
}

impl ActionMethod {
	pub fn as_str(self) -> &'static str {
		match self {
			ActionMethod::Merge => "merge",
			ActionMethod::Replace => "replace",
			ActionMethod::Delete => "delete",
		}
	}
}

/// One declared layering action: a method applied at a data path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
	pub method: ActionMethod,
	pub path: String,
}

/// Identity of a substitution source document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubstitutionSource {
	pub schema: String,
	pub name: String,
}

/// One declared substitution: copy the value at `source_path` in the source
/// document's rendered data to `dest_path` here. When `pattern` is present
/// the destination must already hold a string and only the pattern matches
/// within it are replaced.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Substitution {
	pub source: SubstitutionSource,
	pub source_path: String,
	pub dest_path: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub pattern: Option<String>,
}

impl Substitution {
	pub fn source_id(&self) -> DocumentId {
		DocumentId::new(&self.source.schema, &self.source.name)
	}
}

/// A single document as loaded from the revision store.
///
/// The wrapped tree is read-only for the engine: rendering never mutates
/// it, all derived data lives in the per-run rendered snapshot.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Document {
	raw: Value,
}

impl Document {
	pub fn new(raw: Value) -> Self {
		Self { raw }
	}

	pub fn raw(&self) -> &Value {
		&self.raw
	}

	pub fn schema(&self) -> &str {
		self.raw.get("schema").and_then(Value::as_str).unwrap_or("")
	}

	pub fn name(&self) -> &str {
		path::get(&self.raw, "metadata.name").and_then(Value::as_str).unwrap_or("")
	}

	pub fn id(&self) -> DocumentId {
		DocumentId::new(self.schema(), self.name())
	}

	pub fn layer(&self) -> &str {
		path::get(&self.raw, "metadata.layeringDefinition.layer")
			.and_then(Value::as_str)
			.unwrap_or("")
	}

	pub fn is_abstract(&self) -> bool {
		path::get(&self.raw, "metadata.layeringDefinition.abstract")
			.and_then(Value::as_bool)
			.unwrap_or(false)
	}

	pub fn is_layering_policy(&self) -> bool {
		self.schema() == LAYERING_POLICY_SCHEMA
	}

	/// Label mapping other documents match with their parent selector.
	pub fn labels(&self) -> BTreeMap<String, String> {
		string_mapping(path::get(&self.raw, "metadata.labels"))
	}

	/// Selector this document uses to find its parent. Empty means the
	/// document is a layer root and has no parent.
	pub fn parent_selector(&self) -> BTreeMap<String, String> {
		string_mapping(path::get(&self.raw, "metadata.layeringDefinition.parentSelector"))
	}

	/// Parsed layering actions in declaration order.
	pub fn actions(&self) -> StResult<Vec<Action>> {
		let Some(raw_actions) = path::get(&self.raw, "metadata.layeringDefinition.actions")
		else {
			return Ok(Vec::new());
		};
		let Some(entries) = raw_actions.as_array() else {
			return Err(Error::ValidationError(format!(
				"document {}: layeringDefinition.actions is not a sequence",
				self.id()
			)));
		};
		entries
			.iter()
			.map(|entry| {
				let method = entry.get("method").and_then(Value::as_str).ok_or_else(|| {
					Error::ValidationError(format!(
						"document {}: action entry is missing a method",
						self.id()
					))
				})?;
				let path = entry.get("path").and_then(Value::as_str).ok_or_else(|| {
					Error::ValidationError(format!(
						"document {}: action entry is missing a path",
						self.id()
					))
				})?;
				let method = match method {
					"merge" => ActionMethod::Merge,
					"replace" => ActionMethod::Replace,
					"delete" => ActionMethod::Delete,
					other => {
						return Err(Error::UnsupportedActionMethod {
							document: self.id(),
							method: other.into(),
						});
					}
				};
				Ok(Action { method, path: path.to_string() })
			})
			.collect()
	}

	/// Parsed substitution declarations in declaration order.
	pub fn substitutions(&self) -> StResult<Vec<Substitution>> {
		let Some(raw_subs) = path::get(&self.raw, "metadata.substitutions") else {
			return Ok(Vec::new());
		};
		serde_json::from_value(raw_subs.clone()).map_err(|err| {
			Error::ValidationError(format!(
				"document {}: malformed substitutions: {}",
				self.id(),
				err
			))
		})
	}

	/// The document's own declared data block. `Null` when absent.
	pub fn data(&self) -> &Value {
		self.raw.get("data").unwrap_or(&NULL)
	}

	/// Layer order carried by a layering policy document. This is the one
	/// accessor that is strict: the enclosing operation cannot proceed
	/// without it.
	pub fn layer_order(&self) -> StResult<Vec<Box<str>>> {
		let raw_order = path::get(&self.raw, "data.layerOrder").ok_or_else(|| {
			Error::ValidationError(format!(
				"layering policy document {} is missing data.layerOrder",
				self.id()
			))
		})?;
		let entries = raw_order.as_array().ok_or_else(|| {
			Error::ValidationError(format!(
				"layering policy document {}: data.layerOrder is not a sequence",
				self.id()
			))
		})?;
		entries
			.iter()
			.map(|entry| {
				entry.as_str().map(Into::into).ok_or_else(|| {
					Error::ValidationError(format!(
						"layering policy document {}: data.layerOrder contains a non-string entry",
						self.id()
					))
				})
			})
			.collect()
	}
}

/// Read a mapping of scalar values as string pairs. Composite values are
/// skipped; numbers and booleans are stringified.
fn string_mapping(value: Option<&Value>) -> BTreeMap<String, String> {
	let mut out = BTreeMap::new();
	let Some(Value::Object(map)) = value else {
		return out;
	};
	for (key, val) in map {
		let string = match val {
			Value::String(s) => s.clone(),
			Value::Bool(b) => b.to_string(),
			Value::Number(n) => n.to_string(),
			_ => continue,
		};
		out.insert(key.clone(), string);
	}
	out
}


// vim: ts=4
