//! Document fixtures for integration tests.

use serde_json::{json, Value};
use strata_types::document::Document;

/// The active layering policy for a test revision.
pub fn layering_policy(layers: &[&str]) -> Document {
	Document::new(json!({
		"schema": "strata/LayeringPolicy/v1",
		"metadata": {"name": "layering-policy"},
		"data": {"layerOrder": layers}
	}))
}

/// Fluent builder for test documents.
pub struct DocumentBuilder {
	schema: String,
	name: String,
	layer: String,
	is_abstract: bool,
	labels: Value,
	parent_selector: Value,
	actions: Vec<Value>,
	substitutions: Vec<Value>,
	data: Value,
}

impl DocumentBuilder {
	pub fn new(schema: &str, name: &str, layer: &str) -> Self {
		Self {
			schema: schema.to_string(),
			name: name.to_string(),
			layer: layer.to_string(),
			is_abstract: false,
			labels: json!({}),
			parent_selector: json!({}),
			actions: Vec::new(),
			substitutions: Vec::new(),
			data: json!({}),
		}
	}

	pub fn abstract_doc(mut self) -> Self {
		self.is_abstract = true;
		self
	}

	pub fn label(mut self, key: &str, value: &str) -> Self {
		if let Some(map) = self.labels.as_object_mut() {
			map.insert(key.to_string(), json!(value));
		}
		self
	}

	pub fn parent(mut self, key: &str, value: &str) -> Self {
		if let Some(map) = self.parent_selector.as_object_mut() {
			map.insert(key.to_string(), json!(value));
		}
		self
	}

	pub fn action(mut self, method: &str, path: &str) -> Self {
		self.actions.push(json!({"method": method, "path": path}));
		self
	}

	pub fn substitution(
		mut self,
		src_schema: &str,
		src_name: &str,
		source_path: &str,
		dest_path: &str,
	) -> Self {
		self.substitutions.push(json!({
			"source": {"schema": src_schema, "name": src_name},
			"sourcePath": source_path,
			"destPath": dest_path
		}));
		self
	}

	pub fn substitution_pattern(
		mut self,
		src_schema: &str,
		src_name: &str,
		source_path: &str,
		dest_path: &str,
		pattern: &str,
	) -> Self {
		self.substitutions.push(json!({
			"source": {"schema": src_schema, "name": src_name},
			"sourcePath": source_path,
			"destPath": dest_path,
			"pattern": pattern
		}));
		self
	}

	pub fn data(mut self, data: Value) -> Self {
		self.data = data;
		self
	}

	pub fn build(self) -> Document {
		Document::new(json!({
			"schema": self.schema,
			"metadata": {
				"name": self.name,
				"labels": self.labels,
				"layeringDefinition": {
					"abstract": self.is_abstract,
					"layer": self.layer,
					"parentSelector": self.parent_selector,
					"actions": self.actions
				},
				"substitutions": self.substitutions
			},
			"data": self.data
		}))
	}
}

// vim: ts=4
