//! Layering policy resolution.
//!
//! Locates the single active layering policy document in a revision's
//! document set and extracts the canonical layer order. Position index is
//! the sole ordering key: index 0 is the topmost (root) layer, parents
//! always sit at a strictly smaller index than their children.

use std::collections::HashMap;

use strata_types::document::Document;

use crate::prelude::*;

/// The resolved layer order for one resolution run.
#[derive(Debug, Clone)]
pub struct LayerOrder {
	layers: Vec<Box<str>>,
	index: HashMap<Box<str>, usize>,
}

impl LayerOrder {
	pub fn new(layers: Vec<Box<str>>) -> Self {
		let index =
			layers.iter().enumerate().map(|(idx, layer)| (layer.clone(), idx)).collect();
		Self { layers, index }
	}

	/// Position of `layer` in the order, root layer first.
	pub fn index_of(&self, layer: &str) -> Option<usize> {
		self.index.get(layer).copied()
	}

	pub fn contains(&self, layer: &str) -> bool {
		self.index.contains_key(layer)
	}

	/// Whether `layer` is the topmost (root) layer.
	pub fn is_root(&self, layer: &str) -> bool {
		self.index_of(layer) == Some(0)
	}

	pub fn layers(&self) -> &[Box<str>] {
		&self.layers
	}
}

/// Find the single active (non-abstract) layering policy document and
/// extract its layer order. Zero or more than one such document fails the
/// run with `LayeringPolicyNotFound`.
pub fn resolve_layer_order(documents: &[Document]) -> StResult<LayerOrder> {
	let mut active = None;
	for doc in documents.iter().filter(|d| d.is_layering_policy() && !d.is_abstract()) {
		if let Some(existing) = active.replace(doc) {
			warn!(
				first = %existing.id(),
				second = %doc.id(),
				"multiple active layering policy documents"
			);
			return Err(Error::LayeringPolicyNotFound);
		}
	}
	let policy = active.ok_or(Error::LayeringPolicyNotFound)?;

	let layers = policy.layer_order()?;
	if layers.is_empty() {
		return Err(Error::ValidationError(format!(
			"layering policy document {} declares an empty layerOrder",
			policy.id()
		)));
	}
	debug!(policy = %policy.id(), layers = ?layers, "resolved layer order");
	Ok(LayerOrder::new(layers))
}


// vim: ts=4
