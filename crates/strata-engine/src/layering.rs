//! Layering engine.
//!
//! Renders documents in ascending layer order (root layer first): each
//! document seeds its working data from its parent's already rendered data
//! and applies its declared actions against that seed. Layer roots seed
//! from their own data block. Abstract documents are rendered like any
//! other so their descendants can inherit from them; the orchestrator
//! drops them from the final output.

use itertools::Itertools;
use serde_json::{Map, Value};
use std::collections::HashMap;

use strata_types::document::{Action, ActionMethod, Document};
use strata_types::path;

use crate::policy::LayerOrder;
use crate::prelude::*;

/// Render every layered document's data, parent data first.
///
/// The returned map contains abstract documents too; substitution and
/// output filtering happen downstream.
pub fn apply_layering(
	documents: &[Document],
	order: &LayerOrder,
	parents: &HashMap<DocumentId, DocumentId>,
) -> StResult<HashMap<DocumentId, Value>> {
	let layered: Vec<(usize, &Document)> = documents
		.iter()
		.filter(|d| !d.is_layering_policy())
		.map(|d| {
			order
				.index_of(d.layer())
				.map(|idx| (idx, d))
				.ok_or_else(|| Error::InvalidDocumentLayer {
					document: d.id(),
					layer: d.layer().into(),
					reason: format!("layer is not in the layerOrder {:?}", order.layers()).into(),
				})
		})
		.collect::<StResult<_>>()?;

	let mut rendered: HashMap<DocumentId, Value> = HashMap::with_capacity(layered.len());

	for (_, doc) in layered.into_iter().sorted_by_key(|(idx, d)| (*idx, d.id())) {
		let id = doc.id();
		let own = match doc.data() {
			Value::Null => Value::Object(Map::new()),
			data => data.clone(),
		};

		let mut seed = match parents.get(&id) {
			Some(parent_id) => rendered
				.get(parent_id)
				.cloned()
				.ok_or_else(|| {
					Error::ValidationError(format!(
						"parent {} was not rendered before child {}",
						parent_id, id
					))
				})?,
			None => own.clone(),
		};

		for action in doc.actions()? {
			apply_action(&mut seed, &own, &action, &id)?;
		}

		debug!(document = %id, "rendered document data");
		rendered.insert(id, seed);
	}

	Ok(rendered)
}

/// Apply one action to the seed, reading the child subtree from `own`.
fn apply_action(
	seed: &mut Value,
	own: &Value,
	action: &Action,
	id: &DocumentId,
) -> StResult<()> {
	let child = path::get(own, &action.path);
	match action.method {
		ActionMethod::Delete => {
			// No-op when the path is already absent.
			path::delete(seed, &action.path);
		}
		ActionMethod::Replace => match child {
			Some(subtree) => {
				let subtree = subtree.clone();
				path::set(seed, &action.path, subtree).map_err(|err| {
					Error::ValidationError(format!(
						"document {}: replace at '{}' failed: {}",
						id, action.path, err
					))
				})?;
			}
			None => {
				// The child holds nothing for this path: the parent's
				// subtree is cut rather than kept.
				if !path::delete(seed, &action.path) {
					return Err(Error::MissingDocumentKey {
						document: id.clone(),
						path: action.path.clone().into(),
					});
				}
			}
		},
		ActionMethod::Merge => match child {
			Some(subtree) => match path::get(seed, &action.path) {
				Some(existing) => {
					let mut merged = existing.clone();
					path::deep_merge(&mut merged, subtree);
					path::set(seed, &action.path, merged).map_err(|err| {
						Error::ValidationError(format!(
							"document {}: merge at '{}' failed: {}",
							id, action.path, err
						))
					})?;
				}
				None => {
					let subtree = subtree.clone();
					path::set(seed, &action.path, subtree).map_err(|err| {
						Error::ValidationError(format!(
							"document {}: merge at '{}' failed: {}",
							id, action.path, err
						))
					})?;
				}
			},
			None => {
				if path::get(seed, &action.path).is_none() {
					return Err(Error::MissingDocumentKey {
						document: id.clone(),
						path: action.path.clone().into(),
					});
				}
				// Parent-only path: nothing to merge in, the inherited
				// subtree stands.
			}
		},
	}
	Ok(())
}


// vim: ts=4
