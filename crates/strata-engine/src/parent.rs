//! Parent resolution.
//!
//! For every document with a non-empty parent selector, finds the single
//! document whose labels cover the selector among strictly higher layers.
//! Parent edges can only point toward the root layer, so the resulting
//! relation is acyclic by construction; a self-parent is still rejected
//! defensively.

use itertools::Itertools;
use std::collections::{BTreeMap, HashMap};

use strata_types::document::Document;

use crate::policy::LayerOrder;
use crate::prelude::*;

/// Resolve the parent edge for every layered document.
///
/// Returns a child → parent mapping covering exactly the documents that
/// have a parent. Layer roots (empty selector, or an unmatched selector at
/// the topmost layer) have no entry.
pub fn resolve_parents(
	documents: &[Document],
	order: &LayerOrder,
) -> StResult<HashMap<DocumentId, DocumentId>> {
	let mut parents = HashMap::new();

	for doc in documents.iter().filter(|d| !d.is_layering_policy()) {
		let layer_idx = order.index_of(doc.layer()).ok_or_else(|| Error::InvalidDocumentLayer {
			document: doc.id(),
			layer: doc.layer().into(),
			reason: format!("layer is not in the layerOrder {:?}", order.layers()).into(),
		})?;

		let selector = doc.parent_selector();
		if selector.is_empty() {
			continue;
		}

		let candidates: Vec<&Document> = documents
			.iter()
			.filter(|p| !p.is_layering_policy())
			.filter(|p| order.index_of(p.layer()).is_some_and(|idx| idx < layer_idx))
			.filter(|p| labels_cover(&p.labels(), &selector))
			.collect();

		match candidates.as_slice() {
			[] => {
				if layer_idx == 0 {
					// Nothing can sit above the root layer; the document
					// stands as a layer root.
					continue;
				}
				return Err(Error::InvalidDocumentLayer {
					document: doc.id(),
					layer: doc.layer().into(),
					reason: format!(
						"parent selector {:?} matched no document in a higher layer",
						selector
					)
					.into(),
				});
			}
			[parent] => {
				if parent.id() == doc.id() {
					return Err(Error::InvalidDocumentParent {
						document: doc.id(),
						parent: parent.id(),
						reason: "document cannot be its own parent".into(),
					});
				}
				if parent.schema() != doc.schema() {
					return Err(Error::InvalidDocumentParent {
						document: doc.id(),
						parent: parent.id(),
						reason: format!(
							"parent schema '{}' does not match document schema '{}'",
							parent.schema(),
							doc.schema()
						)
						.into(),
					});
				}
				debug!(document = %doc.id(), parent = %parent.id(), "resolved parent");
				parents.insert(doc.id(), parent.id());
			}
			many => {
				return Err(Error::IndeterminateDocumentParent {
					document: doc.id(),
					candidates: many.iter().map(|p| p.id()).sorted().collect(),
				});
			}
		}
	}

	Ok(parents)
}

/// Whether `labels` covers every selector pair.
fn labels_cover(labels: &BTreeMap<String, String>, selector: &BTreeMap<String, String>) -> bool {
	selector.iter().all(|(key, value)| labels.get(key) == Some(value))
}


// vim: ts=4
