//! Resolution orchestrator.
//!
//! Sequences the engine stages for one revision: layer order, parent
//! edges, layering, substitution. The first failing stage aborts the run —
//! later stages assume a consistent layer and parent graph, and a rendered
//! set with one broken document is worthless to callers that may depend on
//! it structurally.

use itertools::Itertools;

use strata_types::document::Document;
use strata_types::source_adapter::SourceAdapter;
use strata_types::types::{RenderedDocument, RevisionId};

use crate::prelude::*;
use crate::settings::ResolveOptions;
use crate::{layering, parent, policy, substitution};

/// Resolve a revision's document set with default options.
pub fn resolve(documents: &[Document]) -> StResult<Vec<RenderedDocument>> {
	resolve_with_options(documents, &ResolveOptions::default())
}

/// Resolve a revision's document set into its rendered form.
///
/// Returns the concrete (non-abstract) documents with their rendered data,
/// ordered by layer then identity. The input set is never mutated; every
/// run computes a fresh snapshot.
pub fn resolve_with_options(
	documents: &[Document],
	options: &ResolveOptions,
) -> StResult<Vec<RenderedDocument>> {
	let order = policy::resolve_layer_order(documents)?;
	let parents = parent::resolve_parents(documents, &order)?;
	debug!(documents = documents.len(), edges = parents.len(), "resolved parent graph");

	let mut rendered = layering::apply_layering(documents, &order, &parents)?;
	substitution::apply_substitutions(documents, &mut rendered, options)?;

	let output: Vec<RenderedDocument> = documents
		.iter()
		.filter(|d| !d.is_layering_policy() && !d.is_abstract())
		.map(|d| (order.index_of(d.layer()), d))
		.sorted_by_key(|(idx, d)| (*idx, d.id()))
		.filter_map(|(_, d)| {
			let rendered_data = rendered.remove(&d.id())?;
			let labels = d.labels();
			Some(RenderedDocument {
				schema: d.schema().into(),
				name: d.name().into(),
				layer: d.layer().into(),
				labels: if labels.is_empty() { None } else { Some(labels) },
				rendered_data,
			})
		})
		.collect();

	info!(rendered = output.len(), "resolution run complete");
	Ok(output)
}

/// Load one revision through the source boundary and resolve it.
///
/// The only async surface of the engine; the resolution itself stays a
/// synchronous pass over the loaded set.
pub async fn render_revision(
	source: &dyn SourceAdapter,
	revision: RevisionId,
	options: &ResolveOptions,
) -> StResult<Vec<RenderedDocument>> {
	let documents = source.load_revision(revision).await?;
	debug!(revision = %revision, documents = documents.len(), "loaded revision");
	resolve_with_options(&documents, options)
}

// vim: ts=4
