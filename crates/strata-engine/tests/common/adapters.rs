//! In-memory boundary adapters for integration tests.

use async_trait::async_trait;
use std::collections::HashMap;

use strata_types::document::Document;
use strata_types::error::{Error, StResult};
use strata_types::source_adapter::SourceAdapter;
use strata_types::types::RevisionId;

/// A source adapter backed by a plain map, one document set per revision.
#[derive(Debug, Default)]
pub struct InMemorySource {
	revisions: HashMap<RevisionId, Vec<Document>>,
}

impl InMemorySource {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_revision(mut self, revision: RevisionId, documents: Vec<Document>) -> Self {
		self.revisions.insert(revision, documents);
		self
	}
}

#[async_trait]
impl SourceAdapter for InMemorySource {
	async fn load_revision(&self, revision: RevisionId) -> StResult<Vec<Document>> {
		self.revisions
			.get(&revision)
			.cloned()
			.ok_or(Error::RevisionNotFound { revision })
	}
}

// vim: ts=4
