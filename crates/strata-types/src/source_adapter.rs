//! Adapter that loads document sets from the backing revision store.
//!
//! The engine never touches storage: a resolution run receives a fully
//! loaded, already deserialized document set. Storage backends implement
//! this trait; the engine's revision entrypoint is its only consumer.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::document::Document;
use crate::prelude::*;
use crate::types::RevisionId;

#[async_trait]
pub trait SourceAdapter: Debug + Send + Sync {
	/// Loads every document belonging to one revision.
	///
	/// Returns `DocumentNotFound` style errors only for lookups the store
	/// cannot satisfy; an existing revision with zero documents is an
	/// empty `Vec`, not an error.
	async fn load_revision(&self, revision: RevisionId) -> StResult<Vec<Document>>;
}

// vim: ts=4
