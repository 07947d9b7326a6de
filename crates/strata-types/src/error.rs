//! Error types shared across the strata workspace.
//!
//! Every failure mode of a resolution run maps to exactly one variant
//! carrying structured context (document identities, offending paths, cycle
//! membership). The boundary layers translate variants into user-facing
//! responses; nothing here knows about wire formats.

use crate::types::{DocumentId, RevisionId};

pub type StResult<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
	/// Zero or more than one active layering policy document in the set.
	LayeringPolicyNotFound,
	/// A document's layer is not usable: absent from the layer order, or
	/// its parent selector matched nothing below the root layer.
	InvalidDocumentLayer { document: DocumentId, layer: Box<str>, reason: Box<str> },
	/// The resolved parent violates the layering rules (self-parent,
	/// schema mismatch).
	InvalidDocumentParent { document: DocumentId, parent: DocumentId, reason: Box<str> },
	/// More than one parent candidate matched a document's selector.
	IndeterminateDocumentParent { document: DocumentId, candidates: Vec<DocumentId> },
	/// A replace/merge action referenced a path absent from both the parent
	/// seed and the child's own data.
	MissingDocumentKey { document: DocumentId, path: Box<str> },
	/// A substitution source path was absent from the source's rendered
	/// data, or a declared destination pattern could not be matched.
	MissingDocumentPattern { document: DocumentId, path: Box<str>, pattern: Option<Box<str>> },
	/// A substitution referenced a source document that is not part of the
	/// rendered set.
	SubstitutionSourceNotFound { source: DocumentId, document: DocumentId },
	/// The substitution graph contains a cycle; carries every document in
	/// the unprocessable residual set.
	SubstitutionDependencyCycle { cycle: Vec<DocumentId> },
	/// An action's method is not one of merge/replace/delete.
	UnsupportedActionMethod { document: DocumentId, method: Box<str> },
	/// A substitution failed structurally (e.g. the destination path
	/// traverses through a scalar).
	UnknownSubstitution { document: DocumentId, details: Box<str> },
	/// A revision lookup missed at the source boundary.
	RevisionNotFound { revision: RevisionId },
	/// Present-but-malformed metadata structure.
	ValidationError(String),
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::LayeringPolicyNotFound => {
				write!(f, "Required layering policy was not found for layering.")
			}
			Error::InvalidDocumentLayer { document, layer, reason } => {
				write!(f, "Invalid layer '{}' for document {}: {}", layer, document, reason)
			}
			Error::InvalidDocumentParent { document, parent, reason } => {
				write!(
					f,
					"The document parent {} is invalid for document {}. Reason: {}",
					parent, document, reason
				)
			}
			Error::IndeterminateDocumentParent { document, candidates } => {
				write!(
					f,
					"Too many parent documents found for document {}: {}",
					document,
					join_ids(candidates)
				)
			}
			Error::MissingDocumentKey { document, path } => {
				write!(
					f,
					"Missing document key '{}' from either parent or child for document {}.",
					path, document
				)
			}
			Error::MissingDocumentPattern { document, path, pattern } => match pattern {
				Some(pattern) => write!(
					f,
					"Missing document pattern '{}' at path '{}' in document {}.",
					pattern, path, document
				),
				None => write!(
					f,
					"Missing data at path '{}' in substitution source document {}.",
					path, document
				),
			},
			Error::SubstitutionSourceNotFound { source, document } => {
				write!(
					f,
					"Required substitution source document {} was not found, yet is referenced by {}.",
					source, document
				)
			}
			Error::SubstitutionDependencyCycle { cycle } => {
				write!(
					f,
					"Cannot determine substitution order as a dependency cycle exists for the following documents: {}.",
					join_ids(cycle)
				)
			}
			Error::UnsupportedActionMethod { document, method } => {
				write!(f, "Action method '{}' is invalid for document {}.", method, document)
			}
			Error::UnknownSubstitution { document, details } => {
				write!(
					f,
					"An unknown error occurred while trying to perform substitution for document {}: {}",
					document, details
				)
			}
			Error::RevisionNotFound { revision } => {
				write!(f, "The requested revision {} was not found.", revision)
			}
			Error::ValidationError(message) => write!(f, "{}", message),
		}
	}
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Self::ValidationError(err.to_string())
	}
}

fn join_ids(ids: &[DocumentId]) -> String {
	ids.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}


// vim: ts=4
