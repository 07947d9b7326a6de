//! Resolution options.

use serde::Deserialize;

/// Per-run knobs for the resolution engine.
///
/// The defaults are the strict behavior; both escape hatches exist for
/// operators rendering partially populated document sets.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolveOptions {
	/// Fail the run when a substitution references a source document that
	/// is not part of the rendered set. When disabled, the offending entry
	/// is skipped with a warning and the rest of the run proceeds.
	pub fail_on_missing_substitution_source: bool,

	/// Allow abstract documents to serve as substitution sources.
	pub allow_abstract_substitution_sources: bool,
}

impl Default for ResolveOptions {
	fn default() -> Self {
		Self {
			fail_on_missing_substitution_source: true,
			allow_abstract_substitution_sources: false,
		}
	}
}


// vim: ts=4
