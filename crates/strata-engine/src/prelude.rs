pub use strata_types::error::{Error, StResult};
pub use strata_types::types::DocumentId;

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
