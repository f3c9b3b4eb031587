//! Structured errors for malformed wire input.
//!
//! Verification functions never return `Err`: a rejected proof or transcript is a normal boolean
//! outcome (see the crate-level docs and `SPEC_FULL.md` §7). This module only covers the other
//! fallible surface — turning untrusted bytes back into `Point`/`Scalar`/protocol values — which
//! must fail with a named field rather than panic.

use thiserror::Error;

/// An error encountered while decoding a serialized value.
#[derive(Debug, Error, Clone)]
pub enum PvssError {
    #[error("field `{field}` is not a valid canonical point encoding")]
    InvalidPoint { field: &'static str },

    #[error("field `{field}` is not a valid canonical scalar encoding")]
    InvalidScalar { field: &'static str },

    #[error("field `{field}` has length {actual}, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("field `{field}` could not be decoded: {source}")]
    Bcs {
        field: &'static str,
        #[source]
        source: std::sync::Arc<bcs::Error>,
    },
}

impl PvssError {
    pub(crate) fn bcs(field: &'static str, source: bcs::Error) -> Self {
        PvssError::Bcs {
            field,
            source: std::sync::Arc::new(source),
        }
    }
}
