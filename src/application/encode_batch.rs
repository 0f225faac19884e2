//! Batch encoding use case
//!
//! Encodes every field described in a TOML spec file. Any invalid entry
//! aborts the batch; no partial tag list is produced.

use crate::domain::tag::TagEncoder;
use crate::error::Result;
use crate::infrastructure::TagSpec;
use std::path::Path;

/// Service for encoding spec files
pub struct BatchService;

impl BatchService {
    /// Load the spec file and encode each field, in file order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The spec file is missing or malformed
    /// - Any field fails validation or encoding
    pub fn execute(path: &Path) -> Result<Vec<String>> {
        let spec = TagSpec::load(path)?;

        spec.fields
            .iter()
            .map(|field| field.to_options().and_then(|o| TagEncoder::encode(&o)))
            .collect()
    }
}
