//! Field tag attributes

use crate::domain::{DataValidator, FieldType};
use crate::error::{Result, SigtagError};
use std::path::PathBuf;

/// Attributes describing a single form field.
///
/// `field_type`, `role`, `width` and `height` are required by the encoder;
/// they are still `Option` here so that a missing one is reported as a
/// missing-argument error at encode time rather than a construction failure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagOptions {
    /// Widget kind to instantiate
    pub field_type: Option<FieldType>,

    /// Whether the field must be filled before signing
    pub required: Option<bool>,

    /// Role of the signer the field belongs to
    pub role: Option<String>,

    /// Display label (text and dropdown fields only)
    pub label: Option<String>,

    /// Selectable options, in order (dropdown fields only)
    pub dropdown: Option<Vec<String>>,

    /// Path to an attachment; must exist when the tag is encoded
    pub file: Option<PathBuf>,

    /// Field width in document units
    pub width: Option<i64>,

    /// Field height in document units
    pub height: Option<i64>,

    /// Server-side data validator (text fields only)
    pub validator: Option<DataValidator>,
}

impl TagOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Parse a raw dimension value into an integer.
///
/// Accepts plain integers and fractional input, which truncates toward zero.
pub fn parse_dimension(raw: &str) -> Result<i64> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok(value);
    }
    if let Ok(value) = trimmed.parse::<f64>() {
        if value.is_finite() {
            return Ok(value.trunc() as i64);
        }
    }
    Err(SigtagError::InvalidArgument("invalid dimension".to_string()))
}
