//! Field tag encoding use case
//!
//! Bridges raw command-line input to the domain encoder: every attribute
//! arrives as text, runs through its validator, and only then reaches the
//! serializer, so missing-argument checks fire after value validation.

use crate::domain::tag::{parse_dimension, TagEncoder, TagOptions};
use crate::domain::{DataValidator, FieldType};
use crate::error::Result;
use std::path::PathBuf;
use std::str::FromStr;

/// Raw field attributes as supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct FieldRequest {
    pub field_type: Option<String>,
    pub required: Option<bool>,
    pub role: Option<String>,
    pub label: Option<String>,
    /// Dropdown options, in the order given
    pub options: Vec<String>,
    pub file: Option<PathBuf>,
    pub width: Option<String>,
    pub height: Option<String>,
    /// Validator reference string or catalog name
    pub validator: Option<String>,
}

/// Service for encoding field tags from raw input
pub struct FieldTagService;

impl FieldTagService {
    /// Validate the request and encode it into a tag.
    ///
    /// # Errors
    ///
    /// Returns an error if any supplied value fails its validator, or if a
    /// required attribute is absent.
    pub fn execute(request: &FieldRequest) -> Result<String> {
        let field_type = request
            .field_type
            .as_deref()
            .map(FieldType::from_str)
            .transpose()?;
        let width = request.width.as_deref().map(parse_dimension).transpose()?;
        let height = request.height.as_deref().map(parse_dimension).transpose()?;
        let validator = request
            .validator
            .as_deref()
            .map(DataValidator::resolve)
            .transpose()?;
        let dropdown = if request.options.is_empty() {
            None
        } else {
            Some(request.options.clone())
        };

        let options = TagOptions {
            field_type,
            required: request.required,
            role: request.role.clone(),
            label: request.label.clone(),
            dropdown,
            file: request.file.clone(),
            width,
            height,
            validator,
        };

        TagEncoder::encode(&options)
    }
}
