//! TOML spec files for batch encoding
//!
//! A spec file holds one `[[field]]` table per tag. Width, height and
//! dropdown entries are read as raw TOML values and coerced through the
//! domain validators, so a string width of "150" or a fractional 150.9 both
//! work while a non-numeric value is rejected.

use crate::domain::tag::{parse_dimension, TagOptions};
use crate::domain::{DataValidator, FieldType};
use crate::error::{Result, SigtagError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// A batch of field descriptions loaded from disk
#[derive(Debug, Deserialize)]
pub struct TagSpec {
    #[serde(default, rename = "field")]
    pub fields: Vec<FieldSpec>,
}

/// One field description as written in the spec file.
///
/// Unknown keys in a field table are ignored.
#[derive(Debug, Deserialize)]
pub struct FieldSpec {
    #[serde(rename = "type")]
    pub field_type: Option<String>,
    pub required: Option<bool>,
    pub role: Option<String>,
    pub label: Option<String>,
    pub dropdown: Option<Vec<toml::Value>>,
    pub file: Option<PathBuf>,
    pub width: Option<toml::Value>,
    pub height: Option<toml::Value>,
    pub validator: Option<String>,
}

impl TagSpec {
    /// Load a spec file from the given path
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SigtagError::SpecNotFound(path.to_path_buf())
            } else {
                SigtagError::Io(e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }
}

impl FieldSpec {
    /// Convert the raw spec entry into validated tag options
    pub fn to_options(&self) -> Result<TagOptions> {
        let field_type = self
            .field_type
            .as_deref()
            .map(FieldType::from_str)
            .transpose()?;
        let dropdown = self
            .dropdown
            .as_deref()
            .map(dropdown_options)
            .transpose()?;
        let width = self.width.as_ref().map(dimension_value).transpose()?;
        let height = self.height.as_ref().map(dimension_value).transpose()?;
        let validator = self
            .validator
            .as_deref()
            .map(DataValidator::resolve)
            .transpose()?;

        Ok(TagOptions {
            field_type,
            required: self.required,
            role: self.role.clone(),
            label: self.label.clone(),
            dropdown,
            file: self.file.clone(),
            width,
            height,
            validator,
        })
    }
}

fn dimension_value(value: &toml::Value) -> Result<i64> {
    match value {
        toml::Value::Integer(n) => Ok(*n),
        toml::Value::Float(f) if f.is_finite() => Ok(f.trunc() as i64),
        toml::Value::String(s) => parse_dimension(s),
        _ => Err(SigtagError::InvalidArgument("invalid dimension".to_string())),
    }
}

fn dropdown_options(values: &[toml::Value]) -> Result<Vec<String>> {
    values
        .iter()
        .map(|value| match value {
            toml::Value::String(s) => Ok(s.clone()),
            _ => Err(SigtagError::InvalidArgument(
                "non-string dropdown option".to_string(),
            )),
        })
        .collect()
}
