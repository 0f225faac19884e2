//! Field type definitions and wire codes

use crate::error::SigtagError;
use std::fmt;
use std::str::FromStr;

/// Interactive widget kinds a tag can instantiate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Signature box
    Signature,
    /// Initials box
    Initials,
    /// Free text input
    Text,
    /// Dropdown selection
    Dropdown,
    /// Checkbox
    Checkbox,
}

impl FieldType {
    /// One-character code used in the serialized tag
    pub fn code(&self) -> &'static str {
        match self {
            FieldType::Signature => "s",
            FieldType::Initials => "i",
            FieldType::Text => "t",
            FieldType::Dropdown => "d",
            FieldType::Checkbox => "c",
        }
    }

    /// The name the type is requested by
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::Signature => "signature",
            FieldType::Initials => "initials",
            FieldType::Text => "text",
            FieldType::Dropdown => "dropdown",
            FieldType::Checkbox => "checkbox",
        }
    }
}

impl FromStr for FieldType {
    type Err = SigtagError;

    // Names are matched exactly; the wire format is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "signature" => Ok(FieldType::Signature),
            "initials" => Ok(FieldType::Initials),
            "text" => Ok(FieldType::Text),
            "dropdown" => Ok(FieldType::Dropdown),
            "checkbox" => Ok(FieldType::Checkbox),
            _ => Err(SigtagError::InvalidArgument("invalid tag type".to_string())),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
