//! Error types for sigtag

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the sigtag application
#[derive(Debug, Error)]
pub enum SigtagError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    #[error("Spec file not found: {0}")]
    SpecNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl SigtagError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SigtagError::InvalidArgument(_) => 2,
            SigtagError::MissingArgument(_) => 3,
            SigtagError::SpecNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            SigtagError::InvalidArgument(msg) => {
                if msg.contains("invalid tag type") {
                    format!(
                        "{}\n\n\
                        Valid field types:\n\
                        • signature, initials, text, dropdown, checkbox\n\n\
                        Example:\n\
                        sigtag field --type text --role 'Signer 1' --width 150 --height 20",
                        msg
                    )
                } else if msg.contains("invalid validator") {
                    format!(
                        "{}\n\n\
                        Suggestions:\n\
                        • Run 'sigtag validators' to list the known validators\n\
                        • Pass either a catalog name (e.g. EMAIL) or its reference string",
                        msg
                    )
                } else if msg.contains("invalid dimension") {
                    format!(
                        "{}\n\n\
                        Width and height must be numeric, e.g. --width 150 --height 20",
                        msg
                    )
                } else if msg.contains("Invalid email address") {
                    format!(
                        "{}\n\n\
                        Expected shape: name@domain.tld\n\
                        Example: sigtag email 'Signer 1' alice@example.com",
                        msg
                    )
                } else {
                    self.to_string()
                }
            }
            SigtagError::MissingArgument(attr) => {
                format!(
                    "Missing required argument: {}\n\n\
                    Every field tag needs --type, --role, --width and --height",
                    attr
                )
            }
            SigtagError::SpecNotFound(path) => {
                format!(
                    "Spec file not found: {}\n\n\
                    Suggestions:\n\
                    • Check the path passed to 'sigtag batch'\n\
                    • A spec file holds [[field]] tables, one per tag",
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using SigtagError
pub type Result<T> = std::result::Result<T, SigtagError>;
