//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sigtag")]
#[command(about = "Generate text tags for document form fields", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a form-field tag
    Field {
        /// Field type (signature, initials, text, dropdown, checkbox)
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        field_type: Option<String>,

        /// Role of the signer the field belongs to
        #[arg(short, long)]
        role: Option<String>,

        /// Field width
        #[arg(short, long)]
        width: Option<String>,

        /// Field height
        #[arg(long)]
        height: Option<String>,

        /// Whether the field must be filled (true or false)
        #[arg(long)]
        required: Option<bool>,

        /// Display label (text and dropdown fields)
        #[arg(short, long)]
        label: Option<String>,

        /// Dropdown option; repeat for each entry
        #[arg(long = "option", value_name = "OPTION")]
        options: Vec<String>,

        /// Path to an attachment file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Data validator reference or catalog name (text fields)
        #[arg(short, long)]
        validator: Option<String>,
    },

    /// Create a signer-email placeholder tag
    Email {
        /// Role of the signer
        role: String,

        /// Signer's email address
        email: String,

        /// Signing order
        #[arg(long, default_value_t = 1)]
        order: i64,
    },

    /// Encode every field described in a TOML spec file
    Batch {
        /// Path to the spec file
        path: PathBuf,
    },

    /// List the known data validators
    Validators,
}
