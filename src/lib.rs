//! sigtag - Text tag generator for document form fields
//!
//! Encodes structured form-field descriptions (type, role, dimensions, label,
//! dropdown options, validator reference) into the compact text tags a
//! document-processing service expands into interactive fields.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::SigtagError;
