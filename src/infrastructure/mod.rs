//! Infrastructure layer - External input formats and filesystem access

pub mod spec_file;

pub use spec_file::{FieldSpec, TagSpec};
