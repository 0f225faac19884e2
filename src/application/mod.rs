//! Application layer - Use cases and orchestration

pub mod encode_batch;
pub mod encode_field;

pub use encode_batch::BatchService;
pub use encode_field::{FieldRequest, FieldTagService};
