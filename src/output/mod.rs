//! Run summaries and structured output.

pub mod json_envelope;
mod reporter;

pub use json_envelope::{ConfigPayload, ErrorPayload, MergeSummary, ResultType};
pub use reporter::{emit_json_error, emit_json_result, error_payload};
