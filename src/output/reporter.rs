//! Structured result and error emission.

use crate::error::Error;
use crate::output::json_envelope::{ErrorPayload, ErrorSeverity, EventType, JsonEnvelope};

/// Emit a JSON result event to stdout.
///
/// This is used by command handlers to output structured results when
/// running in JSON output mode.
pub fn emit_json_result<T: serde::Serialize>(payload: &T) {
    emit(EventType::Result, payload);
}

/// Emit a fatal JSON error event to stdout.
pub fn emit_json_error(error: &Error) {
    emit(EventType::Error, &error_payload(error));
}

/// Build the error payload for an error.
pub fn error_payload(error: &Error) -> ErrorPayload {
    ErrorPayload {
        code: error.code().to_string(),
        severity: ErrorSeverity::Fatal,
        message: error.to_string(),
        suggestion: error.suggestion().map(str::to_string),
    }
}

fn emit<T: serde::Serialize>(event: EventType, payload: &T) {
    let envelope = JsonEnvelope::new(event, payload);
    match serde_json::to_string(&envelope) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            // Log to stderr so it doesn't corrupt JSON output stream
            eprintln!("error: failed to serialize JSON result: {e}");
        }
    }
}
