//! JSON result emission.

use serde::Serialize;
use tracing::error;

use super::{EventType, JsonEnvelope};

/// Emit a result payload as a JSON envelope on stdout.
pub fn emit_json_result<T: Serialize>(payload: &T) {
    let envelope = JsonEnvelope::new(EventType::Result, payload);
    match serde_json::to_string(&envelope) {
        Ok(json) => println!("{json}"),
        Err(e) => error!("Failed to serialize JSON output: {e}"),
    }
}
