//! Structured CLI output.

mod envelope;
mod json;

pub use envelope::{
    ClipEntry, ClipResultPayload, EventType, JsonEnvelope, ProbePayload, ResultType, SPEC_VERSION,
};
pub use json::emit_json_result;

/// How command results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable output.
    Human,
    /// JSON envelope on stdout.
    Json,
}

impl OutputMode {
    /// Whether output is machine-readable.
    pub fn is_structured(self) -> bool {
        self == Self::Json
    }
}
