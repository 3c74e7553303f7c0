//! Structured-logging adapter for the `tracing` ecosystem.
//!
//! The chain model only produces a record ([`ErrorInfo`](crate::ErrorInfo));
//! this module hands that record to `tracing` as one event with stable field
//! names, so a subscriber sees the same shape a JSON log sink would.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-weave = { version = "0.2", features = ["tracing"] }
//! ```

use crate::types::Error;

/// Extension trait that emits a chain as one structured `tracing` event.
pub trait ErrorTraceExt {
    /// Emits an error-level event carrying the chain's compact message plus
    /// `stacktrace` and `values` fields from the export record.
    fn emit(&self);
}

impl ErrorTraceExt for Error {
    fn emit(&self) {
        let info = self.info();
        let stacktrace = info.stack_traces.join("\n");
        let values = serde_json::to_string(&info.values).unwrap_or_default();
        tracing::error!(
            stacktrace = %stacktrace,
            values = %values,
            "{}",
            info.error_chain,
        );
    }
}
