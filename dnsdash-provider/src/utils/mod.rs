//! Utility modules.

/// Truncation and redaction for log output.
pub mod log_sanitizer;
