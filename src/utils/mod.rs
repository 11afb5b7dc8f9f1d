//! Utility functions and helpers for the camlens relay.
//!
//! # Submodules
//!
//! - `logging`: Tracing and logging initialization.

pub mod logging;

/// Bound a string to `max_chars` characters for log output.
pub fn truncate(input: &str, max_chars: usize) -> String {
    if input.chars().count() <= max_chars {
        input.to_string()
    } else {
        let head: String = input.chars().take(max_chars).collect();
        format!("{}...", head)
    }
}
