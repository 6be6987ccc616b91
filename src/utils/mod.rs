//! Shared utility functions.
//!
//! String truncation helpers (UTF-8 safe) used by the analyzer, the HTTP
//! adapter, and terminal display.

mod string;

pub use string::{clip_chars, truncate_chars, truncate_with_marker};
