//! Result output handling.
//!
//! Handles structured output generation:
//! - `OutputWriter`: Writes results to stdout as text or JSON

mod writer;

pub use writer::OutputWriter;
