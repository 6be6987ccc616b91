//! Variant generation pipeline.
//!
//! Coordinates the complete request lifecycle:
//! - `VariantOrchestrator`: analyze, plan, dispatch, score, rank
//! - `aggregate`: stable ranking into the terminal result shape

mod aggregate;
mod engine;

pub use aggregate::{aggregate, ResultMetadata, VariantGenerationResult};
pub use engine::{VariantOrchestrator, VariantRequest};
