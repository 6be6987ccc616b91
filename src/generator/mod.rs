//! Candidate generation.
//!
//! One service call per planned variant, dispatched concurrently with
//! per-call deadlines. A failed call never removes a variant from the
//! batch: it degrades into a synthesized fallback candidate instead.

mod dispatcher;
mod fallback;
mod http;
mod service;

pub use dispatcher::CandidateGenerator;
pub use fallback::{synthesize_fallback, FALLBACK_MODEL};
pub use http::HttpContentService;
pub use service::{
    ContentGenerationService, GenerationRequest, GenerationResponse, PageStructure,
    ResponseMetadata,
};

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One generated (or synthesized) page variant, not yet scored.
/// `success` records provenance: true for service output, false for a
/// locally synthesized fallback.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub success: bool,
    pub html_content: String,
    pub css_content: String,
    pub title: String,
    pub structure: Option<PageStructure>,
    pub metadata: CandidateMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CandidateMetadata {
    pub generated_at: DateTime<Utc>,
    pub model: String,
    pub processing_time_ms: u64,
}
