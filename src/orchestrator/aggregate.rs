//! Result assembly and ranking.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scoring::ScoredCandidate;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResultMetadata {
    pub generated_at: DateTime<Utc>,
    pub processing_time_ms: u64,
    pub total_variants: u32,
    pub version: String,
    pub request_id: String,
}

/// Terminal result shape. Always well-formed: a failed run carries an empty
/// variant list, an empty recommendation id, and the error message.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VariantGenerationResult {
    pub success: bool,
    pub variants: Vec<ScoredCandidate>,
    pub recommended_variant_id: String,
    pub metadata: ResultMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VariantGenerationResult {
    pub fn failed(message: impl Into<String>) -> Self {
        let mut result = aggregate(Vec::new(), 0);
        result.error = Some(message.into());
        result
    }
}

/// Rank scored candidates into the final result.
///
/// The sort is stable and descending by score, so equal scores keep their
/// generation order and the recommendation resolves to the lowest original
/// index among the tied.
pub fn aggregate(
    mut variants: Vec<ScoredCandidate>,
    processing_time_ms: u64,
) -> VariantGenerationResult {
    variants.sort_by(|a, b| b.score.cmp(&a.score));

    let recommended_variant_id = variants
        .first()
        .map(|v| v.variant_id.clone())
        .unwrap_or_default();
    let total_variants = variants.len() as u32;

    VariantGenerationResult {
        success: !variants.is_empty(),
        variants,
        recommended_variant_id,
        metadata: ResultMetadata {
            generated_at: Utc::now(),
            processing_time_ms,
            total_variants,
            version: env!("CARGO_PKG_VERSION").to_string(),
            request_id: Uuid::new_v4().to_string(),
        },
        error: None,
    }
}
