//! Generation service boundary.

use std::sync::Arc;

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::context::{BusinessGoal, Industry};
use crate::error::GenerationFailure;
use crate::planner::{DesignStyle, MarketingPsychology, VariantConfig};

fn default_true() -> bool {
    true
}

/// Request sent to the generation service. camelCase field names are fixed
/// by the external contract.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub topic: String,
    pub target_audience: String,
    pub business_goal: BusinessGoal,
    pub industry: Industry,
    pub competitive_advantage: Vec<String>,
    pub design_style: DesignStyle,
    pub psychology: MarketingPsychology,
}

impl GenerationRequest {
    pub fn from_config(config: &VariantConfig) -> Self {
        Self {
            topic: config.enhanced_topic.clone(),
            target_audience: config.target_audience.clone(),
            business_goal: config.business_goal,
            industry: config.industry,
            competitive_advantage: config.competitive_advantage.clone(),
            design_style: config.design_style,
            psychology: config.psychology,
        }
    }
}

/// Page outline reported by the service alongside the raw markup.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageStructure {
    #[serde(default)]
    pub sections: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMetadata {
    #[serde(default)]
    pub model: String,
}

/// Response returned by the generation service. Missing optional fields
/// deserialize to their defaults; an absent success flag means success.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    #[serde(default = "default_true")]
    pub success: bool,
    pub html_content: String,
    #[serde(default)]
    pub css_content: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub structure: Option<PageStructure>,
    #[serde(default)]
    pub metadata: ResponseMetadata,
}

/// Boundary to the external page generator.
/// Implementations must tolerate concurrent independent invocations; the
/// dispatcher issues one call per variant with no ordering between them.
#[async_trait]
pub trait ContentGenerationService: Send + Sync {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> std::result::Result<GenerationResponse, GenerationFailure>;
}

/// Blanket implementation for Arc-wrapped services.
#[async_trait]
impl<S: ContentGenerationService + ?Sized> ContentGenerationService for Arc<S> {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> std::result::Result<GenerationResponse, GenerationFailure> {
        (**self).generate(request).await
    }
}
