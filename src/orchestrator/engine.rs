use std::sync::Arc;
use std::time::{Duration, Instant};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::aggregate::{aggregate, VariantGenerationResult};
use crate::config::ForgeConfig;
use crate::context::{BusinessContext, BusinessGoal, ContextAnalyzer, Industry};
use crate::error::{ForgeError, Result};
use crate::generator::{CandidateGenerator, ContentGenerationService};
use crate::planner::{DesignFocus, DesignStyle, GenerationOverrides, VariantPlanner};
use crate::scoring::{ScoringEngine, ScoringPreferences};

fn default_variant_count() -> u32 {
    VariantPlanner::MAX_VARIANTS
}

/// One generation request as received from the caller. Only the topic is
/// required; every other field either overrides the analyzed context or tunes
/// the batch.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VariantRequest {
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_goal: Option<BusinessGoal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<Industry>,
    /// Explicit selling points. Non-empty replaces the extracted ones.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub competitive_advantage: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_style: Option<DesignStyle>,
    #[serde(default = "default_variant_count")]
    pub variant_count: u32,
    /// Explicit focus order. Empty means the canonical order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub focus_areas: Vec<DesignFocus>,
    #[serde(default)]
    pub preferences: ScoringPreferences,
}

impl VariantRequest {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            target_audience: None,
            business_goal: None,
            industry: None,
            competitive_advantage: Vec::new(),
            design_style: None,
            variant_count: default_variant_count(),
            focus_areas: Vec::new(),
            preferences: ScoringPreferences::default(),
        }
    }
}

/// Caller-facing pipeline: analyze, plan, generate concurrently, score, rank.
pub struct VariantOrchestrator {
    analyzer: ContextAnalyzer,
    planner: VariantPlanner,
    generator: CandidateGenerator,
    scorer: ScoringEngine,
}

impl VariantOrchestrator {
    pub fn new(config: &ForgeConfig, service: Arc<dyn ContentGenerationService>) -> Self {
        Self {
            analyzer: ContextAnalyzer::new(&config.analyzer),
            planner: VariantPlanner::new(),
            generator: CandidateGenerator::new(
                service,
                Duration::from_secs(config.generator.request_timeout_secs),
            ),
            scorer: ScoringEngine::new(config.scoring.clone()),
        }
    }

    /// Run the pipeline, mapping every fatal error into the terminal result
    /// shape. Callers always receive a well-formed result.
    pub async fn generate(&self, request: VariantRequest) -> VariantGenerationResult {
        match self.try_generate(&request).await {
            Ok(result) => result,
            Err(e) => {
                error!(error = %e, "Variant generation failed");
                VariantGenerationResult::failed(e.to_string())
            }
        }
    }

    /// Run the pipeline, surfacing fatal errors to the caller. Per-variant
    /// failures never land here; they resolve to fallback candidates inside
    /// the generator.
    pub async fn try_generate(&self, request: &VariantRequest) -> Result<VariantGenerationResult> {
        let topic = request.topic.trim();
        if topic.is_empty() {
            return Err(ForgeError::EmptyTopic);
        }
        if !(VariantPlanner::MIN_VARIANTS..=VariantPlanner::MAX_VARIANTS)
            .contains(&request.variant_count)
        {
            return Err(ForgeError::InvalidVariantCount {
                requested: request.variant_count,
            });
        }

        let analyzed = self.analyzer.analyze(&request.topic);
        let overrides = overrides_from(request);
        let configs = self.planner.plan(
            topic,
            request.variant_count,
            &request.focus_areas,
            &analyzed,
            &overrides,
        )?;
        let context = effective_context(&analyzed, &overrides);

        info!(count = configs.len(), "Dispatching variant generation");
        let started = Instant::now();
        let candidates = self.generator.generate_all(&configs).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        let scored = candidates
            .into_iter()
            .zip(configs.iter())
            .enumerate()
            .map(|(index, (candidate, config))| {
                self.scorer.score(
                    candidate,
                    &context,
                    config.design_focus,
                    index,
                    &request.preferences,
                )
            })
            .collect();

        let result = aggregate(scored, elapsed_ms);
        info!(
            variants = result.variants.len(),
            recommended = %result.recommended_variant_id,
            elapsed_ms,
            "Variant generation complete"
        );
        Ok(result)
    }
}

fn overrides_from(request: &VariantRequest) -> GenerationOverrides {
    GenerationOverrides {
        target_audience: request.target_audience.clone(),
        business_goal: request.business_goal,
        industry: request.industry,
        competitive_advantage: if request.competitive_advantage.is_empty() {
            None
        } else {
            Some(request.competitive_advantage.clone())
        },
        design_style: request.design_style,
    }
}

/// The context the scorer sees: analyzed fields with overrides applied, the
/// same precedence the planner uses per variant.
fn effective_context(analyzed: &BusinessContext, overrides: &GenerationOverrides) -> BusinessContext {
    BusinessContext {
        industry: overrides.industry.unwrap_or(analyzed.industry),
        target_audience: overrides
            .target_audience
            .clone()
            .unwrap_or_else(|| analyzed.target_audience.clone()),
        business_goal: overrides.business_goal.unwrap_or(analyzed.business_goal),
        competitive_advantage: overrides
            .competitive_advantage
            .clone()
            .unwrap_or_else(|| analyzed.competitive_advantage.clone()),
        tone: analyzed.tone,
    }
}
