//! Variant planning.
//!
//! Expands a topic plus an inferred `BusinessContext` into one
//! `VariantConfig` per requested variant. All mappings here are fixed
//! editorial data; planning is deterministic.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::context::{BusinessContext, BusinessGoal, Industry};
use crate::error::{ForgeError, Result};

/// What a variant optimizes for. Labels are kebab-case on the wire and in
/// variant ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum DesignFocus {
    ModernClean,
    ConversionOptimized,
    ContentRich,
}

impl DesignFocus {
    /// Planning order when the caller does not constrain foci.
    pub const CANONICAL_ORDER: [DesignFocus; 3] = [
        DesignFocus::ModernClean,
        DesignFocus::ConversionOptimized,
        DesignFocus::ContentRich,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::ModernClean => "modern-clean",
            Self::ConversionOptimized => "conversion-optimized",
            Self::ContentRich => "content-rich",
        }
    }

    pub fn style(&self) -> DesignStyle {
        match self {
            Self::ModernClean => DesignStyle::Minimal,
            Self::ConversionOptimized => DesignStyle::Vibrant,
            Self::ContentRich => DesignStyle::Corporate,
        }
    }

    pub fn psychology(&self) -> MarketingPsychology {
        match self {
            Self::ModernClean => MarketingPsychology {
                pasona: true,
                four_u: false,
            },
            Self::ConversionOptimized => MarketingPsychology {
                pasona: true,
                four_u: true,
            },
            Self::ContentRich => MarketingPsychology {
                pasona: false,
                four_u: true,
            },
        }
    }

    /// Clause appended to the topic when building the enhanced topic sent to
    /// the generation service.
    pub fn focus_clause(&self) -> &'static str {
        match self {
            Self::ModernClean => "clean modern layout, generous whitespace, refined typography",
            Self::ConversionOptimized => {
                "conversion focused layout with prominent calls to action and social proof"
            }
            Self::ContentRich => {
                "content rich structure with detailed sections and clear information hierarchy"
            }
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::ModernClean => "Minimal, airy design that keeps attention on the core message",
            Self::ConversionOptimized => {
                "High-contrast, action-driven design built to move visitors toward conversion"
            }
            Self::ContentRich => {
                "Structured, information-dense design for visitors who research before acting"
            }
        }
    }

    pub fn features(&self) -> &'static [&'static str] {
        match self {
            Self::ModernClean => &[
                "Hero with a single clear message",
                "Generous whitespace",
                "Refined typography",
                "Subtle accent color",
            ],
            Self::ConversionOptimized => &[
                "Prominent call-to-action buttons",
                "Customer testimonials",
                "Urgency and scarcity cues",
                "Trust badges",
            ],
            Self::ContentRich => &[
                "Detailed feature sections",
                "FAQ block",
                "Comparison tables",
                "Long-form copy areas",
            ],
        }
    }
}

/// Visual direction passed to the generation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DesignStyle {
    Minimal,
    Vibrant,
    Corporate,
    Elegant,
    Playful,
    Classic,
}

impl DesignStyle {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Vibrant => "vibrant",
            Self::Corporate => "corporate",
            Self::Elegant => "elegant",
            Self::Playful => "playful",
            Self::Classic => "classic",
        }
    }
}

/// Copywriting frameworks the generation service is asked to apply.
/// PASONA structures problem-to-action narratives; 4U shapes headlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarketingPsychology {
    pub pasona: bool,
    pub four_u: bool,
}

/// Complete recipe for one candidate. Exactly one per requested variant;
/// immutable once planned.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VariantConfig {
    pub design_focus: DesignFocus,
    pub target_audience: String,
    pub business_goal: BusinessGoal,
    pub industry: Industry,
    pub competitive_advantage: Vec<String>,
    pub enhanced_topic: String,
    pub design_style: DesignStyle,
    pub description: String,
    pub features: Vec<String>,
    pub psychology: MarketingPsychology,
}

/// Caller-supplied field overrides. A set field replaces the context-derived
/// value in every planned variant; unset fields fall through.
#[derive(Debug, Clone, Default)]
pub struct GenerationOverrides {
    pub target_audience: Option<String>,
    pub business_goal: Option<BusinessGoal>,
    pub industry: Option<Industry>,
    pub competitive_advantage: Option<Vec<String>>,
    pub design_style: Option<DesignStyle>,
}

impl GenerationOverrides {
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.target_audience = Some(audience.into());
        self
    }

    pub fn with_goal(mut self, goal: BusinessGoal) -> Self {
        self.business_goal = Some(goal);
        self
    }

    pub fn with_industry(mut self, industry: Industry) -> Self {
        self.industry = Some(industry);
        self
    }

    pub fn with_advantages(mut self, advantages: Vec<String>) -> Self {
        self.competitive_advantage = Some(advantages);
        self
    }

    pub fn with_style(mut self, style: DesignStyle) -> Self {
        self.design_style = Some(style);
        self
    }
}

/// Plans variant configurations for a request.
#[derive(Debug, Default)]
pub struct VariantPlanner;

impl VariantPlanner {
    pub const MIN_VARIANTS: u32 = 1;
    pub const MAX_VARIANTS: u32 = 3;

    pub fn new() -> Self {
        Self
    }

    /// Produce exactly `count` configs.
    ///
    /// A non-empty `focus_areas` is taken verbatim (first `count` entries,
    /// duplicates preserved); otherwise the canonical order is truncated to
    /// `count`, which guarantees distinct foci.
    pub fn plan(
        &self,
        topic: &str,
        count: u32,
        focus_areas: &[DesignFocus],
        context: &BusinessContext,
        overrides: &GenerationOverrides,
    ) -> Result<Vec<VariantConfig>> {
        if !(Self::MIN_VARIANTS..=Self::MAX_VARIANTS).contains(&count) {
            return Err(ForgeError::InvalidVariantCount { requested: count });
        }

        let foci: Vec<DesignFocus> = if focus_areas.is_empty() {
            DesignFocus::CANONICAL_ORDER
                .into_iter()
                .take(count as usize)
                .collect()
        } else {
            focus_areas.iter().copied().take(count as usize).collect()
        };

        let configs: Vec<VariantConfig> = foci
            .into_iter()
            .map(|focus| self.build_config(topic, focus, context, overrides))
            .collect();

        debug!(
            count = configs.len(),
            foci = ?configs.iter().map(|c| c.design_focus.label()).collect::<Vec<_>>(),
            "Planned variant configs"
        );

        Ok(configs)
    }

    fn build_config(
        &self,
        topic: &str,
        focus: DesignFocus,
        context: &BusinessContext,
        overrides: &GenerationOverrides,
    ) -> VariantConfig {
        VariantConfig {
            design_focus: focus,
            target_audience: overrides
                .target_audience
                .clone()
                .unwrap_or_else(|| context.target_audience.clone()),
            business_goal: overrides.business_goal.unwrap_or(context.business_goal),
            industry: overrides.industry.unwrap_or(context.industry),
            competitive_advantage: overrides
                .competitive_advantage
                .clone()
                .unwrap_or_else(|| context.competitive_advantage.clone()),
            enhanced_topic: format!("{} ({})", topic, focus.focus_clause()),
            design_style: overrides.design_style.unwrap_or_else(|| focus.style()),
            description: focus.description().to_string(),
            features: focus.features().iter().map(|f| f.to_string()).collect(),
            psychology: focus.psychology(),
        }
    }
}
