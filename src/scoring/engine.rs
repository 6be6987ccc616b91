//! Candidate scoring and recommendation copy.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::context::BusinessContext;
use crate::generator::{Candidate, CandidateMetadata, PageStructure};
use crate::planner::DesignFocus;

use super::markup;
use super::tables::ScoringTables;

/// Fixed composite assigned to every fallback candidate. Strictly below the
/// floor of any normally generated variant (sum of the table defaults), so
/// fallbacks can never outrank real output.
pub const FALLBACK_SCORE: u32 = 30;

/// Flat bonus per stated preference that matches the variant's focus.
pub const PREFERENCE_BONUS: u32 = 5;

pub const MAX_COMPOSITE: u32 = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// Focus/goal affinity, 0 to 30.
    pub business_alignment: u32,
    /// Focus/industry affinity, 0 to 25.
    pub industry_fit: u32,
    /// Markup structure heuristics, 0 to 25.
    pub design_quality: u32,
    /// Content substance heuristics, 0 to 20.
    pub content_quality: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.business_alignment + self.industry_fit + self.design_quality + self.content_quality
    }
}

/// Explicit requester preferences. Each flag favors exactly one design focus
/// and adds a flat bonus when that focus is being scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoringPreferences {
    pub minimal_design: bool,
    pub fast_loading: bool,
    pub strong_cta: bool,
    pub social_proof: bool,
    pub seo_content: bool,
    pub detailed_information: bool,
}

impl ScoringPreferences {
    pub fn matches_for(&self, focus: DesignFocus) -> u32 {
        let flags = match focus {
            DesignFocus::ModernClean => [self.minimal_design, self.fast_loading],
            DesignFocus::ConversionOptimized => [self.strong_cta, self.social_proof],
            DesignFocus::ContentRich => [self.seo_content, self.detailed_information],
        };
        flags.iter().filter(|set| **set).count() as u32
    }

    pub fn bonus_for(&self, focus: DesignFocus) -> u32 {
        self.matches_for(focus) * PREFERENCE_BONUS
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub reason: String,
    pub target_use_case: String,
    pub strengths: Vec<String>,
}

/// A generated candidate with its score attached. Field order mirrors the
/// serialized output: candidate payload first, then the evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate {
    pub variant_id: String,
    pub design_focus: DesignFocus,
    pub success: bool,
    pub html_content: String,
    pub css_content: String,
    pub title: String,
    pub structure: Option<PageStructure>,
    pub metadata: CandidateMetadata,
    pub score: u32,
    pub breakdown: ScoreBreakdown,
    pub reasoning: Vec<String>,
    pub recommendation: Recommendation,
}

/// Deterministic scorer. All variance comes from the candidate markup and the
/// request context; scoring the same inputs twice yields identical results.
pub struct ScoringEngine {
    tables: ScoringTables,
}

impl ScoringEngine {
    pub fn new(tables: ScoringTables) -> Self {
        Self { tables }
    }

    /// Score one candidate. `index` is the zero-based position in the
    /// generation batch and feeds the stable variant id.
    pub fn score(
        &self,
        candidate: Candidate,
        context: &BusinessContext,
        focus: DesignFocus,
        index: usize,
        preferences: &ScoringPreferences,
    ) -> ScoredCandidate {
        let variant_id = format!("variant_{}_{}", index + 1, focus.label());

        if !candidate.success {
            debug!(variant_id = %variant_id, "Scoring fallback candidate at the fixed floor");
            return Self::scored(
                variant_id,
                candidate,
                focus,
                FALLBACK_SCORE,
                ScoreBreakdown::default(),
                vec!["Generation failed; a placeholder template was substituted".to_string()],
                fallback_recommendation(),
            );
        }

        if candidate.html_content.trim().is_empty() {
            warn!(variant_id = %variant_id, "Candidate claims success but has no markup");
            return Self::scored(
                variant_id,
                candidate,
                focus,
                0,
                ScoreBreakdown::default(),
                vec!["Scoring failed: the service returned no usable markup".to_string()],
                unusable_recommendation(),
            );
        }

        let breakdown = ScoreBreakdown {
            business_alignment: self
                .tables
                .business_alignment(focus, context.business_goal),
            industry_fit: self.tables.industry_affinity(focus, context.industry),
            design_quality: markup::design_quality(
                &candidate.html_content,
                &candidate.css_content,
            ),
            content_quality: markup::content_quality(&candidate.html_content),
        };
        let bonus = preferences.bonus_for(focus);
        let score = (breakdown.total() + bonus).min(MAX_COMPOSITE);

        debug!(
            variant_id = %variant_id,
            business_alignment = breakdown.business_alignment,
            industry_fit = breakdown.industry_fit,
            design_quality = breakdown.design_quality,
            content_quality = breakdown.content_quality,
            bonus,
            score,
            "Variant scored"
        );

        let reasoning = build_reasoning(focus, context, &breakdown, bonus);
        let recommendation = build_recommendation(focus, &breakdown);
        Self::scored(
            variant_id,
            candidate,
            focus,
            score,
            breakdown,
            reasoning,
            recommendation,
        )
    }

    fn scored(
        variant_id: String,
        candidate: Candidate,
        focus: DesignFocus,
        score: u32,
        breakdown: ScoreBreakdown,
        reasoning: Vec<String>,
        recommendation: Recommendation,
    ) -> ScoredCandidate {
        ScoredCandidate {
            variant_id,
            design_focus: focus,
            success: candidate.success,
            html_content: candidate.html_content,
            css_content: candidate.css_content,
            title: candidate.title,
            structure: candidate.structure,
            metadata: candidate.metadata,
            score,
            breakdown,
            reasoning,
            recommendation,
        }
    }
}

/// One fixed sentence per focus, always the first reasoning entry.
fn focus_summary(focus: DesignFocus) -> &'static str {
    match focus {
        DesignFocus::ModernClean => "Clean visual hierarchy keeps the core message in focus",
        DesignFocus::ConversionOptimized => {
            "Layout drives visitors toward the primary call to action"
        }
        DesignFocus::ContentRich => "Thorough sections answer questions before they are asked",
    }
}

fn build_reasoning(
    focus: DesignFocus,
    context: &BusinessContext,
    breakdown: &ScoreBreakdown,
    bonus: u32,
) -> Vec<String> {
    let mut reasoning = vec![focus_summary(focus).to_string()];
    if breakdown.business_alignment >= 25 {
        reasoning.push(format!(
            "Strong alignment with the {} goal",
            context.business_goal.label()
        ));
    }
    if breakdown.industry_fit >= 22 {
        reasoning.push(format!(
            "Well suited to the {} industry",
            context.industry.label()
        ));
    }
    if breakdown.design_quality >= 18 {
        reasoning.push("Clean, responsive markup structure".to_string());
    }
    if breakdown.content_quality >= 14 {
        reasoning.push("Substantial, well-organized content".to_string());
    }
    if bonus > 0 {
        reasoning.push("Matches stated design preferences".to_string());
    }
    reasoning
}

fn build_recommendation(focus: DesignFocus, breakdown: &ScoreBreakdown) -> Recommendation {
    let (reason, target_use_case, base) = match focus {
        DesignFocus::ModernClean => (
            "Balanced, low-friction design that presents the offer clearly",
            "Brand introductions and professional first impressions",
            ["Clear visual hierarchy", "Fast visual scanning"],
        ),
        DesignFocus::ConversionOptimized => (
            "Action-oriented layout that funnels visitors toward the goal",
            "Campaign landing pages and product launches",
            ["Prominent calls to action", "Persuasion-driven section order"],
        ),
        DesignFocus::ContentRich => (
            "Thorough presentation for research-heavy decisions",
            "Services that need trust and detailed explanation",
            ["Detailed information architecture", "Room for long-form persuasion"],
        ),
    };

    let mut strengths: Vec<String> = base.iter().map(|s| s.to_string()).collect();
    if breakdown.design_quality >= 20 {
        strengths.push("Polished responsive markup".to_string());
    }
    if breakdown.content_quality >= 16 {
        strengths.push("Rich supporting content".to_string());
    }

    Recommendation {
        reason: reason.to_string(),
        target_use_case: target_use_case.to_string(),
        strengths,
    }
}

fn fallback_recommendation() -> Recommendation {
    Recommendation {
        reason: "Fallback template: use only if no generated variant is available".to_string(),
        target_use_case: "Temporary placeholder while generation is retried".to_string(),
        strengths: Vec::new(),
    }
}

fn unusable_recommendation() -> Recommendation {
    Recommendation {
        reason: "Not recommended: the variant has no scorable content".to_string(),
        target_use_case: "None".to_string(),
        strengths: Vec::new(),
    }
}
