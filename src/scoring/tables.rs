//! Scoring compatibility tables.
//!
//! The focus/goal and focus/industry affinities are curated data, not code:
//! they ship as versioned configuration inside `ForgeConfig` so the tables
//! can evolve without touching the scoring algorithm.

use serde::{Deserialize, Serialize};

use crate::context::{BusinessGoal, Industry};
use crate::planner::DesignFocus;

use super::engine::FALLBACK_SCORE;

pub const TABLES_VERSION: u32 = 1;

/// Upper bound of the business alignment sub-score.
pub const MAX_BUSINESS_ALIGNMENT: u32 = 30;
/// Upper bound of the industry fit sub-score.
pub const MAX_INDUSTRY_FIT: u32 = 25;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAffinity {
    pub focus: DesignFocus,
    pub goal: BusinessGoal,
    pub score: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryAffinity {
    pub focus: DesignFocus,
    pub industry: Industry,
    pub score: u32,
}

/// Affinity lookups with per-category defaults.
///
/// Curated cells may only raise a score above its category default, never
/// lower it. That keeps the floor of every normally generated candidate
/// (default alignment + default industry fit) strictly above the fixed
/// fallback score.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringTables {
    pub version: u32,
    pub default_alignment: u32,
    pub default_industry_fit: u32,
    pub goal_affinities: Vec<GoalAffinity>,
    pub industry_affinities: Vec<IndustryAffinity>,
}

impl ScoringTables {
    pub fn business_alignment(&self, focus: DesignFocus, goal: BusinessGoal) -> u32 {
        self.goal_affinities
            .iter()
            .find(|cell| cell.focus == focus && cell.goal == goal)
            .map(|cell| cell.score.max(self.default_alignment))
            .unwrap_or(self.default_alignment)
            .min(MAX_BUSINESS_ALIGNMENT)
    }

    pub fn industry_affinity(&self, focus: DesignFocus, industry: Industry) -> u32 {
        self.industry_affinities
            .iter()
            .find(|cell| cell.focus == focus && cell.industry == industry)
            .map(|cell| cell.score.max(self.default_industry_fit))
            .unwrap_or(self.default_industry_fit)
            .min(MAX_INDUSTRY_FIT)
    }

    /// Collect every violation instead of stopping at the first.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.default_alignment > MAX_BUSINESS_ALIGNMENT {
            errors.push(format!(
                "scoring.tables.default_alignment must be <= {}, got {}",
                MAX_BUSINESS_ALIGNMENT, self.default_alignment
            ));
        }
        if self.default_industry_fit > MAX_INDUSTRY_FIT {
            errors.push(format!(
                "scoring.tables.default_industry_fit must be <= {}, got {}",
                MAX_INDUSTRY_FIT, self.default_industry_fit
            ));
        }

        // Curated cells never resolve below their category default, so the
        // defaults alone set the floor of every generated candidate. That
        // floor must clear the fixed fallback score or a failed variant
        // could outrank a real one.
        let default_floor = self
            .default_alignment
            .saturating_add(self.default_industry_fit);
        if default_floor <= FALLBACK_SCORE {
            errors.push(format!(
                "scoring.tables defaults must sum above the fallback score {}, got {} + {} = {}",
                FALLBACK_SCORE, self.default_alignment, self.default_industry_fit, default_floor
            ));
        }

        for cell in &self.goal_affinities {
            if cell.score > MAX_BUSINESS_ALIGNMENT {
                errors.push(format!(
                    "goal affinity {}/{} exceeds {} (got {})",
                    cell.focus.label(),
                    cell.goal.label(),
                    MAX_BUSINESS_ALIGNMENT,
                    cell.score
                ));
            }
            if cell.score < self.default_alignment {
                errors.push(format!(
                    "goal affinity {}/{} is below the default {} (got {})",
                    cell.focus.label(),
                    cell.goal.label(),
                    self.default_alignment,
                    cell.score
                ));
            }
        }

        for cell in &self.industry_affinities {
            if cell.score > MAX_INDUSTRY_FIT {
                errors.push(format!(
                    "industry affinity {}/{} exceeds {} (got {})",
                    cell.focus.label(),
                    cell.industry.label(),
                    MAX_INDUSTRY_FIT,
                    cell.score
                ));
            }
            if cell.score < self.default_industry_fit {
                errors.push(format!(
                    "industry affinity {}/{} is below the default {} (got {})",
                    cell.focus.label(),
                    cell.industry.label(),
                    self.default_industry_fit,
                    cell.score
                ));
            }
        }

        errors
    }
}

impl Default for ScoringTables {
    fn default() -> Self {
        let goal = |focus, goal, score| GoalAffinity { focus, goal, score };
        let industry = |focus, industry, score| IndustryAffinity {
            focus,
            industry,
            score,
        };

        Self {
            version: TABLES_VERSION,
            default_alignment: 15,
            default_industry_fit: 18,
            goal_affinities: vec![
                goal(
                    DesignFocus::ConversionOptimized,
                    BusinessGoal::SalesIncrease,
                    28,
                ),
                goal(
                    DesignFocus::ConversionOptimized,
                    BusinessGoal::LeadGeneration,
                    26,
                ),
                goal(
                    DesignFocus::ContentRich,
                    BusinessGoal::InformationProvision,
                    28,
                ),
                goal(DesignFocus::ContentRich, BusinessGoal::Hiring, 25),
                goal(DesignFocus::ModernClean, BusinessGoal::BrandAwareness, 27),
                goal(
                    DesignFocus::ModernClean,
                    BusinessGoal::CustomerEngagement,
                    24,
                ),
            ],
            industry_affinities: vec![
                industry(DesignFocus::ConversionOptimized, Industry::Ecommerce, 24),
                industry(DesignFocus::ConversionOptimized, Industry::Finance, 22),
                industry(DesignFocus::ContentRich, Industry::Education, 24),
                industry(DesignFocus::ContentRich, Industry::Legal, 23),
                industry(DesignFocus::ContentRich, Industry::Healthcare, 22),
                industry(DesignFocus::ModernClean, Industry::Technology, 24),
                industry(DesignFocus::ModernClean, Industry::Creative, 23),
                industry(DesignFocus::ModernClean, Industry::Beauty, 22),
            ],
        }
    }
}
