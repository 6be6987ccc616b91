//! Deterministic candidate scoring.
//!
//! Four sub-scores (business alignment, industry fit, design quality,
//! content quality) sum into a composite on a 0 to 100 scale, with a flat
//! bonus per matching requester preference. Fallback candidates bypass the
//! pipeline entirely and receive a fixed floor score.

mod engine;
mod markup;
mod tables;

pub use engine::{
    Recommendation, ScoreBreakdown, ScoredCandidate, ScoringEngine, ScoringPreferences,
    FALLBACK_SCORE, MAX_COMPOSITE, PREFERENCE_BONUS,
};
pub use tables::{
    GoalAffinity, IndustryAffinity, ScoringTables, MAX_BUSINESS_ALIGNMENT, MAX_INDUSTRY_FIT,
    TABLES_VERSION,
};
