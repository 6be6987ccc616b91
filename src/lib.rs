pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod generator;
pub mod orchestrator;
pub mod output;
pub mod planner;
pub mod scoring;
pub mod utils;

pub use config::ForgeConfig;
pub use context::{BusinessContext, BusinessGoal, ContextAnalyzer, Industry};
pub use error::{ForgeError, GenerationFailure, Result};
pub use generator::{
    Candidate, CandidateGenerator, ContentGenerationService, GenerationRequest,
    GenerationResponse, HttpContentService,
};
pub use orchestrator::{VariantGenerationResult, VariantOrchestrator, VariantRequest};
pub use planner::{DesignFocus, DesignStyle, VariantConfig, VariantPlanner};
pub use scoring::{ScoreBreakdown, ScoredCandidate, ScoringEngine, ScoringPreferences};
