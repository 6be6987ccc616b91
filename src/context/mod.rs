//! Business context inference.
//!
//! Turns a freeform business description into a structured `BusinessContext`
//! (industry, audience, goal, advantages, tone) through bounded keyword and
//! pattern matching. Deterministic and total: no model calls happen here.

mod analyzer;
mod types;

pub use analyzer::ContextAnalyzer;
pub use types::{BusinessContext, BusinessGoal, Industry, Tone};
