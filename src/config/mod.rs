//! Configuration types and loading.
//!
//! `ForgeConfig` is the top-level configuration with validation; the nested
//! sections cover the analyzer, the generation dispatch, the scoring tables,
//! and the HTTP service adapter. Stored as TOML in the config directory.

mod settings;

pub use settings::{AnalyzerConfig, ForgeConfig, GeneratorConfig, HttpServiceConfig};
