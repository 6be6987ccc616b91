//! Local fallback synthesis.
//!
//! When a service call fails, the variant still ships: a deterministic
//! placeholder page is built from the config's own editorial copy. The
//! candidate is marked unsuccessful so scoring floors it below every
//! normally generated sibling.

use chrono::Utc;

use crate::planner::VariantConfig;

use super::service::PageStructure;
use super::{Candidate, CandidateMetadata};

/// Model tag recorded on synthesized candidates.
pub const FALLBACK_MODEL: &str = "fallback-template";

pub fn synthesize_fallback(config: &VariantConfig, processing_time_ms: u64) -> Candidate {
    let feature_items: String = config
        .features
        .iter()
        .map(|f| format!("      <li>{}</li>\n", f))
        .collect();

    let html_content = format!(
        r##"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
</head>
<body>
  <header class="site-header">
    <h1>{title}</h1>
  </header>
  <main>
    <section class="hero">
      <h2>{description}</h2>
      <p>Designed for {audience}.</p>
    </section>
    <section class="features">
      <ul>
{features}      </ul>
    </section>
  </main>
  <footer class="cta">
    <a class="button" href="#contact">Contact us</a>
  </footer>
</body>
</html>
"##,
        title = config.enhanced_topic,
        description = config.description,
        audience = config.target_audience,
        features = feature_items,
    );

    let css_content = "\
body { margin: 0; font-family: sans-serif; color: #222; }
.site-header { padding: 2rem; background: #f5f5f5; }
.hero { padding: 3rem 2rem; }
.features ul { padding: 1rem 2rem; }
.cta { padding: 2rem; text-align: center; }
.button { display: inline-block; padding: 0.75rem 1.5rem; background: #2b6cb0; color: #fff; text-decoration: none; }
"
    .to_string();

    Candidate {
        success: false,
        html_content,
        css_content,
        title: config.enhanced_topic.clone(),
        structure: Some(PageStructure {
            sections: vec![
                "header".to_string(),
                "hero".to_string(),
                "features".to_string(),
                "cta".to_string(),
            ],
        }),
        metadata: CandidateMetadata {
            generated_at: Utc::now(),
            model: FALLBACK_MODEL.to_string(),
            processing_time_ms,
        },
    }
}
