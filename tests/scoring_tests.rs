//! Scoring and ranking tests across the engine/aggregate seam.

use chrono::Utc;

use pageforge::context::{BusinessContext, BusinessGoal, Industry};
use pageforge::generator::{Candidate, CandidateMetadata};
use pageforge::orchestrator::aggregate;
use pageforge::planner::DesignFocus;
use pageforge::scoring::{
    FALLBACK_SCORE, MAX_COMPOSITE, ScoringEngine, ScoringPreferences, ScoringTables,
};

fn candidate(html: &str, css: &str) -> Candidate {
    Candidate {
        success: true,
        html_content: html.to_string(),
        css_content: css.to_string(),
        title: "Page".to_string(),
        structure: None,
        metadata: CandidateMetadata {
            generated_at: Utc::now(),
            model: "test-model".to_string(),
            processing_time_ms: 10,
        },
    }
}

fn fallback_candidate() -> Candidate {
    Candidate {
        success: false,
        html_content: "<main><h1>placeholder</h1></main>".to_string(),
        css_content: String::new(),
        title: String::new(),
        structure: None,
        metadata: CandidateMetadata {
            generated_at: Utc::now(),
            model: "builtin-fallback".to_string(),
            processing_time_ms: 0,
        },
    }
}

const MAXED_HTML: &str = r#"<header><nav>n</nav></header><main><aside>a</aside>
<section class="hero"><h1>T</h1><h2>S</h2><h3>x</h3>
<img src="a.png" alt="a"><button aria-label="go">Go</button>
<label for="e">Email</label></section>
<section class="features"><ul><li>f</li></ul><ol><li>o</li></ol>
<table><tr><td>t</td></tr></table><dl><dt>d</dt></dl></section>
<article class="testimonial pricing faq">words words about contact cta</article>
<footer>f</footer></main>"#;

const MAXED_CSS: &str =
    ":root { --g: 1rem; } main { display: grid; gap: var(--g); } @media (max-width: 700px) { main { display: flex; } }";

#[test]
fn test_composite_stays_within_bounds() {
    let engine = ScoringEngine::new(ScoringTables::default());
    let mut context = BusinessContext::default();
    context.industry = Industry::Ecommerce;
    context.business_goal = BusinessGoal::SalesIncrease;

    let preferences = ScoringPreferences {
        minimal_design: true,
        fast_loading: true,
        strong_cta: true,
        social_proof: true,
        seo_content: true,
        detailed_information: true,
    };

    let filler = "content ".repeat(60);
    let html = format!("{}{}", MAXED_HTML, filler);

    let scored = engine.score(
        candidate(&html, MAXED_CSS),
        &context,
        DesignFocus::ConversionOptimized,
        0,
        &preferences,
    );

    assert_eq!(scored.score, MAX_COMPOSITE);

    let bare = engine.score(
        candidate("<p>hi</p>", ""),
        &BusinessContext::default(),
        DesignFocus::ModernClean,
        0,
        &ScoringPreferences::default(),
    );

    // Table defaults alone keep any real candidate above the fallback floor.
    assert!(bare.score > FALLBACK_SCORE);
    assert!(bare.score <= MAX_COMPOSITE);
}

#[test]
fn test_scoring_is_deterministic() {
    let engine = ScoringEngine::new(ScoringTables::default());
    let context = BusinessContext::default();
    let preferences = ScoringPreferences::default();

    let first = engine.score(
        candidate(MAXED_HTML, MAXED_CSS),
        &context,
        DesignFocus::ContentRich,
        2,
        &preferences,
    );
    let second = engine.score(
        candidate(MAXED_HTML, MAXED_CSS),
        &context,
        DesignFocus::ContentRich,
        2,
        &preferences,
    );

    assert_eq!(first.score, second.score);
    assert_eq!(first.breakdown, second.breakdown);
    assert_eq!(first.reasoning, second.reasoning);
    assert_eq!(first.variant_id, "variant_3_content-rich");
}

#[test]
fn test_tied_scores_keep_generation_order() {
    let engine = ScoringEngine::new(ScoringTables::default());
    let context = BusinessContext::default();
    let preferences = ScoringPreferences::default();

    // Neutral context and identical markup: both foci land on table defaults,
    // so the composites tie exactly.
    let modern = engine.score(
        candidate(MAXED_HTML, MAXED_CSS),
        &context,
        DesignFocus::ModernClean,
        0,
        &preferences,
    );
    let content = engine.score(
        candidate(MAXED_HTML, MAXED_CSS),
        &context,
        DesignFocus::ContentRich,
        1,
        &preferences,
    );
    assert_eq!(modern.score, content.score);

    let result = aggregate(vec![modern, content], 42);
    assert_eq!(result.recommended_variant_id, "variant_1_modern-clean");
    assert_eq!(result.variants[0].design_focus, DesignFocus::ModernClean);
    assert_eq!(result.variants[1].design_focus, DesignFocus::ContentRich);
}

#[test]
fn test_fallback_ranks_below_any_real_candidate() {
    let engine = ScoringEngine::new(ScoringTables::default());
    let context = BusinessContext::default();
    let preferences = ScoringPreferences::default();

    let real = engine.score(
        candidate("<p>hi</p>", ""),
        &context,
        DesignFocus::ModernClean,
        0,
        &preferences,
    );
    let fallback = engine.score(
        fallback_candidate(),
        &context,
        DesignFocus::ConversionOptimized,
        1,
        &preferences,
    );

    assert_eq!(fallback.score, FALLBACK_SCORE);
    assert!(real.score > fallback.score);

    let result = aggregate(vec![fallback, real], 5);
    assert_eq!(result.recommended_variant_id, "variant_1_modern-clean");
}

#[test]
fn test_result_wire_format() {
    let engine = ScoringEngine::new(ScoringTables::default());
    let scored = engine.score(
        candidate(MAXED_HTML, MAXED_CSS),
        &BusinessContext::default(),
        DesignFocus::ModernClean,
        0,
        &ScoringPreferences::default(),
    );

    let result = aggregate(vec![scored], 42);
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["success"], true);
    assert_eq!(json["recommendedVariantId"], "variant_1_modern-clean");
    assert_eq!(json["metadata"]["processingTimeMs"], 42);
    assert_eq!(json["metadata"]["totalVariants"], 1);
    assert!(json["metadata"]["generatedAt"].is_string());
    assert!(json["metadata"]["requestId"].is_string());
    assert!(json.get("error").is_none());

    let variant = &json["variants"][0];
    assert_eq!(variant["variantId"], "variant_1_modern-clean");
    assert_eq!(variant["designFocus"], "modern-clean");
    assert!(variant["breakdown"]["businessAlignment"].is_number());
    assert!(variant["breakdown"]["industryFit"].is_number());
    assert!(variant["breakdown"]["designQuality"].is_number());
    assert!(variant["breakdown"]["contentQuality"].is_number());
    assert!(variant["recommendation"]["targetUseCase"].is_string());
}

#[test]
fn test_failed_result_wire_format() {
    let result =
        pageforge::orchestrator::VariantGenerationResult::failed("Topic must not be empty");
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Topic must not be empty");
    assert_eq!(json["recommendedVariantId"], "");
    assert!(json["variants"].as_array().unwrap().is_empty());
}

#[test]
fn test_result_schema_covers_metadata_timestamps() {
    let schema = schemars::schema_for!(pageforge::orchestrator::VariantGenerationResult);
    let rendered = serde_json::to_string(&schema).unwrap();

    // Timestamp fields surface under their wire names in the schema.
    assert!(rendered.contains("\"generatedAt\""));
    assert!(rendered.contains("\"processingTimeMs\""));
    assert!(rendered.contains("\"requestId\""));
}
