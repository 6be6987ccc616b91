//! Markup quality heuristics.
//!
//! Deterministic inspection of generated HTML/CSS. Every check contributes a
//! small fixed increment and the totals are clamped to the sub-score bounds,
//! so identical markup always produces identical scores.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

pub const MAX_DESIGN_QUALITY: u32 = 25;
pub const MAX_CONTENT_QUALITY: u32 = 20;

const SEMANTIC_TAGS: [&str; 7] = [
    "<header", "<nav", "<main", "<section", "<article", "<aside", "<footer",
];

const HEADING_TAGS: [&str; 6] = ["<h1", "<h2", "<h3", "<h4", "<h5", "<h6"];

const SECTION_KEYWORDS: [&str; 8] = [
    "hero",
    "features",
    "testimonial",
    "cta",
    "faq",
    "pricing",
    "about",
    "contact",
];

const LIST_MARKERS: [&str; 4] = ["<ul", "<ol", "<table", "<dl"];

fn img_tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)<img\b[^>]*>").unwrap())
}

fn script_style_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?is)<(?:script|style)\b[^>]*>.*?</(?:script|style)\s*>").unwrap()
    })
}

fn tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?s)<[^>]*>").unwrap())
}

/// Visible text of an HTML fragment: script/style blocks removed, tags
/// stripped, whitespace collapsed to single spaces.
pub fn plain_text(html: &str) -> String {
    let without_blocks = script_style_pattern().replace_all(html, " ");
    let without_tags = tag_pattern().replace_all(&without_blocks, " ");
    without_tags.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Structural quality of the markup, 0 to 25.
pub fn design_quality(html: &str, css: &str) -> u32 {
    let html_lower = html.to_lowercase();
    let css_lower = css.to_lowercase();
    let mut score = 0u32;

    let semantic = SEMANTIC_TAGS
        .iter()
        .filter(|tag| html_lower.contains(*tag))
        .count() as u32;
    score += (semantic * 2).min(10);

    let headings: usize = HEADING_TAGS
        .iter()
        .map(|tag| html_lower.matches(tag).count())
        .sum();
    if (2..=6).contains(&headings) {
        score += 4;
    }

    if image_alt_coverage(&html_lower) > 0.8 {
        score += 4;
    }

    if css_lower.contains("display: grid")
        || css_lower.contains("display:grid")
        || css_lower.contains("display: flex")
        || css_lower.contains("display:flex")
    {
        score += 4;
    }

    if css_lower.contains("@media") {
        score += 4;
    }

    if css_lower.contains("var(--") {
        score += 3;
    }

    let clamped = score.min(MAX_DESIGN_QUALITY);
    debug!(
        semantic_tags = semantic,
        headings,
        score = clamped,
        "Design quality computed"
    );
    clamped
}

/// Substance and organization of the content, 0 to 20.
pub fn content_quality(html: &str) -> u32 {
    let html_lower = html.to_lowercase();
    let text = plain_text(html);
    let text_chars = text.chars().count();
    let mut score = 0u32;

    score += match text_chars {
        0..=49 => 0,
        50..=199 => 3,
        200..=5000 => 8,
        5001..=10000 => 5,
        _ => 2,
    };

    let sections = SECTION_KEYWORDS
        .iter()
        .filter(|keyword| html_lower.contains(*keyword))
        .count() as u32;
    score += sections.min(5);

    let lists: usize = LIST_MARKERS
        .iter()
        .map(|marker| html_lower.matches(marker).count())
        .sum();
    score += (lists as u32).min(4);

    if html_lower.contains("aria-") {
        score += 2;
    }
    if html_lower.contains("<button") || html_lower.contains("role=") {
        score += 1;
    }
    if html_lower.contains("<label") {
        score += 1;
    }

    let clamped = score.min(MAX_CONTENT_QUALITY);
    debug!(
        text_chars,
        section_keywords = sections,
        score = clamped,
        "Content quality computed"
    );
    clamped
}

/// Fraction of `<img>` tags carrying an `alt` attribute. A page without
/// images has nothing to caption and counts as fully covered.
fn image_alt_coverage(html_lower: &str) -> f64 {
    let mut total = 0usize;
    let mut with_alt = 0usize;
    for tag in img_tag_pattern().find_iter(html_lower) {
        total += 1;
        if tag.as_str().contains("alt=") {
            with_alt += 1;
        }
    }
    if total == 0 {
        return 1.0;
    }
    with_alt as f64 / total as f64
}
