use regex::Regex;
use tracing::debug;

use crate::config::AnalyzerConfig;
use crate::utils::clip_chars;

use super::types::{BusinessContext, BusinessGoal, Industry, Tone};

/// Phrases that introduce a competitive advantage. Matched against the
/// lowercased description, so the English alternatives carry no (?i).
const ADVANTAGE_PATTERNS: [&str; 4] = [
    r"(?:we offer|we provide|we specialize in|specializing in|known for|featuring)\s+([^.。\n!?！？]{3,80})",
    r"([^\s。、！!.\n]{2,40}(?:が強み|が特徴|に自信|にこだわり|にこだわっ))",
    r"((?:業界|地域|日本|国内)?(?:no\.?\s?1|ナンバーワン|シェア1位|売上1位)[^。、\n]{0,30})",
    r"([\d,]+\+?\s*(?:years? of experience|happy customers|satisfied customers|clients served)|創業[\d,]+年|実績[\d,]+[件社名]?)",
];

/// Fallback scan keywords, used only when no pattern matched. A fixed-width
/// window starting at the hit becomes the advantage entry. More specific
/// keywords come before their substrings ("送料無料" before "無料") so the
/// containment dedup keeps the fuller phrase.
const ADVANTAGE_KEYWORDS: [&str; 16] = [
    "guarantee",
    "free shipping",
    "certified",
    "award",
    "24/7",
    "organic",
    "handmade",
    "same-day",
    "送料無料",
    "無料",
    "保証",
    "認定",
    "受賞",
    "オーガニック",
    "国産",
    "当日発送",
];

const ADVANTAGE_WINDOW_CHARS: usize = 40;

/// Audience labels with their trigger keywords. Declaration order breaks
/// ties, same as the enum taxonomies.
const AUDIENCE_TABLE: [(&str, &[&str]); 6] = [
    (
        "business professionals",
        &[
            "business",
            "b2b",
            "enterprise",
            "corporate",
            "法人",
            "ビジネス",
            "企業向け",
        ],
    ),
    (
        "families",
        &[
            "family",
            "families",
            "parents",
            "children",
            "家族",
            "子育て",
            "ファミリー",
            "主婦",
        ],
    ),
    (
        "young adults",
        &["young", "youth", "millennial", "gen z", "若者", "20代"],
    ),
    (
        "students",
        &["student", "exam", "学生", "受験", "高校生", "大学生"],
    ),
    (
        "seniors",
        &["senior", "elderly", "retirement", "シニア", "高齢者"],
    ),
    ("women", &["women", "female", "女性", "レディース"]),
];

/// Infers a `BusinessContext` from a freeform business description.
///
/// Stateless and injectable: construct once from `AnalyzerConfig`, share by
/// reference. Total over its input domain: every string, including empty
/// ones, produces a context, and equal inputs produce equal contexts.
pub struct ContextAnalyzer {
    max_scan_chars: usize,
    max_advantages: usize,
    max_advantage_chars: usize,
    max_matches_per_pattern: usize,
    advantage_patterns: Vec<Regex>,
}

impl ContextAnalyzer {
    pub fn new(config: &AnalyzerConfig) -> Self {
        // Fixed literal patterns: compilation cannot fail at runtime.
        let advantage_patterns = ADVANTAGE_PATTERNS
            .iter()
            .map(|p| Regex::new(p).unwrap())
            .collect();

        Self {
            max_scan_chars: config.max_scan_chars,
            max_advantages: config.max_advantages,
            max_advantage_chars: config.max_advantage_chars,
            max_matches_per_pattern: config.max_matches_per_pattern,
            advantage_patterns,
        }
    }

    /// Classify the description into a structured context.
    ///
    /// Classification counts, per candidate label, how many of its keywords
    /// occur in the lowercased text and keeps the highest count; ties keep
    /// the earlier declaration, zero matches keep the category default. Only
    /// the advantage scan is bounded by `max_scan_chars`; classification
    /// always sees the whole text.
    pub fn analyze(&self, text: &str) -> BusinessContext {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return BusinessContext::default();
        }

        let normalized = trimmed.to_lowercase();

        let industry = classify(
            &normalized,
            Industry::ALL.iter().map(|i| (*i, i.keywords())),
            Industry::default(),
        );
        let business_goal = classify(
            &normalized,
            BusinessGoal::ALL.iter().map(|g| (*g, g.keywords())),
            BusinessGoal::default(),
        );
        let tone = classify(
            &normalized,
            Tone::ALL.iter().map(|t| (*t, t.keywords())),
            Tone::default(),
        );
        let target_audience = classify(
            &normalized,
            AUDIENCE_TABLE.iter().map(|(label, kw)| (*label, *kw)),
            BusinessContext::DEFAULT_AUDIENCE,
        )
        .to_string();

        let scan = clip_chars(&normalized, self.max_scan_chars);
        let competitive_advantage = self.extract_advantages(scan);

        debug!(
            industry = industry.label(),
            goal = business_goal.label(),
            tone = tone.label(),
            audience = %target_audience,
            advantages = competitive_advantage.len(),
            "Analyzed business context"
        );

        BusinessContext {
            industry,
            target_audience,
            business_goal,
            competitive_advantage,
            tone,
        }
    }

    fn extract_advantages(&self, scan: &str) -> Vec<String> {
        let mut found: Vec<String> = Vec::new();

        for pattern in &self.advantage_patterns {
            for caps in pattern
                .captures_iter(scan)
                .take(self.max_matches_per_pattern)
            {
                if let Some(m) = caps.get(1) {
                    self.push_advantage(&mut found, m.as_str());
                }
            }
        }

        // Keyword windows only when no pattern produced anything; patterns
        // give cleaner phrases and must not be diluted.
        if found.is_empty() {
            for keyword in ADVANTAGE_KEYWORDS {
                if let Some(idx) = scan.find(keyword) {
                    let window = clip_chars(&scan[idx..], ADVANTAGE_WINDOW_CHARS);
                    self.push_advantage(&mut found, window);
                }
            }
        }

        found.truncate(self.max_advantages);
        found
    }

    fn push_advantage(&self, list: &mut Vec<String>, raw: &str) {
        let entry = clip_chars(raw.trim(), self.max_advantage_chars)
            .trim()
            .to_string();
        // Containment check instead of plain equality: keyword windows often
        // produce fragments of an entry already captured.
        if !entry.is_empty() && !list.iter().any(|existing| existing.contains(&entry)) {
            list.push(entry);
        }
    }
}

/// Pick the candidate whose keyword list has the most hits in `text`.
/// Strictly-greater comparison keeps the first best candidate, which makes
/// declaration order the tie-break.
fn classify<T: Copy>(
    text: &str,
    candidates: impl Iterator<Item = (T, &'static [&'static str])>,
    default: T,
) -> T {
    let mut best: Option<(T, usize)> = None;
    for (candidate, keywords) in candidates {
        let hits = keywords.iter().filter(|k| text.contains(*k)).count();
        if hits > 0 && best.map_or(true, |(_, top)| hits > top) {
            best = Some((candidate, hits));
        }
    }
    best.map_or(default, |(candidate, _)| candidate)
}
