use console::{Style, style};
use indicatif::{ProgressBar, ProgressStyle};

use crate::orchestrator::VariantGenerationResult;
use crate::scoring::ScoredCandidate;
use crate::utils::truncate_chars;

pub struct Display;

impl Display {
    pub fn new() -> Self {
        Self
    }

    pub fn print_header(&self, text: &str) {
        println!();
        println!("{}", style(text).bold().cyan());
        println!("{}", style("═".repeat(60)).dim());
        println!();
    }

    pub fn print_result(&self, result: &VariantGenerationResult) {
        self.print_header("Page Variants");

        if let Some(error) = &result.error {
            self.print_error(error);
            return;
        }

        for variant in &result.variants {
            let recommended = variant.variant_id == result.recommended_variant_id;
            self.print_variant(variant, recommended);
        }

        println!(
            "{}",
            style(format!(
                "Generated {} variants in {}ms  (request {})",
                result.metadata.total_variants,
                result.metadata.processing_time_ms,
                result.metadata.request_id
            ))
            .dim()
        );
    }

    pub fn print_variant(&self, variant: &ScoredCandidate, recommended: bool) {
        let score_style = self.score_style(variant.score);
        let focus = variant.design_focus;

        print!(
            "{}  {}",
            style(&variant.variant_id).bold(),
            style(focus.label()).white()
        );
        if recommended {
            print!("  {}", style("★ recommended").yellow().bold());
        }
        if !variant.success {
            print!("  {}", style("fallback").magenta());
        }
        println!();

        println!(
            "    Score: {}  (alignment {}  industry {}  design {}  content {})",
            score_style.apply_to(variant.score),
            variant.breakdown.business_alignment,
            variant.breakdown.industry_fit,
            variant.breakdown.design_quality,
            variant.breakdown.content_quality
        );

        if !variant.title.is_empty() {
            println!("    Title: {}", truncate_chars(&variant.title, 60));
        }

        for reason in &variant.reasoning {
            println!("    {} {}", style("→").cyan(), reason);
        }

        println!(
            "    {}",
            style(format!("Best for: {}", variant.recommendation.target_use_case)).dim()
        );
        println!();
    }

    pub fn print_success(&self, message: &str) {
        println!("{} {}", style("✓").green().bold(), message);
    }

    pub fn print_error(&self, message: &str) {
        eprintln!("{} {}", style("✗").red().bold(), message);
    }

    pub fn print_warning(&self, message: &str) {
        println!("{} {}", style("!").yellow().bold(), message);
    }

    pub fn print_info(&self, message: &str) {
        println!("{} {}", style("→").cyan(), message);
    }

    pub fn create_spinner(&self, message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("static template")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(80));
        pb
    }

    fn score_style(&self, score: u32) -> Style {
        match score {
            80.. => Style::new().green().bold(),
            60..=79 => Style::new().green(),
            40..=59 => Style::new().yellow(),
            _ => Style::new().red(),
        }
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}
