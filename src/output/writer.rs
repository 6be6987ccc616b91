use std::io::{self, Write};

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::orchestrator::VariantGenerationResult;

/// Thread-safe output writer that handles different output formats.
///
/// Supports two output modes:
/// - Text: Human-readable formatted output (default)
/// - Json: Single JSON object at completion
pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Returns the configured output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Emit the final result.
    pub fn emit_result(&self, result: &VariantGenerationResult) {
        match self.format {
            OutputFormat::Text => {
                self.print_text_result(result);
            }
            OutputFormat::Json => {
                self.write_json(result);
            }
        }
    }

    /// Emit a simple message.
    pub fn emit_message(&self, message: &str) {
        match self.format {
            OutputFormat::Text => {
                println!("{}", message);
            }
            OutputFormat::Json => {
                let msg = MessageOutput {
                    message: message.to_string(),
                };
                self.write_json(&msg);
            }
        }
    }

    fn write_json<T: Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string(value) {
            let mut stdout = io::stdout().lock();
            let _ = writeln!(stdout, "{}", json);
            let _ = stdout.flush();
        }
    }

    fn print_text_result(&self, result: &VariantGenerationResult) {
        println!();
        if !result.success {
            match &result.error {
                Some(error) => println!("Variant generation failed: {}", error),
                None => println!("Variant generation failed."),
            }
            return;
        }

        println!(
            "Generated {} variants in {}ms.",
            result.metadata.total_variants, result.metadata.processing_time_ms
        );
        println!();

        println!("{:<34} {:<22} {:>5}", "ID", "Focus", "Score");
        println!("{}", "-".repeat(63));
        for variant in &result.variants {
            println!(
                "{:<34} {:<22} {:>5}",
                variant.variant_id,
                variant.design_focus.label(),
                variant.score
            );
        }

        if !result.recommended_variant_id.is_empty() {
            println!();
            println!("Recommended: {}", result.recommended_variant_id);
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct MessageOutput {
    message: String,
}
