use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use pageforge::cli::{Cli, Commands, ConfigAction, Display, OutputFormat, preferences_from};
use pageforge::config::ForgeConfig;
use pageforge::error::{ForgeError, Result};
use pageforge::generator::HttpContentService;
use pageforge::orchestrator::{VariantGenerationResult, VariantOrchestrator, VariantRequest};
use pageforge::output::OutputWriter;

/// Context for command output handling.
struct OutputContext<'a> {
    display: &'a Display,
    writer: &'a OutputWriter,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Display::new().print_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("pageforge=debug")
    } else {
        EnvFilter::new("pageforge=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let display = Display::new();
    let writer = OutputWriter::new(cli.output);
    let out = OutputContext {
        display: &display,
        writer: &writer,
    };
    let config_dir = cli.config_dir;

    match cli.command {
        Commands::Generate {
            topic,
            audience,
            goal,
            industry,
            style,
            advantages,
            count,
            focus,
            prefer,
        } => {
            let request = VariantRequest {
                topic,
                target_audience: audience,
                business_goal: goal.map(Into::into),
                industry: industry.map(Into::into),
                competitive_advantage: advantages,
                design_style: style.map(Into::into),
                variant_count: count,
                focus_areas: focus.into_iter().map(Into::into).collect(),
                preferences: preferences_from(&prefer),
            };
            cmd_generate(&out, &config_dir, request).await
        }
        Commands::Config { action } => cmd_config(&out, &config_dir, action).await,
    }
}

async fn cmd_generate(
    out: &OutputContext<'_>,
    config_dir: &Path,
    request: VariantRequest,
) -> Result<()> {
    let config = ForgeConfig::load(config_dir).await?;
    let service = Arc::new(HttpContentService::new(&config.service)?);
    let orchestrator = VariantOrchestrator::new(&config, service);

    let spinner = if out.writer.format() == OutputFormat::Text {
        Some(out.display.create_spinner(&format!(
            "Generating {} page variants...",
            request.variant_count
        )))
    } else {
        None
    };

    let outcome = orchestrator.try_generate(&request).await;

    if let Some(s) = spinner {
        s.finish_and_clear();
    }

    match outcome {
        Ok(result) => {
            match out.writer.format() {
                OutputFormat::Text => {
                    out.display.print_result(&result);
                    let fallbacks = result.variants.iter().filter(|v| !v.success).count();
                    if fallbacks > 0 {
                        out.display.print_warning(&format!(
                            "{} of {} variants used the fallback template",
                            fallbacks,
                            result.variants.len()
                        ));
                    }
                }
                OutputFormat::Json => out.writer.emit_result(&result),
            }
            Ok(())
        }
        Err(e) => {
            // JSON consumers still get a well-formed result object on stdout;
            // the error itself goes to stderr with a non-zero exit.
            if out.writer.format() == OutputFormat::Json {
                out.writer
                    .emit_result(&VariantGenerationResult::failed(e.to_string()));
            }
            Err(e)
        }
    }
}

async fn cmd_config(
    out: &OutputContext<'_>,
    config_dir: &Path,
    action: ConfigAction,
) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = ForgeConfig::load(config_dir).await?;
            match out.writer.format() {
                OutputFormat::Text => {
                    if !config_dir.join("config.toml").exists() {
                        out.display
                            .print_info("No configuration file found; showing defaults.");
                    }
                    let rendered = toml::to_string_pretty(&config)
                        .map_err(|e| ForgeError::Config(e.to_string()))?;
                    println!("{}", rendered);
                }
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&config)?;
                    println!("{}", json);
                }
            }
        }
        ConfigAction::Reset => {
            let config = ForgeConfig::default();
            config.save(config_dir).await?;
            if out.writer.format() == OutputFormat::Text {
                out.display
                    .print_success("Configuration reset to defaults.");
            }
        }
        ConfigAction::Path => {
            out.writer
                .emit_message(&config_dir.join("config.toml").display().to_string());
        }
    }

    Ok(())
}
