use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::context::{BusinessGoal, Industry};
use crate::planner::{DesignFocus, DesignStyle};
use crate::scoring::ScoringPreferences;

#[derive(Parser)]
#[command(name = "pageforge")]
#[command(author, version, about = "Marketing page variant generator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Configuration directory (default: .pageforge)
    #[arg(
        long,
        global = true,
        env = "PAGEFORGE_CONFIG_DIR",
        default_value = ".pageforge"
    )]
    pub config_dir: PathBuf,
}

/// Output format for CLI results.
/// - Text: Human-readable text output (default)
/// - Json: Single JSON object at completion
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate page variants for a topic
    Generate {
        /// Business or product description
        topic: String,

        /// Override the inferred target audience
        #[arg(long)]
        audience: Option<String>,

        /// Override the inferred business goal
        #[arg(long, value_enum)]
        goal: Option<GoalArg>,

        /// Override the inferred industry
        #[arg(long, value_enum)]
        industry: Option<IndustryArg>,

        /// Force one visual style for every variant
        #[arg(long, value_enum)]
        style: Option<StyleArg>,

        /// Competitive advantage (repeatable, replaces the extracted ones)
        #[arg(long = "advantage")]
        advantages: Vec<String>,

        /// Number of variants to generate (1 to 3)
        #[arg(long, default_value = "3")]
        count: u32,

        /// Design focus (repeatable, order preserved)
        #[arg(long = "focus", value_enum)]
        focus: Vec<FocusArg>,

        /// Scoring preference (repeatable)
        #[arg(long = "prefer", value_enum)]
        prefer: Vec<PreferenceArg>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Reset to defaults
    Reset,
    /// Print the configuration file path
    Path,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum GoalArg {
    ConversionImprovement,
    SalesIncrease,
    LeadGeneration,
    BrandAwareness,
    InformationProvision,
    Hiring,
    CustomerEngagement,
}

impl From<GoalArg> for BusinessGoal {
    fn from(arg: GoalArg) -> Self {
        match arg {
            GoalArg::ConversionImprovement => Self::ConversionImprovement,
            GoalArg::SalesIncrease => Self::SalesIncrease,
            GoalArg::LeadGeneration => Self::LeadGeneration,
            GoalArg::BrandAwareness => Self::BrandAwareness,
            GoalArg::InformationProvision => Self::InformationProvision,
            GoalArg::Hiring => Self::Hiring,
            GoalArg::CustomerEngagement => Self::CustomerEngagement,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum IndustryArg {
    General,
    Technology,
    Ecommerce,
    Finance,
    Healthcare,
    Education,
    Legal,
    Creative,
    Beauty,
    Restaurant,
    Travel,
}

impl From<IndustryArg> for Industry {
    fn from(arg: IndustryArg) -> Self {
        match arg {
            IndustryArg::General => Self::General,
            IndustryArg::Technology => Self::Technology,
            IndustryArg::Ecommerce => Self::Ecommerce,
            IndustryArg::Finance => Self::Finance,
            IndustryArg::Healthcare => Self::Healthcare,
            IndustryArg::Education => Self::Education,
            IndustryArg::Legal => Self::Legal,
            IndustryArg::Creative => Self::Creative,
            IndustryArg::Beauty => Self::Beauty,
            IndustryArg::Restaurant => Self::Restaurant,
            IndustryArg::Travel => Self::Travel,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StyleArg {
    Minimal,
    Vibrant,
    Corporate,
    Elegant,
    Playful,
    Classic,
}

impl From<StyleArg> for DesignStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Minimal => Self::Minimal,
            StyleArg::Vibrant => Self::Vibrant,
            StyleArg::Corporate => Self::Corporate,
            StyleArg::Elegant => Self::Elegant,
            StyleArg::Playful => Self::Playful,
            StyleArg::Classic => Self::Classic,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FocusArg {
    ModernClean,
    ConversionOptimized,
    ContentRich,
}

impl From<FocusArg> for DesignFocus {
    fn from(arg: FocusArg) -> Self {
        match arg {
            FocusArg::ModernClean => Self::ModernClean,
            FocusArg::ConversionOptimized => Self::ConversionOptimized,
            FocusArg::ContentRich => Self::ContentRich,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PreferenceArg {
    MinimalDesign,
    FastLoading,
    StrongCta,
    SocialProof,
    SeoContent,
    DetailedInformation,
}

/// Fold repeatable `--prefer` flags into the scoring preference set.
pub fn preferences_from(flags: &[PreferenceArg]) -> ScoringPreferences {
    let mut prefs = ScoringPreferences::default();
    for flag in flags {
        match flag {
            PreferenceArg::MinimalDesign => prefs.minimal_design = true,
            PreferenceArg::FastLoading => prefs.fast_loading = true,
            PreferenceArg::StrongCta => prefs.strong_cta = true,
            PreferenceArg::SocialProof => prefs.social_proof = true,
            PreferenceArg::SeoContent => prefs.seo_content = true,
            PreferenceArg::DetailedInformation => prefs.detailed_information = true,
        }
    }
    prefs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_flags_fold() {
        let prefs = preferences_from(&[
            PreferenceArg::StrongCta,
            PreferenceArg::SocialProof,
            PreferenceArg::StrongCta,
        ]);
        assert!(prefs.strong_cta);
        assert!(prefs.social_proof);
        assert!(!prefs.minimal_design);
        // Repeating a flag sets the same boolean again; it cannot stack.
        assert_eq!(prefs.bonus_for(DesignFocus::ConversionOptimized), 10);
    }

    #[test]
    fn test_arg_conversions() {
        assert_eq!(BusinessGoal::from(GoalArg::Hiring), BusinessGoal::Hiring);
        assert_eq!(Industry::from(IndustryArg::Beauty), Industry::Beauty);
        assert_eq!(DesignStyle::from(StyleArg::Elegant), DesignStyle::Elegant);
        assert_eq!(
            DesignFocus::from(FocusArg::ConversionOptimized),
            DesignFocus::ConversionOptimized
        );
    }
}
