//! Command line argument parsing for the phone-simi CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::similarity::EquivalenceRule;

/// phone-simi - Reversed edit-distance similarity for phone numbers
#[derive(Parser, Debug, Clone)]
#[command(name = "phone-simi")]
#[command(about = "Score the similarity of phone numbers and short strings")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PhoneSimiArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "PHONE_SIMI_CONFIG")]
    pub config: Option<PathBuf>,

    /// Character equivalence rule (overrides the configuration file)
    #[arg(short, long)]
    pub rule: Option<RuleArg>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl PhoneSimiArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Score two texts after reversal and truncation
    Compare(CompareArgs),

    /// Raw edit distance between two texts, no preprocessing
    Distance(DistanceArgs),

    /// Score every pair in a JSON Lines file
    Batch(BatchArgs),

    /// Print the scoring function's usage text
    Usage(UsageArgs),
}

/// Arguments for comparing two texts
#[derive(Parser, Debug, Clone)]
pub struct CompareArgs {
    /// First text (kept whole)
    #[arg(value_name = "TEXT1")]
    pub text1: String,

    /// Second text (truncated after reversal)
    #[arg(value_name = "TEXT2")]
    pub text2: String,
}

/// Arguments for the raw distance
#[derive(Parser, Debug, Clone)]
pub struct DistanceArgs {
    #[arg(value_name = "SOURCE")]
    pub source: String,

    #[arg(value_name = "TARGET")]
    pub target: String,
}

/// Arguments for batch scoring
#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    /// Input file, one `{"text1": .., "text2": ..}` object per line
    #[arg(value_name = "INPUT_FILE")]
    pub input: PathBuf,

    /// Only print the summary
    #[arg(long)]
    pub summary_only: bool,
}

/// Arguments for usage text
#[derive(Parser, Debug, Clone)]
pub struct UsageArgs {
    /// Function name shown in the usage line
    #[arg(long, default_value = "phone_res_simi")]
    pub name: String,
}

/// Equivalence rules selectable from the CLI
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleArg {
    /// Equal or 32 code points apart
    Literal,
    /// ASCII case-insensitive
    Ascii,
    /// Exact match
    Exact,
}

impl From<RuleArg> for EquivalenceRule {
    fn from(rule: RuleArg) -> Self {
        match rule {
            RuleArg::Literal => EquivalenceRule::Literal,
            RuleArg::Ascii => EquivalenceRule::AsciiCaseInsensitive,
            RuleArg::Exact => EquivalenceRule::Exact,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}
