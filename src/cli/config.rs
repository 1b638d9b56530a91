use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::state::crawl_state::CrawlLimits;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "crawl-decision",
    version,
    about = "Deterministic decision engine for automated web-page exploration"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: crawl-decision.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a session of page observations through the decision pipeline
    Run {
        /// Path to an observation JSON file or directory of JSON files
        #[arg(long)]
        observations: String,

        /// Identifier for this run (default: derived from wall clock)
        #[arg(long)]
        run_id: Option<String>,

        /// Maximum pages to visit before stopping
        #[arg(long)]
        max_pages: Option<usize>,

        /// Maximum navigation depth before stopping
        #[arg(long)]
        max_depth: Option<usize>,

        /// Visits to the same URL tolerated before stopping
        #[arg(long)]
        max_visits_per_url: Option<u32>,

        /// Output format: console, json
        #[arg(long)]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Write a JSONL decision trace to this path
        #[arg(long)]
        trace: Option<String>,
    },

    /// Classify a single observation and print the decision snapshot
    Classify {
        /// Path to an observation JSON file
        #[arg(long)]
        observation: String,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `crawl-decision.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub run: RunConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    #[serde(default = "default_hundred")]
    pub max_pages: usize,

    #[serde(default = "default_five")]
    pub max_depth: usize,

    #[serde(default = "default_three")]
    pub max_visits_per_url: u32,

    #[serde(default = "default_confidence")]
    pub confidence_threshold: f32,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_pages: 100,
            max_depth: 5,
            max_visits_per_url: 3,
            confidence_threshold: 0.7,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default = "default_console")]
    pub format: String,

    pub output: Option<String>,
    pub trace: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            format: "console".to_string(),
            output: None,
            trace: None,
        }
    }
}

// Serde default helpers
fn default_hundred() -> usize { 100 }
fn default_five() -> usize { 5 }
fn default_three() -> u32 { 3 }
fn default_confidence() -> f32 { 0.7 }
fn default_console() -> String { "console".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("crawl-decision.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Limit resolution (merge CLI args with config file)
// ============================================================================

/// Resolve run limits: CLI > config file > defaults.
pub fn build_limits(
    config: &AppConfig,
    max_pages: Option<usize>,
    max_depth: Option<usize>,
    max_visits_per_url: Option<u32>,
) -> CrawlLimits {
    CrawlLimits {
        max_pages: max_pages.unwrap_or(config.limits.max_pages),
        max_depth: max_depth.unwrap_or(config.limits.max_depth),
        max_visits_per_url: max_visits_per_url.unwrap_or(config.limits.max_visits_per_url),
        confidence_threshold: config.limits.confidence_threshold,
    }
}
