use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::defects::defect_model::Defect;
use crate::features::feature_model::{PageFeatures, RuntimeSignals};
use crate::page::page_model::PageType;
use crate::policy::action_model::{ActionDecision, ActionRecord};

// ============================================================================
// Stop reasons — the sole terminal signal of a run
// ============================================================================

/// Terminal diagnosis explaining why a run halted.
///
/// Serialized (and displayed) as the human-readable diagnostic string the
/// external reporter emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    #[serde(rename = "Max pages limit reached")]
    MaxPagesReached,

    #[serde(rename = "Max depth exceeded")]
    MaxDepthExceeded,

    #[serde(rename = "Duplicate page content detected")]
    DuplicateContent,

    #[serde(rename = "Too many visits to same URL")]
    UrlRevisitLimit,
}

impl StopReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            StopReason::MaxPagesReached => "Max pages limit reached",
            StopReason::MaxDepthExceeded => "Max depth exceeded",
            StopReason::DuplicateContent => "Duplicate page content detected",
            StopReason::UrlRevisitLimit => "Too many visits to same URL",
        }
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Run limits
// ============================================================================

/// Safety limits configured once per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlLimits {
    pub max_pages: usize,
    pub max_depth: usize,
    pub max_visits_per_url: u32,

    /// Advisory only: available to external policy layers, never enforced
    /// by this core's decision logic.
    pub confidence_threshold: f32,
}

impl Default for CrawlLimits {
    fn default() -> Self {
        Self {
            max_pages: 100,
            max_depth: 5,
            max_visits_per_url: 3,
            confidence_threshold: 0.7,
        }
    }
}

// ============================================================================
// Crawl state — the single mutable record threaded through every step
// ============================================================================

/// Accumulated state of one crawl run.
///
/// Created once per run, mutated in place by each pipeline stage, exclusively
/// owned by its run. Invariants: `visited_pages` only grows; every URL ever
/// set as `current_url` has a visit count of at least 1 after its first
/// observation; `stop_reason` is set at most once and never cleared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlState {
    // Identity
    pub run_id: String,

    // Navigation context (depth is advanced by the external navigation step)
    pub current_url: String,
    pub previous_url: Option<String>,
    pub depth: usize,

    // Page fingerprinting
    pub page_hash: Option<String>,
    pub previous_page_hash: Option<String>,

    // Page understanding
    pub page_type: PageType,
    pub page_confidence: f32,
    pub page_features: PageFeatures,
    pub signals: RuntimeSignals,

    // Crawl memory
    pub visited_pages: HashSet<String>,
    pub url_visit_counts: HashMap<String, u32>,
    pub fingerprint_counts: HashMap<String, u32>,
    pub action_history: Vec<ActionRecord>,

    // Defects on the current page
    pub detected_defects: Vec<Defect>,

    // Decision output
    pub next_action: Option<ActionDecision>,
    pub stop_reason: Option<StopReason>,

    // Safety limits
    pub limits: CrawlLimits,
}

impl CrawlState {
    pub fn new(run_id: &str, limits: CrawlLimits) -> Self {
        Self {
            run_id: run_id.to_string(),
            current_url: String::new(),
            previous_url: None,
            depth: 0,
            page_hash: None,
            previous_page_hash: None,
            page_type: PageType::Unknown,
            page_confidence: 0.0,
            page_features: PageFeatures::default(),
            signals: RuntimeSignals::default(),
            visited_pages: HashSet::new(),
            url_visit_counts: HashMap::new(),
            fingerprint_counts: HashMap::new(),
            action_history: Vec::new(),
            detected_defects: Vec::new(),
            next_action: None,
            stop_reason: None,
            limits,
        }
    }

    /// Append the decided action to the run's ordered history.
    pub fn record_action(&mut self, decision: &ActionDecision) {
        self.action_history.push(ActionRecord::of(decision));
    }

    pub fn is_stopped(&self) -> bool {
        self.stop_reason.is_some()
    }
}
