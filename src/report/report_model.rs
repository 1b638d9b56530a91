use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::controller::controller::StepReport;
use crate::defects::defect_model::Defect;
use crate::page::page_model::PageType;
use crate::policy::action_model::ActionType;
use crate::state::crawl_state::StopReason;

// ============================================================================
// Run report — aggregates the step snapshots of one crawl run
// ============================================================================

/// One processed observation in the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageVisit {
    pub url: String,
    pub page_type: PageType,
    pub confidence: f32,
    pub defect_count: usize,
    pub action: Option<ActionType>,
}

/// Aggregated report for one crawl run.
///
/// Built from the controller's `StepReport` snapshots via `from_steps()`.
/// Consumed by the console and JSON reporters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: String,

    /// Distinct URLs observed
    pub pages_visited: usize,

    /// Observations processed, in order
    pub visits: Vec<PageVisit>,

    pub total_defects: usize,
    pub defects: Vec<Defect>,

    pub stop_reason: Option<StopReason>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u128>,
}

impl RunReport {
    /// Build a run report from an ordered list of step snapshots.
    pub fn from_steps(run_id: &str, steps: &[StepReport]) -> Self {
        let mut urls = HashSet::new();
        let mut visits = Vec::new();
        let mut defects = Vec::new();

        for step in steps {
            urls.insert(step.url.clone());
            visits.push(PageVisit {
                url: step.url.clone(),
                page_type: step.page_type,
                confidence: step.confidence,
                defect_count: step.defects.len(),
                action: step.next_action.as_ref().map(|a| a.action),
            });
            defects.extend(step.defects.iter().cloned());
        }

        Self {
            run_id: run_id.to_string(),
            pages_visited: urls.len(),
            visits,
            total_defects: defects.len(),
            defects,
            stop_reason: steps.last().and_then(|s| s.stop_reason),
            duration_ms: None,
        }
    }

    /// Set the total execution duration.
    pub fn with_duration(mut self, duration_ms: u128) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Whether the run reached a terminal stop.
    pub fn stopped(&self) -> bool {
        self.stop_reason.is_some()
    }
}
