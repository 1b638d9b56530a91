use serde::{Deserialize, Serialize};

use crate::defects::defect_model::Defect;
use crate::defects::rules::detect;
use crate::features::feature_model::Observation;
use crate::memory::guard::{apply_guard, update_memory};
use crate::page::classifier::classify;
use crate::page::page_model::PageType;
use crate::policy::action_model::ActionDecision;
use crate::policy::policy::decide;
use crate::state::crawl_state::{CrawlState, StopReason};
use crate::trace::{logger::TraceLogger, trace::TraceEvent};

// ============================================================================
// Run phase — two-state machine, STOPPED is terminal
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Running,
    Stopped,
}

/// Snapshot of one pipeline step, sufficient for an external reporter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepReport {
    pub url: String,
    pub page_type: PageType,
    pub confidence: f32,
    pub defects: Vec<Defect>,
    pub next_action: Option<ActionDecision>,
    pub stop_reason: Option<StopReason>,
}

impl StepReport {
    fn from_state(state: &CrawlState) -> Self {
        Self {
            url: state.current_url.clone(),
            page_type: state.page_type,
            confidence: state.page_confidence,
            defects: state.detected_defects.clone(),
            next_action: state.next_action.clone(),
            stop_reason: state.stop_reason,
        }
    }
}

// ============================================================================
// Controller — drives the fixed decision pipeline per observation
// ============================================================================

/// Steps one crawl run through the decision pipeline:
/// classify → detect defects → decide action → update memory → loop guard.
///
/// Transitions to `Stopped` iff the guard set a stop reason. Once stopped,
/// further observations are discarded and no actions are decided.
pub struct CrawlController {
    pub phase: RunPhase,
    step: u64,
}

impl CrawlController {
    pub fn new() -> Self {
        Self {
            phase: RunPhase::Running,
            step: 0,
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.phase == RunPhase::Stopped
    }

    /// Process one page observation and return the step snapshot.
    pub fn step(
        &mut self,
        state: &mut CrawlState,
        observation: &Observation,
        tracer: &TraceLogger,
    ) -> StepReport {
        let mut trace = TraceEvent::now(self.step, &self.phase, &observation.url);
        self.step += 1;

        if self.is_stopped() {
            tracer.log(&trace.with_note("observation discarded after stop"));
            return StepReport::from_state(state);
        }

        ingest(state, observation);

        let (page_type, confidence) = classify(&state.page_features, &state.signals);
        state.page_type = page_type;
        state.page_confidence = confidence;

        state.detected_defects = detect(&state.page_features, &state.signals);

        state.next_action = Some(decide(state.page_type));

        update_memory(state, &observation.content);
        apply_guard(state);

        // Only actions that survive the guard enter the history
        if let Some(action) = state.next_action.clone() {
            state.record_action(&action);
        }

        trace = trace
            .with_page(page_type, confidence)
            .with_defect_count(state.detected_defects.len());
        if let Some(action) = &state.next_action {
            trace = trace.with_action(action);
        }
        if let Some(reason) = state.stop_reason {
            trace = trace.with_stop_reason(reason);
            self.phase = RunPhase::Stopped;
        }
        tracer.log(&trace);

        StepReport::from_state(state)
    }
}

impl Default for CrawlController {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold one observation into the navigation context.
fn ingest(state: &mut CrawlState, observation: &Observation) {
    if !state.current_url.is_empty() {
        state.previous_url = Some(state.current_url.clone());
    }
    state.current_url = observation.url.clone();
    state.depth = observation.depth;
    state.page_features = observation.features.clone();
    state.signals = observation.signals.clone();
}
