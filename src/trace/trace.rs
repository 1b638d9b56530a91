use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::controller::controller::RunPhase;
use crate::page::page_model::PageType;
use crate::policy::action_model::ActionDecision;
use crate::state::crawl_state::StopReason;

#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub step: u64,

    pub phase: String,
    pub url: String,

    pub page_type: Option<String>,
    pub confidence: Option<f32>,

    pub action: Option<String>,
    pub defect_count: Option<usize>,

    pub stop_reason: Option<String>,
    pub note: Option<String>,
}

impl TraceEvent {
    pub fn now(step: u64, phase: &RunPhase, url: &str) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_millis(),
            step,
            phase: format!("{:?}", phase),
            url: url.to_string(),
            page_type: None,
            confidence: None,
            action: None,
            defect_count: None,
            stop_reason: None,
            note: None,
        }
    }

    pub fn with_page(mut self, page_type: PageType, confidence: f32) -> Self {
        self.page_type = Some(format!("{:?}", page_type));
        self.confidence = Some(confidence);
        self
    }

    pub fn with_action(mut self, action: &ActionDecision) -> Self {
        self.action = Some(format!("{:?}", action.action));
        self
    }

    pub fn with_defect_count(mut self, count: usize) -> Self {
        self.defect_count = Some(count);
        self
    }

    pub fn with_stop_reason(mut self, reason: StopReason) -> Self {
        self.stop_reason = Some(reason.to_string());
        self
    }

    pub fn with_note(mut self, note: impl ToString) -> Self {
        self.note = Some(note.to_string());
        self
    }
}
