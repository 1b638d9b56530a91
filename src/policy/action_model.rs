use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Browser-level interaction kinds the policy can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    Click,
    Type,
    Submit,
    Paginate,
    Wait,
    Stop,
}

/// The single next-action decision for one crawl step.
///
/// `target` and `value` are left unset by the base policy; an external
/// interaction-selection layer populates them before execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionDecision {
    pub action: ActionType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    pub rationale: String,
    pub confidence: f32,
}

/// A decided action appended to the crawl's ordered history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionRecord {
    pub action: ActionType,
    pub target: Option<String>,
    pub timestamp_ms: u128,
}

impl ActionRecord {
    pub fn of(decision: &ActionDecision) -> Self {
        Self {
            action: decision.action,
            target: decision.target.clone(),
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_millis(),
        }
    }
}
