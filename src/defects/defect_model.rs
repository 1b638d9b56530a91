use serde::{Deserialize, Serialize};

/// High-level defect grouping used for triage and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefectCategory {
    Functional,
    Ui,
    Performance,
    Accessibility,
    Content,
    Security,
}

/// One independent quality finding on the current page.
///
/// Defects are additive, not mutually exclusive; a page yields zero or more.
/// `evidence` carries the triggering signal verbatim so consumers can audit
/// why the defect was raised.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defect {
    pub category: DefectCategory,
    pub subtype: String,

    /// 1 (cosmetic) to 10 (blocking)
    pub severity: u8,
    pub confidence: f32,

    pub description: String,
    pub evidence: serde_json::Value,
}
