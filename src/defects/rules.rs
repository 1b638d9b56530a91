use serde_json::json;

use crate::defects::defect_model::{Defect, DefectCategory};
use crate::features::feature_model::{PageFeatures, RuntimeSignals};

/// Run every defect rule against the current page's features and signals.
///
/// All applicable rules fire; there is no short-circuit and no placeholder
/// entries. Absence of a trigger means absence of the defect. Rules are
/// currently signal-driven; the feature vector is part of the detection
/// contract.
pub fn detect(_features: &PageFeatures, signals: &RuntimeSignals) -> Vec<Defect> {
    let mut defects = Vec::new();

    defects.extend(functional_defects(signals));
    defects.extend(ui_defects(signals));
    defects.extend(performance_defects(signals));

    defects
}

fn functional_defects(signals: &RuntimeSignals) -> Vec<Defect> {
    let mut defects = Vec::new();

    if signals.status_code >= 500 {
        defects.push(Defect {
            category: DefectCategory::Functional,
            subtype: "ServerError".into(),
            severity: 9,
            confidence: 0.95,
            description: "Server returned 5xx error".into(),
            evidence: json!({ "status_code": signals.status_code }),
        });
    }

    if (400..500).contains(&signals.status_code) {
        defects.push(Defect {
            category: DefectCategory::Functional,
            subtype: "ClientError".into(),
            severity: 7,
            confidence: 0.9,
            description: "Client-side HTTP error".into(),
            evidence: json!({ "status_code": signals.status_code }),
        });
    }

    if !signals.console_errors.is_empty() {
        defects.push(Defect {
            category: DefectCategory::Functional,
            subtype: "ConsoleError".into(),
            severity: 6,
            confidence: 0.85,
            description: "JavaScript console errors detected".into(),
            evidence: json!({ "errors": signals.console_errors }),
        });
    }

    if signals.failed_requests > 0 {
        defects.push(Defect {
            category: DefectCategory::Functional,
            subtype: "NetworkFailure".into(),
            severity: 6,
            confidence: 0.8,
            description: "Failed network requests detected".into(),
            evidence: json!({ "failed_requests": signals.failed_requests }),
        });
    }

    defects
}

fn ui_defects(signals: &RuntimeSignals) -> Vec<Defect> {
    let mut defects = Vec::new();

    if signals.layout_overlaps {
        defects.push(Defect {
            category: DefectCategory::Ui,
            subtype: "LayoutOverlap".into(),
            severity: 5,
            confidence: 0.75,
            description: "Overlapping UI elements detected".into(),
            evidence: json!({}),
        });
    }

    defects
}

fn performance_defects(signals: &RuntimeSignals) -> Vec<Defect> {
    let mut defects = Vec::new();

    if let Some(load_ms) = signals.page_load_time_ms {
        if load_ms > 3000 {
            defects.push(Defect {
                category: DefectCategory::Performance,
                subtype: "SlowPageLoad".into(),
                severity: 6,
                confidence: 0.8,
                description: "Page load time exceeded threshold".into(),
                evidence: json!({ "page_load_time_ms": load_ms }),
            });
        }
    }

    if let Some(task_ms) = signals.long_tasks_ms {
        if task_ms > 200 {
            defects.push(Defect {
                category: DefectCategory::Performance,
                subtype: "LongMainThreadTasks".into(),
                severity: 5,
                confidence: 0.75,
                description: "Long main-thread tasks detected".into(),
                evidence: json!({ "long_tasks_ms": task_ms }),
            });
        }
    }

    defects
}
