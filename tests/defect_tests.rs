use crawl_decision::defects::defect_model::DefectCategory;
use crawl_decision::defects::rules::detect;
use crawl_decision::features::feature_model::{PageFeatures, RuntimeSignals};

// ============================================================================
// Helper builders
// ============================================================================

fn signals() -> RuntimeSignals {
    RuntimeSignals::default()
}

fn features() -> PageFeatures {
    PageFeatures::default()
}

// ============================================================================
// Functional defects
// ============================================================================

#[test]
fn server_error_produces_exactly_one_functional_defect() {
    let signals = RuntimeSignals {
        status_code: 500,
        ..signals()
    };

    let defects = detect(&features(), &signals);
    assert_eq!(defects.len(), 1, "5xx alone triggers exactly one rule");

    let defect = &defects[0];
    assert_eq!(defect.category, DefectCategory::Functional);
    assert_eq!(defect.subtype, "ServerError");
    assert_eq!(defect.severity, 9);
    assert_eq!(defect.confidence, 0.95);
    assert_eq!(
        defect.evidence["status_code"], 500,
        "Evidence carries the raw status code"
    );
}

#[test]
fn client_error_produces_client_error_defect() {
    let signals = RuntimeSignals {
        status_code: 404,
        ..signals()
    };

    let defects = detect(&features(), &signals);
    assert_eq!(defects.len(), 1);
    assert_eq!(defects[0].subtype, "ClientError");
    assert_eq!(defects[0].severity, 7);
    assert_eq!(defects[0].evidence["status_code"], 404);
}

#[test]
fn console_errors_carry_the_error_list_verbatim() {
    let signals = RuntimeSignals {
        console_errors: vec!["ReferenceError: foo".into(), "TypeError: bar".into()],
        ..signals()
    };

    let defects = detect(&features(), &signals);
    assert_eq!(defects.len(), 1);
    assert_eq!(defects[0].subtype, "ConsoleError");
    assert_eq!(defects[0].severity, 6);
    assert_eq!(defects[0].evidence["errors"][0], "ReferenceError: foo");
    assert_eq!(defects[0].evidence["errors"][1], "TypeError: bar");
}

#[test]
fn failed_requests_produce_network_failure() {
    let signals = RuntimeSignals {
        failed_requests: 3,
        ..signals()
    };

    let defects = detect(&features(), &signals);
    assert_eq!(defects.len(), 1);
    assert_eq!(defects[0].subtype, "NetworkFailure");
    assert_eq!(defects[0].evidence["failed_requests"], 3);
}

// ============================================================================
// UI and performance defects
// ============================================================================

#[test]
fn layout_overlap_produces_ui_defect() {
    let signals = RuntimeSignals {
        layout_overlaps: true,
        ..signals()
    };

    let defects = detect(&features(), &signals);
    assert_eq!(defects.len(), 1);
    assert_eq!(defects[0].category, DefectCategory::Ui);
    assert_eq!(defects[0].subtype, "LayoutOverlap");
    assert_eq!(defects[0].severity, 5);
}

#[test]
fn slow_page_load_threshold_is_exclusive() {
    let at_threshold = RuntimeSignals {
        page_load_time_ms: Some(3000),
        ..signals()
    };
    assert!(
        detect(&features(), &at_threshold).is_empty(),
        "Exactly 3000ms is not a defect"
    );

    let over_threshold = RuntimeSignals {
        page_load_time_ms: Some(3001),
        ..signals()
    };
    let defects = detect(&features(), &over_threshold);
    assert_eq!(defects.len(), 1);
    assert_eq!(defects[0].category, DefectCategory::Performance);
    assert_eq!(defects[0].subtype, "SlowPageLoad");
    assert_eq!(defects[0].evidence["page_load_time_ms"], 3001);
}

#[test]
fn long_main_thread_tasks_threshold_is_exclusive() {
    let at_threshold = RuntimeSignals {
        long_tasks_ms: Some(200),
        ..signals()
    };
    assert!(
        detect(&features(), &at_threshold).is_empty(),
        "Exactly 200ms is not a defect"
    );

    let over_threshold = RuntimeSignals {
        long_tasks_ms: Some(250),
        ..signals()
    };
    let defects = detect(&features(), &over_threshold);
    assert_eq!(defects.len(), 1);
    assert_eq!(defects[0].subtype, "LongMainThreadTasks");
    assert_eq!(defects[0].evidence["long_tasks_ms"], 250);
}

// ============================================================================
// Additivity — independent rules all fire, none twice
// ============================================================================

#[test]
fn independent_triggers_accumulate() {
    let signals = RuntimeSignals {
        status_code: 500,
        console_errors: vec!["crash".into()],
        failed_requests: 2,
        layout_overlaps: true,
        page_load_time_ms: Some(5000),
        long_tasks_ms: Some(400),
        ..signals()
    };

    let defects = detect(&features(), &signals);
    assert_eq!(defects.len(), 6, "Every triggered rule fires exactly once");

    let mut subtypes: Vec<&str> = defects.iter().map(|d| d.subtype.as_str()).collect();
    subtypes.sort();
    subtypes.dedup();
    assert_eq!(subtypes.len(), 6, "No subtype is duplicated within one pass");
}

#[test]
fn clean_page_produces_no_defects() {
    let defects = detect(&features(), &signals());
    assert!(
        defects.is_empty(),
        "Absence of triggers means absence of defects, never placeholders"
    );
}

#[test]
fn detection_is_deterministic() {
    let signals = RuntimeSignals {
        status_code: 502,
        failed_requests: 1,
        ..signals()
    };

    let first = detect(&features(), &signals);
    let second = detect(&features(), &signals);
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.subtype, b.subtype);
        assert_eq!(a.severity, b.severity);
    }
}
