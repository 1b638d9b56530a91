use crawl_decision::controller::controller::{CrawlController, RunPhase};
use crawl_decision::features::feature_model::{Observation, PageFeatures, RuntimeSignals};
use crawl_decision::page::page_model::PageType;
use crawl_decision::policy::action_model::ActionType;
use crawl_decision::run_session;
use crawl_decision::state::crawl_state::{CrawlLimits, CrawlState, StopReason};
use crawl_decision::trace::logger::TraceLogger;

// ============================================================================
// Helper builders
// ============================================================================

fn observation(url: &str, content: &str) -> Observation {
    Observation {
        url: url.to_string(),
        depth: 0,
        content: content.to_string(),
        features: PageFeatures::default(),
        signals: RuntimeSignals::default(),
    }
}

fn login_observation(url: &str) -> Observation {
    Observation {
        features: PageFeatures {
            has_form: true,
            has_username_input: true,
            has_password_input: true,
            input_count: 2,
            submit_button_count: 1,
            ..PageFeatures::default()
        },
        ..observation(url, "<html><form>login</form></html>")
    }
}

fn state() -> CrawlState {
    CrawlState::new("controller-test", CrawlLimits::default())
}

// ============================================================================
// Single-step pipeline
// ============================================================================

#[test]
fn login_observation_flows_through_the_whole_pipeline() {
    let tracer = TraceLogger::disabled();
    let mut controller = CrawlController::new();
    let mut state = state();

    let report = controller.step(&mut state, &login_observation("https://app.example.com/login"), &tracer);

    assert_eq!(report.page_type, PageType::Login);
    assert!(report.confidence >= 0.9, "Strong login match");
    assert!(report.defects.is_empty());

    let action = report.next_action.expect("login page yields an action");
    assert_eq!(action.action, ActionType::Submit);
    assert_eq!(action.confidence, 0.9);

    assert_eq!(state.action_history.len(), 1, "Decided action is recorded");
    assert_eq!(controller.phase, RunPhase::Running);
    assert!(state.visited_pages.contains("https://app.example.com/login"));
}

#[test]
fn server_error_reports_defect_and_stop_action_but_keeps_running() {
    let tracer = TraceLogger::disabled();
    let mut controller = CrawlController::new();
    let mut state = state();

    let mut obs = observation("https://app.example.com/broken", "<html>500</html>");
    obs.signals.status_code = 500;

    let report = controller.step(&mut state, &obs, &tracer);

    assert_eq!(report.page_type, PageType::Error);
    assert_eq!(report.defects.len(), 1);
    assert_eq!(report.defects[0].subtype, "ServerError");

    let action = report.next_action.expect("error page yields a STOP action");
    assert_eq!(action.action, ActionType::Stop);

    // A STOP *action* is advice for the executor; only the guard's
    // stop_reason terminates the run.
    assert_eq!(report.stop_reason, None);
    assert_eq!(controller.phase, RunPhase::Running);
}

#[test]
fn navigation_context_tracks_previous_url() {
    let tracer = TraceLogger::disabled();
    let mut controller = CrawlController::new();
    let mut state = state();

    controller.step(&mut state, &observation("https://example.com/a", "A"), &tracer);
    assert_eq!(state.previous_url, None, "First page has no predecessor");

    controller.step(&mut state, &observation("https://example.com/b", "B"), &tracer);
    assert_eq!(state.previous_url.as_deref(), Some("https://example.com/a"));
    assert_eq!(state.current_url, "https://example.com/b");
}

// ============================================================================
// Terminal behavior
// ============================================================================

#[test]
fn page_cap_stops_the_controller() {
    let tracer = TraceLogger::disabled();
    let mut controller = CrawlController::new();
    let mut state = CrawlState::new(
        "capped",
        CrawlLimits {
            max_pages: 1,
            ..CrawlLimits::default()
        },
    );

    let report = controller.step(&mut state, &observation("https://example.com/a", "A"), &tracer);

    assert_eq!(report.stop_reason, Some(StopReason::MaxPagesReached));
    assert!(report.next_action.is_none(), "Pending action is discarded");
    assert!(controller.is_stopped());
    assert!(
        state.action_history.is_empty(),
        "A guarded-away action never enters the history"
    );
}

#[test]
fn stopped_controller_discards_further_observations() {
    let tracer = TraceLogger::disabled();
    let mut controller = CrawlController::new();
    let mut state = CrawlState::new(
        "capped",
        CrawlLimits {
            max_pages: 1,
            ..CrawlLimits::default()
        },
    );

    controller.step(&mut state, &observation("https://example.com/a", "A"), &tracer);
    assert!(controller.is_stopped());

    let visited_before = state.visited_pages.len();
    let report = controller.step(&mut state, &observation("https://example.com/b", "B"), &tracer);

    assert_eq!(controller.phase, RunPhase::Stopped, "STOPPED is terminal");
    assert_eq!(state.visited_pages.len(), visited_before, "No memory update");
    assert!(report.next_action.is_none(), "No action after stop");
    assert_eq!(report.stop_reason, Some(StopReason::MaxPagesReached));
}

// ============================================================================
// Session driver
// ============================================================================

#[test]
fn duplicate_content_terminates_a_session() {
    let tracer = TraceLogger::disabled();
    let mut state = state();

    let observations = vec![
        observation("https://example.com/a", "<html>same</html>"),
        observation("https://example.com/a", "<html>same</html>"),
        observation("https://example.com/b", "<html>other</html>"),
    ];

    let reports = run_session(&mut state, &observations, &tracer);

    assert_eq!(reports.len(), 2, "Third observation is never processed");
    assert_eq!(
        reports[1].stop_reason,
        Some(StopReason::DuplicateContent)
    );
    assert!(state.is_stopped());
}

#[test]
fn session_exhausts_observations_while_still_running() {
    let tracer = TraceLogger::disabled();
    let mut state = state();

    let observations = vec![
        observation("https://example.com/a", "A"),
        observation("https://example.com/b", "B"),
    ];

    let reports = run_session(&mut state, &observations, &tracer);

    assert_eq!(reports.len(), 2);
    assert_eq!(state.stop_reason, None, "No guard tripped");
    assert_eq!(state.visited_pages.len(), 2);
    assert_eq!(state.action_history.len(), 2);
}

#[test]
fn concurrent_runs_do_not_share_state() {
    let tracer = TraceLogger::disabled();

    let mut first = CrawlState::new("run-1", CrawlLimits::default());
    let mut second = CrawlState::new("run-2", CrawlLimits::default());

    run_session(
        &mut first,
        &[observation("https://example.com/a", "A")],
        &tracer,
    );

    assert_eq!(second.visited_pages.len(), 0, "Each run owns its memory");
    run_session(
        &mut second,
        &[observation("https://example.com/b", "B")],
        &tracer,
    );
    assert!(!first.visited_pages.contains("https://example.com/b"));
}
