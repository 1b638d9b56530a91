use std::path::Path;

use crate::controller::controller::StepReport;
use crate::defects::rules::detect;
use crate::features::ingest::{load_observation, load_observations};
use crate::page::classifier::classify;
use crate::policy::policy::decide;
use crate::report::console::format_run_report;
use crate::report::report_model::RunReport;
use crate::run_session;
use crate::state::crawl_state::{CrawlLimits, CrawlState};
use crate::trace::logger::TraceLogger;

// ============================================================================
// run subcommand
// ============================================================================

/// Replay an observation sequence and emit the run report.
/// Returns whether the run finished defect-free.
pub fn cmd_run(
    observations_path: &str,
    run_id: &str,
    limits: CrawlLimits,
    format: &str,
    output: Option<&str>,
    trace_path: Option<&str>,
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    let observations = load_observations(Path::new(observations_path))?;

    if observations.is_empty() {
        eprintln!("No observations found at: {}", observations_path);
        return Ok(true);
    }

    if verbose > 0 {
        eprintln!(
            "Replaying {} observations (run '{}', max_pages={}, max_depth={})...",
            observations.len(),
            run_id,
            limits.max_pages,
            limits.max_depth
        );
    }

    let tracer = match trace_path {
        Some(path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    };

    let mut state = CrawlState::new(run_id, limits);
    let start = std::time::Instant::now();
    let steps = run_session(&mut state, &observations, &tracer);
    let duration = start.elapsed().as_millis();

    if verbose > 0 {
        if let Some(reason) = &state.stop_reason {
            eprintln!("Run stopped after {} steps: {}", steps.len(), reason);
        } else {
            eprintln!("Observations exhausted after {} steps", steps.len());
        }
    }

    let report = RunReport::from_steps(run_id, &steps).with_duration(duration);
    let defect_free = report.total_defects == 0;

    // Format report
    let output_content = match format {
        "json" => {
            let mut json = serde_json::to_string_pretty(&report)?;
            json.push('\n');
            json
        }
        _ => format_run_report(&report),
    };

    // Write or print
    match output {
        Some(path) => std::fs::write(path, &output_content)?,
        None => print!("{}", output_content),
    }

    Ok(defect_free)
}

// ============================================================================
// classify subcommand
// ============================================================================

/// One-shot decision for a single observation: classified page type,
/// defects, and the next action, printed as JSON.
pub fn cmd_classify(observation_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let observation = load_observation(Path::new(observation_path))?;

    let (page_type, confidence) = classify(&observation.features, &observation.signals);
    let defects = detect(&observation.features, &observation.signals);
    let decision = decide(page_type);

    let snapshot = StepReport {
        url: observation.url.clone(),
        page_type,
        confidence,
        defects,
        next_action: Some(decision),
        stop_reason: None,
    };

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
