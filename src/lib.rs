use crate::{
    controller::controller::{CrawlController, StepReport},
    features::feature_model::Observation,
    state::crawl_state::CrawlState,
    trace::logger::TraceLogger,
};

pub mod cli;
pub mod controller;
pub mod defects;
pub mod features;
pub mod memory;
pub mod page;
pub mod policy;
pub mod report;
pub mod state;
pub mod trace;

/// Drive one crawl run across an ordered sequence of page observations.
///
/// Steps the controller once per observation until the loop guard stops the
/// run or the input is exhausted, returning the per-step snapshots. The
/// caller owns `state` and can inspect the accumulated crawl memory after
/// the session ends.
pub fn run_session(
    state: &mut CrawlState,
    observations: &[Observation],
    tracer: &TraceLogger,
) -> Vec<StepReport> {
    let mut controller = CrawlController::new();
    let mut reports = Vec::new();

    for observation in observations {
        let report = controller.step(state, observation, tracer);
        let stopped = report.stop_reason.is_some();
        reports.push(report);

        if stopped {
            break;
        }
    }

    reports
}
