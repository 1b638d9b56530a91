use crate::report::report_model::RunReport;

// ============================================================================
// Console reporter — formatted terminal output
// ============================================================================

/// Format a run report for terminal output.
///
/// Produces output like:
/// ```text
/// === Crawl Run: run-1 ===
///
///   [0.95] Login       https://app.example.com/login — 0 defects, next: Submit
///   [0.90] Listing     https://app.example.com/accounts — 1 defect, next: Paginate
///
/// Defects:
///   [Functional/ServerError] sev 9 — Server returned 5xx error
///
/// === Stopped: Duplicate page content detected (2 pages, 1 defect) ===
/// ```
pub fn format_run_report(report: &RunReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Crawl Run: {} ===\n\n", report.run_id));

    for visit in &report.visits {
        let action = visit
            .action
            .map(|a| format!("{:?}", a))
            .unwrap_or_else(|| "none".to_string());

        out.push_str(&format!(
            "  [{:.2}] {:<11} {} — {} {}, next: {}\n",
            visit.confidence,
            format!("{:?}", visit.page_type),
            visit.url,
            visit.defect_count,
            plural(visit.defect_count, "defect"),
            action
        ));
    }

    if !report.defects.is_empty() {
        out.push_str("\nDefects:\n");
        for defect in &report.defects {
            out.push_str(&format!(
                "  [{:?}/{}] sev {} — {}\n",
                defect.category, defect.subtype, defect.severity, defect.description
            ));
        }
    }

    // Summary line
    let outcome = match &report.stop_reason {
        Some(reason) => format!("Stopped: {}", reason),
        None => "Observations exhausted while still running".to_string(),
    };

    out.push_str(&format!(
        "\n=== {} ({} {}, {} {})",
        outcome,
        report.pages_visited,
        plural(report.pages_visited, "page"),
        report.total_defects,
        plural(report.total_defects, "defect")
    ));

    if let Some(ms) = report.duration_ms {
        let secs = ms as f64 / 1000.0;
        out.push_str(&format!(" in {:.1}s", secs));
    }

    out.push_str(" ===\n");

    out
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{}s", noun)
    }
}
