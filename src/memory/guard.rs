use crate::memory::fingerprint::page_fingerprint;
use crate::state::crawl_state::{CrawlState, StopReason};

// ============================================================================
// Crawl memory updates
// ============================================================================

/// Record a visit to the current URL.
///
/// Set insert is idempotent; the visit count increments on every call, so N
/// observations of the same URL yield a count of N.
pub fn record_visit(state: &mut CrawlState) {
    state.visited_pages.insert(state.current_url.clone());
    *state
        .url_visit_counts
        .entry(state.current_url.clone())
        .or_insert(0) += 1;
}

/// Fingerprint the observed content and fold it into the run's memory.
///
/// Rotates the current fingerprint into `previous_page_hash` so consecutive
/// duplicates stay detectable, and bumps the occurrence count for
/// history-based duplicate detection.
pub fn record_fingerprint(state: &mut CrawlState, content: &str) {
    let hash = page_fingerprint(content);

    state.previous_page_hash = state.page_hash.take();
    *state.fingerprint_counts.entry(hash.clone()).or_insert(0) += 1;
    state.page_hash = Some(hash);
}

/// Update all crawl memory for one page observation.
pub fn update_memory(state: &mut CrawlState, content: &str) {
    record_visit(state);
    record_fingerprint(state, content);
}

// ============================================================================
// Stop predicate
// ============================================================================

/// Evaluate the must-stop conditions in fixed priority order.
///
/// First match wins. Resource exhaustion (pages, depth) takes precedence over
/// content-loop diagnosis: a run that simultaneously hits the page cap and a
/// duplicate reports the page cap. A `max_pages` of zero is an ill-formed
/// limit and stops the run before it can start.
pub fn should_stop(state: &CrawlState) -> Option<StopReason> {
    // 1. Max page limit (also guards a non-positive configured limit)
    if state.limits.max_pages == 0 || state.visited_pages.len() >= state.limits.max_pages {
        return Some(StopReason::MaxPagesReached);
    }

    // 2. Max depth guard
    if state.depth > state.limits.max_depth {
        return Some(StopReason::MaxDepthExceeded);
    }

    // 3. Duplicate content: same fingerprint as the previous page, or a
    //    fingerprint already seen earlier in the run
    if let Some(hash) = &state.page_hash {
        let consecutive = state.previous_page_hash.as_deref() == Some(hash.as_str());
        let revisited = state.fingerprint_counts.get(hash).copied().unwrap_or(0) >= 2;

        if consecutive || revisited {
            return Some(StopReason::DuplicateContent);
        }
    }

    // 4. Excessive visits to the same URL
    let visits = state
        .url_visit_counts
        .get(&state.current_url)
        .copied()
        .unwrap_or(0);
    if visits >= state.limits.max_visits_per_url {
        return Some(StopReason::UrlRevisitLimit);
    }

    None
}

/// Run the stop predicate against the state, write-once.
///
/// Once `stop_reason` is set it is never re-evaluated or cleared; a pending
/// action is discarded when the run stops.
pub fn apply_guard(state: &mut CrawlState) {
    if state.stop_reason.is_some() {
        return;
    }

    if let Some(reason) = should_stop(state) {
        state.stop_reason = Some(reason);
        state.next_action = None;
    }
}
