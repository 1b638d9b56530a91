use crate::features::feature_model::{PageFeatures, RuntimeSignals};
use crate::page::page_model::PageType;

/// Classify the current page into a `PageType` with a confidence in [0, 1].
///
/// Evaluates a strictly ordered cascade of rule groups; the first group whose
/// predicate matches wins and later groups are not evaluated. The ordering is
/// a contract. Error and auth states preempt structural inference, since a
/// 500 page may still contain a table. Strong structural signals outrank weak
/// URL hints. Dashboard is the last positive match before the unknown
/// fallback.
pub fn classify(features: &PageFeatures, signals: &RuntimeSignals) -> (PageType, f32) {
    classify_error(signals)
        .or_else(|| classify_login(features))
        .or_else(|| classify_auth_challenge(features, signals))
        .or_else(|| classify_empty(features))
        .or_else(|| classify_listing(features))
        .or_else(|| classify_detail(features))
        .or_else(|| classify_form(features))
        .or_else(|| classify_pagination(features))
        .or_else(|| classify_dashboard(features))
        .unwrap_or((PageType::Unknown, 0.3))
}

/// HTTP or runtime-level error pages.
fn classify_error(signals: &RuntimeSignals) -> Option<(PageType, f32)> {
    if signals.status_code >= 500 {
        return Some((PageType::Error, 0.99));
    }

    if (400..500).contains(&signals.status_code) {
        return Some((PageType::Error, 0.95));
    }

    // SPA runtime crash: the server answered 200 but the page blew up
    if signals.status_code == 200 && !signals.console_errors.is_empty() {
        return Some((PageType::Error, 0.8));
    }

    None
}

/// Username + password inputs strongly imply login.
fn classify_login(features: &PageFeatures) -> Option<(PageType, f32)> {
    if features.has_password_input
        && features.has_username_input
        && features.submit_button_count > 0
    {
        return Some((PageType::Login, 0.95));
    }

    // URL hint fallback
    if features.has_url_pattern("login") || features.has_url_pattern("signin") {
        return Some((PageType::Login, 0.85));
    }

    None
}

/// MFA / OTP / SSO handoff pages.
fn classify_auth_challenge(
    features: &PageFeatures,
    signals: &RuntimeSignals,
) -> Option<(PageType, f32)> {
    let auth_hints = ["otp", "verify", "challenge", "two-factor"];

    if auth_hints.iter().any(|hint| features.has_url_pattern(hint)) {
        return Some((PageType::AuthChallenge, 0.8));
    }

    if features.has_form
        && features.input_count <= 2
        && !features.has_password_input
        && signals.redirect_detected
    {
        return Some((PageType::AuthChallenge, 0.75));
    }

    None
}

fn classify_empty(features: &PageFeatures) -> Option<(PageType, f32)> {
    if features.empty_state_detected {
        return Some((PageType::Empty, 0.9));
    }
    None
}

/// Tables + pagination usually mean listings.
fn classify_listing(features: &PageFeatures) -> Option<(PageType, f32)> {
    if features.table_count > 0 && features.pagination_controls {
        return Some((PageType::Listing, 0.9));
    }

    if features.table_count > 1 {
        return Some((PageType::Listing, 0.8));
    }

    None
}

/// Single-record views.
fn classify_detail(features: &PageFeatures) -> Option<(PageType, f32)> {
    if features.table_count == 1 && !features.pagination_controls && !features.has_form {
        return Some((PageType::Detail, 0.75));
    }

    None
}

/// Generic data entry forms (non-auth).
fn classify_form(features: &PageFeatures) -> Option<(PageType, f32)> {
    if features.has_form && features.input_count >= 3 && !features.has_password_input {
        return Some((PageType::Form, 0.8));
    }

    None
}

/// Explicit pagination pages (rare but possible).
fn classify_pagination(features: &PageFeatures) -> Option<(PageType, f32)> {
    if features.pagination_controls && features.table_count == 0 {
        return Some((PageType::Pagination, 0.7));
    }

    None
}

/// Landing pages with widget/card content blocks and no other structure.
///
/// Requires at least one content block: a page with no structure at all
/// falls through to the unknown fallback instead.
fn classify_dashboard(features: &PageFeatures) -> Option<(PageType, f32)> {
    if !features.has_form
        && !features.pagination_controls
        && features.table_count == 0
        && !features.empty_state_detected
        && features.content_block_count > 0
    {
        return Some((PageType::Dashboard, 0.6));
    }

    None
}
