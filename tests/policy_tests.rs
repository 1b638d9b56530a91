use crawl_decision::page::page_model::PageType;
use crawl_decision::policy::action_model::ActionType;
use crawl_decision::policy::policy::decide;

// ============================================================================
// Page type → action mapping
// ============================================================================

#[test]
fn error_page_stops_with_high_confidence() {
    let decision = decide(PageType::Error);
    assert_eq!(decision.action, ActionType::Stop);
    assert_eq!(decision.confidence, 0.95);
    assert_eq!(decision.rationale, "Terminal error page detected");
}

#[test]
fn login_page_submits_credentials() {
    let decision = decide(PageType::Login);
    assert_eq!(decision.action, ActionType::Submit);
    assert_eq!(decision.confidence, 0.9);
}

#[test]
fn listing_page_paginates() {
    let decision = decide(PageType::Listing);
    assert_eq!(decision.action, ActionType::Paginate);
    assert_eq!(decision.confidence, 0.85);
}

#[test]
fn form_page_submits() {
    let decision = decide(PageType::Form);
    assert_eq!(decision.action, ActionType::Submit);
    assert_eq!(decision.confidence, 0.8);
}

#[test]
fn dashboard_explores_via_click() {
    let decision = decide(PageType::Dashboard);
    assert_eq!(decision.action, ActionType::Click);
    assert_eq!(decision.confidence, 0.7);
}

#[test]
fn remaining_page_types_fall_back_to_stop() {
    for page_type in [
        PageType::AuthChallenge,
        PageType::Detail,
        PageType::Pagination,
        PageType::Empty,
        PageType::Unknown,
    ] {
        let decision = decide(page_type);
        assert_eq!(
            decision.action,
            ActionType::Stop,
            "{:?} has no deterministic move",
            page_type
        );
        assert_eq!(decision.confidence, 0.5);
        assert_eq!(decision.rationale, "No deterministic action available");
    }
}

// ============================================================================
// Policy contract
// ============================================================================

#[test]
fn target_and_value_are_left_to_the_interaction_layer() {
    for page_type in [PageType::Login, PageType::Listing, PageType::Dashboard] {
        let decision = decide(page_type);
        assert!(decision.target.is_none(), "{:?}: target unset", page_type);
        assert!(decision.value.is_none(), "{:?}: value unset", page_type);
    }
}

#[test]
fn policy_is_deterministic() {
    assert_eq!(decide(PageType::Login), decide(PageType::Login));
    assert_eq!(decide(PageType::Unknown), decide(PageType::Unknown));
}
