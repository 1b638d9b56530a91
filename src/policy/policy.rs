use crate::page::page_model::PageType;
use crate::policy::action_model::{ActionDecision, ActionType};

/// Map the classified page type to the next crawl action.
///
/// Total function of page type alone: every input yields exactly one
/// decision, never an error. Page types without a deterministic move fall
/// through to a low-confidence STOP.
pub fn decide(page_type: PageType) -> ActionDecision {
    match page_type {
        PageType::Error => ActionDecision {
            action: ActionType::Stop,
            target: None,
            value: None,
            rationale: "Terminal error page detected".into(),
            confidence: 0.95,
        },

        PageType::Login => ActionDecision {
            action: ActionType::Submit,
            target: None,
            value: None,
            rationale: "Login page detected; submit credentials".into(),
            confidence: 0.9,
        },

        PageType::Listing => ActionDecision {
            action: ActionType::Paginate,
            target: None,
            value: None,
            rationale: "Listing page detected; paginate".into(),
            confidence: 0.85,
        },

        PageType::Form => ActionDecision {
            action: ActionType::Submit,
            target: None,
            value: None,
            rationale: "Form detected; submit form".into(),
            confidence: 0.8,
        },

        PageType::Dashboard => ActionDecision {
            action: ActionType::Click,
            target: None,
            value: None,
            rationale: "Dashboard detected; explore content".into(),
            confidence: 0.7,
        },

        _ => ActionDecision {
            action: ActionType::Stop,
            target: None,
            value: None,
            rationale: "No deterministic action available".into(),
            confidence: 0.5,
        },
    }
}
