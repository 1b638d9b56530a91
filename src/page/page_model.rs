use serde::{Deserialize, Serialize};

/// Semantic page type assigned by the classifier cascade.
///
/// Closed set; every classification call yields exactly one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PageType {
    Login,
    AuthChallenge,
    Form,
    Listing,
    Detail,
    Dashboard,
    Pagination,
    Error,
    Empty,
    Unknown,
}
