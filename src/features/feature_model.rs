use serde::{Deserialize, Serialize};

// ============================================================================
// Feature/signal contract — fixed-shape input describing one observed page
// ============================================================================

/// Structural features extracted from a rendered page's DOM.
///
/// Produced by an external extraction collaborator; this crate never parses
/// HTML itself. Absent fields deserialize to false/zero, so a partial payload
/// is always well-formed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageFeatures {
    pub has_form: bool,
    pub has_username_input: bool,
    pub has_password_input: bool,
    pub input_count: usize,
    pub submit_button_count: usize,

    pub table_count: usize,
    pub pagination_controls: bool,

    pub error_banners: bool,
    pub empty_state_detected: bool,
    pub content_block_count: usize,

    /// Weak semantic hints derived from the URL, e.g. "login", "auth",
    /// "pagination", "error".
    pub url_patterns: Vec<String>,
}

impl PageFeatures {
    pub fn has_url_pattern(&self, pattern: &str) -> bool {
        self.url_patterns.iter().any(|p| p == pattern)
    }
}

/// Runtime telemetry for one page observation, normalized by the external
/// browser layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeSignals {
    pub status_code: u16,
    pub redirect_detected: bool,

    pub console_errors: Vec<String>,
    pub console_warnings: Vec<String>,

    pub network_errors: Vec<String>,
    pub failed_requests: usize,

    pub layout_overlaps: bool,
    pub long_tasks_ms: Option<u64>,
    pub page_load_time_ms: Option<u64>,
}

impl Default for RuntimeSignals {
    fn default() -> Self {
        Self {
            status_code: 200,
            redirect_detected: false,
            console_errors: Vec::new(),
            console_warnings: Vec::new(),
            network_errors: Vec::new(),
            failed_requests: 0,
            layout_overlaps: false,
            long_tasks_ms: None,
            page_load_time_ms: None,
        }
    }
}

// ============================================================================
// Observation payload — one snapshot handed in by the orchestrator
// ============================================================================

/// One page observation: the URL, raw content (for fingerprinting), and the
/// already-materialized feature/signal vectors.
///
/// `depth` is owned by the external navigation step; the core only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
    pub url: String,

    #[serde(default)]
    pub depth: usize,

    /// Raw page content bytes, hashed verbatim by the loop guard.
    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub features: PageFeatures,

    #[serde(default)]
    pub signals: RuntimeSignals,
}
