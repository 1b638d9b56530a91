use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Mutex;

use crate::trace::trace::TraceEvent;

/// Append-only JSONL sink for decision trace events.
///
/// Trace IO is best-effort: a sink that cannot be opened or written degrades
/// to a warning on stderr, never into the crawl itself.
pub struct TraceLogger {
    path: String,
    sink: Option<Mutex<std::fs::File>>,
}

impl TraceLogger {
    pub fn new(path: &str) -> Self {
        let sink = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Some(Mutex::new(file)),
            Err(e) => {
                eprintln!("Warning: could not open trace file '{}': {}", path, e);
                None
            }
        };

        Self {
            path: path.to_string(),
            sink,
        }
    }

    /// A logger that drops every event.
    pub fn disabled() -> Self {
        Self {
            path: String::new(),
            sink: None,
        }
    }

    pub fn log(&self, event: &TraceEvent) {
        if let Err(e) = self.append(event) {
            eprintln!("Warning: failed to write trace event to '{}': {}", self.path, e);
        }
    }

    fn append(&self, event: &TraceEvent) -> std::io::Result<()> {
        let sink = match &self.sink {
            Some(sink) => sink,
            None => return Ok(()), // tracing disabled
        };

        let line = serde_json::to_string(event)?;
        let mut file = sink
            .lock()
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        writeln!(file, "{}", line)?;
        Ok(())
    }
}
