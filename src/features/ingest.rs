use std::fmt;
use std::path::{Path, PathBuf};

use crate::features::feature_model::Observation;

// ============================================================================
// Observation loading — JSON files or directories of JSON files
// ============================================================================

#[derive(Debug)]
pub enum ObservationError {
    /// Observation file or directory could not be read
    Io { path: PathBuf, source: std::io::Error },

    /// Observation JSON did not match the payload contract
    Parse { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for ObservationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObservationError::Io { path, source } => {
                write!(f, "Failed to read observations at {}: {}", path.display(), source)
            }
            ObservationError::Parse { path, source } => {
                write!(f, "Malformed observation JSON in {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ObservationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ObservationError::Io { source, .. } => Some(source),
            ObservationError::Parse { source, .. } => Some(source),
        }
    }
}

/// Load a single observation from a JSON file.
pub fn load_observation(path: &Path) -> Result<Observation, ObservationError> {
    let content = std::fs::read_to_string(path).map_err(|source| ObservationError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ObservationError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load an ordered observation sequence.
///
/// Accepts a single JSON file (one observation or an array of them) or a
/// directory of `.json` files replayed in file-name order.
pub fn load_observations(path: &Path) -> Result<Vec<Observation>, ObservationError> {
    let metadata = std::fs::metadata(path).map_err(|source| ObservationError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if metadata.is_dir() {
        let mut files: Vec<PathBuf> = std::fs::read_dir(path)
            .map_err(|source| ObservationError::Io {
                path: path.to_path_buf(),
                source,
            })?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|p| p.extension().map_or(false, |e| e == "json"))
            .collect();

        // Sort by file name for deterministic replay order
        files.sort();

        let mut observations = Vec::new();
        for file in &files {
            observations.extend(load_observation_file(file)?);
        }
        Ok(observations)
    } else {
        load_observation_file(path)
    }
}

/// Parse one file as either a JSON array of observations or a single one.
fn load_observation_file(path: &Path) -> Result<Vec<Observation>, ObservationError> {
    let content = std::fs::read_to_string(path).map_err(|source| ObservationError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let parse = |source| ObservationError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let value: serde_json::Value = serde_json::from_str(&content).map_err(parse)?;
    if value.is_array() {
        serde_json::from_value(value).map_err(parse)
    } else {
        let observation: Observation = serde_json::from_value(value).map_err(parse)?;
        Ok(vec![observation])
    }
}
