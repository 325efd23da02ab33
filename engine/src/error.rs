use std::path::PathBuf;

use thiserror::Error;

/// Typed error variants for the linediff engine.
#[derive(Debug, Error)]
pub enum DiffError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DiffError {
    /// Return a machine-readable error code string for this error variant.
    pub fn code(&self) -> &str {
        match self {
            Self::Read { .. } => "READ_ERROR",
        }
    }
}
