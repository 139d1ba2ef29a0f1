//! Error types for the GCMC library

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GcmcError {
    #[error(
        "'{0}' is not a supported chemical species. Allowed values for Lennard-Jones are: \
         Ar, Ne, He, Kr, Xe. Allowed values for Stockmeyer are: Water"
    )]
    UnknownSpecies(String),

    #[error("Failed to access output file '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl GcmcError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GcmcError::Io {
            path: path.into(),
            source,
        }
    }
}
