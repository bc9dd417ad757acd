use thiserror::Error;

/// Errors that make an artifact unreadable for a single request.
///
/// A missing artifact is not an error; see [`crate::ArtifactSource::load`].
#[derive(Debug, Error)]
pub enum ReadError {
    /// The artifact exists but could not be read.
    #[error("I/O error reading {artifact} at {location}: {source}")]
    Io {
        artifact: &'static str,
        location: String,
        #[source]
        source: std::io::Error,
    },

    /// The artifact was read but is not valid JSON.
    #[error("invalid JSON in {artifact} at {location}: {source}")]
    Parse {
        artifact: &'static str,
        location: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ReadError {
    /// Name of the artifact that failed to load.
    pub fn artifact(&self) -> &'static str {
        match self {
            ReadError::Io { artifact, .. } | ReadError::Parse { artifact, .. } => artifact,
        }
    }
}

/// Result type for artifact reads.
pub type Result<T> = std::result::Result<T, ReadError>;
