use std::io;
use std::path::PathBuf;

use async_trait::async_trait;

/// Read-only access to an artifact owned by an external worker.
///
/// Implementations never write or cache; every call reflects the current
/// state of the underlying storage.
#[async_trait]
pub trait ArtifactSource: Send + Sync {
    /// Returns the artifact's full contents, or `None` if it does not exist.
    async fn load(&self) -> io::Result<Option<String>>;

    /// Where the artifact lives, for diagnostics only.
    fn describe(&self) -> String;
}

/// An artifact stored as a file on the local file system.
#[derive(Debug, Clone)]
pub struct FileArtifact {
    path: PathBuf,
}

impl FileArtifact {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ArtifactSource for FileArtifact {
    async fn load(&self) -> io::Result<Option<String>> {
        if !tokio::fs::try_exists(&self.path).await? {
            return Ok(None);
        }

        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(Some(contents)),
            // Removed by the worker between the two calls.
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory artifact for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryArtifact {
    contents: Option<String>,
    failure: Option<io::ErrorKind>,
}

impl InMemoryArtifact {
    /// An artifact that has not been written yet.
    pub fn missing() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
            failure: None,
        }
    }

    /// An artifact whose every load fails with the given error kind.
    pub fn failing(kind: io::ErrorKind) -> Self {
        Self {
            contents: None,
            failure: Some(kind),
        }
    }
}

#[async_trait]
impl ArtifactSource for InMemoryArtifact {
    async fn load(&self) -> io::Result<Option<String>> {
        match self.failure {
            Some(kind) => Err(io::Error::new(kind, "simulated read failure")),
            None => Ok(self.contents.clone()),
        }
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
