//! Per-request artifact reads.

use crate::document::{Document, PriceDocument, StatusDocument};
use crate::error::{ReadError, Result};
use crate::source::ArtifactSource;

/// Reads an artifact and normalizes it into a [`Document`].
///
/// Holds no state besides its source: every call performs one fresh read,
/// so concurrent callers never share or wait on each other.
#[derive(Debug, Clone)]
pub struct ArtifactReader<S: ArtifactSource> {
    source: S,
}

impl<S: ArtifactSource> ArtifactReader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Loads the artifact and coerces it into `D`.
    ///
    /// An absent artifact yields [`Document::empty`]. I/O errors and invalid
    /// JSON are logged here and returned as [`ReadError`]; a valid but
    /// malformed shape is silently normalized.
    #[tracing::instrument(skip(self), fields(artifact = D::ARTIFACT))]
    pub async fn read<D: Document>(&self) -> Result<D> {
        let outcome = self.load::<D>().await;

        let label = match &outcome {
            Ok(Some(_)) => "success",
            Ok(None) => "missing",
            Err(_) => "read_failure",
        };
        metrics::counter!(
            "artifact_reads_total",
            "artifact" => D::ARTIFACT,
            "outcome" => label
        )
        .increment(1);

        match outcome {
            Ok(Some(doc)) => Ok(doc),
            Ok(None) => {
                tracing::debug!("artifact not found, serving empty document");
                Ok(D::empty())
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to read artifact");
                Err(err)
            }
        }
    }

    /// Reads the positional exit status.
    pub async fn read_status(&self) -> Result<StatusDocument> {
        self.read().await
    }

    /// Reads the exit price snapshot.
    pub async fn read_prices(&self) -> Result<PriceDocument> {
        self.read().await
    }

    async fn load<D: Document>(&self) -> Result<Option<D>> {
        let contents = self
            .source
            .load()
            .await
            .map_err(|source| ReadError::Io {
                artifact: D::ARTIFACT,
                location: self.source.describe(),
                source,
            })?;

        let Some(contents) = contents else {
            return Ok(None);
        };

        let root = serde_json::from_str(&contents).map_err(|source| ReadError::Parse {
            artifact: D::ARTIFACT,
            location: self.source.describe(),
            source,
        })?;

        Ok(Some(D::normalize(root)))
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use serde_json::json;

    use super::*;
    use crate::source::InMemoryArtifact;

    fn reader(contents: &str) -> ArtifactReader<InMemoryArtifact> {
        ArtifactReader::new(InMemoryArtifact::with_contents(contents))
    }

    #[tokio::test]
    async fn missing_artifact_is_empty_success() {
        let reader = ArtifactReader::new(InMemoryArtifact::missing());

        let doc = reader.read_status().await.unwrap();
        assert_eq!(doc, StatusDocument::default());
    }

    #[tokio::test]
    async fn well_formed_artifact_round_trips() {
        let doc = reader(r#"{"posicional":[{"id":1}],"ultima_atualizacao":"2024-01-01T00:00:00Z"}"#)
            .read_status()
            .await
            .unwrap();

        assert_eq!(doc.posicional, vec![json!({"id": 1})]);
        assert_eq!(doc.ultima_atualizacao, json!("2024-01-01T00:00:00Z"));
    }

    #[tokio::test]
    async fn worker_floats_survive_the_read() {
        let raw = r#"{"posicional":[{"par":"ADA","entrada":1.1362275116276523e-8,"preco":2.2201838057111728e-13}],"ultima_atualizacao":"2025-12-06 10:00"}"#;
        let doc = reader(raw).read_status().await.unwrap();

        assert_eq!(serde_json::to_string(&doc).unwrap(), raw);
    }

    #[tokio::test]
    async fn bare_array_is_normalized() {
        let doc = reader("[1,2,3]").read_status().await.unwrap();
        assert_eq!(doc, StatusDocument::default());
    }

    #[tokio::test]
    async fn json_null_is_normalized() {
        let doc = reader("null").read_status().await.unwrap();
        assert_eq!(doc, StatusDocument::default());
    }

    #[tokio::test]
    async fn invalid_json_is_a_parse_error() {
        let err = reader("not valid json{{{").read_status().await.unwrap_err();

        assert!(matches!(err, ReadError::Parse { .. }));
        assert_eq!(err.artifact(), "saida_posicional");
    }

    #[tokio::test]
    async fn empty_file_is_a_parse_error() {
        let err = reader("").read_status().await.unwrap_err();
        assert!(matches!(err, ReadError::Parse { .. }));
    }

    #[tokio::test]
    async fn io_failure_is_an_io_error() {
        let reader = ArtifactReader::new(InMemoryArtifact::failing(io::ErrorKind::PermissionDenied));

        let err = reader.read_status().await.unwrap_err();
        match err {
            ReadError::Io {
                artifact,
                location,
                source,
            } => {
                assert_eq!(artifact, "saida_posicional");
                assert_eq!(location, "memory");
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("expected I/O error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn failures_do_not_stick() {
        let reader = ArtifactReader::new(InMemoryArtifact::failing(io::ErrorKind::Other));
        assert!(reader.read_status().await.is_err());
        assert!(reader.read_status().await.is_err());

        let reader = ArtifactReader::new(InMemoryArtifact::missing());
        assert!(reader.read_status().await.is_ok());
    }

    #[tokio::test]
    async fn prices_use_the_same_rules() {
        let doc = reader(r#"{"ultima_atualizacao":"2025-12-06T13:00:00+00:00","precos":{"BTC":97000.5}}"#)
            .read_prices()
            .await
            .unwrap();
        assert_eq!(doc.precos["BTC"], json!(97000.5));

        let err = reader("{").read_prices().await.unwrap_err();
        assert_eq!(err.artifact(), "precos_saida");
    }
}
