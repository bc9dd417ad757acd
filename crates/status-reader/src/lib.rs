//! Read-only access to the JSON artifacts published by the positional exit
//! workers.
//!
//! Every read goes back to the source: absent artifacts become empty
//! documents, malformed shapes are normalized, and only I/O or JSON syntax
//! errors surface as [`ReadError`].

pub mod document;
pub mod error;
pub mod reader;
pub mod source;

pub use document::{Document, LAST_UPDATE_FIELD, PriceDocument, StatusDocument};
pub use error::{ReadError, Result};
pub use reader::ArtifactReader;
pub use source::{ArtifactSource, FileArtifact, InMemoryArtifact};
