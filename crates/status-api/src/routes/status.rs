//! Artifact read endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use status_reader::{ArtifactReader, ArtifactSource, PriceDocument, StatusDocument};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
///
/// Holds only the readers; nothing read from disk is kept between requests.
pub struct AppState<S: ArtifactSource> {
    pub status: ArtifactReader<S>,
    pub prices: ArtifactReader<S>,
}

impl<S: ArtifactSource> AppState<S> {
    pub fn new(status: S, prices: S) -> Self {
        Self {
            status: ArtifactReader::new(status),
            prices: ArtifactReader::new(prices),
        }
    }
}

/// GET /api/status — current positional exit status.
#[tracing::instrument(skip(state))]
pub async fn get<S: ArtifactSource + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<StatusDocument>, ApiError> {
    let doc = state.status.read_status().await?;
    Ok(Json(doc))
}

/// GET /api/precos — latest exit price snapshot.
#[tracing::instrument(skip(state))]
pub async fn prices<S: ArtifactSource + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<PriceDocument>, ApiError> {
    let doc = state.prices.read_prices().await?;
    Ok(Json(doc))
}
