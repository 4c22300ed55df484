pub mod json_file;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::analysis::{AnalysisPayload, AnalysisRecord};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt analyses file: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Storage(e.to_string())
    }
}

/// Append-only record store. Records are never updated or deleted.
///
/// Implementations assign the id and timestamp in `save`, and must keep two
/// concurrent saves from losing each other's records.
#[async_trait]
pub trait AnalysisStore: Send + Sync {
    async fn save(&self, payload: AnalysisPayload) -> Result<AnalysisRecord, StoreError>;

    async fn get(&self, id: Uuid) -> Result<Option<AnalysisRecord>, StoreError>;

    /// Newest first.
    async fn list(&self) -> Result<Vec<AnalysisRecord>, StoreError>;
}

/// Records are kept in insertion order; the stable sort keeps later inserts
/// ahead when two timestamps tie.
pub(crate) fn newest_first(records: &[AnalysisRecord]) -> Vec<AnalysisRecord> {
    let mut out: Vec<AnalysisRecord> = records.iter().rev().cloned().collect();
    out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    out
}
