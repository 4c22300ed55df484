use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::NamedTempFile;
use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::analysis::{AnalysisPayload, AnalysisRecord};
use crate::store::{newest_first, AnalysisStore, StoreError};

/// Keeps every record in one JSON array on disk.
///
/// Each save rewrites the whole file through a temp file in the same
/// directory followed by a rename, so readers never see a half-written array.
/// The mutex serializes saves; it is held across the write.
pub struct JsonFileStore {
    path: PathBuf,
    records: Mutex<Vec<AnalysisRecord>>,
}

impl JsonFileStore {
    /// Loads `path` if it exists. A missing or blank file is an empty store.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let records: Vec<AnalysisRecord> = match tokio::fs::read_to_string(&path).await {
            Ok(raw) if raw.trim().is_empty() => Vec::new(),
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        info!(
            "Analysis store opened at {} ({} records)",
            path.display(),
            records.len()
        );

        Ok(Self {
            path,
            records: Mutex::new(records),
        })
    }
}

#[async_trait]
impl AnalysisStore for JsonFileStore {
    async fn save(&self, payload: AnalysisPayload) -> Result<AnalysisRecord, StoreError> {
        let record = AnalysisRecord::new(payload);
        let mut records = self.records.lock().await;
        records.push(record.clone());

        let written = match serde_json::to_vec_pretty(&*records) {
            Ok(bytes) => {
                let path = self.path.clone();
                tokio::task::spawn_blocking(move || write_atomically(&path, &bytes))
                    .await
                    .map_err(|e| StoreError::Io(std::io::Error::other(e)))
                    .and_then(|res| res)
            }
            Err(e) => Err(e.into()),
        };

        if let Err(e) = written {
            records.pop();
            warn!(record_id = %record.id, "Failed to persist analysis: {e}");
            return Err(e);
        }

        Ok(record)
    }

    async fn get(&self, id: Uuid) -> Result<Option<AnalysisRecord>, StoreError> {
        Ok(self.records.lock().await.iter().find(|r| r.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<AnalysisRecord>, StoreError> {
        Ok(newest_first(&self.records.lock().await))
    }
}

fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
