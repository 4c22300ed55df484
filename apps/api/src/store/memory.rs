use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::analysis::{AnalysisPayload, AnalysisRecord};
use crate::store::{newest_first, AnalysisStore, StoreError};

/// Non-durable store backing router and handler tests.
#[derive(Default)]
pub struct InMemoryStore {
    records: RwLock<Vec<AnalysisRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AnalysisStore for InMemoryStore {
    async fn save(&self, payload: AnalysisPayload) -> Result<AnalysisRecord, StoreError> {
        let record = AnalysisRecord::new(payload);
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn get(&self, id: Uuid) -> Result<Option<AnalysisRecord>, StoreError> {
        Ok(self.records.read().await.iter().find(|r| r.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<AnalysisRecord>, StoreError> {
        Ok(newest_first(&self.records.read().await))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::resume_payload;

    #[tokio::test]
    async fn test_save_then_get() {
        let store = InMemoryStore::new();
        let saved = store.save(resume_payload("cv.pdf")).await.unwrap();
        let fetched = store.get(saved.id).await.unwrap();
        assert_eq!(fetched, Some(saved));
        assert!(store.get(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_concurrent_saves_are_all_kept() {
        let store = std::sync::Arc::new(InMemoryStore::new());
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.save(resume_payload(&format!("{i}.pdf"))).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }
        assert_eq!(store.list().await.unwrap().len(), 16);
    }
}
