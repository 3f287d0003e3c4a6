use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::ports::{ReservationStorage, STORAGE_KEY};
use crate::utils::error::Result;

/// In-process backend keyed like a browser's local storage. Clones share
/// the same underlying map, so one instance can back a store while a test
/// (or a second store) inspects it.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReservationStorage for MemoryStorage {
    async fn load(&self) -> Result<Option<Vec<u8>>> {
        let entries = self.entries.lock().await;
        Ok(entries.get(STORAGE_KEY).cloned())
    }

    async fn save(&self, data: &[u8]) -> Result<()> {
        let mut entries = self.entries.lock().await;
        entries.insert(STORAGE_KEY.to_string(), data.to_vec());
        Ok(())
    }
}
