use std::fs;
use std::path::PathBuf;

use crate::domain::ports::{ReservationStorage, STORAGE_KEY};
use crate::utils::error::Result;

/// Filesystem backend: the collection lives in `<base>/reservations.json`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn file_path(&self) -> PathBuf {
        self.base_path.join(format!("{}.json", STORAGE_KEY))
    }
}

impl ReservationStorage for LocalStorage {
    async fn load(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(self.file_path()) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, data: &[u8]) -> Result<()> {
        let full_path = self.file_path();

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}
