//! In-memory storage.

use super::{BoxFuture, Storage, StorageError, StorageResult};
use crate::document::DesignDocument;
use std::collections::HashMap;
use std::sync::RwLock;

/// Keeps designs in a map. Used by tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStorage {
    designs: RwLock<HashMap<String, DesignDocument>>,
}

fn lock_error(e: impl std::fmt::Display) -> StorageError {
    StorageError::Other(format!("Lock error: {e}"))
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.designs.read().map_or(0, |designs| designs.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Storage for MemoryStorage {
    fn save(&self, design_id: &str, document: &DesignDocument) -> BoxFuture<'_, StorageResult<()>> {
        let design_id = design_id.to_string();
        let document = document.clone();
        Box::pin(async move {
            self.designs
                .write()
                .map_err(lock_error)?
                .insert(design_id, document);
            Ok(())
        })
    }

    fn load(&self, design_id: &str) -> BoxFuture<'_, StorageResult<DesignDocument>> {
        let design_id = design_id.to_string();
        Box::pin(async move {
            let designs = self.designs.read().map_err(lock_error)?;
            designs
                .get(&design_id)
                .cloned()
                .ok_or(StorageError::NotFound(design_id))
        })
    }

    fn delete(&self, design_id: &str) -> BoxFuture<'_, StorageResult<()>> {
        let design_id = design_id.to_string();
        Box::pin(async move {
            self.designs.write().map_err(lock_error)?.remove(&design_id);
            Ok(())
        })
    }

    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>> {
        Box::pin(async move {
            let designs = self.designs.read().map_err(lock_error)?;
            let mut ids: Vec<String> = designs.keys().cloned().collect();
            ids.sort();
            Ok(ids)
        })
    }

    fn exists(&self, design_id: &str) -> BoxFuture<'_, StorageResult<bool>> {
        let design_id = design_id.to_string();
        Box::pin(async move {
            let designs = self.designs.read().map_err(lock_error)?;
            Ok(designs.contains_key(&design_id))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::create_rect;
    use crate::storage::block_on;

    fn document() -> DesignDocument {
        DesignDocument {
            objects: vec![create_rect().into()],
            ..DesignDocument::default()
        }
    }

    #[test]
    fn test_save_and_load() {
        let storage = MemoryStorage::new();
        let doc = document();

        block_on(storage.save("d1", &doc)).unwrap();
        let loaded = block_on(storage.load("d1")).unwrap();
        assert_eq!(loaded, doc);
    }

    #[test]
    fn test_not_found() {
        let storage = MemoryStorage::new();
        let result = block_on(storage.load("nonexistent"));
        assert!(matches!(result, Err(StorageError::NotFound(id)) if id == "nonexistent"));
    }

    #[test]
    fn test_exists_and_delete() {
        let storage = MemoryStorage::new();
        assert!(!block_on(storage.exists("d1")).unwrap());
        block_on(storage.save("d1", &document())).unwrap();
        assert!(block_on(storage.exists("d1")).unwrap());
        block_on(storage.delete("d1")).unwrap();
        assert!(!block_on(storage.exists("d1")).unwrap());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_list_is_sorted() {
        let storage = MemoryStorage::new();
        block_on(storage.save("b", &document())).unwrap();
        block_on(storage.save("a", &document())).unwrap();
        assert_eq!(block_on(storage.list()).unwrap(), vec!["a", "b"]);
    }
}
