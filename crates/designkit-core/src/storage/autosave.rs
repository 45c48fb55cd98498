//! Debounced auto-save.
//!
//! The scheduler watches the store's revision. Every new revision pushes the
//! pending save back by the configured delay; once the delay passes with no
//! further edits, [`AutoSaveScheduler::poll`] persists the document.

use crate::storage::{Storage, StorageResult};
use crate::store::EditorStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant, SystemTime};

#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant, SystemTime};

/// Default debounce delay in milliseconds.
pub const DEFAULT_AUTOSAVE_DELAY_MS: u64 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AutoSaveConfig {
    /// Quiet period after the last edit before saving.
    pub delay_ms: u64,
}

impl Default for AutoSaveConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_AUTOSAVE_DELAY_MS,
        }
    }
}

impl AutoSaveConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Schedules saves for one editor.
pub struct AutoSaveScheduler<S: Storage> {
    storage: Arc<S>,
    config: AutoSaveConfig,
    /// When the pending save fires, if one is scheduled.
    due_at: Option<Instant>,
    /// Revision last seen by [`notify`](Self::notify).
    seen_revision: Option<u64>,
}

impl<S: Storage> AutoSaveScheduler<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self::with_config(storage, AutoSaveConfig::default())
    }

    pub fn with_config(storage: Arc<S>, config: AutoSaveConfig) -> Self {
        Self {
            storage,
            config,
            due_at: None,
            seen_revision: None,
        }
    }

    pub fn config(&self) -> &AutoSaveConfig {
        &self.config
    }

    pub fn storage(&self) -> &Arc<S> {
        &self.storage
    }

    pub fn is_pending(&self) -> bool {
        self.due_at.is_some()
    }

    pub fn due_at(&self) -> Option<Instant> {
        self.due_at
    }

    /// Observe the store after an event. A dirty store at a new revision
    /// (re)schedules the save, replacing any pending one. Returns whether a
    /// save was scheduled.
    pub fn notify(&mut self, store: &EditorStore, now: Instant) -> bool {
        let revision = store.revision();
        if self.seen_revision == Some(revision) {
            return false;
        }
        self.seen_revision = Some(revision);
        if !store.is_dirty() {
            return false;
        }
        self.due_at = Some(now + self.config.delay());
        true
    }

    /// Drop any pending save (e.g. when the editor unmounts).
    pub fn cancel(&mut self) {
        if self.due_at.take().is_some() {
            log::debug!("Pending auto-save cancelled");
        }
    }

    /// Save if the pending schedule is due. Returns whether a save ran.
    ///
    /// On failure the store stays dirty and nothing is rescheduled; the next
    /// edit schedules a retry.
    pub async fn poll(&mut self, now: Instant, store: &mut EditorStore) -> StorageResult<bool> {
        match self.due_at {
            Some(due) if now >= due => {}
            _ => return Ok(false),
        }
        self.due_at = None;
        self.save_now(store).await
    }

    /// Save immediately, ignoring the schedule. Does nothing for a clean
    /// store or one with no design ID.
    pub async fn save_now(&mut self, store: &mut EditorStore) -> StorageResult<bool> {
        self.due_at = None;
        if !store.is_dirty() {
            return Ok(false);
        }
        let Some(design_id) = store.design_id().map(str::to_string) else {
            log::warn!("Skipping auto-save: design has no ID");
            return Ok(false);
        };

        let revision = store.revision();
        let document = store.get_document();
        store.set_saving(true);
        log::info!("Auto-saving design {design_id} at revision {revision}");

        match self.storage.save(&design_id, &document).await {
            Ok(()) => {
                store.mark_saved(SystemTime::now());
                Ok(true)
            }
            Err(e) => {
                log::warn!("Auto-save of design {design_id} failed: {e}");
                store.set_saving(false);
                Err(e)
            }
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::document::DesignDocument;
    use crate::factory::create_rect;
    use crate::storage::{BoxFuture, MemoryStorage, StorageError, block_on};

    struct OfflineStorage;

    impl Storage for OfflineStorage {
        fn save(&self, _: &str, _: &DesignDocument) -> BoxFuture<'_, StorageResult<()>> {
            Box::pin(async { Err(StorageError::Network("offline".to_string())) })
        }

        fn load(&self, id: &str) -> BoxFuture<'_, StorageResult<DesignDocument>> {
            let id = id.to_string();
            Box::pin(async move { Err(StorageError::NotFound(id)) })
        }

        fn delete(&self, _: &str) -> BoxFuture<'_, StorageResult<()>> {
            Box::pin(async { Ok(()) })
        }

        fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>> {
            Box::pin(async { Ok(Vec::new()) })
        }

        fn exists(&self, _: &str) -> BoxFuture<'_, StorageResult<bool>> {
            Box::pin(async { Ok(false) })
        }
    }

    fn edited_store() -> EditorStore {
        let mut store = EditorStore::new();
        store.load_document("d1", "Autosave", DesignDocument::default());
        store.add_object(create_rect());
        store
    }

    #[test]
    fn test_clean_store_schedules_nothing() {
        let mut scheduler = AutoSaveScheduler::new(Arc::new(MemoryStorage::new()));
        let store = EditorStore::new();
        assert!(!scheduler.notify(&store, Instant::now()));
        assert!(!scheduler.is_pending());
    }

    #[test]
    fn test_edits_push_the_deadline_back() {
        let mut scheduler = AutoSaveScheduler::new(Arc::new(MemoryStorage::new()));
        let mut store = edited_store();
        let t0 = Instant::now();

        assert!(scheduler.notify(&store, t0));
        assert!(!scheduler.notify(&store, t0 + Duration::from_millis(500)));
        assert_eq!(scheduler.due_at(), Some(t0 + Duration::from_millis(2000)));

        store.add_object(create_rect());
        let t1 = t0 + Duration::from_millis(1500);
        assert!(scheduler.notify(&store, t1));
        assert_eq!(scheduler.due_at(), Some(t1 + Duration::from_millis(2000)));
    }

    #[test]
    fn test_poll_saves_when_due() {
        let storage = Arc::new(MemoryStorage::new());
        let mut scheduler = AutoSaveScheduler::new(storage.clone());
        let mut store = edited_store();
        let t0 = Instant::now();
        scheduler.notify(&store, t0);

        let early = block_on(scheduler.poll(t0 + Duration::from_millis(1999), &mut store));
        assert!(!early.unwrap());
        assert!(store.is_dirty());

        let saved = block_on(scheduler.poll(t0 + Duration::from_millis(2000), &mut store));
        assert!(saved.unwrap());
        assert!(!store.is_dirty());
        assert!(!store.is_saving());
        assert!(store.last_saved_at().is_some());
        assert!(!scheduler.is_pending());
        assert_eq!(block_on(storage.load("d1")).unwrap(), store.get_document());
    }

    #[test]
    fn test_failure_leaves_store_dirty() {
        let mut scheduler = AutoSaveScheduler::new(Arc::new(OfflineStorage));
        let mut store = edited_store();
        let t0 = Instant::now();
        scheduler.notify(&store, t0);

        let result = block_on(scheduler.poll(t0 + Duration::from_secs(5), &mut store));
        assert!(matches!(result, Err(StorageError::Network(_))));
        assert!(store.is_dirty());
        assert!(!store.is_saving());
        assert!(store.last_saved_at().is_none());
    }

    #[test]
    fn test_failed_save_retries_on_next_edit() {
        let mut scheduler = AutoSaveScheduler::new(Arc::new(OfflineStorage));
        let mut store = edited_store();
        let t0 = Instant::now();
        scheduler.notify(&store, t0);
        assert!(block_on(scheduler.poll(t0 + Duration::from_secs(5), &mut store)).is_err());

        // Same revision: nothing new to schedule.
        let t1 = t0 + Duration::from_secs(6);
        assert!(!scheduler.notify(&store, t1));
        assert!(!scheduler.is_pending());
        assert!(!block_on(scheduler.poll(t1 + Duration::from_secs(5), &mut store)).unwrap());

        store.add_object(create_rect());
        assert!(scheduler.notify(&store, t1));
        assert_eq!(scheduler.due_at(), Some(t1 + Duration::from_millis(2000)));
        assert!(store.is_dirty());
    }

    #[test]
    fn test_cancel() {
        let mut scheduler = AutoSaveScheduler::new(Arc::new(MemoryStorage::new()));
        let mut store = edited_store();
        let t0 = Instant::now();
        scheduler.notify(&store, t0);
        scheduler.cancel();

        let ran = block_on(scheduler.poll(t0 + Duration::from_secs(5), &mut store));
        assert!(!ran.unwrap());
        assert!(store.is_dirty());
    }

    #[test]
    fn test_unsaved_design_is_skipped() {
        let mut scheduler = AutoSaveScheduler::new(Arc::new(MemoryStorage::new()));
        let mut store = EditorStore::new();
        store.add_object(create_rect());
        assert!(!block_on(scheduler.save_now(&mut store)).unwrap());
        assert!(store.is_dirty());
    }

    #[test]
    fn test_config_from_json() {
        let config: AutoSaveConfig = serde_json::from_str(r#"{"delayMs": 500}"#).unwrap();
        assert_eq!(config.delay(), Duration::from_millis(500));
        let config: AutoSaveConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.delay_ms, DEFAULT_AUTOSAVE_DELAY_MS);
    }
}
