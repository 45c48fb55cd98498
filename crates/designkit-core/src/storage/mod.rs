//! Persistence collaborator interface.
//!
//! The editor core performs no I/O itself. A [`Storage`] backend persists
//! documents and the [`AutoSaveScheduler`] decides when to call it.

mod autosave;
mod memory;

pub use autosave::{AutoSaveConfig, AutoSaveScheduler, DEFAULT_AUTOSAVE_DELAY_MS};
pub use memory::MemoryStorage;

use crate::document::DesignDocument;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Design not found: {0}")]
    NotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Boxed future for async operations (compatible with WASM).
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// A design persistence backend.
///
/// On native platforms implementations must be Send + Sync; on WASM the
/// bounds are relaxed since it's single-threaded.
#[cfg(not(target_arch = "wasm32"))]
pub trait Storage: Send + Sync {
    fn save(&self, design_id: &str, document: &DesignDocument) -> BoxFuture<'_, StorageResult<()>>;

    fn load(&self, design_id: &str) -> BoxFuture<'_, StorageResult<DesignDocument>>;

    fn delete(&self, design_id: &str) -> BoxFuture<'_, StorageResult<()>>;

    /// IDs of all stored designs.
    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>>;

    fn exists(&self, design_id: &str) -> BoxFuture<'_, StorageResult<bool>>;
}

/// A design persistence backend (WASM version without Send + Sync).
#[cfg(target_arch = "wasm32")]
pub trait Storage {
    fn save(&self, design_id: &str, document: &DesignDocument) -> BoxFuture<'_, StorageResult<()>>;

    fn load(&self, design_id: &str) -> BoxFuture<'_, StorageResult<DesignDocument>>;

    fn delete(&self, design_id: &str) -> BoxFuture<'_, StorageResult<()>>;

    /// IDs of all stored designs.
    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>>;

    fn exists(&self, design_id: &str) -> BoxFuture<'_, StorageResult<bool>>;
}

/// Minimal executor for driving storage futures in tests.
#[cfg(test)]
pub(crate) fn block_on<F: Future>(f: F) -> F::Output {
    use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

    fn dummy_raw_waker() -> RawWaker {
        fn no_op(_: *const ()) {}
        fn clone(_: *const ()) -> RawWaker {
            dummy_raw_waker()
        }
        static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, no_op, no_op, no_op);
        RawWaker::new(std::ptr::null(), &VTABLE)
    }

    let waker = unsafe { Waker::from_raw(dummy_raw_waker()) };
    let mut cx = Context::from_waker(&waker);
    let mut f = std::pin::pin!(f);

    loop {
        if let Poll::Ready(result) = f.as_mut().poll(&mut cx) {
            return result;
        }
    }
}
