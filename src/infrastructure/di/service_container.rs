//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::{MemoService, NoteStore};
use crate::config::Settings;
use crate::infrastructure::traits::{Clock, FileSystem, RealFileSystem, SystemClock};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Clock abstraction
    pub clock: Arc<dyn Clock>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem), Arc::new(SystemClock))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>, clock: Arc<dyn Clock>) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            fs,
            clock,
        }
    }

    /// Note store bound to the configured data file.
    pub fn note_store(&self) -> NoteStore {
        NoteStore::new(self.fs.clone(), self.settings.data_file.clone())
    }

    /// Memo service over the configured store.
    pub fn memo_service(&self) -> MemoService {
        MemoService::new(self.note_store(), self.clock.clone())
    }
}
