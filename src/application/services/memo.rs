//! Note operations: add, list, delete
//!
//! Each operation is one load -> transform -> save cycle against the store.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::store::NoteStore;
use crate::application::ApplicationResult;
use crate::domain::{parse_note_id, Note, Notebook};
use crate::infrastructure::traits::Clock;

/// Service for managing notes.
pub struct MemoService {
    store: NoteStore,
    clock: Arc<dyn Clock>,
}

impl MemoService {
    /// Create a new memo service.
    pub fn new(store: NoteStore, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    /// Append a note stamped with the current time.
    #[instrument(skip(self))]
    pub fn add(&self, text: &str) -> ApplicationResult<Note> {
        let mut notebook = self.store.load()?;
        let note = notebook.append(text, self.clock.now()).clone();
        self.store.save(&notebook)?;
        info!("added note {}", note.id);
        Ok(note)
    }

    /// All notes in id order.
    #[instrument(skip(self))]
    pub fn list(&self) -> ApplicationResult<Notebook> {
        self.store.load()
    }

    /// Delete the note at 1-based position `id` and renumber the rest.
    ///
    /// The id is validated before the store is touched; an unknown id
    /// leaves the file unchanged.
    #[instrument(skip(self))]
    pub fn delete(&self, id: &str) -> ApplicationResult<Note> {
        let id = parse_note_id(id)?;
        let mut notebook = self.store.load()?;
        let removed = notebook.remove(id)?;
        debug!("delete: {} notes remain", notebook.len());
        self.store.save(&notebook)?;
        info!("deleted note {}: {}", id, removed.text);
        Ok(removed)
    }
}
