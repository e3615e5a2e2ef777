//! Domain entities: core data structures

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Timestamp layout used for `Note::time`, e.g. `2024-03-01 18:04:05`.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single stored note.
///
/// Field names are the on-disk JSON keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// 1-based position in the notebook
    pub id: usize,
    /// Free-form note text
    pub text: String,
    /// Creation time, local, formatted with [`TIME_FORMAT`]
    pub time: String,
}

impl Note {
    pub fn new(id: usize, text: impl Into<String>, created: NaiveDateTime) -> Self {
        Self {
            id,
            text: text.into(),
            time: created.format(TIME_FORMAT).to_string(),
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}  {}", self.id, self.text, self.time)
    }
}

/// Ordered collection of notes.
///
/// Invariant: ids are exactly `1..=len()` in storage order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Notebook {
    notes: Vec<Note>,
}

impl Notebook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Append a note with id `len() + 1`.
    pub fn append(&mut self, text: impl Into<String>, created: NaiveDateTime) -> &Note {
        let note = Note::new(self.notes.len() + 1, text, created);
        self.notes.push(note);
        &self.notes[self.notes.len() - 1]
    }

    /// Remove the note at 1-based position `id` and renumber the rest.
    pub fn remove(&mut self, id: usize) -> Result<Note, DomainError> {
        if id == 0 || id > self.notes.len() {
            return Err(DomainError::NoteNotFound {
                id,
                count: self.notes.len(),
            });
        }
        let removed = self.notes.remove(id - 1);
        self.renumber();
        Ok(removed)
    }

    fn renumber(&mut self) {
        for (i, note) in self.notes.iter_mut().enumerate() {
            note.id = i + 1;
        }
    }
}

impl IntoIterator for Notebook {
    type Item = Note;
    type IntoIter = std::vec::IntoIter<Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.into_iter()
    }
}

/// Parse a user-supplied note id.
///
/// Accepts positive decimal integers only; `0`, negatives and
/// non-numeric input are rejected.
pub fn parse_note_id(input: &str) -> Result<usize, DomainError> {
    match input.parse::<usize>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(DomainError::InvalidNoteId(input.to_string())),
    }
}
