//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent business logic violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid note id: {0:?} (expected a positive integer)")]
    InvalidNoteId(String),

    #[error("note {id} not found ({count} notes stored)")]
    NoteNotFound { id: usize, count: usize },
}
