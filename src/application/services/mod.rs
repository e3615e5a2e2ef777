//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem, Clock)
//! but are themselves concrete structs, not traits.

mod memo;
mod store;

pub use memo::MemoService;
pub use store::{NoteStore, DEFAULT_DATA_FILE};
