//! JSON note store
//!
//! Reads and writes the whole notebook as a single pretty-printed JSON array.
//! Every save overwrites the file in full; there is no locking.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::Notebook;
use crate::infrastructure::traits::FileSystem;

/// Default backing file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "data.json";

/// Indentation of the stored JSON document.
const INDENT: &[u8] = b"     ";

/// File-backed notebook storage.
pub struct NoteStore {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl NoteStore {
    pub fn new(fs: Arc<dyn FileSystem>, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the notebook.
    ///
    /// A missing file yields an empty notebook. A file holding JSON `null`
    /// is treated the same way.
    pub fn load(&self) -> ApplicationResult<Notebook> {
        let content = match self.fs.read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("load: {} does not exist, starting empty", self.path.display());
                return Ok(Notebook::new());
            }
            Err(e) => return Err(e).with_path_context("read notes", &self.path),
        };

        let notebook: Option<Notebook> =
            serde_json::from_str(&content).map_err(|e| ApplicationError::Parse {
                path: self.path.clone(),
                source: e,
            })?;
        let notebook = notebook.unwrap_or_default();
        debug!(
            "load: {} notes from {}",
            notebook.len(),
            self.path.display()
        );
        Ok(notebook)
    }

    /// Overwrite the backing file with the full notebook.
    pub fn save(&self, notebook: &Notebook) -> ApplicationResult<()> {
        let content = to_json(notebook).with_path_context("serialize notes for", &self.path)?;

        self.fs
            .ensure_parent(&self.path)
            .with_path_context("create parent directory for", &self.path)?;
        self.fs
            .write(&self.path, &content)
            .with_path_context("write notes", &self.path)?;
        debug!("save: {} notes to {}", notebook.len(), self.path.display());
        Ok(())
    }
}

/// Serialize with a 5-space indent and no trailing newline.
fn to_json(notebook: &Notebook) -> io::Result<String> {
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(Vec::new(), formatter);
    notebook.serialize(&mut ser)?;
    String::from_utf8(ser.into_inner()).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
