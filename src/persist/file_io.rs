use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{NotebookError, NotebookResult};
use crate::store::NotebookStore;

use super::text_format::{self, LoadOptions};

/// Writes the notebook next to `path` and renames it into place, so a
/// failed save never truncates an existing data file.
pub fn save(store: &NotebookStore, path: &Path) -> NotebookResult<()> {
    let text = text_format::render(store);
    let tmp = temp_path(path);

    if let Err(e) = fs::write(&tmp, text.as_bytes()) {
        let _ = fs::remove_file(&tmp);
        return Err(NotebookError::io_unavailable(path, e));
    }
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(NotebookError::io_unavailable(path, e));
    }

    log::debug!(
        "Saved {} contacts and {} reminders to {}",
        store.contacts().len(),
        store.reminders().len(),
        path.display()
    );
    Ok(())
}

/// Reads and parses the data file. Bytes that are not valid UTF-8 are
/// replaced rather than rejected.
pub fn load(path: &Path, options: LoadOptions) -> NotebookResult<NotebookStore> {
    let bytes = fs::read(path).map_err(|e| NotebookError::io_unavailable(path, e))?;
    let text = String::from_utf8_lossy(&bytes);
    text_format::parse(&text, options)
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("notebook"));
    name.push(".tmp");
    path.with_file_name(name)
}
