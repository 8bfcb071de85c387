use std::path::{Path, PathBuf};

use crate::error::{NotebookError, NotebookResult};
use crate::persist::text_format::LoadOptions;
use crate::store::NotebookStore;

pub const DEFAULT_DATA_FILE: &str = "data.txt";

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub data_path: PathBuf,
    pub load_options: LoadOptions,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            load_options: LoadOptions::default(),
        }
    }
}

/// The running notebook: loaded when the session starts, saved when it
/// shuts down.
#[derive(Debug)]
pub struct Session {
    pub store: NotebookStore,
    config: SessionConfig,
}

impl Session {
    /// Loads the data file. A file that cannot be read gives an empty
    /// notebook; only a malformed record (strict mode) is an error, so that
    /// shutdown never overwrites a file that failed to parse.
    pub fn start(config: SessionConfig) -> NotebookResult<Self> {
        let mut store = NotebookStore::new();
        match store.load_with(&config.data_path, config.load_options) {
            Ok(_) => {}
            Err(NotebookError::IoUnavailable { path, source }) => {
                log::warn!(
                    "Could not read {} ({}), starting with an empty notebook",
                    path.display(),
                    source
                );
            }
            Err(e) => return Err(e),
        }
        Ok(Self { store, config })
    }

    pub fn data_path(&self) -> &Path {
        &self.config.data_path
    }

    pub fn save(&self) -> NotebookResult<()> {
        self.store.save(&self.config.data_path)
    }

    /// Saves and ends the session.
    pub fn shutdown(self) -> NotebookResult<()> {
        self.save()?;
        log::info!("Notebook saved to {}", self.config.data_path.display());
        Ok(())
    }
}
