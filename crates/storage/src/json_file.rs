use async_trait::async_trait;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use prep_core::model::User;

use crate::store::{SessionStore, StoreError};

/// File-backed session store holding one pretty-printed JSON user record.
///
/// The desktop analogue of browser local storage. Writes go through a
/// sibling temp file and a rename so a crash mid-write never leaves a
/// truncated record behind. A record that fails to parse is treated the
/// same way a bad local-storage entry was: cleared and reported as absent.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map_or_else(|| "session".into(), |n| n.to_os_string());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl SessionStore for JsonFileStore {
    async fn load(&self) -> Result<Option<User>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(_) => {
                // Unparseable records are dropped, not surfaced: the next
                // launch starts logged out instead of permanently failing.
                fs::remove_file(&self.path)?;
                Ok(None)
            }
        }
    }

    async fn save(&self, user: &User) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let payload = serde_json::to_vec_pretty(user)
            .map_err(|err| StoreError::Serialization(err.to_string()))?;

        let temp = self.temp_path();
        {
            let mut file = fs::File::create(&temp)?;
            file.write_all(&payload)?;
            file.sync_all()?;
        }
        fs::rename(&temp, &self.path)?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
