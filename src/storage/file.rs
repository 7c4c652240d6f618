//! File-backed key-value store.
//!
//! All keys live in a single JSON object (`storage.json`) inside the data
//! directory. Every `set` rewrites the whole document through a temporary file
//! in the same directory and renames it into place. An exclusive advisory lock
//! on `.care.lock` is held for as long as the store is open.

use super::KeyValueStore;
use crate::constants::{LOCK_FILE_NAME, STORAGE_FILE_NAME};
use crate::errors::{AppError, AppResult, LockError, StorageError};
use fs2::FileExt;
use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Ensures the data directory exists, creating it if necessary.
///
/// # Errors
///
/// Returns:
/// - `AppError::Journal` if the provided path is not an absolute path
/// - `AppError::Io` if the directory creation fails
pub fn ensure_data_directory_exists(data_dir: &Path) -> AppResult<()> {
    if !data_dir.is_absolute() {
        return Err(AppError::Journal(format!(
            "Data directory path must be absolute: {}",
            data_dir.display()
        )));
    }

    if !data_dir.exists() {
        fs::create_dir_all(data_dir).map_err(|e| {
            AppError::Io(io::Error::new(
                e.kind(),
                format!("Failed to create data directory: {}", e),
            ))
        })?;

        #[cfg(unix)]
        {
            use crate::constants::DEFAULT_DIR_PERMISSIONS;

            let permissions = fs::Permissions::from_mode(DEFAULT_DIR_PERMISSIONS);
            fs::set_permissions(data_dir, permissions).map_err(|e| {
                AppError::Io(io::Error::new(
                    e.kind(),
                    format!("Failed to set secure permissions on data directory: {}", e),
                ))
            })?;
        }
        info!("Created data directory");
    }
    Ok(())
}

/// Key-value store persisted as a JSON object on disk.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
    path: PathBuf,
    values: BTreeMap<String, String>,
    // Released when the file handle is dropped.
    _lock: File,
}

impl FileStore {
    /// Opens (or creates) the store inside `data_dir`.
    ///
    /// A storage file that cannot be parsed is logged and treated as empty;
    /// the next `set` replaces it.
    ///
    /// # Errors
    ///
    /// - `AppError::Lock(LockError::FileBusy)` if another process has the store open
    /// - `AppError::Io` if the directory or storage file cannot be read
    pub fn open(data_dir: &Path) -> AppResult<Self> {
        ensure_data_directory_exists(data_dir)?;

        let lock = acquire_lock(&data_dir.join(LOCK_FILE_NAME))?;
        let path = data_dir.join(STORAGE_FILE_NAME);

        let values = match read_values(&path) {
            Ok(values) => values,
            Err(AppError::Storage(error @ StorageError::Corrupt { .. })) => {
                warn!(error = %error, "Ignoring unreadable storage file");
                BTreeMap::new()
            }
            Err(error) => return Err(error),
        };
        debug!(keys = values.len(), "Opened storage file");

        Ok(FileStore {
            dir: data_dir.to_path_buf(),
            path,
            values,
            _lock: lock,
        })
    }

    /// Path of the JSON document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_values(&self) -> AppResult<()> {
        let mut temp = NamedTempFile::new_in(&self.dir)?;

        serde_json::to_writer_pretty(&mut temp, &self.values).map_err(StorageError::Serialize)?;
        temp.flush()?;
        temp.as_file().sync_all()?;

        #[cfg(unix)]
        {
            use crate::constants::DEFAULT_FILE_PERMISSIONS;

            let permissions = fs::Permissions::from_mode(DEFAULT_FILE_PERMISSIONS);
            temp.as_file().set_permissions(permissions)?;
        }

        temp.persist(&self.path).map_err(StorageError::Persist)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> AppResult<()> {
        let previous = self.values.insert(key.to_string(), value);

        if let Err(error) = self.write_values() {
            // Keep memory and disk in agreement when the write fails.
            match previous {
                Some(previous) => self.values.insert(key.to_string(), previous),
                None => self.values.remove(key),
            };
            return Err(error);
        }

        debug!(key, "Stored value");
        Ok(())
    }
}

fn acquire_lock(path: &Path) -> AppResult<File> {
    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .map_err(|source| LockError::AcquisitionFailed {
            path: path.to_path_buf(),
            source,
        })?;

    if let Err(source) = file.try_lock_exclusive() {
        let contended = source.kind() == io::ErrorKind::WouldBlock
            || source.raw_os_error() == fs2::lock_contended_error().raw_os_error();

        let error = if contended {
            LockError::FileBusy {
                path: path.to_path_buf(),
            }
        } else {
            LockError::AcquisitionFailed {
                path: path.to_path_buf(),
                source,
            }
        };
        return Err(error.into());
    }

    Ok(file)
}

fn read_values(path: &Path) -> AppResult<BTreeMap<String, String>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
        Err(e) => return Err(e.into()),
    };

    if content.trim().is_empty() {
        return Ok(BTreeMap::new());
    }

    serde_json::from_str(&content).map_err(|source| {
        StorageError::Corrupt {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_ensure_data_directory_creates_missing_dir() {
        let temp_dir = tempdir().unwrap();
        let dir_path = temp_dir.path().join("nested").join("journal");

        assert!(!dir_path.exists());
        ensure_data_directory_exists(&dir_path).unwrap();
        assert!(dir_path.is_dir());
    }

    #[test]
    fn test_ensure_data_directory_rejects_relative_path() {
        let result = ensure_data_directory_exists(Path::new("relative/journal"));
        match result {
            Err(AppError::Journal(msg)) => assert!(msg.contains("must be absolute")),
            _ => panic!("Expected Journal error for relative path"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_created_directory_is_private() {
        let temp_dir = tempdir().unwrap();
        let dir_path = temp_dir.path().join("journal");

        ensure_data_directory_exists(&dir_path).unwrap();

        let mode = fs::metadata(&dir_path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o700);
    }

    #[test]
    fn test_values_survive_reopen() {
        let temp_dir = tempdir().unwrap();

        {
            let mut store = FileStore::open(temp_dir.path()).unwrap();
            store
                .set("careJournalEntries", "[\"quoted\\\"\\n\"]".to_string())
                .unwrap();
        }

        let store = FileStore::open(temp_dir.path()).unwrap();
        assert_eq!(
            store.get("careJournalEntries").as_deref(),
            Some("[\"quoted\\\"\\n\"]")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_storage_file_is_private() {
        let temp_dir = tempdir().unwrap();
        let mut store = FileStore::open(temp_dir.path()).unwrap();
        store.set("key", "value".to_string()).unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }

    #[test]
    fn test_corrupt_file_is_treated_as_empty() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join(STORAGE_FILE_NAME), "not json at all").unwrap();

        let mut store = FileStore::open(temp_dir.path()).unwrap();
        assert_eq!(store.get("key"), None);

        store.set("key", "value".to_string()).unwrap();
        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("\"key\""));
    }

    #[test]
    fn test_second_open_is_busy() {
        let temp_dir = tempdir().unwrap();
        let _first = FileStore::open(temp_dir.path()).unwrap();

        match FileStore::open(temp_dir.path()) {
            Err(AppError::Lock(LockError::FileBusy { path })) => {
                assert!(path.ends_with(LOCK_FILE_NAME));
            }
            other => panic!("Expected FileBusy, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_lock_released_on_drop() {
        let temp_dir = tempdir().unwrap();
        drop(FileStore::open(temp_dir.path()).unwrap());

        assert!(FileStore::open(temp_dir.path()).is_ok());
    }
}
