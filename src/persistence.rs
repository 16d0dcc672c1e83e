// 💾 Inventory Logger - append-only entity log with JSON file persistence
//
// On disk the log is a pretty-printed JSON array of flat records.
// A missing file on load is not an error: the log starts empty.
// A failed load leaves the in-memory log untouched.

use crate::error::PersistError;
use crate::repository::Entity;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug)]
pub struct InventoryLogger<T> {
    log: Vec<T>,
    file_path: PathBuf,
}

impl<T> InventoryLogger<T>
where
    T: Entity + Serialize + DeserializeOwned,
{
    pub fn new<P: AsRef<Path>>(file_path: P) -> Self {
        InventoryLogger {
            log: Vec::new(),
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn add(&mut self, item: T) {
        debug!(id = item.id(), "logged item");
        self.log.push(item);
    }

    pub fn all(&self) -> &[T] {
        &self.log
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Write the whole log to the file, returning how many items were saved
    pub fn save_to_file(&self) -> Result<usize, PersistError> {
        let json = serde_json::to_string_pretty(&self.log).map_err(|source| {
            PersistError::Serialize {
                path: self.file_path.clone(),
                source,
            }
        })?;

        if let Some(dir) = self.file_path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir).map_err(|source| self.io_error(source))?;
            }
        }

        fs::write(&self.file_path, json).map_err(|source| self.io_error(source))?;

        info!(count = self.log.len(), path = %self.file_path.display(), "saved inventory");
        Ok(self.log.len())
    }

    /// Replace the log with the file contents, returning how many items were loaded
    pub fn load_from_file(&mut self) -> Result<usize, PersistError> {
        let raw = match fs::read_to_string(&self.file_path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.file_path.display(), "no data file, starting empty");
                self.log.clear();
                return Ok(0);
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let items: Vec<T> =
            serde_json::from_str(&raw).map_err(|source| PersistError::Corrupt {
                path: self.file_path.clone(),
                source,
            })?;

        self.log = items;
        info!(count = self.log.len(), path = %self.file_path.display(), "loaded inventory");
        Ok(self.log.len())
    }

    fn io_error(&self, source: io::Error) -> PersistError {
        PersistError::Io {
            path: self.file_path.clone(),
            source,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::InventoryItem;
    use crate::repository::EntityId;
    use chrono::{TimeZone, Utc};
    use serde::Deserialize;
    use std::collections::BTreeMap;

    // JSON object keys must be strings, so a byte-vector key cannot be written.
    #[derive(Debug, Serialize, Deserialize)]
    struct BinaryKeyed {
        id: EntityId,
        counts: BTreeMap<Vec<u8>, i64>,
    }

    impl Entity for BinaryKeyed {
        fn id(&self) -> EntityId {
            self.id
        }
    }

    fn sample_items() -> Vec<InventoryItem> {
        let day = |d| Utc.with_ymd_and_hms(2025, 4, d, 10, 0, 0).unwrap();
        vec![
            InventoryItem::new(1, "Laptop", 10, day(1)),
            InventoryItem::new(2, "Monitor", 15, day(2)),
            InventoryItem::new(3, "Keyboard", 25, day(3)),
        ]
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        let mut logger = InventoryLogger::new(&path);
        for item in sample_items() {
            logger.add(item);
        }
        assert_eq!(logger.save_to_file().unwrap(), 3);

        let mut fresh: InventoryLogger<InventoryItem> = InventoryLogger::new(&path);
        assert_eq!(fresh.load_from_file().unwrap(), 3);
        assert_eq!(fresh.all(), sample_items().as_slice());
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut logger: InventoryLogger<InventoryItem> =
            InventoryLogger::new(dir.path().join("absent.json"));

        assert_eq!(logger.load_from_file().unwrap(), 0);
        assert!(logger.is_empty());
    }

    #[test]
    fn test_corrupt_file_keeps_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, "{ not json").unwrap();

        let mut logger = InventoryLogger::new(&path);
        logger.add(sample_items().remove(0));

        let err = logger.load_from_file().unwrap_err();
        assert!(matches!(err, PersistError::Corrupt { .. }));
        assert_eq!(logger.len(), 1);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("data").join("inventory.json");

        let logger: InventoryLogger<InventoryItem> = InventoryLogger::new(&path);
        assert_eq!(logger.save_to_file().unwrap(), 0);
        assert_eq!(fs::read_to_string(&path).unwrap().trim(), "[]");
    }

    #[test]
    fn test_unserializable_log_is_not_reported_as_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.json");

        let mut logger = InventoryLogger::new(&path);
        logger.add(BinaryKeyed {
            id: 1,
            counts: BTreeMap::from([(vec![0xde, 0xad], 2)]),
        });

        let err = logger.save_to_file().unwrap_err();
        assert!(matches!(err, PersistError::Serialize { .. }));
        assert!(err.to_string().starts_with("failed to serialize data for"));
        assert!(!path.exists());
    }
}
