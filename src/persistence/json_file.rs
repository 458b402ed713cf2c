//! JSON file implementation of the notification store.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::NotificationStore;
use crate::domain::Notification;
use crate::error::ServiceError;

/// Indentation used for the persisted array.
const INDENT: &[u8] = b" ";

/// File-backed store holding the collection as a JSON array.
///
/// Saves are written to a sibling `*.tmp` file and renamed over the target,
/// so a reader never observes a half-written collection.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by the file at `path`. The file is not touched
    /// until the first load or save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut raw: OsString = self.path.as_os_str().to_owned();
        raw.push(".tmp");
        PathBuf::from(raw)
    }
}

/// Serializes `notifications` as a JSON array indented by a single space.
///
/// # Errors
///
/// Returns [`ServiceError::Io`] if serialization fails.
pub fn encode(notifications: &[Notification]) -> Result<Vec<u8>, ServiceError> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    notifications
        .serialize(&mut ser)
        .map_err(|e| ServiceError::Io(e.to_string()))?;
    Ok(buf)
}

#[async_trait]
impl NotificationStore for JsonFileStore {
    fn backend(&self) -> &'static str {
        "file"
    }

    fn location(&self) -> Option<String> {
        Some(self.path.display().to_string())
    }

    async fn load(&self) -> Result<Vec<Notification>, ServiceError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "store file absent, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        let notifications: Vec<Notification> = serde_json::from_slice(&bytes)?;
        tracing::debug!(
            path = %self.path.display(),
            count = notifications.len(),
            "loaded notifications"
        );
        Ok(notifications)
    }

    async fn save(&self, notifications: &[Notification]) -> Result<(), ServiceError> {
        let bytes = encode(notifications)?;
        let tmp = self.temp_path();
        tokio::fs::write(&tmp, &bytes).await?;
        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }
        tracing::debug!(
            path = %self.path.display(),
            count = notifications.len(),
            "saved notifications"
        );
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{NotificationId, NotificationStatus};

    fn record(id: u64) -> Notification {
        Notification {
            id: NotificationId::new(id),
            current_price: 100.0,
            daily_change_percent: 1.5,
            trading_volume: 2000.0,
            status: NotificationStatus::pending(),
        }
    }

    fn temp_store() -> (tempfile::TempDir, JsonFileStore) {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir");
        };
        let store = JsonFileStore::new(dir.path().join("notification.json"));
        (dir, store)
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let (_dir, store) = temp_store();
        let Ok(loaded) = store.load().await else {
            panic!("load should succeed");
        };
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn save_writes_single_space_indented_array() {
        let (_dir, store) = temp_store();
        assert!(store.save(&[record(1)]).await.is_ok());

        let Ok(text) = std::fs::read_to_string(store.path()) else {
            panic!("file should exist");
        };
        let expected = "[\n {\n  \"id\": 1,\n  \"current_price\": 100.0,\n  \"daily_change_percent\": 1.5,\n  \"trading_volume\": 2000.0,\n  \"status\": \"Pending\"\n }\n]";
        assert_eq!(text, expected);
    }

    #[tokio::test]
    async fn save_then_load_preserves_order() {
        let (_dir, store) = temp_store();
        let records = vec![record(3), record(1), record(2)];
        assert!(store.save(&records).await.is_ok());

        let Ok(loaded) = store.load().await else {
            panic!("load should succeed");
        };
        assert_eq!(loaded, records);
    }

    #[tokio::test]
    async fn resaving_unchanged_collection_keeps_bytes() {
        let (_dir, store) = temp_store();
        assert!(store.save(&[record(1), record(2)]).await.is_ok());
        let before = std::fs::read(store.path()).unwrap_or_default();

        let Ok(loaded) = store.load().await else {
            panic!("load should succeed");
        };
        assert!(store.save(&loaded).await.is_ok());
        let after = std::fs::read(store.path()).unwrap_or_default();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn malformed_file_is_decode_error() {
        let (_dir, store) = temp_store();
        assert!(std::fs::write(store.path(), b"{ not json").is_ok());

        let result = store.load().await;
        assert!(matches!(result, Err(ServiceError::Decode(_))));
    }

    #[tokio::test]
    async fn empty_file_is_decode_error() {
        let (_dir, store) = temp_store();
        assert!(std::fs::write(store.path(), b"").is_ok());

        let result = store.load().await;
        assert!(matches!(result, Err(ServiceError::Decode(_))));
    }

    #[tokio::test]
    async fn failed_save_leaves_previous_file() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir");
        };
        let path = dir.path().join("notification.json");
        assert!(std::fs::write(&path, b"[]").is_ok());
        // A directory in place of the temp file makes the write fail.
        assert!(std::fs::create_dir(dir.path().join("notification.json.tmp")).is_ok());

        let store = JsonFileStore::new(&path);
        let result = store.save(&[record(1)]).await;
        assert!(matches!(result, Err(ServiceError::Io(_))));
        assert_eq!(std::fs::read(&path).unwrap_or_default(), b"[]");
    }

    #[tokio::test]
    async fn unreadable_path_is_io_error() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir");
        };
        // Reading a directory fails with something other than NotFound.
        let store = JsonFileStore::new(dir.path());
        let result = store.load().await;
        assert!(matches!(result, Err(ServiceError::Io(_))));
    }

    #[tokio::test]
    async fn loads_records_with_free_form_status_and_zero_id() {
        let (_dir, store) = temp_store();
        let legacy = "[\n {\n  \"id\": 0,\n  \"current_price\": 100,\n  \"daily_change_percent\": -1,\n  \"trading_volume\": 7,\n  \"status\": \"\"\n },\n {\n  \"id\": 3,\n  \"current_price\": 2.5,\n  \"daily_change_percent\": 0,\n  \"trading_volume\": 0,\n  \"status\": \"Delivered\"\n }\n]";
        assert!(std::fs::write(store.path(), legacy).is_ok());

        let Ok(loaded) = store.load().await else {
            panic!("legacy file should load");
        };
        let statuses: Vec<&str> = loaded.iter().map(|n| n.status.as_str()).collect();
        assert_eq!(statuses, vec!["", "Delivered"]);
        let ids: Vec<u64> = loaded.iter().map(|n| n.id.get()).collect();
        assert_eq!(ids, vec![0, 3]);

        assert!(store.save(&loaded).await.is_ok());
        let Ok(reloaded) = store.load().await else {
            panic!("reload should succeed");
        };
        assert_eq!(reloaded, loaded);
    }

    #[test]
    fn reports_file_backend_and_path() {
        let store = JsonFileStore::new("/var/lib/notification.json");
        assert_eq!(store.backend(), "file");
        assert_eq!(store.location().as_deref(), Some("/var/lib/notification.json"));
    }
}
