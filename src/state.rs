use std::path::Path;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use crate::entry::Entry;
use crate::error::ApiError;
use crate::store::WorkbookStore;

/// Shared application state: the in-memory entry list plus the workbook
/// store it mirrors.
///
/// Both live behind one lock so a mutation always sees the list and the
/// worksheet in the same state; handlers get a cheap clone of the handle.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Mutex<Inner>>,
}

struct Inner {
    entries: Vec<Entry>,
    store: WorkbookStore,
}

impl AppState {
    /// Open the workbook at `data_file` and load the entry list from it.
    /// A missing or unreadable file means starting with no entries.
    pub fn initialize(data_file: &Path) -> Self {
        let store = WorkbookStore::open(data_file);
        let entries = store.read_all();
        info!(
            "loaded {} entries from {}",
            entries.len(),
            store.path().display()
        );
        Self {
            inner: Arc::new(Mutex::new(Inner { entries, store })),
        }
    }

    /// Re-read the worksheet, replace the in-memory list with the result
    /// and return it. Never fails; an unreadable sheet reads as empty.
    pub async fn list(&self) -> Vec<Entry> {
        let mut inner = self.inner.lock().await;
        inner.entries = inner.store.read_all();
        inner.entries.clone()
    }

    /// Append `entry` to the list and the worksheet, then rewrite the file.
    ///
    /// No duplicate-key check: a second entry with the same name is
    /// appended as-is.
    pub async fn add(&self, entry: Entry) -> Result<Entry, ApiError> {
        let mut inner = self.inner.lock().await;
        inner.entries.push(entry.clone());
        inner.store.append(&entry);
        inner
            .store
            .persist()
            .map_err(|e| ApiError::persistence("Error saving the entry.", e))?;
        Ok(entry)
    }

    /// Replace the entry named `key` with `entry`, in the list and the
    /// worksheet, then rewrite the file.
    ///
    /// Existence is checked in both the list and the worksheet before
    /// either is mutated, so a 404 leaves both untouched.
    pub async fn update(&self, key: &str, entry: Entry) -> Result<Entry, ApiError> {
        let mut inner = self.inner.lock().await;

        let Some(index) = inner.entries.iter().position(|e| e.name == key) else {
            return Err(ApiError::not_found("Entry not found in dataList."));
        };
        if inner.store.rows_matching(key).is_empty() {
            return Err(ApiError::not_found("Entry not found in worksheet."));
        }

        inner.entries[index] = entry.clone();
        inner.store.update_rows(key, &entry);
        inner
            .store
            .persist()
            .map_err(|e| ApiError::persistence("Error updating the entry.", e))?;
        Ok(entry)
    }

    /// Remove the entry named `key` from the list and the worksheet, then
    /// rewrite the file. Same two-phase existence check as `update`.
    pub async fn delete(&self, key: &str) -> Result<(), ApiError> {
        let mut inner = self.inner.lock().await;

        let Some(index) = inner.entries.iter().position(|e| e.name == key) else {
            return Err(ApiError::not_found("Entry not found in dataList."));
        };
        let rows = inner.store.rows_matching(key);
        if rows.is_empty() {
            return Err(ApiError::not_found("Entry not found in worksheet."));
        }

        inner.entries.remove(index);
        inner.store.delete_rows(rows);
        inner
            .store
            .persist()
            .map_err(|e| ApiError::persistence("Error deleting the entry.", e))?;
        Ok(())
    }
}
