//! Session storage for the assistant widget
//!
//! The widget persists a single thread id between page loads. Storage is
//! injected through [`SessionStore`] so the widget never touches ambient state:
//! - `FileStore` keeps one JSON file per key under the local data directory
//! - `LocalStorageStore` keeps values in the browser's `localStorage` (wasm)
//! - `MemoryStore` keeps values in a map (tests and embedders)

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[cfg(not(target_arch = "wasm32"))]
use std::{fs, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage io failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored value is not valid JSON: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("storage lock poisoned")]
    Poisoned,

    #[error("browser storage failed: {0}")]
    Browser(String),
}

/// Get/set/clear capability over string values.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn clear(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: SessionStore + ?Sized> SessionStore for Arc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn clear(&self, key: &str) -> Result<(), StorageError> {
        (**self).clear(key)
    }
}

// ============================================
// In-memory backend
// ============================================

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.values.lock().map_err(|_| StorageError::Poisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<(), StorageError> {
        let mut values = self.values.lock().map_err(|_| StorageError::Poisoned)?;
        values.remove(key);
        Ok(())
    }
}

// ============================================
// File backend (native platforms)
// ============================================

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted in the platform data directory for `app_id`.
    pub fn for_app(app_id: &str) -> Self {
        let safe_id = sanitize_key(app_id);
        let root = match dirs::data_local_dir() {
            Some(data_dir) => data_dir.join("meridian").join(safe_id),
            None => PathBuf::from("cache").join("meridian").join(safe_id),
        };
        Self::new(root)
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", sanitize_key(key)))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let raw = fs::read_to_string(self.path_for(key)).ok()?;
        match serde_json::from_str::<String>(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, error = %err, "ignoring unreadable stored value");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)?;
        let encoded = serde_json::to_string(value)?;
        fs::write(self.path_for(key), encoded)?;
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

// ============================================
// Browser backend (wasm)
// ============================================

/// `window.localStorage`, so the thread id survives page reloads.
///
/// Values are stored verbatim under the key. A page with storage disabled
/// (private mode, sandboxed iframe) reads as empty and fails every write.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Browser("no window object".to_string()))?;
        window
            .local_storage()
            .map_err(browser_error)?
            .ok_or_else(|| StorageError::Browser("localStorage is disabled".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
fn browser_error(err: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Browser(format!("{err:?}"))
}

#[cfg(target_arch = "wasm32")]
impl SessionStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = match self.storage() {
            Ok(storage) => storage,
            Err(err) => {
                tracing::warn!(key, error = %err, "browser storage unavailable");
                return None;
            }
        };
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, error = %browser_error(err), "failed to read stored value");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?.set_item(key, value).map_err(browser_error)
    }

    fn clear(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?.remove_item(key).map_err(browser_error)
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub type DefaultStore = FileStore;

#[cfg(target_arch = "wasm32")]
pub type DefaultStore = LocalStorageStore;

#[cfg(not(target_arch = "wasm32"))]
pub fn default_store(app_id: &str) -> DefaultStore {
    FileStore::for_app(app_id)
}

#[cfg(target_arch = "wasm32")]
pub fn default_store(_app_id: &str) -> DefaultStore {
    LocalStorageStore::new()
}

/// Sanitize storage key for filesystem use. Keeps the full length so distinct
/// keys never share a file.
#[cfg(not(target_arch = "wasm32"))]
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
