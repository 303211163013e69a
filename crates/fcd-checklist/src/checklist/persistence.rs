//! Durable storage of the answer state.
//!
//! The payload is a single JSON document kept under one key:
//! `{"selections": {"<id>": -1|0|1}, "isFull": bool}`. Writes are best effort
//! and reads that fail validation behave exactly like an empty slot.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use super::catalog::ItemCatalog;
use super::domain::{ItemId, Mode, Response};
use super::store::{ResponseStore, StoreError, StoreSnapshot};

/// Key-value location the adapter reads from and writes to.
pub trait StateSlot: Send + Sync {
    fn read(&self) -> Result<Option<String>, SlotError>;
    fn write(&self, payload: &str) -> Result<(), SlotError>;
}

/// Storage failure. Never leaves the adapter.
#[derive(Debug, thiserror::Error)]
pub enum SlotError {
    #[error("slot io error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("slot unavailable: {0}")]
    Unavailable(String),
}

/// Reasons a stored payload is discarded.
#[derive(Debug, thiserror::Error)]
pub enum PersistedStateError {
    #[error("payload is not a valid checklist document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("response code {code} for item {id} is outside -1..=1")]
    InvalidCode { id: ItemId, code: i8 },
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedState {
    selections: BTreeMap<u8, i8>,
    is_full: bool,
}

fn response_code(response: Response) -> i8 {
    match response {
        Response::Unanswered => -1,
        Response::No => 0,
        Response::Yes => 1,
    }
}

fn response_from_code(id: ItemId, code: i8) -> Result<Response, PersistedStateError> {
    match code {
        -1 => Ok(Response::Unanswered),
        0 => Ok(Response::No),
        1 => Ok(Response::Yes),
        _ => Err(PersistedStateError::InvalidCode { id, code }),
    }
}

pub fn encode(snapshot: &StoreSnapshot) -> Result<String, serde_json::Error> {
    let state = PersistedState {
        selections: snapshot
            .responses
            .iter()
            .map(|(id, response)| (id.get(), response_code(*response)))
            .collect(),
        is_full: snapshot.mode.is_full(),
    };
    serde_json::to_string(&state)
}

/// Parses and validates a payload against `catalog`. Partial state is never returned.
pub fn decode(catalog: &ItemCatalog, raw: &str) -> Result<ResponseStore, PersistedStateError> {
    let state: PersistedState = serde_json::from_str(raw)?;

    let mut responses = BTreeMap::new();
    for (id, code) in state.selections {
        let id = ItemId(id);
        responses.insert(id, response_from_code(id, code)?);
    }

    let snapshot = StoreSnapshot {
        responses,
        mode: Mode::from_full(state.is_full),
    };
    Ok(ResponseStore::from_snapshot(catalog, snapshot)?)
}

/// Saves and restores [`ResponseStore`] state through a [`StateSlot`].
#[derive(Debug)]
pub struct PersistenceAdapter<S> {
    slot: S,
}

impl<S: StateSlot> PersistenceAdapter<S> {
    pub fn new(slot: S) -> Self {
        Self { slot }
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Best-effort write. Failures are logged and dropped.
    pub fn save(&self, snapshot: &StoreSnapshot) {
        let payload = match encode(snapshot) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(error = %err, "unable to serialise checklist state");
                return;
            }
        };

        if let Err(err) = self.slot.write(&payload) {
            warn!(error = %err, "checklist state not persisted");
        }
    }

    /// Saved state, or `None` when the slot is empty, unreadable or invalid.
    pub fn load(&self, catalog: &ItemCatalog) -> Option<ResponseStore> {
        let raw = match self.slot.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("no saved checklist state");
                return None;
            }
            Err(err) => {
                warn!(error = %err, "checklist state could not be read");
                return None;
            }
        };

        match decode(catalog, &raw) {
            Ok(store) => Some(store),
            Err(err) => {
                warn!(error = %err, "discarding saved checklist state");
                None
            }
        }
    }

    pub fn load_or_default(&self, catalog: &ItemCatalog) -> ResponseStore {
        self.load(catalog)
            .unwrap_or_else(|| ResponseStore::new(catalog))
    }
}

/// One JSON file per storage key inside a directory.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{key}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> SlotError {
        SlotError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl StateSlot for FileSlot {
    fn read(&self) -> Result<Option<String>, SlotError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(self.io_error(err)),
        }
    }

    fn write(&self, payload: &str) -> Result<(), SlotError> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;

        // Staged next to the target so the rename stays on one filesystem; the
        // staging file is removed when it is dropped without being persisted.
        let mut staging = NamedTempFile::new_in(parent).map_err(|err| self.io_error(err))?;
        staging
            .write_all(payload.as_bytes())
            .map_err(|err| self.io_error(err))?;
        staging
            .persist(&self.path)
            .map(|_| ())
            .map_err(|err| self.io_error(err.error))
    }
}

/// In-process slot. Clones share the same payload.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    payload: Arc<Mutex<Option<String>>>,
}

impl MemorySlot {
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: Arc::new(Mutex::new(Some(payload.into()))),
        }
    }

    /// Current payload, `None` if nothing was written or the lock is poisoned.
    pub fn payload(&self) -> Option<String> {
        self.payload.lock().ok().and_then(|guard| guard.clone())
    }

    pub fn replace(&self, payload: impl Into<String>) {
        if let Ok(mut guard) = self.payload.lock() {
            *guard = Some(payload.into());
        }
    }
}

impl StateSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>, SlotError> {
        let guard = self
            .payload
            .lock()
            .map_err(|_| SlotError::Unavailable("memory slot poisoned".to_string()))?;
        Ok(guard.clone())
    }

    fn write(&self, payload: &str) -> Result<(), SlotError> {
        let mut guard = self
            .payload
            .lock()
            .map_err(|_| SlotError::Unavailable("memory slot poisoned".to_string()))?;
        *guard = Some(payload.to_string());
        Ok(())
    }
}
