use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::Result;

use crate::store::NoteStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<NoteStore>>,
}

impl AppState {
    pub fn new(store: NoteStore) -> Self {
        AppState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    pub fn open(database: &Path) -> Result<Self> {
        Ok(Self::new(NoteStore::open(database)?))
    }

    pub fn in_memory() -> Result<Self> {
        Ok(Self::new(NoteStore::open_in_memory()?))
    }

    pub fn store(&self) -> Result<MutexGuard<'_, NoteStore>> {
        self.store
            .lock()
            .map_err(|_| anyhow::anyhow!("note store lock poisoned"))
    }
}
