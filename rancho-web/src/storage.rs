//! `localStorage` backend for the companion store.
//!
//! When the browser refuses storage (private mode, disabled, or a native test
//! run) reads and writes go to an in-memory map instead, so the UI keeps
//! working for the current session.
use rancho_core::{CompanionStore, KeyValueStore, MemoryStore};
use std::cell::Cell;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebStorageError {
    #[error("localStorage unavailable: {0}")]
    Unavailable(String),
    #[error("localStorage rejected the operation: {0}")]
    Js(String),
}

#[derive(Debug, Clone, Default)]
pub struct BrowserStore {
    fallback: MemoryStore,
}

thread_local! {
    static SHARED: BrowserStore = BrowserStore::default();
    static WARNED: Cell<bool> = const { Cell::new(false) };
}

fn warn_once(err: &WebStorageError) {
    WARNED.with(|warned| {
        if !warned.replace(true) {
            log::warn!("{err}; keeping data in memory for this session");
        }
    });
}

impl BrowserStore {
    /// Store handle shared by every screen on this thread.
    #[must_use]
    pub fn shared() -> Self {
        SHARED.with(Clone::clone)
    }

    fn local() -> Result<web_sys::Storage, WebStorageError> {
        crate::dom::local_storage()
            .map_err(|err| WebStorageError::Unavailable(crate::dom::js_error_message(&err)))
    }
}

impl KeyValueStore for BrowserStore {
    type Error = WebStorageError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        match Self::local() {
            Ok(storage) => storage
                .get_item(key)
                .map_err(|err| WebStorageError::Js(crate::dom::js_error_message(&err))),
            Err(err) => {
                warn_once(&err);
                Ok(self.fallback.raw(key))
            }
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        match Self::local() {
            Ok(storage) => storage
                .set_item(key, value)
                .map_err(|err| WebStorageError::Js(crate::dom::js_error_message(&err))),
            Err(err) => {
                warn_once(&err);
                match self.fallback.put(key, value) {
                    Ok(()) => Ok(()),
                    Err(never) => match never {},
                }
            }
        }
    }
}

pub type WebStore = CompanionStore<BrowserStore>;

#[must_use]
pub fn companion_store() -> WebStore {
    CompanionStore::new(BrowserStore::shared())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rancho_core::CharacterId;

    #[test]
    fn native_runs_fall_back_to_memory() {
        let store = companion_store();
        let id = CharacterId::from("ada");
        store.save_notes(&id, "Láudano no alforje").unwrap();
        assert_eq!(
            companion_store().load_notes(&id).unwrap(),
            "Láudano no alforje"
        );
    }
}
