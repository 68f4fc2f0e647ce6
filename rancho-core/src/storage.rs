//! Per-character persistence over a plain string key-value backend.
//!
//! Notes are stored as raw text. Inventories are stored as a versioned JSON
//! envelope; the older bare-array format is migrated on read.
use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::convert::Infallible;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::characters::CharacterId;
use crate::constants::{
    DEFAULT_ITEM_QUANTITY, INVENTORY_FORMAT_VERSION, INVENTORY_KEY_PREFIX, NOTES_KEY_PREFIX,
    QUARANTINE_KEY_SUFFIX,
};
use crate::inventory::{Inventory, InventoryItem, ItemId};

pub const LOCALE_KEY: &str = "rancho.locale";

/// Minimal string store. Platform crates provide the real backend.
pub trait KeyValueStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read a value; `Ok(None)` when the key was never written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Write a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn put(&self, key: &str, value: &str) -> Result<(), Self::Error>;
}

/// In-memory backend; clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.entries.borrow().keys().cloned().collect()
    }
}

impl KeyValueStore for MemoryStore {
    type Error = Infallible;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.raw(key))
    }

    fn put(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum StorageError<E>
where
    E: std::error::Error + 'static,
{
    #[error("storage backend failed")]
    Backend(#[source] E),
    #[error("stored value under {key} is malformed: {reason}")]
    Malformed { key: String, reason: String },
    #[error("stored value under {key} has unsupported format version {version}")]
    UnsupportedVersion { key: String, version: u64 },
}

impl<E> StorageError<E>
where
    E: std::error::Error + 'static,
{
    /// True for errors caused by the stored bytes rather than the backend.
    #[must_use]
    pub const fn is_corrupt_value(&self) -> bool {
        matches!(
            self,
            Self::Malformed { .. } | Self::UnsupportedVersion { .. }
        )
    }
}

#[must_use]
pub fn notes_key(character: &CharacterId) -> String {
    format!("{NOTES_KEY_PREFIX}{character}")
}

#[must_use]
pub fn inventory_key(character: &CharacterId) -> String {
    format!("{INVENTORY_KEY_PREFIX}{character}")
}

#[must_use]
pub fn quarantine_key(key: &str) -> String {
    format!("{key}{QUARANTINE_KEY_SUFFIX}")
}

#[derive(Serialize)]
struct EnvelopeOut<'a> {
    version: u32,
    items: &'a Inventory,
}

/// Record as found on disk, before repair.
#[derive(Deserialize)]
struct StoredItem {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    quantity: i64,
}

/// Serialize an inventory in the current envelope format.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode_inventory(items: &Inventory) -> Result<String, serde_json::Error> {
    serde_json::to_string(&EnvelopeOut {
        version: INVENTORY_FORMAT_VERSION,
        items,
    })
}

/// Parse a stored inventory, migrating the bare-array format and repairing
/// records where possible.
///
/// # Errors
///
/// Returns [`StorageError::Malformed`] for unparseable values and
/// [`StorageError::UnsupportedVersion`] for envelopes from a newer format.
pub fn decode_inventory<E>(key: &str, raw: &str) -> Result<Inventory, StorageError<E>>
where
    E: std::error::Error + 'static,
{
    let malformed = |reason: String| StorageError::Malformed {
        key: key.to_string(),
        reason,
    };
    let value: Value = serde_json::from_str(raw).map_err(|err| malformed(err.to_string()))?;
    let records = match value {
        Value::Array(records) => {
            log::info!("migrating unversioned inventory under {key}");
            records
        }
        Value::Object(mut envelope) => {
            let version = envelope
                .get("version")
                .and_then(Value::as_u64)
                .ok_or_else(|| malformed(String::from("missing version")))?;
            if version != u64::from(INVENTORY_FORMAT_VERSION) {
                return Err(StorageError::UnsupportedVersion {
                    key: key.to_string(),
                    version,
                });
            }
            match envelope.remove("items") {
                Some(Value::Array(records)) => records,
                Some(_) => return Err(malformed(String::from("items is not an array"))),
                None => Vec::new(),
            }
        }
        _ => return Err(malformed(String::from("expected an array or envelope"))),
    };

    let mut stored = Vec::with_capacity(records.len());
    for record in records {
        let item: StoredItem =
            serde_json::from_value(record).map_err(|err| malformed(err.to_string()))?;
        stored.push(item);
    }
    Ok(repair(key, stored))
}

fn repair(key: &str, stored: Vec<StoredItem>) -> Inventory {
    let mut inventory = Inventory::empty();
    let mut seen = HashSet::new();
    for record in stored {
        let name = record.name.trim();
        if name.is_empty() {
            log::warn!("dropping unnamed inventory record under {key}");
            continue;
        }
        let quantity = if record.quantity < 1 {
            log::warn!("inventory record {name:?} under {key} had quantity {}", record.quantity);
            DEFAULT_ITEM_QUANTITY
        } else {
            u32::try_from(record.quantity).unwrap_or(u32::MAX)
        };
        let id = if record.id.is_empty() || seen.contains(&record.id) {
            let fresh = inventory.fresh_id();
            log::warn!("re-issuing inventory id for {name:?} under {key}");
            fresh
        } else {
            ItemId::new(record.id)
        };
        seen.insert(id.as_str().to_string());
        inventory.push_unchecked(InventoryItem {
            id,
            name: name.to_string(),
            description: record.description,
            quantity,
        });
    }
    inventory
}

/// Repository for notes, inventories and UI preferences.
#[derive(Debug, Clone, Default)]
pub struct CompanionStore<S> {
    backend: S,
}

impl<S> CompanionStore<S>
where
    S: KeyValueStore,
{
    pub const fn new(backend: S) -> Self {
        Self { backend }
    }

    pub const fn backend(&self) -> &S {
        &self.backend
    }

    /// Notes for `character`; empty when nothing was saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    pub fn load_notes(&self, character: &CharacterId) -> Result<String, StorageError<S::Error>> {
        let raw = self
            .backend
            .get(&notes_key(character))
            .map_err(StorageError::Backend)?;
        Ok(raw.unwrap_or_default())
    }

    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    pub fn save_notes(
        &self,
        character: &CharacterId,
        notes: &str,
    ) -> Result<(), StorageError<S::Error>> {
        self.backend
            .put(&notes_key(character), notes)
            .map_err(StorageError::Backend)
    }

    /// Inventory for `character`; empty when nothing was saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the stored value is corrupt.
    pub fn load_inventory(
        &self,
        character: &CharacterId,
    ) -> Result<Inventory, StorageError<S::Error>> {
        let key = inventory_key(character);
        match self.backend.get(&key).map_err(StorageError::Backend)? {
            Some(raw) => decode_inventory(&key, &raw),
            None => Ok(Inventory::empty()),
        }
    }

    /// Like [`Self::load_inventory`], but a corrupt value is copied to the
    /// quarantine key and an empty inventory is returned.
    ///
    /// # Errors
    ///
    /// Returns an error only if the backend itself fails.
    pub fn load_inventory_or_quarantine(
        &self,
        character: &CharacterId,
    ) -> Result<Inventory, StorageError<S::Error>> {
        let key = inventory_key(character);
        let Some(raw) = self.backend.get(&key).map_err(StorageError::Backend)? else {
            return Ok(Inventory::empty());
        };
        match decode_inventory(&key, &raw) {
            Ok(items) => Ok(items),
            Err(err) if err.is_corrupt_value() => {
                log::warn!("{err}; moving it to {}", quarantine_key(&key));
                self.backend
                    .put(&quarantine_key(&key), &raw)
                    .map_err(StorageError::Backend)?;
                Ok(Inventory::empty())
            }
            Err(err) => Err(err),
        }
    }

    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    pub fn save_inventory(
        &self,
        character: &CharacterId,
        items: &Inventory,
    ) -> Result<(), StorageError<S::Error>> {
        let key = inventory_key(character);
        let raw = encode_inventory(items).map_err(|err| StorageError::Malformed {
            key: key.clone(),
            reason: err.to_string(),
        })?;
        self.backend.put(&key, &raw).map_err(StorageError::Backend)
    }

    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    pub fn load_locale(&self) -> Result<Option<String>, StorageError<S::Error>> {
        self.backend.get(LOCALE_KEY).map_err(StorageError::Backend)
    }

    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    pub fn save_locale(&self, code: &str) -> Result<(), StorageError<S::Error>> {
        self.backend
            .put(LOCALE_KEY, code)
            .map_err(StorageError::Backend)
    }
}
