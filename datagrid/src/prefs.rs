//! Persisted table preference codes.
//!
//! Hosts persist the user's per-route table settings (visible filter and
//! column codes) in an external key-value store. Payloads carry no
//! schema version, so loading tolerates anything: a missing or malformed
//! payload falls back to the defaults instead of failing.

use std::collections::HashMap;
use std::sync::RwLock;

/// External key-value store for preference payloads.
///
/// Keys derive from the host's current route; payloads are raw JSON
/// strings holding an array of codes.
pub trait PreferenceStore {
    /// Fetch the raw payload stored under `key`.
    fn get(&self, key: &str) -> Option<String>;
    /// Persist the raw payload under `key`.
    fn set(&self, key: &str, value: String);
}

/// Load the code list stored under `key`, falling back to `defaults`
/// when the payload is missing or malformed.
pub fn load_codes(store: &dyn PreferenceStore, key: &str, defaults: &[String]) -> Vec<String> {
    match store.get(key) {
        Some(raw) => match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(codes) => codes,
            Err(err) => {
                log::debug!("malformed preference payload under `{key}`: {err}");
                defaults.to_vec()
            }
        },
        None => defaults.to_vec(),
    }
}

/// Persist the code list under `key` as a JSON array.
pub fn store_codes(store: &dyn PreferenceStore, key: &str, codes: &[String]) {
    match serde_json::to_string(codes) {
        Ok(raw) => store.set(key, raw),
        Err(err) => log::debug!("failed to encode preference payload for `{key}`: {err}"),
    }
}

/// In-memory store for tests and simple hosts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.to_string(), value);
        }
    }
}
