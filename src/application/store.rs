use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::RwLock;

/// Process-wide application state, created once at bootstrap and shared by
/// `Arc`. Values are stored as JSON so any serde type can be kept.
#[derive(Debug, Default)]
pub struct Store {
    state: RwLock<BTreeMap<String, serde_json::Value>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<serde_json::Value> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        state.get(key).cloned()
    }

    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.get(key).and_then(|v| serde_json::from_value(v).ok())
    }

    pub fn set<T: Serialize>(&self, key: impl Into<String>, value: &T) -> Result<(), serde_json::Error> {
        let value = serde_json::to_value(value)?;
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        state.insert(key.into(), value);
        Ok(())
    }

    pub fn remove(&self, key: &str) -> Option<serde_json::Value> {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        state.remove(key)
    }

    pub fn snapshot(&self) -> BTreeMap<String, serde_json::Value> {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}
