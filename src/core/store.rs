//! Key-value persistence seam.
//!
//! The work log only ever reads and replaces whole values by key, so any
//! backend able to store JSON values under string keys will do.

use crate::errors::AppResult;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;

pub trait Store {
    fn get(&self, key: &str) -> AppResult<Option<Value>>;

    /// Replace the value under `key`; `None` removes it.
    fn update(&self, key: &str, value: Option<Value>) -> AppResult<()>;
}

/// In-memory store, lost when dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.values.borrow().keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<Value>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn update(&self, key: &str, value: Option<Value>) -> AppResult<()> {
        let mut values = self.values.borrow_mut();
        match value {
            Some(v) => {
                values.insert(key.to_string(), v);
            }
            None => {
                values.remove(key);
            }
        }
        Ok(())
    }
}

impl<S: Store + ?Sized> Store for &S {
    fn get(&self, key: &str) -> AppResult<Option<Value>> {
        (**self).get(key)
    }

    fn update(&self, key: &str, value: Option<Value>) -> AppResult<()> {
        (**self).update(key, value)
    }
}
