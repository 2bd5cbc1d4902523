use std::collections::HashMap;

use serde_json::Value;

use super::{PreferenceError, PreferenceStore};

/// In-memory store used for ephemeral sessions and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
	values: HashMap<String, Value>,
}

impl PreferenceStore for MemoryStore {
	fn get(&self, key: &str) -> Option<Value> {
		self.values.get(key).cloned()
	}

	fn set(&mut self, key: &str, value: Value) -> Result<(), PreferenceError> {
		self.values.insert(key.to_string(), value);
		Ok(())
	}
}
