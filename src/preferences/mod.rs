//! User preferences that survive between sessions.
//!
//! A [`PreferenceStore`] is a plain key/value collaborator. [`Preferences`]
//! layers the two typed settings the UI cares about on top of it and falls
//! back to documented defaults whenever a key is absent or holds a value of
//! the wrong type.

mod file;
mod memory;

use std::io;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Key holding the last search query.
pub const SEARCH_VALUE_KEY: &str = "searchValue";
/// Key holding the display-hex toggle.
pub const DISPLAY_HEX_KEY: &str = "displayHex";

/// Default display-hex flag when nothing was stored.
pub const DEFAULT_DISPLAY_HEX: bool = false;

/// Errors raised when persisting preferences.
#[derive(Debug, Error)]
pub enum PreferenceError {
	#[error("failed to write preferences to {path}: {source}")]
	Write {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("failed to encode preference {key}: {source}")]
	Encode {
		key: String,
		#[source]
		source: serde_json::Error,
	},
}

/// Key/value storage for preferences.
pub trait PreferenceStore {
	/// Return the stored value for `key`, if any.
	fn get(&self, key: &str) -> Option<Value>;

	/// Store `value` under `key`.
	///
	/// # Errors
	///
	/// Returns an error when the value cannot be persisted.
	fn set(&mut self, key: &str, value: Value) -> Result<(), PreferenceError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
	fn get(&self, key: &str) -> Option<Value> {
		(**self).get(key)
	}

	fn set(&mut self, key: &str, value: Value) -> Result<(), PreferenceError> {
		(**self).set(key, value)
	}
}

/// Typed access to the preferences used by the lookup UI.
#[derive(Debug, Clone, Default)]
pub struct Preferences<S> {
	store: S,
}

impl<S: PreferenceStore> Preferences<S> {
	pub fn new(store: S) -> Self {
		Self { store }
	}

	/// Read and decode `key`, returning `None` when absent or mistyped.
	pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
		let value = self.store.get(key)?;
		match serde_json::from_value(value) {
			Ok(decoded) => Some(decoded),
			Err(err) => {
				tracing::warn!(key, error = %err, "ignoring stored preference of unexpected type");
				None
			}
		}
	}

	/// Encode and store `value` under `key`.
	///
	/// # Errors
	///
	/// Returns an error when encoding or persisting fails.
	pub fn set_as<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), PreferenceError> {
		let encoded = serde_json::to_value(value).map_err(|source| PreferenceError::Encode {
			key: key.to_string(),
			source,
		})?;
		self.store.set(key, encoded)
	}

	/// The last search query, or an empty string.
	pub fn search_value(&self) -> String {
		self.get_as(SEARCH_VALUE_KEY).unwrap_or_default()
	}

	/// # Errors
	///
	/// Returns an error when the store cannot persist the value.
	pub fn set_search_value(&mut self, value: &str) -> Result<(), PreferenceError> {
		self.set_as(SEARCH_VALUE_KEY, &value)
	}

	/// Whether numbers should be shown in hex.
	pub fn display_hex(&self) -> bool {
		self.get_as(DISPLAY_HEX_KEY).unwrap_or(DEFAULT_DISPLAY_HEX)
	}

	/// # Errors
	///
	/// Returns an error when the store cannot persist the value.
	pub fn set_display_hex(&mut self, value: bool) -> Result<(), PreferenceError> {
		self.set_as(DISPLAY_HEX_KEY, &value)
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn absent_keys_use_documented_defaults() {
		let prefs = Preferences::new(MemoryStore::default());
		assert_eq!(prefs.search_value(), "");
		assert!(!prefs.display_hex());
	}

	#[test]
	fn string_and_bool_round_trip() {
		let mut prefs = Preferences::new(MemoryStore::default());
		prefs.set_search_value("1a2b").expect("set search");
		prefs.set_display_hex(true).expect("set hex");
		assert_eq!(prefs.search_value(), "1a2b");
		assert!(prefs.display_hex());

		prefs.set_display_hex(false).expect("set hex");
		assert!(!prefs.display_hex());
	}

	#[test]
	fn store_level_round_trip() {
		let mut store = MemoryStore::default();
		store.set("k", json!("v")).expect("set");
		store.set("flag", json!(true)).expect("set");
		assert_eq!(store.get("k"), Some(json!("v")));
		assert_eq!(store.get("flag"), Some(json!(true)));
		assert_eq!(store.get("missing"), None);
	}

	#[test]
	fn mistyped_values_fall_back_to_defaults() {
		let mut store = MemoryStore::default();
		store.set(DISPLAY_HEX_KEY, json!("yes")).expect("set");
		store.set(SEARCH_VALUE_KEY, json!(12)).expect("set");
		let prefs = Preferences::new(store);
		assert!(!prefs.display_hex());
		assert_eq!(prefs.search_value(), "");
	}

	#[test]
	fn boxed_stores_are_usable() {
		let store: Box<dyn PreferenceStore> = Box::new(MemoryStore::default());
		let mut prefs = Preferences::new(store);
		prefs.set_search_value("abc").expect("set");
		assert_eq!(prefs.search_value(), "abc");
	}
}
