use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::{PreferenceError, PreferenceStore};

/// Preferences persisted as a single JSON object on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
	path: PathBuf,
	values: Map<String, Value>,
}

impl JsonFileStore {
	/// Open the store at `path`.
	///
	/// A missing file starts an empty store. An unreadable or corrupt file is
	/// logged and also treated as empty; it is replaced on the next write.
	pub fn open(path: impl Into<PathBuf>) -> Self {
		let path = path.into();
		let values = load_values(&path);
		Self { path, values }
	}

	fn persist(&self) -> Result<(), PreferenceError> {
		write_values(&self.path, &self.values).map_err(|source| PreferenceError::Write {
			path: self.path.clone(),
			source,
		})
	}
}

impl PreferenceStore for JsonFileStore {
	fn get(&self, key: &str) -> Option<Value> {
		self.values.get(key).cloned()
	}

	fn set(&mut self, key: &str, value: Value) -> Result<(), PreferenceError> {
		if self.values.get(key) == Some(&value) {
			return Ok(());
		}
		self.values.insert(key.to_string(), value);
		self.persist()
	}
}

fn load_values(path: &Path) -> Map<String, Value> {
	let bytes = match fs::read(path) {
		Ok(bytes) => bytes,
		Err(err) if err.kind() == io::ErrorKind::NotFound => return Map::new(),
		Err(err) => {
			tracing::warn!(path = %path.display(), error = %err, "failed to read preferences");
			return Map::new();
		}
	};

	match serde_json::from_slice::<Value>(&bytes) {
		Ok(Value::Object(values)) => values,
		Ok(_) => {
			tracing::warn!(path = %path.display(), "preferences file is not a JSON object");
			Map::new()
		}
		Err(err) => {
			tracing::warn!(path = %path.display(), error = %err, "failed to parse preferences");
			Map::new()
		}
	}
}

fn write_values(path: &Path, values: &Map<String, Value>) -> io::Result<()> {
	if let Some(dir) = path.parent()
		&& !dir.as_os_str().is_empty()
	{
		fs::create_dir_all(dir)?;
	}

	let data = serde_json::to_vec_pretty(values).map_err(io::Error::other)?;
	let tmp_path = path.with_extension("tmp");
	{
		let mut file = fs::File::create(&tmp_path)?;
		file.write_all(&data)?;
		file.sync_all()?;
	}
	fs::rename(&tmp_path, path)?;
	tracing::debug!(path = %path.display(), "saved preferences");
	Ok(())
}

#[cfg(test)]
mod tests {
	use serde_json::json;
	use tempfile::tempdir;

	use super::*;
	use crate::preferences::Preferences;

	#[test]
	fn values_survive_reopening() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("nested").join("preferences.json");

		let mut prefs = Preferences::new(JsonFileStore::open(&path));
		prefs.set_search_value("deadbeef").expect("set search");
		prefs.set_display_hex(true).expect("set hex");

		let reopened = Preferences::new(JsonFileStore::open(&path));
		assert_eq!(reopened.search_value(), "deadbeef");
		assert!(reopened.display_hex());
	}

	#[test]
	fn missing_file_is_empty() {
		let dir = tempdir().expect("tempdir");
		let store = JsonFileStore::open(dir.path().join("absent.json"));
		assert_eq!(store.get("searchValue"), None);
	}

	#[test]
	fn corrupt_file_is_replaced_on_write() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("preferences.json");
		fs::write(&path, b"{not json").expect("write");

		let mut store = JsonFileStore::open(&path);
		assert_eq!(store.get("displayHex"), None);
		store.set("displayHex", json!(true)).expect("set");

		let contents = fs::read_to_string(&path).expect("read");
		let parsed: Value = serde_json::from_str(&contents).expect("valid json");
		assert_eq!(parsed["displayHex"], json!(true));
		assert!(!path.with_extension("tmp").exists());
	}

	#[test]
	fn failed_writes_report_the_path() {
		let dir = tempdir().expect("tempdir");
		let blocker = dir.path().join("blocker");
		fs::write(&blocker, b"").expect("write");
		let path = blocker.join("preferences.json");

		let mut store = JsonFileStore::open(&path);
		let err = store.set("displayHex", json!(true)).expect_err("parent is a file");
		match err {
			PreferenceError::Write { path: reported, .. } => assert_eq!(reported, path),
			other => panic!("unexpected error: {other}"),
		}
	}
}
