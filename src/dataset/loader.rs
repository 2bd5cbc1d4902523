use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::error::DatasetError;
use super::row::ClassEntry;

/// Read the JSON dataset stored at `path`.
///
/// # Errors
///
/// Returns [`DatasetError`] when the file cannot be read, is not a JSON array
/// of `{classRef, stride}` records, or contains an empty `classRef`.
pub fn load_entries(path: impl AsRef<Path>) -> Result<Vec<ClassEntry>, DatasetError> {
	let path = path.as_ref();
	let file = File::open(path).map_err(|err| DatasetError::io(path, err))?;
	let entries = parse_entries(BufReader::new(file), &path.display().to_string())?;
	tracing::info!(path = %path.display(), entries = entries.len(), "loaded dataset");
	Ok(entries)
}

/// Read a JSON dataset from an arbitrary reader.
///
/// # Errors
///
/// See [`load_entries`].
pub fn read_entries(reader: impl Read) -> Result<Vec<ClassEntry>, DatasetError> {
	parse_entries(reader, "<reader>")
}

fn parse_entries(reader: impl Read, origin: &str) -> Result<Vec<ClassEntry>, DatasetError> {
	let entries: Vec<ClassEntry> =
		serde_json::from_reader(reader).map_err(|err| DatasetError::parse(origin, err))?;
	if let Some(index) = entries.iter().position(|entry| entry.class_ref.is_empty()) {
		return Err(DatasetError::EmptyClassRef { index });
	}
	Ok(entries)
}

/// Collapse duplicate records the way the extraction step does.
///
/// Entries are grouped by `classRef` in order of first appearance; inside a
/// group only the first entry for each distinct stride survives.
#[must_use]
pub fn dedupe(entries: Vec<ClassEntry>) -> Vec<ClassEntry> {
	let total = entries.len();
	let mut group_index: HashMap<String, usize> = HashMap::new();
	let mut groups: Vec<Vec<ClassEntry>> = Vec::new();

	for entry in entries {
		let slot = *group_index
			.entry(entry.class_ref.clone())
			.or_insert_with(|| {
				groups.push(Vec::new());
				groups.len() - 1
			});
		let group = &mut groups[slot];
		if !group.iter().any(|existing| existing.stride == entry.stride) {
			group.push(entry);
		}
	}

	let deduped: Vec<ClassEntry> = groups.into_iter().flatten().collect();
	if deduped.len() != total {
		tracing::debug!(
			removed = total - deduped.len(),
			remaining = deduped.len(),
			"removed duplicate dataset entries"
		);
	}
	deduped
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use tempfile::NamedTempFile;

	use super::*;

	#[test]
	fn reads_camel_case_records_in_order() {
		let json = r#"[{"classRef":"B0","stride":2},{"classRef":"a1","stride":1}]"#;
		let entries = read_entries(json.as_bytes()).expect("entries");
		assert_eq!(
			entries,
			vec![ClassEntry::new("B0", 2), ClassEntry::new("a1", 1)]
		);
	}

	#[test]
	fn rejects_empty_class_ref() {
		let json = r#"[{"classRef":"ok","stride":2},{"classRef":"","stride":1}]"#;
		let err = read_entries(json.as_bytes()).unwrap_err();
		assert!(matches!(err, DatasetError::EmptyClassRef { index: 1 }));
	}

	#[test]
	fn rejects_negative_stride() {
		let json = r#"[{"classRef":"ok","stride":-1}]"#;
		let err = read_entries(json.as_bytes()).unwrap_err();
		assert!(matches!(err, DatasetError::Parse { .. }));
	}

	#[test]
	fn load_reports_missing_file_path() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("missing.json");
		let err = load_entries(&path).unwrap_err();
		assert!(matches!(err, DatasetError::Io { .. }));
		assert!(err.to_string().contains("missing.json"));
	}

	#[test]
	fn load_reads_file_from_disk() {
		let mut file = NamedTempFile::new().expect("tempfile");
		write!(file, r#"[{{"classRef":"CAFE","stride":48}}]"#).expect("write");
		let entries = load_entries(file.path()).expect("entries");
		assert_eq!(entries, vec![ClassEntry::new("CAFE", 48)]);
	}

	#[test]
	fn dedupe_groups_by_first_appearance_and_keeps_distinct_strides() {
		let entries = vec![
			ClassEntry::new("a", 1),
			ClassEntry::new("b", 2),
			ClassEntry::new("a", 1),
			ClassEntry::new("a", 3),
			ClassEntry::new("b", 2),
		];
		assert_eq!(
			dedupe(entries),
			vec![
				ClassEntry::new("a", 1),
				ClassEntry::new("a", 3),
				ClassEntry::new("b", 2),
			]
		);
	}
}
