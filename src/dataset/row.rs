use serde::{Deserialize, Serialize};

/// Raw `(classRef, stride)` record as produced by the extraction step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassEntry {
	pub class_ref: String,
	pub stride: u32,
}

impl ClassEntry {
	#[must_use]
	pub fn new(class_ref: impl Into<String>, stride: u32) -> Self {
		Self {
			class_ref: class_ref.into(),
			stride,
		}
	}
}

/// Represents a row of the prepared dataset.
///
/// The lower-cased and byte-flipped keys are derived once when the row is
/// built so that matching never recomputes them per query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
	class_ref: String,
	stride: u32,
	lower_class_ref: String,
	flipped_lower_class_ref: String,
}

impl Row {
	/// Build a row from a raw entry, deriving its search keys.
	#[must_use]
	pub fn new(entry: ClassEntry) -> Self {
		let ClassEntry { class_ref, stride } = entry;
		let lower_class_ref = class_ref.to_lowercase();
		let flipped_lower_class_ref = flip_pairs(&lower_class_ref);
		Self {
			class_ref,
			stride,
			lower_class_ref,
			flipped_lower_class_ref,
		}
	}

	/// Return the identifier exactly as it appeared in the dataset.
	#[must_use]
	pub fn class_ref(&self) -> &str {
		&self.class_ref
	}

	#[must_use]
	pub fn stride(&self) -> u32 {
		self.stride
	}

	#[must_use]
	pub fn lower_class_ref(&self) -> &str {
		&self.lower_class_ref
	}

	/// Return the lower-cased identifier with its two-character chunks in
	/// reverse order, i.e. the byte-swapped spelling of a hex identifier.
	#[must_use]
	pub fn flipped_lower_class_ref(&self) -> &str {
		&self.flipped_lower_class_ref
	}

	/// Recover the raw entry this row was prepared from.
	#[must_use]
	pub fn to_entry(&self) -> ClassEntry {
		ClassEntry::new(self.class_ref.clone(), self.stride)
	}
}

impl From<ClassEntry> for Row {
	fn from(entry: ClassEntry) -> Self {
		Self::new(entry)
	}
}

/// Split `text` into two-character chunks (the last one may be shorter),
/// reverse the chunk order and join them back together.
pub(crate) fn flip_pairs(text: &str) -> String {
	let chars: Vec<char> = text.chars().collect();
	let mut flipped = String::with_capacity(text.len());
	for chunk in chars.chunks(2).rev() {
		flipped.extend(chunk);
	}
	flipped
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn row_derives_lowercase_and_flipped_keys() {
		let row = Row::new(ClassEntry::new("AABBCCDD", 1));
		assert_eq!(row.class_ref(), "AABBCCDD");
		assert_eq!(row.lower_class_ref(), "aabbccdd");
		assert_eq!(row.flipped_lower_class_ref(), "ddccbbaa");
		assert_eq!(row.stride(), 1);
	}

	#[test]
	fn odd_length_keeps_short_chunk_last_in_input_order() {
		// Chunks are "ab", "cd", "e"; reversed they read "e", "cd", "ab".
		assert_eq!(flip_pairs("abcde"), "ecdab");
	}

	#[test]
	fn non_hex_identifiers_are_preserved_verbatim() {
		let row = Row::new(ClassEntry::new("Player_Base", 7));
		assert_eq!(row.lower_class_ref(), "player_base");
		assert_eq!(row.flipped_lower_class_ref(), "eas_beraypl");
	}

	#[test]
	fn empty_identifier_flips_to_empty() {
		assert_eq!(flip_pairs(""), "");
	}

	#[test]
	fn entry_uses_camel_case_field_names() {
		let entry: ClassEntry =
			serde_json::from_str(r#"{"classRef":"1A2B","stride":12}"#).expect("parse");
		assert_eq!(entry, ClassEntry::new("1A2B", 12));
	}
}
