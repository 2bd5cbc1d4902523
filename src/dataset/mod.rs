//! The static `(classRef, stride)` table and its search-ready form.
//!
//! Raw [`ClassEntry`] records are read once at startup, optionally
//! de-duplicated, and prepared into [`Row`]s that carry the derived keys used
//! by the matcher. The resulting [`Dataset`] is immutable and cheap to share.

mod error;
mod loader;
mod row;

use std::ops::Index;
use std::sync::Arc;

pub use error::DatasetError;
pub use loader::{dedupe, load_entries, read_entries};
pub use row::{ClassEntry, Row};

/// Prepare raw entries for searching, preserving their order.
#[must_use]
pub fn prepare<I>(entries: I) -> Vec<Row>
where
	I: IntoIterator<Item = ClassEntry>,
{
	entries.into_iter().map(Row::new).collect()
}

/// Immutable, shareable collection of prepared rows.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
	rows: Arc<[Row]>,
}

impl Dataset {
	/// Prepare `entries` and freeze them into a dataset.
	#[must_use]
	pub fn prepare<I>(entries: I) -> Self
	where
		I: IntoIterator<Item = ClassEntry>,
	{
		Self::from_rows(prepare(entries))
	}

	#[must_use]
	pub fn from_rows(rows: Vec<Row>) -> Self {
		Self { rows: rows.into() }
	}

	#[must_use]
	pub fn rows(&self) -> &[Row] {
		&self.rows
	}

	#[must_use]
	pub fn get(&self, index: usize) -> Option<&Row> {
		self.rows.get(index)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.rows.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Row> {
		self.rows.iter()
	}
}

impl Index<usize> for Dataset {
	type Output = Row;

	fn index(&self, index: usize) -> &Self::Output {
		&self.rows[index]
	}
}

impl<'a> IntoIterator for &'a Dataset {
	type Item = &'a Row;
	type IntoIter = std::slice::Iter<'a, Row>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl FromIterator<ClassEntry> for Dataset {
	fn from_iter<T: IntoIterator<Item = ClassEntry>>(iter: T) -> Self {
		Self::prepare(iter)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn prepare_preserves_input_order_and_duplicates() {
		let dataset = Dataset::prepare([
			ClassEntry::new("ZZ", 1),
			ClassEntry::new("aa", 2),
			ClassEntry::new("ZZ", 1),
		]);
		let refs: Vec<&str> = dataset.iter().map(Row::class_ref).collect();
		assert_eq!(refs, vec!["ZZ", "aa", "ZZ"]);
	}

	#[test]
	fn clones_share_the_same_rows() {
		let dataset: Dataset = [ClassEntry::new("ab", 1)].into_iter().collect();
		let clone = dataset.clone();
		assert!(std::ptr::eq(dataset.rows(), clone.rows()));
	}
}
