use crate::dataset::{Dataset, Row};

/// A single entry of a [`MatchResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultRow {
	/// Placeholder rendered as the fixed column header; never a data row.
	Header,
	/// Index of a matching row in the dataset.
	Match(usize),
}

/// Ordered result of matching a query against a dataset.
///
/// The first entry is always [`ResultRow::Header`]; the matches that follow
/// keep the dataset's order and never repeat an index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
	rows: Vec<ResultRow>,
}

impl MatchResult {
	pub(crate) fn from_matches<I>(matches: I) -> Self
	where
		I: IntoIterator<Item = usize>,
	{
		let matches = matches.into_iter();
		let mut rows = Vec::with_capacity(matches.size_hint().0 + 1);
		rows.push(ResultRow::Header);
		rows.extend(matches.map(ResultRow::Match));
		Self { rows }
	}

	/// Return every entry, header first.
	#[must_use]
	pub fn rows(&self) -> &[ResultRow] {
		&self.rows
	}

	/// Number of entries including the header.
	#[must_use]
	pub fn len(&self) -> usize {
		self.rows.len()
	}

	/// A result always carries its header, so it is never empty.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	/// Number of matching dataset rows.
	#[must_use]
	pub fn match_count(&self) -> usize {
		self.rows.len().saturating_sub(1)
	}

	/// Dataset indices of the matching rows, in order.
	pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
		self.rows.iter().filter_map(|row| match row {
			ResultRow::Match(index) => Some(*index),
			ResultRow::Header => None,
		})
	}

	/// Dataset index of the `position`-th match (zero based, header excluded).
	#[must_use]
	pub fn index_of_match(&self, position: usize) -> Option<usize> {
		match self.rows.get(position + 1)? {
			ResultRow::Match(index) => Some(*index),
			ResultRow::Header => None,
		}
	}

	/// Resolve the matches against the dataset they were computed from.
	///
	/// The rows borrow only the dataset, so they outlive the result.
	pub fn resolve<'d>(
		&self,
		dataset: &'d Dataset,
	) -> impl Iterator<Item = &'d Row> + use<'_, 'd> {
		self.indices().filter_map(|index| dataset.get(index))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn header_always_leads() {
		let result = MatchResult::from_matches([4, 9]);
		assert_eq!(
			result.rows(),
			&[ResultRow::Header, ResultRow::Match(4), ResultRow::Match(9)]
		);
		assert_eq!(result.match_count(), 2);
		assert_eq!(result.index_of_match(1), Some(9));
		assert_eq!(result.index_of_match(2), None);
	}

	#[test]
	fn empty_match_set_still_has_header() {
		let result = MatchResult::from_matches(std::iter::empty());
		assert_eq!(result.len(), 1);
		assert!(!result.is_empty());
		assert_eq!(result.match_count(), 0);
	}

	#[test]
	fn resolved_rows_outlive_the_result() {
		use crate::dataset::ClassEntry;

		let data = Dataset::prepare([
			ClassEntry::new("AA", 1),
			ClassEntry::new("BB", 2),
			ClassEntry::new("CC", 3),
		]);
		let rows: Vec<&Row> = {
			let result = MatchResult::from_matches([2, 0]);
			result.resolve(&data).collect()
		};
		let refs: Vec<&str> = rows.iter().map(|row| row.class_ref()).collect();
		assert_eq!(refs, vec!["CC", "AA"]);
	}
}
