use crate::dataset::{Dataset, Row};

use super::numeric::{byteswap32, hex_or_nan, parse_integer};
use super::results::MatchResult;

/// Whitespace as a browser regex `\s` sees it: Unicode white space without
/// NEL (U+0085), plus the byte order mark (U+FEFF).
#[must_use]
pub fn is_query_whitespace(ch: char) -> bool {
	match ch {
		'\u{85}' => false,
		'\u{FEFF}' => true,
		_ => ch.is_whitespace(),
	}
}

/// The three interpretations of a cleaned query that rows are compared with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryKeys {
	/// The cleaned query itself, read as a big-endian hex fragment.
	pub bare_hex: String,
	/// The query read as a decimal integer, byte-swapped, rendered as hex.
	pub decimal_swapped: String,
	/// The query read as a hex integer, byte-swapped, rendered as hex.
	pub hex_swapped: String,
}

impl QueryKeys {
	/// Derive the keys for a raw query.
	///
	/// Whitespace anywhere in the query is dropped and the rest lower-cased.
	/// A query that does not parse as a number yields `"nan"` for the swapped
	/// keys.
	#[must_use]
	pub fn new(query: &str) -> Self {
		let cleaned: String = query
			.chars()
			.filter(|ch| !is_query_whitespace(*ch))
			.collect::<String>()
			.to_lowercase();
		let decimal_swapped = hex_or_nan(parse_integer(&cleaned, 10).map(byteswap32));
		let hex_swapped = hex_or_nan(parse_integer(&cleaned, 16).map(byteswap32));
		Self {
			bare_hex: cleaned,
			decimal_swapped,
			hex_swapped,
		}
	}

	/// Whether the row equals one of the keys outright.
	#[must_use]
	pub fn matches_exactly(&self, row: &Row) -> bool {
		let key = row.lower_class_ref();
		key == self.decimal_swapped || key == self.bare_hex || key == self.hex_swapped
	}

	/// Whether the cleaned query occurs inside the row's key in either byte order.
	#[must_use]
	pub fn matches_fragment(&self, row: &Row) -> bool {
		row.lower_class_ref().contains(&self.bare_hex)
			|| row.flipped_lower_class_ref().contains(&self.bare_hex)
	}

	#[must_use]
	pub fn matches(&self, row: &Row) -> bool {
		self.matches_exactly(row) || self.matches_fragment(row)
	}
}

/// Match `query` against every row of `dataset`.
///
/// An empty or whitespace-only query returns the whole dataset. The result
/// always starts with the header entry and keeps dataset order.
#[must_use]
pub fn match_query(query: &str, dataset: &Dataset) -> MatchResult {
	if query.chars().all(is_query_whitespace) {
		return MatchResult::from_matches(0..dataset.len());
	}

	let keys = QueryKeys::new(query);
	let result = MatchResult::from_matches(
		dataset
			.iter()
			.enumerate()
			.filter(|(_, row)| keys.matches(row))
			.map(|(index, _)| index),
	);
	tracing::trace!(
		query,
		matches = result.match_count(),
		total = dataset.len(),
		"matched query"
	);
	result
}
