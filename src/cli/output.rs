use anyhow::Result;
use classhash::display::{DisplaySettings, format_stride};
use classhash::{Row, SearchOutcome};
use serde_json::json;
use unicode_width::UnicodeWidthStr;

/// Print a plain-text representation of the session outcome.
pub(crate) fn print_plain(outcome: &SearchOutcome) {
	if !outcome.accepted {
		println!("Search cancelled (query: '{}')", outcome.query);
		return;
	}

	match outcome.selected_entry() {
		Some(entry) => println!(
			"{}\t{}",
			entry.class_ref,
			format_stride(entry.stride, DisplaySettings::new(outcome.display_hex))
		),
		None => println!("No selection"),
	}
}

/// Format the session outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the session outcome.
pub(crate) fn print_json(outcome: &SearchOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

/// Render matched rows as aligned `class ref  stride` lines.
pub(crate) fn format_rows_plain(rows: &[&Row], settings: DisplaySettings) -> String {
	let width = rows
		.iter()
		.map(|row| row.class_ref().width())
		.max()
		.unwrap_or(0);
	rows.iter()
		.map(|row| {
			let pad = width - row.class_ref().width();
			format!(
				"{}{}  {}",
				row.class_ref(),
				" ".repeat(pad),
				format_stride(row.stride(), settings)
			)
		})
		.collect::<Vec<_>>()
		.join("\n")
}

/// Format matched rows as a JSON array of `{classRef, stride}` records.
pub(crate) fn format_rows_json(rows: &[&Row]) -> Result<String> {
	let entries: Vec<_> = rows.iter().map(|row| row.to_entry()).collect();
	Ok(serde_json::to_string_pretty(&entries)?)
}

pub(crate) fn format_hash_json(input: &str, value: u32) -> Result<String> {
	let payload = json!({
		"input": input,
		"hash": value,
		"hex": format!("{value:08x}"),
	});
	Ok(serde_json::to_string_pretty(&payload)?)
}

#[cfg(test)]
mod tests {
	use classhash::{ClassEntry, Dataset};
	use serde_json::Value;

	use super::*;

	#[test]
	fn json_format_includes_selection() {
		let outcome = SearchOutcome {
			accepted: true,
			query: "1a2b".into(),
			selection: Some(ClassEntry::new("1A2B3C4D", 5)),
			display_hex: false,
		};

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], true);
		assert_eq!(value["selection"]["classRef"], "1A2B3C4D");
		assert_eq!(value["selection"]["stride"], 5);
	}

	#[test]
	fn plain_rows_are_aligned() {
		let dataset = Dataset::prepare([ClassEntry::new("AB", 16), ClassEntry::new("ABCD", 5)]);
		let rows: Vec<&Row> = dataset.iter().collect();
		let text = format_rows_plain(&rows, DisplaySettings::new(true));
		assert_eq!(text, "AB    0x10\nABCD  0x5");
	}

	#[test]
	fn rows_json_uses_dataset_field_names() {
		let dataset = Dataset::prepare([ClassEntry::new("AB", 16)]);
		let rows: Vec<&Row> = dataset.iter().collect();
		let value: Value =
			serde_json::from_str(&format_rows_json(&rows).expect("json")).expect("parse");
		assert_eq!(value[0]["classRef"], "AB");
		assert_eq!(value[0]["stride"], 16);
	}

	#[test]
	fn hash_json_carries_decimal_and_hex() {
		let value: Value =
			serde_json::from_str(&format_hash_json("a", 0x050c_5d7e).expect("json")).expect("parse");
		assert_eq!(value["hash"], 84_696_446);
		assert_eq!(value["hex"], "050c5d7e");
	}
}
