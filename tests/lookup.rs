use std::fs;

use classhash::dataset::{self, ClassEntry, Dataset};
use classhash::display::{DisplaySettings, format_hash, format_stride};
use classhash::preferences::{JsonFileStore, Preferences};
use classhash::search::{ResultRow, byteswap32};
use classhash::{fnv1_32, match_query};
use tempfile::tempdir;

const DATA: &str = r#"[
	{"classRef": "AABBCCDD", "stride": 16},
	{"classRef": "1A2B3C4D", "stride": 5},
	{"classRef": "player_base", "stride": 416},
	{"classRef": "AABBCCDD", "stride": 16}
]"#;

fn load(dedupe: bool) -> Dataset {
	let dir = tempdir().expect("tempdir");
	let path = dir.path().join("data.json");
	fs::write(&path, DATA).expect("write dataset");
	let mut entries = dataset::load_entries(&path).expect("load dataset");
	if dedupe {
		entries = dataset::dedupe(entries);
	}
	Dataset::prepare(entries)
}

fn refs(query: &str, data: &Dataset) -> Vec<String> {
	match_query(query, data)
		.resolve(data)
		.map(|row| row.class_ref().to_string())
		.collect()
}

#[test]
fn loaded_dataset_answers_every_query_form() {
	let data = load(true);
	assert_eq!(data.len(), 3);

	// Big-endian hex fragment.
	assert_eq!(refs("bbcc", &data), vec!["AABBCCDD"]);
	// Little-endian hex of the same identifier.
	assert_eq!(refs("DD CC BB AA", &data), vec!["AABBCCDD"]);
	// Decimal of the byte-swapped value.
	let decimal = byteswap32(0x1A2B_3C4D).to_string();
	assert_eq!(refs(&decimal, &data), vec!["1A2B3C4D"]);
	// Plain name substring.
	assert_eq!(refs("PLAYER", &data), vec!["player_base"]);
}

#[test]
fn empty_query_keeps_dataset_order_behind_the_header() {
	let data = load(false);
	let result = match_query("   ", &data);
	assert_eq!(result.rows()[0], ResultRow::Header);
	assert_eq!(result.match_count(), data.len());
	let entries: Vec<ClassEntry> = result.resolve(&data).map(|row| row.to_entry()).collect();
	assert_eq!(entries[3], ClassEntry::new("AABBCCDD", 16));
}

#[test]
fn formatting_follows_the_hex_setting() {
	let hex = DisplaySettings::new(true);
	assert_eq!(format_stride(416, DisplaySettings::default()), "416");
	assert_eq!(format_stride(416, hex), "0x1A0");
	assert_eq!(format_hash(fnv1_32(""), hex), "0x81 1C 9D C5");
	assert_eq!(fnv1_32("a"), 0x050c_5d7e);
}

#[test]
fn preferences_persist_across_sessions() {
	let dir = tempdir().expect("tempdir");
	let path = dir.path().join("preferences.json");

	let mut prefs = Preferences::new(JsonFileStore::open(&path));
	assert_eq!(prefs.search_value(), "");
	assert!(!prefs.display_hex());
	prefs.set_search_value("4d3c2b1a").expect("store query");
	prefs.set_display_hex(true).expect("store hex");

	let prefs = Preferences::new(JsonFileStore::open(&path));
	assert_eq!(prefs.search_value(), "4d3c2b1a");
	assert!(prefs.display_hex());
}
