use std::path::PathBuf;

use clap::Parser;
use tempfile::NamedTempFile;

use super::RawConfig;
use crate::cli::CliArgs;

fn parse_toml(text: &str) -> RawConfig {
	config::Config::builder()
		.add_source(config::File::from_str(text, config::FileFormat::Toml))
		.build()
		.expect("build")
		.try_deserialize()
		.expect("deserialize")
}

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"classhash",
		"--data",
		"cli.json",
		"--dedupe",
		"yes",
		"--theme",
		"light",
		"-q",
		"beef",
		"-x",
		"true",
		"--ephemeral",
		"--log-level",
		"debug",
	]);

	let mut config = parse_toml(
		r#"
		[dataset]
		path = "file.json"
		dedupe = false

		[ui]
		theme = "slate"
		initial_query = "cafe"
		display_hex = false

		[preferences]
		persist = true

		[logging]
		level = "warn"
		"#,
	);
	config.apply_cli_overrides(&cli);

	assert_eq!(config.dataset.path, Some(PathBuf::from("cli.json")));
	assert_eq!(config.dataset.dedupe, Some(true));
	assert_eq!(config.ui.theme.as_deref(), Some("light"));
	assert_eq!(config.ui.initial_query.as_deref(), Some("beef"));
	assert_eq!(config.ui.display_hex, Some(true));
	assert_eq!(config.preferences.persist, Some(false));
	assert_eq!(config.logging.level.as_deref(), Some("debug"));
}

#[test]
fn file_values_survive_without_cli_flags() {
	let cli = CliArgs::parse_from(["classhash"]);
	let mut config = parse_toml(
		r#"
		[ui]
		table_title = " Strides "
		headers = ["Ref", " Size "]
		"#,
	);
	config.apply_cli_overrides(&cli);
	assert_eq!(config.ui.table_title.as_deref(), Some(" Strides "));

	let ui = config.ui.finalize();
	assert_eq!(ui.table_title.as_deref(), Some("Strides"));
	assert_eq!(ui.headers, Some(vec!["Ref".to_string(), "Size".to_string()]));
	assert_eq!(ui.initial_query, None);
}

#[test]
fn resolve_fills_defaults_and_validates() {
	let dataset = NamedTempFile::new().expect("temp file");
	let prefs_dir = tempfile::tempdir().expect("tempdir");
	let cli = CliArgs::parse_from(["classhash"]);
	let mut config = parse_toml(&format!(
		r#"
		[dataset]
		path = {:?}

		[preferences]
		path = {:?}

		[logging]
		file = {:?}

		[ui]
		headers = ["Ref", "Size"]
		"#,
		dataset.path(),
		prefs_dir.path().join("prefs.json"),
		prefs_dir.path().join("classhash.log"),
	));
	config.apply_cli_overrides(&cli);

	let resolved = config.resolve(&cli).expect("resolve");
	assert_eq!(resolved.dataset_path, dataset.path());
	assert!(!resolved.dedupe);
	assert_eq!(
		resolved.preferences_path,
		Some(prefs_dir.path().join("prefs.json"))
	);
	assert_eq!(resolved.log.level, "info");
	let labels = resolved.labels();
	assert_eq!(labels.class_ref_header, "Ref");
	assert_eq!(labels.stride_header, "Size");
}

#[test]
fn ephemeral_sessions_have_no_preferences_path() {
	let dataset = NamedTempFile::new().expect("temp file");
	let cli = CliArgs::parse_from(["classhash", "--ephemeral"]);
	let mut config = RawConfig::default();
	config.dataset.path = Some(dataset.path().to_path_buf());
	config.logging.file = Some(PathBuf::from("classhash.log"));
	config.apply_cli_overrides(&cli);

	let resolved = config.resolve(&cli).expect("resolve");
	assert_eq!(resolved.preferences_path, None);
}

#[test]
fn resolve_reports_the_flag_for_a_missing_dataset() {
	let cli = CliArgs::parse_from(["classhash", "--data", "/missing/data.json"]);
	let mut config = RawConfig::default();
	config.logging.file = Some(PathBuf::from("classhash.log"));
	config.preferences.persist = Some(false);
	config.apply_cli_overrides(&cli);

	let err = config.resolve(&cli).expect_err("missing dataset");
	let message = err.to_string();
	assert!(message.contains("dataset.path"), "{message}");
	assert!(message.contains("--data"), "{message}");
}
