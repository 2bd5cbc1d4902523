use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	println!("  Dataset: {}", config.dataset_path.display());
	println!("  Dedupe: {}", bool_to_word(config.dedupe));
	println!(
		"  UI theme: {}",
		config.theme.as_deref().unwrap_or("(use the library default)")
	);
	match &config.initial_query {
		Some(query) => println!("  Initial query: {query}"),
		None => println!("  Initial query: (stored)"),
	}
	match config.display_hex {
		Some(display_hex) => println!("  Display hex: {}", bool_to_word(display_hex)),
		None => println!("  Display hex: (stored)"),
	}
	let labels = config.labels();
	println!("  Table title: {}", labels.table_title);
	println!(
		"  Headers: {}, {}",
		labels.class_ref_header, labels.stride_header
	);
	match &config.preferences_path {
		Some(path) => println!("  Preferences: {}", path.display()),
		None => println!("  Preferences: (in memory)"),
	}
	println!("  Log level: {}", config.log.level);
	println!("  Log file: {}", config.log.file.display());
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
