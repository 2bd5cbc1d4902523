use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `classhash` binary.
#[derive(Parser, Debug)]
#[command(
	name = "classhash",
	version,
	long_version = long_version(),
	about = "Look up class refs and strides by hex, decimal or byte-swapped value",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "CLASSHASH_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'd',
		long = "data",
		value_name = "FILE",
		help = "Dataset JSON file (default: data.json in the data directory)"
	)]
	pub(crate) data: Option<PathBuf>,
	#[arg(
		long,
		value_name = "BOOL",
		value_parser = BoolishValueParser::new(),
		help = "Drop duplicate class ref / stride pairs when loading (default: disabled)"
	)]
	pub(crate) dedupe: Option<bool>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Start with this query instead of the stored one"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		short = 'x',
		long = "display-hex",
		value_name = "BOOL",
		value_parser = BoolishValueParser::new(),
		help = "Show numbers in hex instead of the stored setting"
	)]
	pub(crate) display_hex: Option<bool>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "preferences",
		value_name = "FILE",
		help = "Preferences file (default: preferences.json in the data directory)"
	)]
	pub(crate) preferences: Option<PathBuf>,
	#[arg(
		long,
		help = "Keep preferences in memory for this session only (default: disabled)"
	)]
	pub(crate) ephemeral: bool,
	#[arg(
		long,
		value_name = "QUERY",
		conflicts_with = "hash",
		help = "Print rows matching QUERY and exit"
	)]
	pub(crate) lookup: Option<String>,
	#[arg(
		long,
		value_name = "TEXT",
		help = "Print the FNV-1 32-bit hash of TEXT and exit"
	)]
	pub(crate) hash: Option<String>,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Log filter directive (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
