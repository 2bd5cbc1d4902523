mod args;
mod output;

pub(crate) use args::{CliArgs, OutputFormat, parse_cli};
pub(crate) use output::{
	format_hash_json, format_rows_json, format_rows_plain, print_json, print_plain,
};
