mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use classhash::display::{DisplaySettings, format_hash};
use classhash::{fnv1_32, logging, ui};
use cli::{
	CliArgs, OutputFormat, format_hash_json, format_rows_json, format_rows_plain, parse_cli,
	print_json, print_plain,
};
use settings::ResolvedConfig;
use workflow::LookupWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in ui::theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	if let Some(text) = &cli.hash {
		return print_hash(&cli, text);
	}

	let resolved = settings::load(&cli)?;

	if let Err(err) = logging::initialize(&resolved.log) {
		eprintln!("warning: logging disabled: {err:#}");
	}

	if cli.print_config {
		resolved.print_summary();
	}

	match cli.lookup.clone() {
		Some(query) => run_lookup(cli.output, resolved, &query),
		None => run_session(cli.output, resolved),
	}
}

fn print_hash(cli: &CliArgs, text: &str) -> Result<()> {
	let value = fnv1_32(text);
	match cli.output {
		OutputFormat::Plain => {
			let settings = DisplaySettings::new(cli.display_hex.unwrap_or(false));
			println!("{}", format_hash(value, settings));
		}
		OutputFormat::Json => println!("{}", format_hash_json(text, value)?),
	}
	Ok(())
}

/// Print rows matching `query` without starting the UI.
fn run_lookup(format: OutputFormat, settings: ResolvedConfig, query: &str) -> Result<()> {
	let workflow = LookupWorkflow::from_config(settings)?;
	let rows = workflow.lookup(query);
	match format {
		OutputFormat::Plain => {
			if !rows.is_empty() {
				println!(
					"{}",
					format_rows_plain(&rows, workflow.display_settings())
				);
			}
		}
		OutputFormat::Json => println!("{}", format_rows_json(&rows)?),
	}
	Ok(())
}

/// Execute the interactive session and print the outcome in the chosen format.
fn run_session(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = LookupWorkflow::from_config(settings)?;
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
