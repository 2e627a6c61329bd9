use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use darsana_core::normalize::normalize_body_text;
use darsana_core::{score, ScoreMap, ScoreMethod};

/// Scores the grams shared by two text files.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
	/// Source corpus file
	source: PathBuf,

	/// Destination corpus file
	destination: PathBuf,

	/// Scoring method, by name (`tf-idf`, `RAW_FREQUENCY`, ...) or code 0-3
	#[arg(short, long, value_parser = ScoreMethod::from_str, default_value_t = ScoreMethod::RawFrequency)]
	method: ScoreMethod,

	/// Number of words per gram
	#[arg(short, long, default_value_t = 1)]
	size: usize,

	/// Skip punctuation stripping and lowercasing
	#[arg(long, default_value_t = false)]
	raw: bool,

	/// Print the score map as a JSON object
	#[arg(long, default_value_t = false)]
	json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("darsana_cli=warn")))
		.with_writer(std::io::stderr)
		.init();

	let cli = Cli::parse();

	let mut source = fs::read_to_string(&cli.source)?;
	let mut destination = fs::read_to_string(&cli.destination)?;
	if !cli.raw {
		// Newlines would otherwise end up inside tokens
		source = normalize_body_text(&source.replace(['\n', '\r'], " "));
		destination = normalize_body_text(&destination.replace(['\n', '\r'], " "));
	}

	let method = cli.method;
	info!(%method, size = cli.size, "Scoring {} against {}", cli.source.display(), cli.destination.display());
	let scores = score(&source, &destination, method, cli.size)?;

	if cli.json {
		println!("{}", serde_json::to_string_pretty(&scores)?);
	} else {
		print_table(&scores);
	}

	Ok(())
}

fn print_table(scores: &ScoreMap) {
	for (gram, value) in scores {
		println!("{gram}\t{value}");
	}
}
