use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use lantern_primitives::Position;

#[derive(Parser, Debug)]
#[command(name = "lantern")]
#[command(about = "Structural checks and schema-aware queries for Liquid templates")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Debug logging on stderr (overridden by LANTERN_LOG)
	#[arg(short, long, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Output format.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
	#[default]
	Human,
	Json,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Report unbalanced block tags and output delimiters
	Check {
		/// Template files to check
		#[arg(required = true)]
		files: Vec<PathBuf>,

		/// Configuration file (TOML)
		#[arg(long, value_name = "PATH")]
		config: Option<PathBuf>,

		#[arg(long, value_enum, default_value_t)]
		format: Format,
	},
	/// Resolve a variable expression against a schema file
	Resolve {
		/// Schema file (JSON)
		#[arg(long, short, value_name = "PATH")]
		schema: PathBuf,

		/// Expression such as `product.images[0].src`
		expr: String,
	},
	/// Show hover text at a position in a template
	Hover {
		/// Schema file (JSON)
		#[arg(long, short, value_name = "PATH")]
		schema: PathBuf,

		/// Template file
		file: PathBuf,

		/// 1-based position as LINE:COL
		#[arg(value_parser = parse_position)]
		position: Position,
	},
	/// List completion candidates at a position in a template
	Complete {
		/// Schema file (JSON)
		#[arg(long, short, value_name = "PATH")]
		schema: PathBuf,

		/// Template file
		file: PathBuf,

		/// 1-based position as LINE:COL
		#[arg(value_parser = parse_position)]
		position: Position,

		#[arg(long, value_enum, default_value_t)]
		format: Format,
	},
}

/// Parses `LINE:COL` with both parts 1-based.
pub fn parse_position(input: &str) -> Result<Position, String> {
	let (line, column) = input
		.split_once(':')
		.ok_or_else(|| format!("expected LINE:COL, got '{input}'"))?;
	let parse = |part: &str, what: &str| match part.trim().parse::<u32>() {
		Ok(0) | Err(_) => Err(format!("invalid {what} '{part}' (expected a number starting at 1)")),
		Ok(n) => Ok(n),
	};
	Ok(Position::new(parse(line, "line")?, parse(column, "column")?))
}
