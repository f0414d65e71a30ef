//! Lantern command-line binary.
//!
//! Runs the same validation, hover and completion logic an editor session
//! uses, against files on disk.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

mod cli;
mod commands;

use cli::{Cli, Command};

fn main() -> ExitCode {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	let stdout = std::io::stdout();
	let mut out = stdout.lock();
	match run(cli.command, &mut out).and_then(|code| {
		out.flush()?;
		Ok(code)
	}) {
		Ok(code) => code,
		Err(err) => {
			eprintln!("error: {err:#}");
			ExitCode::from(2)
		}
	}
}

fn run(command: Command, out: &mut dyn Write) -> anyhow::Result<ExitCode> {
	debug!(?command, "running");
	match command {
		Command::Check { files, config, format } => commands::check(&files, config.as_deref(), format, out),
		Command::Resolve { schema, expr } => commands::resolve(&schema, &expr, out),
		Command::Hover {
			schema,
			file,
			position,
		} => commands::hover(&schema, &file, position, out),
		Command::Complete {
			schema,
			file,
			position,
			format,
		} => commands::complete(&schema, &file, position, format, out),
	}
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_env("LANTERN_LOG")
		.or_else(|_| EnvFilter::try_from_default_env())
		.unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(verbose)
		.init();
}
