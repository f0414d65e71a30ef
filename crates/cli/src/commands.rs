//! Subcommand implementations.
//!
//! Templates are loaded into a [`MemoryHost`] and queried through a
//! [`Session`], the same path an editor takes.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use lantern_editor::{CompletionKind, Config, DIAGNOSTIC_OWNER, DocumentId, MemoryHost, Session};
use lantern_primitives::{Diagnostic, Position, Severity};
use lantern_schema::{Path as AccessPath, SchemaSet};
use serde::Serialize;
use tracing::debug;

use crate::cli::Format;

const DOC: DocumentId = DocumentId(1);

#[derive(Serialize)]
struct FileReport<'a> {
	file: &'a Path,
	diagnostics: &'a [Diagnostic],
}

#[derive(Serialize)]
struct CompletionEntry<'a> {
	label: &'a str,
	kind: &'static str,
	detail: Option<&'a str>,
}

fn severity_label(severity: Severity) -> &'static str {
	match severity {
		Severity::Error => "error",
		Severity::Warning => "warning",
		Severity::Information => "info",
		Severity::Hint => "hint",
	}
}

fn read_template(path: &Path) -> Result<String> {
	std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn load_schemas(path: &Path) -> Result<SchemaSet> {
	SchemaSet::load(path).with_context(|| format!("failed to load schema {}", path.display()))
}

/// Opens `file` in a fresh host and session with `schemas` attached.
fn open_with_schemas(schema: &Path, file: &Path) -> Result<(MemoryHost, Session)> {
	let schemas = load_schemas(schema)?;
	let mut host = MemoryHost::new();
	host.open(DOC, read_template(file)?);
	let mut session = Session::default();
	session.set_schemas(DOC, Arc::new(schemas));
	Ok((host, session))
}

/// Validates every file. Fails the process if any diagnostic was reported.
pub fn check(files: &[PathBuf], config: Option<&Path>, format: Format, out: &mut dyn Write) -> Result<ExitCode> {
	let config = match config {
		Some(path) => Config::load(path).with_context(|| format!("failed to load config {}", path.display()))?,
		None => Config::default(),
	};
	let mut session = Session::new(config);
	let mut host = MemoryHost::new();

	let mut results = Vec::with_capacity(files.len());
	for file in files {
		host.open(DOC, read_template(file)?);
		session.attach_validation(&mut host, DOC);
		let diagnostics = host.diagnostics(DOC, DIAGNOSTIC_OWNER).to_vec();
		session.dispose_document(&mut host, DOC);
		debug!(file = %file.display(), diagnostics = diagnostics.len(), "checked");
		results.push((file.as_path(), diagnostics));
	}

	match format {
		Format::Human => {
			for (file, diagnostics) in &results {
				for diag in diagnostics {
					writeln!(
						out,
						"{}:{}:{}: {}: {}",
						file.display(),
						diag.range.start.line,
						diag.range.start.column,
						severity_label(diag.severity),
						diag.message
					)?;
				}
			}
		}
		Format::Json => {
			let reports: Vec<_> = results
				.iter()
				.map(|(file, diagnostics)| FileReport { file, diagnostics })
				.collect();
			serde_json::to_writer_pretty(&mut *out, &reports)?;
			writeln!(out)?;
		}
	}

	let failed = results.iter().any(|(_, diagnostics)| !diagnostics.is_empty());
	Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

/// Prints the rendered type of `expr`.
pub fn resolve(schema: &Path, expr: &str, out: &mut dyn Write) -> Result<ExitCode> {
	let schemas = load_schemas(schema)?;
	let path = AccessPath::parse(expr);
	match schemas.resolve(&path) {
		Some(ty) => {
			writeln!(out, "{}", ty.render())?;
			Ok(ExitCode::SUCCESS)
		}
		None => {
			writeln!(out, "unresolved: {}", path.display())?;
			Ok(ExitCode::FAILURE)
		}
	}
}

/// Prints the hover markdown at `position`.
pub fn hover(schema: &Path, file: &Path, position: Position, out: &mut dyn Write) -> Result<ExitCode> {
	let (host, session) = open_with_schemas(schema, file)?;
	match session.hover(&host, DOC, position) {
		Some(hover) => {
			writeln!(out, "{}", hover.contents)?;
			Ok(ExitCode::SUCCESS)
		}
		None => Ok(ExitCode::FAILURE),
	}
}

/// Prints completion candidates at `position`, one per line.
pub fn complete(schema: &Path, file: &Path, position: Position, format: Format, out: &mut dyn Write) -> Result<ExitCode> {
	let (host, session) = open_with_schemas(schema, file)?;
	let result = session.completion(&host, DOC, position);

	let entries: Vec<_> = result
		.items
		.iter()
		.map(|item| CompletionEntry {
			label: &item.label,
			kind: match item.kind {
				CompletionKind::Variable => "variable",
				CompletionKind::Field => "field",
			},
			detail: item.detail.as_deref(),
		})
		.collect();

	match format {
		Format::Human => {
			for entry in &entries {
				writeln!(out, "{}\t{}\t{}", entry.label, entry.kind, entry.detail.unwrap_or_default())?;
			}
		}
		Format::Json => {
			serde_json::to_writer_pretty(&mut *out, &entries)?;
			writeln!(out)?;
		}
	}
	Ok(ExitCode::SUCCESS)
}
