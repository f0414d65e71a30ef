use lantern_primitives::{Diagnostic, Range};

use crate::grammar::{END_PREFIX, OUTPUT_CLOSE_LABEL, Token, TokenKind, scan_line};
use crate::stack::{Frame, FrameKind, FrameStack};

/// Single-pass structural checker.
///
/// Feed the document one line at a time with [`Validator::feed_line`], then
/// call [`Validator::finish`] to report whatever is still open.
#[derive(Debug, Default)]
pub struct Validator {
	stack: FrameStack,
	diagnostics: Vec<Diagnostic>,
	line: u32,
}

impl Validator {
	pub fn new() -> Self {
		Self::default()
	}

	/// Processes the next line of the document.
	pub fn feed_line(&mut self, text: &str) {
		self.line += 1;
		for token in scan_line(text) {
			self.apply(token);
		}
	}

	/// Number of constructs currently open.
	pub fn open_frames(&self) -> usize {
		self.stack.len()
	}

	fn apply(&mut self, token: Token) {
		let Token { kind, column, len } = token;
		match kind {
			TokenKind::OutputOpen => self.stack.push(Frame {
				kind: FrameKind::Output,
				line: self.line,
				column,
				length: len,
			}),
			TokenKind::OutputClose => {
				if self.stack.remove_nearest(|f| f.kind == FrameKind::Output).is_none() {
					self.report(
						format!("Unmatched closing output tag '{OUTPUT_CLOSE_LABEL}'"),
						Range::on_line(self.line, column, len),
					);
				}
			}
			TokenKind::BlockOpen(name) => {
				tracing::trace!(line = self.line, column, tag = %name, "block opened");
				self.stack.push(Frame {
					kind: FrameKind::Block(name),
					line: self.line,
					column,
					length: len,
				});
			}
			TokenKind::BlockClose(name) => self.close_block(&name, Range::on_line(self.line, column, len)),
			TokenKind::Tag(_) => {}
		}
	}

	fn close_block(&mut self, name: &str, range: Range) {
		let Some(open) = self.stack.pop() else {
			self.report(format!("Unmatched end tag '{END_PREFIX}{name}'"), range);
			return;
		};
		if open.kind != FrameKind::Block(name.to_string()) {
			let expected = match &open.kind {
				FrameKind::Block(open_name) => format!("{END_PREFIX}{open_name}"),
				FrameKind::Output => OUTPUT_CLOSE_LABEL.to_string(),
			};
			self.report(
				format!("Mismatched end tag: expected {expected} but found {END_PREFIX}{name}"),
				range,
			);
		}
	}

	fn report(&mut self, message: String, range: Range) {
		tracing::trace!(line = range.start.line, column = range.start.column, %message, "structural problem");
		self.diagnostics.push(Diagnostic::error(message, range));
	}

	/// Reports every construct left open, innermost first, and returns all
	/// diagnostics in discovery order.
	pub fn finish(mut self) -> Vec<Diagnostic> {
		for frame in std::mem::take(&mut self.stack).drain_top_down() {
			let message = match &frame.kind {
				FrameKind::Output => format!("Unclosed output tag '{}'", frame.kind.label()),
				FrameKind::Block(name) => format!("Unclosed tag '{name}'"),
			};
			self.diagnostics
				.push(Diagnostic::error(message, Range::on_line(frame.line, frame.column, frame.length)));
		}
		tracing::debug!(lines = self.line, diagnostics = self.diagnostics.len(), "structural validation finished");
		self.diagnostics
	}
}

/// Validates a whole document from scratch.
pub fn validate(text: &str) -> Vec<Diagnostic> {
	let mut validator = Validator::new();
	for line in text.lines() {
		validator.feed_line(line);
	}
	validator.finish()
}
