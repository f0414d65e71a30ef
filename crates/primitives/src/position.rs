use serde::Serialize;

/// A 1-based line/column position in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
	/// Line number, starting at 1.
	pub line: u32,
	/// Column number, starting at 1.
	pub column: u32,
}

impl Position {
	/// Creates a new position.
	pub const fn new(line: u32, column: u32) -> Self {
		Self { line, column }
	}
}

/// A range between two positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Range {
	/// Start position (inclusive).
	pub start: Position,
	/// End position (exclusive).
	pub end: Position,
}

impl Range {
	/// Creates a new range.
	pub const fn new(start: Position, end: Position) -> Self {
		Self { start, end }
	}

	/// Creates a zero-length range at a position.
	pub const fn point(pos: Position) -> Self {
		Self {
			start: pos,
			end: pos,
		}
	}

	/// Creates a single-line range starting at `column` and spanning `len` columns.
	pub const fn on_line(line: u32, column: u32, len: u32) -> Self {
		Self {
			start: Position::new(line, column),
			end: Position::new(line, column + len),
		}
	}

	/// Returns true if `pos` lies within the range (end exclusive).
	pub fn contains(&self, pos: Position) -> bool {
		self.start <= pos && pos < self.end
	}
}

/// Converts a byte offset within `line` into a 1-based column.
///
/// Offsets that do not fall on a char boundary are rounded down to the
/// previous boundary.
pub fn char_column(line: &str, byte_offset: usize) -> u32 {
	let mut end = byte_offset.min(line.len());
	while !line.is_char_boundary(end) {
		end -= 1;
	}
	line[..end].chars().count() as u32 + 1
}
