//! The document-wide stack of open constructs.
//!
//! Block tags and output expressions share one stack. Block closers pop the
//! top frame whatever its kind, while output closers search downwards for the
//! nearest output frame and remove it in place, leaving any block frames
//! pushed after it untouched.

use crate::grammar::OUTPUT_OPEN_LABEL;

/// What kind of construct a frame keeps open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameKind {
	Output,
	Block(String),
}

impl FrameKind {
	/// Name used in messages: the block name, or `{{` for outputs.
	pub fn label(&self) -> &str {
		match self {
			Self::Output => OUTPUT_OPEN_LABEL,
			Self::Block(name) => name,
		}
	}
}

/// An unclosed construct and where it was opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
	pub kind: FrameKind,
	pub line: u32,
	pub column: u32,
	/// Length of the opening delimiter or tag, in characters.
	pub length: u32,
}

#[derive(Debug, Default)]
pub struct FrameStack {
	frames: Vec<Frame>,
}

impl FrameStack {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, frame: Frame) {
		self.frames.push(frame);
	}

	pub fn pop(&mut self) -> Option<Frame> {
		self.frames.pop()
	}

	/// Removes the frame nearest the top that matches `pred`.
	pub fn remove_nearest(&mut self, pred: impl Fn(&Frame) -> bool) -> Option<Frame> {
		let idx = self.frames.iter().rposition(pred)?;
		Some(self.frames.remove(idx))
	}

	pub fn len(&self) -> usize {
		self.frames.len()
	}

	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}

	/// Consumes the stack, yielding frames from top to bottom.
	pub fn drain_top_down(self) -> impl Iterator<Item = Frame> {
		self.frames.into_iter().rev()
	}
}
