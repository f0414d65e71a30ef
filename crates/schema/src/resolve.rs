//! Walking a path through a descriptor tree.

use crate::TypeDescriptor;

/// Returns true when `segment` is an array index such as `0` or `12`.
pub fn is_index_segment(segment: &str) -> bool {
	!segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// Resolves `path` against `root`.
///
/// Wrappers are stripped before every step. An `Array` is replaced by its
/// element before the segment is inspected, so both `items.0.title` and
/// `items.title` reach the element's `title` field. Index segments consume no
/// field. Any other segment must name a field of the current `Object`;
/// otherwise resolution stops with `None`.
///
/// The returned descriptor is never a wrapper.
pub fn resolve<'a, S: AsRef<str>>(root: &'a TypeDescriptor, path: &[S]) -> Option<&'a TypeDescriptor> {
	let mut current = root.unwrapped();

	for segment in path {
		let segment = segment.as_ref();
		current = current.unwrapped();

		if let TypeDescriptor::Array { element } = current {
			current = element.unwrapped();
		}

		if is_index_segment(segment) {
			continue;
		}

		match current {
			TypeDescriptor::Object { fields } => {
				current = fields.get(segment)?;
			}
			_ => {
				tracing::trace!(segment, found = %current, "path segment does not address an object");
				return None;
			}
		}
	}

	Some(current.unwrapped())
}

/// Lists the members offered for completion after a resolved descriptor.
///
/// Objects offer their fields. Arrays offer the fields of their element,
/// mirroring how [`resolve`] lets named segments reach through an array.
pub fn members(desc: &TypeDescriptor) -> Vec<(&str, &TypeDescriptor)> {
	let mut current = desc.unwrapped();
	if let TypeDescriptor::Array { element } = current {
		current = element.unwrapped();
	}
	match current {
		TypeDescriptor::Object { fields } => fields.iter().map(|(name, ty)| (name.as_str(), ty)).collect(),
		_ => Vec::new(),
	}
}
