use std::path::Path as FsPath;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemaError};
use crate::{Path, TypeDescriptor, resolve};

/// Top-level template variables and their descriptors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaSet {
	roots: IndexMap<String, TypeDescriptor>,
}

impl SchemaSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds or replaces a top-level variable.
	pub fn insert(&mut self, name: impl Into<String>, desc: TypeDescriptor) -> Option<TypeDescriptor> {
		self.roots.insert(name.into(), desc)
	}

	pub fn get(&self, name: &str) -> Option<&TypeDescriptor> {
		self.roots.get(name)
	}

	/// Iterates top-level variables in declaration order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeDescriptor)> {
		self.roots.iter().map(|(name, desc)| (name.as_str(), desc))
	}

	pub fn len(&self) -> usize {
		self.roots.len()
	}

	pub fn is_empty(&self) -> bool {
		self.roots.is_empty()
	}

	/// Resolves a full path: the head selects the root, the tail is walked
	/// with [`resolve`].
	pub fn resolve(&self, path: &Path) -> Option<&TypeDescriptor> {
		self.resolve_segments(path.segments())
	}

	/// Like [`SchemaSet::resolve`], for a bare segment slice.
	pub fn resolve_segments<S: AsRef<str>>(&self, segments: &[S]) -> Option<&TypeDescriptor> {
		let (head, tail) = segments.split_first()?;
		resolve(self.get(head.as_ref())?, tail)
	}

	/// Parses a schema set from its JSON form.
	pub fn from_json(input: &str) -> Result<Self> {
		let de = &mut serde_json::Deserializer::from_str(input);
		let set: Self = serde_path_to_error::deserialize(de).map_err(|err| SchemaError::Parse {
			path: err.path().to_string(),
			message: err.into_inner().to_string(),
		})?;
		tracing::debug!(variables = set.len(), "loaded schema set");
		Ok(set)
	}

	/// Loads a schema set from a JSON file.
	pub fn load(path: impl AsRef<FsPath>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| SchemaError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::from_json(&content)
	}
}

impl FromIterator<(String, TypeDescriptor)> for SchemaSet {
	fn from_iter<I: IntoIterator<Item = (String, TypeDescriptor)>>(iter: I) -> Self {
		Self {
			roots: iter.into_iter().collect(),
		}
	}
}
