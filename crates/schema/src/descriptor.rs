//! The type descriptor tree.
//!
//! Descriptors arrive from the embedding application, usually deserialized
//! from a schema file (see [`crate::SchemaSet::from_json`]). They are
//! internally tagged on `type`:
//!
//! ```json
//! { "type": "object", "fields": { "name": { "type": "string" } } }
//! ```
//!
//! Kinds the loader does not know decode to [`TypeDescriptor::Unknown`].

use std::fmt;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// A node describing the shape of a template variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TypeDescriptor {
	/// Named fields, in declaration order.
	Object {
		#[serde(default)]
		fields: IndexMap<String, TypeDescriptor>,
	},
	/// Homogeneous list.
	Array { element: Box<TypeDescriptor> },
	String,
	Number,
	Boolean,
	Date,
	/// A single fixed value.
	Literal { value: LiteralValue },
	/// A closed set of string values.
	Enum { values: IndexSet<String> },
	/// Any one of several shapes.
	Union { options: Vec<TypeDescriptor> },
	/// Wrapper: the value may be absent.
	Optional { inner: Box<TypeDescriptor> },
	/// Wrapper: the value may be null.
	Nullable { inner: Box<TypeDescriptor> },
	/// Wrapper: the value falls back to `default` when absent.
	WithDefault {
		inner: Box<TypeDescriptor>,
		#[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
		default: serde_json::Value,
	},
	/// A kind this crate does not model.
	#[serde(other)]
	Unknown,
}

/// Value carried by [`TypeDescriptor::Literal`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
	Null,
	Bool(bool),
	Number(serde_json::Number),
	String(String),
}

/// Quotes `s` as a JSON string literal, escaping quotes and control characters.
fn quoted(s: &str) -> String {
	serde_json::Value::from(s).to_string()
}

impl fmt::Display for LiteralValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Null => f.write_str("null"),
			Self::Bool(b) => write!(f, "{b}"),
			Self::Number(n) => write!(f, "{n}"),
			Self::String(s) => f.write_str(&quoted(s)),
		}
	}
}

impl TypeDescriptor {
	/// Builds an object descriptor from `(name, descriptor)` pairs.
	pub fn object<K, I>(fields: I) -> Self
	where
		K: Into<String>,
		I: IntoIterator<Item = (K, TypeDescriptor)>,
	{
		Self::Object {
			fields: fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
		}
	}

	/// Builds an array descriptor.
	pub fn array(element: TypeDescriptor) -> Self {
		Self::Array {
			element: Box::new(element),
		}
	}

	/// Builds an enum descriptor.
	pub fn enumeration<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
		Self::Enum {
			values: values.into_iter().map(Into::into).collect(),
		}
	}

	/// Builds a union descriptor.
	pub fn union(options: impl IntoIterator<Item = TypeDescriptor>) -> Self {
		Self::Union {
			options: options.into_iter().collect(),
		}
	}

	/// Builds a literal descriptor.
	pub fn literal(value: LiteralValue) -> Self {
		Self::Literal { value }
	}

	/// Wraps `self` in [`TypeDescriptor::Optional`].
	pub fn optional(self) -> Self {
		Self::Optional { inner: Box::new(self) }
	}

	/// Wraps `self` in [`TypeDescriptor::Nullable`].
	pub fn nullable(self) -> Self {
		Self::Nullable { inner: Box::new(self) }
	}

	/// Wraps `self` in [`TypeDescriptor::WithDefault`].
	pub fn with_default(self, default: serde_json::Value) -> Self {
		Self::WithDefault {
			inner: Box::new(self),
			default,
		}
	}

	/// Returns true for `Optional`, `Nullable` and `WithDefault`.
	pub fn is_wrapper(&self) -> bool {
		self.wrapped_inner().is_some()
	}

	fn wrapped_inner(&self) -> Option<&TypeDescriptor> {
		match self {
			Self::Optional { inner } | Self::Nullable { inner } | Self::WithDefault { inner, .. } => Some(inner),
			Self::Object { .. }
			| Self::Array { .. }
			| Self::String
			| Self::Number
			| Self::Boolean
			| Self::Date
			| Self::Literal { .. }
			| Self::Enum { .. }
			| Self::Union { .. }
			| Self::Unknown => None,
		}
	}

	/// Strips every wrapper layer, returning the first structural descriptor.
	pub fn unwrapped(&self) -> &TypeDescriptor {
		let mut current = self;
		while let Some(inner) = current.wrapped_inner() {
			current = inner;
		}
		current
	}

	/// Renders the descriptor as shown in hover text and completion details.
	pub fn render(&self) -> String {
		match self {
			Self::Optional { inner } | Self::Nullable { inner } | Self::WithDefault { inner, .. } => inner.render(),
			Self::Object { .. } => "Object".to_string(),
			Self::String => "String".to_string(),
			Self::Number => "Number".to_string(),
			Self::Boolean => "Boolean".to_string(),
			Self::Date => "Date".to_string(),
			Self::Array { element } => format!("Array<{}>", element.render()),
			Self::Literal { value } => value.to_string(),
			Self::Enum { values } => values.iter().map(|v| quoted(v)).collect::<Vec<_>>().join(" | "),
			Self::Union { options } => options.iter().map(TypeDescriptor::render).collect::<Vec<_>>().join(" | "),
			Self::Unknown => "Unknown".to_string(),
		}
	}
}

impl fmt::Display for TypeDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render())
	}
}
