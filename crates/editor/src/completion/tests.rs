use lantern_schema::TypeDescriptor;
use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;
use crate::host::MemoryHost;

const DOC: DocumentId = DocumentId(3);

fn schemas() -> SchemaSet {
	let mut set = SchemaSet::new();
	set.insert(
		"product",
		TypeDescriptor::object([
			("title", TypeDescriptor::String),
			("price", TypeDescriptor::Number.optional()),
			(
				"images",
				TypeDescriptor::array(TypeDescriptor::object([
					("src", TypeDescriptor::String),
					("alt", TypeDescriptor::String.nullable()),
				])),
			),
		]),
	);
	set.insert("cart", TypeDescriptor::object([("item_count", TypeDescriptor::Number)]));
	set
}

fn complete_at(line: &str, column: u32) -> CompletionResult {
	let mut host = MemoryHost::new();
	host.open(DOC, line);
	complete(&host, DOC, &schemas(), Position::new(1, column))
}

#[rstest]
#[case("{{ ", 4)]
#[case("{{ pro", 7)]
#[case("", 1)]
fn test_top_level_variables(#[case] line: &str, #[case] column: u32) {
	let result = complete_at(line, column);
	assert_eq!(result.labels(), ["product", "cart"]);
	assert!(result.items.iter().all(|item| item.kind == CompletionKind::Variable));
	assert_eq!(result.items[1].detail.as_deref(), Some("Object"));
}

#[rstest]
#[case("{{ product.", 12, &["title", "price", "images"])]
#[case("{{ product.ti", 14, &["title", "price", "images"])]
#[case("{{ product.images[0].", 22, &["src", "alt"])]
#[case("{{ product.images.", 19, &["src", "alt"])]
#[case("{{ cart.item_count.", 20, &[])]
#[case("{{ shop.", 9, &[])]
fn test_members(#[case] line: &str, #[case] column: u32, #[case] expected: &[&str]) {
	let result = complete_at(line, column);
	assert_eq!(result.labels(), expected);
	assert!(result.items.iter().all(|item| item.kind == CompletionKind::Field));
}

#[test]
fn test_items_carry_rendered_type() {
	let result = complete_at("{{ product.", 12);
	let details: Vec<_> = result.items.iter().map(|item| item.detail.as_deref()).collect();
	assert_eq!(details, [Some("String"), Some("Number"), Some("Array<Object>")]);
	assert_eq!(result.items[0].insert_text, "title");
}

#[test]
fn test_range_covers_partial_word() {
	let result = complete_at("{{ product.ti }}", 14);
	assert_eq!(result.items[0].range, Range::new(Position::new(1, 12), Position::new(1, 14)));
}

#[test]
fn test_range_empty_after_separator() {
	let result = complete_at("{{ product. }}", 12);
	assert_eq!(result.items[0].range, Range::point(Position::new(1, 12)));
}

#[rstest]
#[case("{{ product.images[0]", 21)]
#[case("{{ product.images[0] }}", 21)]
fn test_nothing_right_after_index(#[case] line: &str, #[case] column: u32) {
	assert!(complete_at(line, column).is_empty());
}

#[test]
fn test_missing_line_is_empty() {
	let host = MemoryHost::new();
	assert!(complete(&host, DOC, &schemas(), Position::new(1, 1)).is_empty());
}
