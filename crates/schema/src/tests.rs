use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use serde_json::json;

use super::*;

fn user_schema() -> SchemaSet {
	let mut set = SchemaSet::new();
	set.insert(
		"user",
		TypeDescriptor::object([
			("name", TypeDescriptor::String),
			("tags", TypeDescriptor::array(TypeDescriptor::String)),
			(
				"address",
				TypeDescriptor::object([("city", TypeDescriptor::String), ("zip", TypeDescriptor::Number)])
					.optional(),
			),
			(
				"orders",
				TypeDescriptor::array(
					TypeDescriptor::object([("total", TypeDescriptor::Number), ("placed_at", TypeDescriptor::Date)])
						.nullable(),
				),
			),
		]),
	);
	set.insert("shop", TypeDescriptor::object([("open", TypeDescriptor::Boolean)]).with_default(json!({})));
	set
}

fn resolve_str(set: &SchemaSet, expr: &str) -> Option<String> {
	set.resolve(&Path::parse(expr)).map(TypeDescriptor::render)
}

#[rstest]
#[case("user", Some("Object"))]
#[case("user.name", Some("String"))]
#[case("user.tags", Some("Array<String>"))]
#[case("user.tags.0", Some("String"))]
#[case("user.tags[3]", Some("String"))]
#[case("user.address.city", Some("String"))]
#[case("user.orders[0].total", Some("Number"))]
#[case("user.orders.placed_at", Some("Date"))]
#[case("shop.open", Some("Boolean"))]
#[case("user.missing", None)]
#[case("user.name.length", None)]
#[case("nobody", None)]
#[case("user.address.city.0", Some("String"))]
fn test_schema_set_resolve(#[case] expr: &str, #[case] expected: Option<&str>) {
	assert_eq!(resolve_str(&user_schema(), expr).as_deref(), expected);
}

#[test]
fn test_resolve_empty_path_unwraps_root() {
	let root = TypeDescriptor::Number.optional().nullable();
	assert_eq!(resolve::<&str>(&root, &[]), Some(&TypeDescriptor::Number));
}

#[test]
fn test_resolve_does_not_walk_unions() {
	let root = TypeDescriptor::union([
		TypeDescriptor::object([("a", TypeDescriptor::String)]),
		TypeDescriptor::Number,
	]);
	assert_eq!(resolve(&root, &["a"]), None);
}

#[test]
fn test_array_of_arrays_unwraps_one_level_per_segment() {
	let root = TypeDescriptor::object([(
		"grid",
		TypeDescriptor::array(TypeDescriptor::array(TypeDescriptor::Boolean)),
	)]);
	assert_eq!(
		resolve(&root, &["grid", "0"]),
		Some(&TypeDescriptor::array(TypeDescriptor::Boolean))
	);
	assert_eq!(resolve(&root, &["grid", "0", "1"]), Some(&TypeDescriptor::Boolean));
}

#[rstest]
#[case(TypeDescriptor::String, "String")]
#[case(TypeDescriptor::Number.optional(), "Number")]
#[case(TypeDescriptor::array(TypeDescriptor::Date.nullable()), "Array<Date>")]
#[case(TypeDescriptor::literal(LiteralValue::String("draft".into())), "\"draft\"")]
#[case(TypeDescriptor::literal(LiteralValue::Bool(true)), "true")]
#[case(TypeDescriptor::literal(LiteralValue::Null), "null")]
#[case(TypeDescriptor::enumeration(["a", "b"]), "\"a\" | \"b\"")]
#[case(TypeDescriptor::literal(LiteralValue::String("say \"hi\"".into())), r#""say \"hi\"""#)]
#[case(TypeDescriptor::enumeration(["a\"b", "c\\d"]), r#""a\"b" | "c\\d""#)]
#[case(
	TypeDescriptor::union([TypeDescriptor::String, TypeDescriptor::array(TypeDescriptor::Number).optional()]),
	"String | Array<Number>"
)]
#[case(TypeDescriptor::object([("x", TypeDescriptor::String)]).with_default(json!(null)), "Object")]
#[case(TypeDescriptor::Unknown, "Unknown")]
fn test_render(#[case] desc: TypeDescriptor, #[case] expected: &str) {
	assert_eq!(desc.render(), expected);
	assert_eq!(desc.to_string(), expected);
}

#[test]
fn test_members_of_object_and_array() {
	let set = user_schema();
	let user = set.get("user").unwrap();
	let names: Vec<_> = members(user).into_iter().map(|(name, _)| name).collect();
	assert_eq!(names, ["name", "tags", "address", "orders"]);

	let orders = set.resolve(&Path::parse("user.orders")).unwrap();
	let names: Vec<_> = members(orders).into_iter().map(|(name, _)| name).collect();
	assert_eq!(names, ["total", "placed_at"]);

	assert!(members(&TypeDescriptor::String).is_empty());
}

#[test]
fn test_from_json() {
	let set = SchemaSet::from_json(
		r#"{
			"product": {
				"type": "object",
				"fields": {
					"title": { "type": "string" },
					"price": { "type": "with_default", "inner": { "type": "number" }, "default": 0 },
					"status": { "type": "enum", "values": ["active", "archived"] },
					"kind": { "type": "literal", "value": 3 },
					"images": { "type": "array", "element": { "type": "optional", "inner": { "type": "object", "fields": { "src": { "type": "string" } } } } },
					"meta": { "type": "bigint" }
				}
			}
		}"#,
	)
	.unwrap();

	assert_eq!(set.len(), 1);
	assert_eq!(resolve_str(&set, "product.title").as_deref(), Some("String"));
	assert_eq!(resolve_str(&set, "product.price").as_deref(), Some("Number"));
	assert_eq!(resolve_str(&set, "product.status").as_deref(), Some("\"active\" | \"archived\""));
	assert_eq!(resolve_str(&set, "product.kind").as_deref(), Some("3"));
	assert_eq!(resolve_str(&set, "product.images[0].src").as_deref(), Some("String"));
	assert_eq!(resolve_str(&set, "product.meta").as_deref(), Some("Unknown"));
}

#[test]
fn test_from_json_reports_path() {
	let err = SchemaSet::from_json(r#"{ "user": { "type": "array" } }"#).unwrap_err();
	match err {
		SchemaError::Parse { path, message } => {
			assert!(path.contains("user"), "unexpected path: {path}");
			assert!(message.contains("element"), "unexpected message: {message}");
		}
		other => panic!("expected parse error, got {other:?}"),
	}
}

#[test]
fn test_load_from_file() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("schema.json");
	std::fs::write(&path, r#"{ "cart": { "type": "object", "fields": { "item_count": { "type": "number" } } } }"#)
		.unwrap();

	let set = SchemaSet::load(&path).unwrap();
	assert_eq!(resolve_str(&set, "cart.item_count").as_deref(), Some("Number"));

	let missing = SchemaSet::load(dir.path().join("absent.json")).unwrap_err();
	assert!(matches!(missing, SchemaError::Io { .. }));
}

fn arb_leaf() -> impl Strategy<Value = TypeDescriptor> {
	prop_oneof![
		Just(TypeDescriptor::String),
		Just(TypeDescriptor::Number),
		Just(TypeDescriptor::Boolean),
		Just(TypeDescriptor::Date),
		Just(TypeDescriptor::Unknown),
		prop::collection::vec("[a-c]", 1..3).prop_map(|values| TypeDescriptor::enumeration(values)),
	]
}

fn arb_descriptor() -> impl Strategy<Value = TypeDescriptor> {
	arb_leaf().prop_recursive(4, 48, 4, |inner| {
		prop_oneof![
			prop::collection::vec(("[a-c]", inner.clone()), 0..4).prop_map(|fields| TypeDescriptor::object(fields)),
			inner.clone().prop_map(TypeDescriptor::array),
			inner.clone().prop_map(TypeDescriptor::optional),
			inner.clone().prop_map(TypeDescriptor::nullable),
			inner.clone().prop_map(|d| d.with_default(serde_json::Value::Null)),
			prop::collection::vec(inner, 1..3).prop_map(|options| TypeDescriptor::union(options)),
		]
	})
}

fn arb_path() -> impl Strategy<Value = Vec<String>> {
	prop::collection::vec(prop_oneof!["[a-c]", "[0-9]"], 0..5)
}

fn wrap(desc: TypeDescriptor, layers: &[u8]) -> TypeDescriptor {
	layers.iter().fold(desc, |d, layer| match layer % 3 {
		0 => d.optional(),
		1 => d.nullable(),
		_ => d.with_default(json!(1)),
	})
}

proptest! {
	/// Resolving a path in one go equals resolving a prefix and then the rest.
	#[test]
	fn prop_resolve_composes(root in arb_descriptor(), path in arb_path(), split in 0usize..5) {
		let split = split.min(path.len());
		let (head, rest) = path.split_at(split);
		if let Some(mid) = resolve(&root, head) {
			prop_assert_eq!(resolve(&root, &path), resolve(mid, rest));
		}
	}

	/// Results are never wrappers.
	#[test]
	fn prop_resolve_returns_unwrapped(root in arb_descriptor(), path in arb_path()) {
		if let Some(found) = resolve(&root, &path) {
			prop_assert!(!found.is_wrapper());
		}
	}

	/// Wrapper chains around an object are transparent to resolution and rendering.
	#[test]
	fn prop_wrappers_are_transparent(
		fields in prop::collection::vec(("[a-c]", arb_descriptor()), 0..4),
		layers in prop::collection::vec(any::<u8>(), 0..6),
		path in arb_path(),
	) {
		let object = TypeDescriptor::object(fields);
		let wrapped = wrap(object.clone(), &layers);
		prop_assert_eq!(resolve(&wrapped, &path), resolve(&object, &path));
		prop_assert_eq!(wrapped.render(), object.render());
		prop_assert_eq!(wrapped.unwrapped(), &object);
	}
}
