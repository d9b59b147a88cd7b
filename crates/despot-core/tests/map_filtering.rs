use despot_core::attr::{Type, Value};
use despot_core::{attrs, map_attributes, MapOptions, Schema};

use pretty_assertions::assert_eq;

fn names() -> Schema {
    Schema::builder()
        .prop("first", Type::String)
        .prop("last", Type::String)
        .build()
        .unwrap()
}

// ---------------------------------------------------------------------------
// Declared, type-matching properties pass through
// ---------------------------------------------------------------------------

#[test]
fn declared_properties_pass_through() {
    let incoming = attrs! { "first" => "Gustaf", "last" => "Forsslund" };
    let output = map_attributes(&incoming, &names(), None, &MapOptions::new());
    assert_eq!(output, incoming);
}

#[test]
fn unknown_keys_are_dropped() {
    let incoming = attrs! {
        "first" => "Gustaf",
        "last" => "Forsslund",
        "animal" => "monkey",
    };
    let output = map_attributes(&incoming, &names(), None, &MapOptions::new());
    assert_eq!(output, attrs! { "first" => "Gustaf", "last" => "Forsslund" });
}

#[test]
fn output_keys_are_a_subset_of_the_schema() {
    let schema = Schema::builder().prop("first", Type::String).build().unwrap();
    let incoming = attrs! {
        "first" => "Gustaf",
        "last" => "Forsslund",
        "fruit" => "banana",
        "count" => 3,
    };

    let output = map_attributes(&incoming, &schema, None, &MapOptions::new());

    assert_eq!(output.keys().collect::<Vec<_>>(), ["first"]);
}

#[test]
fn empty_incoming_yields_empty_output() {
    let output = map_attributes(&attrs! {}, &names(), None, &MapOptions::new());
    assert!(output.is_empty());
}

#[test]
fn empty_schema_drops_everything() {
    let schema = Schema::builder().build().unwrap();
    let incoming = attrs! { "first" => "Gustaf" };
    let output = map_attributes(&incoming, &schema, None, &MapOptions::new());
    assert!(output.is_empty());
}

#[test]
fn output_follows_schema_declaration_order() {
    let schema = Schema::builder()
        .prop("b", Type::Number)
        .prop("a", Type::Number)
        .build()
        .unwrap();
    let incoming = attrs! { "a" => 1, "b" => 2 };

    let output = map_attributes(&incoming, &schema, None, &MapOptions::new());

    assert_eq!(output.keys().collect::<Vec<_>>(), ["b", "a"]);
}

// ---------------------------------------------------------------------------
// Type mismatches are dropped
// ---------------------------------------------------------------------------

#[test]
fn numeric_string_is_not_a_number() {
    let schema = Schema::builder().prop("count", Type::Number).build().unwrap();
    let incoming = attrs! { "count" => "5" };

    let output = map_attributes(&incoming, &schema, None, &MapOptions::new());

    assert!(output.is_empty());
}

#[test]
fn number_accepts_integer_and_float() {
    let schema = Schema::builder()
        .prop("count", Type::Number)
        .prop("ratio", Type::Number)
        .build()
        .unwrap();
    let incoming = attrs! { "count" => 5, "ratio" => 0.5 };

    let output = map_attributes(&incoming, &schema, None, &MapOptions::new());

    assert_eq!(output, incoming);
}

#[test]
fn bool_and_object_are_checked() {
    let schema = Schema::builder()
        .prop("active", Type::Bool)
        .prop("meta", Type::Object)
        .build()
        .unwrap();
    let incoming = attrs! {
        "active" => "true",
        "meta" => attrs! { "k" => 1 },
    };

    let output = map_attributes(&incoming, &schema, None, &MapOptions::new());

    assert_eq!(output.keys().collect::<Vec<_>>(), ["meta"]);
}

#[test]
fn null_is_dropped() {
    let incoming = attrs! { "first" => Value::Null, "last" => "Forsslund" };
    let output = map_attributes(&incoming, &names(), None, &MapOptions::new());
    assert_eq!(output, attrs! { "last" => "Forsslund" });
}

#[test]
fn list_is_dropped_even_for_object_properties() {
    let schema = Schema::builder().prop("meta", Type::Object).build().unwrap();
    let incoming = attrs! { "meta" => Value::List(vec![Value::I64(1)]) };

    let output = map_attributes(&incoming, &schema, None, &MapOptions::new());

    assert!(output.is_empty());
}

// ---------------------------------------------------------------------------
// Inputs are left untouched
// ---------------------------------------------------------------------------

#[test]
fn incoming_attributes_are_not_mutated() {
    let incoming = attrs! { "first" => "Gustaf", "animal" => "monkey" };
    let before = incoming.clone();

    map_attributes(&incoming, &names(), None, &MapOptions::new());

    assert_eq!(incoming, before);
}
