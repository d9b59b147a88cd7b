use despot_core::attr::{Type, Value};

use indexmap::IndexMap;

// ---------------------------------------------------------------------------
// Scalar values match their own type
// ---------------------------------------------------------------------------

#[test]
fn bool_is_a_bool() {
    assert!(Value::Bool(true).is_a(&Type::Bool));
    assert!(Value::Bool(false).is_a(&Type::Bool));
}

#[test]
fn i64_is_a_number() {
    assert!(Value::I64(42).is_a(&Type::Number));
    assert!(Value::I64(i64::MIN).is_a(&Type::Number));
}

#[test]
fn f64_is_a_number() {
    assert!(Value::F64(0.5).is_a(&Type::Number));
    assert!(Value::F64(f64::NAN).is_a(&Type::Number));
}

#[test]
fn string_is_a_string() {
    assert!(Value::from("hello").is_a(&Type::String));
    assert!(Value::from("").is_a(&Type::String));
}

#[test]
fn object_is_an_object() {
    let object = Value::Object(IndexMap::new());
    assert!(object.is_a(&Type::Object));
}

#[test]
fn non_empty_object_is_an_object() {
    let mut fields = IndexMap::new();
    fields.insert("name".to_string(), Value::from("Göran"));
    assert!(Value::Object(fields).is_a(&Type::Object));
}

// ---------------------------------------------------------------------------
// Scalar values do NOT match a different type
// ---------------------------------------------------------------------------

#[test]
fn bool_not_a_string() {
    assert!(!Value::Bool(true).is_a(&Type::String));
}

#[test]
fn bool_not_a_number() {
    assert!(!Value::Bool(true).is_a(&Type::Number));
}

#[test]
fn string_not_a_bool() {
    assert!(!Value::from("true").is_a(&Type::Bool));
}

#[test]
fn numeric_string_not_a_number() {
    assert!(!Value::from("5").is_a(&Type::Number));
}

#[test]
fn i64_not_a_string() {
    assert!(!Value::I64(5).is_a(&Type::String));
}

#[test]
fn f64_not_a_bool() {
    assert!(!Value::F64(1.0).is_a(&Type::Bool));
}

#[test]
fn object_not_a_string() {
    assert!(!Value::Object(IndexMap::new()).is_a(&Type::String));
}

#[test]
fn string_not_an_object() {
    assert!(!Value::from("{}").is_a(&Type::Object));
}

// ---------------------------------------------------------------------------
// Null matches no type
// ---------------------------------------------------------------------------

#[test]
fn null_not_a_bool() {
    assert!(!Value::Null.is_a(&Type::Bool));
}

#[test]
fn null_not_a_number() {
    assert!(!Value::Null.is_a(&Type::Number));
}

#[test]
fn null_not_an_object() {
    assert!(!Value::Null.is_a(&Type::Object));
}

#[test]
fn null_not_a_string() {
    assert!(!Value::Null.is_a(&Type::String));
}

// ---------------------------------------------------------------------------
// Lists carry no primitive kind and match no type
// ---------------------------------------------------------------------------

#[test]
fn list_not_an_object() {
    let list = Value::List(vec![Value::I64(1)]);
    assert!(!list.is_a(&Type::Object));
}

#[test]
fn empty_list_matches_nothing() {
    for ty in [Type::Bool, Type::Number, Type::Object, Type::String] {
        assert!(!Value::List(vec![]).is_a(&ty));
    }
}
