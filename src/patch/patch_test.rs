use super::*;
use crate::arbitrary::ArbitraryValue;
use crate::Resolve;
use quickcheck_macros::quickcheck;
use serde_json::json;

fn apply(doc: &Value, ops: Vec<PatchOperation>) -> Result<Value, PatchError> {
    apply_patch(doc, &ops)
}

#[test]
fn object_sample() {
    let doc = json!({ "name": "John" });
    let modified = apply(&doc, vec![PatchOperation::add("/age", json!(30))]).unwrap();
    assert_eq!(modified, json!({ "name": "John", "age": 30 }));
    // new members are appended after the existing ones
    assert_eq!(modified.to_string(), r#"{"name":"John","age":30}"#);
    // the source document is untouched
    assert_eq!(doc, json!({ "name": "John" }));
}

#[test]
fn array_sample() {
    let doc = json!(["apple"]);
    let modified = apply(&doc, vec![PatchOperation::add("/1", json!("banana"))]).unwrap();
    assert_eq!(modified, json!(["apple", "banana"]));
}

#[test]
fn add_shifts_elements_right() {
    let doc = json!({ "foo": [1, 2, 3] });
    let modified = apply(&doc, vec![PatchOperation::add("/foo/1", json!(42))]).unwrap();
    assert_eq!(modified, json!({ "foo": [1, 42, 2, 3] }));
}

#[test]
fn add_appends_with_dash() {
    let doc = json!({ "foo": [1, 2] });
    let modified = apply(&doc, vec![PatchOperation::add("/foo/-", json!(3))]).unwrap();
    assert_eq!(modified, json!({ "foo": [1, 2, 3] }));
}

#[test]
fn add_replaces_existing_member_in_place() {
    let doc = json!({ "a": 1, "b": 2 });
    let modified = apply(&doc, vec![PatchOperation::add("/a", json!(9))]).unwrap();
    assert_eq!(modified.to_string(), r#"{"a":9,"b":2}"#);
}

#[test]
fn add_deep_target() {
    let doc = json!({ "foo": [{ "bar": [] }] });
    let modified = apply(&doc, vec![PatchOperation::add("/foo/0/bar/-", json!("x"))]).unwrap();
    assert_eq!(modified, json!({ "foo": [{ "bar": ["x"] }] }));
}

#[test]
fn add_missing_intermediate() {
    let doc = json!({ "a": {} });
    let err = apply(&doc, vec![PatchOperation::add("/a/b/c", json!(1))]).unwrap_err();
    assert!(err.is_invalid_target());
    // the message carries the remainder of the path which failed to resolve
    assert_eq!(err.to_string(), r#"Invalid "path" prop: /b"#);
}

#[test]
fn add_through_null_intermediate() {
    let doc = json!({ "a": null });
    let err = apply(&doc, vec![PatchOperation::add("/a/b", json!(1))]).unwrap_err();
    assert_eq!(err.to_string(), r#"Invalid "path" prop: /a"#);
}

#[test]
fn add_into_primitive_is_a_noop() {
    // a primitive root has nowhere to put the value and is returned as-is
    let doc = json!("scalar");
    let modified = apply(&doc, vec![PatchOperation::add("/foo", json!(1))]).unwrap();
    assert_eq!(modified, doc);
}

#[test]
fn add_with_empty_key() {
    // "/" splits into a root parent and an empty key, which is a valid
    // object member name
    let doc = json!({ "a": 1 });
    let modified = apply(&doc, vec![PatchOperation::add("/", json!(2))]).unwrap();
    assert_eq!(modified, json!({ "a": 1, "": 2 }));
}

#[test]
fn add_invalid_array_index() {
    let doc = json!({ "foo": [1] });
    let err = apply(&doc, vec![PatchOperation::add("/foo/le", json!(2))]).unwrap_err();
    assert!(err.is_failed_to_parse_index());
    assert_eq!(err.to_string(), "Invalid array index: le");

    let err = apply(&doc, vec![PatchOperation::add("/foo/5", json!(2))]).unwrap_err();
    assert!(err.is_out_of_bounds());
    assert_eq!(err.to_string(), "Index out of bounds: 5");
}

#[test]
fn remove_object_member_keeps_order() {
    let doc = json!({ "a": 1, "b": 2, "c": 3 });
    let modified = apply(&doc, vec![PatchOperation::remove("/b")]).unwrap();
    assert_eq!(modified.to_string(), r#"{"a":1,"c":3}"#);
}

#[test]
fn remove_absent_member() {
    let doc = json!({ "foo": "bar" });
    let err = apply(&doc, vec![PatchOperation::remove("/baz")]).unwrap_err();
    assert!(err.is_missing_path());
    assert_eq!(err.to_string(), r#"Missing "path" property: baz"#);
}

#[test]
fn remove_array_elements() {
    let doc = json!([1, 2, 3]);
    assert_eq!(
        apply(&doc, vec![PatchOperation::remove("/0")]).unwrap(),
        json!([2, 3])
    );
    // '-' addresses the last element when removing
    assert_eq!(
        apply(&doc, vec![PatchOperation::remove("/-")]).unwrap(),
        json!([1, 2])
    );
    let err = apply(&doc, vec![PatchOperation::remove("/5")]).unwrap_err();
    assert_eq!(err.to_string(), "Index out of bounds: 5");
}

#[test]
fn remove_missing_intermediate() {
    let doc = json!({ "a": {} });
    let err = apply(&doc, vec![PatchOperation::remove("/a/b/c")]).unwrap_err();
    assert_eq!(err.to_string(), r#"Missing "path" property: /b"#);
}

#[test]
fn remove_root_clears_the_container() {
    let doc = json!({ "name": "John" });
    let modified = apply(&doc, vec![PatchOperation::remove("")]).unwrap();
    assert_eq!(modified, json!({}));

    let doc = json!([1, 2, 3]);
    let modified = apply(&doc, vec![PatchOperation::remove("")]).unwrap();
    assert_eq!(modified, json!([]));

    let doc = json!(42);
    let modified = apply(&doc, vec![PatchOperation::remove("")]).unwrap();
    assert_eq!(modified, json!(42));
}

#[test]
fn replace_member() {
    let doc = json!({ "foo": "bar", "baz": "qux" });
    let modified = apply(&doc, vec![PatchOperation::replace("/baz", json!("boo"))]).unwrap();
    assert_eq!(modified.to_string(), r#"{"foo":"bar","baz":"boo"}"#);
}

#[test]
fn replace_missing_target_fails_like_remove() {
    let doc = json!({ "a": 1 });
    let err = apply(&doc, vec![PatchOperation::replace("/b", json!(2))]).unwrap_err();
    assert_eq!(err.to_string(), r#"Missing "path" property: b"#);
}

#[test]
fn replace_is_idempotent() {
    let doc = json!({ "a": { "b": [1, 2] } });
    let op = PatchOperation::replace("/a/b/0", json!(9));
    let once = apply(&doc, vec![op.clone()]).unwrap();
    let twice = apply(&once, vec![op]).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn replace_root() {
    // remove-then-add: clearing the root leaves an empty container, and the
    // add then inserts the value under the empty key
    let doc = json!({ "a": 1 });
    let modified = apply(&doc, vec![PatchOperation::replace("", json!("new"))]).unwrap();
    assert_eq!(modified, json!({ "": "new" }));
}

#[test]
fn copy_member() {
    let doc = json!({ "foo": { "bar": "baz" } });
    let modified = apply(&doc, vec![PatchOperation::copy("/foo/bar", "/foo/qux")]).unwrap();
    assert_eq!(modified, json!({ "foo": { "bar": "baz", "qux": "baz" } }));
}

#[test]
fn copy_null_value() {
    let doc = json!({ "gone": null });
    let modified = apply(&doc, vec![PatchOperation::copy("/gone", "/also")]).unwrap();
    assert_eq!(modified, json!({ "gone": null, "also": null }));
}

#[test]
fn copy_from_missing() {
    let doc = json!({ "a": 1 });
    let err = apply(&doc, vec![PatchOperation::copy("/x", "/y")]).unwrap_err();
    assert!(err.is_missing_from());
    assert_eq!(err.to_string(), "Missing path property: /x");
}

#[test]
fn copy_from_slash_rules() {
    let doc = json!({ "a": 1 });
    let err = apply(&doc, vec![PatchOperation::copy("x", "/y")]).unwrap_err();
    assert!(err.is_resolve());
    assert_eq!(err.to_string(), "path should start with a slash");

    let err = apply(&doc, vec![PatchOperation::copy("/a/", "/y")]).unwrap_err();
    assert_eq!(err.to_string(), "path can not end with a slash");
}

#[test]
fn move_between_objects() {
    let doc = json!({ "a": { "b": 1 }, "c": { "x": 9 } });
    let modified = apply(&doc, vec![PatchOperation::mov("/a/b", "/c/d")]).unwrap();
    assert_eq!(modified, json!({ "a": {}, "c": { "x": 9, "d": 1 } }));
    // untouched members keep their insertion order
    assert_eq!(modified.to_string(), r#"{"a":{},"c":{"x":9,"d":1}}"#);
}

#[test]
fn move_array_element_to_end() {
    let doc = json!(["a", "b", "c"]);
    let modified = apply(&doc, vec![PatchOperation::mov("/0", "/-")]).unwrap();
    assert_eq!(modified, json!(["b", "c", "a"]));
}

#[test]
fn move_from_missing() {
    let doc = json!({ "a": {} });
    let err = apply(&doc, vec![PatchOperation::mov("/a/x", "/b")]).unwrap_err();
    assert_eq!(err.to_string(), "Missing path property: /a/x");
}

#[test]
fn move_into_own_subtree() {
    // the removal runs first, so by the time the add executes the
    // destination's ancestor is gone
    let doc = json!({ "a": { "x": 1 }, "b": 2 });
    let err = apply(&doc, vec![PatchOperation::mov("/a", "/a/y")]).unwrap_err();
    assert_eq!(err.to_string(), r#"Invalid "path" prop: /a"#);
}

#[test]
fn from_is_required() {
    for op in ["copy", "move"] {
        let operation = PatchOperation {
            op: op.into(),
            from: None,
            path: "/a".into(),
            value: Value::Null,
        };
        let err = apply(&json!({}), vec![operation]).unwrap_err();
        assert!(err.is_from_required());
        assert_eq!(
            err.to_string(),
            r#"The "from" MUST exist for "copy" and "move" operation."#
        );
    }
}

#[test]
fn from_check_precedes_path_check() {
    let operation = PatchOperation {
        op: "move".into(),
        from: None,
        path: "no-slash".into(),
        value: Value::Null,
    };
    let err = apply(&json!({}), vec![operation]).unwrap_err();
    assert!(err.is_from_required());
}

#[test]
fn unsupported_op() {
    let operation = PatchOperation {
        op: "test".into(),
        from: None,
        path: "/a".into(),
        value: json!(1),
    };
    let err = apply(&json!({ "a": 1 }), vec![operation]).unwrap_err();
    assert!(err.is_unsupported_op());
    assert_eq!(err.to_string(), "Supported op: add, remove, replace, move, copy");
}

#[test]
fn op_is_case_insensitive() {
    let doc = json!({ "a": 1 });
    let mut operation = PatchOperation::add("/b", json!(2));
    operation.op = "Add".into();
    assert_eq!(
        apply(&doc, vec![operation]).unwrap(),
        json!({ "a": 1, "b": 2 })
    );

    let mut operation = PatchOperation::remove("/a");
    operation.op = "REMOVE".into();
    assert_eq!(apply(&doc, vec![operation]).unwrap(), json!({}));
}

#[test]
fn path_must_start_with_a_slash() {
    let doc = json!({ "a": 1 });
    let err = apply(&doc, vec![PatchOperation::add("age", json!(30))]).unwrap_err();
    assert!(err.is_no_leading_slash());
    assert_eq!(
        err.to_string(),
        "Invalid path property, it should start with a slash"
    );
}

#[test]
fn operations_chain_in_order() {
    let doc = json!({});
    let modified = apply(
        &doc,
        vec![
            PatchOperation::add("/a", json!([])),
            PatchOperation::add("/a/-", json!(1)),
            PatchOperation::add("/a/-", json!(2)),
            PatchOperation::mov("/a/0", "/first"),
        ],
    )
    .unwrap();
    assert_eq!(modified, json!({ "a": [2], "first": 1 }));
}

#[test]
fn failure_leaves_no_partial_document() {
    let doc = json!({ "foo": "bar" });
    let ops = vec![
        PatchOperation::add("/baz", json!("qux")),
        PatchOperation::remove("/nonexistent"),
    ];
    assert!(apply(&doc, ops).is_err());
    // the input is borrowed and rebuilt, never mutated
    assert_eq!(doc, json!({ "foo": "bar" }));
}

#[test]
fn add_then_remove_round_trips() {
    let doc = json!({ "name": "John" });
    let added = apply(&doc, vec![PatchOperation::add("/age", json!(30))]).unwrap();
    let removed = apply(&added, vec![PatchOperation::remove("/age")]).unwrap();
    assert_eq!(removed, doc);
}

#[test]
fn patch_deserializes_from_json() {
    let patch: Patch = serde_json::from_str(
        r#"[
            { "op": "add", "path": "/age", "value": 30 },
            { "op": "copy", "from": "/name", "path": "/alias" }
        ]"#,
    )
    .unwrap();
    let doc = json!({ "name": "John" });
    assert_eq!(
        patch.apply(&doc).unwrap(),
        json!({ "name": "John", "age": 30, "alias": "John" })
    );
}

#[test]
fn operation_serialization_skips_absent_from() {
    let op = PatchOperation::add("/a", json!(1));
    assert_eq!(
        serde_json::to_string(&op).unwrap(),
        r#"{"op":"add","path":"/a","value":1}"#
    );
    let op = PatchOperation::mov("/a", "/b");
    assert_eq!(
        serde_json::to_string(&op).unwrap(),
        r#"{"op":"move","from":"/a","path":"/b","value":null}"#
    );
}

#[test]
fn missing_value_defaults_to_null() {
    let patch: Patch =
        serde_json::from_str(r#"[{ "op": "add", "path": "/a" }]"#).unwrap();
    assert_eq!(patch.apply(&json!({})).unwrap(), json!({ "a": null }));
}

#[quickcheck]
fn empty_patch_is_identity(doc: ArbitraryValue) -> bool {
    apply_patch(&doc.0, &[]).unwrap() == doc.0
}

#[quickcheck]
fn root_lookup_is_identity(doc: ArbitraryValue) -> bool {
    doc.0.get_node("").unwrap() == Some(&doc.0)
}
