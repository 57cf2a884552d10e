// Keycase Integration Tests
//
// End-to-end checks through the public API: JSON payload in, keys
// rewritten through a shared cache, JSON payload out.

use keycase_core::inflection::{camelize, camelize_lower, dasherize, underscore};
use keycase_core::{Convention, Key, KeyTransform, Mapping, Value};
use serde_json::json;

fn apply(transform: &KeyTransform, json: serde_json::Value, convention: Convention) -> serde_json::Value {
    transform.apply_convention(Value::from(json), convention).into()
}

#[test]
fn test_literal_examples() {
    assert_eq!(underscore("SomeKey"), "some_key");
    assert_eq!(camelize("some_key"), "SomeKey");
    assert_eq!(camelize_lower("some_key"), "someKey");
    assert_eq!(dasherize("some_key"), "some-key");
    assert_eq!(underscore("some-key"), "some_key");
    assert_eq!(underscore("HTTPServer"), "http_server");
    assert_eq!(camelize("http_server"), "HttpServer");
}

#[test]
fn test_json_api_style_payload() {
    let transform = KeyTransform::new();
    let payload = json!({
        "data": {
            "id": "1",
            "type": "blog_posts",
            "attributes": { "post_title": "Hello", "published_at": null },
            "relationships": {
                "primary_author": { "data": { "id": "7", "type": "people" } }
            }
        },
        "included": [
            { "id": "7", "type": "people", "attributes": { "first_name": "Ada" } }
        ]
    });

    let dashed = apply(&transform, payload.clone(), Convention::Dash);
    assert_eq!(
        dashed,
        json!({
            "data": {
                "id": "1",
                "type": "blog_posts",
                "attributes": { "post-title": "Hello", "published-at": null },
                "relationships": {
                    "primary-author": { "data": { "id": "7", "type": "people" } }
                }
            },
            "included": [
                { "id": "7", "type": "people", "attributes": { "first-name": "Ada" } }
            ]
        })
    );

    // Incoming payloads are underscored back to the original form
    assert_eq!(apply(&transform, dashed, Convention::Underscore), payload);
}

#[test]
fn test_sequence_preserves_order_and_length() {
    let transform = KeyTransform::new();
    let input = json!([
        { "item_one": 1 },
        "scalar",
        [{ "inner_key": 2 }],
        { "item_two": 3 },
        null
    ]);
    let output = apply(&transform, input, Convention::CamelLower);

    let items = output.as_array().unwrap();
    assert_eq!(items.len(), 5);
    assert_eq!(items[0], json!({ "itemOne": 1 }));
    assert_eq!(items[1], json!("scalar"));
    assert_eq!(items[2], json!([{ "innerKey": 2 }]));
    assert_eq!(items[3], json!({ "itemTwo": 3 }));
    assert_eq!(items[4], json!(null));
}

#[test]
fn test_repeated_keys_hit_cache() {
    let transform = KeyTransform::new();
    let records: Vec<serde_json::Value> = (0..50)
        .map(|i| json!({ "record_id": i, "display_name": format!("r{i}") }))
        .collect();

    let output = apply(&transform, serde_json::Value::Array(records), Convention::Camel);
    assert_eq!(output[49], json!({ "RecordId": 49, "DisplayName": "r49" }));

    let stats = transform.cache().stats();
    assert_eq!(stats.misses, 2);
    assert_eq!(stats.hits, 98);
    assert_eq!(stats.identifiers, 2);
}

#[test]
fn test_cache_snapshot_after_transform() {
    let transform = KeyTransform::new();
    apply(&transform, json!({ "user_name": { "first_name": 1 } }), Convention::Dash);
    apply(&transform, json!({ "user_name": 1 }), Convention::Camel);

    let snapshot = transform.cache().snapshot();
    assert_eq!(snapshot["user_name"][&Convention::Dash], "user-name");
    assert_eq!(snapshot["user_name"][&Convention::Camel], "UserName");
    assert_eq!(snapshot["first_name"][&Convention::Dash], "first-name");
    assert!(!snapshot["first_name"].contains_key(&Convention::Camel));
}

#[test]
fn test_single_key_entry_point() {
    let transform = KeyTransform::new();
    assert_eq!(transform.convert_identifier("related_link", Convention::Dash), "related-link");
    assert_eq!(
        transform.transform_key(Key::symbol("relatedLink"), Convention::Underscore),
        Key::symbol("related_link")
    );
}

#[test]
fn test_every_key_changes_only_keys() {
    let transform = KeyTransform::new();
    let mut map = Mapping::new();
    map.insert(Key::from("outer_key"), Value::from(vec![Value::from("value_one"), Value::from(2i64)]));
    let input = Value::from(map);

    let output = transform.apply_convention(input.clone(), Convention::Camel);
    let outer = output.get("OuterKey").unwrap();
    assert_eq!(Some(outer), input.get("outer_key"));
}
