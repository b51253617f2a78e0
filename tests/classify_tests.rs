//! Lookup response classification tests

use kanji_fetch::application::batch::classify;
use kanji_fetch::domain::model::{LookupOutcome, LookupResponse};
use serde_json::{json, Value};

fn is_soft_miss(outcome: &LookupOutcome) -> bool {
    matches!(outcome, LookupOutcome::SoftMiss)
}

#[test]
fn test_blank_bodies_are_soft_misses() {
    for body in [json!(null), json!({}), json!([]), json!(""), json!(false), json!(0)] {
        assert!(is_soft_miss(&classify(body.clone())), "body {}", body);
    }
}

#[test]
fn test_blank_kanji_field_is_soft_miss() {
    let bodies = [
        json!({ "word": "日" }),
        json!({ "word": "日", "kanji": null }),
        json!({ "word": "日", "kanji": [] }),
        json!({ "word": "日", "kanji": "" }),
    ];
    for body in bodies {
        assert!(is_soft_miss(&classify(body.clone())), "body {}", body);
    }
}

#[test]
fn test_non_object_body_is_soft_miss() {
    assert!(is_soft_miss(&classify(json!(["kanji"]))));
    assert!(is_soft_miss(&classify(json!("kanji"))));
}

fn found(body: serde_json::Value) -> LookupResponse {
    match classify(body) {
        LookupOutcome::Found(response) => response,
        other => panic!("expected Found, got {:?}", other),
    }
}

#[test]
fn test_full_body_is_found() {
    let response = found(json!({
        "word": "日",
        "phonetic": "にち",
        "means": ["sun", "day"],
        "phoneticOfMean": "nichi",
        "kanji": [
            { "id": "K1", "one_time_url_image_1": "http://x/img?i=a.webp", "stroke_count": 4 },
            { "id": "K2" }
        ]
    }));

    assert_eq!(response.word, json!("日"));
    assert_eq!(response.phonetic, json!("にち"));
    assert_eq!(response.means, json!(["sun", "day"]));
    assert_eq!(response.phonetic_of_mean, json!("nichi"));
    assert_eq!(response.kanji.len(), 2);
    assert_eq!(response.kanji[0].id_label().as_deref(), Some("K1"));
    assert_eq!(response.kanji[0].image_url(1), Some("http://x/img?i=a.webp"));
    assert_eq!(response.kanji[0].image_url(2), None);
    assert_eq!(response.kanji[0].0["stroke_count"], json!(4));
}

#[test]
fn test_absent_fields_use_defaults() {
    let response = found(json!({ "kanji": [{ "id": 3 }] }));

    assert_eq!(response.word, Value::Null);
    assert_eq!(response.phonetic, Value::Null);
    assert_eq!(response.means, json!([]));
    assert_eq!(response.phonetic_of_mean, json!(""));
    assert_eq!(response.kanji[0].id_label().as_deref(), Some("3"));
}

#[test]
fn test_odd_field_values_are_copied_through() {
    // 字段类型不符时原样保留，不判定为失败
    let response = found(json!({ "means": null, "phoneticOfMean": null, "kanji": [{ "id": "K1" }] }));
    assert_eq!(response.means, Value::Null);
    assert_eq!(response.phonetic_of_mean, Value::Null);

    let response = found(json!({ "means": ["a", { "x": 1 }], "word": 5, "kanji": [{ "id": "K1" }] }));
    assert_eq!(response.means, json!(["a", { "x": 1 }]));
    assert_eq!(response.word, json!(5));
}

#[test]
fn test_records_without_usable_id_are_found() {
    let response = found(json!({ "kanji": [{ "name": "x" }] }));
    assert_eq!(response.kanji[0].id_label(), None);

    let response = found(json!({ "kanji": [{ "id": "K1" }, { "name": "x" }] }));
    assert_eq!(response.kanji.len(), 2);

    let response = found(json!({ "kanji": [{ "id": 1.5 }] }));
    assert_eq!(response.kanji[0].id_label().as_deref(), Some("1.5"));

    let response = found(json!({ "kanji": ["日"] }));
    assert_eq!(response.kanji[0].id_label(), None);
    assert_eq!(response.kanji[0].image_url(1), None);
}

#[test]
fn test_kanji_that_is_not_a_list_is_failure() {
    assert!(matches!(
        classify(json!({ "kanji": "日" })),
        LookupOutcome::Failed(_)
    ));
    assert!(matches!(
        classify(json!({ "kanji": { "id": "K1" } })),
        LookupOutcome::Failed(_)
    ));
}

#[test]
fn test_null_image_urls_survive_serialization() {
    let body = json!({
        "kanji": [{ "id": "K1", "one_time_url_image_1": "http://x/a", "one_time_url_image_2": null }]
    });
    let response = found(body.clone());

    assert_eq!(response.kanji[0].image_url(2), None);
    assert_eq!(serde_json::to_value(&response.kanji).unwrap(), body["kanji"]);
}
