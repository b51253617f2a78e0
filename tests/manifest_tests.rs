//! Manifest file tests

use kanji_fetch::domain::model::{InputItem, KanjiId, KanjiRecord, ResultItem};
use kanji_fetch::infrastructure::storage::manifest::{load_input, read_manifest, write_manifest};
use serde_json::{json, Value};
use std::path::PathBuf;

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("kanji-fetch-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn sample_results() -> Vec<ResultItem> {
    vec![
        ResultItem {
            no: Some(1),
            word: json!("日"),
            phonetic: json!("にち"),
            means: json!(["sun", "ngày"]),
            phonetic_of_mean: json!("nhật"),
            kanji: vec![KanjiRecord(json!({
                "id": "K1",
                "meaning": "mặt trời",
                "one_time_url_image_1": "http://x/img?i=a.webp",
                "one_time_url_image_2": null,
                "strokes": 4
            }))],
        },
        ResultItem {
            no: Some(2),
            word: Value::Null,
            phonetic: Value::Null,
            means: Value::Null,
            phonetic_of_mean: json!(""),
            kanji: vec![KanjiRecord(json!({ "id": 7 }))],
        },
    ]
}

#[test]
fn test_results_round_trip() {
    let dir = temp_dir("results-round-trip");
    let path = dir.join("output.json");
    let results = sample_results();

    write_manifest(&path, &results).unwrap();
    let back: Vec<ResultItem> = read_manifest(&path).unwrap();

    assert_eq!(back, results);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_manifest_keeps_non_ascii_and_two_space_indent() {
    let dir = temp_dir("results-format");
    let path = dir.join("output.json");

    write_manifest(&path, &sample_results()).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();

    assert!(content.contains("\"word\": \"日\""));
    assert!(content.contains("mặt trời"));
    assert!(!content.contains("\\u"));
    assert!(content.starts_with("[\n  {\n    \"no\": 1,"));
    assert!(content.contains("\"phoneticOfMean\": \"nhật\""));
    assert!(content.ends_with("]\n"));
    // Record keys keep the API's order, nulls included
    assert!(content.contains(
        "\"one_time_url_image_1\": \"http://x/img?i=a.webp\",\n        \"one_time_url_image_2\": null,"
    ));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_missing_ids_round_trip() {
    let dir = temp_dir("missing-round-trip");
    let path = dir.join("missing.json");
    let missing = vec![KanjiId::Number(3), KanjiId::from("k-12"), KanjiId::Number(40)];

    write_manifest(&path, &missing).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "[\n  3,\n  \"k-12\",\n  40\n]\n");

    let back: Vec<KanjiId> = read_manifest(&path).unwrap();
    assert_eq!(back, missing);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_empty_manifest() {
    let dir = temp_dir("empty-manifest");
    let path = dir.join("nested").join("missing.json");

    write_manifest(&path, &Vec::<KanjiId>::new()).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]\n");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_load_input() {
    let dir = temp_dir("load-input");
    let path = dir.join("2136kanji.json");
    std::fs::write(
        &path,
        r#"[{"kanji":"日","id":1,"hanviet":"nhật"},{"kanji":"月","id":"2"}]"#,
    )
    .unwrap();

    let items = load_input(&path).unwrap();
    assert_eq!(
        items,
        vec![
            InputItem {
                kanji: "日".to_string(),
                id: KanjiId::Number(1)
            },
            InputItem {
                kanji: "月".to_string(),
                id: KanjiId::from("2")
            },
        ]
    );

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_load_input_failures_are_errors() {
    let dir = temp_dir("load-input-bad");

    assert!(load_input(&dir.join("absent.json")).is_err());

    let path = dir.join("broken.json");
    std::fs::write(&path, "[{\"kanji\": \"日\"}").unwrap();
    assert!(load_input(&path).is_err());

    let _ = std::fs::remove_dir_all(&dir);
}
