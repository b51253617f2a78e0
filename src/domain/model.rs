use crate::domain::error::FetchError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;

// Identifier of an input item.
// Keeps its JSON type so manifests echo numbers as numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KanjiId {
    Number(i64),
    Text(String),
}

impl fmt::Display for KanjiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KanjiId::Number(n) => write!(f, "{}", n),
            KanjiId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for KanjiId {
    fn from(n: i64) -> Self {
        KanjiId::Number(n)
    }
}

impl From<&str> for KanjiId {
    fn from(s: &str) -> Self {
        KanjiId::Text(s.to_string())
    }
}

// One entry of the input list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputItem {
    pub kanji: String,
    pub id: KanjiId,
}

// Kanji entry returned by the lookup API, kept exactly as the API sent it.
// Only the id and the two image URLs are ever read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KanjiRecord(pub Value);

impl KanjiRecord {
    /// Id rendered for file names. Strings are used as-is, numbers in their
    /// JSON form; anything else has no usable id.
    pub fn id_label(&self) -> Option<String> {
        match self.0.get("id")? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Image slots are numbered 1 and 2; any other slot has no URL.
    pub fn image_url(&self, slot: u8) -> Option<&str> {
        let key = match slot {
            1 => "one_time_url_image_1",
            2 => "one_time_url_image_2",
            _ => return None,
        };
        self.0
            .get(key)
            .and_then(Value::as_str)
            .filter(|u| !u.is_empty())
    }
}

// Fields are copied through untouched; only absent ones get a default
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupResponse {
    #[serde(default)]
    pub word: Value,
    #[serde(default)]
    pub phonetic: Value,
    #[serde(default = "empty_list")]
    pub means: Value,
    #[serde(default = "empty_string", rename = "phoneticOfMean")]
    pub phonetic_of_mean: Value,
    pub kanji: Vec<KanjiRecord>,
}

fn empty_list() -> Value {
    Value::Array(Vec::new())
}

fn empty_string() -> Value {
    Value::String(String::new())
}

// Unit of the results manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no: Option<usize>, // 1-based success counter, absent when numbering is off
    pub word: Value,
    pub phonetic: Value,
    pub means: Value,
    #[serde(rename = "phoneticOfMean")]
    pub phonetic_of_mean: Value,
    pub kanji: Vec<KanjiRecord>,
}

impl ResultItem {
    pub fn new(no: Option<usize>, response: LookupResponse) -> Self {
        Self {
            no,
            word: response.word,
            phonetic: response.phonetic,
            means: response.means,
            phonetic_of_mean: response.phonetic_of_mean,
            kanji: response.kanji,
        }
    }
}

/// Result of looking up a single input item.
#[derive(Debug)]
pub enum LookupOutcome {
    Found(LookupResponse),
    /// The API answered but had no kanji data.
    SoftMiss,
    Failed(FetchError),
}

#[derive(Debug)]
pub enum ImageOutcome {
    Saved(PathBuf),
    Failed(FetchError),
}

// Everything one run produced, ready to be written out
#[derive(Debug, Default)]
pub struct BatchReport {
    pub results: Vec<ResultItem>,
    pub missing: Vec<KanjiId>,
    pub images_saved: usize,
    pub images_failed: usize,
}
