use crate::application::images::{download_image, target_path};
use crate::domain::error::FetchError;
use crate::domain::model::{
    BatchReport, ImageOutcome, InputItem, KanjiRecord, LookupOutcome, LookupResponse, ResultItem,
};
use crate::domain::traits::KanjiSource;
use crate::infrastructure::config::Config;
use crate::presentation::console::Console;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

const IMAGE_SLOTS: [u8; 2] = [1, 2];

#[derive(Debug, Clone)]
pub struct BatchSettings {
    pub img_dir: PathBuf,
    /// Pause after every item that got an answer from the API
    pub delay: Duration,
    /// Tag each result with its 1-based success number
    pub numbered: bool,
}

impl BatchSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            img_dir: config.paths.img_dir.clone(),
            delay: config.delay(),
            numbered: config.numbered,
        }
    }
}

/// Empty-ish JSON values the API uses to say "nothing here"
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Decide what a decoded lookup body means.
///
/// A blank body, a non-object body, or a blank `kanji` field is a soft miss.
/// Other fields are copied through as they are; only a `kanji` value that is
/// not a list fails the item.
pub fn classify(value: Value) -> LookupOutcome {
    let has_kanji = match &value {
        Value::Object(map) => map.get("kanji").is_some_and(|k| !is_blank(k)),
        _ => false,
    };
    if !has_kanji {
        return LookupOutcome::SoftMiss;
    }

    match serde_json::from_value::<LookupResponse>(value) {
        Ok(response) => LookupOutcome::Found(response),
        Err(e) => LookupOutcome::Failed(FetchError::Json(e)),
    }
}

pub async fn lookup_item<S>(source: &S, item: &InputItem) -> LookupOutcome
where
    S: KanjiSource + ?Sized,
{
    match source.lookup(&item.kanji).await {
        Ok(value) => classify(value),
        Err(e) => LookupOutcome::Failed(e),
    }
}

/// Run the whole batch: look up every item in order, save its images, and
/// collect results and missing ids.
///
/// Item and image failures are contained here; only creating the image
/// directory can fail the run.
pub async fn run_batch<S>(
    source: &S,
    items: &[InputItem],
    settings: &BatchSettings,
    console: &Console,
) -> Result<BatchReport, FetchError>
where
    S: KanjiSource + ?Sized,
{
    tokio::fs::create_dir_all(&settings.img_dir).await?;

    let total = items.len();
    let mut report = BatchReport::default();
    let mut success_count = 0usize;

    for (idx, item) in items.iter().enumerate() {
        console.fetching(idx + 1, total, item);

        match lookup_item(source, item).await {
            LookupOutcome::Found(response) => {
                success_count += 1;
                let no = settings.numbered.then_some(success_count);
                let result = ResultItem::new(no, response);
                let first = result.kanji.first().cloned();
                report.results.push(result);

                if let Some(record) = first {
                    save_images(source, &record, &item.kanji, &settings.img_dir, console, &mut report)
                        .await;
                }

                tokio::time::sleep(settings.delay).await;
            }
            LookupOutcome::SoftMiss => {
                debug!("No kanji data for {} (id={})", item.kanji, item.id);
                console.soft_miss(item);
                report.missing.push(item.id.clone());

                tokio::time::sleep(settings.delay).await;
            }
            LookupOutcome::Failed(e) => {
                debug!("Lookup failed for {} (id={}): {}", item.kanji, item.id, e);
                console.item_failed(item, &e);
                report.missing.push(item.id.clone());
            }
        }

        console.item_done();
    }

    info!(
        "Batch finished - items={}, results={}, missing={}, images_saved={}, images_failed={}",
        total,
        report.results.len(),
        report.missing.len(),
        report.images_saved,
        report.images_failed
    );

    Ok(report)
}

async fn save_images<S>(
    source: &S,
    record: &KanjiRecord,
    kanji: &str,
    img_dir: &Path,
    console: &Console,
    report: &mut BatchReport,
) where
    S: KanjiSource + ?Sized,
{
    for slot in IMAGE_SLOTS {
        let Some(url) = record.image_url(slot) else {
            debug!("No image {} for {}", slot, kanji);
            continue;
        };

        let outcome = match record.id_label() {
            Some(id) => {
                let path = target_path(img_dir, url, &id, kanji, slot);
                download_image(source, url, &path).await
            }
            None => ImageOutcome::Failed(FetchError::MissingRecordId),
        };
        match outcome {
            ImageOutcome::Saved(path) => {
                console.image_saved(slot, &path);
                report.images_saved += 1;
            }
            ImageOutcome::Failed(e) => {
                console.image_failed(slot, &e);
                report.images_failed += 1;
            }
        }
    }
}
