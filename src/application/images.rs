use crate::domain::error::FetchError;
use crate::domain::model::ImageOutcome;
use crate::domain::traits::KanjiSource;
use reqwest::Url;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Query parameter the image host uses to carry the original file name
const FILE_NAME_PARAM: &str = "i";

/// File name the image host reports for `url`, taken from its `i` query
/// parameter. Falls back to `{record_id}_{slot}.webp` when the parameter is
/// absent or empty, or when the URL does not parse.
pub fn original_file_name(url: &str, record_id: &str, slot: u8) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| {
            let name = parsed
                .query_pairs()
                .find(|(key, value)| key == FILE_NAME_PARAM && !value.is_empty())
                .map(|(_, value)| value.into_owned());
            name
        })
        .unwrap_or_else(|| format!("{}_{}.webp", record_id, slot))
}

/// Text after the last `.`; a name without a dot is its own extension.
pub fn extension_of(file_name: &str) -> &str {
    file_name.rsplit('.').next().unwrap_or(file_name)
}

pub fn image_path(dir: &Path, record_id: &str, kanji: &str, slot: u8, ext: &str) -> PathBuf {
    dir.join(format!("{}_{}_{}.{}", record_id, kanji, slot, ext))
}

/// Local path an image URL is saved to
pub fn target_path(dir: &Path, url: &str, record_id: &str, kanji: &str, slot: u8) -> PathBuf {
    let original = original_file_name(url, record_id, slot);
    image_path(dir, record_id, kanji, slot, extension_of(&original))
}

/// Fetch one image and write it to `path`, overwriting any previous file.
pub async fn download_image<S>(source: &S, url: &str, path: &Path) -> ImageOutcome
where
    S: KanjiSource + ?Sized,
{
    match save_image(source, url, path).await {
        Ok(()) => {
            debug!("Saved {} to {}", url, path.display());
            ImageOutcome::Saved(path.to_path_buf())
        }
        Err(e) => {
            debug!("Image download failed for {}: {}", url, e);
            ImageOutcome::Failed(e)
        }
    }
}

async fn save_image<S>(source: &S, url: &str, path: &Path) -> Result<(), FetchError>
where
    S: KanjiSource + ?Sized,
{
    let bytes = source.fetch_image(url).await?;
    tokio::fs::write(path, bytes).await?;
    Ok(())
}
