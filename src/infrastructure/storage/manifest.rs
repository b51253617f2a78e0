// JSON files on disk: the input list and the two output manifests
use crate::domain::error::FetchError;
use crate::domain::model::InputItem;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Read the list of kanji to fetch. Any failure here is fatal for the run.
pub fn load_input(path: &Path) -> Result<Vec<InputItem>, FetchError> {
    let content = fs::read_to_string(path)
        .map_err(|e| FetchError::Input(format!("Cannot read {}: {}", path.display(), e)))?;
    let items: Vec<InputItem> = serde_json::from_str(&content)
        .map_err(|e| FetchError::Input(format!("Cannot parse {}: {}", path.display(), e)))?;

    info!("Loaded {} input items from {}", items.len(), path.display());
    Ok(items)
}

/// Write `value` as pretty JSON (2-space indent, non-ASCII kept literal),
/// replacing whatever was at `path`.
pub fn write_manifest<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), FetchError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut content = serde_json::to_string_pretty(value)?;
    content.push('\n');
    fs::write(path, content)?;

    info!("Wrote manifest {}", path.display());
    Ok(())
}

pub fn read_manifest<T: DeserializeOwned>(path: &Path) -> Result<T, FetchError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
