use std::{fs, path::Path};

use log::{debug, error, info, warn};
use serde_json::Value;

use crate::{Gist, GistError, GistRecord, Result};

/// Loads a collection of gists from a JSON file holding an array of API
/// records.
///
/// Entries that are not gist objects are logged and skipped;
/// only I/O errors and a file that is not a JSON array fail the load.
pub fn load_gists_from_file(path: &Path) -> Result<Vec<Gist>> {
    debug!("Loading gists from file: {}", path.display());
    if !path.exists() {
        return Err(GistError::FileNotFound {
            file_path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| {
        error!("Failed to open gists file {}: {}", path.display(), e);
        GistError::Io(e)
    })?;

    let gists = load_gists_from_str(&content)?;
    info!("Loaded {} gists from {}", gists.len(), path.display());
    Ok(gists)
}

/// Same as [`load_gists_from_file`] for an in-memory JSON document
pub fn load_gists_from_str(json: &str) -> Result<Vec<Gist>> {
    let records: Vec<Value> = serde_json::from_str(json)?;

    let mut gists = Vec::with_capacity(records.len());
    let mut skipped = 0;

    for (index, value) in records.into_iter().enumerate() {
        let converted = serde_json::from_value::<GistRecord>(value).map(Gist::from);

        match converted {
            Ok(gist) => gists.push(gist),
            Err(e) => {
                // One bad record must not hide the rest of the collection
                warn!("Skipping gist record #{}: {}", index, e);
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        warn!("Skipped {} malformed gist record(s)", skipped);
    }

    Ok(gists)
}
