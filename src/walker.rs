use crate::error::AppError;
use std::path::Path;
use walkdir::WalkDir;

/// Depth-first walk under `root`, invoking `extract` on every file whose
/// extension matches `extension` (leading dot included, e.g. ".jpg",
/// compared case-insensitively).
///
/// Successful extractions are collected in visit order. Visit order is
/// whatever the filesystem enumeration yields — not sorted, and not stable
/// across platforms.
///
/// Error policy: a file whose extraction fails is skipped without surfacing
/// anything to the caller. A directory entry the filesystem refuses to hand
/// over is logged and the walk continues with the rest of the tree; only the
/// unreadable subtree is lost.
pub fn walk<T, F>(root: &Path, extension: &str, mut extract: F) -> Vec<T>
where
    F: FnMut(&Path) -> Result<T, AppError>,
{
    log::info!("Starting file discovery in {}", root.display());

    let target = extension.trim_start_matches('.').to_lowercase();
    let mut results = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!(
                    "Failure accessing a path {:?}: {}",
                    e.path().unwrap_or_else(|| Path::new("?")),
                    e
                );
                continue;
            }
        };

        if !entry.file_type().is_file() {
            log::trace!("Skipping non-file entry: {:?}", entry.path());
            continue;
        }

        let path = entry.path();
        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) if ext.to_lowercase() == target => match extract(path) {
                Ok(value) => {
                    log::debug!("Extracted data from {:?}", path);
                    results.push(value);
                }
                Err(e) => log::debug!("Skipping {:?}: {}", path, e),
            },
            _ => log::trace!("Skipping file due to non-matching extension: {:?}", path),
        }
    }

    log::info!("File discovery complete, {} entries collected.", results.len());
    results
}
