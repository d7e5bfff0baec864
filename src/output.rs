use crate::error::AppError;
use crate::record::ImageRecord;
use std::path::Path;

/// Serialize the collected records as one compact JSON array and write it in
/// a single shot, replacing any existing file. An empty run still produces a
/// valid `[]` file.
pub fn write_records(path: &Path, records: &[ImageRecord]) -> Result<(), AppError> {
    let encoded = serde_json::to_vec(records)?;
    std::fs::write(path, encoded)?;
    log::info!("Wrote {} records to {:?}", records.len(), path);
    Ok(())
}
