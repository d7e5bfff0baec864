use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One output record per image that carried a decodable EXIF block with a
/// valid capture date and GPS coordinate pair. The remaining fields are
/// best-effort: absent tags leave them at their empty defaults.
///
/// String fields hold the decoder's display representation verbatim
/// (quoting, rational forms and all) rather than a normalized value.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ImageRecord {
    pub path: String,
    pub filename: String,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: String,
    pub capture_date: NaiveDateTime,
    pub camera_model: String,
    pub pixel_width: String,
    pub pixel_height: String,
}
