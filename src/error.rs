use exif::Error as ExifError;
use serde_json::Error as SerdeJsonError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("EXIF error: {0}")]
    Exif(#[from] ExifError),

    #[error("JSON error: {0}")]
    Json(#[from] SerdeJsonError),

    #[error("missing required EXIF field: {0}")]
    MissingField(exif::Tag),

    #[error("unrepresentable timestamp in {0}")]
    InvalidTimestamp(exif::Tag),

    #[error("malformed GPS value in {0}")]
    MalformedGps(exif::Tag),
}
