use crate::error::AppError;
use crate::record::ImageRecord;
use chrono::{NaiveDate, NaiveDateTime};
use exif::{Exif, In, Reader, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read the EXIF block of one image and map it into an [`ImageRecord`].
///
/// The capture date and the GPS coordinate pair are gating: if either is
/// missing or undecodable the whole extraction fails and the file is left
/// out of the output. Camera model, pixel dimensions and altitude are
/// best-effort and default to empty strings. The output feeds a map, so a
/// record without a position or a date is useless, while a record without a
/// camera model is merely incomplete.
pub fn read_tags(path: &Path) -> Result<ImageRecord, AppError> {
    log::trace!("Extracting EXIF data from {:?}", path);

    let file = File::open(path)?;
    let mut buf_reader = BufReader::new(file);
    let exif = Reader::new().read_from_container(&mut buf_reader)?;

    let camera_model = display_string(&exif, Tag::Model);
    let pixel_width = display_string(&exif, Tag::PixelXDimension);
    let pixel_height = display_string(&exif, Tag::PixelYDimension);
    let altitude = display_string(&exif, Tag::GPSAltitude);

    let capture_date = capture_date(&exif)?;
    let (latitude, longitude) = coordinates(&exif)?;

    Ok(ImageRecord {
        path: path.to_string_lossy().to_string(),
        filename: path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default(),
        latitude,
        longitude,
        altitude,
        capture_date,
        camera_model,
        pixel_width,
        pixel_height,
    })
}

/// Best-effort lookup: the tag's display representation, or "" when absent.
fn display_string(exif: &Exif, tag: Tag) -> String {
    match exif.get_field(tag, In::PRIMARY) {
        Some(field) => field.display_value().to_string(),
        None => String::new(),
    }
}

/// Capture timestamp from DateTimeOriginal, falling back to DateTime.
fn capture_date(exif: &Exif) -> Result<NaiveDateTime, AppError> {
    let field = exif
        .get_field(Tag::DateTimeOriginal, In::PRIMARY)
        .or_else(|| exif.get_field(Tag::DateTime, In::PRIMARY))
        .ok_or(AppError::MissingField(Tag::DateTimeOriginal))?;

    let ascii = match field.value {
        Value::Ascii(ref vec) if !vec.is_empty() => &vec[0],
        _ => return Err(AppError::InvalidTimestamp(field.tag)),
    };

    let dt = exif::DateTime::from_ascii(ascii)?;
    NaiveDate::from_ymd_opt(dt.year.into(), dt.month.into(), dt.day.into())
        .and_then(|d| d.and_hms_opt(dt.hour.into(), dt.minute.into(), dt.second.into()))
        .ok_or(AppError::InvalidTimestamp(field.tag))
}

/// Decimal-degree coordinate pair. Both axes and both hemisphere reference
/// tags are required.
fn coordinates(exif: &Exif) -> Result<(f64, f64), AppError> {
    let latitude = axis_degrees(exif, Tag::GPSLatitude, Tag::GPSLatitudeRef, b'S')?;
    let longitude = axis_degrees(exif, Tag::GPSLongitude, Tag::GPSLongitudeRef, b'W')?;
    Ok((latitude, longitude))
}

fn axis_degrees(exif: &Exif, tag: Tag, ref_tag: Tag, negative: u8) -> Result<f64, AppError> {
    let field = exif
        .get_field(tag, In::PRIMARY)
        .ok_or(AppError::MissingField(tag))?;

    // Degrees/minutes/seconds rational triplet.
    let degrees = match field.value {
        Value::Rational(ref dms) if dms.len() >= 3 && dms.iter().all(|r| r.denom != 0) => {
            dms[0].to_f64() + dms[1].to_f64() / 60.0 + dms[2].to_f64() / 3600.0
        }
        _ => return Err(AppError::MalformedGps(tag)),
    };

    let ref_field = exif
        .get_field(ref_tag, In::PRIMARY)
        .ok_or(AppError::MissingField(ref_tag))?;

    match ref_field.value {
        Value::Ascii(ref vec) if !vec.is_empty() => {
            if vec[0].first() == Some(&negative) {
                Ok(-degrees)
            } else {
                Ok(degrees)
            }
        }
        _ => Err(AppError::MalformedGps(ref_tag)),
    }
}
