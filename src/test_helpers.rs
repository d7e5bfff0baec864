//! Shared test fixtures: minimal JPEG containers carrying EXIF payloads
//! built with the decoder's own experimental writer, so extractor tests run
//! against real decoder output without binary fixture files in the repo.

use exif::experimental::Writer;
use exif::{Field, In, Rational, Tag, Value};
use std::io::Cursor;

/// GPS tags for one fixture, as degrees/minutes/seconds per axis plus the
/// hemisphere reference bytes.
pub struct GpsSpec {
    pub lat: (u32, u32, u32),
    pub lat_ref: &'static [u8],
    pub lng: (u32, u32, u32),
    pub lng_ref: &'static [u8],
}

impl Default for GpsSpec {
    fn default() -> Self {
        GpsSpec {
            lat: (40, 26, 46),
            lat_ref: b"N",
            lng: (79, 58, 56),
            lng_ref: b"E",
        }
    }
}

pub fn ascii_field(tag: Tag, text: &str) -> Field {
    Field {
        tag,
        ifd_num: In::PRIMARY,
        value: Value::Ascii(vec![text.as_bytes().to_vec()]),
    }
}

fn dms_field(tag: Tag, dms: (u32, u32, u32)) -> Field {
    Field {
        tag,
        ifd_num: In::PRIMARY,
        value: Value::Rational(vec![
            Rational { num: dms.0, denom: 1 },
            Rational { num: dms.1, denom: 1 },
            Rational { num: dms.2, denom: 1 },
        ]),
    }
}

fn ref_field(tag: Tag, hemisphere: &[u8]) -> Field {
    Field {
        tag,
        ifd_num: In::PRIMARY,
        value: Value::Ascii(vec![hemisphere.to_vec()]),
    }
}

/// Assemble the field set for a fixture. `date` is the DateTimeOriginal
/// ASCII value; `model` the camera model string. Either may be omitted to
/// exercise the gating / best-effort paths.
pub fn exif_fields(date: Option<&str>, gps: Option<GpsSpec>, model: Option<&str>) -> Vec<Field> {
    let mut fields = Vec::new();
    if let Some(date) = date {
        fields.push(ascii_field(Tag::DateTimeOriginal, date));
    }
    if let Some(gps) = gps {
        fields.push(dms_field(Tag::GPSLatitude, gps.lat));
        fields.push(ref_field(Tag::GPSLatitudeRef, gps.lat_ref));
        fields.push(dms_field(Tag::GPSLongitude, gps.lng));
        fields.push(ref_field(Tag::GPSLongitudeRef, gps.lng_ref));
    }
    if let Some(model) = model {
        fields.push(ascii_field(Tag::Model, model));
    }
    fields
}

/// A fixture with every tag the extractor knows about.
pub fn jpeg_with_full_exif() -> Vec<u8> {
    let mut fields = exif_fields(
        Some("2019:08:01 12:30:45"),
        Some(GpsSpec::default()),
        Some("PowerShot"),
    );
    fields.push(Field {
        tag: Tag::PixelXDimension,
        ifd_num: In::PRIMARY,
        value: Value::Long(vec![4032]),
    });
    fields.push(Field {
        tag: Tag::PixelYDimension,
        ifd_num: In::PRIMARY,
        value: Value::Long(vec![3024]),
    });
    fields.push(Field {
        tag: Tag::GPSAltitude,
        ifd_num: In::PRIMARY,
        value: Value::Rational(vec![Rational { num: 1234, denom: 10 }]),
    });
    jpeg_with_exif(&fields)
}

/// Serialize `fields` to a TIFF EXIF payload and wrap it in a bare JPEG
/// container (SOI, one APP1 segment, EOI) — enough structure for the
/// decoder's JPEG scanner.
pub fn jpeg_with_exif(fields: &[Field]) -> Vec<u8> {
    let mut writer = Writer::new();
    for field in fields {
        writer.push_field(field);
    }
    let mut tiff = Cursor::new(Vec::new());
    writer.write(&mut tiff, false).unwrap();
    let tiff = tiff.into_inner();

    let mut jpeg = vec![0xff, 0xd8];
    jpeg.extend_from_slice(&[0xff, 0xe1]);
    jpeg.extend_from_slice(&((tiff.len() + 8) as u16).to_be_bytes());
    jpeg.extend_from_slice(b"Exif\0\0");
    jpeg.extend_from_slice(&tiff);
    jpeg.extend_from_slice(&[0xff, 0xd9]);
    jpeg
}
