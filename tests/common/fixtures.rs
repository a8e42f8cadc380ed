use image::{ImageBuffer, Luma, Rgb};
use std::io::Cursor;
use stylist::models::{AttributeKey, AttributeRecord};

/// Encode a 100x100 solid-color image as PNG bytes.
pub fn solid_png(r: u8, g: u8, b: u8) -> Vec<u8> {
    encode_png(image::DynamicImage::ImageRgb8(ImageBuffer::from_fn(
        100,
        100,
        |_, _| Rgb([r, g, b]),
    )))
}

/// Encode a 100x100 two-axis gradient as PNG bytes.
pub fn gradient_png() -> Vec<u8> {
    encode_png(image::DynamicImage::ImageRgb8(ImageBuffer::from_fn(
        100,
        100,
        |x, y| Rgb([(x * 2) as u8, (y * 2) as u8, 128]),
    )))
}

/// Encode a 100x100 solid grayscale image as PNG bytes. Exercises the
/// single-channel-to-RGB conversion in the sampler.
pub fn gray_png(value: u8) -> Vec<u8> {
    encode_png(image::DynamicImage::ImageLuma8(ImageBuffer::from_fn(
        100,
        100,
        |_, _| Luma([value]),
    )))
}

fn encode_png(img: image::DynamicImage) -> Vec<u8> {
    let mut cursor = Cursor::new(Vec::new());
    img.write_to(&mut cursor, image::ImageFormat::Png)
        .expect("Failed to encode test image");
    cursor.into_inner()
}

/// A record with all eleven keys populated with plausible values.
pub fn complete_record() -> AttributeRecord {
    let mut record = AttributeRecord::new();
    record.insert(AttributeKey::HairColor, "Brown");
    record.insert(AttributeKey::EyeColor, "Brown");
    record.insert(AttributeKey::SkinTone, "Medium");
    record.insert(AttributeKey::HairColorHex, "#8a6f5c");
    record.insert(AttributeKey::EyeColorHex, "#8a6f5c");
    record.insert(AttributeKey::SkinToneHex, "#8a6f5c");
    record.insert(AttributeKey::VeinColor, "Blue/Purple");
    record.insert(AttributeKey::VeinUndertone, "Cool");
    record.insert(AttributeKey::VeinColorHex, "#4a5a8c");
    record.insert(AttributeKey::BodyShape, "Hourglass");
    record.insert(AttributeKey::BodyProportion, "Balanced");
    record
}
