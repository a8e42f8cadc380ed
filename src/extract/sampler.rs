use crate::error::DecodeError;
use crate::models::RgbColor;
use image::DynamicImage;
use image::imageops::FilterType;

/// Edge length of the square the photo is shrunk to before averaging.
/// Downsampling smooths noise and bounds the cost of the mean.
pub const SAMPLE_SIZE: u32 = 50;

/// Decode a photo and reduce it to its average color.
pub fn average_color(bytes: &[u8]) -> Result<RgbColor, DecodeError> {
    let img = image::load_from_memory(bytes)?;
    Ok(average_of(&img))
}

/// Average color of an already-decoded image.
///
/// Any channel layout is converted to 3-channel RGB first. Channel means are
/// truncated, not rounded, when narrowed back to 8 bits.
pub fn average_of(img: &DynamicImage) -> RgbColor {
    let small = img
        .resize_exact(SAMPLE_SIZE, SAMPLE_SIZE, FilterType::Triangle)
        .to_rgb8();

    let mut sums = [0u64; 3];
    for pixel in small.pixels() {
        sums[0] += pixel[0] as u64;
        sums[1] += pixel[1] as u64;
        sums[2] += pixel[2] as u64;
    }

    let count = (SAMPLE_SIZE * SAMPLE_SIZE) as u64;
    RgbColor {
        r: (sums[0] / count) as u8,
        g: (sums[1] / count) as u8,
        b: (sums[2] / count) as u8,
    }
}
