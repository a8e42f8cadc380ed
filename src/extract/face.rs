use crate::error::DecodeError;
use crate::extract::sampler;
use crate::models::{EyeColor, FaceAttributes, HairColor, RgbColor, SkinTone};

/// Sample the face photo and classify hair, eye and skin categories.
pub fn extract(bytes: &[u8]) -> Result<FaceAttributes, DecodeError> {
    let color = sampler::average_color(bytes)?;
    Ok(classify(color))
}

/// Bucket a sampled color by brightness.
///
/// Brightness is the unweighted channel mean, deliberately not a perceptual
/// luminance formula. The boundary cases 80 and 150 fall into the brighter
/// bucket. Eye color carries no image signal and is always Brown; the one
/// sample backs all three hex fields.
pub fn classify(color: RgbColor) -> FaceAttributes {
    let brightness = color.brightness();
    let (hair, skin) = if brightness < 80.0 {
        (HairColor::Black, SkinTone::Dark)
    } else if brightness < 150.0 {
        (HairColor::Brown, SkinTone::Medium)
    } else {
        (HairColor::Blonde, SkinTone::Fair)
    };

    FaceAttributes {
        hair,
        eye: EyeColor::Brown,
        skin,
        hex: color.to_hex(),
    }
}
