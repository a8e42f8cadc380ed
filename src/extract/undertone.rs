use crate::error::DecodeError;
use crate::extract::sampler;
use crate::models::{RgbColor, Undertone, VeinAttributes, VeinColor};

/// Sample the wrist photo and classify vein color and undertone.
pub fn extract(bytes: &[u8]) -> Result<VeinAttributes, DecodeError> {
    let color = sampler::average_color(bytes)?;
    Ok(classify(color))
}

/// Classify by strict channel dominance, first matching rule wins.
///
/// Ties and red dominance fall through to Neutral, which reuses the
/// Blue/Purple vein label of the Cool branch.
pub fn classify(color: RgbColor) -> VeinAttributes {
    let (vein, undertone) = if color.b > color.r && color.b > color.g {
        (VeinColor::BluePurple, Undertone::Cool)
    } else if color.g > color.r && color.g > color.b {
        (VeinColor::Greenish, Undertone::Warm)
    } else {
        (VeinColor::BluePurple, Undertone::Neutral)
    };

    VeinAttributes {
        vein,
        undertone,
        hex: color.to_hex(),
    }
}
