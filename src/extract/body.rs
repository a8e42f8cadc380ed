use crate::error::DecodeError;
use crate::models::{BodyAttributes, BodyProportion, BodyShape};
use rand::Rng;

pub const SHAPES: [BodyShape; 7] = [
    BodyShape::Apple,
    BodyShape::InvertedTriangle,
    BodyShape::Trapezoid,
    BodyShape::Rectangle,
    BodyShape::Hourglass,
    BodyShape::Pear,
    BodyShape::Triangle,
];

pub const PROPORTIONS: [BodyProportion; 3] = [
    BodyProportion::Balanced,
    BodyProportion::ShortTorso,
    BodyProportion::LongLegs,
];

/// Placeholder heuristic for the body photo step.
///
/// The photo must decode, but its content is otherwise unused; it only gates
/// progression to the next step. Shape and proportion are drawn uniformly and
/// independently, so re-submitting the same photo yields fresh draws.
pub fn extract(bytes: &[u8], rng: &mut impl Rng) -> Result<BodyAttributes, DecodeError> {
    image::load_from_memory(bytes)?;
    Ok(choose(rng))
}

/// Draw a shape and proportion from the fixed lists.
pub fn choose(rng: &mut impl Rng) -> BodyAttributes {
    BodyAttributes {
        shape: SHAPES[rng.random_range(0..SHAPES.len())],
        proportion: PROPORTIONS[rng.random_range(0..PROPORTIONS.len())],
    }
}
