use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// An 8-bit-per-channel RGB color sampled from a photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    /// Canonical `#rrggbb` encoding, lowercase, zero-padded.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse a `#rrggbb` string back into a color.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        // length is in bytes; reject non-ASCII before slicing at fixed offsets
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Unweighted mean of the three channels.
    pub fn brightness(&self) -> f32 {
        (self.r as u32 + self.g as u32 + self.b as u32) as f32 / 3.0
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HairColor {
    Black,
    Brown,
    Blonde,
}

impl HairColor {
    pub fn label(&self) -> &'static str {
        match self {
            HairColor::Black => "Black",
            HairColor::Brown => "Brown",
            HairColor::Blonde => "Blonde",
        }
    }
}

/// The classifier has no eye signal; Brown is the only value it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EyeColor {
    Brown,
}

impl EyeColor {
    pub fn label(&self) -> &'static str {
        "Brown"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkinTone {
    Dark,
    Medium,
    Fair,
}

impl SkinTone {
    pub fn label(&self) -> &'static str {
        match self {
            SkinTone::Dark => "Dark",
            SkinTone::Medium => "Medium",
            SkinTone::Fair => "Fair",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VeinColor {
    #[serde(rename = "Blue/Purple")]
    BluePurple,
    Greenish,
}

impl VeinColor {
    pub fn label(&self) -> &'static str {
        match self {
            VeinColor::BluePurple => "Blue/Purple",
            VeinColor::Greenish => "Greenish",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Undertone {
    Cool,
    Warm,
    Neutral,
}

impl Undertone {
    pub fn label(&self) -> &'static str {
        match self {
            Undertone::Cool => "Cool",
            Undertone::Warm => "Warm",
            Undertone::Neutral => "Neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BodyShape {
    Apple,
    #[serde(rename = "Inverted Triangle")]
    InvertedTriangle,
    Trapezoid,
    Rectangle,
    Hourglass,
    Pear,
    Triangle,
}

impl BodyShape {
    pub fn label(&self) -> &'static str {
        match self {
            BodyShape::Apple => "Apple",
            BodyShape::InvertedTriangle => "Inverted Triangle",
            BodyShape::Trapezoid => "Trapezoid",
            BodyShape::Rectangle => "Rectangle",
            BodyShape::Hourglass => "Hourglass",
            BodyShape::Pear => "Pear",
            BodyShape::Triangle => "Triangle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BodyProportion {
    Balanced,
    #[serde(rename = "Short Torso")]
    ShortTorso,
    #[serde(rename = "Long Legs")]
    LongLegs,
}

impl BodyProportion {
    pub fn label(&self) -> &'static str {
        match self {
            BodyProportion::Balanced => "Balanced",
            BodyProportion::ShortTorso => "Short Torso",
            BodyProportion::LongLegs => "Long Legs",
        }
    }
}

/// The fixed set of attributes the wizard accumulates across its steps.
///
/// Declaration order is the canonical order: it decides how missing keys are
/// reported and how the record serializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum AttributeKey {
    #[serde(rename = "Hair Color")]
    HairColor,
    #[serde(rename = "Eye Color")]
    EyeColor,
    #[serde(rename = "Skin Tone")]
    SkinTone,
    #[serde(rename = "Hair Color Hex")]
    HairColorHex,
    #[serde(rename = "Eye Color Hex")]
    EyeColorHex,
    #[serde(rename = "Skin Tone Hex")]
    SkinToneHex,
    #[serde(rename = "Vein Color")]
    VeinColor,
    #[serde(rename = "Vein Undertone")]
    VeinUndertone,
    #[serde(rename = "Vein Color Hex")]
    VeinColorHex,
    #[serde(rename = "Body Shape")]
    BodyShape,
    #[serde(rename = "Body Proportion")]
    BodyProportion,
}

impl AttributeKey {
    /// All keys, in canonical order. A record is complete once every one of
    /// these is present.
    pub const ALL: [AttributeKey; 11] = [
        AttributeKey::HairColor,
        AttributeKey::EyeColor,
        AttributeKey::SkinTone,
        AttributeKey::HairColorHex,
        AttributeKey::EyeColorHex,
        AttributeKey::SkinToneHex,
        AttributeKey::VeinColor,
        AttributeKey::VeinUndertone,
        AttributeKey::VeinColorHex,
        AttributeKey::BodyShape,
        AttributeKey::BodyProportion,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AttributeKey::HairColor => "Hair Color",
            AttributeKey::EyeColor => "Eye Color",
            AttributeKey::SkinTone => "Skin Tone",
            AttributeKey::HairColorHex => "Hair Color Hex",
            AttributeKey::EyeColorHex => "Eye Color Hex",
            AttributeKey::SkinToneHex => "Skin Tone Hex",
            AttributeKey::VeinColor => "Vein Color",
            AttributeKey::VeinUndertone => "Vein Undertone",
            AttributeKey::VeinColorHex => "Vein Color Hex",
            AttributeKey::BodyShape => "Body Shape",
            AttributeKey::BodyProportion => "Body Proportion",
        }
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of keys one extraction stage contributes to the record.
pub type AttributeDelta = Vec<(AttributeKey, String)>;

/// Accumulated per-session attribute mapping.
///
/// Each extraction stage merges its delta in; keys are never removed. The
/// record is read-only while recommendations are computed and is dropped with
/// the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AttributeRecord {
    values: BTreeMap<AttributeKey, String>,
}

impl AttributeRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: AttributeKey, value: impl Into<String>) {
        self.values.insert(key, value.into());
    }

    pub fn get(&self, key: AttributeKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    pub fn merge(&mut self, delta: &AttributeDelta) {
        for (key, value) in delta {
            self.values.insert(*key, value.clone());
        }
    }

    /// Keys still absent, in canonical order.
    pub fn missing_keys(&self) -> Vec<AttributeKey> {
        AttributeKey::ALL
            .iter()
            .copied()
            .filter(|key| !self.values.contains_key(key))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_keys().is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AttributeKey, &str)> {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One entry of the Do or Don't catalog: an item name plus its display swatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogItem {
    pub name: &'static str,
    pub color: &'static str,
}

/// The do/don't lists handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub dos: Vec<CatalogItem>,
    pub donts: Vec<CatalogItem>,
}

/// Attributes derived from the face photo. One color sample backs all three
/// hex fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaceAttributes {
    pub hair: HairColor,
    pub eye: EyeColor,
    pub skin: SkinTone,
    pub hex: String,
}

impl FaceAttributes {
    pub fn delta(&self) -> AttributeDelta {
        vec![
            (AttributeKey::HairColor, self.hair.label().to_string()),
            (AttributeKey::EyeColor, self.eye.label().to_string()),
            (AttributeKey::SkinTone, self.skin.label().to_string()),
            (AttributeKey::HairColorHex, self.hex.clone()),
            (AttributeKey::EyeColorHex, self.hex.clone()),
            (AttributeKey::SkinToneHex, self.hex.clone()),
        ]
    }
}

/// Attributes derived from the wrist/vein photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VeinAttributes {
    pub vein: VeinColor,
    pub undertone: Undertone,
    pub hex: String,
}

impl VeinAttributes {
    pub fn delta(&self) -> AttributeDelta {
        vec![
            (AttributeKey::VeinColor, self.vein.label().to_string()),
            (AttributeKey::VeinUndertone, self.undertone.label().to_string()),
            (AttributeKey::VeinColorHex, self.hex.clone()),
        ]
    }
}

/// Attributes drawn for the body photo step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BodyAttributes {
    pub shape: BodyShape,
    pub proportion: BodyProportion,
}

impl BodyAttributes {
    pub fn delta(&self) -> AttributeDelta {
        vec![
            (AttributeKey::BodyShape, self.shape.label().to_string()),
            (AttributeKey::BodyProportion, self.proportion.label().to_string()),
        ]
    }
}
