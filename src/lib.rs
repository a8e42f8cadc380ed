pub mod error;
pub mod extract;
pub mod models;
pub mod recommend;
pub mod session;

pub use error::{DecodeError, MissingKeysError};
pub use models::{
    AttributeDelta, AttributeKey, AttributeRecord, BodyAttributes, BodyProportion, BodyShape,
    CatalogItem, EyeColor, FaceAttributes, HairColor, Recommendation, RgbColor, SkinTone,
    Undertone, VeinAttributes, VeinColor,
};
pub use session::{WizardSession, WizardStage, WizardStep};
