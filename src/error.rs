use crate::models::AttributeKey;
use thiserror::Error;

/// Uploaded bytes were not a decodable raster image. The stage that hit this
/// is not marked complete; the record is left untouched.
#[derive(Error, Debug)]
#[error("failed to decode image: {0}")]
pub struct DecodeError(#[from] pub image::ImageError);

/// A recommendation was requested before every attribute key was populated.
/// Carries the absent keys in canonical order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("missing attributes: {}", .0.iter().map(|k| k.name()).collect::<Vec<_>>().join(", "))]
pub struct MissingKeysError(pub Vec<AttributeKey>);
