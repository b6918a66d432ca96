//! Error types for coordinate validation and gazetteer lookups

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    #[error("Longitude out of range: {0} (expected -180..=180)")]
    LongitudeOutOfRange(f64),

    #[error("Latitude out of range: {0} (expected -90..=90)")]
    LatitudeOutOfRange(f64),

    #[error("Non-finite coordinate: ({lon}, {lat})")]
    NonFinite { lon: f64, lat: f64 },

    #[error("Invalid radius: {0} (must be finite and positive)")]
    InvalidRadius(f64),

    #[error("Unknown unit: {0}, possible options are: (\"km\", \"m\", \"mi\", \"nmi\")")]
    UnknownUnit(String),

    #[error("Unknown place: {0}")]
    UnknownPlace(String),

    #[error("Duplicate place: {0}")]
    DuplicatePlace(String),
}
