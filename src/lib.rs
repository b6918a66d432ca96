//! Great-circle (haversine) distances on a spherical Earth.

pub mod cli;
pub mod error;
pub mod geo;
pub mod places;
pub mod units;

pub use error::GeoError;
pub use geo::{
    central_angle, distance, distance_km, haversine_meters, GeoCoordinate, EARTH_MEAN_RADIUS_KM,
};
pub use places::{Gazetteer, Place};
pub use units::DistanceUnit;
