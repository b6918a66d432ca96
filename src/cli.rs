//! Argument handling shared by the `distance` and `csv` binaries.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::error::GeoError;
use crate::geo::GeoCoordinate;
use crate::units::DistanceUnit;

/// Default log filter: the library plus the calling binary, at info.
pub fn default_filter(bin_target: &str) -> String {
    format!("greatcircle=info,{}=info", bin_target)
}

/// Logs go to stderr so stdout carries only results. `RUST_LOG` overrides
/// the default filter.
pub fn init_logging(bin_target: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter(bin_target))),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Parses `LON,LAT` in degrees. With `validate`, coordinates must lie in
/// [-180, 180] x [-90, 90].
pub fn parse_coordinate(s: &str, validate: bool) -> Result<GeoCoordinate> {
    let (lon, lat) = s
        .split_once(',')
        .with_context(|| format!("expected LON,LAT, got {:?}", s))?;
    let lon: f64 = lon.trim().parse().with_context(|| format!("parsing lon in {:?}", s))?;
    let lat: f64 = lat.trim().parse().with_context(|| format!("parsing lat in {:?}", s))?;
    if validate {
        Ok(GeoCoordinate::checked(lon, lat)?)
    } else {
        Ok(GeoCoordinate::new(lon, lat))
    }
}

/// An explicit radius wins over the unit's mean Earth radius.
pub fn resolve_radius(radius: Option<f64>, unit: DistanceUnit) -> Result<f64, GeoError> {
    match radius {
        Some(r) if !(r.is_finite() && r > 0.0) => Err(GeoError::InvalidRadius(r)),
        Some(r) => Ok(r),
        None => Ok(unit.radius()),
    }
}
