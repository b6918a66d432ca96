use crate::error::GeoError;
use crate::geo::EARTH_MEAN_RADIUS_KM;

const KM_PER_MILE: f64 = 1.609344;
const KM_PER_NAUTICAL_MILE: f64 = 1.852;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DistanceUnit {
    Kilometers,
    Meters,
    Miles,
    NauticalMiles,
}

impl DistanceUnit {
    pub fn from(string: &str) -> Result<Self, GeoError> {
        match string {
            "km" => Ok(DistanceUnit::Kilometers),
            "m" => Ok(DistanceUnit::Meters),
            "mi" => Ok(DistanceUnit::Miles),
            "nmi" => Ok(DistanceUnit::NauticalMiles),
            _ => Err(GeoError::UnknownUnit(string.to_string())),
        }
    }

    /// Mean Earth radius expressed in this unit.
    pub fn radius(&self) -> f64 {
        match self {
            DistanceUnit::Kilometers => EARTH_MEAN_RADIUS_KM,
            DistanceUnit::Meters => EARTH_MEAN_RADIUS_KM * 1000.0,
            DistanceUnit::Miles => EARTH_MEAN_RADIUS_KM / KM_PER_MILE,
            DistanceUnit::NauticalMiles => EARTH_MEAN_RADIUS_KM / KM_PER_NAUTICAL_MILE,
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Meters => "m",
            DistanceUnit::Miles => "mi",
            DistanceUnit::NauticalMiles => "nmi",
        }
    }
}
