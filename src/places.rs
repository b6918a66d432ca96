//! Named places loaded from a CSV gazetteer (`name,lon,lat`) and distance
//! queries between them.

use anyhow::{Context, Result};
use csv::{ReaderBuilder, Trim};
use fnv::FnvHashMap;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::fs::File;
use std::io::Read;
use tracing::debug;

use crate::error::GeoError;
use crate::geo::{distance, GeoCoordinate};

#[derive(Clone, Debug, PartialEq)]
pub struct Place {
    pub name: String,
    pub coord: GeoCoordinate,
}

#[derive(Debug, Default)]
pub struct Gazetteer {
    places: Vec<Place>,
    by_name: FnvHashMap<String, usize>,
}

fn by_distance_then_name(a: &(&Place, f64), b: &(&Place, f64)) -> Ordering {
    OrderedFloat(a.1)
        .cmp(&OrderedFloat(b.1))
        .then_with(|| a.0.name.cmp(&b.0.name))
}

impl Gazetteer {
    pub fn from_csv_path(path: &str) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("opening {}", path))?;
        Self::from_reader(file).with_context(|| format!("reading gazetteer {}", path))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut gazetteer = Gazetteer::default();
        for (i, result) in rdr.records().enumerate() {
            // +2: one for the header, one for 1-based rows
            let row = i + 2;
            let record = result.with_context(|| format!("row {}", row))?;
            let field = |idx: usize, name: &str| {
                record
                    .get(idx)
                    .with_context(|| format!("row {}: missing {}", row, name))
            };
            let name = field(0, "name")?.to_string();
            let lon: f64 = field(1, "lon")?
                .parse()
                .with_context(|| format!("row {}: parsing lon", row))?;
            let lat: f64 = field(2, "lat")?
                .parse()
                .with_context(|| format!("row {}: parsing lat", row))?;
            let coord =
                GeoCoordinate::checked(lon, lat).with_context(|| format!("row {}", row))?;
            gazetteer
                .insert(Place { name, coord })
                .with_context(|| format!("row {}", row))?;
        }
        Ok(gazetteer)
    }

    pub fn insert(&mut self, place: Place) -> Result<(), GeoError> {
        if self.by_name.contains_key(&place.name) {
            return Err(GeoError::DuplicatePlace(place.name));
        }
        self.by_name.insert(place.name.clone(), self.places.len());
        self.places.push(place);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Place> {
        self.by_name.get(name).map(|&idx| &self.places[idx])
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Place> {
        self.places.iter()
    }

    /// Distance from `name` to every other place, nearest first.
    pub fn distances_from(&self, name: &str, radius: f64) -> Result<Vec<(&Place, f64)>, GeoError> {
        let source = self
            .get(name)
            .ok_or_else(|| GeoError::UnknownPlace(name.to_string()))?;
        let mut dists: Vec<(&Place, f64)> = self
            .places
            .iter()
            .filter(|p| p.name != source.name)
            .map(|p| (p, distance(source.coord, p.coord, radius)))
            .collect();
        dists.sort_by(by_distance_then_name);
        debug!(source = name, targets = dists.len(), "computed distances");
        Ok(dists)
    }

    pub fn nearest(&self, name: &str, k: usize, radius: f64) -> Result<Vec<(&Place, f64)>, GeoError> {
        let mut dists = self.distances_from(name, radius)?;
        dists.truncate(k);
        Ok(dists)
    }

    /// The two places farthest apart, or None with fewer than two places.
    /// Compares every pair (O(n²)); on ties the first pair in insertion order wins.
    pub fn farthest_pair(&self, radius: f64) -> Option<(&Place, &Place, f64)> {
        let mut best: Option<(&Place, &Place, f64)> = None;
        for (i, a) in self.places.iter().enumerate() {
            for b in &self.places[i + 1..] {
                let d = distance(a.coord, b.coord, radius);
                if best.map_or(true, |(_, _, bd)| OrderedFloat(d) > OrderedFloat(bd)) {
                    best = Some((a, b, d));
                }
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::EARTH_MEAN_RADIUS_KM;

    const NORDIC: &str = "name,lon,lat
Oslo,10.75,59.91
Stockholm,18.07,59.33
Copenhagen,12.57,55.68
Anchorage,-149.90,61.22
";

    fn names<'a>(dists: &[(&'a Place, f64)]) -> Vec<&'a str> {
        dists.iter().map(|(p, _)| p.name.as_str()).collect()
    }

    #[test]
    fn test_load_from_reader() {
        let g = Gazetteer::from_reader(NORDIC.as_bytes()).unwrap();
        assert_eq!(g.len(), 4);
        assert!(!g.is_empty());
        assert_eq!(g.get("Oslo").unwrap().coord, GeoCoordinate::new(10.75, 59.91));
        assert!(g.get("Bergen").is_none());
        assert_eq!(g.iter().next().unwrap().name, "Oslo");
    }

    #[test]
    fn test_distances_from_are_sorted() {
        let g = Gazetteer::from_reader(NORDIC.as_bytes()).unwrap();
        let dists = g.distances_from("Oslo", EARTH_MEAN_RADIUS_KM).unwrap();
        assert_eq!(names(&dists), vec!["Stockholm", "Copenhagen", "Anchorage"]);
        assert!((dists[0].1 - 416.4).abs() < 1.0);
        assert!((dists[1].1 - 482.5).abs() < 1.0);
        assert!((dists[2].1 - 6444.1).abs() < 1.0);
    }

    #[test]
    fn test_nearest() {
        let g = Gazetteer::from_reader(NORDIC.as_bytes()).unwrap();
        let near = g.nearest("Oslo", 2, EARTH_MEAN_RADIUS_KM).unwrap();
        assert_eq!(names(&near), vec!["Stockholm", "Copenhagen"]);
        assert_eq!(g.nearest("Oslo", 10, EARTH_MEAN_RADIUS_KM).unwrap().len(), 3);
    }

    #[test]
    fn test_unknown_source() {
        let g = Gazetteer::from_reader(NORDIC.as_bytes()).unwrap();
        assert_eq!(
            g.distances_from("Bergen", EARTH_MEAN_RADIUS_KM).unwrap_err(),
            GeoError::UnknownPlace("Bergen".to_string())
        );
    }

    #[test]
    fn test_ties_break_by_name() {
        let csv = "name,lon,lat\norigin,0,0\nnorth,0,1\neast,1,0\n";
        let g = Gazetteer::from_reader(csv.as_bytes()).unwrap();
        let dists = g.distances_from("origin", 1.0).unwrap();
        assert_eq!(names(&dists), vec!["east", "north"]);
    }

    #[test]
    fn test_farthest_pair() {
        let g = Gazetteer::from_reader(NORDIC.as_bytes()).unwrap();
        let (a, b, d) = g.farthest_pair(EARTH_MEAN_RADIUS_KM).unwrap();
        assert_eq!(a.name, "Copenhagen");
        assert_eq!(b.name, "Anchorage");
        assert!(d > 6444.0);

        // a-d and b-c are mirror images across the equator, so equally long.
        let rect = "name,lon,lat\na,0,1\nb,0,-1\nc,50,1\nd,50,-1\n";
        let g = Gazetteer::from_reader(rect.as_bytes()).unwrap();
        let (a, b, d) = g.farthest_pair(1.0).unwrap();
        assert_eq!((a.name.as_str(), b.name.as_str()), ("a", "d"));
        let bc = distance(g.get("b").unwrap().coord, g.get("c").unwrap().coord, 1.0);
        assert_eq!(d, bc);

        let single = Gazetteer::from_reader("name,lon,lat\nOslo,10.75,59.91\n".as_bytes()).unwrap();
        assert!(single.farthest_pair(EARTH_MEAN_RADIUS_KM).is_none());
    }

    #[test]
    fn test_rejects_duplicates() {
        let csv = "name,lon,lat\nOslo,10.75,59.91\nOslo,10.75,59.91\n";
        let err = Gazetteer::from_reader(csv.as_bytes()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<GeoError>(),
            Some(&GeoError::DuplicatePlace("Oslo".to_string()))
        );
    }

    #[test]
    fn test_rejects_out_of_range_rows() {
        let csv = "name,lon,lat\nOslo,10.75,59.91\nNowhere,200,0\n";
        let err = Gazetteer::from_reader(csv.as_bytes()).unwrap_err();
        assert!(format!("{:#}", err).contains("row 3"));
        assert_eq!(
            err.downcast_ref::<GeoError>(),
            Some(&GeoError::LongitudeOutOfRange(200.0))
        );
    }

    #[test]
    fn test_rejects_unparsable_rows() {
        let csv = "name,lon,lat\nOslo,east,59.91\n";
        let err = Gazetteer::from_reader(csv.as_bytes()).unwrap_err();
        assert!(format!("{:#}", err).contains("parsing lon"));
    }
}
