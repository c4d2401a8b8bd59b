//! Coordinate type and the small amount of spherical geometry the map needs.
//!
//! Distances use the haversine formula. It ignores the Earth's flattening,
//! which is irrelevant at the scale of matching a dragged marker.

use serde::{Deserialize, Serialize};

/// Earth radius in meters.
const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(coordinate: Coordinate) -> Self {
        (coordinate.latitude, coordinate.longitude)
    }
}

/// Axis-aligned latitude/longitude box.
///
/// `min` and `max` are per-axis extremes and need not be real corner points
/// of whatever shape they were computed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Coordinate,
    pub max: Coordinate,
}

impl BoundingBox {
    /// Whether `point` lies inside the box, edges included.
    pub fn contains(&self, point: Coordinate) -> bool {
        (self.min.latitude..=self.max.latitude).contains(&point.latitude)
            && (self.min.longitude..=self.max.longitude).contains(&point.longitude)
    }
}

/// Component-wise min/max over the projected corners of a viewport.
pub fn bounding_box(corners: &[Coordinate; 4]) -> BoundingBox {
    let mut min = corners[0];
    let mut max = corners[0];

    for corner in &corners[1..] {
        min.latitude = min.latitude.min(corner.latitude);
        min.longitude = min.longitude.min(corner.longitude);
        max.latitude = max.latitude.max(corner.latitude);
        max.longitude = max.longitude.max(corner.longitude);
    }

    BoundingBox { min, max }
}

/// Great-circle distance between two points in meters.
pub fn great_circle_distance_meters(from: Coordinate, to: Coordinate) -> f64 {
    let lat1_rad = from.latitude.to_radians();
    let lat2_rad = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lng = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_METERS * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_same_point() {
        let p = Coordinate::new(36.1, -115.1);
        assert!(great_circle_distance_meters(p, p) < 0.001);
    }

    #[test]
    fn test_distance_known() {
        // Las Vegas to Los Angeles, roughly 370 km
        let dist = great_circle_distance_meters(
            Coordinate::new(36.17, -115.14),
            Coordinate::new(34.05, -118.24),
        );
        assert!(dist > 350_000.0 && dist < 400_000.0, "got {}", dist);
    }

    #[test]
    fn test_distance_small_offset() {
        let dist = great_circle_distance_meters(
            Coordinate::new(10.0, 10.0),
            Coordinate::new(10.00005, 10.00005),
        );
        assert!(dist > 6.0 && dist < 9.0, "expected ~7m, got {}", dist);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = Coordinate::new(36.1, -115.1);
        let b = Coordinate::new(36.2, -115.2);
        assert_eq!(
            great_circle_distance_meters(a, b),
            great_circle_distance_meters(b, a)
        );
    }

    #[test]
    fn test_bounding_box_mixes_corners() {
        // rotated viewport: no single corner holds both minima
        let corners = [
            Coordinate::new(1.0, 5.0),
            Coordinate::new(0.0, 3.0),
            Coordinate::new(4.0, 2.0),
            Coordinate::new(3.0, 6.0),
        ];
        let bounds = bounding_box(&corners);
        assert_eq!(bounds.min, Coordinate::new(0.0, 2.0));
        assert_eq!(bounds.max, Coordinate::new(4.0, 6.0));
    }

    #[test]
    fn test_bounding_box_contains() {
        let bounds = BoundingBox {
            min: Coordinate::new(0.0, 0.0),
            max: Coordinate::new(1.0, 1.0),
        };
        assert!(bounds.contains(Coordinate::new(0.5, 0.5)));
        assert!(bounds.contains(Coordinate::new(1.0, 0.0)));
        assert!(!bounds.contains(Coordinate::new(1.5, 0.5)));
    }

    #[test]
    fn test_tuple_conversion() {
        let c: Coordinate = (1.5, 2.5).into();
        assert_eq!(c.latitude, 1.5);
        let back: (f64, f64) = c.into();
        assert_eq!(back, (1.5, 2.5));
    }
}
