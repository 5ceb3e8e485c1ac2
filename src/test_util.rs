//! Shared shape builders for the crate's tests.

use crate::area::EARTH_RADIUS_M;
use crate::coord::{LngLat, Ring};

/// ring_of builds a coordinate sequence from (lng, lat) degree pairs.
pub(crate) fn ring_of(pairs: &[(f64, f64)]) -> Ring {
    pairs
        .iter()
        .map(|&(lng, lat)| LngLat::new(lng, lat))
        .collect()
}

/// unit_square returns the closed unit square in degrees.
pub(crate) fn unit_square() -> Ring {
    ring_of(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)])
}

/// lat_degrees converts a north-south distance in meters to degrees of
/// latitude.
pub(crate) fn lat_degrees(meters: f64) -> f64 {
    (meters / EARTH_RADIUS_M).to_degrees()
}

/// lng_degrees converts an east-west distance in meters to degrees of
/// longitude at the given latitude.
pub(crate) fn lng_degrees(meters: f64, lat_deg: f64) -> f64 {
    (meters / (EARTH_RADIUS_M * lat_deg.to_radians().cos())).to_degrees()
}

/// square_ring_m builds a closed, counterclockwise square ring of the given
/// side length in meters, centered on (center_lng, center_lat).
pub(crate) fn square_ring_m(center_lng: f64, center_lat: f64, side_m: f64) -> Ring {
    let half_lat = lat_degrees(side_m / 2.0);
    let half_lng = lng_degrees(side_m / 2.0, center_lat);

    ring_of(&[
        (center_lng - half_lng, center_lat - half_lat),
        (center_lng + half_lng, center_lat - half_lat),
        (center_lng + half_lng, center_lat + half_lat),
        (center_lng - half_lng, center_lat + half_lat),
        (center_lng - half_lng, center_lat - half_lat),
    ])
}
