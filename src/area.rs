// Copyright 2025 The fieldgeom authors. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use cgmath::Vector2;

use crate::coord::LngLat;
use crate::geometry::Geometry;
use crate::ring::normalize_ring;

/// Earth radius in meters, the scale factor of the local projection.
pub(crate) const EARTH_RADIUS_M: f64 = 6_378_137.0;

const M2_PER_HECTARE: f64 = 10_000.0;

/// polygon_area_hectares returns the planar area of a parcel boundary in
/// hectares, rounded to 4 decimal places, or None when the shape is not a
/// Polygon, has no ring, or its normalized ring has fewer than 4 points
/// (fewer than 3 distinct vertices).
///
/// The ring is projected onto a local tangent plane first: an
/// equirectangular projection anchored at the mean latitude of the vertices,
/// scaling longitude by the cosine of that latitude and both axes by the
/// Earth radius. The shoelace formula over the projected vertices then gives
/// the area. Parcel-scale shapes (sub-hundred-hectare) incur negligible
/// distortion from the single-latitude approximation, and the computation is
/// closed-form; no iterative geodesic solver is needed.
///
/// The result is always >= 0. A degenerate input that meets the vertex-count
/// precondition (e.g. three distinct collinear vertices) yields 0.0, not an
/// error.
pub fn polygon_area_hectares(polygon: &Geometry) -> Option<f64> {
    let ring = polygon.outer_ring()?;
    let m2 = ring_area_m2(ring)?;
    Some(round4(m2 / M2_PER_HECTARE))
}

/// ring_area_m2 returns the projected planar area bounded by the ring in
/// square meters, or None when the normalized ring has fewer than 4 points.
/// The split engine shares this with the area computation for its
/// minimum-area acceptance check.
pub(crate) fn ring_area_m2(ring: &[LngLat]) -> Option<f64> {
    let closed = normalize_ring(ring);
    if closed.len() < 4 {
        return None;
    }

    // Drop the closing duplicate for the summation; the shoelace pass wraps
    // the last vertex back to the first on its own.
    let verts = &closed[..closed.len() - 1];
    if verts.len() < 3 {
        return None;
    }

    let projected = project_to_plane(verts);

    let mut sum = 0.0;
    for i in 0..projected.len() {
        let a = projected[i];
        let b = projected[(i + 1) % projected.len()];
        sum += a.x * b.y - b.x * a.y;
    }

    Some(sum.abs() / 2.0)
}

/// project_to_plane maps degree-space vertices to meters on the local
/// tangent plane anchored at their mean latitude.
fn project_to_plane(verts: &[LngLat]) -> Vec<Vector2<f64>> {
    let mean_lat: f64 = verts.iter().map(|v| v.lat()).sum::<f64>() / verts.len() as f64;
    let cos_lat = mean_lat.to_radians().cos();

    verts
        .iter()
        .map(|v| {
            Vector2::new(
                v.lng().to_radians() * cos_lat * EARTH_RADIUS_M,
                v.lat().to_radians() * EARTH_RADIUS_M,
            )
        })
        .collect()
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
