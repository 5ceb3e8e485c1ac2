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

//! Planar segment predicates shared by the containment validator and the
//! split engine. All arithmetic is in degree space; the predicates only ever
//! compare signs and near-zero magnitudes, so no projection is needed.

use crate::coord::LngLat;

/// Tolerance for treating a cross product as zero (collinear points).
pub(crate) const COLLINEAR_EPSILON: f64 = 1e-12;

/// orient returns the signed cross product of (b - a) and (c - a): positive
/// when c lies to the left of the directed segment a->b, negative to the
/// right, near zero when the three points are collinear.
#[inline]
pub(crate) fn orient(a: LngLat, b: LngLat, c: LngLat) -> f64 {
    (b.lng() - a.lng()) * (c.lat() - a.lat()) - (b.lat() - a.lat()) * (c.lng() - a.lng())
}

/// on_segment reports whether p lies on the closed segment a..b, within the
/// collinearity tolerance. A degenerate segment (a == b) contains only its
/// own point.
pub(crate) fn on_segment(p: LngLat, a: LngLat, b: LngLat) -> bool {
    if orient(a, b, p).abs() > COLLINEAR_EPSILON {
        return false;
    }

    let len2 = (b.lng() - a.lng()).powi(2) + (b.lat() - a.lat()).powi(2);
    if len2 == 0.0 {
        return p == a;
    }

    // Collinear; check that p projects inside the segment's extent.
    let dot =
        (p.lng() - a.lng()) * (b.lng() - a.lng()) + (p.lat() - a.lat()) * (b.lat() - a.lat());
    dot >= -COLLINEAR_EPSILON && dot <= len2 + COLLINEAR_EPSILON
}

/// segments_properly_cross reports whether segments ab and cd intersect at a
/// point interior to both. Touching at an endpoint, or overlapping along a
/// shared line, does not count: containment stays boundary-inclusive, so a
/// child edge running along a parent edge is not a crossing.
pub(crate) fn segments_properly_cross(a: LngLat, b: LngLat, c: LngLat, d: LngLat) -> bool {
    let d1 = orient(c, d, a);
    let d2 = orient(c, d, b);
    let d3 = orient(a, b, c);
    let d4 = orient(a, b, d);

    (d1 > 0.0) != (d2 > 0.0)
        && (d3 > 0.0) != (d4 > 0.0)
        && d1.abs() > COLLINEAR_EPSILON
        && d2.abs() > COLLINEAR_EPSILON
        && d3.abs() > COLLINEAR_EPSILON
        && d4.abs() > COLLINEAR_EPSILON
}
