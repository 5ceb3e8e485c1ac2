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

use cgmath::{InnerSpace, Vector2};

use crate::area::ring_area_m2;
use crate::coord::{LngLat, Ring};
use crate::geometry::Geometry;
use crate::rect::Rect;
use crate::ring::{distinct_vertex_count, normalize_ring};
use crate::segment::segments_properly_cross;
use crate::validate::Verdict;

/// SplitOptions carries the tunable heuristics of the split engine. The
/// defaults are the values the zone-management workflow ships with; tighten
/// them per deployment if precision requirements change.
#[derive(Clone, Copy, Debug)]
pub struct SplitOptions {
    /// Minimum projected area, in square meters, for a partial polygon to be
    /// accepted as a split result. Smaller slivers are silently dropped.
    pub min_area_m2: f64,
    /// Multiple of the parcel's largest bounding-box dimension by which a
    /// non-traversing cutting line is extended past both endpoints.
    pub extension_factor: f64,
}

impl Default for SplitOptions {
    fn default() -> Self {
        SplitOptions {
            min_area_m2: 1.0,
            extension_factor: 3.0,
        }
    }
}

/// split_with_line partitions a parcel boundary into two disjoint
/// sub-boundaries along the given cutting line, with the default
/// `SplitOptions`.
///
/// The returned vector holds either at least 2 polygons or nothing at all:
/// an empty result means "could not split here", never "split into zero
/// pieces". There is no error path; every structural problem (wrong shape
/// kinds, missing ring, degenerate line) degrades to an empty result.
pub fn split_with_line(parcel: &Geometry, cutting_line: &Geometry) -> Vec<Geometry> {
    split_with_line_opts(parcel, cutting_line, SplitOptions::default())
}

/// split_with_line_opts is `split_with_line` with explicit options.
///
/// The cut runs along the implicit infinite line through the cutting line's
/// first and last coordinates, independent of its intermediate vertices.
/// Every ring vertex is classified by the side of that line it falls on, and
/// the two sides are closed into candidate polygons, inserting the
/// line/boundary crossing points so each candidate is bounded by the chord.
/// A candidate survives only with at least 3 distinct vertices, a valid
/// closed ring, and a projected area above `min_area_m2`.
///
/// When the drawn line crosses the parcel boundary fewer than 2 times (the
/// common failure mode of a short hand-drawn stroke whose endpoints happen
/// to sit outside the shape without traversing it), the line is first
/// extended symmetrically past both endpoints, along its own direction, by
/// `extension_factor` times the parcel's largest bounding-box dimension, so
/// the infinite-line classification provably spans the whole parcel. A
/// zero-length cutting line has no direction to extend along and aborts with
/// an empty result.
pub fn split_with_line_opts(
    parcel: &Geometry,
    cutting_line: &Geometry,
    opts: SplitOptions,
) -> Vec<Geometry> {
    let outer = match parcel.outer_ring() {
        Some(ring) => ring,
        None => return Vec::new(),
    };
    let line = match cutting_line {
        Geometry::LineString(pts) if pts.len() >= 2 => pts,
        _ => return Vec::new(),
    };

    let ring = normalize_ring(outer);
    if ring.len() < 4 {
        return Vec::new();
    }

    let from = line[0];
    let to = line[line.len() - 1];

    if boundary_crossings(&ring, line) >= 2 {
        return simple_split(&ring, from, to, opts);
    }

    if from == to {
        return Vec::new();
    }

    let bound = match Rect::from_points(&ring) {
        Some(b) => b,
        None => return Vec::new(),
    };
    let extension = bound.largest_dimension() * opts.extension_factor;
    let dir = Vector2::new(to.lng() - from.lng(), to.lat() - from.lat()).normalize();
    let ext_from = LngLat::new(
        from.lng() - dir.x * extension,
        from.lat() - dir.y * extension,
    );
    let ext_to = LngLat::new(to.lng() + dir.x * extension, to.lat() + dir.y * extension);

    simple_split(&ring, ext_from, ext_to, opts)
}

/// validate_cutting_line runs the cheap pre-checks the drawing tool applies
/// before attempting a split: the line must have at least 2 vertices and its
/// bounding box must overlap the parcel's. This is an upfront rejection
/// only, not a substitute for the split's own geometric checks.
pub fn validate_cutting_line(parcel: &Geometry, cutting_line: &Geometry) -> Verdict {
    let line = match cutting_line {
        Geometry::LineString(pts) => pts,
        _ => return Verdict::fail("the cutting line must be a line shape"),
    };
    if line.len() < 2 {
        return Verdict::fail("the cutting line needs at least 2 points");
    }

    let ring = match parcel.outer_ring() {
        Some(ring) if !ring.is_empty() => ring,
        _ => return Verdict::fail("the parcel must be an areal shape"),
    };

    let parcel_bound = match Rect::from_points(ring) {
        Some(b) => b,
        None => return Verdict::fail("the parcel must be an areal shape"),
    };
    let line_bound = match Rect::from_points(line) {
        Some(b) => b,
        None => return Verdict::fail("the cutting line needs at least 2 points"),
    };

    if !parcel_bound.intersects(&line_bound) {
        return Verdict::fail("the cutting line does not overlap the parcel");
    }

    Verdict::ok()
}

/// boundary_crossings counts proper crossings between the cutting polyline's
/// segments and the closed ring's edges.
fn boundary_crossings(ring: &[LngLat], line: &[LngLat]) -> usize {
    let mut count = 0;
    for seg in line.windows(2) {
        for edge in ring.windows(2) {
            if segments_properly_cross(seg[0], seg[1], edge[0], edge[1]) {
                count += 1;
            }
        }
    }
    count
}

/// simple_split performs the half-plane partition of a closed ring along the
/// infinite line through `from` and `to`.
fn simple_split(ring: &[LngLat], from: LngLat, to: LngLat, opts: SplitOptions) -> Vec<Geometry> {
    // Implicit line equation a*x + b*y + c = 0 through from and to.
    let a = to.lat() - from.lat();
    let b = from.lng() - to.lng();
    let c = to.lng() * from.lat() - from.lng() * to.lat();

    // The closing duplicate would classify twice; walk distinct vertices and
    // wrap manually.
    let verts = &ring[..ring.len() - 1];
    let n = verts.len();

    let mut left: Ring = Vec::new();
    let mut right: Ring = Vec::new();

    for i in 0..n {
        let v = verts[i];
        let w = verts[(i + 1) % n];
        let side_v = a * v.lng() + b * v.lat() + c;
        let side_w = a * w.lng() + b * w.lat() + c;

        // A vertex on the line itself bounds both halves.
        if side_v >= 0.0 {
            left.push(v);
        }
        if side_v <= 0.0 {
            right.push(v);
        }

        // When the edge to the next vertex switches sides, the crossing
        // point closes one half and opens the other.
        if (side_v > 0.0 && side_w < 0.0) || (side_v < 0.0 && side_w > 0.0) {
            let t = side_v / (side_v - side_w);
            let crossing = LngLat::new(
                v.lng() + t * (w.lng() - v.lng()),
                v.lat() + t * (w.lat() - v.lat()),
            );
            left.push(crossing);
            right.push(crossing);
        }
    }

    if left.is_empty() || right.is_empty() {
        return Vec::new();
    }

    let mut accepted = Vec::new();
    for part in vec![left, right] {
        if distinct_vertex_count(&part) < 3 {
            continue;
        }
        let closed = normalize_ring(&part);
        if !ring_is_valid(&closed) {
            continue;
        }
        match ring_area_m2(&closed) {
            Some(m2) if m2 > opts.min_area_m2 => accepted.push(Geometry::polygon(closed)),
            _ => {}
        }
    }

    if accepted.len() >= 2 {
        accepted
    } else {
        Vec::new()
    }
}

/// ring_is_valid reports whether a closed ring is usable as a split result:
/// finite coordinates throughout and at least 3 distinct vertices.
fn ring_is_valid(ring: &[LngLat]) -> bool {
    ring.len() >= 4
        && distinct_vertex_count(ring) >= 3
        && ring
            .iter()
            .all(|v| v.lng().is_finite() && v.lat().is_finite())
}
