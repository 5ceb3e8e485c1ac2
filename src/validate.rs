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

use crate::coord::{LngLat, Ring};
use crate::error::{GeomError, GeomResult};
use crate::geometry::Geometry;
use crate::ring::{distinct_vertex_count, normalize_ring};
use crate::segment::{on_segment, segments_properly_cross};

const PARENT_NOT_AREAL: &str = "parent must be an areal shape";
const POINT_OUTSIDE: &str = "the point is not within the boundaries of the parent area";
const POLYGON_OUTSIDE: &str = "some parts are outside the parent boundary.";
const LINE_OUTSIDE: &str = "some parts of the line are outside the parent boundary.";

/// Verdict is the outcome of a containment validation: a pass/fail flag and,
/// on failure, a short user-facing sentence saying why. The submission
/// pipeline surfaces the reason verbatim to the end user.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Verdict {
    pub valid: bool,
    pub reason: Option<String>,
}

impl Verdict {
    /// ok returns a passing verdict with no reason attached.
    pub fn ok() -> Verdict {
        Verdict {
            valid: true,
            reason: None,
        }
    }

    /// fail returns a failing verdict carrying the given reason.
    pub fn fail<S: Into<String>>(reason: S) -> Verdict {
        Verdict {
            valid: false,
            reason: Some(reason.into()),
        }
    }
}

/// validate_within reports whether the child shape lies entirely inside (or
/// on the boundary of) the parent area. The parent must be a Polygon or
/// MultiPolygon; any other parent kind fails with "parent must be an areal
/// shape" regardless of the child.
///
/// Containment is boundary-inclusive throughout: a point exactly on a parent
/// edge is valid. Per child kind:
///
/// - Point: single point-in-area test.
/// - Polygon / MultiPolygon: every constituent outer ring must lie entirely
///   within the parent area; partial overlap fails.
/// - LineString / MultiLineString: every vertex must individually lie in the
///   parent area. This is a vertex sampling approximation: a segment between
///   two inside vertices that bows outside a concave parent boundary is not
///   detected.
///
/// This function sits on a user-input path and therefore never panics and
/// never returns an error: any internal fault over malformed coordinate data
/// is caught and reported as a failed verdict with a reason prefixed
/// "validation error:". Identical inputs always produce identical verdicts.
pub fn validate_within(child: &Geometry, parent: &Geometry) -> Verdict {
    match try_validate_within(child, parent) {
        Ok(verdict) => verdict,
        Err(err) => Verdict::fail(format!("validation error: {}", err)),
    }
}

fn try_validate_within(child: &Geometry, parent: &Geometry) -> GeomResult<Verdict> {
    let parent_rings = match areal_rings(parent)? {
        Some(rings) => rings,
        None => return Ok(Verdict::fail(PARENT_NOT_AREAL)),
    };

    let verdict = match child {
        Geometry::Point(p) => {
            if point_in_area(*p, &parent_rings) {
                Verdict::ok()
            } else {
                Verdict::fail(POINT_OUTSIDE)
            }
        }
        Geometry::LineString(pts) => validate_line(pts, &parent_rings)?,
        Geometry::Polygon(rings) => {
            let ring = closed_outer_ring(rings)?;
            if ring_within_area(&ring, &parent_rings) {
                Verdict::ok()
            } else {
                Verdict::fail(POLYGON_OUTSIDE)
            }
        }
        Geometry::MultiPolygon(polys) => {
            if polys.is_empty() {
                return Err(GeomError::InvalidGeometry(
                    "multi polygon has no polygons".to_string(),
                ));
            }
            for rings in polys {
                let ring = closed_outer_ring(rings)?;
                if !ring_within_area(&ring, &parent_rings) {
                    return Ok(Verdict::fail(POLYGON_OUTSIDE));
                }
            }
            Verdict::ok()
        }
        Geometry::MultiLineString(lines) => {
            if lines.is_empty() {
                return Err(GeomError::InvalidGeometry(
                    "multi line string has no lines".to_string(),
                ));
            }
            for pts in lines {
                let v = validate_line(pts, &parent_rings)?;
                if !v.valid {
                    return Ok(v);
                }
            }
            Verdict::ok()
        }
    };

    Ok(verdict)
}

fn validate_line(pts: &[LngLat], parent_rings: &[Vec<LngLat>]) -> GeomResult<Verdict> {
    if pts.is_empty() {
        return Err(GeomError::InvalidGeometry(
            "line string has no positions".to_string(),
        ));
    }
    if pts.iter().all(|p| point_in_area(*p, parent_rings)) {
        Ok(Verdict::ok())
    } else {
        Ok(Verdict::fail(LINE_OUTSIDE))
    }
}

/// areal_rings extracts the closed outer rings of an areal parent, or None
/// when the parent kind carries no area at all.
fn areal_rings(parent: &Geometry) -> GeomResult<Option<Vec<Vec<LngLat>>>> {
    match parent {
        Geometry::Polygon(rings) => Ok(Some(vec![closed_outer_ring(rings)?])),
        Geometry::MultiPolygon(polys) => {
            if polys.is_empty() {
                return Err(GeomError::InvalidGeometry(
                    "multi polygon has no polygons".to_string(),
                ));
            }
            let mut out = Vec::with_capacity(polys.len());
            for rings in polys {
                out.push(closed_outer_ring(rings)?);
            }
            Ok(Some(out))
        }
        _ => Ok(None),
    }
}

/// closed_outer_ring normalizes the outer ring of a polygon's ring list and
/// enforces the 3-distinct-vertex minimum.
fn closed_outer_ring(rings: &[Ring]) -> GeomResult<Vec<LngLat>> {
    let outer = rings
        .first()
        .ok_or_else(|| GeomError::InvalidGeometry("polygon has no outer ring".to_string()))?;
    let closed = normalize_ring(outer);
    let distinct = distinct_vertex_count(&closed);
    if distinct < 3 {
        return Err(GeomError::InsufficientVertices(format!(
            "ring has {} distinct vertices, need at least 3",
            distinct
        )));
    }
    Ok(closed)
}

/// point_in_area reports whether p lies inside or on the boundary of any of
/// the given closed rings.
fn point_in_area(p: LngLat, rings: &[Vec<LngLat>]) -> bool {
    rings.iter().any(|ring| point_in_ring(p, ring))
}

/// point_in_ring is a boundary-inclusive even-odd test against one closed
/// ring: an explicit on-edge check first, then a ray cast toward increasing
/// longitude counting edge crossings.
fn point_in_ring(p: LngLat, ring: &[LngLat]) -> bool {
    for edge in ring.windows(2) {
        if on_segment(p, edge[0], edge[1]) {
            return true;
        }
    }

    let mut inside = false;
    for edge in ring.windows(2) {
        let (a, b) = (edge[0], edge[1]);
        if (a.lat() > p.lat()) != (b.lat() > p.lat()) {
            let t = (p.lat() - a.lat()) / (b.lat() - a.lat());
            let crossing_lng = a.lng() + t * (b.lng() - a.lng());
            if p.lng() < crossing_lng {
                inside = !inside;
            }
        }
    }
    inside
}

/// ring_within_area reports whether the filled area bounded by the child
/// ring lies entirely inside the parent area: every child vertex must be in
/// the parent and no child edge may properly cross a parent boundary edge.
/// For the simple, hole-free rings this data model admits, the two
/// conditions together are exact.
fn ring_within_area(child: &[LngLat], parents: &[Vec<LngLat>]) -> bool {
    child.iter().all(|v| point_in_area(*v, parents)) && !crosses_any_boundary(child, parents)
}

fn crosses_any_boundary(ring: &[LngLat], parents: &[Vec<LngLat>]) -> bool {
    for parent in parents {
        for pe in parent.windows(2) {
            for ce in ring.windows(2) {
                if segments_properly_cross(ce[0], ce[1], pe[0], pe[1]) {
                    return true;
                }
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{ring_of, unit_square};

    fn unit_square_parent() -> Geometry {
        Geometry::polygon(unit_square())
    }

    #[test]
    fn test_point_inside() {
        let verdict = validate_within(
            &Geometry::point(LngLat::new(0.5, 0.5)),
            &unit_square_parent(),
        );
        assert!(verdict.valid);
        assert_eq!(verdict.reason, None);
    }

    #[test]
    fn test_point_outside() {
        let verdict = validate_within(
            &Geometry::point(LngLat::new(2.0, 2.0)),
            &unit_square_parent(),
        );
        assert!(!verdict.valid);
        let reason = verdict.reason.unwrap();
        assert!(
            reason.contains("within the boundaries"),
            "unexpected reason: {}",
            reason
        );
    }

    #[test]
    fn test_point_on_boundary_is_valid() {
        let parent = unit_square_parent();
        assert!(validate_within(&Geometry::point(LngLat::new(0.0, 0.5)), &parent).valid);
        assert!(validate_within(&Geometry::point(LngLat::new(1.0, 1.0)), &parent).valid);
    }

    #[test]
    fn test_polygon_contains_itself() {
        let parent = unit_square_parent();
        assert!(validate_within(&parent, &parent).valid);
    }

    #[test]
    fn test_polygon_fully_inside() {
        let child = Geometry::polygon(ring_of(&[
            (0.25, 0.25),
            (0.75, 0.25),
            (0.75, 0.75),
            (0.25, 0.75),
            (0.25, 0.25),
        ]));
        assert!(validate_within(&child, &unit_square_parent()).valid);
    }

    #[test]
    fn test_polygon_partial_overlap() {
        let child = Geometry::polygon(ring_of(&[
            (0.5, 0.25),
            (1.5, 0.25),
            (1.5, 0.75),
            (0.5, 0.75),
            (0.5, 0.25),
        ]));
        let verdict = validate_within(&child, &unit_square_parent());
        assert!(!verdict.valid);
        assert_eq!(
            verdict.reason.as_deref(),
            Some("some parts are outside the parent boundary.")
        );
    }

    #[test]
    fn test_polygon_spanning_concave_notch() {
        // U-shaped parent: two vertical arms joined by a base. The child's
        // vertices all land inside the arms, but its edges cross the notch.
        let parent = Geometry::polygon(ring_of(&[
            (0.0, 0.0),
            (5.0, 0.0),
            (5.0, 5.0),
            (4.0, 5.0),
            (4.0, 1.0),
            (1.0, 1.0),
            (1.0, 5.0),
            (0.0, 5.0),
            (0.0, 0.0),
        ]));
        let child = Geometry::polygon(ring_of(&[
            (0.5, 4.0),
            (4.5, 4.0),
            (4.5, 4.5),
            (0.5, 4.5),
            (0.5, 4.0),
        ]));
        let verdict = validate_within(&child, &parent);
        assert!(!verdict.valid);
    }

    #[test]
    fn test_open_rings_are_auto_closed() {
        let parent = Geometry::polygon(ring_of(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]));
        let child = Geometry::polygon(ring_of(&[(0.2, 0.2), (0.8, 0.2), (0.5, 0.8)]));
        assert!(validate_within(&child, &parent).valid);
    }

    #[test]
    fn test_line_string_vertices_inside() {
        let child = Geometry::line_string(ring_of(&[(0.1, 0.1), (0.9, 0.2), (0.5, 0.9)]));
        assert!(validate_within(&child, &unit_square_parent()).valid);
    }

    #[test]
    fn test_line_string_vertex_outside() {
        let child = Geometry::line_string(ring_of(&[(0.1, 0.1), (1.9, 0.2)]));
        let verdict = validate_within(&child, &unit_square_parent());
        assert!(!verdict.valid);
        assert!(verdict.reason.is_some());
    }

    #[test]
    fn test_multi_line_string_child() {
        let good = Geometry::MultiLineString(vec![
            ring_of(&[(0.1, 0.1), (0.2, 0.2)]),
            ring_of(&[(0.8, 0.8), (0.9, 0.9)]),
        ]);
        assert!(validate_within(&good, &unit_square_parent()).valid);

        let bad = Geometry::MultiLineString(vec![
            ring_of(&[(0.1, 0.1), (0.2, 0.2)]),
            ring_of(&[(0.8, 0.8), (1.9, 0.9)]),
        ]);
        assert!(!validate_within(&bad, &unit_square_parent()).valid);
    }

    #[test]
    fn test_multi_polygon_child() {
        let good = Geometry::MultiPolygon(vec![
            vec![ring_of(&[(0.1, 0.1), (0.4, 0.1), (0.4, 0.4), (0.1, 0.1)])],
            vec![ring_of(&[(0.6, 0.6), (0.9, 0.6), (0.9, 0.9), (0.6, 0.6)])],
        ]);
        assert!(validate_within(&good, &unit_square_parent()).valid);

        let bad = Geometry::MultiPolygon(vec![
            vec![ring_of(&[(0.1, 0.1), (0.4, 0.1), (0.4, 0.4), (0.1, 0.1)])],
            vec![ring_of(&[(0.6, 0.6), (1.9, 0.6), (1.9, 0.9), (0.6, 0.6)])],
        ]);
        let verdict = validate_within(&bad, &unit_square_parent());
        assert!(!verdict.valid);
        assert_eq!(
            verdict.reason.as_deref(),
            Some("some parts are outside the parent boundary.")
        );
    }

    #[test]
    fn test_multi_polygon_parent() {
        let parent = Geometry::MultiPolygon(vec![
            vec![unit_square()],
            vec![ring_of(&[(5.0, 5.0), (6.0, 5.0), (6.0, 6.0), (5.0, 6.0), (5.0, 5.0)])],
        ]);
        assert!(validate_within(&Geometry::point(LngLat::new(5.5, 5.5)), &parent).valid);
        assert!(validate_within(&Geometry::point(LngLat::new(0.5, 0.5)), &parent).valid);
        assert!(!validate_within(&Geometry::point(LngLat::new(3.0, 3.0)), &parent).valid);
    }

    #[test]
    fn test_parent_must_be_areal() {
        let child = Geometry::point(LngLat::new(0.5, 0.5));
        for parent in vec![
            Geometry::point(LngLat::new(0.0, 0.0)),
            Geometry::line_string(ring_of(&[(0.0, 0.0), (1.0, 1.0)])),
            Geometry::MultiLineString(vec![ring_of(&[(0.0, 0.0), (1.0, 1.0)])]),
        ] {
            let verdict = validate_within(&child, &parent);
            assert!(!verdict.valid);
            assert_eq!(verdict.reason.as_deref(), Some("parent must be an areal shape"));
        }
    }

    #[test]
    fn test_malformed_parent_is_caught() {
        let verdict = validate_within(
            &Geometry::point(LngLat::new(0.5, 0.5)),
            &Geometry::Polygon(vec![]),
        );
        assert!(!verdict.valid);
        let reason = verdict.reason.unwrap();
        assert!(
            reason.starts_with("validation error:"),
            "unexpected reason: {}",
            reason
        );
    }

    #[test]
    fn test_degenerate_child_ring_is_caught() {
        let child = Geometry::polygon(ring_of(&[(0.1, 0.1), (0.2, 0.2)]));
        let verdict = validate_within(&child, &unit_square_parent());
        assert!(!verdict.valid);
        assert!(verdict.reason.unwrap().starts_with("validation error:"));
    }

    #[test]
    fn test_identical_inputs_identical_verdicts() {
        let child = Geometry::point(LngLat::new(2.0, 2.0));
        let parent = unit_square_parent();
        assert_eq!(
            validate_within(&child, &parent),
            validate_within(&child, &parent)
        );
    }
}
