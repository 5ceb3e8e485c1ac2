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

/// Geometry represents one of the vector shapes exchanged with the drawing
/// and submission layers. Coordinate nesting follows the standard
/// interchange convention: positions are `[lng, lat]` pairs, polygons are
/// lists of rings, multi-shapes are lists of their parts.
///
/// Only the outer ring (index 0) of a Polygon is ever read; interior rings
/// (holes) are unsupported and silently ignored. A MultiPolygon carries one
/// ring list per constituent polygon.
///
/// With the `serde` feature, a Geometry serializes to the familiar
/// `{"type": ..., "coordinates": ...}` form.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", content = "coordinates")
)]
pub enum Geometry {
    /// One position.
    Point(LngLat),
    /// An ordered sequence of at least 2 positions; open (not required to
    /// close).
    LineString(Vec<LngLat>),
    /// One outer ring of at least 4 positions whose first and last entries
    /// are equal, plus ignored extra rings.
    Polygon(Vec<Ring>),
    /// An ordered sequence of polygons, each given as its ring list.
    MultiPolygon(Vec<Vec<Ring>>),
    /// An ordered sequence of line strings.
    MultiLineString(Vec<Vec<LngLat>>),
}

impl Geometry {
    /// point constructs a Point geometry.
    pub fn point(p: LngLat) -> Geometry {
        Geometry::Point(p)
    }

    /// line_string constructs a LineString geometry from the given positions.
    pub fn line_string(pts: Vec<LngLat>) -> Geometry {
        Geometry::LineString(pts)
    }

    /// polygon constructs a Polygon geometry with the given outer ring and
    /// no holes.
    pub fn polygon(ring: Ring) -> Geometry {
        Geometry::Polygon(vec![ring])
    }

    /// type_name returns the interchange kind string for this geometry, as
    /// used in verdict reasons.
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::LineString(_) => "LineString",
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPolygon(_) => "MultiPolygon",
            Geometry::MultiLineString(_) => "MultiLineString",
        }
    }

    /// outer_ring returns the outer boundary ring of a Polygon, or None for
    /// any other kind or for a Polygon with no rings at all.
    pub fn outer_ring(&self) -> Option<&Ring> {
        match self {
            Geometry::Polygon(rings) => rings.first(),
            _ => None,
        }
    }
}
