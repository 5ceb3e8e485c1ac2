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

use crate::coord::LngLat;

/// Rect represents an axis-aligned bounding rectangle in degree space,
/// described by its minimum and maximum corners.
///
/// Parcels are small (sub-hundred-hectare) shapes, so antimeridian wrapping
/// is not handled: a rectangle is a plain interval product on both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// Minimum-longitude, minimum-latitude corner.
    pub lo: LngLat,
    /// Maximum-longitude, maximum-latitude corner.
    pub hi: LngLat,
}

impl Rect {
    /// from_points constructs the tightest Rect enclosing the given
    /// positions, or None when the slice is empty.
    pub fn from_points(points: &[LngLat]) -> Option<Rect> {
        let first = points.first()?;
        let mut lng_min = first.lng();
        let mut lng_max = first.lng();
        let mut lat_min = first.lat();
        let mut lat_max = first.lat();

        for p in &points[1..] {
            lng_min = lng_min.min(p.lng());
            lng_max = lng_max.max(p.lng());
            lat_min = lat_min.min(p.lat());
            lat_max = lat_max.max(p.lat());
        }

        Some(Rect {
            lo: LngLat::new(lng_min, lat_min),
            hi: LngLat::new(lng_max, lat_max),
        })
    }

    /// intersects reports whether the two rectangles share any point.
    /// Boundary contact counts as intersection.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.lo.lng() <= other.hi.lng()
            && other.lo.lng() <= self.hi.lng()
            && self.lo.lat() <= other.hi.lat()
            && other.lo.lat() <= self.hi.lat()
    }

    /// width returns the longitude extent in degrees.
    pub fn width(&self) -> f64 {
        self.hi.lng() - self.lo.lng()
    }

    /// height returns the latitude extent in degrees.
    pub fn height(&self) -> f64 {
        self.hi.lat() - self.lo.lat()
    }

    /// largest_dimension returns the larger of the two extents. The split
    /// engine scales its cutting-line extension by this value.
    pub fn largest_dimension(&self) -> f64 {
        self.width().max(self.height())
    }
}
