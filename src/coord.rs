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

/// LngLat represents a single position on the surface as a
/// `[longitude, latitude]` pair in decimal degrees (WGS84).
///
/// Coordinate order is always longitude first, matching the standard
/// vector-geometry interchange convention. Mixing in `[lat, lng]` data is a
/// caller contract violation that this crate does not detect.
///
/// Equality is exact numeric equality on both axes; ring closure relies on
/// it to recognize an already-closed ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LngLat(pub Vector2<f64>);

/// Ring is one polygon boundary: an ordered sequence of positions, closed
/// when the first and last positions are equal. Interior rings (holes) are
/// not supported anywhere in this crate.
pub type Ring = Vec<LngLat>;

impl LngLat {
    /// new constructs a position from longitude and latitude in degrees.
    pub fn new(lng: f64, lat: f64) -> Self {
        LngLat(Vector2::new(lng, lat))
    }

    /// lng returns the longitude in degrees.
    #[inline]
    pub fn lng(&self) -> f64 {
        self.0.x
    }

    /// lat returns the latitude in degrees.
    #[inline]
    pub fn lat(&self) -> f64 {
        self.0.y
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for LngLat {
    /// Positions serialize as a two-element `[lng, lat]` array, the
    /// interchange form, rather than as an `{x, y}` map.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeTuple;
        let mut tup = serializer.serialize_tuple(2)?;
        tup.serialize_element(&self.0.x)?;
        tup.serialize_element(&self.0.y)?;
        tup.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for LngLat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let [lng, lat] = <[f64; 2]>::deserialize(deserializer)?;
        Ok(LngLat::new(lng, lat))
    }
}
