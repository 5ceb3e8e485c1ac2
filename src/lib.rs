//! fieldgeom validates and manipulates two-dimensional vector geometries
//! describing agricultural land parcels and their sub-features (sensors,
//! trees, water points, equipment positions).
//!
//! The crate is made of three cooperating, stateless components:
//!
//! - the ring normalizer ([`normalize_ring`]), which closes open coordinate
//!   rings and backs the vertex-count preconditions of the other two,
//! - the containment validator ([`validate_within`]), which decides whether a
//!   child shape lies entirely inside a parent boundary and produces a
//!   structured verdict with a user-facing reason, and
//! - the area & split engine ([`polygon_area_hectares`], [`split_with_line`]),
//!   which measures parcel area in hectares through a local equirectangular
//!   projection and partitions a boundary in two along a cutting line.
//!
//! Every public function is a pure function over borrowed, immutable inputs:
//! no I/O, no shared state, no locks. All coordinates are `[longitude,
//! latitude]` pairs in decimal degrees (WGS84). Interior rings (holes) are
//! not supported anywhere; callers pass outer boundaries only.

pub mod area;
pub mod coord;
pub mod error;
pub mod geometry;
pub mod rect;
pub mod ring;
mod segment;
pub mod split;
pub mod validate;

#[cfg(test)]
mod test_util;

pub use crate::area::polygon_area_hectares;
pub use crate::coord::{LngLat, Ring};
pub use crate::error::{GeomError, GeomResult};
pub use crate::geometry::Geometry;
pub use crate::rect::Rect;
pub use crate::ring::normalize_ring;
pub use crate::split::{
    split_with_line, split_with_line_opts, validate_cutting_line, SplitOptions,
};
pub use crate::validate::{validate_within, Verdict};
