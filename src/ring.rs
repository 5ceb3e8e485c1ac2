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

/// normalize_ring closes an open coordinate ring by appending a copy of the
/// first position when the first and last positions differ (exact numeric
/// equality on both axes). A ring that is already closed, and the empty
/// ring, come back unchanged; an empty input must be treated as invalid by
/// the caller.
///
/// The input is never mutated; the returned ring is an independent value.
/// The function is idempotent: normalizing a normalized ring is a no-op.
pub fn normalize_ring(ring: &[LngLat]) -> Vec<LngLat> {
    let mut out = ring.to_vec();
    if let (Some(first), Some(last)) = (ring.first(), ring.last()) {
        if first != last {
            out.push(*first);
        }
    }
    out
}

/// is_closed reports whether the ring's first and last positions are equal.
/// The empty ring is not closed.
pub fn is_closed(ring: &[LngLat]) -> bool {
    match (ring.first(), ring.last()) {
        (Some(first), Some(last)) => first == last,
        _ => false,
    }
}

/// distinct_vertex_count returns the number of ring vertices excluding the
/// closing duplicate, if present. A ring needs at least 3 such vertices to
/// bound an area; callers reject anything smaller rather than computing a
/// wrong number.
pub fn distinct_vertex_count(ring: &[LngLat]) -> usize {
    if ring.len() >= 2 && ring.first() == ring.last() {
        ring.len() - 1
    } else {
        ring.len()
    }
}
