use std::error::Error;
use std::fmt;

/// GeomError represents errors that can occur while inspecting parcel
/// geometry. These never escape the public validation surface: the
/// containment validator converts every error to a failed verdict at its
/// boundary (see `validate::validate_within`).
#[derive(Debug, Clone, PartialEq)]
pub enum GeomError {
    /// Malformed shape data (e.g. a polygon without an outer ring).
    InvalidGeometry(String),
    /// A ring with too few distinct vertices to bound an area.
    InsufficientVertices(String),
    /// Generic error with message
    Other(String),
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeomError::InvalidGeometry(msg) => write!(f, "invalid geometry: {}", msg),
            GeomError::InsufficientVertices(msg) => write!(f, "insufficient vertices: {}", msg),
            GeomError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for GeomError {}

/// Result type for fallible geometry internals.
pub type GeomResult<T> = Result<T, GeomError>;
