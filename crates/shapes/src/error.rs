use std::fmt;

/// Raised when an operation needs a direction, a non-zero length, or a
/// non-collinear configuration that the input does not provide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DegenerateGeometryError {
    /// Two points that must define a direction coincide.
    CoincidentPoints { what: &'static str },
    /// Triangle vertices lie on one line (zero area).
    CollinearVertices,
    /// An angle was requested for a vector of zero length.
    ZeroLengthVector,
}

impl fmt::Display for DegenerateGeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoincidentPoints { what } => {
                write!(f, "degenerate geometry: {what} endpoints coincide")
            }
            Self::CollinearVertices => {
                write!(f, "degenerate geometry: triangle vertices are collinear")
            }
            Self::ZeroLengthVector => {
                write!(f, "degenerate geometry: angle of a zero-length vector")
            }
        }
    }
}

impl std::error::Error for DegenerateGeometryError {}
