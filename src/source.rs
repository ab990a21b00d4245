//! Point-source position relative to the detector plane.

use thiserror::Error;

/// Errors raised by invalid source coordinates.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SourceError {
    #[error("source distance from the detector plane must be nonzero")]
    ZeroDistance,

    #[error("source coordinate {axis} = {value} is not finite")]
    NonFinite { axis: &'static str, value: f64 },
}

/// A point source at `(x, y, z)`, with the detector plane at z = 0.
///
/// `z` is the perpendicular distance from the detector plane and must be
/// nonzero: the solid-angle formula divides by it, so validating here keeps
/// the downstream computation infallible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourcePoint {
    x: f64,
    y: f64,
    z: f64,
}

impl SourcePoint {
    /// Create a new source point with validation.
    ///
    /// Fails if any coordinate is non-finite or if `z` is zero.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self, SourceError> {
        for (axis, value) in [("x", x), ("y", y), ("z", z)] {
            if !value.is_finite() {
                return Err(SourceError::NonFinite { axis, value });
            }
        }
        if z == 0.0 {
            return Err(SourceError::ZeroDistance);
        }

        Ok(Self { x, y, z })
    }

    /// X coordinate of the source's projection onto the detector plane
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y coordinate of the source's projection onto the detector plane
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Signed perpendicular offset from the detector plane (nonzero)
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Unsigned perpendicular distance from the detector plane.
    ///
    /// The pixel geometry is mirror-symmetric about the detector plane, so a
    /// source behind the plane subtends the same solid angle as its mirror
    /// image in front of it.
    pub fn distance(&self) -> f64 {
        self.z.abs()
    }
}
