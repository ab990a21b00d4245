//! Per-pixel solid angle maps for square detector grids.
//!
//! This crate computes the exact solid angle that each pixel of a square
//! segmented detector (e.g. a multi-anode PMT or a pixelated sensor) subtends
//! at a point source placed anywhere in front of the detector plane.
//!
//! The computation is a three-stage pipeline:
//!
//! 1. [`DetectorGrid`] generates the pixel-center coordinates for an n×n
//!    layout centered on the origin of the detector plane.
//! 2. [`ProjectionClassification`] locates the source's perpendicular
//!    projection relative to each pixel's square extent.
//! 3. [`solid_angle_map`] converts each classification into an exact
//!    solid-angle value via the closed-form rectangular-aperture formula and
//!    an inclusion–exclusion decomposition, normalized by 4π.
//!
//! All lengths are untyped `f64` values in one consistent unit of the
//! caller's choosing; the result is dimensionless. The computation is pure,
//! deterministic, and O(n²) with no iteration or convergence loop.

pub mod grid;
pub mod projection;
pub mod solid_angle;
pub mod source;

// Re-exports for easier access
pub use grid::{DetectorGrid, GridError, PixelCenter};
pub use projection::ProjectionClassification;
pub use solid_angle::{pixel_solid_angle, rect_solid_angle, solid_angle_map};
pub use source::{SourceError, SourcePoint};
