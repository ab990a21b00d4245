//! Classification of the source projection against a pixel's extent.
//!
//! For each pixel the source's (x, y) projection is either inside or outside
//! the pixel's span along each axis. The classification also records, per
//! axis, a non-negative offset distance:
//!
//! - inside: distance from the projection to the *nearer* of the pixel's two
//!   edges along that axis (0 at an edge, s/2 at the center)
//! - outside: distance from the projection to the pixel's near edge
//!
//! These offsets are exactly the sub-rectangle extents consumed by the
//! solid-angle decomposition in [`crate::solid_angle`]. The classification is
//! purely local per pixel; pixels do not interact.

use crate::grid::PixelCenter;
use crate::source::SourcePoint;

/// Inside/outside status and edge offsets of the source projection relative
/// to one pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionClassification {
    /// Whether the source's x coordinate falls within the pixel's x-span
    pub x_inside: bool,
    /// Whether the source's y coordinate falls within the pixel's y-span
    pub y_inside: bool,
    /// Offset distance along x (semantics depend on `x_inside`)
    pub offset_a: f64,
    /// Offset distance along y (semantics depend on `y_inside`)
    pub offset_b: f64,
}

impl ProjectionClassification {
    /// Classify the source projection against one pixel's square extent.
    pub fn classify(center: &PixelCenter, pixel_size: f64, source: &SourcePoint) -> Self {
        let (x_inside, offset_a) = classify_axis(source.x(), center.x, pixel_size);
        let (y_inside, offset_b) = classify_axis(source.y(), center.y, pixel_size);

        Self {
            x_inside,
            y_inside,
            offset_a,
            offset_b,
        }
    }
}

/// Locate a projected coordinate relative to a pixel's span along one axis.
///
/// A projection exactly on an edge counts as inside, with offset 0. The
/// returned offset is always non-negative.
fn classify_axis(p: f64, center: f64, size: f64) -> (bool, f64) {
    let half = size / 2.0;
    let lo = center - half;
    let hi = center + half;

    if p < lo {
        (false, lo - p)
    } else if p > hi {
        (false, p - hi)
    } else {
        (true, half - (p - center).abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pixel(x: f64, y: f64) -> PixelCenter {
        PixelCenter { id: 0, x, y }
    }

    #[test]
    fn test_projection_over_pixel_center() {
        let source = SourcePoint::new(1.0, -2.0, 5.0).unwrap();
        let class = ProjectionClassification::classify(&pixel(1.0, -2.0), 3.0, &source);

        assert!(class.x_inside);
        assert!(class.y_inside);
        assert_relative_eq!(class.offset_a, 1.5);
        assert_relative_eq!(class.offset_b, 1.5);
    }

    #[test]
    fn test_inside_offset_is_distance_to_nearer_edge() {
        // Pixel spans [-1, 1] on both axes; projection at (0.7, -0.9)
        let source = SourcePoint::new(0.7, -0.9, 1.0).unwrap();
        let class = ProjectionClassification::classify(&pixel(0.0, 0.0), 2.0, &source);

        assert!(class.x_inside);
        assert!(class.y_inside);
        assert_relative_eq!(class.offset_a, 0.3, epsilon = 1e-12);
        assert_relative_eq!(class.offset_b, 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_outside_low_side() {
        // Pixel spans [4, 6] in x; source projection at x = 1.5
        let source = SourcePoint::new(1.5, 0.0, 1.0).unwrap();
        let class = ProjectionClassification::classify(&pixel(5.0, 0.0), 2.0, &source);

        assert!(!class.x_inside);
        assert!(class.y_inside);
        assert_relative_eq!(class.offset_a, 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_outside_high_side_both_axes() {
        // The high-side offset uses the same distance form on both axes
        let source = SourcePoint::new(7.25, 7.25, 1.0).unwrap();
        let class = ProjectionClassification::classify(&pixel(0.0, 0.0), 2.0, &source);

        assert!(!class.x_inside);
        assert!(!class.y_inside);
        assert_relative_eq!(class.offset_a, 6.25, epsilon = 1e-12);
        assert_relative_eq!(class.offset_b, 6.25, epsilon = 1e-12);
    }

    #[test]
    fn test_edge_counts_as_inside() {
        let source = SourcePoint::new(1.0, -1.0, 1.0).unwrap();
        let class = ProjectionClassification::classify(&pixel(0.0, 0.0), 2.0, &source);

        assert!(class.x_inside);
        assert!(class.y_inside);
        assert_relative_eq!(class.offset_a, 0.0);
        assert_relative_eq!(class.offset_b, 0.0);
    }
}
