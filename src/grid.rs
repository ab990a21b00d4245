//! Pixel-center generation for a square detector grid.
//!
//! A [`DetectorGrid`] describes an n×n arrangement of equal square pixels
//! centered on the origin of the detector plane. Pixel centers are generated
//! on demand in row-major order: row 0 is the topmost row (largest y) and
//! column 0 is the leftmost column (smallest x), matching the physical layout
//! used by the downstream solid-angle map.

use thiserror::Error;

/// Errors raised by invalid grid construction parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("invalid grid dimension {0}: must be at least 1")]
    InvalidDimension(usize),

    #[error("invalid pixel size {0}: must be positive and finite")]
    InvalidPixelSize(f64),
}

/// Center coordinates of a single pixel in the detector plane.
///
/// The pixel occupies the square
/// `[x − s/2, x + s/2] × [y − s/2, y + s/2]`
/// where `s` is the grid's pixel size. Ids are sequential, 0-based, assigned
/// in row-major order starting at the top-left pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelCenter {
    /// Row-major pixel index, 0-based
    pub id: usize,
    /// X coordinate of the pixel center
    pub x: f64,
    /// Y coordinate of the pixel center
    pub y: f64,
}

/// Geometry of a square detector subdivided into an n×n grid of square
/// pixels, centered on the origin of the detector plane.
///
/// Immutable once constructed; all derived quantities are computed on demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectorGrid {
    dimension: usize,
    pixel_size: f64,
}

impl DetectorGrid {
    /// Create a new detector grid with validation.
    ///
    /// # Arguments
    ///
    /// * `dimension` - Number of rows (= columns) of the square grid, ≥ 1
    /// * `pixel_size` - Edge length of each square pixel, > 0
    pub fn new(dimension: usize, pixel_size: f64) -> Result<Self, GridError> {
        if dimension == 0 {
            return Err(GridError::InvalidDimension(dimension));
        }
        if !pixel_size.is_finite() || pixel_size <= 0.0 {
            return Err(GridError::InvalidPixelSize(pixel_size));
        }

        Ok(Self {
            dimension,
            pixel_size,
        })
    }

    /// Number of rows (= columns) in the grid
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Edge length of one square pixel
    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }

    /// Generate the centers of all n² pixels in row-major order.
    ///
    /// The grid of centers is symmetric about the origin. For even n the
    /// detector's bounding box is `[−n·s/2, n·s/2]` on each axis; for odd n
    /// the middle pixel is centered exactly on the origin. Adjacent centers
    /// along a row or column are exactly one pixel size apart.
    pub fn pixel_centers(&self) -> Vec<PixelCenter> {
        let n = self.dimension as f64;
        let s = self.pixel_size;
        let even = self.dimension % 2 == 0;

        let mut centers = Vec::with_capacity(self.dimension * self.dimension);
        for i in 0..self.dimension {
            // Row 0 sits at the top (largest y)
            let y = if even {
                n / 2.0 * s - s / 2.0 - i as f64 * s
            } else {
                (n - 1.0) / 2.0 * s - i as f64 * s
            };

            for j in 0..self.dimension {
                // Column 0 sits at the left (smallest x)
                let x = if even {
                    -n / 2.0 * s + s / 2.0 + j as f64 * s
                } else {
                    (1.0 - n) / 2.0 * s + j as f64 * s
                };

                centers.push(PixelCenter {
                    id: i * self.dimension + j,
                    x,
                    y,
                });
            }
        }

        centers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_invalid_parameters() {
        assert_eq!(
            DetectorGrid::new(0, 1.0),
            Err(GridError::InvalidDimension(0))
        );
        assert_eq!(
            DetectorGrid::new(4, 0.0),
            Err(GridError::InvalidPixelSize(0.0))
        );
        assert_eq!(
            DetectorGrid::new(4, -2.5),
            Err(GridError::InvalidPixelSize(-2.5))
        );
        assert!(DetectorGrid::new(4, f64::NAN).is_err());
        assert!(DetectorGrid::new(1, 1.0).is_ok());
    }

    #[test]
    fn test_even_grid_centers() {
        let grid = DetectorGrid::new(2, 24.25).unwrap();
        let centers = grid.pixel_centers();

        assert_eq!(centers.len(), 4);
        assert_relative_eq!(centers[0].x, -12.125);
        assert_relative_eq!(centers[0].y, 12.125);
        assert_relative_eq!(centers[1].x, 12.125);
        assert_relative_eq!(centers[1].y, 12.125);
        assert_relative_eq!(centers[2].x, -12.125);
        assert_relative_eq!(centers[2].y, -12.125);
        assert_relative_eq!(centers[3].x, 12.125);
        assert_relative_eq!(centers[3].y, -12.125);
    }

    #[test]
    fn test_odd_grid_centered_on_origin() {
        let grid = DetectorGrid::new(3, 2.0).unwrap();
        let centers = grid.pixel_centers();

        assert_eq!(centers.len(), 9);
        // Middle pixel sits exactly on the origin
        assert_relative_eq!(centers[4].x, 0.0);
        assert_relative_eq!(centers[4].y, 0.0);
        // Corners
        assert_relative_eq!(centers[0].x, -2.0);
        assert_relative_eq!(centers[0].y, 2.0);
        assert_relative_eq!(centers[8].x, 2.0);
        assert_relative_eq!(centers[8].y, -2.0);
    }

    #[test]
    fn test_center_set_symmetric_through_origin() {
        for dimension in 1..=6 {
            let grid = DetectorGrid::new(dimension, 1.75).unwrap();
            let centers = grid.pixel_centers();

            for c in &centers {
                let mirrored = centers.iter().any(|m| {
                    (m.x + c.x).abs() < 1e-12 && (m.y + c.y).abs() < 1e-12
                });
                assert!(
                    mirrored,
                    "no mirror image for center ({}, {}) at dimension {}",
                    c.x, c.y, dimension
                );
            }
        }
    }

    #[test]
    fn test_adjacent_spacing_equals_pixel_size() {
        let s = 3.5;
        let grid = DetectorGrid::new(4, s).unwrap();
        let centers = grid.pixel_centers();
        let n = grid.dimension();

        for i in 0..n {
            for j in 0..n {
                let c = centers[i * n + j];
                if j + 1 < n {
                    let right = centers[i * n + j + 1];
                    assert_relative_eq!(right.x - c.x, s, epsilon = 1e-12);
                    assert_relative_eq!(right.y, c.y, epsilon = 1e-12);
                }
                if i + 1 < n {
                    let below = centers[(i + 1) * n + j];
                    assert_relative_eq!(c.y - below.y, s, epsilon = 1e-12);
                    assert_relative_eq!(below.x, c.x, epsilon = 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_row_major_layout() {
        // Position (0, 0) must be the pixel with maximum y and minimum x
        let grid = DetectorGrid::new(3, 1.0).unwrap();
        let centers = grid.pixel_centers();

        let max_y = centers.iter().map(|c| c.y).fold(f64::NEG_INFINITY, f64::max);
        let min_x = centers.iter().map(|c| c.x).fold(f64::INFINITY, f64::min);

        assert_eq!(centers[0].id, 0);
        assert_relative_eq!(centers[0].y, max_y);
        assert_relative_eq!(centers[0].x, min_x);

        for (k, c) in centers.iter().enumerate() {
            assert_eq!(c.id, k);
        }
    }
}
