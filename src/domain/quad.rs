//! Bounding quadrilaterals locating fields on a page raster.

use serde::{Deserialize, Serialize};

/// Four-corner polygon locating a field on a page image.
///
/// Points are ordered clockwise starting at the top-left corner:
/// `p0` top-left, `p1` top-right, `p2` bottom-right, `p3` bottom-left.
/// Each point is `[x, y]` in pixel coordinates.
///
/// The geometric narrowing in [`crate::masking::geometry`] assumes an
/// axis-aligned quad (`p0`/`p1` share a y-coordinate, as do `p2`/`p3`);
/// a skewed quad breaks the narrowing math.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingQuad {
    pub p0: [i32; 2],
    pub p1: [i32; 2],
    pub p2: [i32; 2],
    pub p3: [i32; 2],
}

/// Axis-aligned rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl BoundingQuad {
    /// Creates a quad from its four clockwise corners.
    pub fn new(p0: [i32; 2], p1: [i32; 2], p2: [i32; 2], p3: [i32; 2]) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Returns the corners in clockwise order starting at the top-left.
    pub fn points(&self) -> [[i32; 2]; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }

    /// Returns true when the top and bottom edges are horizontal.
    pub fn is_axis_aligned(&self) -> bool {
        self.p0[1] == self.p1[1] && self.p2[1] == self.p3[1]
    }

    /// Computes the axis-aligned bounding rectangle of the four corners.
    pub fn bounding_rect(&self) -> Rect {
        let xs = self.points().map(|p| p[0]);
        let ys = self.points().map(|p| p[1]);
        let x_min = xs.iter().copied().min().unwrap_or(0);
        let x_max = xs.iter().copied().max().unwrap_or(0);
        let y_min = ys.iter().copied().min().unwrap_or(0);
        let y_max = ys.iter().copied().max().unwrap_or(0);
        Rect {
            x: x_min,
            y: y_min,
            width: x_max - x_min,
            height: y_max - y_min,
        }
    }
}
