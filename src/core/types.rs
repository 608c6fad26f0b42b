use serde::{Deserialize, Serialize};

/// Pixel size of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Width over height, or `None` for a degenerate viewport.
    #[must_use]
    pub fn aspect_ratio(self) -> Option<f64> {
        if !self.is_valid() {
            return None;
        }
        Some(f64::from(self.width) / f64::from(self.height))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(600, 600)
    }
}

/// Coordinate in grid units, where neighbouring chart centers are 1.0 apart.
///
/// The vertical axis grows downwards so the first chart sits top left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `distance` from `self` along `angle_rad`.
    #[must_use]
    pub fn polar_offset(self, distance: f64, angle_rad: f64) -> Self {
        Self {
            x: self.x + distance * angle_rad.cos(),
            y: self.y + distance * angle_rad.sin(),
        }
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
