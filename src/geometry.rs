//! Canvas geometry
//!
//! Angles are in degrees, 0 points up (negative Y) and angles grow
//! clockwise. Polar coordinates are measured from the canvas center.

use serde::Deserialize;

use crate::error::IconError;

/// A 2D point in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// The square drawing surface and its base radial unit
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Canvas {
    /// Side length in pixels
    pub size: f64,

    /// Half the size divided by this gives one dit
    pub dit_divisor: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            size: 512.0,
            dit_divisor: 16.2,
        }
    }
}

impl Canvas {
    /// Create a canvas with default proportions
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the side length
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Set the dit divisor
    pub fn with_dit_divisor(mut self, divisor: f64) -> Self {
        self.dit_divisor = divisor;
        self
    }

    pub fn validate(&self) -> Result<(), IconError> {
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(IconError::InvalidCanvas(format!(
                "size must be positive, got {}",
                self.size
            )));
        }
        if !(self.dit_divisor.is_finite() && self.dit_divisor > 0.0) {
            return Err(IconError::InvalidCanvas(format!(
                "dit_divisor must be positive, got {}",
                self.dit_divisor
            )));
        }
        Ok(())
    }

    /// Distance from the canvas edge to its center on either axis
    pub fn offset(&self) -> f64 {
        self.size / 2.0
    }

    pub fn center(&self) -> Point {
        Point::new(self.offset(), self.offset())
    }

    /// Base radial unit
    pub fn dit(&self) -> f64 {
        self.offset() / self.dit_divisor
    }

    /// Map a polar coordinate around the center to canvas coordinates
    pub fn polar(&self, radius: f64, degrees: f64) -> Point {
        let theta = degrees.to_radians();
        Point::new(
            radius * theta.sin() + self.offset(),
            -radius * theta.cos() + self.offset(),
        )
    }
}
