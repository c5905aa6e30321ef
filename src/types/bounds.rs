//! Rectangle types for spatial filtering

use std::fmt;

/// Axis-aligned rectangle in georeferenced coordinates.
///
/// No ordering is enforced between the min and max corners.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl GeoBounds {
    /// Create a new rectangle
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        GeoBounds {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// All four values are exactly zero
    pub fn is_zero(&self) -> bool {
        self.min_x == 0.0 && self.min_y == 0.0 && self.max_x == 0.0 && self.max_y == 0.0
    }
}

impl fmt::Display for GeoBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Geo[({}, {}) -> ({}, {})]",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}

/// Axis-aligned rectangle in biased unsigned native units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UorBounds {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl UorBounds {
    /// Create a new rectangle
    pub const fn new(min_x: u32, min_y: u32, max_x: u32, max_y: u32) -> Self {
        UorBounds {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Min exceeds max on at least one axis
    pub fn is_inverted(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// Overlap test, edges inclusive. An inverted rectangle on either side
    /// overlaps nothing.
    pub fn intersects(&self, other: &UorBounds) -> bool {
        if self.is_inverted() || other.is_inverted() {
            return false;
        }
        self.min_x <= other.max_x
            && other.min_x <= self.max_x
            && self.min_y <= other.max_y
            && other.min_y <= self.max_y
    }
}

impl fmt::Display for UorBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Uor[({}, {}) -> ({}, {})]",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_zero() {
        assert!(GeoBounds::default().is_zero());
        assert!(!GeoBounds::new(0.0, 0.0, 0.0, 1.0).is_zero());
        assert!(GeoBounds::new(-0.0, 0.0, 0.0, -0.0).is_zero());
    }

    #[test]
    fn test_uor_intersects() {
        let a = UorBounds::new(10, 10, 20, 20);
        assert!(a.intersects(&UorBounds::new(15, 15, 30, 30)));
        assert!(a.intersects(&UorBounds::new(20, 20, 30, 30)));
        assert!(!a.intersects(&UorBounds::new(21, 0, 30, 30)));
        assert!(!a.intersects(&UorBounds::new(0, 21, 30, 30)));
    }

    #[test]
    fn test_inverted_overlaps_nothing() {
        let inverted = UorBounds::new(20, 10, 10, 20);
        assert!(inverted.is_inverted());
        assert!(!inverted.intersects(&UorBounds::new(0, 0, 100, 100)));
        assert!(!UorBounds::new(0, 0, 100, 100).intersects(&inverted));
    }

    #[test]
    fn test_display() {
        assert_eq!(UorBounds::new(1, 2, 3, 4).to_string(), "Uor[(1, 2) -> (3, 4)]");
    }
}
