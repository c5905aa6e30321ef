//! Point type for coordinate operations

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// 3D point in either georeferenced or native (UOR) space.
///
/// 2D files leave `z` at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DgnPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl DgnPoint {
    /// Create a new point
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        DgnPoint { x, y, z }
    }

    /// Create a point on the z = 0 plane
    pub const fn xy(x: f64, y: f64) -> Self {
        DgnPoint { x, y, z: 0.0 }
    }

    /// Origin
    pub const ZERO: DgnPoint = DgnPoint::new(0.0, 0.0, 0.0);

    /// Whether every component is a finite number
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Default for DgnPoint {
    fn default() -> Self {
        DgnPoint::ZERO
    }
}

impl Add for DgnPoint {
    type Output = DgnPoint;
    fn add(self, other: DgnPoint) -> DgnPoint {
        DgnPoint::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for DgnPoint {
    type Output = DgnPoint;
    fn sub(self, other: DgnPoint) -> DgnPoint {
        DgnPoint::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for DgnPoint {
    type Output = DgnPoint;
    fn mul(self, scalar: f64) -> DgnPoint {
        DgnPoint::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Div<f64> for DgnPoint {
    type Output = DgnPoint;
    fn div(self, scalar: f64) -> DgnPoint {
        DgnPoint::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl fmt::Display for DgnPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
