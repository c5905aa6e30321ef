//! Georeferencing transform between native units (UOR) and real-world
//! coordinates.
//!
//! A design file stores coordinates as integers in "units of resolution".
//! The TCB element supplies a uniform scale and a global origin; the
//! forward mapping is `geo = native * scale + origin`, applied to each
//! axis independently.

use crate::error::{DgnError, Result};
use crate::types::DgnPoint;

/// Bias added to signed native coordinates to store them as `u32`.
pub const UOR_BIAS: f64 = 2147483648.0;

/// Scale and origin read from the TCB element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoTransform {
    /// Georeferenced units per native unit
    pub scale: f64,
    /// Georeferenced position of native (0, 0, 0)
    pub origin: DgnPoint,
}

impl GeoTransform {
    /// Identity transform used until the TCB has been read
    pub const IDENTITY: GeoTransform = GeoTransform {
        scale: 1.0,
        origin: DgnPoint::ZERO,
    };

    /// Create a transform, rejecting values that cannot be inverted
    pub fn new(scale: f64, origin: DgnPoint) -> Result<Self> {
        if !scale.is_finite() || scale == 0.0 {
            return Err(DgnError::InvalidTransform(format!(
                "scale must be finite and non-zero, got {}",
                scale
            )));
        }
        if !origin.is_finite() {
            return Err(DgnError::InvalidTransform(format!(
                "origin must be finite, got {}",
                origin
            )));
        }
        Ok(Self { scale, origin })
    }

    /// Map a native point to georeferenced coordinates
    pub fn transform_point(&self, native: DgnPoint) -> DgnPoint {
        native * self.scale + self.origin
    }

    /// Map a georeferenced point to native coordinates.
    ///
    /// Exact algebraic inverse of [`transform_point`](Self::transform_point).
    pub fn inverse_transform_point(&self, geo: DgnPoint) -> DgnPoint {
        (geo - self.origin) / self.scale
    }

    /// Georeferenced value to biased unsigned native coordinate.
    ///
    /// The fractional part is truncated. Values outside the `u32` range
    /// saturate to `0` or `u32::MAX`.
    pub fn to_uor(&self, geo: DgnPoint) -> (u32, u32) {
        let native = self.inverse_transform_point(geo);
        (bias(native.x), bias(native.y))
    }

    /// Biased unsigned native coordinate back to georeferenced space (z = 0).
    pub fn from_uor(&self, x: u32, y: u32) -> DgnPoint {
        let native = DgnPoint::xy(x as f64 - UOR_BIAS, y as f64 - UOR_BIAS);
        self.transform_point(native)
    }
}

impl Default for GeoTransform {
    fn default() -> Self {
        GeoTransform::IDENTITY
    }
}

fn bias(value: f64) -> u32 {
    (value + UOR_BIAS) as u32
}
