//! Core value types: points, rectangles and the georeferencing transform

pub mod bounds;
pub mod point;
pub mod transform;

pub use bounds::{GeoBounds, UorBounds};
pub use point::DgnPoint;
pub use transform::{GeoTransform, UOR_BIAS};

/// Dimensionality of a design file, fixed by its first header byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Two,
    Three,
}

impl Dimension {
    /// 2 or 3
    pub fn value(&self) -> u8 {
        match self {
            Dimension::Two => 2,
            Dimension::Three => 3,
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}D", self.value())
    }
}
