//! Spatial filter and its conversion into native units.
//!
//! The filter is given in georeferenced coordinates, but elements carry
//! their extents in native units. Converting needs the scale and origin
//! from the TCB, which the element decoder reads some time after open.
//! Until then the filter stays in geo units; [`SpatialFilter::try_convert`]
//! is called again whenever the transform may have become available.

use crate::types::{DgnPoint, GeoBounds, GeoTransform, UorBounds};

/// Filter state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FilterState {
    /// No filtering
    #[default]
    Disabled,
    /// Bounds stored, transform not yet known
    Geo(GeoBounds),
    /// Bounds converted to native units
    Native { geo: GeoBounds, uor: UorBounds },
}

/// Rectangle restricting which elements a reader reports.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpatialFilter {
    state: FilterState,
}

impl SpatialFilter {
    /// Create a disabled filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Install new bounds, discarding any earlier conversion.
    ///
    /// All-zero bounds disable the filter.
    pub fn set(&mut self, bounds: GeoBounds) {
        self.state = if bounds.is_zero() {
            FilterState::Disabled
        } else {
            FilterState::Geo(bounds)
        };
    }

    /// Disable filtering
    pub fn clear(&mut self) {
        self.state = FilterState::Disabled;
    }

    /// Convert pending geo bounds into native units.
    ///
    /// Does nothing when the filter is disabled, already converted, or no
    /// transform is available. Returns `true` only when this call performed
    /// the conversion.
    ///
    /// Corners are converted independently and not re-sorted, so a
    /// negative scale yields an inverted native rectangle.
    pub fn try_convert(&mut self, transform: Option<&GeoTransform>) -> bool {
        let (geo, transform) = match (self.state, transform) {
            (FilterState::Geo(geo), Some(transform)) => (geo, transform),
            _ => return false,
        };

        let (min_x, min_y) = transform.to_uor(DgnPoint::xy(geo.min_x, geo.min_y));
        let (max_x, max_y) = transform.to_uor(DgnPoint::xy(geo.max_x, geo.max_y));

        self.state = FilterState::Native {
            geo,
            uor: UorBounds::new(min_x, min_y, max_x, max_y),
        };
        true
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// A filter is installed, converted or not
    pub fn is_present(&self) -> bool {
        !matches!(self.state, FilterState::Disabled)
    }

    /// The filter has been converted into native units
    pub fn is_converted(&self) -> bool {
        matches!(self.state, FilterState::Native { .. })
    }

    /// Bounds as given by the caller
    pub fn geo_bounds(&self) -> Option<GeoBounds> {
        match self.state {
            FilterState::Disabled => None,
            FilterState::Geo(geo) | FilterState::Native { geo, .. } => Some(geo),
        }
    }

    /// Bounds in native units, once converted
    pub fn uor_bounds(&self) -> Option<UorBounds> {
        match self.state {
            FilterState::Native { uor, .. } => Some(uor),
            _ => None,
        }
    }

    /// Whether an element with the given native extents passes the filter.
    ///
    /// Everything passes while the filter is disabled or still waiting for
    /// the transform. Once converted, elements without extents are
    /// rejected, and an inverted filter rectangle rejects everything.
    pub fn accepts(&self, extents: Option<&UorBounds>) -> bool {
        match (&self.state, extents) {
            (FilterState::Native { uor, .. }, Some(extents)) => uor.intersects(extents),
            (FilterState::Native { .. }, None) => false,
            _ => true,
        }
    }
}
