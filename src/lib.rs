//! # dgnrust
//!
//! A pure Rust access layer for MicroStation DGN (ISFF) binary design files.
//!
//! This crate covers opening a file and keeping the state element readers
//! depend on: format detection from the header, 2D/3D dimension, reader
//! options, the georeferencing transform from the TCB, and the spatial
//! filter converted into native units (UOR).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dgnrust::{DgnHandle, DgnPoint};
//!
//! let mut dgn = DgnHandle::open("sample.dgn", false)?;
//! dgn.set_spatial_filter(10.0, 20.0, 110.0, 120.0);
//!
//! // The element decoder reports the TCB once it has read it.
//! dgn.report_tcb(2.0, DgnPoint::ZERO)?;
//! assert!(dgn.spatial_filter().is_converted());
//!
//! dgn.close();
//! # Ok::<(), dgnrust::error::DgnError>(())
//! ```
//!
//! ## Architecture
//!
//! - `io::sniff` - header signature detection
//! - `DgnHandle` - open/close lifecycle and per-file state
//! - `SpatialFilter` - geo to native conversion, deferred until the TCB is known
//! - `ElementIndex` - element offset cache owned by the handle

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod filter;
pub mod handle;
pub mod index;
pub mod io;
pub mod notification;
pub mod options;
pub mod types;

// Re-export commonly used types
pub use error::{DgnError, ErrorCode, Result};
pub use filter::{FilterState, SpatialFilter};
pub use handle::{ComplexRole, DgnHandle};
pub use index::{ElementIndex, ElementInfo, ElementInfoFlags};
pub use io::{test_open, AccessMode, DgnReaderConfiguration, HeaderSignature, HEADER_SIZE};
pub use notification::{Notification, NotificationCollection, NotificationType};
pub use options::DgnOptions;
pub use types::{DgnPoint, Dimension, GeoBounds, GeoTransform, UorBounds};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
