//! Open file handle.
//!
//! [`DgnHandle`] owns the underlying stream together with everything the
//! element readers need to know about the file: its dimension, reader
//! options, the georeferencing transform once the TCB has been read, the
//! spatial filter, and the element index cache.
//!
//! # Usage
//!
//! ```rust,no_run
//! use dgnrust::{DgnHandle, DgnOptions};
//!
//! let mut dgn = DgnHandle::open("sample.dgn", false)?;
//! dgn.set_options(DgnOptions::CAPTURE_RAW_DATA);
//! dgn.set_spatial_filter(1000.0, 2000.0, 1500.0, 2500.0);
//! println!("{}", dgn.dimension());
//! dgn.close();
//! # Ok::<(), dgnrust::DgnError>(())
//! ```
//!
//! Opening reads at most one header block; no elements are scanned.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use tracing::{debug, trace, warn};

use crate::error::{DgnError, Result};
use crate::filter::SpatialFilter;
use crate::index::ElementIndex;
use crate::io::{self, AccessMode, DgnReaderConfiguration, HeaderSignature};
use crate::notification::{NotificationCollection, NotificationType};
use crate::options::DgnOptions;
use crate::types::{DgnPoint, Dimension, GeoBounds, GeoTransform, UorBounds};

/// Position of an element relative to complex chains and shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplexRole {
    /// Ordinary element
    Standalone,
    /// Complex chain or shape header
    ComplexHeader,
    /// Element following a complex header, with the complex bit set
    Component,
}

/// Handle to an open DGN file.
///
/// Created by [`open`](DgnHandle::open) or
/// [`from_reader`](DgnHandle::from_reader); released by
/// [`close`](DgnHandle::close) or by dropping it.
#[derive(Debug)]
pub struct DgnHandle<R: Read + Seek = File> {
    stream: R,
    path: Option<PathBuf>,
    mode: AccessMode,
    signature: HeaderSignature,
    dimension: Dimension,
    options: DgnOptions,

    transform: GeoTransform,
    transform_known: bool,

    filter: SpatialFilter,
    in_complex_group: bool,
    select_complex_group: bool,

    element_index: Option<ElementIndex>,
    next_element_id: usize,

    notifications: NotificationCollection,
}

impl DgnHandle<File> {
    /// Open a DGN file.
    ///
    /// The file is opened read-only, or read+write when `update` is set,
    /// and its first header block is checked against the known DGN
    /// signatures.
    ///
    /// # Errors
    ///
    /// - [`DgnError::OpenFailed`] if the file cannot be opened in the
    ///   requested mode.
    /// - [`DgnError::FormatMismatch`] if the header is not a DGN header.
    ///   The file is closed before returning.
    pub fn open<P: AsRef<Path>>(path: P, update: bool) -> Result<Self> {
        Self::open_with_config(path, update, DgnReaderConfiguration::default())
    }

    /// Open a DGN file with explicit configuration.
    pub fn open_with_config<P: AsRef<Path>>(
        path: P,
        update: bool,
        config: DgnReaderConfiguration,
    ) -> Result<Self> {
        let path = path.as_ref();
        let mode = AccessMode::from_update(update);

        let file = OpenOptions::new()
            .read(true)
            .write(update)
            .open(path)
            .map_err(|source| {
                warn!(path = %path.display(), %mode, error = %source, "open failed");
                DgnError::OpenFailed {
                    path: path.to_path_buf(),
                    mode,
                    source,
                }
            })?;

        Self::init(file, Some(path.to_path_buf()), mode, config)
    }
}

impl<R: Read + Seek> DgnHandle<R> {
    /// Create a handle over any seekable byte stream.
    ///
    /// The stream is treated as read-only.
    pub fn from_reader(reader: R) -> Result<Self> {
        Self::from_reader_with_config(reader, DgnReaderConfiguration::default())
    }

    /// Create a handle over a stream with explicit configuration.
    pub fn from_reader_with_config(reader: R, config: DgnReaderConfiguration) -> Result<Self> {
        Self::init(reader, None, AccessMode::Read, config)
    }

    fn init(
        mut stream: R,
        path: Option<PathBuf>,
        mode: AccessMode,
        config: DgnReaderConfiguration,
    ) -> Result<Self> {
        let header = io::read_header(&mut stream, config.header_size)?;

        let signature = HeaderSignature::classify(&header);
        if signature == HeaderSignature::Unrecognized {
            let path = path.unwrap_or_else(|| PathBuf::from("<stream>"));
            debug!(path = %path.display(), "header does not match any DGN signature");
            // `stream` is dropped here, before the error reaches the caller.
            return Err(DgnError::FormatMismatch { path });
        }

        stream.seek(SeekFrom::Start(0))?;

        let dimension = io::dimension_of(&header);
        debug!(
            path = ?path,
            %mode,
            signature = signature.name(),
            %dimension,
            header_bytes = header.len(),
            "opened DGN file"
        );

        let mut handle = Self {
            stream,
            path,
            mode,
            signature,
            dimension,
            options: DgnOptions::empty(),
            transform: GeoTransform::IDENTITY,
            transform_known: false,
            filter: SpatialFilter::new(),
            in_complex_group: false,
            select_complex_group: false,
            element_index: None,
            next_element_id: 0,
            notifications: NotificationCollection::new(),
        };
        handle.set_options(config.options);
        Ok(handle)
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// 2D or 3D, as determined from the header at open time.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Signature recognized at open time
    pub fn signature(&self) -> HeaderSignature {
        self.signature
    }

    /// Path the handle was opened from, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Opened read+write
    pub fn is_update(&self) -> bool {
        self.mode == AccessMode::Update
    }

    pub fn options(&self) -> DgnOptions {
        self.options
    }

    /// Diagnostics collected since open
    pub fn notifications(&self) -> &NotificationCollection {
        &self.notifications
    }

    /// The underlying stream, for the element decoder.
    ///
    /// Positioned at the start of the file right after open.
    pub fn stream_mut(&mut self) -> &mut R {
        &mut self.stream
    }

    // -----------------------------------------------------------------------
    // Options
    // -----------------------------------------------------------------------

    /// Replace the reader options.
    ///
    /// Takes effect on subsequent element reads.
    pub fn set_options(&mut self, options: DgnOptions) {
        let unknown = options.unknown_bits();
        if unknown != 0 {
            self.notifications.notify(
                NotificationType::Ignored,
                format!("option bits {:#x} have no meaning to this library", unknown),
            );
        }
        self.options = options;
    }

    // -----------------------------------------------------------------------
    // Transform
    // -----------------------------------------------------------------------

    /// Scale and origin; identity until the TCB has been read.
    pub fn transform(&self) -> &GeoTransform {
        &self.transform
    }

    /// The TCB has been read and the transform is final
    pub fn is_transform_known(&self) -> bool {
        self.transform_known
    }

    /// Record the scale and origin read from the TCB element.
    ///
    /// Called by the element decoder. Only the first report is used; later
    /// ones are ignored. A pending spatial filter is converted right away.
    ///
    /// # Errors
    ///
    /// [`DgnError::InvalidTransform`] if `scale` is zero or not finite, or
    /// `origin` is not finite. The handle is left unchanged.
    pub fn report_tcb(&mut self, scale: f64, origin: DgnPoint) -> Result<()> {
        if self.transform_known {
            self.notifications.notify(
                NotificationType::Ignored,
                format!("repeated TCB (scale {}, origin {}) ignored", scale, origin),
            );
            return Ok(());
        }

        self.transform = GeoTransform::new(scale, origin)?;
        self.transform_known = true;
        debug!(scale, %origin, "TCB transform known");

        self.try_convert_filter();
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Spatial filter
    // -----------------------------------------------------------------------

    /// Set the rectangle for which elements are desired, in georeferenced
    /// coordinates.
    ///
    /// When all four values are zero the filter is disabled. Bounds are
    /// not validated or reordered. The filter only saves processing of
    /// elements outside it; every element is still read from disk.
    pub fn set_spatial_filter(&mut self, x_min: f64, y_min: f64, x_max: f64, y_max: f64) {
        let bounds = GeoBounds::new(x_min, y_min, x_max, y_max);
        self.filter.set(bounds);

        if !self.filter.is_present() {
            trace!("spatial filter disabled");
            return;
        }

        trace!(%bounds, "spatial filter set");
        self.try_convert_filter();
        if !self.filter.is_converted() {
            self.notifications.notify(
                NotificationType::Deferred,
                format!("spatial filter {} waits for the TCB", bounds),
            );
        }
    }

    /// Convert a pending spatial filter into native units if the transform
    /// is known. Safe to call any number of times.
    pub fn try_convert_filter(&mut self) {
        let transform = self.transform_known.then_some(&self.transform);
        if !self.filter.try_convert(transform) {
            return;
        }

        if let Some(uor) = self.filter.uor_bounds() {
            trace!(%uor, "spatial filter converted");
            if uor.is_inverted() {
                self.notifications.notify(
                    NotificationType::Warning,
                    format!("spatial filter converts to inverted range {}; nothing will match", uor),
                );
            }
        }
    }

    pub fn spatial_filter(&self) -> &SpatialFilter {
        &self.filter
    }

    /// Decide whether the element reader should report an element.
    ///
    /// `extents` are the element's native extents, `None` for elements
    /// without a bounding box. Components of a complex chain or shape
    /// follow the decision made for their header.
    pub fn select_element(&mut self, extents: Option<&UorBounds>, role: ComplexRole) -> bool {
        if !self.filter.is_present() {
            return true;
        }
        self.try_convert_filter();

        match role {
            ComplexRole::ComplexHeader => {
                let selected = self.filter.accepts(extents);
                self.in_complex_group = true;
                self.select_complex_group = selected;
                selected
            }
            ComplexRole::Component if self.in_complex_group => self.select_complex_group,
            ComplexRole::Component => self.filter.accepts(extents),
            ComplexRole::Standalone => {
                self.in_complex_group = false;
                self.filter.accepts(extents)
            }
        }
    }

    // -----------------------------------------------------------------------
    // Element ids and index
    // -----------------------------------------------------------------------

    /// Id the next element read will receive
    pub fn next_element_id(&self) -> usize {
        self.next_element_id
    }

    /// Hand out the next element id.
    pub fn allocate_element_id(&mut self) -> usize {
        let id = self.next_element_id;
        self.next_element_id += 1;
        id
    }

    /// Store an index built by the element scanner, replacing any earlier one.
    pub fn install_element_index(&mut self, index: ElementIndex) {
        debug!(elements = index.len(), "element index installed");
        self.element_index = Some(index);
    }

    pub fn element_index(&self) -> Option<&ElementIndex> {
        self.element_index.as_ref()
    }

    pub fn is_index_built(&self) -> bool {
        self.element_index.is_some()
    }

    /// Number of indexed elements; zero until the index is built
    pub fn element_count(&self) -> usize {
        self.element_index.as_ref().map_or(0, ElementIndex::len)
    }

    // -----------------------------------------------------------------------
    // Close
    // -----------------------------------------------------------------------

    /// Close the file and release the element index.
    pub fn close(self) {
        let Self {
            stream,
            path,
            element_index,
            ..
        } = self;
        debug!(
            path = ?path,
            index_built = element_index.is_some(),
            "closing DGN file"
        );
        drop(element_index);
        drop(stream);
    }
}
