//! I/O module: header detection and file access configuration

pub mod sniff;

use std::fmt;
use std::io::{ErrorKind, Read};

use crate::options::DgnOptions;

pub use sniff::{dimension_of, test_open, ElementHeader, HeaderSignature};

/// Default number of bytes examined when opening a file.
pub const HEADER_SIZE: usize = 512;

/// Access mode requested when opening a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AccessMode {
    /// Read only
    #[default]
    Read,
    /// Read and write
    Update,
}

impl AccessMode {
    /// Map an update flag to an access mode
    pub fn from_update(update: bool) -> Self {
        if update {
            AccessMode::Update
        } else {
            AccessMode::Read
        }
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessMode::Read => write!(f, "read"),
            AccessMode::Update => write!(f, "update"),
        }
    }
}

/// Configuration options applied when opening a DGN file.
#[derive(Debug, Clone)]
pub struct DgnReaderConfiguration {
    /// Number of leading bytes read for format detection.
    ///
    /// Default: [`HEADER_SIZE`] (512).
    pub header_size: usize,

    /// Initial reader options for the handle.
    ///
    /// Default: empty.
    pub options: DgnOptions,
}

impl Default for DgnReaderConfiguration {
    fn default() -> Self {
        Self {
            header_size: HEADER_SIZE,
            options: DgnOptions::empty(),
        }
    }
}

/// Read up to `limit` bytes from the start of `reader`.
///
/// Stops early at end of stream; a short header is not an error.
pub(crate) fn read_header<R: Read>(reader: &mut R, limit: usize) -> std::io::Result<Vec<u8>> {
    let mut buffer = vec![0u8; limit];
    let mut filled = 0;
    while filled < limit {
        match reader.read(&mut buffer[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    buffer.truncate(filled);
    Ok(buffer)
}
