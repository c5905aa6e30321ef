//! Shared test utilities for dgnrust integration tests.
//!
//! Synthetic file builders, scratch path resolution and a reader that
//! counts live instances so tests can check that no stream is leaked.

#![allow(dead_code)]

use std::cell::Cell;
use std::io::{Cursor, Read, Seek, SeekFrom};
use std::path::PathBuf;
use std::rc::Rc;

pub const BIAS: u32 = 2147483648;

pub const DESIGN_2D: [u8; 4] = [0x08, 0x09, 0xFE, 0x02];
pub const DESIGN_3D: [u8; 4] = [0xC8, 0x09, 0xFE, 0x02];
pub const CELL_LIBRARY: [u8; 4] = [0x08, 0x05, 0x17, 0x00];

// ===========================================================================
// File builders
// ===========================================================================

/// Signature followed by zero padding up to `len` bytes.
pub fn header_bytes(signature: &[u8], len: usize) -> Vec<u8> {
    let mut bytes = signature.to_vec();
    bytes.resize(len.max(signature.len()), 0);
    bytes
}

/// Resolve path into the `test_output/` directory, creating it if needed.
pub fn test_output_path(filename: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_output");
    let _ = std::fs::create_dir_all(&dir);
    dir.join(filename)
}

/// Write `bytes` to a scratch file and return its path.
pub fn write_scratch(filename: &str, bytes: &[u8]) -> PathBuf {
    let path = test_output_path(filename);
    std::fs::write(&path, bytes).expect("write scratch file");
    path
}

// ===========================================================================
// Resource probe
// ===========================================================================

/// In-memory stream that tracks how many instances are alive.
#[derive(Debug)]
pub struct ProbeReader {
    inner: Cursor<Vec<u8>>,
    live: Rc<Cell<usize>>,
}

impl ProbeReader {
    pub fn new(bytes: Vec<u8>, live: &Rc<Cell<usize>>) -> Self {
        live.set(live.get() + 1);
        Self {
            inner: Cursor::new(bytes),
            live: Rc::clone(live),
        }
    }
}

impl Drop for ProbeReader {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

impl Read for ProbeReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.inner.read(buf)
    }
}

impl Seek for ProbeReader {
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
        self.inner.seek(pos)
    }
}
