//! Header signature detection.
//!
//! A design file starts directly with its first element. For 2D and 3D
//! design files that is the TCB (type 9 on level 8); a cell library starts
//! with a type 5 cell library header. The first four bytes are enough to
//! tell them apart:
//!
//! | bytes 0..4      | meaning          |
//! |-----------------|------------------|
//! | `08 05 17 00`   | cell library     |
//! | `08 09 FE 02`   | 2D design file   |
//! | `C8 09 FE 02`   | 3D design file   |

use byteorder::{ByteOrder, LittleEndian};

use crate::types::Dimension;

/// Bytes required before a header can be classified.
pub const MIN_SIGNATURE_BYTES: usize = 4;

const CELL_LIBRARY_SIGNATURE: [u8; 4] = [0x08, 0x05, 0x17, 0x00];
const DESIGN_SIGNATURE_TAIL: [u8; 3] = [0x09, 0xFE, 0x02];
const DESIGN_2D_LEAD: u8 = 0x08;
const DESIGN_3D_LEAD: u8 = 0xC8;

/// Test if a header block appears to come from a DGN file.
///
/// Buffers shorter than four bytes cannot be classified and are accepted;
/// any problem with such a file surfaces once elements are read.
pub fn test_open(header: &[u8]) -> bool {
    HeaderSignature::classify(header) != HeaderSignature::Unrecognized
}

/// Dimensionality implied by the first header byte.
///
/// Only `0xC8` marks a 3D file; everything else, including an empty
/// header, is treated as 2D.
pub fn dimension_of(header: &[u8]) -> Dimension {
    match header.first() {
        Some(&DESIGN_3D_LEAD) => Dimension::Three,
        _ => Dimension::Two,
    }
}

/// Outcome of inspecting the leading header bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderSignature {
    /// Fewer than four bytes were available
    Indeterminate,
    /// Cell library
    CellLibrary,
    /// 2D design file
    Design2D,
    /// 3D design file
    Design3D,
    /// Not a DGN header
    Unrecognized,
}

impl HeaderSignature {
    /// Classify a header block.
    pub fn classify(header: &[u8]) -> Self {
        if header.len() < MIN_SIGNATURE_BYTES {
            return HeaderSignature::Indeterminate;
        }

        if header[..4] == CELL_LIBRARY_SIGNATURE {
            return HeaderSignature::CellLibrary;
        }

        if header[1..4] != DESIGN_SIGNATURE_TAIL {
            return HeaderSignature::Unrecognized;
        }

        match header[0] {
            DESIGN_2D_LEAD => HeaderSignature::Design2D,
            DESIGN_3D_LEAD => HeaderSignature::Design3D,
            _ => HeaderSignature::Unrecognized,
        }
    }

    /// Human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            HeaderSignature::Indeterminate => "indeterminate",
            HeaderSignature::CellLibrary => "cell library",
            HeaderSignature::Design2D => "2D design file",
            HeaderSignature::Design3D => "3D design file",
            HeaderSignature::Unrecognized => "unrecognized",
        }
    }
}

/// The fixed 4-byte header that starts every element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementHeader {
    /// Level number (0..=63)
    pub level: u8,
    /// Element type (0..=127)
    pub element_type: u8,
    /// Element is part of a complex chain/shape/cell
    pub complex: bool,
    /// Element has been deleted
    pub deleted: bool,
    /// Number of 16-bit words following this header
    pub words_to_follow: u16,
}

impl ElementHeader {
    /// Size of the element header in bytes
    pub const SIZE: usize = 4;

    /// Decode an element header, or `None` when fewer than four bytes are
    /// available.
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        Some(Self {
            level: bytes[0] & 0x3F,
            complex: bytes[0] & 0x80 != 0,
            element_type: bytes[1] & 0x7F,
            deleted: bytes[1] & 0x80 != 0,
            words_to_follow: LittleEndian::read_u16(&bytes[2..4]),
        })
    }

    /// Total element size in bytes, header included
    pub fn element_size(&self) -> usize {
        Self::SIZE + self.words_to_follow as usize * 2
    }
}
