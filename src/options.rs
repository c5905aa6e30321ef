//! Reader option flags

use bitflags::bitflags;

bitflags! {
    /// Flags controlling how elements are read from a handle.
    ///
    /// Bits not named here are kept as given and have no effect at this
    /// layer; element readers decide what they mean.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DgnOptions: u32 {
        /// Keep the raw binary payload of each element after it is read.
        /// Required to write an element back out. Off by default.
        const CAPTURE_RAW_DATA = 0x01;
    }
}

impl DgnOptions {
    /// Bits set that no named flag covers.
    pub fn unknown_bits(&self) -> u32 {
        self.bits() & !Self::all().bits()
    }
}
